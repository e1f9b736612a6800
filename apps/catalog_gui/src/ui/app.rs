//! App shell: egui event loop, form/list/pagination panels, and the native
//! confirmation dialog backing the controller's prompt capability.

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::Product;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::form::FormField;
use crate::controller::state::{CatalogController, ConfirmationPrompt};

/// Formats a price the way the catalog displays currency ("R$ 15,50").
fn format_currency(price: f64) -> String {
    format!("R$ {}", format_price_input(price))
}

/// Formats a price for the editable price field ("15,50").
fn format_price_input(price: f64) -> String {
    format!("{price:.2}").replace('.', ",")
}

/// Text buffers bound to the form inputs. The controller's draft holds the
/// parsed values; these hold what the user is typing.
#[derive(Default)]
struct FormBuffers {
    name: String,
    price: String,
    amount: String,
    description: String,
}

impl FormBuffers {
    fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: format_price_input(product.price),
            amount: product.amount.to_string(),
            description: product.description.clone(),
        }
    }

    fn required_fields_filled(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.price.trim().is_empty()
            && !self.amount.trim().is_empty()
    }
}

struct DialogConfirmationPrompt;

impl ConfirmationPrompt for DialogConfirmationPrompt {
    fn confirm(&self, message: &str) -> bool {
        let result = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title("Delete product")
            .set_description(message)
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        matches!(result, rfd::MessageDialogResult::Yes)
    }
}

pub struct CatalogApp {
    controller: CatalogController,
    ui_rx: Receiver<UiEvent>,
    form: FormBuffers,
    confirm: Box<dyn ConfirmationPrompt>,
}

impl CatalogApp {
    pub fn bootstrap(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            controller: CatalogController::new(cmd_tx),
            ui_rx,
            form: FormBuffers::default(),
            confirm: Box::new(DialogConfirmationPrompt),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            // A completed save replaces the draft with the template, so the
            // typed input goes with it.
            let reset_form = matches!(event, UiEvent::SaveCompleted);
            self.controller.handle_event(event);
            if reset_form {
                self.form = FormBuffers::default();
            }
        }
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        ui.heading(if self.controller.is_editing {
            "Edit Product"
        } else {
            "Add New Product"
        });
        ui.add_space(4.0);

        egui::Grid::new("product_form")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Name");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.form.name).hint_text("Ex: Gamer Mouse"),
                );
                if response.changed() {
                    self.controller.field_change(FormField::Name, &self.form.name);
                }
                ui.end_row();

                ui.label("Price (R$)");
                let response = ui
                    .add(egui::TextEdit::singleline(&mut self.form.price).hint_text("Ex: 15,50"));
                if response.changed() {
                    let raw = self.form.price.trim();
                    let value = if raw.is_empty() { None } else { Some(raw) };
                    self.controller.price_change(value);
                }
                ui.end_row();

                ui.label("Quantity");
                let response =
                    ui.add(egui::TextEdit::singleline(&mut self.form.amount).hint_text("Ex: 50"));
                if response.changed() {
                    self.controller
                        .field_change(FormField::Amount, &self.form.amount);
                }
                ui.end_row();

                ui.label("Description");
                let response = ui.add(
                    egui::TextEdit::multiline(&mut self.form.description)
                        .desired_rows(2)
                        .hint_text("Ex: Gamer mouse with RGB lighting..."),
                );
                if response.changed() {
                    self.controller
                        .field_change(FormField::Description, &self.form.description);
                }
                ui.end_row();
            });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let submit_label = if self.controller.is_editing {
                "Save Changes"
            } else {
                "Create Product"
            };
            let can_submit = self.form.required_fields_filled() && !self.controller.is_loading;
            if ui
                .add_enabled(can_submit, egui::Button::new(submit_label))
                .clicked()
            {
                self.controller.submit();
            }
            if self.controller.is_editing && ui.button("Cancel").clicked() {
                self.controller.cancel_edit();
                self.form = FormBuffers::default();
            }
        });
    }

    fn render_list(&mut self, ui: &mut egui::Ui) {
        if self.controller.products.is_empty() {
            ui.group(|ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(12.0);
                    ui.label("No products found.");
                    if ui.button("Refresh List").clicked() {
                        self.controller.refresh();
                    }
                    ui.add_space(12.0);
                });
            });
            return;
        }

        ui.horizontal(|ui| {
            ui.heading("Products");
            if ui.button("Refresh").clicked() {
                self.controller.refresh();
            }
        });
        ui.add_space(4.0);

        let products = self.controller.products.clone();
        egui::Grid::new("product_list")
            .num_columns(4)
            .striped(true)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.strong("Name");
                ui.strong("Price");
                ui.strong("Qty.");
                ui.strong("Actions");
                ui.end_row();

                for product in &products {
                    ui.label(&product.name);
                    ui.label(format_currency(product.price));
                    ui.label(product.amount.to_string());
                    ui.horizontal(|ui| {
                        if ui.button("Edit").clicked() {
                            self.form = FormBuffers::from_product(product);
                            self.controller.begin_edit(product.clone());
                        }
                        let deletable = product.id.is_some();
                        if ui
                            .add_enabled(deletable, egui::Button::new("Delete"))
                            .clicked()
                        {
                            if let Some(id) = product.id {
                                self.controller.request_delete(id, self.confirm.as_ref());
                            }
                        }
                    });
                    ui.end_row();
                }
            });
    }

    fn render_pagination(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let current = self.controller.current_page;
            let total = self.controller.total_pages;
            if ui
                .add_enabled(current > 1, egui::Button::new("Previous"))
                .clicked()
            {
                self.controller.request_page(current - 1);
            }
            ui.label(format!("Page {current} of {total}"));
            if ui
                .add_enabled(current < total, egui::Button::new("Next"))
                .clicked()
            {
                self.controller.request_page(current + 1);
            }
        });
    }
}

fn render_header(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.heading("Product Manager");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("Catalog");
        });
    });
}

fn render_error_banner(ui: &mut egui::Ui, message: &str) {
    ui.colored_label(egui::Color32::from_rgb(200, 60, 60), message);
    ui.add_space(4.0);
}

fn render_loader(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.spinner();
        ui.label("Loading products...");
        ui.add_space(24.0);
    });
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::top("header").show(ctx, |ui| render_header(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut scroll = egui::ScrollArea::vertical();
            if self.controller.scroll_form_into_view {
                scroll = scroll.vertical_scroll_offset(0.0);
                self.controller.scroll_form_into_view = false;
            }
            scroll.show(ui, |ui| {
                self.render_form(ui);
                ui.separator();
                if let Some(error) = self.controller.error.clone() {
                    render_error_banner(ui, &error);
                }
                if self.controller.is_loading {
                    render_loader(ui);
                } else {
                    self.render_list(ui);
                }
                if self.controller.show_pagination() {
                    self.render_pagination(ui);
                }
            });
        });

        // Backend events arrive off the UI thread; poll for them regularly.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
