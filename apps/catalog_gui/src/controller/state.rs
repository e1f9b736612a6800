//! The application controller: single owner of all mutable catalog UI state.
//!
//! Every mutation goes through a named operation; the backend worker is only
//! reached through queued commands and reports back through [`UiEvent`]s.
//! Whenever `current_page` changes (including its initial value) the page is
//! loaded exactly once, carrying a monotonically increasing sequence token so
//! that stale responses from superseded loads are discarded instead of racing
//! the latest one.

use crossbeam_channel::Sender;
use shared::domain::{Product, ProductId};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiErrorContext, UiEvent};
use crate::controller::form::{parse_amount, parse_price, FormField};
use crate::controller::orchestration::dispatch_backend_command;

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load products. Please try again.";
pub const SAVE_ERROR_MESSAGE: &str = "Failed to save product.";
pub const DELETE_ERROR_MESSAGE: &str = "Failed to delete product.";

/// Capability to ask the user a yes/no question before a destructive action.
/// The GUI backs this with a native dialog; tests inject a scripted answer.
pub trait ConfirmationPrompt {
    fn confirm(&self, message: &str) -> bool;
}

pub struct CatalogController {
    cmd_tx: Sender<BackendCommand>,

    pub products: Vec<Product>,
    pub draft: Product,
    pub is_editing: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    pub current_page: u32,
    pub total_pages: u32,

    /// Set by `begin_edit` so the view scrolls the form back into sight;
    /// cleared by the renderer once honored.
    pub scroll_form_into_view: bool,

    load_seq: u64,
}

impl CatalogController {
    /// Builds the controller and queues the initial load of page 1.
    pub fn new(cmd_tx: Sender<BackendCommand>) -> Self {
        let mut controller = Self {
            cmd_tx,
            products: Vec::new(),
            draft: Product::draft(),
            is_editing: false,
            is_loading: false,
            error: None,
            current_page: 1,
            total_pages: 1,
            scroll_form_into_view: false,
            load_seq: 0,
        };
        controller.load_current_page();
        controller
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.error);
    }

    fn load_current_page(&mut self) {
        self.is_loading = true;
        self.error = None;
        self.load_seq += 1;
        self.dispatch(BackendCommand::LoadPage {
            page: self.current_page,
            seq: self.load_seq,
        });
    }

    /// Navigates to `new_page` and reloads. Silently ignored when the page is
    /// out of `[1, total_pages]` or a load is already in flight.
    pub fn request_page(&mut self, new_page: u32) {
        if new_page >= 1 && new_page <= self.total_pages && !self.is_loading {
            self.current_page = new_page;
            self.load_current_page();
        }
    }

    /// Re-fetches from page 1 with a single request, whether or not the view
    /// is already there.
    pub fn refresh(&mut self) {
        self.current_page = 1;
        self.load_current_page();
    }

    pub fn begin_edit(&mut self, product: Product) {
        self.is_editing = true;
        self.draft = product;
        self.scroll_form_into_view = true;
    }

    pub fn cancel_edit(&mut self) {
        self.is_editing = false;
        self.draft = Product::draft();
    }

    pub fn field_change(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Name => self.draft.name = value.to_string(),
            FormField::Amount => self.draft.amount = parse_amount(value),
            FormField::Description => self.draft.description = value.to_string(),
        }
    }

    pub fn price_change(&mut self, value: Option<&str>) {
        self.draft.price = parse_price(value);
    }

    /// Persists the draft: an update when editing a product that already has
    /// an id, a create otherwise.
    pub fn submit(&mut self) {
        self.is_loading = true;
        self.error = None;
        let cmd = match (self.is_editing, self.draft.id) {
            (true, Some(id)) => BackendCommand::UpdateProduct {
                id,
                product: self.draft.clone(),
            },
            _ => BackendCommand::CreateProduct {
                draft: self.draft.clone(),
            },
        };
        self.dispatch(cmd);
    }

    /// Deletes `id` after interactive confirmation; a declined prompt is a
    /// no-op.
    pub fn request_delete(&mut self, id: ProductId, prompt: &dyn ConfirmationPrompt) {
        if prompt.confirm("Are you sure you want to delete this product?") {
            self.dispatch(BackendCommand::DeleteProduct { id });
        }
    }

    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1 && !self.is_loading
    }

    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::PageLoaded { seq, page } => {
                if seq != self.load_seq {
                    tracing::debug!(seq, current = self.load_seq, "discarding stale page response");
                    return;
                }
                self.products = page.data;
                self.total_pages = page.total_pages.max(1);
                self.current_page = page.current_page.max(1);
                self.is_loading = false;
            }
            UiEvent::PageLoadFailed { seq, message } => {
                if seq != self.load_seq {
                    tracing::debug!(seq, current = self.load_seq, "discarding stale load failure");
                    return;
                }
                tracing::error!("failed to load products: {message}");
                self.is_loading = false;
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
            UiEvent::SaveCompleted => {
                self.is_loading = false;
                self.cancel_edit();
                self.refresh();
            }
            UiEvent::DeleteCompleted => {
                self.refresh();
            }
            UiEvent::Info(message) => {
                tracing::info!("{message}");
            }
            UiEvent::Error(err) => {
                tracing::error!(context = ?err.context(), "backend error: {}", err.message());
                match err.context() {
                    UiErrorContext::Save => {
                        self.is_loading = false;
                        self.error = Some(SAVE_ERROR_MESSAGE.to_string());
                    }
                    UiErrorContext::Delete => {
                        self.error = Some(DELETE_ERROR_MESSAGE.to_string());
                    }
                    UiErrorContext::BackendStartup => {
                        self.is_loading = false;
                        self.error = Some(err.message().to_string());
                    }
                }
            }
        }
    }
}
