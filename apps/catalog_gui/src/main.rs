mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::CatalogApp;

#[derive(Debug, Parser)]
#[command(name = "catalog_gui", about = "Desktop manager for the product catalog")]
struct Args {
    /// Base URL of the catalog REST service.
    #[arg(long, env = "CATALOG_API_URL", default_value = "http://localhost:8080")]
    api_url: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(args.api_url.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Product Catalog Manager")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([720.0, 540.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Product Catalog Manager",
        options,
        Box::new(move |_cc| Ok(Box::new(CatalogApp::bootstrap(cmd_tx, ui_rx)))),
    )
}
