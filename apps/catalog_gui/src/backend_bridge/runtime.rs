//! Backend worker: a dedicated thread owning a tokio runtime and the HTTP
//! client, executing queued UI commands and reporting results as events.

use client_core::{CatalogClient, DEFAULT_PAGE_SIZE};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(api_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("Backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = CatalogClient::new(api_url);
            tracing::info!(base_url = client.base_url(), "backend worker ready");
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadPage { page, seq } => {
                        tracing::info!(page, "backend: load_page");
                        match client.list_products(page, DEFAULT_PAGE_SIZE).await {
                            Ok(body) => {
                                let _ = ui_tx.try_send(UiEvent::PageLoaded { seq, page: body });
                            }
                            Err(err) => {
                                tracing::error!(page, "backend: load_page failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::PageLoadFailed {
                                    seq,
                                    message: err.to_string(),
                                });
                            }
                        }
                    }
                    BackendCommand::CreateProduct { draft } => {
                        tracing::info!(name = %draft.name, "backend: create_product");
                        match client.create_product(&draft).await {
                            Ok(created) => {
                                tracing::info!(
                                    product_id = created.id.map(|id| id.0),
                                    "backend: product created"
                                );
                                let _ = ui_tx.try_send(UiEvent::SaveCompleted);
                            }
                            Err(err) => {
                                tracing::error!("backend: create_product failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                    UiErrorContext::Save,
                                    err.to_string(),
                                )));
                            }
                        }
                    }
                    BackendCommand::UpdateProduct { id, product } => {
                        tracing::info!(product_id = id.0, "backend: update_product");
                        match client.update_product(id, &product).await {
                            Ok(_) => {
                                let _ = ui_tx.try_send(UiEvent::SaveCompleted);
                            }
                            Err(err) => {
                                tracing::error!(
                                    product_id = id.0,
                                    "backend: update_product failed: {err}"
                                );
                                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                    UiErrorContext::Save,
                                    err.to_string(),
                                )));
                            }
                        }
                    }
                    BackendCommand::DeleteProduct { id } => {
                        tracing::info!(product_id = id.0, "backend: delete_product");
                        match client.delete_product(id).await {
                            Ok(()) => {
                                let _ = ui_tx.try_send(UiEvent::DeleteCompleted);
                            }
                            Err(err) => {
                                tracing::error!(
                                    product_id = id.0,
                                    "backend: delete_product failed: {err}"
                                );
                                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                    UiErrorContext::Delete,
                                    err.to_string(),
                                )));
                            }
                        }
                    }
                }
            }
        });
    });
}
