//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    error: &mut Option<String>,
) {
    let cmd_name = match &cmd {
        BackendCommand::LoadPage { .. } => "load_page",
        BackendCommand::CreateProduct { .. } => "create_product",
        BackendCommand::UpdateProduct { .. } => "update_product",
        BackendCommand::DeleteProduct { .. } => "delete_product",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *error = Some("Command queue is full; please retry".to_string());
        }
        Err(TrySendError::Disconnected(_)) => {
            *error = Some(
                "Backend command processor disconnected (possible startup/runtime failure); restart the app"
                    .to_string(),
            );
        }
    }
}
