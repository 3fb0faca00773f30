//! Carries controller commands out to the host.

use host_client::HostApi;

use crate::controller::events::UiCommand;

/// Runs `cmd` against the host. The newspaper has nothing to show the reader
/// when the host is unreachable, so failures are only logged.
pub async fn dispatch_host_command<H: HostApi + ?Sized>(host: &H, cmd: UiCommand) {
    let result = match cmd {
        UiCommand::CloseUi => host.close_ui().await,
    };
    match result {
        Ok(()) => tracing::debug!(command = cmd.name(), "host command delivered"),
        Err(err) => tracing::debug!(command = cmd.name(), error = %err, "host command failed"),
    }
}
