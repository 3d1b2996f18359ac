pub mod check;
pub mod edit;
pub mod init;
pub mod misc;
pub mod passwd;
pub mod show;

use sealpad_core::session::WriteTask;
use sealpad_core::{DocumentStore, VaultDocument};

use crate::app::AppContext;
use crate::ui::progress::Spinner;

/// Run a write task under the spinner and persist its result.
pub(crate) fn run_write<S: DocumentStore>(
    ctx: &AppContext<'_>,
    document: &mut VaultDocument<S>,
    task: WriteTask,
) -> anyhow::Result<()> {
    let kind = task.kind();
    let outcome = Spinner::run(ctx.ui(), "Encrypting", || task.run());
    document.complete_write(outcome)?;
    tracing::debug!(?kind, "write complete");
    Ok(())
}
