use std::io::Write;

use crate::app::AppContext;

/// Print the decrypted content to stdout, byte for byte.
pub fn handle_show(ctx: &AppContext<'_>) -> anyhow::Result<()> {
    let mut document = ctx.open_unlocked()?;
    let mut stdout = std::io::stdout().lock();
    if let Some(content) = document.session().content() {
        stdout.write_all(content.as_bytes())?;
        if ctx.ui().is_tty && !content.is_empty() && !content.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
    }
    stdout.flush()?;
    document.lock();
    Ok(())
}
