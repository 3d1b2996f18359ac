use std::io::{self, IsTerminal, Read};

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::ui::{badge, Badge};

/// Take new content from `--content`, else from piped stdin.
///
/// Empty stdin is rejected; `--content ""` is the only way to clear a note.
fn read_content(content: Option<&str>) -> anyhow::Result<String> {
    if let Some(value) = content {
        return Ok(value.to_string());
    }

    if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        if buffer.is_empty() {
            return Err(CliError::invalid_input("No input provided on stdin").into());
        }
        return Ok(buffer);
    }

    Err(CliError::invalid_input("No content given. Use --content or pipe it via stdin.").into())
}

pub fn handle_edit(ctx: &AppContext<'_>, args: &EditArgs) -> anyhow::Result<()> {
    // Read before unlocking so stdin is not needed by the password prompt.
    let incoming = zeroize::Zeroizing::new(read_content(args.content.as_deref())?);
    let mut document = ctx.open_unlocked()?;

    let next = if args.append {
        let current = document.session().content().unwrap_or_default();
        format!("{}{}", current, incoming.as_str())
    } else {
        incoming.as_str().to_owned()
    };
    document.edit(next)?;

    let saved = if document.session().is_dirty() {
        let task = document.session_mut().begin_save(None)?;
        super::run_write(ctx, &mut document, task)?;
        true
    } else {
        false
    };
    document.lock();

    if !ctx.quiet() {
        let line = if saved {
            badge(ctx.ui(), Badge::Ok, "Saved")
        } else {
            badge(ctx.ui(), Badge::Info, "No changes")
        };
        println!("{}", line);
    }
    Ok(())
}
