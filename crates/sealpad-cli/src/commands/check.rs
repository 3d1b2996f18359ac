use crate::app::AppContext;
use crate::ui::render::summary_table;

/// Unlock and summarize the vault without revealing its content.
pub fn handle_check(ctx: &AppContext<'_>) -> anyhow::Result<()> {
    let mut document = ctx.open_unlocked()?;
    let session = document.session();
    let content = session.content().unwrap_or_default();
    let rows = vec![
        ("Path", document.store().path().display().to_string()),
        ("Format", document.store().format().name().to_string()),
        ("State", session.state().as_str().to_string()),
        (
            "Content size",
            format!("{} chars, {} bytes", content.chars().count(), content.len()),
        ),
        ("Iterations", session.codec().iterations().to_string()),
    ];
    println!("{}", summary_table(ctx.ui(), &rows));

    document.lock();
    Ok(())
}
