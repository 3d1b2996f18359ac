use crate::app::{read_new_password, AppContext};
use crate::ui::{badge, Badge};

pub fn handle_passwd(ctx: &AppContext<'_>) -> anyhow::Result<()> {
    let mut document = ctx.open_unlocked()?;
    let new_password = read_new_password(ctx)?;
    let task = document.session_mut().begin_rekey(&new_password)?;
    super::run_write(ctx, &mut document, task)?;
    document.lock();

    if !ctx.quiet() {
        println!("{}", badge(ctx.ui(), Badge::Ok, "Password changed"));
    }
    Ok(())
}
