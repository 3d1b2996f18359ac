//! Sealpad CLI - a single encrypted note behind one master password
//!
//! Thin presentation layer over `sealpad-core`: it resolves paths, prompts
//! for passwords, and renders results. All vault state lives in the core
//! session.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod ui;

use clap::Parser;
use sealpad_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{check, edit, init, misc, passwd, show};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);
    logging::init(cli.verbose, ctx.log_level().as_deref());

    if let Err(e) = run(&ctx, &cli) {
        let (message, hint) = split_hint(&e.to_string());
        print_error(ctx.ui(), &message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Split a trailing "Hint: ..." section off an error message.
fn split_hint(error: &str) -> (String, Option<String>) {
    match error.find("\nHint:") {
        Some(idx) => (error[..idx].to_string(), Some(error[idx + 1..].to_string())),
        None => (error.to_string(), None),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args)?,
        Some(Commands::Show) => show::handle_show(ctx)?,
        Some(Commands::Edit(args)) => edit::handle_edit(ctx, args)?,
        Some(Commands::Passwd) => passwd::handle_passwd(ctx)?,
        Some(Commands::Check) => check::handle_check(ctx)?,
        Some(Commands::Completions(args)) => misc::handle_completions(args)?,
        None => {
            println!("Sealpad v{}", VERSION);
            println!("\nQuickstart:");
            println!("  sealpad init");
            println!("  sealpad edit --content \"Hello\"");
            println!("  sealpad show");
            println!("\nRun `sealpad --help` for full usage.");
        }
    }

    Ok(())
}
