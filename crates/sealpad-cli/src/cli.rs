use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use sealpad_core::VERSION;

/// Sealpad - a single encrypted note, sealed with one master password
#[derive(Parser)]
#[command(name = "sealpad")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the vault file (.json, or .html for a self-contained page)
    #[arg(long, global = true, env = "SEALPAD_PATH")]
    pub vault: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_input: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the vault will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Initial content (defaults to an empty note)
    #[arg(long)]
    pub content: Option<String>,

    /// Do not write a config file pointing at the new vault
    #[arg(long)]
    pub no_config: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// New content (overrides stdin)
    #[arg(long)]
    pub content: Option<String>,

    /// Append to the existing content instead of replacing it
    #[arg(long)]
    pub append: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new encrypted vault
    Init(InitArgs),

    /// Unlock the vault and print its content
    Show,

    /// Unlock the vault, replace or append content, and save
    Edit(EditArgs),

    /// Change the master password
    Passwd,

    /// Unlock the vault and print a summary (never the content)
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
