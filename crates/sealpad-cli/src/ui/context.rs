//! UI context for environment detection.

use std::io::IsTerminal;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    /// Whether stderr is a TTY (spinners draw there)
    pub stderr_tty: bool,
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Suppress informational output
    pub quiet: bool,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    pub fn from_env(quiet: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let stderr_tty = std::io::stderr().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        Self {
            is_tty,
            stderr_tty,
            color: is_tty && !no_color_env && !term_is_dumb,
            unicode: !term_is_dumb,
            quiet,
        }
    }

    /// Whether output should be decorated for humans.
    pub fn is_pretty(&self) -> bool {
        self.is_tty
    }

    /// Check if animations (spinners) are allowed.
    pub fn allows_animation(&self) -> bool {
        self.stderr_tty && !self.quiet
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            is_tty: false,
            stderr_tty: false,
            color: false,
            unicode: false,
            quiet: false,
        }
    }

    #[cfg(test)]
    pub fn pretty() -> Self {
        Self {
            is_tty: true,
            stderr_tty: true,
            color: false,
            unicode: true,
            quiet: false,
        }
    }
}
