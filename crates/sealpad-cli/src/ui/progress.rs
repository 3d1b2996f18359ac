//! Spinner for the slow key derivation step, using indicatif.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::context::UiContext;

/// A spinner drawn on stderr while a blocking task runs.
///
/// Does nothing when stderr is not a terminal or in quiet mode.
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    /// Create and start a spinner with the given message.
    pub fn start(ctx: &UiContext, message: &str) -> Self {
        if !ctx.allows_animation() {
            return Self { bar: None };
        }
        let bar = ProgressBar::new_spinner();
        let (template, ticks): (&str, &[&str]) = if ctx.unicode {
            (
                "{spinner:.cyan} {msg}...",
                &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", ""],
            )
        } else {
            ("{spinner} {msg}...", &["|", "/", "-", "\\", ""])
        };
        if let Ok(style) = ProgressStyle::default_spinner().template(template) {
            bar.set_style(style.tick_strings(ticks));
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(bar) }
    }

    /// Run `work` with the spinner active, clearing it afterwards.
    pub fn run<T>(ctx: &UiContext, message: &str, work: impl FnOnce() -> T) -> T {
        let spinner = Self::start(ctx, message);
        let result = work();
        spinner.clear();
        result
    }

    /// Remove the spinner line.
    pub fn clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.clear();
    }
}
