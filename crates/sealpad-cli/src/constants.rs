//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Resource not found (config, vault).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input, including rejected new passwords.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong password or damaged vault).
    pub const AUTH_FAILED: i32 = 5;
}

/// Environment variables read by the CLI.
pub mod env_vars {
    pub const CONFIG: &str = "SEALPAD_CONFIG";
    pub const PASSWORD: &str = "SEALPAD_PASSWORD";
    pub const NEW_PASSWORD: &str = "SEALPAD_NEW_PASSWORD";
    pub const NEW_PASSWORD_CONFIRM: &str = "SEALPAD_NEW_PASSWORD_CONFIRM";
}
