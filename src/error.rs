//! Error types and handling for Rentdesk
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Rentdesk operations
#[derive(Error, Diagnostic, Debug)]
pub enum RentdeskError {
    // Cart errors
    #[error("Failed to read cart file: {path}")]
    #[diagnostic(
        code(rentdesk::cart::read_failed),
        help("Check that the cart file is readable, or pass --cart-file to use another location")
    )]
    CartReadFailed { path: String, reason: String },

    #[error("Failed to write cart file: {path}")]
    #[diagnostic(code(rentdesk::cart::write_failed))]
    CartWriteFailed { path: String, reason: String },

    #[error("Failed to parse cart file: {path}")]
    #[diagnostic(
        code(rentdesk::cart::parse_failed),
        help("The cart file is not valid JSON. Remove it or run 'rentdesk cart --clear'")
    )]
    CartParseFailed { path: String, reason: String },

    #[error("Line item '{id}' not found in cart")]
    #[diagnostic(
        code(rentdesk::cart::item_not_found),
        help("Run 'rentdesk cart' to list item ids")
    )]
    LineItemNotFound { id: String },

    // Settings errors
    #[error("Settings file not found: {path}")]
    #[diagnostic(code(rentdesk::settings::not_found))]
    SettingsNotFound { path: String },

    #[error("Failed to parse settings file: {path}")]
    #[diagnostic(
        code(rentdesk::settings::parse_failed),
        help("Settings must be YAML with 'symbol' and 'code' string fields")
    )]
    SettingsParseFailed { path: String, reason: String },

    // Terminal prompt errors
    #[error("Prompt failed: {message}")]
    #[diagnostic(code(rentdesk::ui::prompt_failed))]
    PromptFailed { message: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(rentdesk::fs::io_error))]
    IoError { message: String },
}

/// Convenience constructors keeping call sites terse
pub fn cart_read_failed(path: impl Into<String>, reason: impl Into<String>) -> RentdeskError {
    RentdeskError::CartReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn cart_write_failed(path: impl Into<String>, reason: impl Into<String>) -> RentdeskError {
    RentdeskError::CartWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn cart_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> RentdeskError {
    RentdeskError::CartParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn settings_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> RentdeskError {
    RentdeskError::SettingsParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

impl From<std::io::Error> for RentdeskError {
    fn from(err: std::io::Error) -> Self {
        RentdeskError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RentdeskError {
    fn from(err: serde_json::Error) -> Self {
        RentdeskError::CartParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for RentdeskError {
    fn from(err: serde_yaml::Error) -> Self {
        RentdeskError::SettingsParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for RentdeskError {
    fn from(err: inquire::InquireError) -> Self {
        RentdeskError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RentdeskError>;
