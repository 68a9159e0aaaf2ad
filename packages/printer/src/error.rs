//! Printer Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrintError {
    /// The input does not match the message AST shape, e.g. an unknown format `type`
    #[error("malformed message: {0}")]
    MalformedMessage(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PrintError>;
