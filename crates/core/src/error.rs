//! Unified error types for label generation.

use tagpress_codes::CodeError;
use tagpress_render::RenderError;
use thiserror::Error;

/// The main error enum for all operations within the engine.
///
/// `Config` and `Validation` are pre-render failures raised before any
/// resource is allocated; everything else is a render-time failure that is
/// reported generically to callers.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Code generation error: {0}")]
    Code(#[from] CodeError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is a caller mistake (as opposed to an internal
    /// failure whose detail must not leak).
    pub fn is_rejection(&self) -> bool {
        matches!(self, Error::Config(_) | Error::Validation(_))
    }
}
