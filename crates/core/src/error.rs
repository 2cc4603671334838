//! Error types for the drift-field core.

use thiserror::Error;

/// Errors produced by field construction and the snapshot path.
///
/// Stepping and drawing are total functions and never fail; errors only
/// arise at the edges (validation, parsing, file output).
#[derive(Debug, Error)]
pub enum FieldError {
    /// Viewport width or height was zero, negative, or non-finite.
    #[error("invalid viewport: width and height must be finite and positive")]
    InvalidViewport,

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed from the given colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// A configuration value was out of its valid range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A snapshot could not be written.
    #[error("i/o error: {0}")]
    Io(String),
}
