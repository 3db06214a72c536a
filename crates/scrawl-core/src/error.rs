//! Error types for board operations.

use crate::elements::{ElementId, ElementKind};
use thiserror::Error;

/// Errors raised by document, color and configuration operations.
///
/// [`Board::handle`](crate::board::Board::handle) never surfaces these to the
/// caller; it logs them and leaves the state untouched.
#[derive(Debug, Error, PartialEq)]
pub enum BoardError {
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
    #[error("Invalid thickness: {0}")]
    InvalidThickness(f64),
    #[error("Invalid font size: {0}")]
    InvalidFontSize(f64),
    #[error("Invalid viewport size: {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
    #[error("Element not found: {0}")]
    NotFound(ElementId),
    #[error("Element {0} is not in progress")]
    NotInProgress(ElementId),
    #[error("Element {id} is not a {expected}")]
    KindMismatch { id: ElementId, expected: ElementKind },
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
