//! Error types for field resolution

/// Errors produced by registry operations.
///
/// Field callbacks themselves are total and never error; the only failure
/// mode at this layer is addressing a field the registry does not know.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    /// The registry holds no descriptor under this name
    #[error("unknown field: {0}")]
    UnknownField(String),
}
