use thiserror::Error;

/// Engine error types.
///
/// Parameter validation problems are deliberately not errors: they are
/// reported through [`crate::types::Validation`] so callers can surface all
/// violations at once.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Registry lookup failed; no default indicator exists.
    #[error("unknown indicator type: {0}")]
    UnknownIndicator(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
