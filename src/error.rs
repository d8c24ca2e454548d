//! Error types for sequence generation and settings.

/// Errors surfaced at the crate boundary.
///
/// Generation itself cannot fail once its arguments are validated, so
/// `InvalidArgument` is the only variant `generate` ever returns.
#[derive(Debug, thiserror::Error)]
pub enum JosephusError {
    /// An argument is outside its documented bounds.
    #[error("invalid argument `{name}` = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: i64,
        reason: &'static str,
    },

    /// Settings file could not be read or written.
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings or export JSON is malformed.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl JosephusError {
    /// True for the argument-validation variant.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, JosephusError::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, JosephusError>;
