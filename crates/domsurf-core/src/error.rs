//! Error types for value encoding and selector construction.

use thiserror::Error;

/// Error raised when a typed value cannot be represented as encoded text.
///
/// The read path (`decode`) never raises; only encoding can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SerializationError {
    /// Non-finite numbers have no structured-text representation.
    #[error("non-finite number {value} is not representable in encoded text")]
    NonFiniteNumber { value: f64 },

    /// Structured serialization failed for another reason.
    ///
    /// Message-only because `serde_json::Error` is neither `Clone` nor
    /// `PartialEq`.
    #[error("structured value serialization failed: {message}")]
    Structured { message: String },
}

/// Error raised when a selector fragment cannot be built for a value.
///
/// A selector that silently dropped its value constraint could match the
/// wrong elements, so encoding failures propagate instead of degrading
/// to a presence-only fragment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectorError {
    #[error("cannot encode value for selector fragment on {name:?}")]
    Encode {
        name: String,
        #[source]
        source: SerializationError,
    },
}

impl SelectorError {
    /// The property name the failing fragment was being built for.
    pub fn property_name(&self) -> &str {
        match self {
            SelectorError::Encode { name, .. } => name,
        }
    }
}
