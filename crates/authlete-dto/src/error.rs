//! Error types for the message catalog.

use thiserror::Error;

/// Errors raised while encoding, decoding or interpreting API messages.
#[derive(Debug, Error)]
pub enum DtoError {
    /// Malformed JSON, a missing mandatory field on an inbound record, or an
    /// enum value outside its declared variants.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// An outbound request lacks a mandatory field.
    #[error("{record} is missing mandatory field `{field}`")]
    MissingField {
        /// Record type name.
        record: &'static str,
        /// Wire name of the field.
        field: &'static str,
    },

    /// A symbolic name outside the enumeration.
    #[error("unknown {enumeration} value: {value}")]
    UnknownVariant {
        /// Enumeration type name.
        enumeration: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An ordinal outside the enumeration.
    #[error("unknown {enumeration} ordinal: {ordinal}")]
    UnknownOrdinal {
        /// Enumeration type name.
        enumeration: &'static str,
        /// The rejected ordinal.
        ordinal: u64,
    },

    /// `responseContent` cannot be carried in a response header.
    #[error("invalid value for header {header}: {reason}")]
    InvalidHeader {
        /// Header name.
        header: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl DtoError {
    /// Creates a missing-field error.
    #[must_use]
    pub const fn missing(record: &'static str, field: &'static str) -> Self {
        Self::MissingField { record, field }
    }

    /// Returns whether the error was caused by the caller's own record rather
    /// than by what the remote service sent.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::InvalidHeader { .. })
    }
}

/// Result type for catalog operations.
pub type DtoResult<T> = Result<T, DtoError>;
