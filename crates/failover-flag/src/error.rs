// crates/failover-flag/src/error.rs
// ============================================================================
// Module: Flag Decode Errors
// Description: Structured failures for flag token decoding.
// Purpose: Give the enclosing config loader one distinguishable error kind.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! Decoding a flag fails only when the wire token is neither a boolean nor a
//! string. Unrecognized strings are not errors; they degrade to `false` in the
//! decoders. Callers must treat [`DecodeError`] as fatal for the whole record.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Token Kinds
// ============================================================================

/// Wire shapes a flag decoder can reject.
///
/// # Invariants
/// - Never describes a boolean or string; those shapes always decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// JSON `null` or a unit/none value.
    Null,
    /// Integer or floating point number.
    Number,
    /// Array or sequence.
    Array,
    /// Object, map, or table.
    Object,
    /// Raw byte buffer.
    Bytes,
    /// Any other non-scalar shape a serde format may produce.
    Other,
}

impl TokenKind {
    /// Classifies a JSON value that is not a boolean or string.
    ///
    /// Booleans and strings classify as [`TokenKind::Other`]; callers only
    /// consult this after those shapes have been ruled out.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Number(_) => Self::Number,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
            Value::Bool(_) | Value::String(_) => Self::Other,
        }
    }

    /// Returns the lowercase name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Number => "number",
            Self::Array => "array",
            Self::Object => "object",
            Self::Bytes => "bytes",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Decode Error
// ============================================================================

/// Flag decoding errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The token was neither a boolean nor a string.
    #[error("value is neither boolean nor string (found {found})")]
    NeitherBoolNorString {
        /// Shape of the rejected token.
        found: TokenKind,
    },
}

impl DecodeError {
    /// Creates the error for a rejected token shape.
    #[must_use]
    pub const fn neither_bool_nor_string(found: TokenKind) -> Self {
        Self::NeitherBoolNorString {
            found,
        }
    }

    /// Returns the shape of the rejected token.
    #[must_use]
    pub const fn found(&self) -> TokenKind {
        match self {
            Self::NeitherBoolNorString {
                found,
            } => *found,
        }
    }
}

// ============================================================================
// SECTION: Result Alias
// ============================================================================

/// Result type for flag decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions are permitted."
    )]

    use serde_json::json;

    use super::DecodeError;
    use super::TokenKind;

    #[test]
    fn token_kind_classifies_rejected_shapes() {
        assert_eq!(TokenKind::of(&json!(null)), TokenKind::Null);
        assert_eq!(TokenKind::of(&json!(42)), TokenKind::Number);
        assert_eq!(TokenKind::of(&json!(1.5)), TokenKind::Number);
        assert_eq!(TokenKind::of(&json!([])), TokenKind::Array);
        assert_eq!(TokenKind::of(&json!({})), TokenKind::Object);
    }

    #[test]
    fn decode_error_message_names_found_kind() {
        let err = DecodeError::neither_bool_nor_string(TokenKind::Array);
        assert_eq!(err.to_string(), "value is neither boolean nor string (found array)");
        assert_eq!(err.found(), TokenKind::Array);
    }
}
