// crates/failover-flag/src/flag.rs
// ============================================================================
// Module: String-Preserving Flag
// Description: Bool-or-string flag that re-encodes in its original shape.
// Purpose: Accept legacy string flags and boolean flags without breaking either.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! [`PolymorphicFlag`] decodes a boolean or one of the strings `true`,
//! `false`, `safe` (any ASCII case) and resolves it to a single effective
//! boolean. String inputs are kept so encoding reproduces the original shape.
//!
//! Unrecognized strings do not fail. They are replaced by the string `"false"`
//! and flagged through [`PolymorphicFlag::was_normalized`]. Legacy producers
//! depend on this leniency; tightening it is an API-breaking change.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde_json::Value;

use crate::error::DecodeResult;
use crate::token::CanonicalToken;
use crate::token::FlagToken;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Text stored in place of an unrecognized string.
pub const FALLBACK_TEXT: &str = "false";

// ============================================================================
// SECTION: Representation
// ============================================================================

/// Wire shape a [`PolymorphicFlag`] was decoded from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Representation {
    /// Native boolean.
    Bool,
    /// String form.
    Text {
        /// Original string, or [`FALLBACK_TEXT`] when unrecognized.
        raw: String,
        /// True when the original string was replaced by the fallback.
        normalized: bool,
    },
}

// ============================================================================
// SECTION: Polymorphic Flag
// ============================================================================

/// Flag decoded from a boolean or a canonical string, preserving the string.
///
/// # Invariants
/// - `effective` is `true` iff the input was `true`, `"true"`, or `"safe"`
///   (ASCII case-insensitive).
/// - A text representation always holds a canonical token in some case.
/// - Immutable after decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PolymorphicFlag {
    /// Resolved truth value.
    effective: bool,
    /// Original wire shape.
    repr: Representation,
}

impl PolymorphicFlag {
    /// Decodes a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DecodeError`] when the value is neither a boolean nor
    /// a string.
    pub fn decode(value: &Value) -> DecodeResult<Self> {
        FlagToken::from_json(value).map(Self::from_token)
    }

    /// Builds a flag from an already decoded token.
    #[must_use]
    pub fn from_token(token: FlagToken) -> Self {
        match token {
            FlagToken::Bool(effective) => Self {
                effective,
                repr: Representation::Bool,
            },
            FlagToken::Text(raw) => match CanonicalToken::parse(&raw) {
                Some(canonical) => Self {
                    effective: canonical.is_truthy(),
                    repr: Representation::Text {
                        raw,
                        normalized: false,
                    },
                },
                None => Self {
                    effective: false,
                    repr: Representation::Text {
                        raw: FALLBACK_TEXT.to_string(),
                        normalized: true,
                    },
                },
            },
        }
    }

    /// Encodes the flag in its original wire shape.
    #[must_use]
    pub fn encode(&self) -> Value {
        match &self.repr {
            Representation::Bool => Value::Bool(self.effective),
            Representation::Text {
                raw, ..
            } => Value::String(raw.clone()),
        }
    }

    /// Returns the effective value. Downstream logic should read only this.
    #[must_use]
    pub const fn as_bool(&self) -> bool {
        self.effective
    }

    /// Returns the stored string, or `"true"`/`"false"` for boolean inputs.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match &self.repr {
            Representation::Bool => bool_text(self.effective),
            Representation::Text {
                raw, ..
            } => raw,
        }
    }

    /// Returns true when the flag was decoded from a string.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self.repr, Representation::Text { .. })
    }

    /// Returns the stored string for string inputs.
    #[must_use]
    pub fn raw_text(&self) -> Option<&str> {
        match &self.repr {
            Representation::Bool => None,
            Representation::Text {
                raw, ..
            } => Some(raw),
        }
    }

    /// Returns true when an unrecognized string was replaced by `"false"`.
    #[must_use]
    pub const fn was_normalized(&self) -> bool {
        matches!(
            self.repr,
            Representation::Text {
                normalized: true,
                ..
            }
        )
    }
}

/// Spells a boolean the way the string form does.
pub(crate) const fn bool_text(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

impl Default for PolymorphicFlag {
    fn default() -> Self {
        Self::from_token(FlagToken::Bool(false))
    }
}

impl fmt::Display for PolymorphicFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

// ============================================================================
// SECTION: Serde
// ============================================================================

impl Serialize for PolymorphicFlag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.repr {
            Representation::Bool => serializer.serialize_bool(self.effective),
            Representation::Text {
                raw, ..
            } => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for PolymorphicFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        FlagToken::deserialize(deserializer).map(Self::from_token)
    }
}
