// crates/failover-flag/src/collapsed.rs
// ============================================================================
// Module: Boolean-Collapsing Flag
// Description: Bool-or-string flag that always re-encodes as a boolean.
// Purpose: Accept both producer shapes while emitting only the boolean form.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! [`CollapsedFlag`] accepts the same inputs as
//! [`crate::PolymorphicFlag`] but discards the textual form. Encoding is
//! lossy: a string input comes back as a boolean.

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde_json::Value;

use crate::error::DecodeResult;
use crate::flag::PolymorphicFlag;
use crate::flag::bool_text;
use crate::token::FlagToken;

/// Flag decoded from a boolean or string and kept only as a boolean.
///
/// # Invariants
/// - `effective` is `true` iff the input was `true`, `"true"`, or `"safe"`
///   (ASCII case-insensitive). Any other string resolves to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CollapsedFlag {
    /// Resolved truth value.
    effective: bool,
}

impl CollapsedFlag {
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
        Self {
            effective: token.is_truthy(),
        }
    }

    /// Encodes the flag as a JSON boolean.
    #[must_use]
    pub const fn encode(self) -> Value {
        Value::Bool(self.effective)
    }

    /// Returns the effective value.
    #[must_use]
    pub const fn as_bool(self) -> bool {
        self.effective
    }

    /// Returns `"true"` or `"false"`.
    #[must_use]
    pub const fn as_text(self) -> &'static str {
        bool_text(self.effective)
    }
}

impl From<PolymorphicFlag> for CollapsedFlag {
    fn from(flag: PolymorphicFlag) -> Self {
        Self {
            effective: flag.as_bool(),
        }
    }
}

impl From<&PolymorphicFlag> for CollapsedFlag {
    fn from(flag: &PolymorphicFlag) -> Self {
        Self {
            effective: flag.as_bool(),
        }
    }
}

impl fmt::Display for CollapsedFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

impl Serialize for CollapsedFlag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(self.effective)
    }
}

impl<'de> Deserialize<'de> for CollapsedFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        FlagToken::deserialize(deserializer).map(Self::from_token)
    }
}
