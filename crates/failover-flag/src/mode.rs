// crates/failover-flag/src/mode.rs
// ============================================================================
// Module: Flag Modes
// Description: Runtime-selectable decode/encode policy for flag fields.
// Purpose: Let a config loader choose between preserving and collapsing.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Both flag types implement [`FlagValue`], so consumers can read a flag
//! without caring which policy decoded it. [`FlagMode`] picks the policy at
//! runtime and is itself a config value (`preserve_text` or
//! `collapse_to_bool`).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::collapsed::CollapsedFlag;
use crate::error::DecodeResult;
use crate::flag::PolymorphicFlag;
use crate::token::FlagToken;

// ============================================================================
// SECTION: Flag Value Trait
// ============================================================================

/// Read and encode access shared by every flag policy.
pub trait FlagValue {
    /// Returns the effective value.
    fn as_bool(&self) -> bool;

    /// Returns the text form of the flag.
    fn as_text(&self) -> &str;

    /// Encodes the flag as a JSON scalar.
    fn encode(&self) -> Value;
}

impl FlagValue for PolymorphicFlag {
    fn as_bool(&self) -> bool {
        Self::as_bool(self)
    }

    fn as_text(&self) -> &str {
        Self::as_text(self)
    }

    fn encode(&self) -> Value {
        Self::encode(self)
    }
}

impl FlagValue for CollapsedFlag {
    fn as_bool(&self) -> bool {
        Self::as_bool(*self)
    }

    fn as_text(&self) -> &str {
        Self::as_text(*self)
    }

    fn encode(&self) -> Value {
        Self::encode(*self)
    }
}

// ============================================================================
// SECTION: Flag Mode
// ============================================================================

/// Decode/encode policy for flag fields.
///
/// # Invariants
/// - Both modes resolve identical effective values; they differ only in
///   encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagMode {
    /// Keep string inputs as strings when encoding (legacy behavior).
    #[default]
    PreserveText,
    /// Encode every flag as a boolean.
    CollapseToBool,
}

impl FlagMode {
    /// Returns the config spelling of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreserveText => "preserve_text",
            Self::CollapseToBool => "collapse_to_bool",
        }
    }

    /// Builds a flag from a decoded token under this mode.
    #[must_use]
    pub fn from_token(self, token: FlagToken) -> ResolvedFlag {
        match self {
            Self::PreserveText => ResolvedFlag::Preserved(PolymorphicFlag::from_token(token)),
            Self::CollapseToBool => ResolvedFlag::Collapsed(CollapsedFlag::from_token(token)),
        }
    }

    /// Decodes a JSON value under this mode.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DecodeError`] when the value is neither a boolean nor
    /// a string.
    pub fn decode(self, value: &Value) -> DecodeResult<ResolvedFlag> {
        FlagToken::from_json(value).map(|token| self.from_token(token))
    }

    /// Decodes and re-encodes a JSON value under this mode.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DecodeError`] when the value is neither a boolean nor
    /// a string.
    pub fn normalize(self, value: &Value) -> DecodeResult<Value> {
        self.decode(value).map(|flag| flag.encode())
    }
}

impl fmt::Display for FlagMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a flag mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown flag mode: {name} (expected preserve_text or collapse_to_bool)")]
pub struct UnknownFlagMode {
    /// Name that failed to parse.
    pub name: String,
}

impl FromStr for FlagMode {
    type Err = UnknownFlagMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "preserve_text" => Ok(Self::PreserveText),
            "collapse_to_bool" => Ok(Self::CollapseToBool),
            other => Err(UnknownFlagMode {
                name: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// SECTION: Resolved Flag
// ============================================================================

/// Flag decoded under a runtime-selected [`FlagMode`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedFlag {
    /// Decoded with [`FlagMode::PreserveText`].
    Preserved(PolymorphicFlag),
    /// Decoded with [`FlagMode::CollapseToBool`].
    Collapsed(CollapsedFlag),
}

impl ResolvedFlag {
    /// Returns the mode that produced this flag.
    #[must_use]
    pub const fn mode(&self) -> FlagMode {
        match self {
            Self::Preserved(_) => FlagMode::PreserveText,
            Self::Collapsed(_) => FlagMode::CollapseToBool,
        }
    }
}

impl FlagValue for ResolvedFlag {
    fn as_bool(&self) -> bool {
        match self {
            Self::Preserved(flag) => flag.as_bool(),
            Self::Collapsed(flag) => flag.as_bool(),
        }
    }

    fn as_text(&self) -> &str {
        match self {
            Self::Preserved(flag) => flag.as_text(),
            Self::Collapsed(flag) => flag.as_text(),
        }
    }

    fn encode(&self) -> Value {
        match self {
            Self::Preserved(flag) => flag.encode(),
            Self::Collapsed(flag) => flag.encode(),
        }
    }
}
