// crates/failover-flag/src/token.rs
// ============================================================================
// Module: Flag Tokens
// Description: Raw wire tokens and the canonical string enum for flags.
// Purpose: Funnel every accepted wire shape into one tagged union.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A flag arrives on the wire as either a native boolean or a string. This
//! module captures that ambiguity as [`FlagToken`] and recognizes the three
//! canonical string values (`true`, `false`, `safe`) with ASCII
//! case-insensitive matching. Every other shape is a [`DecodeError`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::de;
use serde::de::MapAccess;
use serde::de::SeqAccess;
use serde::de::Visitor;
use serde_json::Value;

use crate::error::DecodeError;
use crate::error::DecodeResult;
use crate::error::TokenKind;

// ============================================================================
// SECTION: Canonical Tokens
// ============================================================================

/// Canonical string values recognized for a flag.
///
/// # Invariants
/// - Closed set; matching is ASCII case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalToken {
    /// Enabled.
    True,
    /// Disabled.
    False,
    /// Enabled in its conservative form; resolves to `true`.
    Safe,
}

impl CanonicalToken {
    /// All canonical tokens in wire order.
    pub const ALL: [Self; 3] = [Self::True, Self::False, Self::Safe];

    /// Recognizes a canonical token, ignoring ASCII case.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| text.eq_ignore_ascii_case(token.as_str()))
    }

    /// Returns the lowercase wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::Safe => "safe",
        }
    }

    /// Returns true when the token resolves to an enabled flag.
    #[must_use]
    pub const fn is_truthy(self) -> bool {
        matches!(self, Self::True | Self::Safe)
    }
}

impl fmt::Display for CanonicalToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Flag Token
// ============================================================================

/// One decoded wire token for a flag field.
///
/// # Invariants
/// - Only produced by decoding; the text payload is the input verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlagToken {
    /// Native boolean.
    Bool(bool),
    /// String, original case preserved.
    Text(String),
}

impl FlagToken {
    /// Decodes a JSON value into a token.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the value is neither a boolean nor a string.
    pub fn from_json(value: &Value) -> DecodeResult<Self> {
        match value {
            Value::Bool(flag) => Ok(Self::Bool(*flag)),
            Value::String(text) => Ok(Self::Text(text.clone())),
            other => Err(DecodeError::neither_bool_nor_string(TokenKind::of(other))),
        }
    }

    /// Returns the canonical token for a string payload, if recognized.
    #[must_use]
    pub fn canonical(&self) -> Option<CanonicalToken> {
        match self {
            Self::Bool(_) => None,
            Self::Text(text) => CanonicalToken::parse(text),
        }
    }

    /// Resolves the effective value: `true`, or a string equal to `true` or `safe`.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(flag) => *flag,
            Self::Text(text) => CanonicalToken::parse(text).is_some_and(CanonicalToken::is_truthy),
        }
    }
}

impl TryFrom<&Value> for FlagToken {
    type Error = DecodeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}

// ============================================================================
// SECTION: Serde Decoding
// ============================================================================

/// Rejects a token shape through the format's error type.
fn reject<E: de::Error>(found: TokenKind) -> E {
    E::custom(DecodeError::neither_bool_nor_string(found))
}

/// Visitor accepting only booleans and strings.
struct FlagTokenVisitor;

impl<'de> Visitor<'de> for FlagTokenVisitor {
    type Value = FlagToken;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a boolean or a string")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(FlagToken::Bool(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(FlagToken::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(FlagToken::Text(value))
    }

    fn visit_i64<E: de::Error>(self, _value: i64) -> Result<Self::Value, E> {
        Err(reject(TokenKind::Number))
    }

    fn visit_u64<E: de::Error>(self, _value: u64) -> Result<Self::Value, E> {
        Err(reject(TokenKind::Number))
    }

    fn visit_i128<E: de::Error>(self, _value: i128) -> Result<Self::Value, E> {
        Err(reject(TokenKind::Number))
    }

    fn visit_u128<E: de::Error>(self, _value: u128) -> Result<Self::Value, E> {
        Err(reject(TokenKind::Number))
    }

    fn visit_f64<E: de::Error>(self, _value: f64) -> Result<Self::Value, E> {
        Err(reject(TokenKind::Number))
    }

    fn visit_bytes<E: de::Error>(self, _value: &[u8]) -> Result<Self::Value, E> {
        Err(reject(TokenKind::Bytes))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(reject(TokenKind::Null))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(reject(TokenKind::Null))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<Self::Value, A::Error> {
        Err(reject(TokenKind::Array))
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<Self::Value, A::Error> {
        Err(reject(TokenKind::Object))
    }
}

impl<'de> Deserialize<'de> for FlagToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FlagTokenVisitor)
    }
}

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

    use super::CanonicalToken;
    use super::FlagToken;
    use crate::error::TokenKind;

    #[test]
    fn canonical_parse_ignores_ascii_case() {
        assert_eq!(CanonicalToken::parse("TRUE"), Some(CanonicalToken::True));
        assert_eq!(CanonicalToken::parse("fAlSe"), Some(CanonicalToken::False));
        assert_eq!(CanonicalToken::parse("Safe"), Some(CanonicalToken::Safe));
        assert_eq!(CanonicalToken::parse("yes"), None);
        assert_eq!(CanonicalToken::parse(""), None);
        assert_eq!(CanonicalToken::parse(" true"), None);
    }

    #[test]
    fn canonical_truthiness() {
        assert!(CanonicalToken::True.is_truthy());
        assert!(CanonicalToken::Safe.is_truthy());
        assert!(!CanonicalToken::False.is_truthy());
    }

    #[test]
    fn canonical_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_value(CanonicalToken::Safe).unwrap(), json!("safe"));
        let parsed: CanonicalToken = serde_json::from_value(json!("false")).unwrap();
        assert_eq!(parsed, CanonicalToken::False);
    }

    #[test]
    fn from_json_keeps_text_verbatim() {
        let token = FlagToken::from_json(&json!("SaFe")).unwrap();
        assert_eq!(token, FlagToken::Text("SaFe".to_string()));
        assert_eq!(token.canonical(), Some(CanonicalToken::Safe));
        assert!(token.is_truthy());
    }

    #[test]
    fn from_json_rejects_non_scalars() {
        let err = FlagToken::from_json(&json!({"a": 1})).unwrap_err();
        assert_eq!(err.found(), TokenKind::Object);
    }

    #[test]
    fn serde_visitor_rejects_numbers_with_decode_message() {
        let err = serde_json::from_str::<FlagToken>("42").unwrap_err();
        assert!(err.to_string().starts_with("value is neither boolean nor string (found number)"));
    }

    #[test]
    fn bool_tokens_have_no_canonical_form() {
        assert_eq!(FlagToken::Bool(true).canonical(), None);
        assert!(FlagToken::Bool(true).is_truthy());
        assert!(!FlagToken::Bool(false).is_truthy());
    }
}
