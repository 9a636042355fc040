// crates/failover-flag/src/schema.rs
// ============================================================================
// Module: Flag Schemas
// Description: JSON schema fragments for flag fields.
// Purpose: Describe the accepted wire shapes for config tooling and docs.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! [`flag_schema`] describes what the decoders accept today: any boolean or
//! string. [`flag_schema_strict`] describes the canonical subset and is meant
//! for tooling that wants to warn about values the decoders would normalize.

use serde_json::Value;
use serde_json::json;

use crate::token::CanonicalToken;

/// Case-insensitive match for the canonical tokens, spelled without inline flags.
pub const STRICT_PATTERN: &str = "^([Tt][Rr][Uu][Ee]|[Ff][Aa][Ll][Ss][Ee]|[Ss][Aa][Ff][Ee])$";

/// Returns the JSON schema fragment for a flag field.
#[must_use]
pub fn flag_schema() -> Value {
    json!({
        "description": "Boolean, or one of the strings true/false/safe (case-insensitive). Unrecognized strings resolve to false.",
        "oneOf": [
            { "type": "boolean" },
            {
                "type": "string",
                "examples": canonical_names(),
            }
        ]
    })
}

/// Returns the JSON schema fragment accepting only canonical flag values.
#[must_use]
pub fn flag_schema_strict() -> Value {
    json!({
        "description": "Boolean, or one of the strings true/false/safe (case-insensitive).",
        "oneOf": [
            { "type": "boolean" },
            {
                "type": "string",
                "pattern": STRICT_PATTERN,
            }
        ]
    })
}

/// Returns the canonical token names in wire order.
fn canonical_names() -> Vec<&'static str> {
    CanonicalToken::ALL.into_iter().map(CanonicalToken::as_str).collect()
}
