// crates/failover-flag/src/lib.rs
// ============================================================================
// Module: Failover Flag Library
// Description: Bool-or-string flag values for configuration records.
// Purpose: Decode legacy string flags and boolean flags to one effective value.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! A config field such as `auto_failover` historically accepted the strings
//! `"true"`, `"false"`, and `"safe"`, and newer producers send a boolean.
//! This crate decodes either shape to a single effective boolean.
//!
//! - [`PolymorphicFlag`] keeps string inputs and re-encodes them as strings.
//! - [`CollapsedFlag`] always re-encodes as a boolean.
//! - [`FlagMode`] selects between the two at runtime.
//!
//! Only non-boolean, non-string tokens fail to decode ([`DecodeError`]).
//! Unrecognized strings resolve to `false`.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod collapsed;
pub mod error;
pub mod flag;
pub mod mode;
pub mod schema;
pub mod token;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use collapsed::CollapsedFlag;
pub use error::DecodeError;
pub use error::DecodeResult;
pub use error::TokenKind;
pub use flag::FALLBACK_TEXT;
pub use flag::PolymorphicFlag;
pub use mode::FlagMode;
pub use mode::FlagValue;
pub use mode::ResolvedFlag;
pub use mode::UnknownFlagMode;
pub use schema::flag_schema;
pub use schema::flag_schema_strict;
pub use token::CanonicalToken;
pub use token::FlagToken;
