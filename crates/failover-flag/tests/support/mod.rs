// crates/failover-flag/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result helpers for flag integration tests.
// ============================================================================
//! ## Overview
//! Shared helpers for Result-based assertions across flag test suites.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]
#![allow(dead_code, reason = "Helpers are selectively used across suites.")]

use std::error::Error;
use std::fmt;

use serde_json::Value;

/// Standard result type used across flag integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition {
        Ok(())
    } else {
        Err(Box::new(TestError {
            message: message.into(),
        }))
    }
}

/// Returns an error when two JSON values differ.
///
/// # Errors
/// Returns a `TestError` describing both values on mismatch.
pub fn ensure_json(actual: &Value, expected: &Value, context: &str) -> TestResult {
    ensure(actual == expected, format!("{context}: expected {expected}, got {actual}"))
}

/// Returns every ASCII case variation of a short token.
pub fn case_variants(token: &str) -> Vec<String> {
    let chars: Vec<char> = token.chars().collect();
    let count = chars.len();
    (0 .. 1_u32 << count)
        .map(|mask| {
            chars
                .iter()
                .enumerate()
                .map(|(index, ch)| {
                    if mask & (1 << index) == 0 { ch.to_ascii_lowercase() } else { ch.to_ascii_uppercase() }
                })
                .collect()
        })
        .collect()
}
