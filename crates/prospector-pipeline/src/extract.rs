//! Isolating the JSON array inside the search service's free text.
//!
//! The service is asked for JSON only but routinely wraps it in prose or
//! code fences. Two strategies are available:
//!
//! - [`ExtractStrategy::BracketSpan`] takes everything from the first `[` to
//!   the last `]`. Prose containing brackets on both sides of the array makes
//!   this fail with [`MalformedResponse::InvalidJson`].
//! - [`ExtractStrategy::BalancedArray`] scans forward from each `[` for a
//!   string-aware balanced span and keeps the first one that parses.

use prospector_core::ExtractStrategy;
use serde_json::Value;

use crate::error::MalformedResponse;

/// Extracts the JSON array using the default bracket-span strategy.
///
/// # Errors
///
/// Returns [`MalformedResponse::NoArrayDelimiters`] when the text has no `[`,
/// no `]`, or its last `]` precedes its first `[`, and
/// [`MalformedResponse::InvalidJson`] when the span is not a JSON array.
pub fn extract_json_array(text: &str) -> Result<Vec<Value>, MalformedResponse> {
    extract_with_strategy(text, ExtractStrategy::BracketSpan)
}

/// Extracts the JSON array using `strategy`.
///
/// # Errors
///
/// See [`extract_json_array`]. The balanced strategy additionally returns
/// [`MalformedResponse::UnterminatedArray`] when no `[` is ever closed.
pub fn extract_with_strategy(
    text: &str,
    strategy: ExtractStrategy,
) -> Result<Vec<Value>, MalformedResponse> {
    match strategy {
        ExtractStrategy::BracketSpan => {
            let span = bracket_span(text).ok_or(MalformedResponse::NoArrayDelimiters)?;
            Ok(serde_json::from_str::<Vec<Value>>(span)?)
        }
        ExtractStrategy::BalancedArray => balanced(text),
    }
}

fn bracket_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

fn balanced(text: &str) -> Result<Vec<Value>, MalformedResponse> {
    if !text.contains('[') {
        return Err(MalformedResponse::NoArrayDelimiters);
    }

    let mut first_error = None;
    for (start, _) in text.match_indices('[') {
        let Some(span) = balanced_array_at(&text[start..]) else {
            continue;
        };
        match serde_json::from_str::<Vec<Value>>(span) {
            Ok(values) => return Ok(values),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    Err(first_error.map_or(MalformedResponse::UnterminatedArray, MalformedResponse::from))
}

/// Returns the prefix of `s` (which must start with `[`) up to the `]` that
/// brings bracket depth back to zero, skipping brackets inside JSON strings.
fn balanced_array_at(s: &str) -> Option<&str> {
    if !s.starts_with('[') {
        return None;
    }
    let mut depth: i32 = 0;
    let mut in_string = false;
    let mut escape = false;
    for (i, c) in s.char_indices() {
        if escape {
            escape = false;
            continue;
        }
        if in_string {
            match c {
                '\\' => escape = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '[' | '{' => depth += 1,
            '}' => depth -= 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&s[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}
