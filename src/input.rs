// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading integer sequences for the harness.
//!
//! Two formats:
//!
//! - **Text**: integers separated by whitespace and/or commas, optionally
//!   wrapped in `[` `]`. `"3 1 2"`, `"3,1,2"` and `"[3, 1, 2]"` are the same.
//! - **Json**: a JSON array of integers.
//!
//! Blank text is the empty sequence.

use std::fmt;
use std::fs;
use std::path::Path;

/// Input encoding accepted by [`read_sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Text,
    Json,
}

/// Why an input could not be turned into a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Token at `position` (0-based) is not a 64-bit integer.
    InvalidInteger { position: usize, token: String },
    /// Payload was not a JSON array of integers.
    Json(String),
    /// File could not be read.
    Io { path: String, message: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidInteger { position, token } => {
                write!(f, "token {} ('{}') is not an integer", position, token)
            }
            InputError::Json(message) => write!(f, "invalid JSON sequence: {}", message),
            InputError::Io { path, message } => {
                write!(f, "failed to read {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parse the text format.
pub fn parse_sequence(raw: &str) -> Result<Vec<i64>, InputError> {
    let trimmed = raw.trim();
    let body = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    body.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i64>().map_err(|_| InputError::InvalidInteger {
                position,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parse the JSON format.
pub fn parse_json_sequence(raw: &str) -> Result<Vec<i64>, InputError> {
    serde_json::from_str(raw).map_err(|e| InputError::Json(e.to_string()))
}

/// Parse `raw` in the given format.
pub fn parse(raw: &str, format: InputFormat) -> Result<Vec<i64>, InputError> {
    match format {
        InputFormat::Text => parse_sequence(raw),
        InputFormat::Json => parse_json_sequence(raw),
    }
}

/// Read and parse a file.
pub fn read_sequence(path: &Path, format: InputFormat) -> Result<Vec<i64>, InputError> {
    let raw = fs::read_to_string(path).map_err(|e| InputError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse(&raw, format)
}
