// src/cli/input.rs
use thiserror::Error;

use crate::models::{MAX_LENGTH, MIN_LENGTH};

/// Length used when the length field is left empty.
pub const FALLBACK_LENGTH: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("The count must be an integer between 1 and 10,000.")]
    InvalidCount,

    #[error("The length must be an integer between {min} and {max}.", min = MIN_LENGTH, max = MAX_LENGTH)]
    NotAnInteger,

    #[error("Invalid length. Use between {min} and {max}.", min = MIN_LENGTH, max = MAX_LENGTH)]
    LengthOutOfRange,
}

pub fn parse_count(raw: &str) -> Result<usize, InputError> {
    // Range is left to the generator so its error names the bad value
    raw.trim().parse::<usize>().map_err(|_| InputError::InvalidCount)
}

pub fn parse_length(raw: &str) -> Result<usize, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(FALLBACK_LENGTH);
    }

    let length: usize = raw.parse().map_err(|_| InputError::NotAnInteger)?;
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(InputError::LengthOutOfRange);
    }
    Ok(length)
}
