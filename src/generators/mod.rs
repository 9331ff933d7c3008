// src/generators/mod.rs
use thiserror::Error;

use crate::models::{Capacity, MAX_COUNT, MAX_LENGTH, MIN_COUNT, MIN_LENGTH, MIN_LENGTH_ALL_CLASSES};

pub mod batch;
pub mod password;

pub use batch::capacity;
pub use password::PasswordGenerator;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("Invalid length {length}. Use between {min} and {max}.", min = MIN_LENGTH, max = MAX_LENGTH)]
    InvalidLength { length: usize },

    #[error(
        "Length {length} is too short to require a digit, an uppercase and a lowercase letter; use length >= {min}.",
        min = MIN_LENGTH_ALL_CLASSES
    )]
    InsufficientLengthForPolicy { length: usize },

    #[error("Invalid count {count}. Use between {min} and {max}.", min = MIN_COUNT, max = MAX_COUNT)]
    InvalidCount { count: usize },

    #[error(
        "Requested {requested} unique passwords, but only {capacity} combinations exist for length {length}. Reduce the count or increase the length."
    )]
    InfeasibleUniqueRequest {
        requested: usize,
        length: usize,
        capacity: Capacity,
    },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Generate one password with a fresh OS-backed generator.
pub fn generate_password(length: usize, require_all_classes: bool) -> Result<String> {
    use crate::models::GenerationPolicy;

    PasswordGenerator::new().generate_password(&GenerationPolicy::new(length, require_all_classes))
}

/// Generate `count` passwords with a fresh OS-backed generator.
///
/// Unique batches come back in no particular order.
pub fn generate_batch(
    count: usize,
    length: usize,
    require_all_classes: bool,
    unique: bool,
) -> Result<Vec<String>> {
    use crate::models::{BatchPolicy, GenerationPolicy};

    let policy = BatchPolicy::new(count, GenerationPolicy::new(length, require_all_classes), unique);
    PasswordGenerator::new()
        .generate_batch(&policy)
        .map(|batch| batch.into_vec())
}
