// src/models.rs
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 64;
pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 10_000;

/// One slot per required class: digit, uppercase, lowercase.
pub const MIN_LENGTH_ALL_CLASSES: usize = 3;

// Single password generation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationPolicy {
    pub length: usize,
    pub require_all_classes: bool,
}

impl GenerationPolicy {
    pub fn new(length: usize, require_all_classes: bool) -> Self {
        Self { length, require_all_classes }
    }
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            length: 5,
            require_all_classes: false,
        }
    }
}

// Batch generation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPolicy {
    pub count: usize,
    pub generation: GenerationPolicy,
    pub unique: bool,
}

impl BatchPolicy {
    pub fn new(count: usize, generation: GenerationPolicy, unique: bool) -> Self {
        Self { count, generation, unique }
    }
}

/// Number of distinct passwords of a given length over the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    Exact(u128),
    /// Too large for `u128`, and therefore far above `MAX_COUNT`.
    Unbounded,
}

impl Capacity {
    pub fn admits(&self, count: usize) -> bool {
        match self {
            Capacity::Exact(n) => (count as u128) <= *n,
            Capacity::Unbounded => true,
        }
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Exact(n) => write!(f, "{}", n),
            Capacity::Unbounded => write!(f, "effectively unbounded"),
        }
    }
}

/// Generated passwords. `Sequence` keeps generation order and may repeat;
/// `Distinct` has no order and no duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordBatch {
    Sequence(Vec<String>),
    Distinct(HashSet<String>),
}

impl PasswordBatch {
    pub fn len(&self) -> usize {
        match self {
            PasswordBatch::Sequence(v) => v.len(),
            PasswordBatch::Distinct(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_unique(&self) -> bool {
        matches!(self, PasswordBatch::Distinct(_))
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &String> + '_> {
        match self {
            PasswordBatch::Sequence(v) => Box::new(v.iter()),
            PasswordBatch::Distinct(s) => Box::new(s.iter()),
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            PasswordBatch::Sequence(v) => v,
            PasswordBatch::Distinct(s) => s.into_iter().collect(),
        }
    }
}

// JSON output of a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub count: usize,
    pub length: usize,
    pub unique: bool,
    pub require_all_classes: bool,
    pub passwords: Vec<String>,
}

impl BatchReport {
    pub fn new(policy: &BatchPolicy, passwords: Vec<String>) -> Self {
        Self {
            count: passwords.len(),
            length: policy.generation.length,
            unique: policy.unique,
            require_all_classes: policy.generation.require_all_classes,
            passwords,
        }
    }
}
