//! Cryptographically secure password generation.
//!
//! The generator core lives in [`crypto`] (alphabet and secure randomness) and
//! [`generators`] (single passwords and batches). Everything else is the
//! terminal shell built on top of it.

pub mod cli;
pub mod core;
pub mod crypto;
pub mod exporters;
pub mod generators;
pub mod models;
pub mod system;
pub mod utils;

pub use crate::generators::{generate_batch, generate_password, GeneratorError, PasswordGenerator};
pub use crate::models::{BatchPolicy, Capacity, GenerationPolicy, PasswordBatch};
