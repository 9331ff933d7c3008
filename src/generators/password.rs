// src/generators/password.rs
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};

use super::{GeneratorError, Result};
use crate::crypto::{CharClass, SecureRandom};
use crate::models::{GenerationPolicy, MAX_LENGTH, MIN_LENGTH, MIN_LENGTH_ALL_CLASSES};

/// Password generator owning its own randomness handle.
///
/// Each generator is independent; concurrent callers build their own instead
/// of sharing one.
pub struct PasswordGenerator<R = OsRng> {
    random: SecureRandom<R>,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        PasswordGenerator {
            random: SecureRandom::new(),
        }
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validate_policy(policy: &GenerationPolicy) -> Result<()> {
    if policy.length < MIN_LENGTH || policy.length > MAX_LENGTH {
        return Err(GeneratorError::InvalidLength { length: policy.length });
    }
    if policy.require_all_classes && policy.length < MIN_LENGTH_ALL_CLASSES {
        return Err(GeneratorError::InsufficientLengthForPolicy { length: policy.length });
    }
    Ok(())
}

impl<R: RngCore + CryptoRng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator {
            random: SecureRandom::with_rng(rng),
        }
    }

    pub fn generate_password(&mut self, policy: &GenerationPolicy) -> Result<String> {
        validate_policy(policy)?;
        Ok(self.generate_unchecked(policy))
    }

    // Caller has validated the policy.
    pub(crate) fn generate_unchecked(&mut self, policy: &GenerationPolicy) -> String {
        if !policy.require_all_classes {
            return (0..policy.length).map(|_| self.random.random_char()).collect();
        }

        let mut chars: Vec<char> = Vec::with_capacity(policy.length);
        for class in CharClass::ALL {
            chars.push(self.random.random_char_from(class));
        }
        while chars.len() < policy.length {
            chars.push(self.random.random_char());
        }

        // Otherwise the guaranteed classes would always sit in the first three slots
        self.random.secure_shuffle(&mut chars);
        chars.into_iter().collect()
    }
}
