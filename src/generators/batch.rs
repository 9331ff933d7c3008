// src/generators/batch.rs
use std::collections::HashSet;

use log::{debug, info};
use rand_core::{CryptoRng, RngCore};

use super::password::{validate_policy, PasswordGenerator};
use super::{GeneratorError, Result};
use crate::crypto::ALPHABET;
use crate::models::{BatchPolicy, Capacity, PasswordBatch, MAX_COUNT, MIN_COUNT};

/// Distinct passwords of `length` characters: 62^length, exact up to length 21.
pub fn capacity(length: usize) -> Capacity {
    let Ok(exp) = u32::try_from(length) else {
        return Capacity::Unbounded;
    };
    match (ALPHABET.len() as u128).checked_pow(exp) {
        Some(n) => Capacity::Exact(n),
        None => Capacity::Unbounded,
    }
}

fn validate_batch(policy: &BatchPolicy) -> Result<()> {
    if policy.count < MIN_COUNT || policy.count > MAX_COUNT {
        return Err(GeneratorError::InvalidCount { count: policy.count });
    }
    validate_policy(&policy.generation)?;

    if policy.unique {
        let capacity = capacity(policy.generation.length);
        if !capacity.admits(policy.count) {
            return Err(GeneratorError::InfeasibleUniqueRequest {
                requested: policy.count,
                length: policy.generation.length,
                capacity,
            });
        }
    }
    Ok(())
}

impl<R: RngCore + CryptoRng> PasswordGenerator<R> {
    pub fn generate_batch(&mut self, policy: &BatchPolicy) -> Result<PasswordBatch> {
        validate_batch(policy)?;
        debug!("Generating batch: {:?}", policy);

        let batch = if policy.unique {
            // Rejection sampling. Terminates because count <= capacity; no attempt cap.
            let mut set = HashSet::with_capacity(policy.count);
            let mut draws = 0usize;
            while set.len() < policy.count {
                set.insert(self.generate_unchecked(&policy.generation));
                draws += 1;
            }
            debug!("Unique batch needed {} draws for {} passwords", draws, policy.count);
            PasswordBatch::Distinct(set)
        } else {
            let list = (0..policy.count)
                .map(|_| self.generate_unchecked(&policy.generation))
                .collect();
            PasswordBatch::Sequence(list)
        };

        info!(
            "Generated {} passwords (length = {}, unique = {})",
            batch.len(),
            policy.generation.length,
            policy.unique
        );
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::in_alphabet;
    use crate::models::GenerationPolicy;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn capacity_is_exact_while_it_fits() {
        assert_eq!(capacity(1), Capacity::Exact(62));
        assert_eq!(capacity(2), Capacity::Exact(3_844));
        assert_eq!(capacity(3), Capacity::Exact(238_328));
        assert_eq!(capacity(21), Capacity::Exact(62u128.pow(21)));
        assert_eq!(capacity(22), Capacity::Unbounded);
        assert_eq!(capacity(64), Capacity::Unbounded);
    }

    #[test]
    fn rejects_count_out_of_range() {
        init();
        let mut generator = PasswordGenerator::new();
        for count in [0, MAX_COUNT + 1] {
            let policy = BatchPolicy::new(count, GenerationPolicy::new(8, false), false);
            assert_eq!(
                generator.generate_batch(&policy),
                Err(GeneratorError::InvalidCount { count })
            );
        }
    }

    #[test]
    fn count_is_checked_before_length() {
        let mut generator = PasswordGenerator::new();
        let policy = BatchPolicy::new(0, GenerationPolicy::new(0, false), false);
        assert_eq!(
            generator.generate_batch(&policy),
            Err(GeneratorError::InvalidCount { count: 0 })
        );
    }

    #[test]
    fn delegates_length_validation() {
        let mut generator = PasswordGenerator::new();
        let policy = BatchPolicy::new(10, GenerationPolicy::new(65, false), true);
        assert_eq!(
            generator.generate_batch(&policy),
            Err(GeneratorError::InvalidLength { length: 65 })
        );
        let policy = BatchPolicy::new(10, GenerationPolicy::new(2, true), false);
        assert_eq!(
            generator.generate_batch(&policy),
            Err(GeneratorError::InsufficientLengthForPolicy { length: 2 })
        );
    }

    #[test]
    fn infeasible_unique_request() {
        let mut generator = PasswordGenerator::new();
        let policy = BatchPolicy::new(100, GenerationPolicy::new(1, false), true);
        assert_eq!(
            generator.generate_batch(&policy),
            Err(GeneratorError::InfeasibleUniqueRequest {
                requested: 100,
                length: 1,
                capacity: Capacity::Exact(62),
            })
        );

        // same count without uniqueness is fine
        let policy = BatchPolicy::new(100, GenerationPolicy::new(1, false), false);
        assert_eq!(generator.generate_batch(&policy).unwrap().len(), 100);
    }

    #[test]
    fn unique_batch_can_exhaust_the_whole_space() {
        init();
        let mut generator = PasswordGenerator::with_rng(ChaCha20Rng::seed_from_u64(1));
        let policy = BatchPolicy::new(62, GenerationPolicy::new(1, false), true);
        let batch = generator.generate_batch(&policy).unwrap();
        assert!(batch.is_unique());

        let mut chars: Vec<u8> = batch.iter().map(|s| s.as_bytes()[0]).collect();
        chars.sort_unstable();
        let mut expected = ALPHABET.to_vec();
        expected.sort_unstable();
        assert_eq!(chars, expected);
    }

    #[test]
    fn plain_batch_is_a_sequence_of_valid_passwords() {
        let mut generator = PasswordGenerator::new();
        let policy = BatchPolicy::new(250, GenerationPolicy::new(12, true), false);
        let batch = generator.generate_batch(&policy).unwrap();
        assert!(!batch.is_unique());
        assert_eq!(batch.len(), 250);
        for pw in batch.iter() {
            assert_eq!(pw.len(), 12);
            assert!(pw.chars().all(in_alphabet));
            assert!(pw.chars().any(|c| c.is_ascii_digit()));
            assert!(pw.chars().any(|c| c.is_ascii_uppercase()));
            assert!(pw.chars().any(|c| c.is_ascii_lowercase()));
        }
    }
}
