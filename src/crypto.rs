// src/crypto.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand_core::{CryptoRng, RngCore};

pub const DIGITS: &[u8] = b"0123456789";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Digits, then uppercase, then lowercase. 62 distinct characters.
pub const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Digit,
    Upper,
    Lower,
}

impl CharClass {
    pub const ALL: [CharClass; 3] = [CharClass::Digit, CharClass::Upper, CharClass::Lower];

    pub fn chars(self) -> &'static [u8] {
        match self {
            CharClass::Digit => DIGITS,
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
        }
    }

    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Upper => c.is_ascii_uppercase(),
            CharClass::Lower => c.is_ascii_lowercase(),
        }
    }
}

pub fn in_alphabet(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Uniform character picks and shuffles over a cryptographically secure source.
///
/// Index selection goes through `Uniform`, which rejects samples outside the
/// largest multiple of the range, so every one of the 62 characters is equally
/// likely. Shuffling is Fisher-Yates over the same source.
///
/// A failing OS entropy source panics inside `OsRng`; that is fatal and is not
/// caught here.
pub struct SecureRandom<R = OsRng> {
    rng: R,
    alphabet_index: Uniform<usize>,
}

impl SecureRandom<OsRng> {
    pub fn new() -> Self {
        Self::with_rng(OsRng)
    }
}

impl Default for SecureRandom<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> SecureRandom<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            alphabet_index: Uniform::from(0..ALPHABET.len()),
        }
    }

    pub fn random_char(&mut self) -> char {
        ALPHABET[self.alphabet_index.sample(&mut self.rng)] as char
    }

    pub fn random_char_from(&mut self, class: CharClass) -> char {
        let subset = class.chars();
        let idx = Uniform::from(0..subset.len()).sample(&mut self.rng);
        subset[idx] as char
    }

    pub fn secure_shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
