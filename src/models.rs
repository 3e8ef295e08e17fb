// src/models.rs
use serde::{Serialize, Deserialize};

use crate::random::RandomSource;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*(){}[]=<>/,.";

/// A category of password characters with a fixed alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// All classes, in the order round-robin generation cycles through them.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(&self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    /// Draw one character uniformly at random from this class's alphabet.
    pub fn draw(&self, rng: &mut dyn RandomSource) -> char {
        let alphabet = self.alphabet();
        alphabet[rng.next_index(alphabet.len())] as char
    }
}

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Target password length. `usize` makes negative lengths
    /// unrepresentable; zero is valid and yields the empty string.
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 16,
            include_lowercase: true,
            include_uppercase: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}

impl GenerationRequest {
    /// Enabled classes in the fixed lowercase, uppercase, digit, symbol
    /// order. This is the iteration order the round-robin fill follows, so
    /// it also decides which classes survive truncation when the requested
    /// length is shorter than the number of enabled classes.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        let flags = [
            self.include_lowercase,
            self.include_uppercase,
            self.include_digits,
            self.include_symbols,
        ];
        CharacterClass::ALL
            .into_iter()
            .zip(flags)
            .filter_map(|(class, enabled)| enabled.then_some(class))
            .collect()
    }
}
