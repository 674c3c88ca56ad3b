//! Sarf Core
//!
//! Shared vocabulary of the conjugation engine: letters, vowels and marks,
//! roots and their classification, grammatical categories and errors.

pub mod error;
pub mod grammar;
pub mod root;
pub mod symbols;
pub mod vocalized;

pub use error::ConjugationError;
pub use grammar::{
    ConjugationParams, DialectType, Gender, Mood, Numerus, Person, Stem, Stem1Pattern, Tense,
    VerbType, Voice,
};
pub use root::{RootType, VerbRoot};
pub use symbols::{FinalVowel, Letter, Tashkil, Vowel, SHADDA};
pub use vocalized::{render_word, ConjugationVocalized, DisplayVocalized};
