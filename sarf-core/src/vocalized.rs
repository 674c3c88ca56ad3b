//! Vocalized Units
//!
//! Letters paired with their diacritics, first in the intermediate form the
//! conjugation pipeline emits and then in the final display form.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::symbols::{Letter, Tashkil, SHADDA};

/// Intermediate letter + mark unit, before gemination is folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConjugationVocalized {
    pub letter: Letter,
    pub tashkil: Tashkil,
    pub emphasis: bool,
}

impl ConjugationVocalized {
    pub fn new(letter: Letter, tashkil: Tashkil) -> Self {
        Self {
            letter,
            tashkil,
            emphasis: false,
        }
    }

    pub fn emphasized(mut self, emphasis: bool) -> Self {
        self.emphasis = emphasis;
        self
    }
}

/// Final rendered unit: a letter, an optional visible mark, gemination and
/// stress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayVocalized {
    pub letter: Letter,
    /// Never one of the internal markers.
    pub tashkil: Option<Tashkil>,
    pub shadda: bool,
    pub emphasis: bool,
}

impl DisplayVocalized {
    pub fn new(letter: Letter, tashkil: Tashkil, shadda: bool, emphasis: bool) -> Self {
        Self {
            letter,
            tashkil: tashkil.mark().map(|_| tashkil),
            shadda,
            emphasis,
        }
    }
}

impl fmt::Display for DisplayVocalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter.to_char())?;
        // Canonical combining order: vowels and tanween before shadda, sukun after.
        let mark = self.tashkil.and_then(Tashkil::mark);
        let (before, after) = match self.tashkil {
            Some(Tashkil::Sukun) => (None, mark),
            _ => (mark, None),
        };
        if let Some(mark) = before {
            write!(f, "{}", mark)?;
        }
        if self.shadda {
            write!(f, "{}", SHADDA)?;
        }
        if let Some(mark) = after {
            write!(f, "{}", mark)?;
        }
        Ok(())
    }
}

/// Render a whole word.
pub fn render_word(units: &[DisplayVocalized]) -> String {
    units.iter().map(ToString::to_string).collect()
}
