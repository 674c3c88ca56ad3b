//! Vocalized Assembly
//!
//! Expands vowels into letter + mark units and folds geminate pairs into a
//! single letter with shadda.

use sarf_core::{ConjugationVocalized, DisplayVocalized, Letter, Tashkil, Vowel};

use crate::hamza::hamzate;
use crate::word::{ConjugatedWord, ConjugationElement};

/// Units for one element. Long vowels and diphthongs add a second letter.
pub fn expand_element(element: &ConjugationElement) -> Vec<ConjugationVocalized> {
    let consonant = |tashkil| {
        ConjugationVocalized::new(element.consonant, tashkil).emphasized(element.emphasis)
    };
    let (mark, extension) = match element.following_vowel {
        Vowel::ShortA => (Tashkil::Fatha, None),
        Vowel::ShortI => (Tashkil::Kasra, None),
        Vowel::ShortU => (Tashkil::Dhamma, None),
        Vowel::Sukun => (Tashkil::Sukun, None),
        Vowel::LongA => (Tashkil::Fatha, Some((Letter::Alef, Tashkil::LongVowelMarker))),
        Vowel::LongI => (Tashkil::Kasra, Some((Letter::Ya, Tashkil::LongVowelMarker))),
        Vowel::LongU => (Tashkil::Dhamma, Some((Letter::Waw, Tashkil::LongVowelMarker))),
        Vowel::DiphthongAj => (Tashkil::Fatha, Some((Letter::Ya, Tashkil::Sukun))),
        Vowel::DiphthongAw => (Tashkil::Fatha, Some((Letter::Waw, Tashkil::Sukun))),
        Vowel::BrokenA => (
            Tashkil::Fatha,
            Some((Letter::AlefMaksura, Tashkil::LongVowelMarker)),
        ),
    };

    let mut units = vec![consonant(mark)];
    if let Some((letter, tashkil)) = extension {
        units.push(ConjugationVocalized::new(letter, tashkil));
    }
    units
}

/// Collapse `C + sukun, C + mark` into `C + shadda + mark`, except at the
/// start of the word.
pub fn fold_shadda(units: &[ConjugationVocalized]) -> Vec<DisplayVocalized> {
    let mut out = Vec::with_capacity(units.len());
    let mut i = 0;
    while i < units.len() {
        let unit = units[i];
        match units.get(i + 1) {
            Some(next) if i > 0 && unit.letter == next.letter && unit.tashkil == Tashkil::Sukun => {
                out.push(DisplayVocalized::new(
                    unit.letter,
                    next.tashkil,
                    true,
                    unit.emphasis || next.emphasis,
                ));
                i += 2;
            }
            _ => {
                out.push(DisplayVocalized::new(
                    unit.letter,
                    unit.tashkil,
                    false,
                    unit.emphasis,
                ));
                i += 1;
            }
        }
    }
    out
}

/// Hamza seating followed by expansion and gemination.
pub fn assemble(word: &ConjugatedWord) -> Vec<DisplayVocalized> {
    fold_shadda(&hamzate(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarf_core::render_word;

    fn element(consonant: Letter, vowel: Vowel) -> ConjugationElement {
        ConjugationElement::new(consonant, vowel)
    }

    #[test]
    fn long_vowels_add_a_carrier() {
        let units = expand_element(&element(Letter::Qaf, Vowel::LongA));
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].tashkil, Tashkil::Fatha);
        assert_eq!(units[1], ConjugationVocalized::new(Letter::Alef, Tashkil::LongVowelMarker));

        let units = expand_element(&element(Letter::Ra, Vowel::DiphthongAw));
        assert_eq!(units[1], ConjugationVocalized::new(Letter::Waw, Tashkil::Sukun));

        let units = expand_element(&element(Letter::Mim, Vowel::BrokenA));
        assert_eq!(units[1].letter, Letter::AlefMaksura);
    }

    #[test]
    fn emphasis_stays_on_the_consonant() {
        let mut e = element(Letter::Dal, Vowel::LongU);
        e.emphasis = true;
        let units = expand_element(&e);
        assert!(units[0].emphasis);
        assert!(!units[1].emphasis);
    }

    #[test]
    fn folds_geminates() {
        let word = ConjugatedWord {
            elements: vec![
                element(Letter::Mim, Vowel::ShortA),
                element(Letter::Dal, Vowel::Sukun),
                element(Letter::Dal, Vowel::ShortA),
            ],
            ending: None,
        };
        let display = assemble(&word);
        assert_eq!(display.len(), 2);
        assert!(display[1].shadda);
        assert_eq!(display[1].tashkil, Some(Tashkil::Fatha));
        assert_eq!(render_word(&display), "مَدَّ");
    }

    #[test]
    fn never_folds_at_word_start() {
        let units = [
            ConjugationVocalized::new(Letter::Ta, Tashkil::Sukun),
            ConjugationVocalized::new(Letter::Ta, Tashkil::Fatha),
        ];
        let display = fold_shadda(&units);
        assert_eq!(display.len(), 2);
        assert!(!display[0].shadda);
    }

    #[test]
    fn fold_keeps_emphasis_of_either_unit() {
        let units = [
            ConjugationVocalized::new(Letter::Ha, Tashkil::Fatha),
            ConjugationVocalized::new(Letter::Ba, Tashkil::Sukun),
            ConjugationVocalized::new(Letter::Ba, Tashkil::Kasra).emphasized(true),
        ];
        let display = fold_shadda(&units);
        assert!(display[1].emphasis && display[1].shadda);
    }

    #[test]
    fn markers_render_without_marks() {
        let long = ConjugatedWord {
            elements: vec![element(Letter::Qaf, Vowel::LongA), element(Letter::Lam, Vowel::ShortA)],
            ending: None,
        };
        assert_eq!(render_word(&assemble(&long)), "قَالَ");
    }
}
