//! Hamza Resolution
//!
//! Every bare hamza in a constructed word is given its written seat (alef,
//! waw, ya or none) from the surrounding vowels. A short-a hamza followed by
//! a sukun hamza, or an alef-seated hamza before long a, fuses into alef
//! madda.

use sarf_core::{ConjugationVocalized, FinalVowel, Letter, Tashkil, Vowel};

use crate::assembler::expand_element;
use crate::word::{ConjugatedWord, ConjugationElement, Ending};

/// Seat for a hamza carrying `element.following_vowel`.
///
/// `previous_vowel` is `None` at the start of the word.
pub fn determine_hamza_seat(
    element: &ConjugationElement,
    is_final: bool,
    previous_vowel: Option<Vowel>,
) -> Letter {
    let following = element.following_vowel.shortened();
    let deciding = match previous_vowel {
        None => Some(if following == Vowel::ShortI {
            Vowel::ShortI
        } else {
            Vowel::ShortA
        }),
        Some(prev) if is_final => Some(prev).filter(|v| v.is_short()),
        Some(prev) if prev.is_long() || prev.is_diphthong() => {
            if matches!(following, Vowel::ShortI | Vowel::ShortU) {
                Some(following)
            } else if matches!(prev, Vowel::DiphthongAj | Vowel::LongI) {
                Some(Vowel::ShortI)
            } else {
                None
            }
        }
        Some(prev) => {
            let pair = [prev, following];
            if pair.contains(&Vowel::ShortI) {
                Some(Vowel::ShortI)
            } else if pair.contains(&Vowel::ShortU) {
                Some(Vowel::ShortU)
            } else {
                Some(Vowel::ShortA)
            }
        }
    };

    match (previous_vowel, deciding) {
        (None, Some(Vowel::ShortI)) => Letter::AlefHamzaBelow,
        (None, _) => Letter::AlefHamza,
        (_, Some(Vowel::ShortI)) => Letter::YaHamza,
        (_, Some(Vowel::ShortU)) => Letter::WawHamza,
        (_, Some(_)) => Letter::AlefHamza,
        (_, None) => Letter::Hamza,
    }
}

/// Element sink with a one-element lookbehind buffer.
///
/// The units of the most recent element are held back until the next element
/// arrives, so madda fusion can discard them instead of rewriting emitted
/// output.
#[derive(Debug, Default)]
pub struct HamzaBuilder {
    emitted: Vec<ConjugationVocalized>,
    held: Option<Held>,
}

#[derive(Debug)]
struct Held {
    element: ConjugationElement,
    units: Vec<ConjugationVocalized>,
}

impl HamzaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: ConjugationElement, is_final: bool) {
        let previous = self.held.as_ref().map(|held| held.element);
        if element.consonant != Letter::Hamza {
            self.hold(element, expand_element(&element));
            return;
        }

        let fuses_with_previous = element.following_vowel == Vowel::Sukun
            && previous.map_or(false, |prev| {
                prev.consonant == Letter::Hamza && prev.following_vowel == Vowel::ShortA
            });
        if fuses_with_previous {
            self.held = None;
            self.hold(element, vec![madda(element.emphasis)]);
            return;
        }

        let seat = determine_hamza_seat(
            &element,
            is_final,
            previous.map(|prev| prev.following_vowel),
        );
        if seat == Letter::AlefHamza && element.following_vowel == Vowel::LongA {
            self.hold(element, vec![madda(element.emphasis)]);
        } else {
            let seated = ConjugationElement {
                consonant: seat,
                ..element
            };
            self.hold(element, expand_element(&seated));
        }
    }

    /// Flush the buffer and append the word ending.
    pub fn finish(mut self, ending: Option<&Ending>) -> Vec<ConjugationVocalized> {
        let previous = self.held.as_ref().map(|held| held.element);
        self.flush();

        if let Some(ending) = ending {
            match ending.final_vowel {
                FinalVowel::AlefMaksuraWithFathatan => {
                    self.emitted.push(ConjugationVocalized::new(
                        ending.consonant,
                        Tashkil::Fathatan,
                    ));
                    self.emitted.push(ConjugationVocalized::new(
                        Letter::AlefMaksura,
                        Tashkil::EndOfWordMarker,
                    ));
                }
                final_vowel => {
                    let consonant = if ending.consonant == Letter::Hamza {
                        let dummy = ConjugationElement::new(Letter::Hamza, Vowel::BrokenA);
                        determine_hamza_seat(
                            &dummy,
                            true,
                            previous.map(|prev| prev.following_vowel),
                        )
                    } else {
                        ending.consonant
                    };
                    self.emitted
                        .push(ConjugationVocalized::new(consonant, final_vowel.tashkil()));
                }
            }
        }
        self.emitted
    }

    fn hold(&mut self, element: ConjugationElement, units: Vec<ConjugationVocalized>) {
        self.flush();
        self.held = Some(Held { element, units });
    }

    fn flush(&mut self) {
        if let Some(held) = self.held.take() {
            self.emitted.extend(held.units);
        }
    }
}

fn madda(emphasis: bool) -> ConjugationVocalized {
    ConjugationVocalized::new(Letter::AlefMadda, Tashkil::LongVowelMarker).emphasized(emphasis)
}

/// Seat every hamza of a word and expand it into vocalized units.
pub fn hamzate(word: &ConjugatedWord) -> Vec<ConjugationVocalized> {
    let mut builder = HamzaBuilder::new();
    let last = word.elements.len().saturating_sub(1);
    for (i, element) in word.elements.iter().enumerate() {
        builder.push(*element, word.ending.is_none() && i == last);
    }
    builder.finish(word.ending.as_ref())
}
