//! Word Construction
//!
//! Flattens prefix, resolved skeleton and suffix into the element sequence
//! consumed by the hamza and assembly passes.

use sarf_core::{FinalVowel, Letter, Vowel};

use crate::rules::ResolvedSkeleton;

/// A consonant and the vowel following it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConjugationElement {
    pub consonant: Letter,
    pub following_vowel: Vowel,
    pub emphasis: bool,
}

impl ConjugationElement {
    pub fn new(consonant: Letter, following_vowel: Vowel) -> Self {
        Self {
            consonant,
            following_vowel,
            emphasis: false,
        }
    }
}

/// Person markers and augments in front of the skeleton.
pub type Prefix = Vec<ConjugationElement>;

/// Word-final consonant with its final vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ending {
    pub consonant: Letter,
    pub final_vowel: FinalVowel,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConjugatedWord {
    pub elements: Vec<ConjugationElement>,
    pub ending: Option<Ending>,
}

/// Inflectional material after the radical skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffix {
    /// Vowel the suffix imposes on the last skeleton slot.
    pub linking_vowel: Vowel,
    pub elements: Vec<ConjugationElement>,
    /// Bare final letter, such as the silent alef after plural `-ū`.
    pub ending: Option<Letter>,
}

impl Suffix {
    pub fn linking(linking_vowel: Vowel) -> Self {
        Self {
            linking_vowel,
            elements: Vec::new(),
            ending: None,
        }
    }

    pub fn with(mut self, consonant: Letter, vowel: Vowel) -> Self {
        self.elements.push(ConjugationElement::new(consonant, vowel));
        self
    }

    pub fn ending(mut self, letter: Letter) -> Self {
        self.ending = Some(letter);
        self
    }

    pub fn begins_with_sukun(&self) -> bool {
        self.linking_vowel == Vowel::Sukun
    }
}

/// Lay out prefix, skeleton and suffix as one element sequence.
pub fn construct(
    prefix: Prefix,
    skeleton: &ResolvedSkeleton,
    suffix: &Suffix,
) -> ConjugatedWord {
    let mut elements = prefix;
    elements.extend(
        skeleton
            .letters
            .iter()
            .zip(&skeleton.vowels)
            .enumerate()
            .map(|(i, (&consonant, &following_vowel))| ConjugationElement {
                consonant,
                following_vowel,
                emphasis: skeleton.emphasize == Some(i),
            }),
    );
    elements.extend(suffix.elements.iter().copied());

    ConjugatedWord {
        elements,
        ending: suffix.ending.map(|consonant| Ending {
            consonant,
            final_vowel: FinalVowel::None,
        }),
    }
}
