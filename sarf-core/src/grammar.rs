//! Grammatical Categories
//!
//! Tense, mood, voice, person, gender and number, the verb classes, the stems
//! and the stem-1 vowel patterns that parameterize a conjugation request.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConjugationError;
use crate::symbols::Vowel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tense {
    Perfect,
    Present,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Indicative,
    Subjunctive,
    Jussive,
    Imperative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Voice {
    Active,
    Passive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Numerus {
    Singular,
    Dual,
    Plural,
}

/// One cell of a conjugation paradigm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConjugationParams {
    pub tense: Tense,
    #[serde(default = "default_mood")]
    pub mood: Mood,
    #[serde(default = "default_voice")]
    pub voice: Voice,
    pub person: Person,
    pub gender: Gender,
    pub numerus: Numerus,
}

fn default_mood() -> Mood {
    Mood::Indicative
}

fn default_voice() -> Voice {
    Voice::Active
}

impl ConjugationParams {
    /// Active perfect.
    pub fn perfect(person: Person, gender: Gender, numerus: Numerus) -> Self {
        Self {
            tense: Tense::Perfect,
            mood: Mood::Indicative,
            voice: Voice::Active,
            person,
            gender,
            numerus,
        }
    }

    /// Active present in the given mood.
    pub fn present(mood: Mood, person: Person, gender: Gender, numerus: Numerus) -> Self {
        Self {
            tense: Tense::Present,
            mood,
            voice: Voice::Active,
            person,
            gender,
            numerus,
        }
    }

    /// Second person imperative.
    pub fn imperative(gender: Gender, numerus: Numerus) -> Self {
        Self::present(Mood::Imperative, Person::Second, gender, numerus)
    }

    pub fn with_voice(mut self, voice: Voice) -> Self {
        self.voice = voice;
        self
    }

    pub fn passive(self) -> Self {
        self.with_voice(Voice::Passive)
    }

    pub fn is_third_masculine_singular(&self) -> bool {
        self.person == Person::Third
            && self.gender == Gender::Male
            && self.numerus == Numerus::Singular
    }
}

impl fmt::Display for ConjugationParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}/{:?}/{:?} {:?} {:?} {:?}",
            self.tense, self.mood, self.voice, self.person, self.gender, self.numerus
        )
    }
}

/// Morpho-phonological verb class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VerbType {
    Sound,
    SoundQuadriliteral,
    Assimilated,
    AssimilatedAndDefective,
    Hollow,
    Defective,
    Geminate,
    HamzaOnR1,
    Irregular,
    QuadriliteralAndDefective,
}

impl VerbType {
    pub const ALL: [VerbType; 10] = [
        VerbType::Sound,
        VerbType::SoundQuadriliteral,
        VerbType::Assimilated,
        VerbType::AssimilatedAndDefective,
        VerbType::Hollow,
        VerbType::Defective,
        VerbType::Geminate,
        VerbType::HamzaOnR1,
        VerbType::Irregular,
        VerbType::QuadriliteralAndDefective,
    ];
}

/// Lexical vowel pattern of a stem-1 verb.
///
/// Most patterns name the vowel on the second radical in the perfect and in
/// the present. The defective, quadriliteral and irregular patterns name a
/// whole conjugation class instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem1Pattern {
    #[serde(rename = "aa")]
    PastAPresentA,
    #[serde(rename = "ai")]
    PastAPresentI,
    #[serde(rename = "au")]
    PastAPresentU,
    #[serde(rename = "ia")]
    PastIPresentA,
    #[serde(rename = "ii")]
    PastIPresentI,
    #[serde(rename = "uu")]
    PastUPresentU,
    #[serde(rename = "d1")]
    DefectiveType1,
    #[serde(rename = "d2")]
    DefectiveType2,
    #[serde(rename = "d3")]
    DefectiveType3,
    #[serde(rename = "ss")]
    Quadriliteral,
    #[serde(rename = "hayiya")]
    IrregularHayiya,
    #[serde(rename = "laysa")]
    IrregularLaysa,
    #[serde(rename = "ra2a")]
    IrregularRa2a,
    #[serde(rename = "irjy2")]
    IrregularJy2,
    #[serde(rename = "aiiu")]
    PastAPresentIIU,
    #[serde(rename = "aiiuu")]
    PastAPresentIIUU,
    #[serde(rename = "ausu")]
    PastAPresentUSU,
    #[serde(rename = "iaa")]
    PastIPresentAA,
    #[serde(rename = "iu")]
    PastIPresentU,
}

impl Stem1Pattern {
    pub const ALL: [Stem1Pattern; 19] = [
        Stem1Pattern::PastAPresentA,
        Stem1Pattern::PastAPresentI,
        Stem1Pattern::PastAPresentU,
        Stem1Pattern::PastIPresentA,
        Stem1Pattern::PastIPresentI,
        Stem1Pattern::PastUPresentU,
        Stem1Pattern::DefectiveType1,
        Stem1Pattern::DefectiveType2,
        Stem1Pattern::DefectiveType3,
        Stem1Pattern::Quadriliteral,
        Stem1Pattern::IrregularHayiya,
        Stem1Pattern::IrregularLaysa,
        Stem1Pattern::IrregularRa2a,
        Stem1Pattern::IrregularJy2,
        Stem1Pattern::PastAPresentIIU,
        Stem1Pattern::PastAPresentIIUU,
        Stem1Pattern::PastAPresentUSU,
        Stem1Pattern::PastIPresentAA,
        Stem1Pattern::PastIPresentU,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Stem1Pattern::PastAPresentA => "aa",
            Stem1Pattern::PastAPresentI => "ai",
            Stem1Pattern::PastAPresentU => "au",
            Stem1Pattern::PastIPresentA => "ia",
            Stem1Pattern::PastIPresentI => "ii",
            Stem1Pattern::PastUPresentU => "uu",
            Stem1Pattern::DefectiveType1 => "d1",
            Stem1Pattern::DefectiveType2 => "d2",
            Stem1Pattern::DefectiveType3 => "d3",
            Stem1Pattern::Quadriliteral => "ss",
            Stem1Pattern::IrregularHayiya => "hayiya",
            Stem1Pattern::IrregularLaysa => "laysa",
            Stem1Pattern::IrregularRa2a => "ra2a",
            Stem1Pattern::IrregularJy2 => "irjy2",
            Stem1Pattern::PastAPresentIIU => "aiiu",
            Stem1Pattern::PastAPresentIIUU => "aiiuu",
            Stem1Pattern::PastAPresentUSU => "ausu",
            Stem1Pattern::PastIPresentAA => "iaa",
            Stem1Pattern::PastIPresentU => "iu",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    /// Vowel on the second radical in the active perfect.
    pub fn past_vowel(&self) -> Option<Vowel> {
        match self {
            Stem1Pattern::PastAPresentA
            | Stem1Pattern::PastAPresentI
            | Stem1Pattern::PastAPresentU
            | Stem1Pattern::DefectiveType1
            | Stem1Pattern::DefectiveType2
            | Stem1Pattern::IrregularLaysa
            | Stem1Pattern::IrregularRa2a
            | Stem1Pattern::PastAPresentIIU
            | Stem1Pattern::PastAPresentIIUU
            | Stem1Pattern::PastAPresentUSU => Some(Vowel::ShortA),
            Stem1Pattern::PastIPresentA
            | Stem1Pattern::PastIPresentI
            | Stem1Pattern::DefectiveType3
            | Stem1Pattern::IrregularHayiya
            | Stem1Pattern::PastIPresentAA
            | Stem1Pattern::PastIPresentU => Some(Vowel::ShortI),
            Stem1Pattern::PastUPresentU => Some(Vowel::ShortU),
            Stem1Pattern::Quadriliteral | Stem1Pattern::IrregularJy2 => None,
        }
    }

    /// Vowel on the second radical in the active present.
    pub fn present_vowel(&self) -> Option<Vowel> {
        match self {
            Stem1Pattern::PastAPresentA
            | Stem1Pattern::PastIPresentA
            | Stem1Pattern::DefectiveType3
            | Stem1Pattern::IrregularHayiya
            | Stem1Pattern::IrregularRa2a => Some(Vowel::ShortA),
            Stem1Pattern::PastAPresentI
            | Stem1Pattern::PastIPresentI
            | Stem1Pattern::DefectiveType1
            | Stem1Pattern::PastIPresentAA => Some(Vowel::ShortI),
            Stem1Pattern::PastAPresentU
            | Stem1Pattern::PastUPresentU
            | Stem1Pattern::DefectiveType2
            | Stem1Pattern::PastAPresentIIU
            | Stem1Pattern::PastAPresentIIUU
            | Stem1Pattern::PastAPresentUSU
            | Stem1Pattern::PastIPresentU => Some(Vowel::ShortU),
            Stem1Pattern::Quadriliteral
            | Stem1Pattern::IrregularLaysa
            | Stem1Pattern::IrregularJy2 => None,
        }
    }
}

impl fmt::Display for Stem1Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Derivational stem (form I to X), with the stem-1 vowel pattern once known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stem {
    number: u8,
    #[serde(default)]
    pattern: Option<Stem1Pattern>,
}

impl Stem {
    pub const MAX: u8 = 10;

    /// Stem 1 with its lexical pattern.
    pub fn basic(pattern: Stem1Pattern) -> Self {
        Self {
            number: 1,
            pattern: Some(pattern),
        }
    }

    /// Stem 1 whose pattern is still to be resolved.
    pub fn basic_unresolved() -> Self {
        Self {
            number: 1,
            pattern: None,
        }
    }

    /// A derived stem, 2 to 10.
    pub fn derived(number: u8) -> Result<Self, ConjugationError> {
        if !(2..=Self::MAX).contains(&number) {
            return Err(ConjugationError::InvalidStem(number));
        }
        Ok(Self {
            number,
            pattern: None,
        })
    }

    /// Any stem by number; stem 1 starts unresolved.
    pub fn new(number: u8) -> Result<Self, ConjugationError> {
        match number {
            1 => Ok(Self::basic_unresolved()),
            n => Self::derived(n),
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn pattern(&self) -> Option<Stem1Pattern> {
        self.pattern
    }

    pub fn with_pattern(mut self, pattern: Stem1Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn is_basic(&self) -> bool {
        self.number == 1
    }

    /// Structural validity, for stems that came in through deserialization.
    pub fn validate(&self) -> Result<(), ConjugationError> {
        if !(1..=Self::MAX).contains(&self.number) {
            return Err(ConjugationError::InvalidStem(self.number));
        }
        Ok(())
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pattern {
            Some(pattern) => write!(f, "{}/{}", self.number, pattern),
            None => write!(f, "{}", self.number),
        }
    }
}

/// Supported Arabic varieties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialectType {
    ModernStandardArabic,
    Lebanese,
}

impl DialectType {
    pub const ALL: [DialectType; 2] = [DialectType::ModernStandardArabic, DialectType::Lebanese];

    /// Parse a dialect name or ISO 639-3 code.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "msa" | "arb" | "modern-standard-arabic" => Some(DialectType::ModernStandardArabic),
            "lebanese" | "apc" | "lb" => Some(DialectType::Lebanese),
            _ => None,
        }
    }

    /// ISO 639-3 code.
    pub fn code(&self) -> &'static str {
        match self {
            DialectType::ModernStandardArabic => "arb",
            DialectType::Lebanese => "apc",
        }
    }
}
