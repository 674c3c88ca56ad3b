//! Symbol Model
//!
//! Closed sets of letters, phonological vowels and diacritic marks shared by
//! every stage that reads or writes vocalized Arabic.

use serde::{Deserialize, Serialize};

/// Unicode shadda (gemination mark).
pub const SHADDA: char = '\u{0651}';

/// Arabic letters, including the hamza carriers and final-only forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    Hamza,
    AlefMadda,
    AlefHamza,
    WawHamza,
    AlefHamzaBelow,
    YaHamza,
    Alef,
    Ba,
    TaMarbuta,
    Ta,
    Tha,
    Jiim,
    Hha,
    Kha,
    Dal,
    Thal,
    Ra,
    Zay,
    Siin,
    Shiin,
    Sad,
    Dad,
    Tta,
    Dha,
    Ain,
    Ghain,
    Fa,
    Qaf,
    Kaf,
    Lam,
    Mim,
    Nun,
    Ha,
    Waw,
    AlefMaksura,
    Ya,
}

impl Letter {
    /// The Unicode character of this letter.
    pub fn to_char(self) -> char {
        match self {
            Letter::Hamza => '\u{0621}',
            Letter::AlefMadda => '\u{0622}',
            Letter::AlefHamza => '\u{0623}',
            Letter::WawHamza => '\u{0624}',
            Letter::AlefHamzaBelow => '\u{0625}',
            Letter::YaHamza => '\u{0626}',
            Letter::Alef => '\u{0627}',
            Letter::Ba => '\u{0628}',
            Letter::TaMarbuta => '\u{0629}',
            Letter::Ta => '\u{062A}',
            Letter::Tha => '\u{062B}',
            Letter::Jiim => '\u{062C}',
            Letter::Hha => '\u{062D}',
            Letter::Kha => '\u{062E}',
            Letter::Dal => '\u{062F}',
            Letter::Thal => '\u{0630}',
            Letter::Ra => '\u{0631}',
            Letter::Zay => '\u{0632}',
            Letter::Siin => '\u{0633}',
            Letter::Shiin => '\u{0634}',
            Letter::Sad => '\u{0635}',
            Letter::Dad => '\u{0636}',
            Letter::Tta => '\u{0637}',
            Letter::Dha => '\u{0638}',
            Letter::Ain => '\u{0639}',
            Letter::Ghain => '\u{063A}',
            Letter::Fa => '\u{0641}',
            Letter::Qaf => '\u{0642}',
            Letter::Kaf => '\u{0643}',
            Letter::Lam => '\u{0644}',
            Letter::Mim => '\u{0645}',
            Letter::Nun => '\u{0646}',
            Letter::Ha => '\u{0647}',
            Letter::Waw => '\u{0648}',
            Letter::AlefMaksura => '\u{0649}',
            Letter::Ya => '\u{064A}',
        }
    }

    /// Parse a single Arabic letter.
    pub fn from_char(c: char) -> Option<Self> {
        let letter = match c {
            '\u{0621}' => Letter::Hamza,
            '\u{0622}' => Letter::AlefMadda,
            '\u{0623}' => Letter::AlefHamza,
            '\u{0624}' => Letter::WawHamza,
            '\u{0625}' => Letter::AlefHamzaBelow,
            '\u{0626}' => Letter::YaHamza,
            '\u{0627}' => Letter::Alef,
            '\u{0628}' => Letter::Ba,
            '\u{0629}' => Letter::TaMarbuta,
            '\u{062A}' => Letter::Ta,
            '\u{062B}' => Letter::Tha,
            '\u{062C}' => Letter::Jiim,
            '\u{062D}' => Letter::Hha,
            '\u{062E}' => Letter::Kha,
            '\u{062F}' => Letter::Dal,
            '\u{0630}' => Letter::Thal,
            '\u{0631}' => Letter::Ra,
            '\u{0632}' => Letter::Zay,
            '\u{0633}' => Letter::Siin,
            '\u{0634}' => Letter::Shiin,
            '\u{0635}' => Letter::Sad,
            '\u{0636}' => Letter::Dad,
            '\u{0637}' => Letter::Tta,
            '\u{0638}' => Letter::Dha,
            '\u{0639}' => Letter::Ain,
            '\u{063A}' => Letter::Ghain,
            '\u{0641}' => Letter::Fa,
            '\u{0642}' => Letter::Qaf,
            '\u{0643}' => Letter::Kaf,
            '\u{0644}' => Letter::Lam,
            '\u{0645}' => Letter::Mim,
            '\u{0646}' => Letter::Nun,
            '\u{0647}' => Letter::Ha,
            '\u{0648}' => Letter::Waw,
            '\u{0649}' => Letter::AlefMaksura,
            '\u{064A}' => Letter::Ya,
            _ => return None,
        };
        Some(letter)
    }

    /// Waw and Ya, the letters that contract or drop in weak verbs.
    pub fn is_weak(self) -> bool {
        matches!(self, Letter::Waw | Letter::Ya)
    }

    /// Bare hamza or any seated hamza.
    pub fn is_hamza(self) -> bool {
        matches!(
            self,
            Letter::Hamza
                | Letter::AlefHamza
                | Letter::AlefHamzaBelow
                | Letter::WawHamza
                | Letter::YaHamza
                | Letter::AlefMadda
        )
    }

    /// The pharyngealized consonants.
    pub fn is_emphatic(self) -> bool {
        matches!(self, Letter::Sad | Letter::Dad | Letter::Tta | Letter::Dha)
    }

    /// Reduce a written letter to the radical it stands for.
    ///
    /// Seated hamzas collapse to the bare hamza and alef maksura to ya.
    pub fn as_radical(self) -> Self {
        match self {
            l if l.is_hamza() => Letter::Hamza,
            Letter::AlefMaksura => Letter::Ya,
            l => l,
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Phonological vowels used by conjugation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vowel {
    ShortA,
    ShortI,
    ShortU,
    LongA,
    LongI,
    LongU,
    DiphthongAj,
    DiphthongAw,
    Sukun,
    /// Long a written with alef maksura.
    BrokenA,
}

impl Vowel {
    /// Long i and long u collapse to their short counterparts; everything else
    /// is returned unchanged.
    pub fn shortened(self) -> Self {
        match self {
            Vowel::LongI => Vowel::ShortI,
            Vowel::LongU => Vowel::ShortU,
            v => v,
        }
    }

    pub fn lengthened(self) -> Self {
        match self {
            Vowel::ShortA => Vowel::LongA,
            Vowel::ShortI => Vowel::LongI,
            Vowel::ShortU => Vowel::LongU,
            v => v,
        }
    }

    /// Long a, i and u. `BrokenA` is an orthographic variant and not counted.
    pub fn is_long(self) -> bool {
        matches!(self, Vowel::LongA | Vowel::LongI | Vowel::LongU)
    }

    pub fn is_diphthong(self) -> bool {
        matches!(self, Vowel::DiphthongAj | Vowel::DiphthongAw)
    }

    pub fn is_short(self) -> bool {
        matches!(self, Vowel::ShortA | Vowel::ShortI | Vowel::ShortU)
    }
}

/// Diacritic marks, plus two internal markers that never render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tashkil {
    Fatha,
    Kasra,
    Dhamma,
    Fathatan,
    Kasratan,
    Dhammatan,
    Sukun,
    /// Letter lengthening the preceding vowel.
    LongVowelMarker,
    /// Word-final letter without a vowel of its own.
    EndOfWordMarker,
}

impl Tashkil {
    /// The combining mark drawn for this tashkil, if any.
    pub fn mark(self) -> Option<char> {
        match self {
            Tashkil::Fatha => Some('\u{064E}'),
            Tashkil::Kasra => Some('\u{0650}'),
            Tashkil::Dhamma => Some('\u{064F}'),
            Tashkil::Fathatan => Some('\u{064B}'),
            Tashkil::Kasratan => Some('\u{064D}'),
            Tashkil::Dhammatan => Some('\u{064C}'),
            Tashkil::Sukun => Some('\u{0652}'),
            Tashkil::LongVowelMarker | Tashkil::EndOfWordMarker => None,
        }
    }

    /// The mark a short vowel or sukun is written with.
    pub fn for_short_vowel(vowel: Vowel) -> Option<Self> {
        match vowel {
            Vowel::ShortA => Some(Tashkil::Fatha),
            Vowel::ShortI => Some(Tashkil::Kasra),
            Vowel::ShortU => Some(Tashkil::Dhamma),
            Vowel::Sukun => Some(Tashkil::Sukun),
            _ => None,
        }
    }
}

/// Vowel at the very end of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinalVowel {
    None,
    Sukun,
    Kasratan,
    AlefMaksuraWithFathatan,
}

impl FinalVowel {
    pub fn tashkil(self) -> Tashkil {
        match self {
            FinalVowel::None => Tashkil::EndOfWordMarker,
            FinalVowel::Sukun => Tashkil::Sukun,
            FinalVowel::Kasratan => Tashkil::Kasratan,
            FinalVowel::AlefMaksuraWithFathatan => Tashkil::Fathatan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_to_unicode_and_back() {
        for c in ['ء', 'أ', 'ؤ', 'ئ', 'ب', 'ت', 'ج', 'ق', 'و', 'ى', 'ي'] {
            let letter = Letter::from_char(c).unwrap();
            assert_eq!(letter.to_char(), c);
        }
        assert_eq!(Letter::from_char('x'), None);
        assert_eq!(Letter::from_char('\u{064E}'), None);
    }

    #[test]
    fn radicals_normalize_carriers() {
        assert_eq!(Letter::AlefHamza.as_radical(), Letter::Hamza);
        assert_eq!(Letter::YaHamza.as_radical(), Letter::Hamza);
        assert_eq!(Letter::AlefMaksura.as_radical(), Letter::Ya);
        assert_eq!(Letter::Qaf.as_radical(), Letter::Qaf);
    }

    #[test]
    fn vowel_length_helpers() {
        assert_eq!(Vowel::LongI.shortened(), Vowel::ShortI);
        assert_eq!(Vowel::LongA.shortened(), Vowel::LongA);
        assert_eq!(Vowel::ShortU.lengthened(), Vowel::LongU);
        assert!(Vowel::LongA.is_long());
        assert!(!Vowel::BrokenA.is_long());
        assert!(!Vowel::Sukun.is_short());
    }

    #[test]
    fn markers_draw_nothing() {
        assert_eq!(Tashkil::LongVowelMarker.mark(), None);
        assert_eq!(Tashkil::EndOfWordMarker.mark(), None);
        assert_eq!(Tashkil::Sukun.mark(), Some('\u{0652}'));
        assert_eq!(FinalVowel::None.tashkil(), Tashkil::EndOfWordMarker);
    }
}
