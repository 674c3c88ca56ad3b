use sarf_core::{DialectType, Stem, Stem1Pattern, VerbRoot, VerbType};

/// A root bound to a resolved stem, verb type and dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    pub root: VerbRoot,
    pub stem: Stem,
    pub verb_type: VerbType,
    pub dialect: DialectType,
}

impl Verb {
    pub fn stem_number(&self) -> u8 {
        self.stem.number()
    }

    pub fn pattern(&self) -> Option<Stem1Pattern> {
        self.stem.pattern()
    }
}
