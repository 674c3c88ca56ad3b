//! Modern Standard Arabic
//!
//! Full paradigm: three numbers, both genders in the plural, four moods and
//! both voices. Rule tables exist for every attested (verb type, stem) pair.

mod affixes;
mod assimilated;
mod defective;
mod geminate;
mod hamza_on_r1;
mod hollow;
mod irregular;
mod quadriliteral;
mod sound;
mod tables;

pub(crate) use tables::tables;

use sarf_core::{ConjugationParams, DialectType, VerbType};

use super::DialectConjugator;
use crate::metadata::{DialectMetadata, DialectTables};
use crate::rules::{ResolvedSkeleton, RuleBook};
use crate::verb::Verb;
use crate::word::{Prefix, Suffix};

pub struct MsaConjugator {
    tables: DialectTables,
    rules: RuleBook,
}

impl MsaConjugator {
    pub fn new(tables: DialectTables) -> Self {
        Self {
            tables,
            rules: rule_book(),
        }
    }
}

impl Default for MsaConjugator {
    fn default() -> Self {
        Self::new(DialectTables::msa())
    }
}

/// Every MSA rule table, keyed by (verb type, stem).
pub fn rule_book() -> RuleBook {
    let mut book = RuleBook::new(DialectType::ModernStandardArabic);
    book.register(VerbType::Sound, 1..=10, sound::rules)
        .register(VerbType::SoundQuadriliteral, [1, 2, 4], quadriliteral::rules)
        .register(VerbType::Assimilated, [1, 4, 8, 10], assimilated::rules)
        .register(
            VerbType::AssimilatedAndDefective,
            [1],
            defective::assimilated_rules,
        )
        .register(VerbType::Defective, [1, 2, 3, 4, 5, 6, 7, 8, 10], defective::rules)
        .register(VerbType::Geminate, [1, 3, 4, 8, 10], geminate::rules)
        .register(VerbType::HamzaOnR1, [1, 4, 8], hamza_on_r1::rules)
        .register(VerbType::Hollow, [1, 4, 7, 8, 10], hollow::rules)
        .register(VerbType::Irregular, [1, 4], irregular::rules);
    book
}

impl DialectConjugator for MsaConjugator {
    fn metadata(&self) -> &dyn DialectMetadata {
        &self.tables
    }

    fn rule_book(&self) -> &RuleBook {
        &self.rules
    }

    fn suffix(&self, _verb: &Verb, params: &ConjugationParams) -> Suffix {
        affixes::suffix(params)
    }

    fn prefix(
        &self,
        verb: &Verb,
        skeleton: &ResolvedSkeleton,
        params: &ConjugationParams,
    ) -> Prefix {
        affixes::prefix(verb, skeleton, params)
    }
}
