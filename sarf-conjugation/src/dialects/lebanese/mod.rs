//! Lebanese Arabic
//!
//! No dual, no feminine plural, no jussive and no passive. The indicative
//! present carries the `b-` prefix. Attested pairs without a rule table, such
//! as defective stems 3, 7, 8 and 10, report an unhandled case.

mod affixes;
mod defective;
mod geminate;
mod hamza_on_r1;
mod hollow;
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

pub struct LebaneseConjugator {
    tables: DialectTables,
    rules: RuleBook,
}

impl LebaneseConjugator {
    pub fn new(tables: DialectTables) -> Self {
        Self {
            tables,
            rules: rule_book(),
        }
    }
}

impl Default for LebaneseConjugator {
    fn default() -> Self {
        Self::new(DialectTables::lebanese())
    }
}

/// Every Lebanese rule table, keyed by (verb type, stem).
pub fn rule_book() -> RuleBook {
    let mut book = RuleBook::new(DialectType::Lebanese);
    book.register(VerbType::Sound, [1, 2, 3, 4, 5, 6, 7, 8, 10], sound::rules)
        .register(VerbType::SoundQuadriliteral, [1, 2], quadriliteral::rules)
        .register(VerbType::Defective, [1, 2, 5, 6], defective::rules)
        .register(VerbType::Geminate, [1], geminate::rules)
        .register(VerbType::HamzaOnR1, [1], hamza_on_r1::rules)
        .register(VerbType::Hollow, [1, 8], hollow::rules);
    book
}

impl DialectConjugator for LebaneseConjugator {
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
        _verb: &Verb,
        skeleton: &ResolvedSkeleton,
        params: &ConjugationParams,
    ) -> Prefix {
        affixes::prefix(skeleton, params)
    }
}
