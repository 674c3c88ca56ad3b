//! Dialect Plug-ins
//!
//! Each dialect supplies its metadata, its rule book and its affix tables.
//! The conjugator drives them through the same pipeline.

pub mod lebanese;
pub mod msa;

use sarf_core::ConjugationParams;

use crate::metadata::{DialectMetadata, DialectTables};
use crate::rules::{ResolvedSkeleton, RuleBook};
use crate::verb::Verb;
use crate::word::{Prefix, Suffix};

pub use lebanese::LebaneseConjugator;
pub use msa::MsaConjugator;

/// Dialect-specific parts of the conjugation pipeline.
pub trait DialectConjugator: Send + Sync {
    fn metadata(&self) -> &dyn DialectMetadata;

    fn rule_book(&self) -> &RuleBook;

    /// Suffix for the context. Fixed before rule lookup, since rules test it.
    fn suffix(&self, verb: &Verb, params: &ConjugationParams) -> Suffix;

    /// Person markers and augments in front of the skeleton.
    fn prefix(
        &self,
        verb: &Verb,
        skeleton: &ResolvedSkeleton,
        params: &ConjugationParams,
    ) -> Prefix;
}

/// Plug-in for the dialect the tables describe.
pub fn create(tables: DialectTables) -> Box<dyn DialectConjugator> {
    match tables.dialect {
        sarf_core::DialectType::ModernStandardArabic => Box::new(MsaConjugator::new(tables)),
        sarf_core::DialectType::Lebanese => Box::new(LebaneseConjugator::new(tables)),
    }
}
