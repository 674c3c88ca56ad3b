//! Sarf Conjugation
//!
//! Generates fully vocalized Arabic verb forms from a root, a stem, a dialect
//! and a grammatical context. Rule tables per dialect build the consonant and
//! vowel skeleton; affix tables wrap it; the hamza and assembly passes turn
//! the result into display units.

pub mod assembler;
pub mod conjugator;
pub mod dialects;
pub mod hamza;
pub mod metadata;
pub mod paradigm;
pub mod rules;
pub mod verb;
pub mod word;

use tracing_subscriber::EnvFilter;

pub use conjugator::{validate_context, Conjugator};
pub use dialects::{DialectConjugator, LebaneseConjugator, MsaConjugator};
pub use metadata::{
    DialectFeatures, DialectMetadata, DialectTables, MetadataError, Stem1ContextChoice,
};
pub use paradigm::{paradigm_contexts, ParadigmEntry};
pub use rules::{
    ConjugationRule, MatchContext, ResolvedSkeleton, RuleBook, RuleConditions, RuleOutcome,
    Skeleton, Symbol, MAX_DELEGATION_HOPS,
};
pub use verb::Verb;
pub use word::{ConjugatedWord, ConjugationElement, Ending, Prefix, Suffix};

pub use sarf_core::*;

/// Install a formatting subscriber driven by `RUST_LOG`. Safe to call twice.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
