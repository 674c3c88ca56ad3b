use crate::grammar::{DialectType, Stem1Pattern, VerbType};

/// Failures of a conjugation request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConjugationError {
    #[error("{verb_type:?} verbs are not attested in stem {stem}")]
    UnsupportedCombination { verb_type: VerbType, stem: u8 },

    #[error("stem 1 of a {verb_type:?} verb needs one of the patterns {choices:?}")]
    MissingDisambiguatingContext {
        verb_type: VerbType,
        choices: Vec<Stem1Pattern>,
    },

    #[error("{dialect:?} does not handle {verb_type:?} in stem {stem}: {detail}")]
    UnhandledCase {
        dialect: DialectType,
        verb_type: VerbType,
        stem: u8,
        detail: String,
    },

    #[error("invalid context: {0}")]
    InvalidContext(String),

    #[error("invalid root: {0}")]
    InvalidRoot(String),

    #[error("stem {0} does not exist")]
    InvalidStem(u8),

    #[error("rule delegation for {verb_type:?} exceeded {limit} hops")]
    DelegationLimit { verb_type: VerbType, limit: usize },
}
