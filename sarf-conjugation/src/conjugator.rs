//! Conjugator
//!
//! Entry point of the engine. A request runs through verb-type derivation,
//! the attestation gate, context validation, stem-1 pattern resolution, rule
//! lookup, affixation, hamza seating and assembly.

use tracing::{debug, warn};

use sarf_core::{
    render_word, ConjugationError, ConjugationParams, DialectType, DisplayVocalized, Gender,
    Mood, Numerus, Person, Stem, Tense, VerbRoot, VerbType, Voice,
};

use crate::assembler;
use crate::dialects::{self, DialectConjugator};
use crate::metadata::{DialectFeatures, DialectMetadata, DialectTables, Stem1ContextChoice};
use crate::paradigm::{self, ParadigmEntry};
use crate::rules::MatchContext;
use crate::verb::Verb;
use crate::word;

pub struct Conjugator {
    msa: Box<dyn DialectConjugator>,
    lebanese: Box<dyn DialectConjugator>,
}

impl Default for Conjugator {
    fn default() -> Self {
        Self::new()
    }
}

impl Conjugator {
    /// Conjugator over the built-in dialect tables.
    pub fn new() -> Self {
        Self {
            msa: dialects::create(DialectTables::msa()),
            lebanese: dialects::create(DialectTables::lebanese()),
        }
    }

    /// Conjugator whose tables come from the metadata environment variables.
    /// A file that cannot be used is reported and the preset kept.
    pub fn from_env() -> Self {
        DialectType::ALL
            .into_iter()
            .fold(Self::new(), |conjugator, dialect| {
                match DialectTables::from_env_or_default(dialect) {
                    Ok(tables) => conjugator.with_metadata(tables),
                    Err(err) => {
                        warn!(?dialect, error = %err, "ignoring dialect metadata file");
                        conjugator
                    }
                }
            })
    }

    /// Replace the tables of the dialect they describe.
    pub fn with_metadata(mut self, tables: DialectTables) -> Self {
        match tables.dialect {
            DialectType::ModernStandardArabic => self.msa = dialects::create(tables),
            DialectType::Lebanese => self.lebanese = dialects::create(tables),
        }
        self
    }

    fn plugin(&self, dialect: DialectType) -> &dyn DialectConjugator {
        match dialect {
            DialectType::ModernStandardArabic => self.msa.as_ref(),
            DialectType::Lebanese => self.lebanese.as_ref(),
        }
    }

    pub fn metadata(&self, dialect: DialectType) -> &dyn DialectMetadata {
        self.plugin(dialect).metadata()
    }

    pub fn derive_verb_type(&self, dialect: DialectType, root: &VerbRoot, stem: &Stem) -> VerbType {
        self.metadata(dialect).derive_verb_type(root, stem)
    }

    pub fn is_conjugatable(&self, dialect: DialectType, verb_type: VerbType, stem: u8) -> bool {
        self.metadata(dialect).is_conjugatable(verb_type, stem)
    }

    /// Stem-1 candidates for a root, and the forms that tell them apart.
    pub fn stem1_context_choices(
        &self,
        dialect: DialectType,
        root: &VerbRoot,
    ) -> Result<Stem1ContextChoice, ConjugationError> {
        let metadata = self.metadata(dialect);
        let verb_type = metadata.derive_verb_type(root, &Stem::basic_unresolved());
        metadata.stem1_context_choices(verb_type, root)
    }

    pub fn conjugate(
        &self,
        root: &VerbRoot,
        stem: Stem,
        dialect: DialectType,
        params: ConjugationParams,
    ) -> Result<Vec<DisplayVocalized>, ConjugationError> {
        stem.validate()?;
        let plugin = self.plugin(dialect);
        let metadata = plugin.metadata();

        let verb_type = metadata.derive_verb_type(root, &stem);
        if !metadata.is_conjugatable(verb_type, stem.number()) {
            return Err(ConjugationError::UnsupportedCombination {
                verb_type,
                stem: stem.number(),
            });
        }
        let params = validate_context(metadata.features(), params)?;
        let stem = if stem.is_basic() {
            resolve_stem1(metadata, verb_type, root, stem)?
        } else {
            stem
        };

        let verb = Verb {
            root: root.clone(),
            stem,
            verb_type,
            dialect,
        };
        debug!(%root, %stem, ?verb_type, %params, "conjugating");

        let suffix = plugin.suffix(&verb, &params);
        let ctx = MatchContext::new(params, suffix.linking_vowel);
        let skeleton = plugin.rule_book().resolve(&verb, &ctx)?;
        let prefix = plugin.prefix(&verb, &skeleton, &params);
        let word = word::construct(prefix, &skeleton, &suffix);
        Ok(assembler::assemble(&word))
    }

    /// `conjugate`, rendered as a Unicode string.
    pub fn conjugate_to_string(
        &self,
        root: &VerbRoot,
        stem: Stem,
        dialect: DialectType,
        params: ConjugationParams,
    ) -> Result<String, ConjugationError> {
        self.conjugate(root, stem, dialect, params)
            .map(|units| render_word(&units))
    }

    /// Every context the dialect realizes.
    pub fn paradigm_contexts(&self, dialect: DialectType) -> Vec<ConjugationParams> {
        paradigm::paradigm_contexts(self.metadata(dialect).features())
    }

    /// Conjugate every context of the paradigm in parallel, in enumeration order.
    pub fn conjugate_paradigm(
        &self,
        root: &VerbRoot,
        stem: Stem,
        dialect: DialectType,
    ) -> Vec<ParadigmEntry> {
        paradigm::conjugate_all(self.paradigm_contexts(dialect), |params| {
            self.conjugate(root, stem, dialect, params)
        })
    }
}

fn invalid(reason: &str, params: &ConjugationParams) -> ConjugationError {
    ConjugationError::InvalidContext(format!("{} ({})", reason, params))
}

/// Reject contexts without a realization and normalize unmarked gender.
pub fn validate_context(
    features: DialectFeatures,
    params: ConjugationParams,
) -> Result<ConjugationParams, ConjugationError> {
    if params.tense == Tense::Perfect && params.mood != Mood::Indicative {
        return Err(invalid("the perfect has no mood", &params));
    }
    if params.mood == Mood::Imperative {
        if params.voice == Voice::Passive {
            return Err(invalid("the imperative has no passive", &params));
        }
        if params.person != Person::Second {
            return Err(invalid("the imperative is second person only", &params));
        }
    }
    if params.person == Person::First && params.numerus == Numerus::Dual {
        return Err(invalid("the first person has no dual", &params));
    }
    if params.numerus == Numerus::Dual && !features.has_dual {
        return Err(invalid("dialect has no dual", &params));
    }
    if params.voice == Voice::Passive && !features.has_passive {
        return Err(invalid("dialect has no passive", &params));
    }
    if params.mood == Mood::Jussive && !features.has_jussive {
        return Err(invalid("dialect has no jussive", &params));
    }

    let mut params = params;
    let unmarked_plural = params.numerus == Numerus::Plural && !features.has_female_plural;
    if params.person == Person::First || unmarked_plural {
        params.gender = Gender::Male;
    }
    Ok(params)
}

fn resolve_stem1(
    metadata: &dyn DialectMetadata,
    verb_type: VerbType,
    root: &VerbRoot,
    stem: Stem,
) -> Result<Stem, ConjugationError> {
    let choice = metadata.stem1_context_choices(verb_type, root)?;
    match (stem.pattern(), choice.patterns.as_slice()) {
        (None, [only]) => Ok(stem.with_pattern(*only)),
        (None, _) => Err(ConjugationError::MissingDisambiguatingContext {
            verb_type,
            choices: choice.patterns,
        }),
        (Some(pattern), patterns) if patterns.contains(&pattern) => Ok(stem),
        (Some(pattern), _) => Err(ConjugationError::InvalidContext(format!(
            "pattern {} is not a stem-1 choice for {}",
            pattern, root
        ))),
    }
}
