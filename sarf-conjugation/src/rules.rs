//! Rule Engine
//!
//! Every (verb type, stem) pair of a dialect owns an ordered rule table. The
//! first rule whose conditions hold for the request wins; its outcome is a
//! skeleton, a delegation to another verb type's table, or a named refusal.
//! The last rule of every table is unconditional, so lookup never falls off
//! the end.

use ahash::AHashMap;
use tracing::trace;

use sarf_core::{
    ConjugationError, ConjugationParams, DialectType, Gender, Letter, Mood, Numerus, Person,
    Tense, VerbRoot, VerbType, Voice, Vowel,
};

use crate::verb::Verb;

/// Delegation hops allowed before a lookup is declared cyclic.
pub const MAX_DELEGATION_HOPS: usize = 8;

/// A skeleton slot: one of the radicals or a fixed letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    R1,
    R2,
    R3,
    R4,
    Fixed(Letter),
}

impl Symbol {
    fn resolve(self, root: &VerbRoot) -> Option<Letter> {
        match self {
            Symbol::R1 => root.radical(1),
            Symbol::R2 => root.radical(2),
            Symbol::R3 => root.radical(3),
            Symbol::R4 => root.radical(4),
            Symbol::Fixed(letter) => Some(letter),
        }
    }
}

/// Consonant slots and their vowels.
///
/// `vowels` is either as long as `symbols`, or one shorter, in which case the
/// last slot takes the linking vowel of the suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skeleton {
    pub symbols: Vec<Symbol>,
    pub vowels: Vec<Vowel>,
    /// Replaces the vowel of the person prefix.
    pub prefix_vowel: Option<Vowel>,
    /// Slot carrying stress.
    pub emphasize: Option<usize>,
}

impl Skeleton {
    pub fn new(symbols: Vec<Symbol>, vowels: Vec<Vowel>) -> Self {
        Self {
            symbols,
            vowels,
            prefix_vowel: None,
            emphasize: None,
        }
    }

    pub fn with_prefix_vowel(mut self, vowel: Vowel) -> Self {
        self.prefix_vowel = Some(vowel);
        self
    }

    pub fn with_emphasis(mut self, slot: usize) -> Self {
        self.emphasize = Some(slot);
        self
    }

    /// Swap every occurrence of one slot for another.
    pub fn replace_symbol(mut self, from: Symbol, to: Symbol) -> Self {
        for symbol in &mut self.symbols {
            if *symbol == from {
                *symbol = to;
            }
        }
        self
    }

    /// Whether the last slot takes the suffix's linking vowel.
    pub fn links_suffix(&self) -> bool {
        self.vowels.len() + 1 == self.symbols.len()
    }

    pub fn is_well_formed(&self) -> bool {
        let lengths_fit = self.vowels.len() == self.symbols.len() || self.links_suffix();
        let emphasis_fits = self.emphasize.map_or(true, |slot| slot < self.symbols.len());
        lengths_fit && emphasis_fits
    }

    /// Substitute radicals and complete the vowel list.
    pub fn resolve(&self, root: &VerbRoot, linking_vowel: Vowel) -> Option<ResolvedSkeleton> {
        if !self.is_well_formed() {
            return None;
        }
        let letters = self
            .symbols
            .iter()
            .map(|symbol| symbol.resolve(root))
            .collect::<Option<Vec<_>>>()?;
        let mut vowels = self.vowels.clone();
        if self.links_suffix() {
            vowels.push(linking_vowel);
        }
        Some(ResolvedSkeleton {
            letters,
            vowels,
            prefix_vowel: self.prefix_vowel,
            emphasize: self.emphasize,
        })
    }
}

/// A skeleton with concrete letters and one vowel per letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSkeleton {
    pub letters: Vec<Letter>,
    pub vowels: Vec<Vowel>,
    pub prefix_vowel: Option<Vowel>,
    pub emphasize: Option<usize>,
}

impl ResolvedSkeleton {
    pub fn first_vowel(&self) -> Option<Vowel> {
        self.vowels.first().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Emit(Skeleton),
    /// Continue in another verb type's table for the same stem.
    Base(VerbType),
    /// The context has no realization for this verb.
    NotApplicable(&'static str),
    /// A known gap in the dialect's coverage.
    Unhandled(&'static str),
}

/// Request facts a rule can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchContext {
    pub params: ConjugationParams,
    pub linking_vowel: Vowel,
}

impl MatchContext {
    pub fn new(params: ConjugationParams, linking_vowel: Vowel) -> Self {
        Self {
            params,
            linking_vowel,
        }
    }

    pub fn suffix_begins_with_sukun(&self) -> bool {
        self.linking_vowel == Vowel::Sukun
    }

    /// Suffixes that open with a long vowel: `-ī`, `-ū` and `-ā`.
    pub fn has_vowel_suffix(&self) -> bool {
        matches!(
            self.linking_vowel,
            Vowel::LongA | Vowel::LongI | Vowel::LongU
        )
    }
}

/// Conjunction of optional constraints. An empty set matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleConditions {
    pub tense: Option<Tense>,
    /// Any of these moods; only satisfiable in the present tense.
    pub moods: Vec<Mood>,
    pub voice: Option<Voice>,
    pub person: Option<Person>,
    pub gender: Option<Gender>,
    pub numerus: Option<Numerus>,
    pub suffix_begins_with_sukun: Option<bool>,
    pub vowel_suffix: Option<bool>,
    pub linking_vowel: Option<Vowel>,
}

impl RuleConditions {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn tense(mut self, tense: Tense) -> Self {
        self.tense = Some(tense);
        self
    }

    pub fn perfect(self) -> Self {
        self.tense(Tense::Perfect)
    }

    pub fn present(self) -> Self {
        self.tense(Tense::Present)
    }

    pub fn mood(mut self, mood: Mood) -> Self {
        self.moods.push(mood);
        self
    }

    pub fn moods(mut self, moods: &[Mood]) -> Self {
        self.moods.extend_from_slice(moods);
        self
    }

    pub fn voice(mut self, voice: Voice) -> Self {
        self.voice = Some(voice);
        self
    }

    pub fn person(mut self, person: Person) -> Self {
        self.person = Some(person);
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn numerus(mut self, numerus: Numerus) -> Self {
        self.numerus = Some(numerus);
        self
    }

    pub fn suffix_sukun(mut self, begins_with_sukun: bool) -> Self {
        self.suffix_begins_with_sukun = Some(begins_with_sukun);
        self
    }

    pub fn vowel_suffix(mut self, vowel_suffix: bool) -> Self {
        self.vowel_suffix = Some(vowel_suffix);
        self
    }

    pub fn linking_vowel(mut self, vowel: Vowel) -> Self {
        self.linking_vowel = Some(vowel);
        self
    }

    pub fn is_unconditional(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, ctx: &MatchContext) -> bool {
        let p = &ctx.params;
        let moods_hold = self.moods.is_empty()
            || (p.tense == Tense::Present && self.moods.contains(&p.mood));

        moods_hold
            && self.tense.map_or(true, |t| t == p.tense)
            && self.voice.map_or(true, |v| v == p.voice)
            && self.person.map_or(true, |v| v == p.person)
            && self.gender.map_or(true, |v| v == p.gender)
            && self.numerus.map_or(true, |v| v == p.numerus)
            && self
                .suffix_begins_with_sukun
                .map_or(true, |v| v == ctx.suffix_begins_with_sukun())
            && self
                .vowel_suffix
                .map_or(true, |v| v == ctx.has_vowel_suffix())
            && self.linking_vowel.map_or(true, |v| v == ctx.linking_vowel)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConjugationRule {
    pub conditions: RuleConditions,
    pub outcome: RuleOutcome,
}

impl ConjugationRule {
    pub fn emit(conditions: RuleConditions, skeleton: Skeleton) -> Self {
        Self {
            conditions,
            outcome: RuleOutcome::Emit(skeleton),
        }
    }

    pub fn base(conditions: RuleConditions, verb_type: VerbType) -> Self {
        Self {
            conditions,
            outcome: RuleOutcome::Base(verb_type),
        }
    }

    pub fn not_applicable(conditions: RuleConditions, reason: &'static str) -> Self {
        Self {
            conditions,
            outcome: RuleOutcome::NotApplicable(reason),
        }
    }

    pub fn unhandled(conditions: RuleConditions, detail: &'static str) -> Self {
        Self {
            conditions,
            outcome: RuleOutcome::Unhandled(detail),
        }
    }
}

/// Builds the rule table of one (verb type, stem) for a verb and voice.
pub type RuleBuilder = fn(&Verb, Voice) -> Vec<ConjugationRule>;

/// A dialect's registry of rule tables.
pub struct RuleBook {
    dialect: DialectType,
    builders: AHashMap<(VerbType, u8), RuleBuilder>,
}

impl RuleBook {
    pub fn new(dialect: DialectType) -> Self {
        Self {
            dialect,
            builders: AHashMap::new(),
        }
    }

    pub fn register(
        &mut self,
        verb_type: VerbType,
        stems: impl IntoIterator<Item = u8>,
        builder: RuleBuilder,
    ) -> &mut Self {
        for stem in stems {
            self.builders.insert((verb_type, stem), builder);
        }
        self
    }

    pub fn dialect(&self) -> DialectType {
        self.dialect
    }

    pub fn has_table(&self, verb_type: VerbType, stem: u8) -> bool {
        self.builders.contains_key(&(verb_type, stem))
    }

    /// Registered (verb type, stem) pairs.
    pub fn tables(&self) -> impl Iterator<Item = (VerbType, u8)> + '_ {
        self.builders.keys().copied()
    }

    pub fn rules(&self, verb_type: VerbType, verb: &Verb, voice: Voice) -> Option<Vec<ConjugationRule>> {
        self.builders
            .get(&(verb_type, verb.stem_number()))
            .map(|build| build(verb, voice))
    }

    /// Find the skeleton for a request, following delegations.
    pub fn resolve(
        &self,
        verb: &Verb,
        ctx: &MatchContext,
    ) -> Result<ResolvedSkeleton, ConjugationError> {
        let mut verb_type = verb.verb_type;
        for _ in 0..=MAX_DELEGATION_HOPS {
            let rules = self
                .rules(verb_type, verb, ctx.params.voice)
                .ok_or_else(|| self.unhandled(verb, verb_type, "no rule table".to_string()))?;

            let rule = rules
                .iter()
                .find(|rule| rule.conditions.matches(ctx))
                .ok_or_else(|| {
                    self.unhandled(verb, verb_type, format!("no rule matches {}", ctx.params))
                })?;
            trace!(?verb_type, conditions = ?rule.conditions, "matched rule");

            match &rule.outcome {
                RuleOutcome::Emit(skeleton) => {
                    return skeleton
                        .resolve(&verb.root, ctx.linking_vowel)
                        .ok_or_else(|| {
                            self.unhandled(verb, verb_type, format!("malformed skeleton {:?}", skeleton))
                        });
                }
                RuleOutcome::Base(next) => {
                    trace!(from = ?verb_type, to = ?next, "delegating");
                    verb_type = *next;
                }
                RuleOutcome::NotApplicable(reason) => {
                    return Err(ConjugationError::InvalidContext(format!(
                        "{} ({} {})",
                        reason, verb.root, ctx.params
                    )));
                }
                RuleOutcome::Unhandled(detail) => {
                    return Err(self.unhandled(verb, verb_type, detail.to_string()));
                }
            }
        }
        Err(ConjugationError::DelegationLimit {
            verb_type: verb.verb_type,
            limit: MAX_DELEGATION_HOPS,
        })
    }

    fn unhandled(&self, verb: &Verb, verb_type: VerbType, detail: String) -> ConjugationError {
        ConjugationError::UnhandledCase {
            dialect: self.dialect,
            verb_type,
            stem: verb.stem_number(),
            detail,
        }
    }
}
