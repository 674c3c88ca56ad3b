//! Defective verbs
//!
//! The weak R3 surfaces as a long vowel, a diphthong, a glide or nothing,
//! depending on the vowel before it and on the suffix. The tails below work
//! on a [`Head`], the slots in front of R3, so the irregular and
//! doubly-weak tables can reuse them with their own heads.

use sarf_core::{Gender, Letter, Mood, Numerus, Person, Stem1Pattern, Tense, Voice, Vowel};

use super::sound;
use crate::rules::{ConjugationRule, RuleConditions, RuleOutcome, Skeleton, Symbol};
use crate::verb::Verb;

use Vowel::{BrokenA, DiphthongAj, DiphthongAw, LongA, LongI, LongU, ShortA, ShortI, ShortU};

/// Slots in front of the weak final radical, each with its vowel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Head {
    symbols: Vec<Symbol>,
    vowels: Vec<Vowel>,
}

impl Head {
    pub(crate) fn new(symbols: Vec<Symbol>, vowels: Vec<Vowel>) -> Self {
        debug_assert_eq!(symbols.len(), vowels.len());
        Self { symbols, vowels }
    }

    /// Head of a sound skeleton ending in R3.
    pub(crate) fn from_sound(skeleton: Skeleton) -> Option<Self> {
        let mut symbols = skeleton.symbols;
        if symbols.pop() != Some(Symbol::R3) || symbols.len() != skeleton.vowels.len() {
            return None;
        }
        Some(Self::new(symbols, skeleton.vowels))
    }

    /// Vowel before the weak radical.
    fn v2(&self) -> Option<Vowel> {
        self.vowels.last().copied()
    }

    /// The weak radical drops; the suffix vowel lands on the last head slot.
    fn dropped(&self) -> Skeleton {
        let vowels = self.vowels[..self.vowels.len().saturating_sub(1)].to_vec();
        Skeleton::new(self.symbols.clone(), vowels)
    }

    /// The weak radical fuses into the vowel of the last head slot.
    fn fused(&self, vowel: Vowel) -> Skeleton {
        let mut vowels = self.vowels.clone();
        if let Some(last) = vowels.last_mut() {
            *last = vowel;
        }
        Skeleton::new(self.symbols.clone(), vowels)
    }

    /// The weak radical surfaces as a glide carrying the suffix vowel.
    fn glide(&self, letter: Letter) -> Skeleton {
        let mut symbols = self.symbols.clone();
        symbols.push(Symbol::Fixed(letter));
        Skeleton::new(symbols, self.vowels.clone())
    }
}

fn third(base: &RuleConditions, gender: Gender, numerus: Numerus) -> RuleConditions {
    base.clone()
        .person(Person::Third)
        .gender(gender)
        .numerus(numerus)
}

/// Perfect forms over `head`. `glide` is the letter R3 turns into before a
/// consonantal suffix, `long_final` the vowel of the bare 3ms form.
pub(crate) fn perfect_tail(
    base: RuleConditions,
    head: &Head,
    glide: Letter,
    long_final: Vowel,
) -> Vec<ConjugationRule> {
    match head.v2() {
        Some(ShortA) => vec![
            ConjugationRule::emit(
                third(&base, Gender::Male, Numerus::Singular),
                head.fused(long_final),
            ),
            ConjugationRule::emit(
                third(&base, Gender::Female, Numerus::Singular),
                head.dropped(),
            ),
            ConjugationRule::emit(third(&base, Gender::Female, Numerus::Dual), head.dropped()),
            ConjugationRule::emit(
                third(&base, Gender::Male, Numerus::Plural),
                head.fused(DiphthongAw),
            ),
            ConjugationRule::emit(base, head.glide(glide)),
        ],
        Some(ShortI) => vec![
            ConjugationRule::emit(third(&base, Gender::Male, Numerus::Plural), head.dropped()),
            ConjugationRule::emit(base.clone().suffix_sukun(true), head.fused(LongI)),
            ConjugationRule::emit(base, head.glide(Letter::Ya)),
        ],
        _ => vec![ConjugationRule::unhandled(
            base,
            "defective perfect after this vowel",
        )],
    }
}

/// Present forms over `head`. `long_a` is the written long a of the bare
/// indicative when the head ends in a.
pub(crate) fn present_tail(base: RuleConditions, head: &Head, long_a: Vowel) -> Vec<ConjugationRule> {
    match head.v2() {
        Some(v2 @ (ShortI | ShortU)) => {
            let glide = if v2 == ShortI { Letter::Ya } else { Letter::Waw };
            vec![
                ConjugationRule::emit(base.clone().numerus(Numerus::Dual), head.glide(glide)),
                ConjugationRule::emit(base.clone().vowel_suffix(true), head.dropped()),
                ConjugationRule::emit(
                    base.clone().gender(Gender::Female).numerus(Numerus::Plural),
                    head.fused(v2.lengthened()),
                ),
                ConjugationRule::emit(
                    base.clone().mood(Mood::Indicative),
                    head.fused(v2.lengthened()),
                ),
                ConjugationRule::emit(base.clone().mood(Mood::Subjunctive), head.glide(glide)),
                ConjugationRule::emit(base, head.fused(v2)),
            ]
        }
        Some(ShortA) => vec![
            ConjugationRule::emit(base.clone().numerus(Numerus::Dual), head.glide(Letter::Ya)),
            ConjugationRule::emit(base.clone().linking_vowel(LongI), head.fused(DiphthongAj)),
            ConjugationRule::emit(base.clone().linking_vowel(LongU), head.fused(DiphthongAw)),
            ConjugationRule::emit(
                base.clone().gender(Gender::Female).numerus(Numerus::Plural),
                head.glide(Letter::Ya),
            ),
            ConjugationRule::emit(
                base.clone().moods(&[Mood::Indicative, Mood::Subjunctive]),
                head.fused(long_a),
            ),
            ConjugationRule::emit(base, head.fused(ShortA)),
        ],
        _ => vec![ConjugationRule::unhandled(
            base,
            "defective present after this vowel",
        )],
    }
}

/// Give every emitted skeleton a fixed person-prefix vowel.
pub(crate) fn with_prefix_vowel(rules: Vec<ConjugationRule>, vowel: Vowel) -> Vec<ConjugationRule> {
    rules
        .into_iter()
        .map(|mut rule| {
            if let RuleOutcome::Emit(skeleton) = rule.outcome {
                rule.outcome = RuleOutcome::Emit(skeleton.with_prefix_vowel(vowel));
            }
            rule
        })
        .collect()
}

/// Long a of the 3ms perfect: alef after ya and in the دعا class, alef
/// maksura otherwise.
pub(crate) fn perfect_long_final(verb: &Verb) -> Vowel {
    if verb.pattern() == Some(Stem1Pattern::DefectiveType2) || verb.root.r2() == Letter::Ya {
        LongA
    } else {
        BrokenA
    }
}

pub(crate) fn present_long_a(verb: &Verb) -> Vowel {
    if verb.root.r2() == Letter::Ya {
        LongA
    } else {
        BrokenA
    }
}

pub(crate) fn rules(verb: &Verb, voice: Voice) -> Vec<ConjugationRule> {
    let glide = if verb.pattern() == Some(Stem1Pattern::DefectiveType2) {
        Letter::Waw
    } else {
        Letter::Ya
    };

    let mut rules = match sound::stem_skeleton(verb, Tense::Perfect, voice).and_then(Head::from_sound)
    {
        Some(head) => perfect_tail(
            RuleConditions::any().perfect(),
            &head,
            glide,
            perfect_long_final(verb),
        ),
        None => vec![ConjugationRule::unhandled(
            RuleConditions::any().perfect(),
            "no defective perfect skeleton",
        )],
    };
    match sound::stem_skeleton(verb, Tense::Present, voice).and_then(Head::from_sound) {
        Some(head) => rules.extend(present_tail(
            RuleConditions::any(),
            &head,
            present_long_a(verb),
        )),
        None => rules.push(ConjugationRule::unhandled(
            RuleConditions::any(),
            "no defective present skeleton",
        )),
    }
    rules
}

/// R1 and R3 weak: the present drops R1 and ends like a defective verb.
pub(crate) fn assimilated_rules(verb: &Verb, voice: Voice) -> Vec<ConjugationRule> {
    let mut rules = vec![ConjugationRule::base(
        RuleConditions::any().perfect(),
        sarf_core::VerbType::Defective,
    )];
    let present = match voice {
        Voice::Active => verb.pattern().and_then(|p| p.present_vowel()),
        Voice::Passive => Some(ShortA),
    };
    match present {
        Some(v2) => {
            let head = Head::new(vec![Symbol::R2], vec![v2]);
            let tail = present_tail(RuleConditions::any(), &head, present_long_a(verb));
            rules.extend(match voice {
                Voice::Active => tail,
                Voice::Passive => with_prefix_vowel(tail, LongU),
            });
        }
        None => rules.push(ConjugationRule::unhandled(
            RuleConditions::any(),
            "no present vowel",
        )),
    }
    rules
}
