//! Lebanese sound verbs
//!
//! Stem 1 splits into the a-perfect patterns (aa, aiiu, aiiuu, ausu) and the
//! i-perfect patterns (ia, iaa, iu). Stress falls on R1 in the third person of
//! the perfect and on R2 elsewhere. The derived stems drop the MSA wasl
//! syllable and start on a vowelless consonant.

use sarf_core::{Gender, Letter, Mood, Numerus, Person, Stem1Pattern, Voice, Vowel};

use crate::rules::{ConjugationRule, RuleConditions, Skeleton, Symbol};
use crate::verb::Verb;

use Stem1Pattern::*;
use Symbol::{Fixed, R1, R2, R3};
use Vowel::{LongA, LongU, ShortA, ShortI, ShortU, Sukun};

pub(crate) fn rules(verb: &Verb, _voice: Voice) -> Vec<ConjugationRule> {
    match verb.stem_number() {
        1 => match verb.pattern() {
            Some(p @ (PastAPresentA | PastAPresentIIU | PastAPresentIIUU | PastAPresentUSU)) => {
                a_perfect(p)
            }
            Some(p @ (PastIPresentA | PastIPresentAA | PastIPresentU)) => i_perfect(p),
            _ => vec![ConjugationRule::unhandled(
                RuleConditions::any(),
                "stem-1 pattern without a Lebanese table",
            )],
        },
        2 => derived(
            vec![R1, R2, R2, R3],
            &[ShortA, Sukun, ShortA],
            &[ShortA, Sukun, Sukun],
            &[ShortA, Sukun, ShortI],
            None,
        ),
        3 => derived(
            vec![R1, R2, R3],
            &[LongA, ShortA],
            &[LongA, Sukun],
            &[LongA, ShortI],
            None,
        ),
        4 => stem4(),
        5 => uniform(
            vec![Fixed(Letter::Ta), R1, R2, R2, R3],
            &[Sukun, ShortA, Sukun, ShortA],
        ),
        6 => uniform(vec![Fixed(Letter::Ta), R1, R2, R3], &[Sukun, LongA, ShortA]),
        7 => derived(
            vec![Fixed(Letter::Nun), R1, R2, R3],
            &[Sukun, ShortA, ShortA],
            &[Sukun, ShortU, Sukun],
            &[Sukun, ShortU, ShortI],
            Some(ShortU),
        ),
        8 => derived(
            vec![R1, Fixed(Letter::Ta), R2, R3],
            &[Sukun, ShortA, ShortA],
            &[Sukun, ShortI, Sukun],
            &[Sukun, ShortI, ShortI],
            None,
        ),
        10 => derived(
            vec![Fixed(Letter::Siin), Fixed(Letter::Ta), R1, R2, R3],
            &[Sukun, ShortA, Sukun, ShortA],
            &[Sukun, ShortA, Sukun, Sukun],
            &[Sukun, ShortA, Sukun, ShortI],
            None,
        ),
        _ => vec![ConjugationRule::unhandled(
            RuleConditions::any(),
            "stem without a Lebanese table",
        )],
    }
}

pub(super) fn triliteral(vowels: [Vowel; 2]) -> Skeleton {
    Skeleton::new(vec![R1, R2, R3], vowels.to_vec())
}

pub(super) fn vowel_suffix() -> RuleConditions {
    RuleConditions::any().vowel_suffix(true)
}

pub(super) fn imperative() -> RuleConditions {
    RuleConditions::any().mood(Mood::Imperative)
}

pub(super) fn a_perfect(pattern: Stem1Pattern) -> Vec<ConjugationRule> {
    let prefix = if pattern == PastAPresentUSU { ShortU } else { ShortI };
    let (imperative_linked, imperative_long, present) = match pattern {
        PastAPresentA => (ShortA, LongA, ShortA),
        PastAPresentIIU => (ShortI, LongU, ShortU),
        _ => (ShortU, LongU, ShortU),
    };
    let present_linked = match pattern {
        PastAPresentA => [Sukun, ShortA],
        PastAPresentIIU | PastAPresentIIUU => [ShortI, Sukun],
        _ => [Sukun, Sukun],
    };

    vec![
        ConjugationRule::emit(
            RuleConditions::any().perfect().person(Person::Third),
            triliteral([ShortA, ShortA]).with_emphasis(0),
        ),
        ConjugationRule::emit(
            RuleConditions::any().perfect(),
            triliteral([ShortA, ShortA]).with_emphasis(1),
        ),
        ConjugationRule::emit(
            imperative().vowel_suffix(true),
            triliteral([Sukun, imperative_linked]),
        ),
        ConjugationRule::emit(imperative(), triliteral([Sukun, imperative_long])),
        ConjugationRule::emit(
            vowel_suffix(),
            triliteral(present_linked).with_prefix_vowel(prefix),
        ),
        ConjugationRule::emit(
            RuleConditions::any(),
            triliteral([Sukun, present]).with_prefix_vowel(prefix),
        ),
    ]
}

fn i_perfect(pattern: Stem1Pattern) -> Vec<ConjugationRule> {
    let prefix = if pattern == PastIPresentAA { ShortA } else { ShortI };
    let present = match pattern {
        PastIPresentA => ShortA,
        PastIPresentU => ShortU,
        _ => ShortI,
    };
    let (imperative_linked, imperative_long, present_linked) = if pattern == PastIPresentA {
        (ShortA, LongA, [Sukun, ShortA])
    } else {
        (ShortI, LongU, [Sukun, Sukun])
    };

    vec![
        ConjugationRule::emit(
            RuleConditions::any()
                .perfect()
                .person(Person::Third)
                .gender(Gender::Male)
                .numerus(Numerus::Singular),
            triliteral([ShortI, ShortI]).with_emphasis(0),
        ),
        ConjugationRule::emit(
            RuleConditions::any().perfect().person(Person::Third),
            triliteral([ShortI, Sukun]).with_emphasis(0),
        ),
        ConjugationRule::emit(
            RuleConditions::any().perfect(),
            triliteral([Sukun, ShortI]).with_emphasis(1),
        ),
        ConjugationRule::emit(
            imperative().vowel_suffix(true),
            triliteral([Sukun, imperative_linked]),
        ),
        ConjugationRule::emit(imperative(), triliteral([Sukun, imperative_long])),
        ConjugationRule::emit(
            vowel_suffix(),
            triliteral(present_linked).with_prefix_vowel(prefix),
        ),
        ConjugationRule::emit(
            RuleConditions::any(),
            triliteral([Sukun, present]).with_prefix_vowel(prefix),
        ),
    ]
}

/// The perfect is prefixed with a hamza; the present keeps the bare root.
fn stem4() -> Vec<ConjugationRule> {
    vec![
        ConjugationRule::emit(
            RuleConditions::any().perfect(),
            Skeleton::new(vec![Fixed(Letter::Hamza), R1, R2, R3], vec![ShortA, Sukun, ShortA]),
        ),
        ConjugationRule::emit(
            imperative().vowel_suffix(true),
            triliteral([Sukun, ShortI]),
        ),
        ConjugationRule::emit(imperative(), triliteral([Sukun, LongU])),
        ConjugationRule::emit(
            vowel_suffix(),
            triliteral([ShortI, Sukun]).with_prefix_vowel(ShortI),
        ),
        ConjugationRule::emit(
            RuleConditions::any(),
            triliteral([Sukun, ShortU]).with_prefix_vowel(ShortI),
        ),
    ]
}

/// One vocalization for every context, with an `i` on the person prefix.
fn uniform(symbols: Vec<Symbol>, vowels: &[Vowel]) -> Vec<ConjugationRule> {
    derived(symbols, vowels, vowels, vowels, Some(ShortI))
}

/// Perfect, present before a vowel suffix, and the remaining present forms.
pub(super) fn derived(
    symbols: Vec<Symbol>,
    perfect: &[Vowel],
    before_vowel: &[Vowel],
    present: &[Vowel],
    prefix_vowel: Option<Vowel>,
) -> Vec<ConjugationRule> {
    let present_skeleton = |vowels: &[Vowel]| {
        let skeleton = Skeleton::new(symbols.clone(), vowels.to_vec());
        match prefix_vowel {
            Some(v) => skeleton.with_prefix_vowel(v),
            None => skeleton,
        }
    };
    vec![
        ConjugationRule::emit(
            RuleConditions::any().perfect(),
            Skeleton::new(symbols.clone(), perfect.to_vec()),
        ),
        ConjugationRule::emit(vowel_suffix(), present_skeleton(before_vowel)),
        ConjugationRule::emit(RuleConditions::any(), present_skeleton(present)),
    ]
}
