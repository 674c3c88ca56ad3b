//! Lebanese quadriliteral verbs

use sarf_core::{Letter, Person, Voice, Vowel};

use super::sound::vowel_suffix;
use crate::rules::{ConjugationRule, RuleConditions, Skeleton, Symbol};
use crate::verb::Verb;

use Symbol::{Fixed, R1, R2, R3, R4};
use Vowel::{ShortA, ShortI, Sukun};

pub(crate) fn rules(verb: &Verb, _voice: Voice) -> Vec<ConjugationRule> {
    match verb.stem_number() {
        1 => stem1(),
        2 => stem2(),
        _ => vec![ConjugationRule::unhandled(
            RuleConditions::any(),
            "quadriliteral stem without a Lebanese table",
        )],
    }
}

/// `daḥraj` / `bidaḥrij`. Stress on R1 in the third person of the perfect,
/// on R3 elsewhere.
fn stem1() -> Vec<ConjugationRule> {
    let skeleton = |vowels: &[Vowel]| Skeleton::new(vec![R1, R2, R3, R4], vowels.to_vec());
    vec![
        ConjugationRule::emit(
            RuleConditions::any().perfect().person(Person::Third),
            skeleton(&[ShortA, Sukun, ShortA]).with_emphasis(0),
        ),
        ConjugationRule::emit(
            RuleConditions::any().perfect(),
            skeleton(&[ShortA, Sukun, ShortA]).with_emphasis(2),
        ),
        ConjugationRule::emit(vowel_suffix(), skeleton(&[ShortA, Sukun, Sukun])),
        ConjugationRule::emit(RuleConditions::any(), skeleton(&[ShortA, Sukun, ShortI])),
    ]
}

/// `tdaḥraj` / `byitdaḥraj`: one vocalization throughout.
fn stem2() -> Vec<ConjugationRule> {
    let skeleton = || {
        Skeleton::new(
            vec![Fixed(Letter::Ta), R1, R2, R3, R4],
            vec![Sukun, ShortA, Sukun, ShortA],
        )
    };
    vec![
        ConjugationRule::emit(
            RuleConditions::any().perfect().person(Person::Third),
            skeleton().with_emphasis(1),
        ),
        ConjugationRule::emit(RuleConditions::any().perfect(), skeleton().with_emphasis(3)),
        ConjugationRule::emit(RuleConditions::any(), skeleton().with_prefix_vowel(ShortI)),
    ]
}
