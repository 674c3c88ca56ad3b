//! Lebanese geminate verbs
//!
//! R2 and R3 stay fused throughout; the perfect inserts `-ay-` before
//! consonantal suffixes outside the third person.

use sarf_core::{Person, Stem1Pattern, Voice, Vowel};

use crate::rules::{ConjugationRule, RuleConditions, Skeleton, Symbol};
use crate::verb::Verb;

use Symbol::{R1, R2, R3};
use Vowel::{DiphthongAj, ShortA, ShortI, ShortU, Sukun};

pub(crate) fn rules(verb: &Verb, _voice: Voice) -> Vec<ConjugationRule> {
    let present = match (verb.stem_number(), verb.pattern()) {
        (1, Some(Stem1Pattern::PastAPresentA)) => ShortA,
        (1, Some(Stem1Pattern::PastAPresentI)) => ShortI,
        (1, Some(Stem1Pattern::PastAPresentU)) => ShortU,
        _ => {
            return vec![ConjugationRule::unhandled(
                RuleConditions::any(),
                "geminate stem without a Lebanese table",
            )]
        }
    };

    let skeleton = |vowels: &[Vowel]| Skeleton::new(vec![R1, R2, R3], vowels.to_vec());
    vec![
        ConjugationRule::emit(
            RuleConditions::any().perfect().person(Person::Third),
            skeleton(&[ShortA, Sukun]),
        ),
        ConjugationRule::emit(
            RuleConditions::any().perfect(),
            skeleton(&[ShortA, Sukun, DiphthongAj]),
        ),
        ConjugationRule::emit(RuleConditions::any(), skeleton(&[present, Sukun])),
    ]
}
