//! Lebanese hollow verbs
//!
//! R2 never surfaces. The perfect lengthens to `ā` in the third person and
//! shortens to `i` elsewhere; the present carries the long pattern vowel.

use sarf_core::{Letter, Person, Voice, Vowel};

use crate::rules::{ConjugationRule, RuleConditions, Skeleton, Symbol};
use crate::verb::Verb;

use Symbol::{Fixed, R1, R3};
use Vowel::{LongA, ShortA, ShortI, Sukun};

pub(crate) fn rules(verb: &Verb, _voice: Voice) -> Vec<ConjugationRule> {
    match verb.stem_number() {
        1 => stem1(verb),
        8 => stem8(),
        _ => vec![ConjugationRule::unhandled(
            RuleConditions::any(),
            "hollow stem without a Lebanese table",
        )],
    }
}

fn third_perfect() -> RuleConditions {
    RuleConditions::any().perfect().person(Person::Third)
}

fn stem1(verb: &Verb) -> Vec<ConjugationRule> {
    let Some(present) = verb
        .pattern()
        .and_then(|p| p.present_vowel())
        .map(Vowel::lengthened)
    else {
        return vec![ConjugationRule::unhandled(
            RuleConditions::any(),
            "hollow stem without vowel pattern",
        )];
    };

    let skeleton = |vowel| Skeleton::new(vec![R1, R3], vec![vowel]);
    vec![
        ConjugationRule::emit(third_perfect(), skeleton(LongA)),
        ConjugationRule::emit(RuleConditions::any().perfect(), skeleton(ShortI)),
        ConjugationRule::emit(RuleConditions::any(), skeleton(present)),
    ]
}

/// `ḥtāj` / `byiḥtāj`: the infix t takes R2's place.
fn stem8() -> Vec<ConjugationRule> {
    let skeleton = |vowel| Skeleton::new(vec![R1, Fixed(Letter::Ta), R3], vec![Sukun, vowel]);
    vec![
        ConjugationRule::emit(third_perfect(), skeleton(LongA)),
        ConjugationRule::emit(RuleConditions::any().perfect(), skeleton(ShortA)),
        ConjugationRule::emit(
            RuleConditions::any(),
            skeleton(LongA).with_prefix_vowel(ShortI),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleOutcome;
    use sarf_core::{DialectType, Stem, Stem1Pattern, VerbRoot, VerbType};

    fn verb(stem: Stem) -> Verb {
        Verb {
            root: VerbRoot::parse("ب-ي-ع").unwrap(),
            stem,
            verb_type: VerbType::Hollow,
            dialect: DialectType::Lebanese,
        }
    }

    #[test]
    fn present_takes_the_long_pattern_vowel() {
        for (pattern, long) in [
            (Stem1Pattern::PastIPresentI, Vowel::LongI),
            (Stem1Pattern::PastIPresentA, Vowel::LongA),
            (Stem1Pattern::PastIPresentU, Vowel::LongU),
        ] {
            let table = rules(&verb(Stem::basic(pattern)), Voice::Active);
            match &table.last().unwrap().outcome {
                RuleOutcome::Emit(skeleton) => assert_eq!(skeleton.vowels, vec![long]),
                other => panic!("unexpected outcome {:?}", other),
            }
        }
    }

    #[test]
    fn pattern_is_required() {
        let table = rules(&verb(Stem::basic_unresolved()), Voice::Active);
        assert!(matches!(table[0].outcome, RuleOutcome::Unhandled(_)));
    }
}
