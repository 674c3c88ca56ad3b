use sarf_core::{Letter, Voice, Vowel};

use crate::rules::{ConjugationRule, RuleConditions, Skeleton, Symbol};
use crate::verb::Verb;

use Symbol::{Fixed, R1, R2, R3, R4};
use Vowel::{ShortA, ShortI, ShortU, Sukun};

pub(crate) fn rules(verb: &Verb, voice: Voice) -> Vec<ConjugationRule> {
    match verb.stem_number() {
        1 => stem1(voice),
        2 => stem2(voice),
        4 => stem4(voice),
        _ => vec![ConjugationRule::unhandled(
            RuleConditions::any(),
            "quadriliteral stem without a table",
        )],
    }
}

fn stem1(voice: Voice) -> Vec<ConjugationRule> {
    let symbols = vec![R1, R2, R3, R4];
    let (perfect, present) = match voice {
        Voice::Active => (vec![ShortA, Sukun, ShortA], vec![ShortA, Sukun, ShortI]),
        Voice::Passive => (vec![ShortU, Sukun, ShortI], vec![ShortA, Sukun, ShortA]),
    };
    vec![
        ConjugationRule::emit(
            RuleConditions::any().perfect(),
            Skeleton::new(symbols.clone(), perfect),
        ),
        ConjugationRule::emit(RuleConditions::any(), Skeleton::new(symbols, present)),
    ]
}

fn stem2(voice: Voice) -> Vec<ConjugationRule> {
    let symbols = vec![Fixed(Letter::Ta), R1, R2, R3, R4];
    let (r1v, r3v) = match voice {
        Voice::Active => (ShortA, ShortA),
        Voice::Passive => (ShortU, ShortI),
    };
    vec![
        ConjugationRule::emit(
            RuleConditions::any().perfect(),
            Skeleton::new(symbols.clone(), vec![r1v, r1v, Sukun, r3v]),
        ),
        ConjugationRule::emit(
            RuleConditions::any(),
            Skeleton::new(symbols, vec![ShortA, ShortA, Sukun, ShortA]),
        ),
    ]
}

/// R4 doubles, and splits before consonantal suffixes.
fn stem4(voice: Voice) -> Vec<ConjugationRule> {
    let symbols = vec![R1, R2, R3, R4, R4];
    let (r2v, r3v, r3present) = match voice {
        Voice::Active => (ShortA, ShortA, ShortI),
        Voice::Passive => (ShortU, ShortI, ShortA),
    };
    let skeleton = |vowels: Vec<Vowel>| Skeleton::new(symbols.clone(), vowels);
    vec![
        ConjugationRule::emit(
            RuleConditions::any().perfect().suffix_sukun(true),
            skeleton(vec![Sukun, r2v, Sukun, r3v]),
        ),
        ConjugationRule::emit(
            RuleConditions::any().perfect(),
            skeleton(vec![Sukun, r2v, r3v, Sukun]),
        ),
        ConjugationRule::emit(
            RuleConditions::any().suffix_sukun(true),
            skeleton(vec![Sukun, ShortA, Sukun, r3present]),
        ),
        ConjugationRule::emit(
            RuleConditions::any(),
            skeleton(vec![Sukun, ShortA, r3present, Sukun]),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem4_splits_before_sukun_suffix() {
        let table = stem4(Voice::Active);
        assert_eq!(table.len(), 4);
        match &table[0].outcome {
            crate::rules::RuleOutcome::Emit(s) => {
                assert_eq!(s.vowels, vec![Sukun, ShortA, Sukun, ShortA]);
                assert!(s.links_suffix());
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn passive_stem2_perfect_vowels() {
        let table = stem2(Voice::Passive);
        match &table[0].outcome {
            crate::rules::RuleOutcome::Emit(s) => {
                assert_eq!(s.vowels, vec![ShortU, ShortU, Sukun, ShortI]);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}
