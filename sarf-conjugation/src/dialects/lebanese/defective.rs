//! Lebanese defective verbs
//!
//! R3 surfaces as `-a`, `-i` or `-ay-` depending on the context and is only
//! written as a consonant where the i-perfect keeps it before a suffix.

use sarf_core::{Gender, Letter, Numerus, Person, Stem1Pattern, Voice, Vowel};

use super::sound::vowel_suffix;
use crate::rules::{ConjugationRule, RuleConditions, Skeleton, Symbol};
use crate::verb::Verb;

use Symbol::{Fixed, R1, R2, R3};
use Vowel::{BrokenA, DiphthongAj, LongA, LongI, LongU, ShortA, ShortI, Sukun};

pub(crate) fn rules(verb: &Verb, _voice: Voice) -> Vec<ConjugationRule> {
    match verb.stem_number() {
        1 => match verb.pattern() {
            Some(p @ (Stem1Pattern::PastAPresentI | Stem1Pattern::PastIPresentA)) => stem1(p),
            _ => vec![ConjugationRule::unhandled(
                RuleConditions::any(),
                "stem-1 pattern without a Lebanese table",
            )],
        },
        2 => stem2(),
        5 => final_a(vec![Fixed(Letter::Ta), R1, R2, R2], &[Sukun, ShortA, Sukun]),
        6 => final_a(vec![Fixed(Letter::Ta), R1, R2], &[Sukun, LongA]),
        _ => vec![ConjugationRule::unhandled(
            RuleConditions::any(),
            "defective stem without a Lebanese table",
        )],
    }
}

fn third_masculine() -> RuleConditions {
    RuleConditions::any()
        .perfect()
        .person(Person::Third)
        .gender(Gender::Male)
        .numerus(Numerus::Singular)
}

fn third_singular() -> RuleConditions {
    RuleConditions::any()
        .perfect()
        .person(Person::Third)
        .numerus(Numerus::Singular)
}

fn third() -> RuleConditions {
    RuleConditions::any().perfect().person(Person::Third)
}

fn two(vowels: &[Vowel]) -> Skeleton {
    Skeleton::new(vec![R1, R2], vowels.to_vec())
}

/// `ramā` / `yirmi` and `nisi` / `yinsa`.
fn stem1(pattern: Stem1Pattern) -> Vec<ConjugationRule> {
    let mut table = if pattern == Stem1Pattern::PastAPresentI {
        vec![
            ConjugationRule::emit(third_masculine(), two(&[ShortA, BrokenA])),
            ConjugationRule::emit(third(), two(&[ShortA])),
            ConjugationRule::emit(
                RuleConditions::any().perfect(),
                two(&[ShortA, DiphthongAj]),
            ),
        ]
    } else {
        let three = |vowels: &[Vowel]| Skeleton::new(vec![R1, R2, R3], vowels.to_vec());
        vec![
            ConjugationRule::emit(third_masculine(), two(&[ShortI, LongI])),
            ConjugationRule::emit(third_singular(), three(&[ShortI, Sukun, ShortI])),
            ConjugationRule::emit(third(), three(&[ShortI, Sukun])),
            ConjugationRule::emit(RuleConditions::any().perfect(), two(&[Sukun, LongI])),
        ]
    };

    let ending = if pattern == Stem1Pattern::PastAPresentI {
        LongI
    } else {
        BrokenA
    };
    table.extend([
        ConjugationRule::emit(vowel_suffix(), two(&[Sukun]).with_prefix_vowel(ShortI)),
        ConjugationRule::emit(
            RuleConditions::any(),
            two(&[Sukun, ending]).with_prefix_vowel(ShortI),
        ),
    ]);
    table
}

/// `rabbā` / `birabbi`: doubled R2, final `-i` in the present.
fn stem2() -> Vec<ConjugationRule> {
    let symbols = vec![R1, R2, R2];
    let skeleton = |vowels: &[Vowel]| Skeleton::new(symbols.clone(), vowels.to_vec());
    vec![
        ConjugationRule::emit(third_masculine(), skeleton(&[ShortA, Sukun, BrokenA])),
        ConjugationRule::emit(third_singular(), skeleton(&[ShortA, Sukun, ShortI])),
        ConjugationRule::emit(third(), skeleton(&[ShortA, Sukun])),
        ConjugationRule::emit(
            RuleConditions::any().perfect(),
            skeleton(&[ShortA, Sukun, DiphthongAj]),
        ),
        ConjugationRule::emit(vowel_suffix(), skeleton(&[ShortA, Sukun])),
        ConjugationRule::emit(RuleConditions::any(), skeleton(&[ShortA, Sukun, LongI])),
    ]
}

/// Stems 5 and 6 end in `-a` in both tenses. `head` vocalizes every slot but
/// the last.
fn final_a(symbols: Vec<Symbol>, head: &[Vowel]) -> Vec<ConjugationRule> {
    let skeleton = |last: Option<Vowel>| {
        let mut vowels = head.to_vec();
        vowels.extend(last);
        Skeleton::new(symbols.clone(), vowels)
    };
    vec![
        ConjugationRule::emit(third_masculine(), skeleton(Some(BrokenA))),
        ConjugationRule::emit(third_singular(), skeleton(Some(ShortI))),
        ConjugationRule::emit(third(), skeleton(Some(LongU))),
        ConjugationRule::emit(
            RuleConditions::any().perfect(),
            skeleton(Some(DiphthongAj)),
        ),
        ConjugationRule::emit(vowel_suffix(), skeleton(None).with_prefix_vowel(ShortI)),
        ConjugationRule::emit(
            RuleConditions::any(),
            skeleton(Some(BrokenA)).with_prefix_vowel(ShortI),
        ),
    ]
}
