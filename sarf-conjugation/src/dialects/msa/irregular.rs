//! Specially irregular verbs
//!
//! ليس has no present and no passive. حيي doubles its ya in the 3mp perfect.
//! رأى drops its hamza everywhere outside the stem-I perfect.

use sarf_core::{Gender, Letter, Numerus, Person, Stem1Pattern, VerbType, Voice, Vowel};

use super::defective::{self, Head};
use crate::rules::{ConjugationRule, RuleConditions, Skeleton, Symbol};
use crate::verb::Verb;

use Symbol::{Fixed, R1, R2, R3};
use Vowel::{DiphthongAj, ShortA, ShortI, ShortU, Sukun};

pub(crate) fn rules(verb: &Verb, voice: Voice) -> Vec<ConjugationRule> {
    match (verb.stem_number(), verb.pattern()) {
        (1, Some(Stem1Pattern::IrregularLaysa)) => laysa(),
        (1, Some(Stem1Pattern::IrregularHayiya)) => hayiya(voice),
        (1, Some(Stem1Pattern::IrregularRa2a)) => ra2a(verb),
        (4, _) if verb.root.r2() == Letter::Hamza => ra2a_stem4(verb, voice),
        (4, _) => vec![ConjugationRule::base(RuleConditions::any(), VerbType::Defective)],
        _ => vec![ConjugationRule::unhandled(
            RuleConditions::any(),
            "irregular verb without a table",
        )],
    }
}

fn laysa() -> Vec<ConjugationRule> {
    let skeleton = |vowel| Skeleton::new(vec![R1, R3], vec![vowel]);
    vec![
        ConjugationRule::not_applicable(RuleConditions::any().present(), "ليس has no present"),
        ConjugationRule::not_applicable(
            RuleConditions::any().voice(Voice::Passive),
            "ليس has no passive",
        ),
        ConjugationRule::emit(
            RuleConditions::any()
                .person(Person::Third)
                .gender(Gender::Female)
                .numerus(Numerus::Plural),
            skeleton(ShortA),
        ),
        ConjugationRule::emit(RuleConditions::any().person(Person::Third), skeleton(DiphthongAj)),
        ConjugationRule::emit(RuleConditions::any(), skeleton(ShortA)),
    ]
}

fn hayiya(voice: Voice) -> Vec<ConjugationRule> {
    let r1_vowel = match voice {
        Voice::Active => ShortA,
        Voice::Passive => ShortU,
    };
    vec![
        ConjugationRule::emit(
            RuleConditions::any()
                .perfect()
                .person(Person::Third)
                .gender(Gender::Male)
                .numerus(Numerus::Plural),
            Skeleton::new(vec![R1, R2, Fixed(Letter::Ya)], vec![r1_vowel, Sukun]),
        ),
        ConjugationRule::base(RuleConditions::any(), VerbType::Defective),
    ]
}

fn ra2a(verb: &Verb) -> Vec<ConjugationRule> {
    let mut rules = vec![ConjugationRule::base(
        RuleConditions::any().perfect(),
        VerbType::Defective,
    )];
    let head = Head::new(vec![R1], vec![ShortA]);
    rules.extend(defective::present_tail(
        RuleConditions::any(),
        &head,
        defective::present_long_a(verb),
    ));
    rules
}

fn ra2a_stem4(verb: &Verb, voice: Voice) -> Vec<ConjugationRule> {
    let (perfect_vowels, present_vowel) = match voice {
        Voice::Active => (vec![ShortA, ShortA], ShortI),
        Voice::Passive => (vec![ShortU, ShortI], ShortA),
    };
    let perfect = Head::new(vec![Fixed(Letter::Hamza), R1], perfect_vowels);
    let present = Head::new(vec![R1], vec![present_vowel]);

    let mut rules = defective::perfect_tail(
        RuleConditions::any().perfect(),
        &perfect,
        Letter::Ya,
        defective::perfect_long_final(verb),
    );
    rules.extend(defective::present_tail(
        RuleConditions::any(),
        &present,
        defective::present_long_a(verb),
    ));
    rules
}
