//! Assimilated verbs (weak R1)

use sarf_core::{Letter, Mood, Tense, VerbType, Voice, Vowel};

use super::sound;
use crate::rules::{ConjugationRule, RuleConditions, Skeleton, Symbol};
use crate::verb::Verb;

use Symbol::{Fixed, R1, R2, R3};
use Vowel::{DiphthongAj, DiphthongAw, LongI, LongU, ShortA, ShortI, ShortU, Sukun};

pub(crate) fn rules(verb: &Verb, voice: Voice) -> Vec<ConjugationRule> {
    match verb.stem_number() {
        1 => stem1(verb),
        4 => stem4(voice),
        8 => stem8(verb, voice),
        10 => stem10(verb),
        _ => vec![ConjugationRule::base(RuleConditions::any(), VerbType::Sound)],
    }
}

fn stem1(verb: &Verb) -> Vec<ConjugationRule> {
    let Some(present_vowel) = verb.pattern().and_then(|p| p.present_vowel()) else {
        return vec![ConjugationRule::unhandled(
            RuleConditions::any(),
            "assimilated stem without vowel pattern",
        )];
    };
    let without_r1 = |vowel| Skeleton::new(vec![R2, R3], vec![vowel]);

    let mut rules = Vec::with_capacity(3);
    if verb.root.r1() == Letter::Waw {
        rules.push(ConjugationRule::emit(
            RuleConditions::any().present().voice(Voice::Active),
            without_r1(present_vowel),
        ));
    } else {
        let prefix = if present_vowel == ShortU { LongU } else { LongI };
        rules.push(ConjugationRule::emit(
            RuleConditions::any().mood(Mood::Imperative),
            without_r1(present_vowel).with_prefix_vowel(prefix),
        ));
    }
    rules.push(ConjugationRule::emit(
        RuleConditions::any().present().voice(Voice::Passive),
        without_r1(ShortA).with_prefix_vowel(LongU),
    ));
    rules.push(ConjugationRule::base(RuleConditions::any(), VerbType::Sound));
    rules
}

fn stem4(voice: Voice) -> Vec<ConjugationRule> {
    let present_vowel = match voice {
        Voice::Active => ShortI,
        Voice::Passive => ShortA,
    };
    vec![
        ConjugationRule::base(RuleConditions::any().mood(Mood::Imperative), VerbType::Sound),
        ConjugationRule::emit(
            RuleConditions::any().present(),
            Skeleton::new(vec![R2, R3], vec![present_vowel]).with_prefix_vowel(LongU),
        ),
        ConjugationRule::emit(
            RuleConditions::any().perfect().voice(Voice::Passive),
            Skeleton::new(vec![Fixed(Letter::Hamza), R2, R3], vec![LongU, ShortI]),
        ),
        ConjugationRule::base(RuleConditions::any(), VerbType::Sound),
    ]
}

/// R1 assimilates to the infixed t.
fn stem8(verb: &Verb, voice: Voice) -> Vec<ConjugationRule> {
    let skeleton = |tense| {
        sound::stem_skeleton(verb, tense, voice)
            .map(|s| s.replace_symbol(R1, Fixed(Letter::Ta)))
    };
    vec![
        sound::emit_or_unhandled(
            RuleConditions::any().perfect(),
            skeleton(Tense::Perfect),
            "no stem VIII skeleton",
        ),
        sound::emit_or_unhandled(
            RuleConditions::any(),
            skeleton(Tense::Present),
            "no stem VIII skeleton",
        ),
    ]
}

/// Only the passive is special: R1 survives as a diphthong or long u.
fn stem10(verb: &Verb) -> Vec<ConjugationRule> {
    let diphthong = if verb.root.r1() == Letter::Waw {
        DiphthongAw
    } else {
        DiphthongAj
    };
    let symbols = vec![Fixed(Letter::Siin), Fixed(Letter::Ta), R2, R3];
    vec![
        ConjugationRule::emit(
            RuleConditions::any().present().voice(Voice::Passive),
            Skeleton::new(symbols.clone(), vec![Sukun, diphthong, ShortA]),
        ),
        ConjugationRule::emit(
            RuleConditions::any().perfect().voice(Voice::Passive),
            Skeleton::new(symbols, vec![Sukun, LongU, ShortI]),
        ),
        ConjugationRule::base(RuleConditions::any(), VerbType::Sound),
    ]
}
