//! Sound verbs
//!
//! Base skeletons for stems I to X. Every weak-verb table either edits these
//! or delegates back to them.

use sarf_core::{Gender, Letter, Mood, Numerus, Tense, Voice, Vowel};

use crate::rules::{ConjugationRule, RuleConditions, Skeleton, Symbol};
use crate::verb::Verb;

use Symbol::{Fixed, R1, R2, R3};
use Vowel::{LongA, LongU, ShortA, ShortI, ShortU, Sukun};

/// Sound skeleton of a triliteral stem. The last radical takes the linking
/// vowel of the suffix.
pub(crate) fn stem_skeleton(verb: &Verb, tense: Tense, voice: Voice) -> Option<Skeleton> {
    let active = voice == Voice::Active;
    let perfect = tense == Tense::Perfect;
    let pick = |active_perfect: Vec<Vowel>,
                passive_perfect: Vec<Vowel>,
                active_present: Vec<Vowel>,
                passive_present: Vec<Vowel>| match (perfect, active) {
        (true, true) => active_perfect,
        (true, false) => passive_perfect,
        (false, true) => active_present,
        (false, false) => passive_present,
    };

    let (symbols, vowels) = match verb.stem_number() {
        1 => {
            let pattern = verb.pattern()?;
            let vowels = match (perfect, active) {
                (true, true) => vec![ShortA, pattern.past_vowel()?],
                (true, false) => vec![ShortU, ShortI],
                (false, true) => vec![Sukun, pattern.present_vowel()?],
                (false, false) => vec![Sukun, ShortA],
            };
            (vec![R1, R2, R3], vowels)
        }
        2 => (
            vec![R1, R2, R2, R3],
            pick(
                vec![ShortA, Sukun, ShortA],
                vec![ShortU, Sukun, ShortI],
                vec![ShortA, Sukun, ShortI],
                vec![ShortA, Sukun, ShortA],
            ),
        ),
        3 => (
            vec![R1, R2, R3],
            pick(
                vec![LongA, ShortA],
                vec![LongU, ShortI],
                vec![LongA, ShortI],
                vec![LongA, ShortA],
            ),
        ),
        4 if perfect => {
            let vowels = if active {
                vec![ShortA, Sukun, ShortA]
            } else {
                vec![ShortU, Sukun, ShortI]
            };
            (vec![Fixed(Letter::Hamza), R1, R2, R3], vowels)
        }
        4 => {
            let vowels = if active {
                vec![Sukun, ShortI]
            } else {
                vec![Sukun, ShortA]
            };
            (vec![R1, R2, R3], vowels)
        }
        5 => (
            vec![Fixed(Letter::Ta), R1, R2, R2, R3],
            pick(
                vec![ShortA, ShortA, Sukun, ShortA],
                vec![ShortU, ShortU, Sukun, ShortI],
                vec![ShortA, ShortA, Sukun, ShortA],
                vec![ShortA, ShortA, Sukun, ShortA],
            ),
        ),
        6 => (
            vec![Fixed(Letter::Ta), R1, R2, R3],
            pick(
                vec![ShortA, LongA, ShortA],
                vec![ShortU, LongU, ShortI],
                vec![ShortA, LongA, ShortA],
                vec![ShortA, LongA, ShortA],
            ),
        ),
        7 => (
            vec![Fixed(Letter::Nun), R1, R2, R3],
            pick(
                vec![Sukun, ShortA, ShortA],
                vec![Sukun, ShortU, ShortI],
                vec![Sukun, ShortA, ShortI],
                vec![Sukun, ShortA, ShortA],
            ),
        ),
        8 => (
            vec![R1, Fixed(stem8_infix(verb.root.r1())), R2, R3],
            pick(
                vec![Sukun, ShortA, ShortA],
                vec![Sukun, ShortU, ShortI],
                vec![Sukun, ShortA, ShortI],
                vec![Sukun, ShortA, ShortA],
            ),
        ),
        10 => (
            vec![Fixed(Letter::Siin), Fixed(Letter::Ta), R1, R2, R3],
            pick(
                vec![Sukun, ShortA, Sukun, ShortA],
                vec![Sukun, ShortU, Sukun, ShortI],
                vec![Sukun, ShortA, Sukun, ShortI],
                vec![Sukun, ShortA, Sukun, ShortA],
            ),
        ),
        _ => return None,
    };
    Some(Skeleton::new(symbols, vowels))
}

/// The infixed t of stem VIII assimilates to an emphatic or voiced dental R1.
pub(crate) fn stem8_infix(r1: Letter) -> Letter {
    match r1 {
        r if r.is_emphatic() => Letter::Tta,
        Letter::Dal | Letter::Thal | Letter::Zay => Letter::Dal,
        _ => Letter::Ta,
    }
}

/// A skeleton if there is one, a named gap otherwise.
pub(crate) fn emit_or_unhandled(
    conditions: RuleConditions,
    skeleton: Option<Skeleton>,
    detail: &'static str,
) -> ConjugationRule {
    match skeleton {
        Some(skeleton) => ConjugationRule::emit(conditions, skeleton),
        None => ConjugationRule::unhandled(conditions, detail),
    }
}

pub(crate) fn rules(verb: &Verb, voice: Voice) -> Vec<ConjugationRule> {
    if verb.stem_number() == 9 {
        return stem9(voice);
    }
    vec![
        emit_or_unhandled(
            RuleConditions::any().perfect(),
            stem_skeleton(verb, Tense::Perfect, voice),
            "no sound perfect skeleton",
        ),
        emit_or_unhandled(
            RuleConditions::any(),
            stem_skeleton(verb, Tense::Present, voice),
            "no sound present skeleton",
        ),
    ]
}

/// Colours and defects: the doubled R3 splits before consonantal suffixes
/// and in the short moods.
fn stem9(voice: Voice) -> Vec<ConjugationRule> {
    let symbols = vec![R1, R2, R3, R3];
    let (r1v, r2v, r2present) = match voice {
        Voice::Active => (ShortA, ShortA, ShortI),
        Voice::Passive => (ShortU, ShortI, ShortA),
    };
    let skeleton = |vowels: Vec<Vowel>| Skeleton::new(symbols.clone(), vowels);
    let short_moods = [Mood::Jussive, Mood::Imperative];

    vec![
        ConjugationRule::emit(
            RuleConditions::any().moods(&short_moods).vowel_suffix(true),
            skeleton(vec![Sukun, ShortA, Sukun]),
        ),
        ConjugationRule::emit(
            RuleConditions::any().moods(&short_moods),
            skeleton(vec![Sukun, ShortA, r2present]),
        ),
        ConjugationRule::emit(
            RuleConditions::any()
                .present()
                .gender(Gender::Female)
                .numerus(Numerus::Plural),
            skeleton(vec![Sukun, ShortA, r2present]),
        ),
        ConjugationRule::emit(
            RuleConditions::any().suffix_sukun(true),
            skeleton(vec![Sukun, r1v, r2v]),
        ),
        ConjugationRule::emit(
            RuleConditions::any().present().voice(Voice::Passive),
            skeleton(vec![Sukun, ShortA, Sukun]),
        ),
        ConjugationRule::emit(RuleConditions::any(), skeleton(vec![Sukun, r1v, Sukun])),
    ]
}
