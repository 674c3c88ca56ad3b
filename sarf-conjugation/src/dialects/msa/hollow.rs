//! Hollow verbs
//!
//! The weak R2 disappears and its vowel lengthens onto the slot in front of
//! it, shortening again before a suffix that opens with sukun.

use sarf_core::{Tense, Voice, Vowel};

use super::sound;
use crate::rules::{ConjugationRule, RuleConditions, Skeleton, Symbol};
use crate::verb::Verb;

use Vowel::{LongA, LongI, ShortA, ShortI};

pub(crate) fn rules(verb: &Verb, voice: Voice) -> Vec<ConjugationRule> {
    if verb.stem.is_basic() {
        stem1(verb, voice)
    } else {
        derived(verb, voice)
    }
}

fn stem1(verb: &Verb, voice: Voice) -> Vec<ConjugationRule> {
    let pattern = verb.pattern();
    let vowels = match voice {
        Voice::Active => pattern
            .and_then(|p| Some((p.past_vowel()?, p.present_vowel()?)))
            .map(|(past, present)| (past, LongA, present, present.lengthened())),
        Voice::Passive => Some((ShortI, LongI, ShortA, LongA)),
    };
    let Some((perfect_short, perfect_long, present_short, present_long)) = vowels else {
        return vec![ConjugationRule::unhandled(
            RuleConditions::any(),
            "hollow stem without vowel pattern",
        )];
    };

    let skeleton = |vowel| Skeleton::new(vec![Symbol::R1, Symbol::R3], vec![vowel]);
    vec![
        ConjugationRule::emit(
            RuleConditions::any().present().suffix_sukun(false),
            skeleton(present_long),
        ),
        ConjugationRule::emit(RuleConditions::any().present(), skeleton(present_short)),
        ConjugationRule::emit(
            RuleConditions::any().perfect().suffix_sukun(false),
            skeleton(perfect_long),
        ),
        ConjugationRule::emit(RuleConditions::any(), skeleton(perfect_short)),
    ]
}

/// Drop R2 from a sound skeleton and move its vowel onto the previous slot.
fn contract(skeleton: &Skeleton, long: bool, vowel: Option<Vowel>) -> Option<Skeleton> {
    let index = skeleton.symbols.iter().position(|s| *s == Symbol::R2)?;
    if index == 0 || index >= skeleton.vowels.len() {
        return None;
    }
    let v2 = vowel.unwrap_or(skeleton.vowels[index]);

    let mut contracted = skeleton.clone();
    contracted.symbols.remove(index);
    contracted.vowels.remove(index);
    contracted.vowels[index - 1] = if long { v2.lengthened() } else { v2 };
    Some(contracted)
}

fn derived(verb: &Verb, voice: Voice) -> Vec<ConjugationRule> {
    let mut rules = Vec::with_capacity(4);
    for tense in [Tense::Perfect, Tense::Present] {
        let Some(sound) = sound::stem_skeleton(verb, tense, voice) else {
            continue;
        };
        // Stems VII and VIII keep a long a in the present.
        let vowel = (tense == Tense::Present && matches!(verb.stem_number(), 7 | 8))
            .then_some(ShortA);
        let base = match tense {
            Tense::Perfect => RuleConditions::any().perfect(),
            Tense::Present => RuleConditions::any(),
        };
        rules.push(sound::emit_or_unhandled(
            base.clone().suffix_sukun(true),
            contract(&sound, false, vowel),
            "hollow contraction",
        ));
        rules.push(sound::emit_or_unhandled(
            base,
            contract(&sound, true, vowel),
            "hollow contraction",
        ));
    }
    if rules
        .last()
        .map_or(true, |rule| !rule.conditions.is_unconditional())
    {
        rules.push(ConjugationRule::unhandled(
            RuleConditions::any(),
            "hollow stem without sound skeleton",
        ));
    }
    rules
}
