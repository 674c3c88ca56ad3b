//! Geminate verbs
//!
//! R2 and R3 merge under a shadda unless a sukun suffix or a short mood keeps
//! them apart.

use sarf_core::{Gender, Letter, Mood, Numerus, Person, VerbType, Voice, Vowel};

use crate::rules::{ConjugationRule, RuleConditions, Skeleton, Symbol};
use crate::verb::Verb;

use Symbol::{Fixed, R1, R2, R3};
use Vowel::{LongA, LongI, LongU, ShortA, ShortI, ShortU, Sukun};

pub(crate) fn rules(verb: &Verb, voice: Voice) -> Vec<ConjugationRule> {
    match verb.stem_number() {
        1 => stem1(verb, voice),
        3 => stem3(voice),
        4 => prefixed(vec![R1, R2, R3], Some(Letter::Hamza), voice),
        8 => stem8(verb, voice),
        10 => prefixed(
            vec![Fixed(Letter::Siin), Fixed(Letter::Ta), R1, R2, R3],
            None,
            voice,
        ),
        _ => vec![ConjugationRule::unhandled(
            RuleConditions::any(),
            "geminate stem without a table",
        )],
    }
}

fn third_feminine_plural() -> RuleConditions {
    RuleConditions::any()
        .perfect()
        .person(Person::Third)
        .gender(Gender::Female)
        .numerus(Numerus::Plural)
}

fn stem1(verb: &Verb, voice: Voice) -> Vec<ConjugationRule> {
    let perfect_vowel = match voice {
        Voice::Active => ShortA,
        Voice::Passive => ShortU,
    };
    let present_vowel = match voice {
        Voice::Active => verb.pattern().and_then(|p| p.present_vowel()),
        Voice::Passive => Some(ShortA),
    };
    let Some(present_vowel) = present_vowel else {
        return vec![ConjugationRule::unhandled(
            RuleConditions::any(),
            "geminate stem without vowel pattern",
        )];
    };
    let merged = |vowel| Skeleton::new(vec![R1, R2, R3], vec![vowel, Sukun]);
    let without_r1 = Skeleton::new(vec![R2, R3], vec![present_vowel]);

    let mut rules = Vec::new();
    if verb.root.r1() == Letter::Waw {
        rules.push(ConjugationRule::emit(
            RuleConditions::any().mood(Mood::Imperative).suffix_sukun(true),
            without_r1.clone().with_prefix_vowel(LongI),
        ));
    }
    rules.push(ConjugationRule::emit(
        RuleConditions::any().present().suffix_sukun(false),
        merged(present_vowel),
    ));
    if verb.root.r1() == Letter::Waw {
        rules.push(ConjugationRule::emit(
            RuleConditions::any()
                .present()
                .voice(Voice::Passive)
                .suffix_sukun(true),
            without_r1.with_prefix_vowel(LongU),
        ));
    }
    rules.push(ConjugationRule::emit(
        RuleConditions::any()
            .perfect()
            .person(Person::Third)
            .suffix_sukun(false),
        merged(perfect_vowel),
    ));
    rules.push(ConjugationRule::base(RuleConditions::any(), VerbType::Sound));
    rules
}

fn stem3(voice: Voice) -> Vec<ConjugationRule> {
    let (long, perfect_vowel, present_vowel) = match voice {
        Voice::Active => (LongA, ShortA, ShortI),
        Voice::Passive => (LongU, ShortI, ShortA),
    };
    let skeleton = |vowels: Vec<Vowel>| Skeleton::new(vec![R1, R2, R3], vowels);
    let short_moods = [Mood::Jussive, Mood::Imperative];
    vec![
        ConjugationRule::emit(
            RuleConditions::any().moods(&short_moods).vowel_suffix(true),
            skeleton(vec![LongA, Sukun]),
        ),
        ConjugationRule::emit(
            RuleConditions::any().moods(&short_moods),
            skeleton(vec![LongA, present_vowel]),
        ),
        ConjugationRule::emit(
            RuleConditions::any()
                .present()
                .gender(Gender::Female)
                .numerus(Numerus::Plural),
            skeleton(vec![LongA, present_vowel]),
        ),
        ConjugationRule::emit(RuleConditions::any().present(), skeleton(vec![LongA, Sukun])),
        ConjugationRule::emit(third_feminine_plural(), skeleton(vec![long, perfect_vowel])),
        ConjugationRule::emit(
            RuleConditions::any().perfect().person(Person::Third),
            skeleton(vec![long, Sukun]),
        ),
        ConjugationRule::emit(RuleConditions::any(), skeleton(vec![long, perfect_vowel])),
    ]
}

/// Stems IV and X: the merged vowel moves onto R1.
fn prefixed(
    present_symbols: Vec<Symbol>,
    perfect_hamza: Option<Letter>,
    voice: Voice,
) -> Vec<ConjugationRule> {
    let (lead_vowel, perfect_vowel, present_vowel) = match voice {
        Voice::Active => (ShortA, ShortA, ShortI),
        Voice::Passive => (ShortU, ShortI, ShortA),
    };

    // Stem X carries `sta` in every form; stem IV only has its hamza in the
    // perfect.
    let (present_lead, perfect_symbols, perfect_lead) = match perfect_hamza {
        Some(hamza) => {
            let mut symbols = vec![Fixed(hamza)];
            symbols.extend_from_slice(&present_symbols);
            (Vec::new(), symbols, vec![lead_vowel])
        }
        None => (
            vec![Sukun, ShortA],
            present_symbols.clone(),
            vec![Sukun, lead_vowel],
        ),
    };
    let present = |tail: [Vowel; 2]| {
        let mut vowels = present_lead.clone();
        vowels.extend_from_slice(&tail);
        Skeleton::new(present_symbols.clone(), vowels)
    };
    let perfect = |tail: [Vowel; 2]| {
        let mut vowels = perfect_lead.clone();
        vowels.extend_from_slice(&tail);
        Skeleton::new(perfect_symbols.clone(), vowels)
    };

    vec![
        ConjugationRule::emit(
            RuleConditions::any().mood(Mood::Imperative).vowel_suffix(true),
            present([ShortI, Sukun]),
        ),
        ConjugationRule::emit(
            RuleConditions::any().mood(Mood::Imperative),
            present([Sukun, ShortI]),
        ),
        ConjugationRule::emit(
            RuleConditions::any().mood(Mood::Jussive).vowel_suffix(true),
            present([present_vowel, Sukun]),
        ),
        ConjugationRule::emit(
            RuleConditions::any().mood(Mood::Jussive),
            present([Sukun, present_vowel]),
        ),
        ConjugationRule::emit(
            RuleConditions::any()
                .present()
                .gender(Gender::Female)
                .numerus(Numerus::Plural),
            present([Sukun, present_vowel]),
        ),
        ConjugationRule::emit(
            RuleConditions::any().present(),
            present([present_vowel, Sukun]),
        ),
        ConjugationRule::emit(third_feminine_plural(), perfect([Sukun, perfect_vowel])),
        ConjugationRule::emit(
            RuleConditions::any().perfect().person(Person::Third),
            perfect([perfect_vowel, Sukun]),
        ),
        ConjugationRule::emit(RuleConditions::any(), perfect([Sukun, perfect_vowel])),
    ]
}

/// The infixed t keeps its a; only R2 and R3 merge.
fn stem8(verb: &Verb, voice: Voice) -> Vec<ConjugationRule> {
    let infix = Fixed(super::sound::stem8_infix(verb.root.r1()));
    let symbols = vec![R1, infix, R2, R3];
    let (ta_vowel, perfect_vowel, present_vowel) = match voice {
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
            skeleton(vec![Sukun, ShortA, present_vowel]),
        ),
        ConjugationRule::emit(
            RuleConditions::any()
                .present()
                .gender(Gender::Female)
                .numerus(Numerus::Plural),
            skeleton(vec![Sukun, ShortA, present_vowel]),
        ),
        ConjugationRule::emit(
            RuleConditions::any().present(),
            skeleton(vec![Sukun, ShortA, Sukun]),
        ),
        ConjugationRule::emit(
            third_feminine_plural(),
            skeleton(vec![Sukun, ta_vowel, perfect_vowel]),
        ),
        ConjugationRule::emit(
            RuleConditions::any().perfect().person(Person::Third),
            skeleton(vec![Sukun, ta_vowel, Sukun]),
        ),
        ConjugationRule::emit(
            RuleConditions::any(),
            skeleton(vec![Sukun, ta_vowel, perfect_vowel]),
        ),
    ]
}
