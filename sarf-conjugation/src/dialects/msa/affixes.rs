use sarf_core::{
    ConjugationParams, Gender, Letter, Mood, Numerus, Person, Tense, Voice, Vowel,
};

use crate::rules::ResolvedSkeleton;
use crate::verb::Verb;
use crate::word::{ConjugationElement, Suffix};

pub(super) fn suffix(params: &ConjugationParams) -> Suffix {
    match params.tense {
        Tense::Perfect => perfect_suffix(params),
        Tense::Present => present_suffix(params),
    }
}

fn perfect_suffix(params: &ConjugationParams) -> Suffix {
    match (params.person, params.numerus, params.gender) {
        (Person::Third, Numerus::Singular, Gender::Male) => Suffix::linking(Vowel::ShortA),
        (Person::Third, Numerus::Singular, Gender::Female) => {
            Suffix::linking(Vowel::ShortA).with(Letter::Ta, Vowel::Sukun)
        }
        (Person::Second, Numerus::Singular, Gender::Male) => {
            Suffix::linking(Vowel::Sukun).with(Letter::Ta, Vowel::ShortA)
        }
        (Person::Second, Numerus::Singular, Gender::Female) => {
            Suffix::linking(Vowel::Sukun).with(Letter::Ta, Vowel::ShortI)
        }
        (Person::First, Numerus::Singular, _) => {
            Suffix::linking(Vowel::Sukun).with(Letter::Ta, Vowel::ShortU)
        }
        (Person::Third, Numerus::Dual, Gender::Male) => Suffix::linking(Vowel::LongA),
        (Person::Third, Numerus::Dual, Gender::Female) => {
            Suffix::linking(Vowel::ShortA).with(Letter::Ta, Vowel::LongA)
        }
        (Person::Second, Numerus::Dual, _) => Suffix::linking(Vowel::Sukun)
            .with(Letter::Ta, Vowel::ShortU)
            .with(Letter::Mim, Vowel::LongA),
        (Person::Third, Numerus::Plural, Gender::Male) => {
            Suffix::linking(Vowel::LongU).ending(Letter::Alef)
        }
        (Person::Third, Numerus::Plural, Gender::Female) => {
            Suffix::linking(Vowel::Sukun).with(Letter::Nun, Vowel::ShortA)
        }
        (Person::Second, Numerus::Plural, Gender::Male) => Suffix::linking(Vowel::Sukun)
            .with(Letter::Ta, Vowel::ShortU)
            .with(Letter::Mim, Vowel::Sukun),
        (Person::Second, Numerus::Plural, Gender::Female) => Suffix::linking(Vowel::Sukun)
            .with(Letter::Ta, Vowel::ShortU)
            .with(Letter::Nun, Vowel::Sukun)
            .with(Letter::Nun, Vowel::ShortA),
        (Person::First, _, _) => Suffix::linking(Vowel::Sukun).with(Letter::Nun, Vowel::LongA),
    }
}

fn present_suffix(params: &ConjugationParams) -> Suffix {
    let indicative = params.mood == Mood::Indicative;
    let singular_link = match params.mood {
        Mood::Indicative => Vowel::ShortU,
        Mood::Subjunctive => Vowel::ShortA,
        Mood::Jussive | Mood::Imperative => Vowel::Sukun,
    };

    match (params.person, params.numerus, params.gender) {
        (Person::Second, Numerus::Singular, Gender::Female) if indicative => {
            Suffix::linking(Vowel::LongI).with(Letter::Nun, Vowel::ShortA)
        }
        (Person::Second, Numerus::Singular, Gender::Female) => Suffix::linking(Vowel::LongI),
        (_, Numerus::Singular, _) | (Person::First, _, _) => Suffix::linking(singular_link),
        (_, Numerus::Dual, _) if indicative => {
            Suffix::linking(Vowel::LongA).with(Letter::Nun, Vowel::ShortI)
        }
        (_, Numerus::Dual, _) => Suffix::linking(Vowel::LongA),
        (_, Numerus::Plural, Gender::Male) if indicative => {
            Suffix::linking(Vowel::LongU).with(Letter::Nun, Vowel::ShortA)
        }
        (_, Numerus::Plural, Gender::Male) => Suffix::linking(Vowel::LongU).ending(Letter::Alef),
        (_, Numerus::Plural, Gender::Female) => {
            Suffix::linking(Vowel::Sukun).with(Letter::Nun, Vowel::ShortA)
        }
    }
}

pub(super) fn prefix(
    verb: &Verb,
    skeleton: &ResolvedSkeleton,
    params: &ConjugationParams,
) -> Vec<ConjugationElement> {
    let opens_with_sukun = skeleton.first_vowel() == Some(Vowel::Sukun);
    match (params.tense, params.mood) {
        (Tense::Perfect, _) if opens_with_sukun => {
            let wasl = match params.voice {
                Voice::Active => Vowel::ShortI,
                Voice::Passive => Vowel::ShortU,
            };
            vec![ConjugationElement::new(Letter::Alef, wasl)]
        }
        (Tense::Perfect, _) => Vec::new(),
        (Tense::Present, Mood::Imperative) => imperative_prefix(verb, skeleton, opens_with_sukun),
        (Tense::Present, _) => {
            let vowel = skeleton
                .prefix_vowel
                .unwrap_or_else(|| person_prefix_vowel(verb, params.voice));
            vec![ConjugationElement::new(person_prefix(params), vowel)]
        }
    }
}

fn imperative_prefix(
    verb: &Verb,
    skeleton: &ResolvedSkeleton,
    opens_with_sukun: bool,
) -> Vec<ConjugationElement> {
    if let Some(vowel) = skeleton.prefix_vowel {
        return vec![ConjugationElement::new(Letter::Alef, vowel)];
    }
    if verb.stem_number() == 4 && !verb.root.is_quadriliteral() {
        return vec![ConjugationElement::new(Letter::Hamza, Vowel::ShortA)];
    }
    if opens_with_sukun {
        let u_stem = verb.stem.is_basic()
            && verb.pattern().and_then(|p| p.present_vowel()) == Some(Vowel::ShortU);
        let wasl = if u_stem { Vowel::ShortU } else { Vowel::ShortI };
        return vec![ConjugationElement::new(Letter::Alef, wasl)];
    }
    Vec::new()
}

fn person_prefix(params: &ConjugationParams) -> Letter {
    match (params.person, params.numerus, params.gender) {
        (Person::First, Numerus::Singular, _) => Letter::Hamza,
        (Person::First, _, _) => Letter::Nun,
        (Person::Second, _, _) => Letter::Ta,
        (Person::Third, Numerus::Plural, Gender::Female) => Letter::Ya,
        (Person::Third, _, Gender::Female) => Letter::Ta,
        (Person::Third, _, Gender::Male) => Letter::Ya,
    }
}

fn person_prefix_vowel(verb: &Verb, voice: Voice) -> Vowel {
    // Damma for triliteral stems 2 to 4 and the bare quadriliteral.
    let u_stem = if verb.root.is_quadriliteral() {
        verb.stem.is_basic()
    } else {
        matches!(verb.stem_number(), 2..=4)
    };
    if voice == Voice::Passive || u_stem {
        Vowel::ShortU
    } else {
        Vowel::ShortA
    }
}
