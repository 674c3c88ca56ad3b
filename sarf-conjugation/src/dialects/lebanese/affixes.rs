use sarf_core::{ConjugationParams, Gender, Letter, Mood, Numerus, Person, Tense, Vowel};

use crate::rules::ResolvedSkeleton;
use crate::word::{ConjugationElement, Prefix, Suffix};

pub(super) fn suffix(params: &ConjugationParams) -> Suffix {
    match params.tense {
        Tense::Perfect => match (params.person, params.numerus, params.gender) {
            (Person::Third, Numerus::Singular, Gender::Male) => Suffix::linking(Vowel::Sukun),
            (Person::Second, Numerus::Singular, Gender::Female) => {
                Suffix::linking(Vowel::Sukun).with(Letter::Ta, Vowel::LongI)
            }
            (Person::Third, Numerus::Plural, _) => {
                Suffix::linking(Vowel::LongU).ending(Letter::Alef)
            }
            (Person::Second, Numerus::Plural, _) => Suffix::linking(Vowel::Sukun)
                .with(Letter::Ta, Vowel::LongU)
                .ending(Letter::Alef),
            (Person::First, Numerus::Plural, _) => {
                Suffix::linking(Vowel::Sukun).with(Letter::Nun, Vowel::LongA)
            }
            _ => Suffix::linking(Vowel::ShortI).with(Letter::Ta, Vowel::Sukun),
        },
        Tense::Present => match (params.person, params.numerus, params.gender) {
            (Person::First, _, _) => Suffix::linking(Vowel::Sukun),
            (_, Numerus::Plural, _) => Suffix::linking(Vowel::LongU).ending(Letter::Alef),
            (Person::Second, Numerus::Singular, Gender::Female) => Suffix::linking(Vowel::LongI),
            _ => Suffix::linking(Vowel::Sukun),
        },
    }
}

/// Person prefix, plus the `b-` marker in the indicative.
///
/// `None` stands for a prefix that stays vowelless.
pub(super) fn prefix(
    skeleton: &ResolvedSkeleton,
    params: &ConjugationParams,
) -> Prefix {
    if params.tense == Tense::Perfect || params.mood == Mood::Imperative {
        return Vec::new();
    }
    let vowel = skeleton
        .prefix_vowel
        .or_else(|| (skeleton.first_vowel() == Some(Vowel::Sukun)).then_some(Vowel::ShortI));

    match params.mood {
        Mood::Indicative => indicative_prefix(params, vowel),
        _ => subjunctive_prefix(params, vowel),
    }
}

fn subjunctive_prefix(params: &ConjugationParams, vowel: Option<Vowel>) -> Prefix {
    match (person_letter(params), vowel) {
        (Letter::Hamza, None) => Vec::new(),
        (letter, vowel) => vec![ConjugationElement::new(letter, vowel.unwrap_or(Vowel::Sukun))],
    }
}

fn indicative_prefix(params: &ConjugationParams, vowel: Option<Vowel>) -> Prefix {
    let el = ConjugationElement::new;
    match (params.person, params.numerus) {
        (Person::First, Numerus::Singular) => vec![el(Letter::Ba, vowel.unwrap_or(Vowel::Sukun))],
        (Person::First, _) => match vowel {
            None => vec![el(Letter::Mim, Vowel::ShortI), el(Letter::Nun, Vowel::Sukun)],
            Some(v) => vec![el(Letter::Mim, Vowel::Sukun), el(Letter::Nun, v)],
        },
        _ => match (person_letter(params), vowel) {
            (Letter::Ya, None) => vec![el(Letter::Ba, Vowel::LongI)],
            (letter, None) => vec![el(Letter::Ba, Vowel::ShortI), el(letter, Vowel::Sukun)],
            (letter, Some(v)) => vec![el(Letter::Ba, Vowel::Sukun), el(letter, v)],
        },
    }
}

fn person_letter(params: &ConjugationParams) -> Letter {
    match (params.person, params.numerus, params.gender) {
        (Person::First, Numerus::Singular, _) => Letter::Hamza,
        (Person::First, _, _) => Letter::Nun,
        (Person::Second, _, _) => Letter::Ta,
        (Person::Third, Numerus::Singular, Gender::Female) => Letter::Ta,
        (Person::Third, _, _) => Letter::Ya,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skeleton(vowels: Vec<Vowel>, prefix_vowel: Option<Vowel>) -> ResolvedSkeleton {
        ResolvedSkeleton {
            letters: vec![Letter::Sad; vowels.len()],
            vowels,
            prefix_vowel,
            emphasize: None,
        }
    }

    fn present(mood: Mood, person: Person, gender: Gender, numerus: Numerus) -> ConjugationParams {
        ConjugationParams::present(mood, person, gender, numerus)
    }

    #[test]
    fn perfect_suffixes() {
        let third = suffix(&ConjugationParams::perfect(Person::Third, Gender::Male, Numerus::Singular));
        assert_eq!(third, Suffix::linking(Vowel::Sukun));

        let feminine = suffix(&ConjugationParams::perfect(
            Person::Third,
            Gender::Female,
            Numerus::Singular,
        ));
        assert_eq!(feminine.linking_vowel, Vowel::ShortI);

        let plural = suffix(&ConjugationParams::perfect(
            Person::Second,
            Gender::Male,
            Numerus::Plural,
        ));
        assert_eq!(plural.elements[0].following_vowel, Vowel::LongU);
        assert_eq!(plural.ending, Some(Letter::Alef));
    }

    #[test]
    fn indicative_b_prefix() {
        let long = skeleton(vec![Vowel::LongA, Vowel::ShortI], None);
        let third = present(Mood::Indicative, Person::Third, Gender::Male, Numerus::Singular);
        assert_eq!(
            prefix(&long, &third),
            vec![ConjugationElement::new(Letter::Ba, Vowel::LongI)]
        );

        let sukun = skeleton(vec![Vowel::Sukun, Vowel::ShortU], None);
        let plural = present(Mood::Indicative, Person::First, Gender::Male, Numerus::Plural);
        assert_eq!(
            prefix(&sukun, &plural),
            vec![
                ConjugationElement::new(Letter::Mim, Vowel::Sukun),
                ConjugationElement::new(Letter::Nun, Vowel::ShortI)
            ]
        );

        let feminine = present(Mood::Indicative, Person::Third, Gender::Female, Numerus::Singular);
        assert_eq!(
            prefix(&long, &feminine),
            vec![
                ConjugationElement::new(Letter::Ba, Vowel::ShortI),
                ConjugationElement::new(Letter::Ta, Vowel::Sukun)
            ]
        );
    }

    #[test]
    fn subjunctive_first_singular_drops_bare_hamza() {
        let long = skeleton(vec![Vowel::LongA, Vowel::ShortI], None);
        let first = present(Mood::Subjunctive, Person::First, Gender::Male, Numerus::Singular);
        assert!(prefix(&long, &first).is_empty());

        let stem1 = skeleton(vec![Vowel::Sukun, Vowel::ShortU], Some(Vowel::ShortU));
        assert_eq!(
            prefix(&stem1, &first),
            vec![ConjugationElement::new(Letter::Hamza, Vowel::ShortU)]
        );
    }

    #[test]
    fn imperative_has_no_prefix() {
        let stem1 = skeleton(vec![Vowel::Sukun, Vowel::ShortU], Some(Vowel::ShortI));
        let imperative = ConjugationParams::imperative(Gender::Male, Numerus::Singular);
        assert!(prefix(&stem1, &imperative).is_empty());
    }
}
