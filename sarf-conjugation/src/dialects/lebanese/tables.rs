use sarf_core::{
    ConjugationParams, DialectType, Gender, Letter, Mood, Numerus, Person, Stem1Pattern,
    VerbRoot, VerbType,
};

use crate::metadata::{AttestedStems, DialectFeatures, DialectTables, IrregularRoot, Stem1ChoiceRow};

use Stem1Pattern::*;

fn choice(verb_type: VerbType, patterns: &[Stem1Pattern]) -> Stem1ChoiceRow {
    Stem1ChoiceRow {
        verb_type: Some(verb_type),
        root_type: None,
        r1: None,
        r2: None,
        patterns: patterns.to_vec(),
        required_context: Vec::new(),
    }
}

fn attested(verb_type: VerbType, stems: &[u8]) -> AttestedStems {
    AttestedStems {
        verb_type,
        stems: stems.to_vec(),
    }
}

/// Built-in Lebanese metadata.
pub(crate) fn tables() -> DialectTables {
    // The 2fs present separates the a-perfect patterns.
    let second_feminine = ConjugationParams::present(
        Mood::Indicative,
        Person::Second,
        Gender::Female,
        Numerus::Singular,
    );
    let third_masculine = ConjugationParams::present(
        Mood::Indicative,
        Person::Third,
        Gender::Male,
        Numerus::Singular,
    );

    DialectTables {
        dialect: DialectType::Lebanese,
        iso639_code: "apc".to_string(),
        glotto_code: "stan1323".to_string(),
        features: DialectFeatures {
            has_dual: false,
            has_female_plural: false,
            has_jussive: false,
            has_passive: false,
        },
        verb_type_overrides: Vec::new(),
        attested_stems: vec![
            attested(VerbType::Sound, &[1, 2, 3, 4, 5, 6, 7, 8, 10]),
            attested(VerbType::Defective, &[1, 2, 3, 5, 6, 7, 8, 10]),
            attested(VerbType::Hollow, &[1, 7, 8]),
            attested(VerbType::Geminate, &[1, 7]),
            attested(VerbType::HamzaOnR1, &[1]),
            attested(VerbType::SoundQuadriliteral, &[1, 2]),
            attested(VerbType::Irregular, &[1]),
        ],
        stem1_choices: vec![
            Stem1ChoiceRow {
                required_context: vec![third_masculine, second_feminine],
                ..choice(
                    VerbType::Sound,
                    &[
                        PastAPresentA,
                        PastAPresentIIU,
                        PastAPresentIIUU,
                        PastAPresentUSU,
                        PastIPresentA,
                        PastIPresentAA,
                        PastIPresentU,
                    ],
                )
            },
            choice(VerbType::Defective, &[PastAPresentI, PastIPresentA]),
            choice(VerbType::HamzaOnR1, &[PastAPresentU]),
            Stem1ChoiceRow {
                required_context: vec![third_masculine],
                ..choice(VerbType::Hollow, &[PastIPresentI, PastIPresentA, PastIPresentU])
            },
            choice(VerbType::SoundQuadriliteral, &[Quadriliteral]),
            choice(VerbType::Geminate, &[PastAPresentA, PastAPresentI, PastAPresentU]),
        ],
        irregular_roots: VerbRoot::new(&[Letter::Jiim, Letter::Ya, Letter::Hamza])
            .ok()
            .map(|root| IrregularRoot {
                root,
                stems: vec![1],
                stem1: IrregularJy2,
            })
            .into_iter()
            .collect(),
    }
}
