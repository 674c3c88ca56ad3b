use sarf_core::{
    ConjugationParams, DialectType, Gender, Letter, Mood, Numerus, Person, Stem1Pattern,
    VerbRoot, VerbType,
};

use crate::metadata::{
    AttestedStems, DialectFeatures, DialectTables, IrregularRoot, Stem1ChoiceRow,
    VerbTypeOverride,
};

use Stem1Pattern::*;

fn present() -> ConjugationParams {
    ConjugationParams::present(Mood::Indicative, Person::Third, Gender::Male, Numerus::Singular)
}

fn perfect_first_singular() -> ConjugationParams {
    ConjugationParams::perfect(Person::First, Gender::Male, Numerus::Singular)
}

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

fn override_row(verb_type: VerbType, stems: &[u8], becomes: VerbType) -> VerbTypeOverride {
    VerbTypeOverride {
        verb_type,
        stems: stems.to_vec(),
        becomes,
    }
}

fn attested(verb_type: VerbType, stems: &[u8]) -> AttestedStems {
    AttestedStems {
        verb_type,
        stems: stems.to_vec(),
    }
}

fn irregular(root: &[Letter], stems: &[u8], stem1: Stem1Pattern) -> Option<IrregularRoot> {
    Some(IrregularRoot {
        root: VerbRoot::new(root).ok()?,
        stems: stems.to_vec(),
        stem1,
    })
}

/// Built-in Modern Standard Arabic metadata.
pub(crate) fn tables() -> DialectTables {
    let with_present = |mut row: Stem1ChoiceRow| {
        row.required_context = vec![present()];
        row
    };
    let with_present_and_perfect = |mut row: Stem1ChoiceRow| {
        row.required_context = vec![present(), perfect_first_singular()];
        row
    };

    DialectTables {
        dialect: DialectType::ModernStandardArabic,
        iso639_code: "arb".to_string(),
        glotto_code: "stan1318".to_string(),
        features: DialectFeatures {
            has_dual: true,
            has_female_plural: true,
            has_jussive: true,
            has_passive: true,
        },
        verb_type_overrides: vec![
            override_row(VerbType::Assimilated, &[2, 3, 5, 6], VerbType::Sound),
            override_row(VerbType::AssimilatedAndDefective, &[5], VerbType::Defective),
            override_row(VerbType::HamzaOnR1, &[2, 10], VerbType::Sound),
            override_row(VerbType::Hollow, &[2, 3, 5, 6], VerbType::Sound),
            override_row(VerbType::Geminate, &[2, 5], VerbType::Sound),
            override_row(
                VerbType::QuadriliteralAndDefective,
                &[],
                VerbType::SoundQuadriliteral,
            ),
        ],
        attested_stems: vec![
            attested(VerbType::Assimilated, &[1, 4, 8, 10]),
            attested(VerbType::AssimilatedAndDefective, &[1]),
            attested(VerbType::Defective, &[1, 2, 3, 4, 5, 6, 7, 8, 10]),
            attested(VerbType::Geminate, &[1, 3, 4, 8, 10]),
            attested(VerbType::HamzaOnR1, &[1, 4, 8]),
            attested(VerbType::Hollow, &[1, 4, 7, 8, 10]),
            attested(VerbType::Irregular, &[1, 4]),
            attested(VerbType::Sound, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]),
            attested(VerbType::SoundQuadriliteral, &[1, 2, 4]),
        ],
        stem1_choices: vec![
            with_present(Stem1ChoiceRow {
                r1: Some(Letter::Ya),
                ..choice(
                    VerbType::Assimilated,
                    &[PastIPresentA, PastIPresentI, PastUPresentU],
                )
            }),
            with_present(choice(
                VerbType::Assimilated,
                &[PastAPresentA, PastAPresentI, PastIPresentA, PastIPresentI],
            )),
            choice(
                VerbType::Defective,
                &[DefectiveType1, DefectiveType2, DefectiveType3],
            ),
            with_present(choice(
                VerbType::Sound,
                &[
                    PastAPresentA,
                    PastAPresentI,
                    PastAPresentU,
                    PastIPresentA,
                    PastIPresentI,
                    PastUPresentU,
                ],
            )),
            with_present(choice(
                VerbType::HamzaOnR1,
                &[PastAPresentI, PastAPresentU, PastIPresentA, PastUPresentU],
            )),
            with_present_and_perfect(Stem1ChoiceRow {
                r2: Some(Letter::Waw),
                ..choice(VerbType::Hollow, &[PastUPresentU, PastIPresentA])
            }),
            with_present_and_perfect(choice(
                VerbType::Hollow,
                &[PastIPresentI, PastIPresentA],
            )),
            choice(VerbType::SoundQuadriliteral, &[Quadriliteral]),
            with_present_and_perfect(choice(
                VerbType::Geminate,
                &[PastAPresentU, PastAPresentI, PastAPresentA, PastIPresentA],
            )),
            choice(VerbType::AssimilatedAndDefective, &[DefectiveType1]),
        ],
        irregular_roots: [
            irregular(&[Letter::Lam, Letter::Ya, Letter::Siin], &[1], IrregularLaysa),
            irregular(&[Letter::Hha, Letter::Ya, Letter::Ya], &[1, 4], IrregularHayiya),
            irregular(&[Letter::Ra, Letter::Hamza, Letter::Ya], &[1, 4], IrregularRa2a),
        ]
        .into_iter()
        .flatten()
        .collect(),
    }
}
