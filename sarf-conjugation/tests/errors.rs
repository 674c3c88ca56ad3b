use sarf_conjugation::{
    ConjugationError, ConjugationParams, Conjugator, DialectType, Gender, Mood, Numerus, Person,
    Stem, Stem1Pattern, VerbRoot, VerbType,
};

fn root(s: &str) -> VerbRoot {
    VerbRoot::parse(s).unwrap()
}

fn third_perfect() -> ConjugationParams {
    ConjugationParams::perfect(Person::Third, Gender::Male, Numerus::Singular)
}

fn third_present() -> ConjugationParams {
    ConjugationParams::present(Mood::Indicative, Person::Third, Gender::Male, Numerus::Singular)
}

#[test]
fn test_unattested_pairs_are_unsupported_for_every_context() {
    let conjugator = Conjugator::new();
    let samples = ["ك-ت-ب", "ق-و-ل", "ر-م-ي", "و-ع-د", "م-د-د", "ء-ج-ر", "و-ق-ي", "د-ح-ر-ج"];
    for dialect in DialectType::ALL {
        let contexts = conjugator.paradigm_contexts(dialect);
        for sample in samples {
            let root = root(sample);
            for number in 2..=10 {
                let stem = Stem::new(number).unwrap();
                let verb_type = conjugator.derive_verb_type(dialect, &root, &stem);
                if conjugator.is_conjugatable(dialect, verb_type, number) {
                    continue;
                }
                for params in &contexts {
                    let err = conjugator
                        .conjugate(&root, stem, dialect, *params)
                        .unwrap_err();
                    assert_eq!(
                        err,
                        ConjugationError::UnsupportedCombination {
                            verb_type,
                            stem: number
                        }
                    );
                }
            }
        }
    }
}

#[test]
fn test_hollow_stem9_is_unsupported() {
    let conjugator = Conjugator::new();
    let err = conjugator
        .conjugate(
            &root("ق-و-ل"),
            Stem::new(9).unwrap(),
            DialectType::ModernStandardArabic,
            third_perfect(),
        )
        .unwrap_err();
    assert_eq!(
        err,
        ConjugationError::UnsupportedCombination {
            verb_type: VerbType::Hollow,
            stem: 9
        }
    );
}

#[test]
fn test_stem1_without_pattern_needs_context() {
    let conjugator = Conjugator::new();
    let err = conjugator
        .conjugate(
            &root("ك-ت-ب"),
            Stem::basic_unresolved(),
            DialectType::ModernStandardArabic,
            third_perfect(),
        )
        .unwrap_err();
    match err {
        ConjugationError::MissingDisambiguatingContext { verb_type, choices } => {
            assert_eq!(verb_type, VerbType::Sound);
            assert_eq!(choices.len(), 6);
            assert!(choices.contains(&Stem1Pattern::PastAPresentU));
        }
        other => panic!("unexpected error {:?}", other),
    }

    let choice = conjugator
        .stem1_context_choices(DialectType::ModernStandardArabic, &root("ك-ت-ب"))
        .unwrap();
    assert_eq!(choice.required_context, vec![third_present()]);
}

#[test]
fn test_irregular_roots_resolve_their_own_pattern() {
    let conjugator = Conjugator::new();
    let word = conjugator
        .conjugate_to_string(
            &root("ل-ي-س"),
            Stem::basic_unresolved(),
            DialectType::ModernStandardArabic,
            third_perfect(),
        )
        .unwrap();
    assert_eq!(word, "لَيْسَ");
}

#[test]
fn test_contexts_without_realization_are_invalid() {
    let conjugator = Conjugator::new();
    let laysa = root("ل-ي-س");
    let err = conjugator
        .conjugate(
            &laysa,
            Stem::basic(Stem1Pattern::IrregularLaysa),
            DialectType::ModernStandardArabic,
            third_present(),
        )
        .unwrap_err();
    assert!(matches!(err, ConjugationError::InvalidContext(_)));

    let kataba = root("ك-ت-ب");
    let stem = Stem::basic(Stem1Pattern::PastAPresentU);
    let passive_imperative = ConjugationParams::imperative(Gender::Male, Numerus::Singular).passive();
    assert!(matches!(
        conjugator.conjugate(&kataba, stem, DialectType::ModernStandardArabic, passive_imperative),
        Err(ConjugationError::InvalidContext(_))
    ));

    let darasa = root("د-ر-س");
    let lebanese_stem = Stem::basic(Stem1Pattern::PastAPresentIIU);
    for params in [
        ConjugationParams::perfect(Person::Third, Gender::Male, Numerus::Dual),
        third_perfect().passive(),
        ConjugationParams::present(Mood::Jussive, Person::Third, Gender::Male, Numerus::Singular),
    ] {
        assert!(matches!(
            conjugator.conjugate(&darasa, lebanese_stem, DialectType::Lebanese, params),
            Err(ConjugationError::InvalidContext(_))
        ));
    }
}

#[test]
fn test_gaps_in_coverage_are_unhandled() {
    let conjugator = Conjugator::new();

    let err = conjugator
        .conjugate(
            &root("ر-م-ي"),
            Stem::new(7).unwrap(),
            DialectType::Lebanese,
            third_perfect(),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ConjugationError::UnhandledCase {
            dialect: DialectType::Lebanese,
            verb_type: VerbType::Defective,
            stem: 7,
            ..
        }
    ));

    let err = conjugator
        .conjugate(
            &root("ج-ي-ء"),
            Stem::basic_unresolved(),
            DialectType::Lebanese,
            third_perfect(),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ConjugationError::UnhandledCase {
            verb_type: VerbType::Irregular,
            ..
        }
    ));
}

#[test]
fn test_malformed_input() {
    assert!(matches!(
        VerbRoot::parse("ك-ت"),
        Err(ConjugationError::InvalidRoot(_))
    ));
    assert!(matches!(
        VerbRoot::parse("ك-ت-x"),
        Err(ConjugationError::InvalidRoot(_))
    ));
    assert_eq!(Stem::new(11), Err(ConjugationError::InvalidStem(11)));
    assert_eq!(Stem::new(0), Err(ConjugationError::InvalidStem(0)));
}
