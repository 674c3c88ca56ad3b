use sarf_conjugation::{
    ConjugationParams, Conjugator, DialectType, Gender, Mood, Numerus, Person, Stem, Stem1Pattern,
    VerbRoot,
};

use Gender::{Female, Male};
use Mood::{Indicative, Subjunctive};
use Numerus::{Plural, Singular};
use Person::{First, Second, Third};

fn perfect(person: Person, gender: Gender, numerus: Numerus) -> ConjugationParams {
    ConjugationParams::perfect(person, gender, numerus)
}

fn present(mood: Mood, person: Person, gender: Gender, numerus: Numerus) -> ConjugationParams {
    ConjugationParams::present(mood, person, gender, numerus)
}

fn imperative(gender: Gender, numerus: Numerus) -> ConjugationParams {
    ConjugationParams::imperative(gender, numerus)
}

fn check(root: &str, stem: Stem, cases: &[(ConjugationParams, &str)]) {
    let conjugator = Conjugator::new();
    let root = VerbRoot::parse(root).unwrap();
    for (params, expected) in cases {
        let word = conjugator
            .conjugate_to_string(&root, stem, DialectType::Lebanese, *params)
            .unwrap_or_else(|e| panic!("{} {} {}: {}", root, stem, params, e));
        assert_eq!(word, *expected, "{} {} {}", root, stem, params);
    }
}

#[test]
fn test_stem1_aiiu() {
    check(
        "د-ر-س",
        Stem::basic(Stem1Pattern::PastAPresentIIU),
        &[
            (perfect(Third, Male, Singular), "دَرَسْ"),
            (perfect(Third, Female, Singular), "دَرَسِتْ"),
            (perfect(Second, Female, Singular), "دَرَسْتِي"),
            (perfect(Third, Male, Plural), "دَرَسُوا"),
            (perfect(Second, Male, Plural), "دَرَسْتُوا"),
            (perfect(First, Male, Plural), "دَرَسْنَا"),
            (present(Indicative, Third, Male, Singular), "بْيِدْرُسْ"),
            (present(Indicative, Second, Female, Singular), "بْتِدِرْسِي"),
            (present(Indicative, First, Male, Singular), "بِدْرُسْ"),
            (present(Indicative, First, Male, Plural), "مْنِدْرُسْ"),
            (present(Subjunctive, First, Male, Singular), "إِدْرُسْ"),
            (imperative(Male, Singular), "دْرُوسْ"),
            (imperative(Female, Singular), "دْرِسِي"),
        ],
    );
}

#[test]
fn test_stem1_aa_and_ausu() {
    check(
        "د-ف-ع",
        Stem::basic(Stem1Pattern::PastAPresentA),
        &[
            (perfect(Third, Male, Singular), "دَفَعْ"),
            (present(Indicative, Third, Male, Singular), "بْيِدْفَعْ"),
            (imperative(Male, Singular), "دْفَاعْ"),
        ],
    );
    check(
        "ر-ب-ط",
        Stem::basic(Stem1Pattern::PastAPresentUSU),
        &[
            (perfect(Third, Male, Singular), "رَبَطْ"),
            (present(Indicative, Third, Male, Singular), "بْيُرْبُطْ"),
            (present(Indicative, Second, Female, Singular), "بْتُرْبْطِي"),
            (present(Subjunctive, First, Male, Singular), "أُرْبُطْ"),
        ],
    );
}

#[test]
fn test_stem1_i_perfect_patterns() {
    check(
        "ح-ض-ر",
        Stem::basic(Stem1Pattern::PastIPresentA),
        &[
            (perfect(Third, Male, Singular), "حِضِرْ"),
            (perfect(Third, Female, Singular), "حِضْرِتْ"),
            (perfect(Second, Male, Singular), "حْضِرِتْ"),
            (present(Indicative, Third, Male, Singular), "بْيِحْضَرْ"),
            (imperative(Male, Singular), "حْضَارْ"),
        ],
    );
    check(
        "ع-م-ل",
        Stem::basic(Stem1Pattern::PastIPresentAA),
        &[
            (perfect(Third, Male, Singular), "عِمِلْ"),
            (present(Indicative, Third, Male, Singular), "بْيَعْمِلْ"),
            (present(Indicative, Second, Female, Singular), "بْتَعْمْلِي"),
            (imperative(Male, Singular), "عْمُولْ"),
        ],
    );
    check(
        "ل-ب-س",
        Stem::basic(Stem1Pattern::PastIPresentU),
        &[
            (perfect(Third, Male, Singular), "لِبِسْ"),
            (present(Indicative, Third, Male, Singular), "بْيِلْبُسْ"),
            (imperative(Male, Singular), "لْبُوسْ"),
        ],
    );
}

#[test]
fn test_stem3() {
    check(
        "س-ع-د",
        Stem::new(3).unwrap(),
        &[
            (perfect(Third, Male, Singular), "سَاعَدْ"),
            (present(Indicative, Third, Male, Singular), "بِيسَاعِدْ"),
            (present(Indicative, Third, Female, Singular), "بِتْسَاعِدْ"),
            (present(Indicative, Second, Female, Singular), "بِتْسَاعْدِي"),
            (present(Indicative, First, Male, Singular), "بْسَاعِدْ"),
            (present(Indicative, First, Male, Plural), "مِنْسَاعِدْ"),
            (present(Subjunctive, Third, Male, Singular), "يْسَاعِدْ"),
            (present(Subjunctive, First, Male, Singular), "سَاعِدْ"),
            (present(Subjunctive, First, Male, Plural), "نْسَاعِدْ"),
            (imperative(Male, Singular), "سَاعِدْ"),
            (imperative(Female, Singular), "سَاعْدِي"),
        ],
    );
}

#[test]
fn test_stems_7_8_10() {
    check(
        "ب-س-ط",
        Stem::new(7).unwrap(),
        &[
            (perfect(Third, Male, Singular), "نْبَسَطْ"),
            (present(Indicative, Third, Male, Singular), "بْيُنْبُسِطْ"),
            (present(Indicative, Second, Female, Singular), "بْتُنْبُسْطِي"),
            (imperative(Male, Singular), "نْبُسِطْ"),
        ],
    );
    check(
        "ح-ف-ل",
        Stem::new(8).unwrap(),
        &[
            (perfect(Third, Male, Singular), "حْتَفَلْ"),
            (present(Indicative, Third, Male, Singular), "بْيِحْتِفِلْ"),
            (present(Indicative, Second, Female, Singular), "بْتِحْتِفْلِي"),
            (imperative(Male, Singular), "حْتِفِلْ"),
        ],
    );
    check(
        "ع-م-ل",
        Stem::new(10).unwrap(),
        &[
            (perfect(Third, Male, Singular), "سْتَعْمَلْ"),
            (present(Indicative, Third, Male, Singular), "بْيِسْتَعْمِلْ"),
            (present(Indicative, Second, Female, Singular), "بْتِسْتَعْمْلِي"),
            (imperative(Male, Singular), "سْتَعْمِلْ"),
        ],
    );
}

#[test]
fn test_sound_stems_2_and_4() {
    check(
        "د-ر-س",
        Stem::new(2).unwrap(),
        &[
            (perfect(Third, Male, Singular), "دَرَّسْ"),
            (perfect(Second, Male, Singular), "دَرَّسِتْ"),
            (present(Indicative, Third, Male, Singular), "بِيدَرِّسْ"),
            (present(Indicative, Second, Female, Singular), "بِتْدَرّْسِي"),
            (present(Indicative, First, Male, Singular), "بْدَرِّسْ"),
            (present(Subjunctive, First, Male, Singular), "دَرِّسْ"),
            (imperative(Male, Singular), "دَرِّسْ"),
        ],
    );
    check(
        "ك-ر-م",
        Stem::new(4).unwrap(),
        &[
            (perfect(Third, Male, Singular), "أَكْرَمْ"),
            (perfect(Third, Female, Singular), "أَكْرَمِتْ"),
            (present(Indicative, Third, Male, Singular), "بْيِكْرُمْ"),
            (present(Subjunctive, First, Male, Singular), "إِكْرُمْ"),
        ],
    );
}

#[test]
fn test_sound_stems_5_and_6() {
    check(
        "ع-ل-م",
        Stem::new(5).unwrap(),
        &[
            (perfect(Third, Male, Singular), "تْعَلَّمْ"),
            (perfect(First, Male, Plural), "تْعَلَّمْنَا"),
            (present(Indicative, Third, Male, Singular), "بْيِتْعَلَّمْ"),
            (present(Indicative, Second, Female, Singular), "بْتِتْعَلَّمِي"),
            (present(Indicative, First, Male, Plural), "مْنِتْعَلَّمْ"),
            (imperative(Male, Singular), "تْعَلَّمْ"),
        ],
    );
    check(
        "ق-ت-ل",
        Stem::new(6).unwrap(),
        &[
            (perfect(Third, Male, Singular), "تْقَاتَلْ"),
            (present(Indicative, Third, Male, Singular), "بْيِتْقَاتَلْ"),
            (present(Indicative, Second, Male, Plural), "بْتِتْقَاتَلُوا"),
        ],
    );
}

#[test]
fn test_defective_stem1_ai() {
    check(
        "ر-م-ي",
        Stem::basic(Stem1Pattern::PastAPresentI),
        &[
            (perfect(Third, Male, Singular), "رَمَى"),
            (perfect(Third, Female, Singular), "رَمِتْ"),
            (perfect(Second, Male, Singular), "رَمَيْتْ"),
            (perfect(Second, Female, Singular), "رَمَيْتِي"),
            (perfect(First, Male, Singular), "رَمَيْتْ"),
            (perfect(Third, Male, Plural), "رَمُوا"),
            (perfect(Second, Male, Plural), "رَمَيْتُوا"),
            (perfect(First, Male, Plural), "رَمَيْنَا"),
            (present(Indicative, Third, Male, Singular), "بْيِرْمِي"),
            (present(Indicative, Third, Female, Singular), "بْتِرْمِي"),
            (present(Indicative, Second, Female, Singular), "بْتِرْمِي"),
            (present(Indicative, First, Male, Singular), "بِرْمِي"),
            (present(Indicative, Third, Male, Plural), "بْيِرْمُوا"),
            (present(Indicative, First, Male, Plural), "مْنِرْمِي"),
            (present(Subjunctive, Third, Male, Singular), "يِرْمِي"),
            (present(Subjunctive, First, Male, Singular), "إِرْمِي"),
            (present(Subjunctive, Second, Male, Plural), "تِرْمُوا"),
            (imperative(Male, Singular), "رْمِي"),
            (imperative(Female, Singular), "رْمِي"),
            (imperative(Male, Plural), "رْمُوا"),
        ],
    );
}

#[test]
fn test_defective_stem1_ia() {
    check(
        "ن-س-ي",
        Stem::basic(Stem1Pattern::PastIPresentA),
        &[
            (perfect(Third, Male, Singular), "نِسِي"),
            (perfect(Third, Female, Singular), "نِسْيِتْ"),
            (perfect(Third, Male, Plural), "نِسْيُوا"),
            (perfect(Second, Male, Singular), "نْسِيتْ"),
            (perfect(First, Male, Plural), "نْسِينَا"),
            (present(Indicative, Third, Male, Singular), "بْيِنْسَى"),
            (present(Indicative, Second, Female, Singular), "بْتِنْسِي"),
            (present(Indicative, Third, Male, Plural), "بْيِنْسُوا"),
            (imperative(Male, Singular), "نْسَى"),
        ],
    );
}

#[test]
fn test_defective_derived_stems() {
    check(
        "ر-ب-ي",
        Stem::new(2).unwrap(),
        &[
            (perfect(Third, Male, Singular), "رَبَّى"),
            (perfect(Third, Female, Singular), "رَبِّتْ"),
            (perfect(Second, Male, Singular), "رَبَّيْتْ"),
            (perfect(Third, Male, Plural), "رَبُّوا"),
            (present(Indicative, Third, Male, Singular), "بِيرَبِّي"),
            (present(Indicative, Second, Male, Plural), "بِتْرَبُّوا"),
            (imperative(Male, Singular), "رَبِّي"),
        ],
    );
    check(
        "ر-ب-ي",
        Stem::new(5).unwrap(),
        &[
            (perfect(Third, Male, Singular), "تْرَبَّى"),
            (perfect(Second, Male, Singular), "تْرَبَّيْتْ"),
            (perfect(Third, Male, Plural), "تْرَبُّوا"),
            (present(Indicative, Third, Male, Singular), "بْيِتْرَبَّى"),
            (present(Indicative, Second, Female, Singular), "بْتِتْرَبِّي"),
        ],
    );
    check(
        "ل-ق-ي",
        Stem::new(6).unwrap(),
        &[
            (perfect(Third, Male, Singular), "تْلَاقَى"),
            (perfect(Third, Female, Singular), "تْلَاقِتْ"),
            (perfect(Second, Male, Singular), "تْلَاقَيْتْ"),
            (present(Indicative, Third, Male, Singular), "بْيِتْلَاقَى"),
            (present(Indicative, Third, Male, Plural), "بْيِتْلَاقُوا"),
        ],
    );
}

#[test]
fn test_hollow_stem1() {
    check(
        "ن-و-م",
        Stem::basic(Stem1Pattern::PastIPresentA),
        &[
            (perfect(Third, Male, Singular), "نَامْ"),
            (perfect(Third, Female, Singular), "نَامِتْ"),
            (perfect(Second, Male, Singular), "نِمِتْ"),
            (perfect(Second, Female, Singular), "نِمْتِي"),
            (perfect(Third, Male, Plural), "نَامُوا"),
            (perfect(First, Male, Plural), "نِمْنَا"),
            (present(Indicative, Third, Male, Singular), "بِينَامْ"),
            (present(Indicative, Third, Female, Singular), "بِتْنَامْ"),
            (present(Indicative, Second, Female, Singular), "بِتْنَامِي"),
            (present(Indicative, First, Male, Singular), "بْنَامْ"),
            (present(Indicative, First, Male, Plural), "مِنَّامْ"),
            (present(Subjunctive, Third, Male, Singular), "يْنَامْ"),
            (present(Subjunctive, First, Male, Singular), "نَامْ"),
            (present(Subjunctive, First, Male, Plural), "نْنَامْ"),
            (imperative(Male, Singular), "نَامْ"),
            (imperative(Male, Plural), "نَامُوا"),
        ],
    );
    check(
        "ر-و-ح",
        Stem::basic(Stem1Pattern::PastIPresentU),
        &[
            (perfect(Third, Male, Singular), "رَاحْ"),
            (perfect(First, Male, Singular), "رِحِتْ"),
            (present(Indicative, Third, Male, Singular), "بِيرُوحْ"),
            (present(Indicative, First, Male, Plural), "مِنْرُوحْ"),
            (imperative(Female, Singular), "رُوحِي"),
        ],
    );
    check(
        "ب-ي-ع",
        Stem::basic(Stem1Pattern::PastIPresentI),
        &[
            (perfect(Third, Male, Singular), "بَاعْ"),
            (perfect(Second, Male, Singular), "بِعِتْ"),
            (present(Indicative, Third, Male, Singular), "بِيبِيعْ"),
            (imperative(Male, Singular), "بِيعْ"),
        ],
    );
}

#[test]
fn test_hollow_stem8() {
    check(
        "ح-و-ج",
        Stem::new(8).unwrap(),
        &[
            (perfect(Third, Male, Singular), "حْتَاجْ"),
            (perfect(First, Male, Singular), "حْتَجِتْ"),
            (present(Indicative, Third, Male, Singular), "بْيِحْتَاجْ"),
            (present(Indicative, Second, Female, Singular), "بْتِحْتَاجِي"),
        ],
    );
}

#[test]
fn test_hamza_on_r1_stem1() {
    check(
        "ء-م-ر",
        Stem::basic(Stem1Pattern::PastAPresentU),
        &[
            (perfect(Third, Male, Singular), "أَمَرْ"),
            (perfect(Second, Male, Singular), "أَمَرِتْ"),
            (perfect(Second, Female, Singular), "أَمَرْتِي"),
            (present(Indicative, Third, Male, Singular), "بْيُؤْمُرْ"),
            (present(Indicative, Second, Female, Singular), "بْتُؤْمْرِي"),
            (present(Indicative, First, Male, Singular), "بُؤْمُرْ"),
            (present(Indicative, First, Male, Plural), "مْنُؤْمُرْ"),
            (present(Subjunctive, First, Male, Singular), "أُؤْمُرْ"),
            (imperative(Male, Singular), "أْمُورْ"),
            (imperative(Female, Singular), "أْمُرِي"),
        ],
    );
    check(
        "ء-ك-ل",
        Stem::basic(Stem1Pattern::PastAPresentU),
        &[
            (perfect(Third, Male, Singular), "أَكَلْ"),
            (perfect(Second, Male, Plural), "أَكَلْتُوا"),
            (present(Indicative, Third, Male, Singular), "بْيَاكُلْ"),
            (present(Indicative, Second, Female, Singular), "بْتَاكْلِي"),
            (present(Indicative, First, Male, Singular), "بَاكُلْ"),
            (present(Indicative, First, Male, Plural), "مْنَاكُلْ"),
            (present(Subjunctive, Third, Male, Singular), "يَاكُلْ"),
            (present(Subjunctive, First, Male, Singular), "آكُلْ"),
            (present(Subjunctive, Third, Male, Plural), "يَاكْلُوا"),
            (imperative(Male, Singular), "كُلْ"),
            (imperative(Female, Singular), "كِلِي"),
            (imperative(Male, Plural), "كِلُوا"),
        ],
    );
}

#[test]
fn test_geminate_stem1() {
    check(
        "ض-ل-ل",
        Stem::basic(Stem1Pattern::PastAPresentA),
        &[
            (perfect(Third, Male, Singular), "ضَلّْ"),
            (perfect(Third, Female, Singular), "ضَلِّتْ"),
            (perfect(Second, Male, Singular), "ضَلَّيْتْ"),
            (perfect(Third, Male, Plural), "ضَلُّوا"),
            (perfect(First, Male, Plural), "ضَلَّيْنَا"),
            (present(Indicative, Third, Male, Singular), "بِيضَلّْ"),
            (present(Indicative, Second, Female, Singular), "بِتْضَلِّي"),
            (present(Indicative, First, Male, Singular), "بْضَلّْ"),
            (present(Indicative, First, Male, Plural), "مِنْضَلّْ"),
            (present(Subjunctive, First, Male, Singular), "ضَلّْ"),
            (imperative(Male, Singular), "ضَلّْ"),
            (imperative(Male, Plural), "ضَلُّوا"),
        ],
    );
    check(
        "ح-ب-ب",
        Stem::basic(Stem1Pattern::PastAPresentI),
        &[
            (perfect(Third, Male, Singular), "حَبّْ"),
            (present(Indicative, Third, Male, Singular), "بِيحِبّْ"),
        ],
    );
}

#[test]
fn test_quadriliteral_stems() {
    check(
        "د-ح-ر-ج",
        Stem::basic(Stem1Pattern::Quadriliteral),
        &[
            (perfect(Third, Male, Singular), "دَحْرَجْ"),
            (perfect(Third, Female, Singular), "دَحْرَجِتْ"),
            (perfect(First, Male, Plural), "دَحْرَجْنَا"),
            (present(Indicative, Third, Male, Singular), "بِيدَحْرِجْ"),
            (present(Indicative, Second, Female, Singular), "بِتْدَحْرْجِي"),
            (present(Indicative, First, Male, Plural), "مِنْدَحْرِجْ"),
            (imperative(Male, Singular), "دَحْرِجْ"),
        ],
    );
    check(
        "د-ح-ر-ج",
        Stem::new(2).unwrap(),
        &[
            (perfect(Third, Male, Singular), "تْدَحْرَجْ"),
            (present(Indicative, Third, Male, Singular), "بْيِتْدَحْرَجْ"),
            (imperative(Male, Singular), "تْدَحْرَجْ"),
        ],
    );
}

#[test]
fn test_feminine_plural_falls_back_to_masculine() {
    let conjugator = Conjugator::new();
    let root = VerbRoot::parse("د-ر-س").unwrap();
    let stem = Stem::basic(Stem1Pattern::PastAPresentIIU);
    let feminine = conjugator
        .conjugate_to_string(&root, stem, DialectType::Lebanese, perfect(Third, Female, Plural))
        .unwrap();
    assert_eq!(feminine, "دَرَسُوا");
}

#[test]
fn test_sound_paradigm_is_total() {
    let conjugator = Conjugator::new();
    let root = VerbRoot::parse("ك-ت-ب").unwrap();
    for stem in [
        Stem::basic(Stem1Pattern::PastAPresentUSU),
        Stem::basic(Stem1Pattern::PastIPresentAA),
        Stem::new(3).unwrap(),
        Stem::new(7).unwrap(),
        Stem::new(8).unwrap(),
        Stem::new(10).unwrap(),
    ] {
        for entry in conjugator.conjugate_paradigm(&root, stem, DialectType::Lebanese) {
            assert!(entry.result.is_ok(), "{} {} {:?}", stem, entry.params, entry.result);
        }
    }
}
