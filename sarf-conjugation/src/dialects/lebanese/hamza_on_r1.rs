//! Lebanese verbs with hamza as R1
//!
//! Most follow the sound `ausu` pattern with a seated hamza (`byuʔmur`).
//! `akal` and `akhad` lose the hamza in the present, which lengthens the
//! person prefix to `ā` (`byākul`).

use sarf_core::{Letter, Mood, Numerus, Person, Stem1Pattern, Tense, Voice, Vowel};

use super::sound::{a_perfect, imperative, vowel_suffix};
use crate::rules::{ConjugationRule, RuleConditions, Skeleton, Symbol};
use crate::verb::Verb;

use Symbol::{R1, R2, R3};
use Vowel::{LongA, ShortA, ShortI, ShortU, Sukun};

/// Roots whose present drops the hamza.
const CONTRACTED: [[Letter; 3]; 2] = [
    [Letter::Hamza, Letter::Kaf, Letter::Lam],
    [Letter::Hamza, Letter::Kha, Letter::Thal],
];

pub(crate) fn rules(verb: &Verb, _voice: Voice) -> Vec<ConjugationRule> {
    if !verb.stem.is_basic() {
        return vec![ConjugationRule::unhandled(
            RuleConditions::any(),
            "hamza-initial stem without a Lebanese table",
        )];
    }
    let table = a_perfect(Stem1Pattern::PastAPresentUSU);
    if is_contracted(verb) {
        contracted(table)
    } else {
        table
    }
}

fn is_contracted(verb: &Verb) -> bool {
    CONTRACTED
        .iter()
        .any(|radicals| verb.root.radicals() == radicals.as_slice())
}

/// Keep the perfect rules and swap the present for the hamza-less forms.
fn contracted(mut table: Vec<ConjugationRule>) -> Vec<ConjugationRule> {
    table.retain(|rule| rule.conditions.tense == Some(Tense::Perfect));
    let short = |vowel| Skeleton::new(vec![R2, R3], vec![vowel]);
    table.extend([
        ConjugationRule::emit(imperative().vowel_suffix(true), short(ShortI)),
        ConjugationRule::emit(imperative(), short(ShortU)),
        ConjugationRule::emit(vowel_suffix(), short(Sukun).with_prefix_vowel(LongA)),
        // The 1s subjunctive keeps the hamza; it fuses with the prefix into madda.
        ConjugationRule::emit(
            RuleConditions::any()
                .mood(Mood::Subjunctive)
                .person(Person::First)
                .numerus(Numerus::Singular),
            Skeleton::new(vec![R1, R2, R3], vec![Sukun, ShortU]).with_prefix_vowel(ShortA),
        ),
        ConjugationRule::emit(
            RuleConditions::any(),
            short(ShortU).with_prefix_vowel(LongA),
        ),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleOutcome;
    use sarf_core::{DialectType, Stem, VerbRoot, VerbType};

    fn verb(root: &str) -> Verb {
        Verb {
            root: VerbRoot::parse(root).unwrap(),
            stem: Stem::basic(Stem1Pattern::PastAPresentU),
            verb_type: VerbType::HamzaOnR1,
            dialect: DialectType::Lebanese,
        }
    }

    #[test]
    fn contracted_roots_are_recognized() {
        assert!(is_contracted(&verb("ء-ك-ل")));
        assert!(is_contracted(&verb("ء-خ-ذ")));
        assert!(!is_contracted(&verb("ء-م-ر")));
    }

    #[test]
    fn contracted_present_drops_r1() {
        let table = rules(&verb("ء-ك-ل"), Voice::Active);
        assert!(table.last().unwrap().conditions.is_unconditional());
        match &table.last().unwrap().outcome {
            RuleOutcome::Emit(skeleton) => {
                assert_eq!(skeleton.symbols, vec![R2, R3]);
                assert_eq!(skeleton.prefix_vowel, Some(LongA));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}
