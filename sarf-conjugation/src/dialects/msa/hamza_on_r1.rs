use sarf_core::{Gender, Letter, Numerus, Person, VerbType, Voice, Vowel};

use crate::rules::{ConjugationRule, RuleConditions, Skeleton, Symbol};
use crate::verb::Verb;

use Symbol::{Fixed, R2, R3};
use Vowel::{LongU, ShortA, ShortI};

/// Only the forms where a prefix hamza meets the radical one are special;
/// the hamza pass seats the rest.
pub(crate) fn rules(verb: &Verb, voice: Voice) -> Vec<ConjugationRule> {
    let first_singular = RuleConditions::any()
        .present()
        .person(Person::First)
        .gender(Gender::Male)
        .numerus(Numerus::Singular);
    let sound = ConjugationRule::base(RuleConditions::any(), VerbType::Sound);

    match verb.stem_number() {
        1 => vec![
            ConjugationRule::emit(
                first_singular.voice(Voice::Passive),
                Skeleton::new(vec![R2, R3], vec![ShortA]).with_prefix_vowel(LongU),
            ),
            sound,
        ],
        4 => {
            let present_vowel = match voice {
                Voice::Active => ShortI,
                Voice::Passive => ShortA,
            };
            vec![
                ConjugationRule::emit(
                    first_singular,
                    Skeleton::new(vec![R2, R3], vec![present_vowel]).with_prefix_vowel(LongU),
                ),
                ConjugationRule::emit(
                    RuleConditions::any().perfect().voice(Voice::Passive),
                    Skeleton::new(vec![Fixed(Letter::Hamza), R2, R3], vec![LongU, ShortI]),
                ),
                sound,
            ]
        }
        _ => vec![sound],
    }
}
