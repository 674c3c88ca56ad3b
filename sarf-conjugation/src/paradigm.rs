//! Paradigms
//!
//! Enumerates the contexts a dialect realizes and conjugates them in
//! parallel. Requests share nothing mutable, so the fan-out needs no
//! coordination beyond keeping the enumeration order.

use rayon::prelude::*;

use sarf_core::{
    render_word, ConjugationError, ConjugationParams, DisplayVocalized, Gender, Mood, Numerus,
    Person, Voice,
};

use crate::metadata::DialectFeatures;

/// One cell of a conjugated paradigm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParadigmEntry {
    pub params: ConjugationParams,
    pub result: Result<Vec<DisplayVocalized>, ConjugationError>,
}

impl ParadigmEntry {
    pub fn rendered(&self) -> Option<String> {
        self.result.as_ref().ok().map(|units| render_word(units))
    }
}

const PERSONS: [Person; 3] = [Person::Third, Person::Second, Person::First];
const NUMBERS: [Numerus; 3] = [Numerus::Singular, Numerus::Dual, Numerus::Plural];
const GENDERS: [Gender; 2] = [Gender::Male, Gender::Female];

/// Person, gender and number cells the dialect distinguishes.
fn cells(features: DialectFeatures) -> Vec<(Person, Gender, Numerus)> {
    let mut cells = Vec::new();
    for person in PERSONS {
        for numerus in NUMBERS {
            if numerus == Numerus::Dual && (person == Person::First || !features.has_dual) {
                continue;
            }
            for gender in GENDERS {
                let unmarked = person == Person::First
                    || (numerus == Numerus::Plural && !features.has_female_plural);
                if unmarked && gender == Gender::Female {
                    continue;
                }
                cells.push((person, gender, numerus));
            }
        }
    }
    cells
}

/// Every valid context: perfect, present moods and imperative, then the
/// passive counterparts when the dialect has a passive.
pub fn paradigm_contexts(features: DialectFeatures) -> Vec<ConjugationParams> {
    let cells = cells(features);
    let mut moods = vec![Mood::Indicative, Mood::Subjunctive];
    if features.has_jussive {
        moods.push(Mood::Jussive);
    }

    let mut active = Vec::new();
    for &(person, gender, numerus) in &cells {
        active.push(ConjugationParams::perfect(person, gender, numerus));
    }
    for &mood in &moods {
        for &(person, gender, numerus) in &cells {
            active.push(ConjugationParams::present(mood, person, gender, numerus));
        }
    }

    let mut contexts = active.clone();
    for &(person, gender, numerus) in &cells {
        if person == Person::Second {
            contexts.push(ConjugationParams::imperative(gender, numerus));
        }
    }
    if features.has_passive {
        contexts.extend(active.into_iter().map(|p| p.with_voice(Voice::Passive)));
    }
    contexts
}

/// Run `conjugate` over every context in parallel, keeping the input order.
pub fn conjugate_all<F>(contexts: Vec<ConjugationParams>, conjugate: F) -> Vec<ParadigmEntry>
where
    F: Fn(ConjugationParams) -> Result<Vec<DisplayVocalized>, ConjugationError> + Sync,
{
    contexts
        .into_par_iter()
        .map(|params| ParadigmEntry {
            params,
            result: conjugate(params),
        })
        .collect()
}
