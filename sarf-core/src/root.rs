//! Verb Roots
//!
//! Radicals of a verb and the structural classification derived from them.
//! The classification is a pure function of the radicals and is never cached.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConjugationError;
use crate::grammar::VerbType;
use crate::symbols::Letter;

/// Structural class of a root, before any stem or dialect is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RootType {
    Sound,
    /// R2 and R3 identical.
    Geminate,
    HamzaOnR1,
    /// Weak R1.
    InitialWeak,
    /// Weak R1 and weak R3.
    DoublyWeakInitialFinal,
    /// Weak R2.
    MiddleWeak,
    /// Weak R2 and weak R3.
    DoublyWeakMiddleFinal,
    /// Weak R3.
    FinalWeak,
    Quadriliteral,
    QuadriliteralFinalWeak,
}

/// Three or four radicals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VerbRoot {
    radicals: Vec<Letter>,
}

impl VerbRoot {
    pub fn new(radicals: &[Letter]) -> Result<Self, ConjugationError> {
        if !(3..=4).contains(&radicals.len()) {
            return Err(ConjugationError::InvalidRoot(format!(
                "expected 3 or 4 radicals, got {}",
                radicals.len()
            )));
        }
        let radicals: Vec<Letter> = radicals.iter().map(|r| r.as_radical()).collect();
        if let Some(bad) = radicals
            .iter()
            .find(|r| matches!(r, Letter::Alef | Letter::TaMarbuta))
        {
            return Err(ConjugationError::InvalidRoot(format!(
                "{} cannot be a radical",
                bad
            )));
        }
        Ok(Self { radicals })
    }

    /// Parse radicals separated by `-`, e.g. `ق-و-ل`.
    pub fn parse(s: &str) -> Result<Self, ConjugationError> {
        let radicals = s
            .split('-')
            .map(|part| {
                let mut chars = part.trim().chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Letter::from_char(c).ok_or_else(|| {
                        ConjugationError::InvalidRoot(format!("{:?} is not an Arabic letter", c))
                    }),
                    _ => Err(ConjugationError::InvalidRoot(format!(
                        "{:?} is not a single radical",
                        part
                    ))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&radicals)
    }

    pub fn radicals(&self) -> &[Letter] {
        &self.radicals
    }

    /// Radical by 1-based position.
    pub fn radical(&self, position: usize) -> Option<Letter> {
        position
            .checked_sub(1)
            .and_then(|i| self.radicals.get(i))
            .copied()
    }

    pub fn r1(&self) -> Letter {
        self.radicals[0]
    }

    pub fn r2(&self) -> Letter {
        self.radicals[1]
    }

    pub fn r3(&self) -> Letter {
        self.radicals[2]
    }

    pub fn r4(&self) -> Option<Letter> {
        self.radicals.get(3).copied()
    }

    pub fn is_quadriliteral(&self) -> bool {
        self.radicals.len() == 4
    }

    pub fn root_type(&self) -> RootType {
        if let Some(r4) = self.r4() {
            return if r4.is_weak() {
                RootType::QuadriliteralFinalWeak
            } else {
                RootType::Quadriliteral
            };
        }

        let (r1, r2, r3) = (self.r1(), self.r2(), self.r3());
        if r2 == r3 {
            RootType::Geminate
        } else if r1 == Letter::Hamza {
            RootType::HamzaOnR1
        } else if r1.is_weak() {
            if r3.is_weak() {
                RootType::DoublyWeakInitialFinal
            } else {
                RootType::InitialWeak
            }
        } else if r2.is_weak() {
            if r3.is_weak() {
                RootType::DoublyWeakMiddleFinal
            } else {
                RootType::MiddleWeak
            }
        } else if r3.is_weak() {
            RootType::FinalWeak
        } else {
            RootType::Sound
        }
    }

    /// Verb type a root has before any dialect override.
    ///
    /// A weak radical outranks a hamza on R1 and a doubled weak radical is
    /// defective rather than geminate.
    pub fn deduced_verb_type(&self) -> VerbType {
        match self.root_type() {
            RootType::Sound => VerbType::Sound,
            RootType::Geminate if self.r3().is_weak() => VerbType::Defective,
            RootType::Geminate => VerbType::Geminate,
            RootType::HamzaOnR1 if self.r3().is_weak() => VerbType::Defective,
            RootType::HamzaOnR1 if self.r2().is_weak() => VerbType::Hollow,
            RootType::HamzaOnR1 => VerbType::HamzaOnR1,
            RootType::InitialWeak => VerbType::Assimilated,
            RootType::DoublyWeakInitialFinal => VerbType::AssimilatedAndDefective,
            RootType::MiddleWeak => VerbType::Hollow,
            RootType::DoublyWeakMiddleFinal | RootType::FinalWeak => VerbType::Defective,
            RootType::Quadriliteral => VerbType::SoundQuadriliteral,
            RootType::QuadriliteralFinalWeak => VerbType::QuadriliteralAndDefective,
        }
    }
}

impl FromStr for VerbRoot {
    type Err = ConjugationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VerbRoot {
    type Error = ConjugationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VerbRoot> for String {
    fn from(root: VerbRoot) -> Self {
        root.to_string()
    }
}

impl fmt::Display for VerbRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, radical) in self.radicals.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{}", radical)?;
        }
        Ok(())
    }
}
