//! Dialect Metadata
//!
//! Per-dialect facts that are data rather than phonology: feature flags,
//! verb-type overrides per stem, attested (verb type, stem) pairs, stem-1
//! pattern candidates and the irregular-root table. Tables load from and
//! persist to JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use sarf_core::{
    ConjugationError, ConjugationParams, DialectType, Letter, RootType, Stem, Stem1Pattern,
    VerbRoot, VerbType,
};

use crate::dialects::{lebanese, msa};

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("metadata describes {found:?}, expected {expected:?}")]
    DialectMismatch {
        expected: DialectType,
        found: DialectType,
    },
}

/// Grammatical features a dialect realizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectFeatures {
    pub has_dual: bool,
    pub has_female_plural: bool,
    pub has_jussive: bool,
    pub has_passive: bool,
}

/// Stems in which a verb type behaves as another one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbTypeOverride {
    pub verb_type: VerbType,
    /// Empty means every stem.
    #[serde(default)]
    pub stems: Vec<u8>,
    pub becomes: VerbType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestedStems {
    pub verb_type: VerbType,
    pub stems: Vec<u8>,
}

/// Stem-1 candidates for roots matching every given selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stem1ChoiceRow {
    #[serde(default)]
    pub verb_type: Option<VerbType>,
    #[serde(default)]
    pub root_type: Option<RootType>,
    #[serde(default)]
    pub r1: Option<Letter>,
    #[serde(default)]
    pub r2: Option<Letter>,
    pub patterns: Vec<Stem1Pattern>,
    /// Forms a caller must know to pick among `patterns`.
    #[serde(default)]
    pub required_context: Vec<ConjugationParams>,
}

impl Stem1ChoiceRow {
    fn matches(&self, verb_type: VerbType, root: &VerbRoot) -> bool {
        self.verb_type.map_or(true, |v| v == verb_type)
            && self.root_type.map_or(true, |t| t == root.root_type())
            && self.r1.map_or(true, |r| r == root.r1())
            && self.r2.map_or(true, |r| r == root.r2())
    }
}

/// A root conjugated as `VerbType::Irregular` in the given stems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrregularRoot {
    pub root: VerbRoot,
    pub stems: Vec<u8>,
    pub stem1: Stem1Pattern,
}

/// Candidate stem-1 patterns and the contexts that tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stem1ContextChoice {
    pub patterns: Vec<Stem1Pattern>,
    pub required_context: Vec<ConjugationParams>,
}

/// Read access to a dialect's metadata.
pub trait DialectMetadata: Send + Sync {
    fn dialect(&self) -> DialectType;

    fn features(&self) -> DialectFeatures;

    /// Effective verb type of a root in a stem.
    fn derive_verb_type(&self, root: &VerbRoot, stem: &Stem) -> VerbType;

    /// Whether the (verb type, stem) pair is attested.
    fn is_conjugatable(&self, verb_type: VerbType, stem: u8) -> bool;

    fn stem1_context_choices(
        &self,
        verb_type: VerbType,
        root: &VerbRoot,
    ) -> Result<Stem1ContextChoice, ConjugationError>;
}

/// Serializable metadata of one dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectTables {
    pub dialect: DialectType,
    pub iso639_code: String,
    pub glotto_code: String,
    #[serde(flatten)]
    pub features: DialectFeatures,
    #[serde(default)]
    pub verb_type_overrides: Vec<VerbTypeOverride>,
    #[serde(default)]
    pub attested_stems: Vec<AttestedStems>,
    #[serde(default)]
    pub stem1_choices: Vec<Stem1ChoiceRow>,
    #[serde(default)]
    pub irregular_roots: Vec<IrregularRoot>,
}

impl DialectTables {
    /// Built-in tables for Modern Standard Arabic.
    pub fn msa() -> Self {
        msa::tables()
    }

    /// Built-in tables for Lebanese Arabic.
    pub fn lebanese() -> Self {
        lebanese::tables()
    }

    pub fn preset(dialect: DialectType) -> Self {
        match dialect {
            DialectType::ModernStandardArabic => Self::msa(),
            DialectType::Lebanese => Self::lebanese(),
        }
    }

    /// Environment variable naming a JSON file that replaces the preset.
    pub fn env_var(dialect: DialectType) -> &'static str {
        match dialect {
            DialectType::ModernStandardArabic => "SARF_MSA_METADATA",
            DialectType::Lebanese => "SARF_LEBANESE_METADATA",
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MetadataError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(MetadataError::from)
    }

    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<(), MetadataError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn from_env_or_default(dialect: DialectType) -> Result<Self, MetadataError> {
        match std::env::var(Self::env_var(dialect)) {
            Ok(path) => {
                let tables = Self::from_path(path)?;
                if tables.dialect != dialect {
                    return Err(MetadataError::DialectMismatch {
                        expected: dialect,
                        found: tables.dialect,
                    });
                }
                Ok(tables)
            }
            Err(_) => Ok(Self::preset(dialect)),
        }
    }

    fn irregular_entry(&self, root: &VerbRoot) -> Option<&IrregularRoot> {
        self.irregular_roots.iter().find(|entry| &entry.root == root)
    }
}

impl DialectMetadata for DialectTables {
    fn dialect(&self) -> DialectType {
        self.dialect
    }

    fn features(&self) -> DialectFeatures {
        self.features
    }

    fn derive_verb_type(&self, root: &VerbRoot, stem: &Stem) -> VerbType {
        let number = stem.number();
        let is_irregular = self
            .irregular_entry(root)
            .map_or(false, |entry| entry.stems.contains(&number));
        let structural = if is_irregular {
            VerbType::Irregular
        } else {
            root.deduced_verb_type()
        };

        let verb_type = self
            .verb_type_overrides
            .iter()
            .find(|o| {
                o.verb_type == structural && (o.stems.is_empty() || o.stems.contains(&number))
            })
            .map_or(structural, |o| o.becomes);
        debug!(%root, stem = number, ?structural, ?verb_type, "derived verb type");
        verb_type
    }

    fn is_conjugatable(&self, verb_type: VerbType, stem: u8) -> bool {
        self.attested_stems
            .iter()
            .any(|row| row.verb_type == verb_type && row.stems.contains(&stem))
    }

    fn stem1_context_choices(
        &self,
        verb_type: VerbType,
        root: &VerbRoot,
    ) -> Result<Stem1ContextChoice, ConjugationError> {
        if verb_type == VerbType::Irregular {
            if let Some(entry) = self.irregular_entry(root) {
                return Ok(Stem1ContextChoice {
                    patterns: vec![entry.stem1],
                    required_context: Vec::new(),
                });
            }
        }

        self.stem1_choices
            .iter()
            .find(|row| row.matches(verb_type, root))
            .map(|row| Stem1ContextChoice {
                patterns: row.patterns.clone(),
                required_context: row.required_context.clone(),
            })
            .ok_or_else(|| ConjugationError::UnhandledCase {
                dialect: self.dialect,
                verb_type,
                stem: 1,
                detail: format!("no stem-1 pattern list for {} ({:?})", root, root.root_type()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(s: &str) -> VerbRoot {
        VerbRoot::parse(s).unwrap()
    }

    fn stem(n: u8) -> Stem {
        Stem::new(n).unwrap()
    }

    #[test]
    fn overrides_regularize_augmented_stems() {
        let msa = DialectTables::msa();
        let waad = root("و-ع-د");
        assert_eq!(msa.derive_verb_type(&waad, &stem(1)), VerbType::Assimilated);
        assert_eq!(msa.derive_verb_type(&waad, &stem(2)), VerbType::Sound);
        assert_eq!(msa.derive_verb_type(&waad, &stem(4)), VerbType::Assimilated);
        let qaal = root("ق-و-ل");
        assert_eq!(msa.derive_verb_type(&qaal, &stem(3)), VerbType::Sound);
        assert_eq!(msa.derive_verb_type(&qaal, &stem(10)), VerbType::Hollow);
    }

    #[test]
    fn irregular_roots_only_in_listed_stems() {
        let msa = DialectTables::msa();
        let hayiya = root("ح-ي-ي");
        assert_eq!(msa.derive_verb_type(&hayiya, &stem(1)), VerbType::Irregular);
        assert_eq!(msa.derive_verb_type(&hayiya, &stem(4)), VerbType::Irregular);
        assert_eq!(msa.derive_verb_type(&hayiya, &stem(10)), VerbType::Defective);
    }

    #[test]
    fn attested_pairs() {
        let msa = DialectTables::msa();
        assert!(msa.is_conjugatable(VerbType::Hollow, 4));
        assert!(!msa.is_conjugatable(VerbType::Hollow, 2));
        assert!(msa.is_conjugatable(VerbType::Sound, 9));
        assert!(!msa.is_conjugatable(VerbType::Defective, 9));
    }

    #[test]
    fn stem1_choices_follow_row_order() {
        let msa = DialectTables::msa();
        let choice = msa
            .stem1_context_choices(VerbType::Assimilated, &root("ي-ء-س"))
            .unwrap();
        assert_eq!(
            choice.patterns,
            vec![
                Stem1Pattern::PastIPresentA,
                Stem1Pattern::PastIPresentI,
                Stem1Pattern::PastUPresentU
            ]
        );
        let hollow = msa
            .stem1_context_choices(VerbType::Hollow, &root("ق-و-ل"))
            .unwrap();
        assert_eq!(hollow.patterns[0], Stem1Pattern::PastUPresentU);
        assert_eq!(hollow.required_context.len(), 2);
        let laysa = msa
            .stem1_context_choices(VerbType::Irregular, &root("ل-ي-س"))
            .unwrap();
        assert_eq!(laysa.patterns, vec![Stem1Pattern::IrregularLaysa]);
    }

    #[test]
    fn feature_flags_flatten_into_json() {
        let json = serde_json::to_value(DialectTables::lebanese()).unwrap();
        assert_eq!(json["has_dual"], serde_json::Value::Bool(false));
        assert_eq!(json["iso639_code"], "apc");
    }
}
