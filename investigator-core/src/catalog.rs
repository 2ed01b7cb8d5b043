//! Reference data consulted by the generator.
//!
//! A [`Catalog`] is immutable once built. It is passed into generation
//! explicitly, so tests can substitute small fixtures and the default
//! data set ([`Catalog::builtin`]) is just one catalog among others.

use crate::attributes::AttributeKind;
use crate::skills::Skill;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Which table a failed lookup went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogKind {
    Skill,
    Archetype,
    Occupation,
    Talent,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CatalogKind::Skill => "skill",
            CatalogKind::Archetype => "archetype",
            CatalogKind::Occupation => "occupation",
            CatalogKind::Talent => "talent",
        };
        write!(f, "{name}")
    }
}

/// Errors from loading or querying a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown {kind}: {name}")]
    UnknownCatalogEntry { kind: CatalogKind, name: String },

    #[error("The {0} catalog is empty")]
    EmptyCatalog(CatalogKind),

    #[error("Archetype {archetype} has no rollable core characteristic in {alternatives:?}")]
    InvalidCoreCharacteristics {
        archetype: String,
        alternatives: Vec<AttributeKind>,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Special rules printed with an archetype. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialRules {
    #[serde(default)]
    pub recommended_talents: Vec<String>,
    #[serde(default)]
    pub required_talents: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// A pulp archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archetype {
    pub name: String,
    /// Skills the archetype bonus pool may be spent on.
    pub skills: Vec<String>,
    pub bonus_points: i32,
    /// One of these is picked per character as the core characteristic.
    pub core_characteristics: Vec<AttributeKind>,
    #[serde(default)]
    pub suggested_occupations: Vec<String>,
    #[serde(default)]
    pub talent_count: usize,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub special_rules: SpecialRules,
}

impl Archetype {
    /// Core alternatives must be non-empty and limited to the eight rolled
    /// characteristics.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let characteristics = AttributeKind::characteristics();
        let valid = !self.core_characteristics.is_empty()
            && self
                .core_characteristics
                .iter()
                .all(|kind| characteristics.contains(kind));
        if valid {
            Ok(())
        } else {
            Err(CatalogError::InvalidCoreCharacteristics {
                archetype: self.name.clone(),
                alternatives: self.core_characteristics.clone(),
            })
        }
    }
}

/// One line of an occupation's skill list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SkillRequirement {
    /// The named skill is always an occupation skill.
    Required { skill: String },
    /// Pick `count` distinct skills from `skills`.
    ChoiceOf { count: usize, skills: Vec<String> },
}

impl SkillRequirement {
    pub fn required(skill: impl Into<String>) -> Self {
        SkillRequirement::Required {
            skill: skill.into(),
        }
    }

    pub fn choice_of(count: usize, skills: &[&str]) -> Self {
        SkillRequirement::ChoiceOf {
            count,
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Inclusive Credit Rating bounds for an occupation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditRatingRange {
    pub min: i32,
    pub max: i32,
}

/// `attribute * multiplier` term of an occupation point formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeMultiplier {
    pub attribute: AttributeKind,
    pub multiplier: i32,
}

impl AttributeMultiplier {
    pub const fn new(attribute: AttributeKind, multiplier: i32) -> Self {
        Self {
            attribute,
            multiplier,
        }
    }
}

/// Occupation skill points: every base term, plus one optional term chosen
/// at random when any are listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillPointFormula {
    pub base: Vec<AttributeMultiplier>,
    #[serde(default)]
    pub options: Vec<AttributeMultiplier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupation {
    pub name: String,
    pub skill_requirements: Vec<SkillRequirement>,
    pub credit_rating: CreditRatingRange,
    pub skill_points: SkillPointFormula,
    #[serde(default)]
    pub suggested_contacts: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TalentCategory {
    Physical,
    Mental,
    Combat,
    Miscellaneous,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talent {
    pub name: String,
    pub description: String,
    pub category: TalentCategory,
}

impl Talent {
    pub fn new(name: impl Into<String>, category: TalentCategory, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category,
        }
    }
}

/// All reference tables, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub skills: BTreeMap<String, Skill>,
    #[serde(default)]
    pub archetypes: BTreeMap<String, Archetype>,
    #[serde(default)]
    pub occupations: BTreeMap<String, Occupation>,
    #[serde(default)]
    pub talents: BTreeMap<String, Talent>,
}

lazy_static::lazy_static! {
    static ref BUILTIN: Catalog = crate::catalog_data::builtin_catalog();
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled default data set.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Parse and validate a catalog.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check every archetype's core characteristics.
    pub fn validate(&self) -> Result<(), CatalogError> {
        self.archetypes.values().try_for_each(Archetype::validate)
    }

    /// Read a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.insert(skill.name.clone(), skill);
        self
    }

    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.archetypes.insert(archetype.name.clone(), archetype);
        self
    }

    pub fn with_occupation(mut self, occupation: Occupation) -> Self {
        self.occupations.insert(occupation.name.clone(), occupation);
        self
    }

    pub fn with_talent(mut self, talent: Talent) -> Self {
        self.talents.insert(talent.name.clone(), talent);
        self
    }

    pub fn skill(&self, name: &str) -> Result<&Skill, CatalogError> {
        self.skills.get(name).ok_or_else(|| unknown(CatalogKind::Skill, name))
    }

    pub fn archetype(&self, name: &str) -> Result<&Archetype, CatalogError> {
        self.archetypes
            .get(name)
            .ok_or_else(|| unknown(CatalogKind::Archetype, name))
    }

    pub fn occupation(&self, name: &str) -> Result<&Occupation, CatalogError> {
        self.occupations
            .get(name)
            .ok_or_else(|| unknown(CatalogKind::Occupation, name))
    }

    pub fn talent(&self, name: &str) -> Result<&Talent, CatalogError> {
        self.talents
            .get(name)
            .ok_or_else(|| unknown(CatalogKind::Talent, name))
    }

    /// Archetype names in catalog order.
    pub fn archetype_names(&self) -> Vec<&str> {
        self.archetypes.keys().map(String::as_str).collect()
    }

    /// Occupation names in catalog order. Random occupation picks index
    /// into this list.
    pub fn occupation_names(&self) -> Vec<&str> {
        self.occupations.keys().map(String::as_str).collect()
    }

    pub fn talent_names(&self) -> Vec<&str> {
        self.talents.keys().map(String::as_str).collect()
    }
}

fn unknown(kind: CatalogKind, name: &str) -> CatalogError {
    CatalogError::UnknownCatalogEntry {
        kind,
        name: name.to_string(),
    }
}
