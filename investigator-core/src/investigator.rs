//! The investigator aggregate produced by generation.

use crate::attributes::{Attribute, AttributeKind};
use crate::catalog::{Archetype, Occupation, Talent};
use crate::config::GameMode;
use crate::skills::{Era, Skill, SkillMap};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for investigators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvestigatorId(pub Uuid);

impl InvestigatorId {
    /// A version 4 id built from the caller's generator, so seeded runs
    /// produce the same id.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bytes: [u8; 16] = rng.gen();
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl fmt::Display for InvestigatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from writing to a skill.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkillUpdateError {
    #[error("No skill named {0} on this sheet")]
    UnknownSkill(String),

    #[error("{skill} would reach {value}, above its cap of {cap}")]
    ExceedsCap { skill: String, value: i32, cap: i32 },
}

/// How a point pool ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PoolStatus {
    /// Everything was placed (or the pool was overdrawn by the Credit
    /// Rating minimum).
    #[default]
    Spent,
    /// Every candidate skill was at its cap, so the rest stayed unassigned.
    Saturated,
}

/// Bookkeeping for one of the three point pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PoolLedger {
    pub granted: i32,
    /// Left for the player to spend. Negative when the Credit Rating
    /// minimum cost more than the pool held.
    pub unassigned: i32,
    pub status: PoolStatus,
}

impl PoolLedger {
    /// Points that actually landed on skills.
    pub fn assigned(&self) -> i32 {
        self.granted - self.unassigned
    }
}

/// A generated investigator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investigator {
    pub id: InvestigatorId,
    pub mode: GameMode,
    pub era: Era,
    attributes: BTreeMap<AttributeKind, Attribute>,
    skills: SkillMap,
    pub archetype: Option<Archetype>,
    pub occupation: Occupation,
    /// The pulp core characteristic, if any.
    pub core_characteristic: Option<AttributeKind>,
    pub talents: Vec<Talent>,
    pub movement: i32,
    pub build: String,
    pub damage_bonus: String,
    pub archetype_points: PoolLedger,
    pub occupation_points: PoolLedger,
    pub free_points: PoolLedger,
}

impl Investigator {
    pub fn new(id: InvestigatorId, mode: GameMode, era: Era, occupation: Occupation) -> Self {
        Self {
            id,
            mode,
            era,
            attributes: BTreeMap::new(),
            skills: SkillMap::new(),
            archetype: None,
            occupation,
            core_characteristic: None,
            talents: Vec::new(),
            movement: 0,
            build: String::new(),
            damage_bonus: String::new(),
            archetype_points: PoolLedger::default(),
            occupation_points: PoolLedger::default(),
            free_points: PoolLedger::default(),
        }
    }

    pub fn attributes(&self) -> &BTreeMap<AttributeKind, Attribute> {
        &self.attributes
    }

    pub fn attribute(&self, kind: AttributeKind) -> Option<&Attribute> {
        self.attributes.get(&kind)
    }

    pub fn attribute_value(&self, kind: AttributeKind) -> Option<i32> {
        self.attribute(kind).map(|a| a.value)
    }

    pub(crate) fn set_attribute(&mut self, kind: AttributeKind, attribute: Attribute) {
        self.attributes.insert(kind, attribute);
    }

    pub fn skills(&self) -> &SkillMap {
        &self.skills
    }

    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.get(name)
    }

    pub fn skill_value(&self, name: &str) -> Option<i32> {
        self.skill(name).map(|s| s.value)
    }

    pub(crate) fn skills_mut(&mut self) -> &mut SkillMap {
        &mut self.skills
    }

    /// Add `amount` to a skill, refusing to cross `cap`.
    ///
    /// Returns the new value.
    pub fn raise_skill(&mut self, name: &str, amount: i32, cap: i32) -> Result<i32, SkillUpdateError> {
        let skill = self
            .skills
            .get_mut(name)
            .ok_or_else(|| SkillUpdateError::UnknownSkill(name.to_string()))?;

        let value = skill.value + amount;
        if value > cap {
            return Err(SkillUpdateError::ExceedsCap {
                skill: name.to_string(),
                value,
                cap,
            });
        }
        skill.value = value;
        Ok(value)
    }

    /// Sum of every skill value on the sheet.
    pub fn total_skill_value(&self) -> i32 {
        self.skills.values().map(|s| s.value).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Investigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} investigator ({})", self.mode, self.occupation.name)?;
        if let Some(archetype) = &self.archetype {
            write!(f, ", {}", archetype.name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CreditRatingRange, SkillPointFormula};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn blank() -> Investigator {
        let occupation = Occupation {
            name: "Clerk".to_string(),
            skill_requirements: Vec::new(),
            credit_rating: CreditRatingRange { min: 5, max: 20 },
            skill_points: SkillPointFormula::default(),
            suggested_contacts: String::new(),
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut investigator = Investigator::new(
            InvestigatorId::from_rng(&mut rng),
            GameMode::Classic,
            Era::Modern,
            occupation,
        );
        investigator
            .skills_mut()
            .insert("Climb".to_string(), Skill::new("Climb", "Climb", 20));
        investigator
    }

    #[test]
    fn test_raise_skill_respects_cap() {
        let mut investigator = blank();
        assert_eq!(investigator.raise_skill("Climb", 60, 90), Ok(80));
        assert_eq!(
            investigator.raise_skill("Climb", 11, 90),
            Err(SkillUpdateError::ExceedsCap {
                skill: "Climb".to_string(),
                value: 91,
                cap: 90
            })
        );
        assert_eq!(investigator.skill_value("Climb"), Some(80));
    }

    #[test]
    fn test_raise_unknown_skill() {
        let mut investigator = blank();
        assert_eq!(
            investigator.raise_skill("Swim", 5, 90),
            Err(SkillUpdateError::UnknownSkill("Swim".to_string()))
        );
    }

    #[test]
    fn test_id_is_seeded() {
        let a = InvestigatorId::from_rng(&mut ChaCha8Rng::seed_from_u64(9));
        let b = InvestigatorId::from_rng(&mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
        assert_eq!(a.0.get_version_num(), 4);
    }

    #[test]
    fn test_ledger_assigned() {
        let ledger = PoolLedger {
            granted: 300,
            unassigned: 40,
            status: PoolStatus::Spent,
        };
        assert_eq!(ledger.assigned(), 260);
    }
}
