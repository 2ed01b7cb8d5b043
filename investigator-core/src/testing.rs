//! Testing utilities for investigator generation.
//!
//! This module provides:
//! - `fixture_catalog` - a small catalog with one entry of each kind
//! - Assertion helpers for checking a generated investigator

use crate::attributes::{AttributeKind, CORE_ROLL};
use crate::catalog::{
    Archetype, AttributeMultiplier, Catalog, CreditRatingRange, Occupation, SkillPointFormula,
    SkillRequirement, SpecialRules, Talent, TalentCategory,
};
use crate::derived::hit_points;
use crate::investigator::Investigator;
use crate::skills::{Skill, CREDIT_RATING, CTHULHU_MYTHOS};

/// A minimal catalog: a handful of skills, one archetype, one occupation
/// ("Clerk") and three talents.
pub fn fixture_catalog() -> Catalog {
    let archetype = Archetype {
        name: "Scholar".to_string(),
        skills: vec![
            "Library Use".to_string(),
            "Science(Any)".to_string(),
            "Language(Latin)".to_string(),
        ],
        bonus_points: 100,
        core_characteristics: vec![AttributeKind::Intelligence, AttributeKind::Education],
        suggested_occupations: vec!["Clerk".to_string()],
        talent_count: 1,
        description: "Knows a little about everything.".to_string(),
        special_rules: SpecialRules::default(),
    };

    let occupation = Occupation {
        name: "Clerk".to_string(),
        skill_requirements: vec![
            SkillRequirement::required("Accounting"),
            SkillRequirement::required("Law"),
            SkillRequirement::choice_of(1, &["Charm", "Persuade"]),
            SkillRequirement::required("Science(Chemistry)"),
        ],
        credit_rating: CreditRatingRange { min: 10, max: 40 },
        skill_points: SkillPointFormula {
            base: vec![AttributeMultiplier::new(AttributeKind::Education, 2)],
            options: vec![
                AttributeMultiplier::new(AttributeKind::Dexterity, 2),
                AttributeMultiplier::new(AttributeKind::Appearance, 2),
            ],
        },
        suggested_contacts: "office staff".to_string(),
    };

    Catalog::new()
        .with_skill(Skill::new("Accounting", "Accounting", 5))
        .with_skill(Skill::new("Charm", "Charm", 15))
        .with_skill(Skill::new("Climb", "Climb", 20))
        .with_skill(Skill::new(CREDIT_RATING, "CreditRating", 0))
        .with_skill(Skill::new(CTHULHU_MYTHOS, "CthulhuMythos", 0))
        .with_skill(Skill::base("Language", "Language", 1))
        .with_skill(Skill::new("Law", "Law", 5))
        .with_skill(Skill::new("Library Use", "LibraryUse", 20))
        .with_skill(Skill::new("Persuade", "Persuade", 10))
        .with_skill(Skill::base("Science", "Science", 1))
        .with_skill(Skill::new("Spot Hidden", "SpotHidden", 25))
        .with_archetype(archetype)
        .with_occupation(occupation)
        .with_talent(Talent::new("Keen Vision", TalentCategory::Physical, "Bonus die to Spot Hidden"))
        .with_talent(Talent::new("Quick Healer", TalentCategory::Physical, "Heal faster"))
        .with_talent(Talent::new("Iron Liver", TalentCategory::Physical, "Hold your drink"))
}

/// No skill above its cap, and Cthulhu Mythos untouched.
pub fn assert_skill_caps(investigator: &Investigator) {
    let limit = investigator.mode.skill_limit();
    for skill in investigator.skills().values() {
        assert!(
            skill.value <= limit.max(skill.default),
            "{} is {}, above the limit of {}",
            skill.name,
            skill.value,
            limit
        );
    }

    let credit_cap = limit.min(investigator.occupation.credit_rating.max);
    if let Some(credit) = investigator.skill_value(CREDIT_RATING) {
        assert!(credit <= credit_cap, "Credit Rating {credit} above {credit_cap}");
    }

    assert_eq!(investigator.skill_value(CTHULHU_MYTHOS).unwrap_or(0), 0);
}

/// Every point that left the three pools landed on a skill.
///
/// Skills start at their default value, so the total raise over defaults
/// must equal what the three ledgers report as assigned.
pub fn assert_pools_conserved(investigator: &Investigator) {
    let raised: i32 = investigator
        .skills()
        .values()
        .map(|skill| skill.value - skill.default)
        .sum();
    let assigned = investigator.archetype_points.assigned()
        + investigator.occupation_points.assigned()
        + investigator.free_points.assigned();
    assert_eq!(raised, assigned, "skills raised by {raised}, ledgers report {assigned}");
}

/// Hit points match the mode's formula.
pub fn assert_hit_points(investigator: &Investigator) {
    let value = |kind| {
        investigator
            .attribute_value(kind)
            .unwrap_or_else(|| panic!("{kind} missing"))
    };
    let expected = hit_points(
        value(AttributeKind::Constitution),
        value(AttributeKind::Size),
        investigator.mode,
    );
    assert_eq!(value(AttributeKind::HitPoints), expected);
}

/// Pulp: exactly one core characteristic, rolled on the core formula.
/// Classic: none.
pub fn assert_core_characteristic(investigator: &Investigator) {
    let flagged: Vec<_> = investigator
        .attributes()
        .iter()
        .filter(|(_, attribute)| attribute.core)
        .collect();

    match &investigator.archetype {
        Some(archetype) => {
            assert_eq!(flagged.len(), 1, "expected one core characteristic");
            let (kind, attribute) = flagged[0];
            assert!(archetype.core_characteristics.contains(kind));
            assert_eq!(attribute.value % 5, 0);
            assert!((CORE_ROLL.min()..=CORE_ROLL.max()).contains(&attribute.value));
        }
        None => assert!(flagged.is_empty(), "classic investigators have no core"),
    }
}

/// Run every check above, plus the rolled-attribute invariant.
pub fn assert_investigator_valid(investigator: &Investigator) {
    for kind in AttributeKind::characteristics() {
        let attribute = investigator
            .attribute(kind)
            .unwrap_or_else(|| panic!("{kind} missing"));
        assert_eq!(attribute.value, attribute.starting_value);
    }
    assert_skill_caps(investigator);
    assert_pools_conserved(investigator);
    assert_hit_points(investigator);
    assert_core_characteristic(investigator);
}
