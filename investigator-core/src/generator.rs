//! The generation entry point.
//!
//! Generation runs in a fixed order so that a seeded generator always
//! produces the same investigator:
//!
//! 1. id, archetype (pulp), core characteristic, talents, occupation
//! 2. characteristics, Luck, derived statistics
//! 3. the era's skill sheet, with family placeholders expanded and the
//!    requested skill names resolved
//! 4. the archetype, occupation and free point pools, in that order

use crate::allocator::SkillPointAllocator;
use crate::attributes::{roll_attribute, roll_luck, Attribute, AttributeKind};
use crate::catalog::{Archetype, Catalog, CatalogError, Occupation};
use crate::config::{GameMode, GeneratorConfig};
use crate::derived::{
    build_and_damage, hit_point_attribute, magic_point_attribute, movement, sanity_attribute,
};
use crate::investigator::{Investigator, InvestigatorId, PoolLedger, SkillUpdateError};
use crate::selection::{
    occupation_skill_names, pick_talents, select_archetype, select_core_characteristic,
    select_occupation,
};
use crate::skills::{
    allocatable_names, era_skills, expand_base_categories, resolve_skill_names, set_fixed_skills,
    CREDIT_RATING,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Errors that abort generation.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Skill update failed: {0}")]
    Skill(#[from] SkillUpdateError),

    #[error("The skill catalog has no {0} skill")]
    MissingSkill(String),

    #[error("{0} was not rolled")]
    MissingAttribute(AttributeKind),
}

/// Generates investigators from a catalog and a configuration.
#[derive(Debug, Clone)]
pub struct InvestigatorGenerator<'a> {
    catalog: &'a Catalog,
    config: GeneratorConfig,
}

impl<'a> InvestigatorGenerator<'a> {
    pub fn new(catalog: &'a Catalog, config: GeneratorConfig) -> Self {
        Self { catalog, config }
    }

    /// Generator over the built-in catalog.
    pub fn builtin(config: GeneratorConfig) -> InvestigatorGenerator<'static> {
        InvestigatorGenerator::new(Catalog::builtin(), config)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Investigator, GenerationError> {
        generate_with_rng(self.catalog, &self.config, rng)
    }

    /// Same seed, catalog and configuration give the same investigator.
    pub fn generate_seeded(&self, seed: u64) -> Result<Investigator, GenerationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}

/// Generate one investigator from the built-in catalog with a freshly
/// seeded generator.
pub fn generate_investigator(mode: GameMode) -> Result<Investigator, GenerationError> {
    let mut rng = ChaCha8Rng::from_entropy();
    generate_with_rng(Catalog::builtin(), &GeneratorConfig::new(mode), &mut rng)
}

/// Generate one investigator, drawing every random value from `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    catalog: &Catalog,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Investigator, GenerationError> {
    let id = InvestigatorId::from_rng(rng);

    let archetype = choose_archetype(catalog, config, rng)?;
    let core = match &archetype {
        Some(archetype) => Some(select_core_characteristic(archetype, rng)?),
        None => None,
    };
    let talents = match &archetype {
        Some(archetype) => pick_talents(catalog, archetype.talent_count, rng)?,
        None => Vec::new(),
    };
    let occupation = choose_occupation(catalog, config, archetype.as_ref(), rng)?;
    log::info!(
        "Generating {} investigator: {} ({})",
        config.mode,
        occupation.name,
        archetype.as_ref().map_or("no archetype", |a| a.name.as_str())
    );

    let mut investigator = Investigator::new(id, config.mode, config.era, occupation);
    investigator.archetype = archetype;
    investigator.core_characteristic = core;
    investigator.talents = talents;

    roll_characteristics(&mut investigator, rng);
    derive_statistics(&mut investigator)?;

    let occupation_requests = occupation_skill_names(&investigator.occupation, rng);
    let (archetype_skills, occupation_skills) =
        build_skill_sheet(catalog, &mut investigator, &occupation_requests, rng)?;

    let allocator = SkillPointAllocator::for_investigator(&investigator, config);

    if let Some(bonus) = investigator.archetype.as_ref().map(|a| a.bonus_points) {
        investigator.archetype_points =
            allocator.assign(&mut investigator, bonus, &archetype_skills, rng)?;
    }

    let occupation_pool = occupation_skill_points(&investigator, &investigator.occupation, rng)?;
    investigator.occupation_points =
        allocator.assign(&mut investigator, occupation_pool, &occupation_skills, rng)?;

    let free_pool = attribute_value(&investigator, AttributeKind::Intelligence)? * 2;
    let free_skills = allocatable_names(investigator.skills());
    investigator.free_points = allocator.assign(&mut investigator, free_pool, &free_skills, rng)?;

    log_pools(&investigator);
    Ok(investigator)
}

fn choose_archetype<R: Rng + ?Sized>(
    catalog: &Catalog,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Option<Archetype>, CatalogError> {
    if !config.mode.is_pulp() {
        return Ok(None);
    }
    let archetype = match &config.archetype {
        Some(name) => catalog.archetype(name)?,
        None => select_archetype(catalog, rng)?,
    };
    Ok(Some(archetype.clone()))
}

fn choose_occupation<R: Rng + ?Sized>(
    catalog: &Catalog,
    config: &GeneratorConfig,
    archetype: Option<&Archetype>,
    rng: &mut R,
) -> Result<Occupation, CatalogError> {
    let occupation = match &config.occupation {
        Some(name) => catalog.occupation(name)?,
        None => select_occupation(catalog, archetype, rng)?,
    };
    Ok(occupation.clone())
}

/// Roll the eight characteristics and Luck. The investigator's core
/// characteristic, if set, gets the core roll.
pub fn roll_characteristics<R: Rng + ?Sized>(investigator: &mut Investigator, rng: &mut R) {
    for kind in AttributeKind::characteristics() {
        let is_core = investigator.core_characteristic == Some(kind);
        let attribute = Attribute::rolled(kind, roll_attribute(kind, is_core, rng));
        let attribute = if is_core { attribute.as_core() } else { attribute };
        investigator.set_attribute(kind, attribute);
    }
    investigator.set_attribute(
        AttributeKind::Luck,
        Attribute::rolled(AttributeKind::Luck, roll_luck(rng)),
    );
}

/// Fill in hit points, sanity, magic points, movement, build and damage
/// bonus from the rolled characteristics.
pub fn derive_statistics(investigator: &mut Investigator) -> Result<(), GenerationError> {
    let strength = attribute_value(investigator, AttributeKind::Strength)?;
    let constitution = attribute_value(investigator, AttributeKind::Constitution)?;
    let dexterity = attribute_value(investigator, AttributeKind::Dexterity)?;
    let size = attribute_value(investigator, AttributeKind::Size)?;
    let power = attribute_value(investigator, AttributeKind::Power)?;

    investigator.set_attribute(
        AttributeKind::HitPoints,
        hit_point_attribute(constitution, size, investigator.mode),
    );
    investigator.set_attribute(AttributeKind::Sanity, sanity_attribute(power));
    investigator.set_attribute(AttributeKind::MagicPoints, magic_point_attribute(power));

    investigator.movement = movement(dexterity, strength, size);
    let build = build_and_damage(strength + size);
    investigator.build = build.build;
    investigator.damage_bonus = build.damage_bonus;
    Ok(())
}

/// Put the era's skills on the sheet and resolve the archetype and
/// occupation skill names against it.
///
/// Returns the concrete archetype and occupation candidate lists.
pub fn build_skill_sheet<R: Rng + ?Sized>(
    catalog: &Catalog,
    investigator: &mut Investigator,
    occupation_requests: &[String],
    rng: &mut R,
) -> Result<(Vec<String>, Vec<String>), GenerationError> {
    let dexterity = attribute_value(investigator, AttributeKind::Dexterity)?;
    let education = attribute_value(investigator, AttributeKind::Education)?;

    let mut skills = era_skills(&catalog.skills, investigator.era);
    if !skills.contains_key(CREDIT_RATING) {
        return Err(GenerationError::MissingSkill(CREDIT_RATING.to_string()));
    }
    expand_base_categories(&mut skills);
    // Written before resolution so "Dodge" and "Language(Own)" requests
    // resolve to these entries.
    set_fixed_skills(&mut skills, dexterity, education);

    let archetype_skills = match &investigator.archetype {
        Some(archetype) => resolve_skill_names(&mut skills, &archetype.skills, rng),
        None => Vec::new(),
    };
    let occupation_skills = resolve_skill_names(&mut skills, occupation_requests, rng);

    *investigator.skills_mut() = skills;
    Ok((archetype_skills, occupation_skills))
}

/// Occupation pool: every base term of the formula plus one random option.
pub fn occupation_skill_points<R: Rng + ?Sized>(
    investigator: &Investigator,
    occupation: &Occupation,
    rng: &mut R,
) -> Result<i32, GenerationError> {
    let formula = &occupation.skill_points;
    let mut points = 0;
    for term in formula.base.iter().chain(formula.options.choose(rng)) {
        points += attribute_value(investigator, term.attribute)? * term.multiplier;
    }
    Ok(points)
}

fn attribute_value(investigator: &Investigator, kind: AttributeKind) -> Result<i32, GenerationError> {
    investigator
        .attribute_value(kind)
        .ok_or(GenerationError::MissingAttribute(kind))
}

fn log_pools(investigator: &Investigator) {
    let pools: [(&str, &PoolLedger); 3] = [
        ("archetype", &investigator.archetype_points),
        ("occupation", &investigator.occupation_points),
        ("free", &investigator.free_points),
    ];
    for (name, ledger) in pools {
        log::info!(
            "{name} pool: {} granted, {} unassigned ({:?})",
            ledger.granted,
            ledger.unassigned,
            ledger.status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogKind;
    use crate::skills::{CTHULHU_MYTHOS, DODGE, OWN_LANGUAGE};
    use crate::testing::{assert_investigator_valid, fixture_catalog};

    #[test]
    fn test_classic_has_no_archetype() {
        let generator = InvestigatorGenerator::builtin(GeneratorConfig::classic());
        let investigator = generator.generate_seeded(11).unwrap();

        assert!(investigator.archetype.is_none());
        assert!(investigator.core_characteristic.is_none());
        assert!(investigator.talents.is_empty());
        assert_eq!(investigator.archetype_points, PoolLedger::default());
        assert!(investigator.attributes().values().all(|a| !a.core));
        assert_investigator_valid(&investigator);
    }

    #[test]
    fn test_pulp_has_core_and_talents() {
        let generator = InvestigatorGenerator::builtin(GeneratorConfig::pulp());
        let investigator = generator.generate_seeded(12).unwrap();

        let archetype = investigator.archetype.as_ref().unwrap();
        let core = investigator.core_characteristic.unwrap();
        assert!(archetype.core_characteristics.contains(&core));
        assert_eq!(investigator.talents.len(), archetype.talent_count);
        assert_eq!(investigator.archetype_points.granted, archetype.bonus_points);
        assert_investigator_valid(&investigator);
    }

    #[test]
    fn test_fixed_occupation_and_archetype() {
        let config = GeneratorConfig::pulp()
            .with_archetype("Egghead")
            .with_occupation("Librarian");
        let investigator = InvestigatorGenerator::builtin(config).generate_seeded(3).unwrap();

        assert_eq!(investigator.archetype.as_ref().unwrap().name, "Egghead");
        assert_eq!(investigator.occupation.name, "Librarian");
    }

    #[test]
    fn test_archetype_ignored_in_classic() {
        let config = GeneratorConfig::classic().with_archetype("Egghead");
        let investigator = InvestigatorGenerator::builtin(config).generate_seeded(3).unwrap();
        assert!(investigator.archetype.is_none());
    }

    #[test]
    fn test_unknown_occupation_fails() {
        let config = GeneratorConfig::classic().with_occupation("Astronaut");
        let err = InvestigatorGenerator::builtin(config)
            .generate_seeded(3)
            .unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Catalog(CatalogError::UnknownCatalogEntry {
                kind: CatalogKind::Occupation,
                ..
            })
        ));
    }

    #[test]
    fn test_missing_credit_rating_fails() {
        let mut catalog = fixture_catalog();
        catalog.skills.remove(CREDIT_RATING);
        let err = InvestigatorGenerator::new(&catalog, GeneratorConfig::classic())
            .generate_seeded(3)
            .unwrap_err();
        assert!(matches!(err, GenerationError::MissingSkill(name) if name == CREDIT_RATING));
    }

    #[test]
    fn test_fixed_skills_follow_characteristics() {
        let investigator = InvestigatorGenerator::builtin(GeneratorConfig::classic())
            .generate_seeded(21)
            .unwrap();
        let dex = investigator.attribute_value(AttributeKind::Dexterity).unwrap();
        let edu = investigator.attribute_value(AttributeKind::Education).unwrap();

        assert_eq!(investigator.skill(DODGE).unwrap().default, dex / 2);
        assert_eq!(investigator.skill(OWN_LANGUAGE).unwrap().default, edu);
        assert_eq!(investigator.skill_value(CTHULHU_MYTHOS), Some(0));
    }

    #[test]
    fn test_occupation_points_use_formula() {
        let investigator = InvestigatorGenerator::builtin(
            GeneratorConfig::classic().with_occupation("Professor"),
        )
        .generate_seeded(5)
        .unwrap();
        let edu = investigator.attribute_value(AttributeKind::Education).unwrap();
        assert_eq!(investigator.occupation_points.granted, edu * 4);

        let int = investigator.attribute_value(AttributeKind::Intelligence).unwrap();
        assert_eq!(investigator.free_points.granted, int * 2);
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let generator = InvestigatorGenerator::builtin(GeneratorConfig::pulp());
        let a = generator.generate_seeded(99).unwrap().to_json().unwrap();
        let b = generator.generate_seeded(99).unwrap().to_json().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pulp_rejects_archetype_without_rollable_core() {
        for alternatives in [Vec::new(), vec![AttributeKind::Luck]] {
            let mut catalog = fixture_catalog();
            if let Some(scholar) = catalog.archetypes.get_mut("Scholar") {
                scholar.core_characteristics = alternatives;
            }
            let err = InvestigatorGenerator::new(&catalog, GeneratorConfig::pulp())
                .generate_seeded(1)
                .unwrap_err();
            assert!(matches!(
                err,
                GenerationError::Catalog(CatalogError::InvalidCoreCharacteristics { ref archetype, .. })
                    if archetype == "Scholar"
            ));
        }
    }

    #[test]
    fn test_fixture_catalog_generates() {
        let catalog = fixture_catalog();
        for mode in [GameMode::Classic, GameMode::Pulp] {
            let investigator = InvestigatorGenerator::new(&catalog, GeneratorConfig::new(mode))
                .generate_seeded(7)
                .unwrap();
            assert_investigator_valid(&investigator);
        }
    }
}
