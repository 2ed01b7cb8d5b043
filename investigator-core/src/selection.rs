//! Archetype, occupation and talent selection.

use crate::attributes::AttributeKind;
use crate::catalog::{Archetype, Catalog, CatalogError, CatalogKind, Occupation, SkillRequirement, Talent};
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Pick an archetype uniformly from the whole catalog.
pub fn select_archetype<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    rng: &mut R,
) -> Result<&'a Archetype, CatalogError> {
    let archetypes: Vec<&Archetype> = catalog.archetypes.values().collect();
    archetypes
        .choose(rng)
        .copied()
        .ok_or(CatalogError::EmptyCatalog(CatalogKind::Archetype))
}

/// Pick the core characteristic among the archetype's alternatives.
///
/// Fails when the archetype offers no rolled characteristic to pick.
pub fn select_core_characteristic<R: Rng + ?Sized>(
    archetype: &Archetype,
    rng: &mut R,
) -> Result<AttributeKind, CatalogError> {
    archetype.validate()?;
    archetype
        .core_characteristics
        .choose(rng)
        .copied()
        .ok_or_else(|| CatalogError::InvalidCoreCharacteristics {
            archetype: archetype.name.clone(),
            alternatives: Vec::new(),
        })
}

/// Pick an occupation.
///
/// With an archetype that suggests occupations, the index is drawn over the
/// length of the suggestion list but applied to the full occupation list, so
/// the result is not necessarily one of the suggestions. An index past the
/// end of the occupation list wraps around.
pub fn select_occupation<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    archetype: Option<&Archetype>,
    rng: &mut R,
) -> Result<&'a Occupation, CatalogError> {
    let occupations: Vec<&Occupation> = catalog.occupations.values().collect();
    if occupations.is_empty() {
        return Err(CatalogError::EmptyCatalog(CatalogKind::Occupation));
    }

    let bound = match archetype {
        Some(archetype) if !archetype.suggested_occupations.is_empty() => {
            archetype.suggested_occupations.len()
        }
        _ => occupations.len(),
    };
    let index = rng.gen_range(0..bound) % occupations.len();
    Ok(occupations[index])
}

/// Flatten an occupation's requirements into skill names, in order.
///
/// Each choice group contributes `count` distinct candidates, or all of them
/// when it lists fewer.
pub fn occupation_skill_names<R: Rng + ?Sized>(occupation: &Occupation, rng: &mut R) -> Vec<String> {
    let mut names = Vec::new();
    for requirement in &occupation.skill_requirements {
        match requirement {
            SkillRequirement::Required { skill } => names.push(skill.clone()),
            SkillRequirement::ChoiceOf { count, skills } => {
                let amount = (*count).min(skills.len());
                names.extend(
                    index::sample(rng, skills.len(), amount)
                        .into_iter()
                        .map(|i| skills[i].clone()),
                );
            }
        }
    }
    names
}

/// Draw `count` talents, without repeats until every talent has been used.
pub fn pick_talents<R: Rng + ?Sized>(
    catalog: &Catalog,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Talent>, CatalogError> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let talents: Vec<&Talent> = catalog.talents.values().collect();
    if talents.is_empty() {
        return Err(CatalogError::EmptyCatalog(CatalogKind::Talent));
    }

    let mut picked = Vec::with_capacity(count);
    while picked.len() < count {
        let amount = (count - picked.len()).min(talents.len());
        picked.extend(
            index::sample(rng, talents.len(), amount)
                .into_iter()
                .map(|i| talents[i].clone()),
        );
    }
    Ok(picked)
}
