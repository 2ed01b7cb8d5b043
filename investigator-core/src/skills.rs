//! Skill records and the skill catalog resolver.
//!
//! Occupations and archetypes name their skills loosely: a family with a
//! specialization (`Art/Craft(Acting)`), a family with no specialization
//! (`Fighting`), or a name that is not in the catalog at all. The resolver
//! turns each requested name into a concrete, spendable skill on the sheet,
//! synthesizing entries where the catalog has none.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// The skill whose range is set by the occupation.
pub const CREDIT_RATING: &str = "Credit Rating";
/// Never receives generated points.
pub const CTHULHU_MYTHOS: &str = "Cthulhu Mythos";
pub const DODGE: &str = "Dodge";
/// Mirror of Dodge for the second sheet field. Not spendable.
pub const DODGE_COPY: &str = "Dodge_Copy";
pub const OWN_LANGUAGE: &str = "Language(Own)";

/// Specialization used when a family is requested without one.
pub const ANY_SPECIALIZATION: &str = "Any";
/// Form-name stem for skills that have no catalog template.
pub const CUSTOM_FORM_STEM: &str = "Custom";
/// Default and starting value for skills that have no catalog template.
pub const CUSTOM_SKILL_DEFAULT: i32 = 1;

/// Skills on an investigator sheet, keyed by name.
pub type SkillMap = BTreeMap<String, Skill>;

/// Campaign era. Some skills exist only in one era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Era {
    Twenties,
    #[default]
    Modern,
}

impl Era {
    pub fn all() -> BTreeSet<Era> {
        [Era::Twenties, Era::Modern].into_iter().collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Era::Twenties => "1920s",
            Era::Modern => "Modern",
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A skill, either as a catalog template or as an entry on a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub abbreviation: String,
    /// Sheet field this skill is written to.
    pub form_name: String,
    pub default: i32,
    #[serde(default)]
    pub value: i32,
    pub eras: BTreeSet<Era>,
    /// Placeholder for a whole family (e.g. "Art/Craft"). Never spent on.
    #[serde(default)]
    pub base_category: bool,
    #[serde(default)]
    pub category: String,
    /// The sheet must print the skill name next to its field.
    #[serde(default)]
    pub needs_form_name: bool,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub priority: bool,
}

impl Skill {
    /// An ordinary skill available in every era.
    pub fn new(name: impl Into<String>, form_name: impl Into<String>, default: i32) -> Self {
        let name = name.into();
        Self {
            abbreviation: name.clone(),
            name,
            form_name: form_name.into(),
            default,
            value: default,
            eras: Era::all(),
            base_category: false,
            category: String::new(),
            needs_form_name: false,
            selected: false,
            priority: false,
        }
    }

    /// A family placeholder such as "Language" or "Science".
    pub fn base(name: impl Into<String>, form_name: impl Into<String>, default: i32) -> Self {
        let skill = Self::new(name, form_name, default);
        let category = skill.name.clone();
        Self {
            base_category: true,
            category,
            ..skill
        }
    }

    /// A named specialization of a family, e.g. `Fighting(Brawl)`.
    pub fn specialized(
        category: impl Into<String>,
        specialization: &str,
        form_name: impl Into<String>,
        default: i32,
    ) -> Self {
        let category = category.into();
        let skill = Self::new(format!("{category}({specialization})"), form_name, default);
        Self { category, ..skill }
    }

    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = abbreviation.into();
        self
    }

    pub fn only_in(mut self, era: Era) -> Self {
        self.eras = [era].into_iter().collect();
        self
    }

    pub fn available_in(&self, era: Era) -> bool {
        self.eras.contains(&era)
    }

    /// Whether the allocator may ever spend points on this skill.
    pub fn is_allocatable(&self) -> bool {
        !self.base_category && self.name != CTHULHU_MYTHOS && self.name != DODGE_COPY
    }

    /// Copy a family placeholder into a concrete skill.
    fn from_template(template: &Skill, name: &str, category: &str, form_name: String) -> Self {
        Self {
            name: name.to_string(),
            abbreviation: name.to_string(),
            form_name,
            default: template.default,
            value: template.value,
            eras: template.eras.clone(),
            base_category: false,
            category: category.to_string(),
            needs_form_name: true,
            selected: false,
            priority: false,
        }
    }

    fn custom(name: &str, category: &str, form_name: String) -> Self {
        Self {
            category: category.to_string(),
            needs_form_name: true,
            form_name,
            ..Skill::new(name, String::new(), CUSTOM_SKILL_DEFAULT)
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Collapse the space some catalogs put before a specialization:
/// `"Fighting (Brawl)"` becomes `"Fighting(Brawl)"`.
pub fn normalize_skill_name(name: &str) -> String {
    match name.split_once('(') {
        Some((family, rest)) => format!("{}({}", family.trim(), rest.trim()),
        None => name.trim().to_string(),
    }
}

/// Split `"Category(Specific)"` into its family and specialization.
pub fn split_specialization(name: &str) -> Option<(&str, &str)> {
    let (family, rest) = name.split_once('(')?;
    let specific = rest.strip_suffix(')').unwrap_or(rest);
    Some((family.trim(), specific.trim()))
}

/// Catalog skills valid in `era`, each starting at its default value.
pub fn era_skills(catalog: &BTreeMap<String, Skill>, era: Era) -> SkillMap {
    catalog
        .values()
        .filter(|skill| skill.available_in(era))
        .map(|skill| {
            let mut skill = skill.clone();
            skill.value = skill.default;
            (skill.name.clone(), skill)
        })
        .collect()
}

/// Give every family placeholder a concrete `"Family(Any)"` entry.
pub fn expand_base_categories(skills: &mut SkillMap) {
    let templates: Vec<Skill> = skills
        .values()
        .filter(|skill| skill.base_category)
        .cloned()
        .collect();

    for template in templates {
        let name = format!("{}({ANY_SPECIALIZATION})", template.name);
        if skills.contains_key(&name) {
            continue;
        }
        let form_name = next_form_name(skills, &template.form_name);
        let skill = Skill::from_template(&template, &name, &template.category, form_name);
        log::debug!("Expanded {} into {}", template.name, name);
        skills.insert(name, skill);
    }
}

/// Resolve each requested name to a concrete skill on the sheet.
///
/// Returns the concrete names in request order. Unknown names never fail:
/// they are synthesized from a family template or as custom skills.
pub fn resolve_skill_names<R: Rng + ?Sized>(
    skills: &mut SkillMap,
    requested: &[String],
    rng: &mut R,
) -> Vec<String> {
    requested
        .iter()
        .map(|name| resolve_skill_name(skills, name, rng))
        .collect()
}

/// Resolve a single requested name. See [`resolve_skill_names`].
pub fn resolve_skill_name<R: Rng + ?Sized>(skills: &mut SkillMap, requested: &str, rng: &mut R) -> String {
    let name = normalize_skill_name(requested);

    if skills.get(&name).is_some_and(|skill| !skill.base_category) {
        return name;
    }

    match split_specialization(&name) {
        Some((family, _)) => resolve_specialized(skills, &name, family, rng),
        None => resolve_family(skills, &name),
    }
}

fn resolve_specialized<R: Rng + ?Sized>(
    skills: &mut SkillMap,
    name: &str,
    family: &str,
    rng: &mut R,
) -> String {
    let siblings: Vec<String> = skills
        .values()
        .filter(|skill| skill.category == family && !skill.base_category)
        .map(|skill| skill.name.clone())
        .collect();

    if let Some(picked) = siblings.choose(rng) {
        return picked.clone();
    }

    let template = skills
        .get(family)
        .filter(|skill| skill.base_category)
        .cloned();

    let skill = match template {
        Some(template) => {
            let form_name = next_form_name(skills, &template.form_name);
            Skill::from_template(&template, name, family, form_name)
        }
        None => Skill::custom(name, family, next_form_name(skills, CUSTOM_FORM_STEM)),
    };
    log::debug!("Synthesized skill {} ({})", name, skill.form_name);
    skills.insert(name.to_string(), skill);
    name.to_string()
}

fn resolve_family(skills: &mut SkillMap, name: &str) -> String {
    let matches: Vec<Skill> = skills
        .values()
        .filter(|skill| skill.name.starts_with(name))
        .cloned()
        .collect();

    if matches.is_empty() {
        let skill = Skill::custom(name, "", next_form_name(skills, CUSTOM_FORM_STEM));
        log::debug!("Synthesized custom skill {} ({})", name, skill.form_name);
        skills.insert(name.to_string(), skill);
        return name.to_string();
    }

    match matches.iter().find(|skill| skill.base_category) {
        Some(template) => {
            let any = format!("{name}({ANY_SPECIALIZATION})");
            if !skills.contains_key(&any) {
                let form_name = next_form_name(skills, &template.form_name);
                let skill = Skill::from_template(template, &any, &template.category, form_name);
                log::debug!("Synthesized skill {} ({})", any, skill.form_name);
                skills.insert(any.clone(), skill);
            }
            any
        }
        None => matches[0].name.clone(),
    }
}

/// Next free form name for `stem`: the stem with its numeric suffix stripped,
/// followed by one more than the highest suffix already in use.
pub fn next_form_name(skills: &SkillMap, stem: &str) -> String {
    let stem = stem.trim_end_matches(|c: char| c.is_ascii_digit());
    let highest = skills
        .values()
        .filter_map(|skill| skill.form_name.strip_prefix(stem))
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{stem}{}", highest + 1)
}

/// Write the skills derived straight from characteristics: Dodge (and its
/// mirror) at half Dexterity, own language at Education.
pub fn set_fixed_skills(skills: &mut SkillMap, dexterity: i32, education: i32) {
    let dodge = dexterity / 2;
    skills.insert(DODGE.to_string(), Skill::new(DODGE, DODGE, dodge));
    skills.insert(
        DODGE_COPY.to_string(),
        Skill::new(DODGE_COPY, DODGE_COPY, dodge).with_abbreviation(DODGE),
    );
    skills.insert(
        OWN_LANGUAGE.to_string(),
        Skill::new(OWN_LANGUAGE, "OwnLanguage", education),
    );
}

/// Every name the free pool may draw from.
pub fn allocatable_names(skills: &SkillMap) -> Vec<String> {
    skills
        .values()
        .filter(|skill| skill.is_allocatable())
        .map(|skill| skill.name.clone())
        .collect()
}
