//! Investigator generation for Cthulhu-mythos style games.
//!
//! This crate provides:
//! - Characteristic rolls with the pulp core-characteristic roll
//! - Derived statistics (hit points, sanity, build, movement)
//! - Archetype, occupation and talent selection
//! - Resolution of loosely named skill requirements into concrete skills
//! - Randomized distribution of the archetype, occupation and free
//!   skill-point pools
//!
//! # Quick Start
//!
//! ```
//! use investigator_core::{GeneratorConfig, InvestigatorGenerator};
//!
//! let generator = InvestigatorGenerator::builtin(GeneratorConfig::pulp());
//! let investigator = generator.generate_seeded(42).unwrap();
//! println!("{}", investigator.to_json_pretty().unwrap());
//! ```

pub mod allocator;
pub mod attributes;
pub mod catalog;
mod catalog_data;
pub mod config;
pub mod derived;
pub mod dice;
pub mod generator;
pub mod investigator;
pub mod selection;
pub mod skills;
pub mod testing;

// Primary public API
pub use allocator::SkillPointAllocator;
pub use attributes::{Attribute, AttributeKind};
pub use catalog::{Archetype, Catalog, CatalogError, CatalogKind, Occupation, SkillRequirement, Talent};
pub use config::{GameMode, GeneratorConfig};
pub use generator::{generate_investigator, generate_with_rng, GenerationError, InvestigatorGenerator};
pub use investigator::{Investigator, InvestigatorId, PoolLedger, PoolStatus, SkillUpdateError};
pub use skills::{Era, Skill};
