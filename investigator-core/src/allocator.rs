//! Random distribution of skill points.
//!
//! Each pool is spent by repeatedly drawing a candidate skill (with
//! replacement) and raising it by a random amount that fits under its cap.
//! Credit Rating is first topped up to the occupation minimum.

use crate::catalog::CreditRatingRange;
use crate::config::{GameMode, GeneratorConfig};
use crate::investigator::{Investigator, PoolLedger, PoolStatus, SkillUpdateError};
use crate::skills::CREDIT_RATING;
use rand::seq::SliceRandom;
use rand::Rng;

/// Spends point pools on an investigator's skills.
#[derive(Debug, Clone, Copy)]
pub struct SkillPointAllocator {
    skill_limit: i32,
    credit_rating: CreditRatingRange,
    max_idle_draws: u32,
}

impl SkillPointAllocator {
    pub fn new(mode: GameMode, credit_rating: CreditRatingRange, max_idle_draws: u32) -> Self {
        Self {
            skill_limit: mode.skill_limit(),
            credit_rating,
            max_idle_draws,
        }
    }

    /// Allocator for an investigator's mode and occupation.
    pub fn for_investigator(investigator: &Investigator, config: &GeneratorConfig) -> Self {
        Self::new(
            investigator.mode,
            investigator.occupation.credit_rating,
            config.max_idle_draws,
        )
    }

    /// Highest value `skill` may reach.
    pub fn ceiling(&self, skill: &str) -> i32 {
        if skill == CREDIT_RATING {
            self.skill_limit.min(self.credit_rating.max)
        } else {
            self.skill_limit
        }
    }

    /// Spend `pool` points over `eligible`, returning the pool's ledger.
    ///
    /// The ledger's `unassigned` amount is what is left for the player. It is
    /// negative when topping Credit Rating up to the occupation minimum cost
    /// more than the pool held.
    pub fn assign<R: Rng + ?Sized>(
        &self,
        investigator: &mut Investigator,
        pool: i32,
        eligible: &[String],
        rng: &mut R,
    ) -> Result<PoolLedger, SkillUpdateError> {
        let mut remaining = pool - self.apply_credit_minimum(investigator)?;
        let mut status = PoolStatus::Spent;
        let mut idle_draws = 0u32;

        while remaining > 0 {
            let placed = match eligible.choose(rng) {
                Some(name) => self.try_raise(investigator, name, remaining, rng)?,
                None => 0,
            };

            if placed > 0 {
                remaining -= placed;
                idle_draws = 0;
                continue;
            }

            idle_draws += 1;
            if idle_draws >= self.max_idle_draws || !self.has_headroom(investigator, eligible) {
                log::warn!(
                    "{remaining} of {pool} points could not be placed on {} candidate skills",
                    eligible.len()
                );
                status = PoolStatus::Saturated;
                break;
            }
        }

        Ok(PoolLedger {
            granted: pool,
            unassigned: remaining,
            status,
        })
    }

    /// Raise Credit Rating to the occupation minimum. Returns the cost.
    fn apply_credit_minimum(&self, investigator: &mut Investigator) -> Result<i32, SkillUpdateError> {
        let current = investigator
            .skill_value(CREDIT_RATING)
            .ok_or_else(|| SkillUpdateError::UnknownSkill(CREDIT_RATING.to_string()))?;

        let ceiling = self.ceiling(CREDIT_RATING);
        let target = self.credit_rating.min.min(ceiling);
        if current >= target {
            return Ok(0);
        }

        let deficit = target - current;
        investigator.raise_skill(CREDIT_RATING, deficit, ceiling)?;
        log::debug!("Raised {CREDIT_RATING} to occupation minimum {target}");
        Ok(deficit)
    }

    /// One draw: returns how many points were placed on `name`.
    fn try_raise<R: Rng + ?Sized>(
        &self,
        investigator: &mut Investigator,
        name: &str,
        remaining: i32,
        rng: &mut R,
    ) -> Result<i32, SkillUpdateError> {
        let Some(skill) = investigator.skill(name) else {
            return Ok(0);
        };
        if !skill.is_allocatable() {
            return Ok(0);
        }

        let ceiling = self.ceiling(name);
        let headroom = ceiling - skill.value;
        if headroom <= 0 {
            return Ok(0);
        }

        let amount = rng.gen_range(1..=headroom).min(remaining);
        let value = investigator.raise_skill(name, amount, ceiling)?;
        log::debug!("Assigned {amount} points to {name} (now {value})");
        Ok(amount)
    }

    fn has_headroom(&self, investigator: &Investigator, eligible: &[String]) -> bool {
        eligible.iter().any(|name| {
            investigator
                .skill(name)
                .is_some_and(|skill| skill.is_allocatable() && skill.value < self.ceiling(name))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Occupation, SkillPointFormula};
    use crate::investigator::InvestigatorId;
    use crate::skills::{Era, Skill, CTHULHU_MYTHOS, DODGE_COPY};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn investigator(mode: GameMode, credit: (i32, i32), skills: &[Skill]) -> Investigator {
        let occupation = Occupation {
            name: "Clerk".to_string(),
            skill_requirements: Vec::new(),
            credit_rating: CreditRatingRange {
                min: credit.0,
                max: credit.1,
            },
            skill_points: SkillPointFormula::default(),
            suggested_contacts: String::new(),
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut investigator =
            Investigator::new(InvestigatorId::from_rng(&mut rng), mode, Era::Modern, occupation);
        for skill in skills {
            investigator
                .skills_mut()
                .insert(skill.name.clone(), skill.clone());
        }
        investigator
            .skills_mut()
            .insert(CREDIT_RATING.to_string(), Skill::new(CREDIT_RATING, "CreditRating", 0));
        investigator
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pool_is_conserved() {
        let mut inv = investigator(
            GameMode::Classic,
            (10, 40),
            &[Skill::new("Climb", "Climb", 20), Skill::new("Swim", "Swim", 20)],
        );
        let before = inv.total_skill_value();
        let allocator = SkillPointAllocator::new(GameMode::Classic, inv.occupation.credit_rating, 1000);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let ledger = allocator
            .assign(&mut inv, 120, &names(&["Climb", "Swim"]), &mut rng)
            .unwrap();

        assert_eq!(ledger.granted, 120);
        assert_eq!(ledger.unassigned, 0);
        assert_eq!(ledger.status, PoolStatus::Spent);
        assert_eq!(inv.total_skill_value() - before, 120);
        assert_eq!(inv.skill_value(CREDIT_RATING), Some(10));
    }

    #[test]
    fn test_credit_minimum_can_overdraw_pool() {
        let mut inv = investigator(GameMode::Classic, (50, 90), &[Skill::new("Climb", "Climb", 20)]);
        let allocator = SkillPointAllocator::new(GameMode::Classic, inv.occupation.credit_rating, 1000);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let ledger = allocator
            .assign(&mut inv, 30, &names(&["Climb"]), &mut rng)
            .unwrap();

        assert_eq!(ledger.unassigned, -20);
        assert_eq!(inv.skill_value(CREDIT_RATING), Some(50));
        assert_eq!(inv.skill_value("Climb"), Some(20));
    }

    #[test]
    fn test_saturated_pool_terminates() {
        let mut inv = investigator(GameMode::Classic, (0, 10), &[Skill::new("Climb", "Climb", 20)]);
        let allocator = SkillPointAllocator::new(GameMode::Classic, inv.occupation.credit_rating, 1000);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let ledger = allocator
            .assign(&mut inv, 500, &names(&["Climb"]), &mut rng)
            .unwrap();

        assert_eq!(ledger.status, PoolStatus::Saturated);
        assert_eq!(inv.skill_value("Climb"), Some(90));
        assert_eq!(ledger.unassigned, 500 - 70);
    }

    #[test]
    fn test_excluded_skills_never_raised() {
        let mut inv = investigator(
            GameMode::Pulp,
            (0, 10),
            &[
                Skill::new(CTHULHU_MYTHOS, "CthulhuMythos", 0),
                Skill::new(DODGE_COPY, DODGE_COPY, 30),
                Skill::base("Science", "Science", 1),
            ],
        );
        let allocator = SkillPointAllocator::new(GameMode::Pulp, inv.occupation.credit_rating, 50);
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let ledger = allocator
            .assign(
                &mut inv,
                100,
                &names(&[CTHULHU_MYTHOS, DODGE_COPY, "Science", "Unknown"]),
                &mut rng,
            )
            .unwrap();

        assert_eq!(ledger.status, PoolStatus::Saturated);
        assert_eq!(ledger.unassigned, 100);
        assert_eq!(inv.skill_value(CTHULHU_MYTHOS), Some(0));
        assert_eq!(inv.skill_value(DODGE_COPY), Some(30));
        assert_eq!(inv.skill_value("Science"), Some(1));
    }

    #[test]
    fn test_credit_rating_capped_by_occupation() {
        let mut inv = investigator(GameMode::Pulp, (5, 30), &[]);
        let allocator = SkillPointAllocator::new(GameMode::Pulp, inv.occupation.credit_rating, 1000);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        assert_eq!(allocator.ceiling(CREDIT_RATING), 30);
        assert_eq!(allocator.ceiling("Climb"), 95);

        let ledger = allocator
            .assign(&mut inv, 200, &names(&[CREDIT_RATING]), &mut rng)
            .unwrap();

        assert_eq!(inv.skill_value(CREDIT_RATING), Some(30));
        assert_eq!(ledger.assigned(), 30);
        assert_eq!(ledger.status, PoolStatus::Saturated);
    }

    #[test]
    fn test_empty_candidate_list() {
        let mut inv = investigator(GameMode::Classic, (0, 10), &[]);
        let allocator = SkillPointAllocator::new(GameMode::Classic, inv.occupation.credit_rating, 1000);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let ledger = allocator.assign(&mut inv, 40, &[], &mut rng).unwrap();
        assert_eq!(ledger.unassigned, 40);
        assert_eq!(ledger.status, PoolStatus::Saturated);
    }

    #[test]
    fn test_missing_credit_rating_is_an_error() {
        let mut inv = investigator(GameMode::Classic, (0, 10), &[]);
        inv.skills_mut().remove(CREDIT_RATING);
        let allocator = SkillPointAllocator::new(GameMode::Classic, inv.occupation.credit_rating, 1000);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        assert_eq!(
            allocator.assign(&mut inv, 40, &[], &mut rng),
            Err(SkillUpdateError::UnknownSkill(CREDIT_RATING.to_string()))
        );
    }
}
