//! Dice for characteristic rolls.
//!
//! Characteristics are rolled as a small pool of dice plus a flat modifier
//! and then scaled to the percentile range, e.g. `(3D6) * 5` or
//! `(2D6 + 6) * 5`.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Die sizes used by characteristic rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieType {
    D6,
}

impl DieType {
    pub fn sides(&self) -> u32 {
        match self {
            DieType::D6 => 6,
        }
    }

    /// Roll one die.
    pub fn roll_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(1..=self.sides())
    }
}

impl fmt::Display for DieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.sides())
    }
}

/// A pool of identical dice with a flat modifier, scaled by a multiplier.
///
/// `DicePool::new(2, DieType::D6, 6).times(5)` is the `(2D6 + 6) * 5`
/// characteristic roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePool {
    pub count: u32,
    pub die_type: DieType,
    pub modifier: i32,
    pub multiplier: i32,
}

impl DicePool {
    pub const fn new(count: u32, die_type: DieType, modifier: i32) -> Self {
        Self {
            count,
            die_type,
            modifier,
            multiplier: 1,
        }
    }

    pub const fn times(self, multiplier: i32) -> Self {
        Self { multiplier, ..self }
    }

    pub fn min(&self) -> i32 {
        (self.count as i32 + self.modifier) * self.multiplier
    }

    pub fn max(&self) -> i32 {
        (self.count as i32 * self.die_type.sides() as i32 + self.modifier) * self.multiplier
    }

    pub fn roll_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        let dice: u32 = (0..self.count)
            .map(|_| self.die_type.roll_with_rng(rng))
            .sum();
        (dice as i32 + self.modifier) * self.multiplier
    }
}

impl fmt::Display for DicePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = match self.modifier {
            0 => format!("{}{}", self.count, self.die_type),
            m if m > 0 => format!("{}{} + {}", self.count, self.die_type, m),
            m => format!("{}{} - {}", self.count, self.die_type, m.abs()),
        };
        if self.multiplier == 1 {
            write!(f, "{inner}")
        } else {
            write!(f, "({inner}) * {}", self.multiplier)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_die_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let roll = DieType::D6.roll_with_rng(&mut rng);
            assert!((1..=6).contains(&roll));
        }
    }

    #[test]
    fn test_pool_bounds() {
        let pool = DicePool::new(2, DieType::D6, 6).times(5);
        assert_eq!(pool.min(), 40);
        assert_eq!(pool.max(), 90);

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            let value = pool.roll_with_rng(&mut rng);
            assert!(value >= pool.min() && value <= pool.max());
            assert_eq!(value % 5, 0);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(DicePool::new(3, DieType::D6, 0).times(5).to_string(), "(3D6) * 5");
        assert_eq!(DicePool::new(1, DieType::D6, 13).to_string(), "1D6 + 13");
        assert_eq!(DicePool::new(2, DieType::D6, -1).to_string(), "2D6 - 1");
    }
}
