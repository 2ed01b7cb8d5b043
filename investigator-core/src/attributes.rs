//! Characteristics and the attribute roller.
//!
//! Eight characteristics are rolled directly. Luck is rolled with the same
//! formula but may be re-rolled once. Hit points, magic points and sanity
//! are derived afterwards (see [`crate::derived`]).

use crate::dice::{DicePool, DieType};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `(3D6) * 5`, used for most characteristics and for Luck.
pub const STANDARD_ROLL: DicePool = DicePool::new(3, DieType::D6, 0).times(5);

/// `(2D6 + 6) * 5`, used for Size, Intelligence and Education.
pub const ELEVATED_ROLL: DicePool = DicePool::new(2, DieType::D6, 6).times(5);

/// `(1D6 + 13) * 5`, the pulp core-characteristic roll. Always 70..=95.
pub const CORE_ROLL: DicePool = DicePool::new(1, DieType::D6, 13).times(5);

/// A first Luck roll below this is thrown away and rolled again, once.
pub const LUCK_REROLL_BELOW: i32 = 45;

/// Every attribute tracked on an investigator sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AttributeKind {
    Strength,
    Constitution,
    Dexterity,
    Intelligence,
    Size,
    Power,
    Appearance,
    Education,
    HitPoints,
    MagicPoints,
    Luck,
    Sanity,
}

impl AttributeKind {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            AttributeKind::Strength => "STR",
            AttributeKind::Constitution => "CON",
            AttributeKind::Dexterity => "DEX",
            AttributeKind::Intelligence => "INT",
            AttributeKind::Size => "SIZ",
            AttributeKind::Power => "POW",
            AttributeKind::Appearance => "APP",
            AttributeKind::Education => "EDU",
            AttributeKind::HitPoints => "HP",
            AttributeKind::MagicPoints => "MP",
            AttributeKind::Luck => "LCK",
            AttributeKind::Sanity => "SAN",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttributeKind::Strength => "Strength",
            AttributeKind::Constitution => "Constitution",
            AttributeKind::Dexterity => "Dexterity",
            AttributeKind::Intelligence => "Intelligence",
            AttributeKind::Size => "Size",
            AttributeKind::Power => "Power",
            AttributeKind::Appearance => "Appearance",
            AttributeKind::Education => "Education",
            AttributeKind::HitPoints => "Hit Points",
            AttributeKind::MagicPoints => "Magic Points",
            AttributeKind::Luck => "Luck",
            AttributeKind::Sanity => "Sanity",
        }
    }

    /// The eight characteristics rolled directly, in sheet order.
    pub fn characteristics() -> [AttributeKind; 8] {
        [
            AttributeKind::Strength,
            AttributeKind::Constitution,
            AttributeKind::Dexterity,
            AttributeKind::Intelligence,
            AttributeKind::Size,
            AttributeKind::Power,
            AttributeKind::Appearance,
            AttributeKind::Education,
        ]
    }

    /// Size, Intelligence and Education roll `2D6 + 6` instead of `3D6`.
    pub fn uses_elevated_roll(&self) -> bool {
        matches!(
            self,
            AttributeKind::Size | AttributeKind::Intelligence | AttributeKind::Education
        )
    }

    /// The non-core formula for this attribute.
    pub fn standard_formula(&self) -> DicePool {
        if self.uses_elevated_roll() {
            ELEVATED_ROLL
        } else {
            STANDARD_ROLL
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// One attribute entry on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: i32,
    pub starting_value: i32,
    pub max_value: i32,
    /// Set on the single pulp core characteristic.
    #[serde(default)]
    pub core: bool,
}

impl Attribute {
    /// A freshly rolled attribute: value, starting value and maximum agree.
    pub fn rolled(kind: AttributeKind, value: i32) -> Self {
        Self {
            name: kind.abbreviation().to_string(),
            value,
            starting_value: value,
            max_value: value,
            core: false,
        }
    }

    pub fn with_max(mut self, max_value: i32) -> Self {
        self.max_value = max_value;
        self
    }

    pub fn as_core(mut self) -> Self {
        self.core = true;
        self
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Roll one characteristic.
///
/// A core roll ignores the per-attribute formula and always uses
/// [`CORE_ROLL`].
pub fn roll_attribute<R: Rng + ?Sized>(kind: AttributeKind, is_core: bool, rng: &mut R) -> i32 {
    if is_core {
        CORE_ROLL.roll_with_rng(rng)
    } else {
        kind.standard_formula().roll_with_rng(rng)
    }
}

/// Roll Luck: a first result under [`LUCK_REROLL_BELOW`] is replaced by a
/// second roll, which is kept whatever it shows.
pub fn roll_luck<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    let first = roll_attribute(AttributeKind::Luck, false, rng);
    if first < LUCK_REROLL_BELOW {
        roll_attribute(AttributeKind::Luck, false, rng)
    } else {
        first
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_core_roll_values() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..300 {
            let value = roll_attribute(AttributeKind::Strength, true, &mut rng);
            assert!([70, 75, 80, 85, 90, 95].contains(&value), "got {value}");
        }
    }

    #[test]
    fn test_core_roll_ignores_elevated_formula() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..300 {
            let value = roll_attribute(AttributeKind::Education, true, &mut rng);
            assert!((70..=95).contains(&value));
        }
    }

    #[test]
    fn test_standard_and_elevated_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..300 {
            let str_roll = roll_attribute(AttributeKind::Strength, false, &mut rng);
            assert!((15..=90).contains(&str_roll));
            let siz_roll = roll_attribute(AttributeKind::Size, false, &mut rng);
            assert!((40..=90).contains(&siz_roll));
        }
    }

    #[test]
    fn test_luck_reroll_happens_once() {
        // StepRng yielding zeros makes every die show 1: 3 * 5 = 15, still
        // below the threshold after the single re-roll.
        let mut rng = StepRng::new(0, 0);
        assert_eq!(roll_luck(&mut rng), 15);
    }

    #[test]
    fn test_rolled_attribute_starts_at_value() {
        let attr = Attribute::rolled(AttributeKind::Power, 65);
        assert_eq!(attr.value, attr.starting_value);
        assert_eq!(attr.name, "POW");
        assert!(!attr.core);
        assert!(attr.as_core().core);
    }
}
