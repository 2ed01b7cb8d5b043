//! Secondary statistics derived from rolled characteristics.

use crate::attributes::{Attribute, AttributeKind};
use crate::config::GameMode;
use serde::{Deserialize, Serialize};

/// Sanity never exceeds this at creation.
pub const MAX_SANITY: i32 = 99;

/// Above this `STR + SIZ` the table is extended by one step per 80 points.
pub const BUILD_TABLE_TOP: i32 = 524;
pub const BUILD_STEP: i32 = 80;

/// Ascending upper bounds of `STR + SIZ` with their build and damage bonus.
const BUILD_DAMAGE_TABLE: [(i32, &str, &str); 9] = [
    (64, "-2", "-2"),
    (84, "-1", "-1"),
    (124, "", "None"),
    (164, "+1", "+1D4"),
    (204, "+2", "+1D6"),
    (284, "+3", "+2D6"),
    (364, "+4", "+3D6"),
    (444, "+5", "+4D6"),
    (524, "+6", "+5D6"),
];

/// Build and damage bonus as printed on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildDamage {
    pub build: String,
    pub damage_bonus: String,
}

/// `floor((CON + SIZ) / divisor)` with the divisor set by the mode.
pub fn hit_points(constitution: i32, size: i32, mode: GameMode) -> i32 {
    (constitution + size).div_euclid(mode.hit_point_divisor())
}

/// Look up build and damage bonus from `STR + SIZ`.
pub fn build_and_damage(compound: i32) -> BuildDamage {
    if compound > BUILD_TABLE_TOP {
        let extra_steps = (compound - BUILD_TABLE_TOP) / BUILD_STEP;
        return BuildDamage {
            build: format!("+{}", 6 + extra_steps),
            damage_bonus: format!("+{}D6", 5 + extra_steps),
        };
    }

    let (_, build, damage) = BUILD_DAMAGE_TABLE
        .iter()
        .find(|(upper, _, _)| compound <= *upper)
        .copied()
        .unwrap_or(BUILD_DAMAGE_TABLE[0]);

    BuildDamage {
        build: build.to_string(),
        damage_bonus: damage.to_string(),
    }
}

/// Movement rate: 7 when both DEX and STR are below SIZ, otherwise 9.
///
/// The "one of them below" case also gives 9.
pub fn movement(dexterity: i32, strength: i32, size: i32) -> i32 {
    if dexterity < size && strength < size {
        7
    } else {
        9
    }
}

/// Hit points attribute; value, starting value and maximum agree.
pub fn hit_point_attribute(constitution: i32, size: i32, mode: GameMode) -> Attribute {
    Attribute::rolled(AttributeKind::HitPoints, hit_points(constitution, size, mode))
}

/// Sanity starts at Power with a fixed maximum.
pub fn sanity_attribute(power: i32) -> Attribute {
    Attribute::rolled(AttributeKind::Sanity, power).with_max(MAX_SANITY)
}

/// Magic points are a fifth of Power.
pub fn magic_point_attribute(power: i32) -> Attribute {
    Attribute::rolled(AttributeKind::MagicPoints, power / 5)
}
