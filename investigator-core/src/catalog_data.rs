//! Bundled reference data: skills, pulp archetypes, occupations and
//! talents.

use crate::attributes::AttributeKind::{
    self, Appearance, Constitution, Dexterity, Education, Intelligence, Power, Size, Strength,
};
use crate::catalog::{
    Archetype, AttributeMultiplier, Catalog, CreditRatingRange, Occupation, SkillPointFormula,
    SkillRequirement, SpecialRules, Talent, TalentCategory,
};
use crate::skills::{Era, Skill};

/// Build the default catalog.
pub fn builtin_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for skill in skills() {
        catalog = catalog.with_skill(skill);
    }
    for archetype in archetypes() {
        catalog = catalog.with_archetype(archetype);
    }
    for occupation in occupations() {
        catalog = catalog.with_occupation(occupation);
    }
    for talent in talents() {
        catalog = catalog.with_talent(talent);
    }
    catalog
}

fn skills() -> Vec<Skill> {
    vec![
        Skill::new("Accounting", "Accounting", 5),
        Skill::new("Anthropology", "Anthropology", 1),
        Skill::new("Appraise", "Appraise", 5),
        Skill::new("Archaeology", "Archaeology", 1),
        Skill::base("Art/Craft", "ArtCraft", 5),
        Skill::specialized("Art/Craft", "Acting", "ArtCraft1", 5),
        Skill::specialized("Art/Craft", "Photography", "ArtCraft2", 5),
        Skill::new("Charm", "Charm", 15),
        Skill::new("Climb", "Climb", 20),
        Skill::new("Computer Use", "ComputerUse", 5).only_in(Era::Modern),
        Skill::new("Credit Rating", "CreditRating", 0),
        Skill::new("Cthulhu Mythos", "CthulhuMythos", 0),
        Skill::new("Disguise", "Disguise", 5),
        Skill::new("Diving", "Diving", 1),
        Skill::new("Drive Auto", "DriveAuto", 20),
        Skill::new("Electrical Repair", "ElecRepair", 10),
        Skill::new("Electronics", "Electronics", 1).only_in(Era::Modern),
        Skill::new("Fast Talk", "FastTalk", 5),
        Skill::base("Fighting", "Fighting", 20),
        Skill::specialized("Fighting", "Brawl", "Fighting1", 25),
        Skill::base("Firearms", "Firearms", 20),
        Skill::specialized("Firearms", "Handgun", "Firearms1", 20),
        Skill::specialized("Firearms", "Rifle/Shotgun", "Firearms2", 25),
        Skill::new("First Aid", "FirstAid", 30),
        Skill::new("History", "History", 5),
        Skill::new("Intimidate", "Intimidate", 15),
        Skill::new("Jump", "Jump", 20),
        Skill::base("Language", "Language", 1),
        Skill::new("Law", "Law", 5),
        Skill::new("Library Use", "LibraryUse", 20),
        Skill::new("Listen", "Listen", 20),
        Skill::new("Locksmith", "Locksmith", 1),
        Skill::new("Mechanical Repair", "MechRepair", 10),
        Skill::new("Medicine", "Medicine", 1),
        Skill::new("Natural World", "NaturalWorld", 10),
        Skill::new("Navigate", "Navigate", 10),
        Skill::new("Occult", "Occult", 5),
        Skill::new("Operate Heavy Machinery", "OpHvMachine", 1),
        Skill::new("Persuade", "Persuade", 10),
        Skill::base("Pilot", "Pilot", 1),
        Skill::new("Psychoanalysis", "Psychoanalysis", 1),
        Skill::new("Psychology", "Psychology", 10),
        Skill::new("Ride", "Ride", 5),
        Skill::base("Science", "Science", 1),
        Skill::new("Sleight of Hand", "SleightOfHand", 10),
        Skill::new("Spot Hidden", "SpotHidden", 25),
        Skill::new("Stealth", "Stealth", 20),
        Skill::base("Survival", "Survival", 10),
        Skill::new("Swim", "Swim", 20),
        Skill::new("Throw", "Throw", 20),
        Skill::new("Track", "Track", 10),
    ]
}

fn archetype(
    name: &str,
    core: &[AttributeKind],
    skills: &[&str],
    suggested: &[&str],
    description: &str,
) -> Archetype {
    Archetype {
        name: name.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        bonus_points: 100,
        core_characteristics: core.to_vec(),
        suggested_occupations: suggested.iter().map(|s| s.to_string()).collect(),
        talent_count: 2,
        description: description.to_string(),
        special_rules: SpecialRules::default(),
    }
}

fn archetypes() -> Vec<Archetype> {
    vec![
        archetype(
            "Adventurer",
            &[Dexterity, Appearance],
            &[
                "Climb", "Diving", "Drive Auto", "First Aid", "Fighting(Any)", "Firearms(Any)",
                "Jump", "Language(Any)", "Mechanical Repair", "Pilot(Any)", "Ride", "Stealth",
                "Survival(Any)", "Swim",
            ],
            &["Archaeologist", "Aviator", "Drifter", "Photographer", "Sailor", "Soldier"],
            "A life without adventure is not worth living. The adventurer yearns for excitement, fun, and a challenge.",
        ),
        archetype(
            "Beefcake",
            &[Strength],
            &[
                "Climb", "Fighting(Brawl)", "Intimidate", "Listen", "Mechanical Repair",
                "Psychology", "Swim", "Throw",
            ],
            &["Beat Cop", "Boxer/Wrestler", "Laborer", "Sailor", "Soldier"],
            "Physical, muscular, and capable of handling themselves when the chips are down.",
        ),
        archetype(
            "Cold Blooded",
            &[Intelligence],
            &[
                "Art/Craft(Acting)", "Disguise", "Fighting(Any)", "Firearms(Any)", "First Aid",
                "History", "Intimidate", "Law", "Listen", "Mechanical Repair", "Psychology",
                "Stealth", "Survival(Any)", "Track",
            ],
            &["Beat Cop", "Drifter", "Professor", "Soldier"],
            "A rationalist who is capable of just about anything.",
        ),
        archetype(
            "Dreamer",
            &[Power],
            &[
                "Art/Craft(Any)", "Charm", "History", "Language(Any)", "Library Use", "Listen",
                "Natural World", "Occult",
            ],
            &["Author", "Drifter", "Librarian", "Professor"],
            "Whether an idealist or visionary, the dreamer has a strong and powerful mind.",
        ),
        archetype(
            "Egghead",
            &[Intelligence, Education],
            &[
                "Anthropology", "Appraise", "Computer Use", "Electrical Repair", "Language(Any)",
                "Library Use", "Mechanical Repair", "Medicine", "Natural World", "Science(Any)",
            ],
            &["Archaeologist", "Doctor of Medicine", "Librarian", "Professor"],
            "Brains over brawn. The egghead lives for knowledge.",
        ),
        archetype(
            "Hard Boiled",
            &[Constitution],
            &[
                "Art/Craft(Any)", "Fighting(Any)", "Firearms(Any)", "Drive Auto", "Fast Talk",
                "Intimidate", "Law", "Listen", "Locksmith", "Sleight of Hand", "Spot Hidden",
                "Stealth", "Throw",
            ],
            &["Beat Cop", "Private Investigator", "Soldier"],
            "Tough and uncompromising, the hard boiled investigator knows the world is rotten.",
        ),
        archetype(
            "Bon Vivant",
            &[Size],
            &[
                "Appraise", "Art/Craft(Any)", "Charm", "Fast Talk", "Language(Any)", "Listen",
                "Spot Hidden", "Psychology",
            ],
            &["Author", "Dilettante", "Photographer"],
            "A self-indulgent person who enjoys the finer things in life.",
        ),
    ]
}

fn occupation(
    name: &str,
    requirements: Vec<SkillRequirement>,
    credit_rating: (i32, i32),
    base: &[(AttributeKind, i32)],
    options: &[(AttributeKind, i32)],
    contacts: &str,
) -> Occupation {
    let terms = |terms: &[(AttributeKind, i32)]| {
        terms
            .iter()
            .map(|&(attribute, multiplier)| AttributeMultiplier::new(attribute, multiplier))
            .collect()
    };
    Occupation {
        name: name.to_string(),
        skill_requirements: requirements,
        credit_rating: CreditRatingRange {
            min: credit_rating.0,
            max: credit_rating.1,
        },
        skill_points: SkillPointFormula {
            base: terms(base),
            options: terms(options),
        },
        suggested_contacts: contacts.to_string(),
    }
}

fn occupations() -> Vec<Occupation> {
    use SkillRequirement as R;

    vec![
        occupation(
            "Archaeologist",
            vec![
                R::required("Appraise"),
                R::required("Archaeology"),
                R::required("History"),
                R::required("Language(Any)"),
                R::required("Library Use"),
                R::required("Spot Hidden"),
                R::required("Mechanical Repair"),
                R::choice_of(1, &["Navigate", "Science(Any)"]),
            ],
            (10, 40),
            &[(Education, 4)],
            &[],
            "patrons, museums, universities",
        ),
        occupation(
            "Author",
            vec![
                R::required("Art/Craft(Literature)"),
                R::required("History"),
                R::required("Library Use"),
                R::choice_of(1, &["Natural World", "Occult"]),
                R::required("Language(Any)"),
                R::required("Psychology"),
            ],
            (9, 30),
            &[(Education, 4)],
            &[],
            "publishers, critics, historians",
        ),
        occupation(
            "Aviator",
            vec![
                R::required("Accounting"),
                R::required("Electrical Repair"),
                R::required("Listen"),
                R::required("Mechanical Repair"),
                R::required("Navigate"),
                R::required("Pilot(Aircraft)"),
                R::required("Spot Hidden"),
            ],
            (30, 60),
            &[(Education, 2), (Dexterity, 2)],
            &[],
            "old military contacts, other pilots, airfield mechanics",
        ),
        occupation(
            "Beat Cop",
            vec![
                R::required("Fighting(Brawl)"),
                R::required("Firearms(Any)"),
                R::required("First Aid"),
                R::choice_of(1, &["Charm", "Fast Talk", "Intimidate", "Persuade"]),
                R::required("Law"),
                R::required("Psychology"),
                R::required("Spot Hidden"),
                R::choice_of(1, &["Drive Auto", "Ride"]),
            ],
            (9, 30),
            &[(Education, 2)],
            &[(Dexterity, 2), (Strength, 2)],
            "law enforcement, local businesses and residents, street criminals",
        ),
        occupation(
            "Boxer/Wrestler",
            vec![
                R::required("Dodge"),
                R::required("Fighting(Brawl)"),
                R::required("Intimidate"),
                R::required("Jump"),
                R::required("Psychology"),
                R::required("Spot Hidden"),
            ],
            (9, 60),
            &[(Education, 2), (Strength, 2)],
            &[],
            "sports promoters, journalists, organized crime",
        ),
        occupation(
            "Dilettante",
            vec![
                R::required("Art/Craft(Any)"),
                R::required("Firearms(Any)"),
                R::required("Language(Any)"),
                R::required("Ride"),
                R::choice_of(1, &["Charm", "Fast Talk", "Intimidate", "Persuade"]),
            ],
            (50, 99),
            &[(Education, 2), (Appearance, 2)],
            &[],
            "variable, but usually people of a similar background and tastes",
        ),
        occupation(
            "Doctor of Medicine",
            vec![
                R::required("First Aid"),
                R::required("Language(Latin)"),
                R::required("Medicine"),
                R::required("Psychology"),
                R::required("Science(Biology)"),
                R::required("Science(Pharmacy)"),
            ],
            (30, 80),
            &[(Education, 4)],
            &[],
            "other physicians, medical workers, patients and ex-patients",
        ),
        occupation(
            "Drifter",
            vec![
                R::required("Climb"),
                R::required("Jump"),
                R::required("Listen"),
                R::required("Navigate"),
                R::required("Stealth"),
                R::choice_of(2, &["Charm", "Fast Talk", "Intimidate", "Persuade"]),
            ],
            (0, 5),
            &[(Education, 2)],
            &[(Appearance, 2), (Dexterity, 2), (Strength, 2)],
            "other hobos, a few friendly railroad guards, soft touches in numerous towns",
        ),
        occupation(
            "Laborer",
            vec![
                R::required("Climb"),
                R::required("Drive Auto"),
                R::required("Electrical Repair"),
                R::required("Fighting(Brawl)"),
                R::required("First Aid"),
                R::required("Mechanical Repair"),
                R::required("Operate Heavy Machinery"),
                R::required("Throw"),
            ],
            (9, 30),
            &[(Education, 2)],
            &[(Dexterity, 2), (Strength, 2)],
            "other workers and supervisors within their industry",
        ),
        occupation(
            "Librarian",
            vec![
                R::required("Accounting"),
                R::required("Library Use"),
                R::required("Language(Any)"),
                R::required("Language(Own)"),
                R::choice_of(2, &["History", "Occult", "Natural World", "Science(Any)"]),
            ],
            (9, 35),
            &[(Education, 4)],
            &[],
            "booksellers, community groups, specialist requesters",
        ),
        occupation(
            "Photographer",
            vec![
                R::required("Art/Craft(Photography)"),
                R::required("Psychology"),
                R::required("Science(Chemistry)"),
                R::required("Stealth"),
                R::required("Spot Hidden"),
                R::choice_of(1, &["Charm", "Fast Talk", "Intimidate", "Persuade"]),
            ],
            (9, 30),
            &[(Education, 4)],
            &[],
            "advertising industry, local clients",
        ),
        occupation(
            "Private Investigator",
            vec![
                R::required("Art/Craft(Photography)"),
                R::required("Disguise"),
                R::required("Law"),
                R::required("Library Use"),
                R::choice_of(1, &["Charm", "Fast Talk", "Intimidate", "Persuade"]),
                R::required("Psychology"),
                R::required("Spot Hidden"),
                R::choice_of(1, &["Computer Use", "Locksmith", "Fighting(Any)", "Firearms(Any)"]),
            ],
            (9, 30),
            &[(Education, 2)],
            &[(Dexterity, 2), (Strength, 2)],
            "law enforcement, clients",
        ),
        occupation(
            "Professor",
            vec![
                R::required("Library Use"),
                R::required("Language(Any)"),
                R::required("Language(Own)"),
                R::required("Psychology"),
                R::choice_of(4, &["Anthropology", "Archaeology", "History", "Law", "Medicine", "Occult", "Science(Any)"]),
            ],
            (20, 70),
            &[(Education, 4)],
            &[],
            "scholars, universities, libraries",
        ),
        occupation(
            "Sailor",
            vec![
                R::required("Electrical Repair"),
                R::required("Mechanical Repair"),
                R::required("Fighting(Brawl)"),
                R::required("First Aid"),
                R::required("Navigate"),
                R::required("Pilot(Boat)"),
                R::required("Survival(Sea)"),
                R::required("Swim"),
            ],
            (9, 30),
            &[(Education, 2)],
            &[(Dexterity, 2), (Strength, 2)],
            "military, veterans associations",
        ),
        occupation(
            "Soldier",
            vec![
                R::choice_of(1, &["Climb", "Swim"]),
                R::required("Dodge"),
                R::required("Fighting(Any)"),
                R::required("Firearms(Any)"),
                R::required("Stealth"),
                R::required("Survival(Any)"),
                R::choice_of(2, &["First Aid", "Mechanical Repair", "Language(Any)"]),
            ],
            (9, 30),
            &[(Education, 2)],
            &[(Dexterity, 2), (Strength, 2)],
            "military, veterans associations",
        ),
    ]
}

fn talents() -> Vec<Talent> {
    use TalentCategory::Physical;

    vec![
        Talent::new("Keen Vision", Physical, "Gain a bonus die to Spot Hidden rolls"),
        Talent::new("Quick Healer", Physical, "Natural healing is increased to +3 hit points per day"),
        Talent::new(
            "Night Vision",
            Physical,
            "In darkness, reduce the difficulty level of Spot Hidden rolls and ignore penalty die for shooting in the dark",
        ),
        Talent::new(
            "Endurance",
            Physical,
            "Gain a bonus die when making CON rolls (including to determine MOV rate for chases)",
        ),
        Talent::new("Power Lifter", Physical, "Gain a bonus die when making STR rolls to lift objects or people"),
        Talent::new(
            "Iron Liver",
            Physical,
            "May spend 5 Luck to avoid the effects of drinking excessive amounts of alcohol",
        ),
        Talent::new(
            "Stout Constitution",
            Physical,
            "May spend 10 Luck to reduce poison or disease damage and effect by half",
        ),
        Talent::new(
            "Tough Guy",
            Physical,
            "May spend 10 Luck points to shrug off up to 5 hit points worth of damage taken in one combat round",
        ),
        Talent::new("Keen Hearing", Physical, "Gain a bonus die to Listen rolls"),
        Talent::new("Smooth Talker", Physical, "Gain a bonus die to Charm rolls"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_core_tables() {
        let catalog = builtin_catalog();
        assert!(catalog.skills.contains_key("Credit Rating"));
        assert!(catalog.skills.contains_key("Cthulhu Mythos"));
        assert!(!catalog.archetypes.is_empty());
        assert!(!catalog.occupations.is_empty());
        assert_eq!(catalog.talents.len(), 10);
    }

    #[test]
    fn test_archetypes_declare_core_characteristics() {
        for archetype in archetypes() {
            assert!(
                !archetype.core_characteristics.is_empty(),
                "{} has no core characteristic",
                archetype.name
            );
            assert!(archetype.core_characteristics.iter().all(|c| {
                AttributeKind::characteristics().contains(c)
            }));
        }
    }

    #[test]
    fn test_credit_ranges_are_ordered() {
        for occupation in occupations() {
            let range = occupation.credit_rating;
            assert!(range.min <= range.max, "{}", occupation.name);
        }
    }
}
