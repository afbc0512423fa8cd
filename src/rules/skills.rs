//! Skill definitions and their governing attributes

use crate::rules::attributes::Attribute;

/// A named check governed by one attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDefinition {
    pub name: String,
    pub attribute: Attribute,
}

impl SkillDefinition {
    pub fn new(name: impl Into<String>, attribute: Attribute) -> Self {
        Self {
            name: name.into(),
            attribute,
        }
    }
}

/// Built-in skill list
pub const STANDARD_SKILLS: &[(&str, Attribute)] = &[
    ("Acrobatics", Attribute::Dexterity),
    ("Animal Handling", Attribute::Wisdom),
    ("Arcana", Attribute::Intelligence),
    ("Athletics", Attribute::Strength),
    ("Deception", Attribute::Charisma),
    ("History", Attribute::Intelligence),
    ("Insight", Attribute::Wisdom),
    ("Intimidation", Attribute::Charisma),
    ("Investigation", Attribute::Intelligence),
    ("Medicine", Attribute::Wisdom),
    ("Nature", Attribute::Intelligence),
    ("Perception", Attribute::Wisdom),
    ("Performance", Attribute::Charisma),
    ("Persuasion", Attribute::Charisma),
    ("Religion", Attribute::Intelligence),
    ("Sleight of Hand", Attribute::Dexterity),
    ("Stealth", Attribute::Dexterity),
    ("Survival", Attribute::Wisdom),
];

pub fn standard_skills() -> Vec<SkillDefinition> {
    STANDARD_SKILLS
        .iter()
        .map(|&(name, attr)| SkillDefinition::new(name, attr))
        .collect()
}
