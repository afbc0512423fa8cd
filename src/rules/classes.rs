//! Class archetypes and the eligibility rule

use crate::rules::attributes::{Attribute, AttributeScores};

/// A named archetype with minimum attribute scores
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRequirements {
    pub name: String,
    /// Required minimums, in definition order
    pub minimums: Vec<(Attribute, i32)>,
}

impl ClassRequirements {
    pub fn new(name: impl Into<String>, minimums: Vec<(Attribute, i32)>) -> Self {
        Self {
            name: name.into(),
            minimums,
        }
    }

    /// Nine in every attribute, with one key attribute raised to 14
    pub fn standard(name: &str, key: Attribute) -> Self {
        let minimums = Attribute::all()
            .iter()
            .map(|&a| (a, if a == key { 14 } else { 9 }))
            .collect();
        Self::new(name, minimums)
    }

    /// True iff every required attribute is present and meets its minimum
    pub fn is_eligible(&self, scores: &AttributeScores) -> bool {
        self.minimums
            .iter()
            .all(|&(attr, min)| scores.get(attr).is_some_and(|score| score >= min))
    }

    pub fn minimum(&self, attribute: Attribute) -> Option<i32> {
        self.minimums
            .iter()
            .find(|(a, _)| *a == attribute)
            .map(|&(_, min)| min)
    }
}

/// Built-in class list: Barbarian, Wizard, Bard
pub fn standard_classes() -> Vec<ClassRequirements> {
    vec![
        ClassRequirements::standard("Barbarian", Attribute::Strength),
        ClassRequirements::standard("Wizard", Attribute::Intelligence),
        ClassRequirements::standard("Bard", Attribute::Charisma),
    ]
}
