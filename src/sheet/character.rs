//! A single character sheet

use crate::rules::{Attribute, AttributeScores};
use serde::{Deserialize, Serialize};

/// One character: just its attribute scores
///
/// This is also the wire shape: `{"attributes": {"Strength": 10, ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub attributes: AttributeScores,
}

impl Character {
    /// New character with every attribute at `default_score`
    pub fn new(default_score: i32) -> Self {
        Self {
            attributes: AttributeScores::uniform(default_score),
        }
    }

    pub fn total(&self) -> i32 {
        self.attributes.total()
    }

    pub fn score(&self, attribute: Attribute) -> i32 {
        self.attributes.score(attribute)
    }

    pub fn modifier(&self, attribute: Attribute) -> i32 {
        self.attributes.modifier(attribute)
    }
}
