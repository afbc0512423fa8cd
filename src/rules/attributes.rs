//! Attributes, attribute score maps and the modifier function

use crate::core::error::SheetError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six character attributes, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Attribute {
    /// Get all attributes
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Strength,
            Attribute::Dexterity,
            Attribute::Constitution,
            Attribute::Intelligence,
            Attribute::Wisdom,
            Attribute::Charisma,
        ]
    }

    /// Human-readable name, also the serialized key
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Strength => "Strength",
            Attribute::Dexterity => "Dexterity",
            Attribute::Constitution => "Constitution",
            Attribute::Intelligence => "Intelligence",
            Attribute::Wisdom => "Wisdom",
            Attribute::Charisma => "Charisma",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Attribute::Strength => "STR",
            Attribute::Dexterity => "DEX",
            Attribute::Constitution => "CON",
            Attribute::Intelligence => "INT",
            Attribute::Wisdom => "WIS",
            Attribute::Charisma => "CHA",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = SheetError;

    /// Accepts full names and abbreviations, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Attribute::all()
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(s) || a.abbreviation().eq_ignore_ascii_case(s))
            .ok_or_else(|| SheetError::UnknownAttribute(s.to_string()))
    }
}

/// Derived bonus for a score: floor((score - 10) / 2)
pub fn modifier(score: i32) -> i32 {
    // Widened so extreme stored scores cannot overflow; the result always fits
    (i64::from(score) - 10).div_euclid(2) as i32
}

/// Attribute name -> score for one character
///
/// Stored as a map rather than a fixed struct because remote data may omit
/// attributes, and eligibility distinguishes "missing" from "low".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeScores(AHashMap<Attribute, i32>);

impl AttributeScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every attribute set to the same score
    pub fn uniform(score: i32) -> Self {
        Self(Attribute::all().iter().map(|&a| (a, score)).collect())
    }

    /// Score for an attribute, if present
    pub fn get(&self, attribute: Attribute) -> Option<i32> {
        self.0.get(&attribute).copied()
    }

    /// Score for an attribute, treating a missing entry as 0
    pub fn score(&self, attribute: Attribute) -> i32 {
        self.get(attribute).unwrap_or(0)
    }

    pub fn set(&mut self, attribute: Attribute, score: i32) {
        self.0.insert(attribute, score);
    }

    /// Modifier for an attribute (missing counts as score 0)
    pub fn modifier(&self, attribute: Attribute) -> i32 {
        modifier(self.score(attribute))
    }

    /// Sum of all present scores, saturating at the i32 bounds
    pub fn total(&self) -> i32 {
        self.0.values().fold(0i32, |acc, &score| acc.saturating_add(score))
    }

    /// Raise any negative score to 0, returning how many were changed
    pub fn clamp_negative(&mut self) -> usize {
        let mut clamped = 0;
        for score in self.0.values_mut() {
            if *score < 0 {
                *score = 0;
                clamped += 1;
            }
        }
        clamped
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Present attributes in display order
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::all()
            .iter()
            .filter_map(move |&a| self.get(a).map(|score| (a, score)))
    }
}

impl FromIterator<(Attribute, i32)> for AttributeScores {
    fn from_iter<I: IntoIterator<Item = (Attribute, i32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
