//! Skill check resolution
//!
//! A check is a d20 roll plus the governing attribute's modifier, compared
//! against a difficulty class. Ties go to the roller.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Die size for skill checks
pub const CHECK_DIE: i32 = 20;

/// Pass/fail outcome of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => f.write_str("Success"),
            Outcome::Failure => f.write_str("Failure"),
        }
    }
}

/// Result of one skill check, kept only for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCheckResult {
    pub skill: String,
    pub roll: i32,
    pub modifier: i32,
    pub total: i32,
    pub dc: i32,
    pub outcome: Outcome,
}

/// Uniform roll in [1, 20]
pub fn roll_d20<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(1..=CHECK_DIE)
}

/// Combine a roll, a modifier and a DC into a result
pub fn resolve_check(skill: &str, roll: i32, modifier: i32, dc: i32) -> SkillCheckResult {
    let total = roll.saturating_add(modifier);
    let outcome = if total >= dc {
        Outcome::Success
    } else {
        Outcome::Failure
    };

    SkillCheckResult {
        skill: skill.to_string(),
        roll,
        modifier,
        total,
        dc,
        outcome,
    }
}
