//! The in-memory character collection and every mutation on it

use crate::core::config::SheetConfig;
use crate::core::error::{Result, SheetError};
use crate::rules::{resolve_check, roll_d20, Attribute, RuleBook, SkillCheckResult};
use crate::sheet::character::Character;
use rand::Rng;

/// All characters being edited, plus the last skill check shown
#[derive(Debug, Clone)]
pub struct Roster {
    characters: Vec<Character>,
    rules: RuleBook,
    max_attribute_total: i32,
    default_score: i32,
    /// Acting character index and its result
    last_check: Option<(usize, SkillCheckResult)>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::from_config(&SheetConfig::default(), RuleBook::standard())
    }
}

impl Roster {
    pub fn new(rules: RuleBook, max_attribute_total: i32, default_score: i32) -> Self {
        Self {
            characters: Vec::new(),
            rules,
            max_attribute_total,
            default_score,
            last_check: None,
        }
    }

    pub fn from_config(config: &SheetConfig, rules: RuleBook) -> Self {
        Self::new(rules, config.max_attribute_total, config.default_score)
    }

    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }

    pub fn max_attribute_total(&self) -> i32 {
        self.max_attribute_total
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn character(&self, index: usize) -> Result<&Character> {
        self.characters
            .get(index)
            .ok_or(SheetError::CharacterNotFound(index))
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Append a character with default scores, returning its index
    pub fn add_character(&mut self) -> usize {
        self.characters.push(Character::new(self.default_score));
        let index = self.characters.len() - 1;
        tracing::debug!("Added character {}", index + 1);
        index
    }

    /// Replace the whole collection (after a load)
    pub fn replace_all(&mut self, characters: Vec<Character>) {
        self.characters = characters;
        self.last_check = None;
    }

    /// Points left before the budget is reached (negative if loaded over budget)
    pub fn remaining_points(&self, index: usize) -> Result<i32> {
        Ok(self
            .max_attribute_total
            .saturating_sub(self.character(index)?.total()))
    }

    /// Change one attribute by `delta`, returning the new score
    ///
    /// Rejected, with no change, when the current total plus `delta` exceeds
    /// the budget. The budget is checked before the score is clamped at 0.
    pub fn adjust_attribute(
        &mut self,
        index: usize,
        attribute: Attribute,
        delta: i32,
    ) -> Result<i32> {
        let budget = self.max_attribute_total;
        let character = self
            .characters
            .get_mut(index)
            .ok_or(SheetError::CharacterNotFound(index))?;

        let total = character.total();
        if total.saturating_add(delta) > budget {
            tracing::warn!(
                "Rejected {} {:+} for character {}: total {} would exceed {}",
                attribute,
                delta,
                index + 1,
                total,
                budget
            );
            return Err(SheetError::BudgetExceeded {
                total,
                delta,
                budget,
            });
        }

        let score = character.score(attribute).saturating_add(delta).max(0);
        character.attributes.set(attribute, score);
        tracing::debug!("Character {} {} -> {}", index + 1, attribute, score);
        Ok(score)
    }

    /// Roll a skill check for one character
    ///
    /// Unknown skills are a no-op: `Ok(None)` and nothing is recorded.
    /// Otherwise the result replaces any previous one and is attributed to
    /// `index`.
    pub fn roll_skill_check<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        index: usize,
        skill_name: &str,
        dc: i32,
    ) -> Result<Option<SkillCheckResult>> {
        let character = self.character(index)?;
        let Some(skill) = self.rules.skill(skill_name) else {
            tracing::debug!("Ignoring check for unknown skill '{}'", skill_name);
            return Ok(None);
        };

        let roll = roll_d20(rng);
        let modifier = character.modifier(skill.attribute);
        let result = resolve_check(&skill.name, roll, modifier, dc);
        tracing::debug!(
            "Character {} {} check: {} {:+} = {} vs DC {} -> {}",
            index + 1,
            result.skill,
            roll,
            modifier,
            result.total,
            dc,
            result.outcome
        );

        self.last_check = Some((index, result.clone()));
        Ok(Some(result))
    }

    /// Last check result, if it belongs to this character
    pub fn last_check_for(&self, index: usize) -> Option<&SkillCheckResult> {
        match &self.last_check {
            Some((acting, result)) if *acting == index => Some(result),
            _ => None,
        }
    }
}
