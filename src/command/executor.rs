//! Command execution against the roster

use crate::command::parser::{Command, HELP};
use crate::core::error::SheetError;
use crate::persistence::CharacterGateway;
use crate::sheet::Roster;
use crate::ui::display::{render_character, render_classes, render_skills};
use rand::Rng;

/// What the front-end should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    /// Roster changed or was asked for; re-render it
    Render,
    /// Print text, roster unchanged
    Info(String),
    /// The command was refused; roster unchanged
    Rejected(String),
    Quit,
}

/// Applies commands to a roster
///
/// `gateway` is `None` when running offline; save/load are then refused.
pub struct CommandExecutor<'a> {
    roster: &'a mut Roster,
    gateway: Option<&'a CharacterGateway>,
    color: bool,
}

impl<'a> CommandExecutor<'a> {
    pub fn new(
        roster: &'a mut Roster,
        gateway: Option<&'a CharacterGateway>,
        color: bool,
    ) -> Self {
        Self {
            roster,
            gateway,
            color,
        }
    }

    pub async fn execute<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        command: &Command,
    ) -> ExecutionResult {
        match command {
            Command::Add => {
                self.roster.add_character();
                ExecutionResult::Render
            }
            Command::Adjust {
                character,
                attribute,
                delta,
            } => match self.roster.adjust_attribute(*character, *attribute, *delta) {
                Ok(_) => self.show(*character),
                Err(e) => ExecutionResult::Rejected(self.describe(e)),
            },
            Command::Roll {
                character,
                skill,
                dc,
            } => match self.roster.roll_skill_check(rng, *character, skill, *dc) {
                Ok(Some(_)) => self.show(*character),
                Ok(None) => ExecutionResult::Rejected(format!("Unknown skill '{}'", skill)),
                Err(e) => ExecutionResult::Rejected(self.describe(e)),
            },
            Command::Show => ExecutionResult::Render,
            Command::Classes => ExecutionResult::Info(render_classes(self.roster.rules())),
            Command::Skills => ExecutionResult::Info(render_skills(self.roster.rules())),
            Command::Save => match self.gateway {
                Some(gateway) => {
                    if gateway.save(self.roster.characters()).await {
                        ExecutionResult::Info("Characters saved successfully".into())
                    } else {
                        ExecutionResult::Rejected("Error saving characters (see log)".into())
                    }
                }
                None => ExecutionResult::Rejected("Offline: nothing saved".into()),
            },
            Command::Load => match self.gateway {
                Some(gateway) => {
                    let characters = gateway.load().await;
                    self.roster.replace_all(characters);
                    ExecutionResult::Render
                }
                None => ExecutionResult::Rejected("Offline: nothing to load".into()),
            },
            Command::Help => ExecutionResult::Info(HELP.to_string()),
            Command::Quit => ExecutionResult::Quit,
        }
    }

    fn show(&self, index: usize) -> ExecutionResult {
        ExecutionResult::Info(render_character(self.roster, index, self.color))
    }

    fn describe(&self, error: SheetError) -> String {
        match error {
            SheetError::CharacterNotFound(index) => format!(
                "No character {} (have {})",
                index + 1,
                self.roster.len()
            ),
            SheetError::BudgetExceeded { total, budget, .. } => format!(
                "Attribute total {} is at the limit of {}",
                total, budget
            ),
            other => other.to_string(),
        }
    }
}
