//! Character rules: attributes, classes, skills and checks

pub mod attributes;
pub mod check;
pub mod classes;
pub mod rulebook;
pub mod skills;
mod loader;

pub use attributes::{modifier, Attribute, AttributeScores};
pub use check::{resolve_check, roll_d20, Outcome, SkillCheckResult};
pub use classes::ClassRequirements;
pub use loader::{load_rulebook, parse_rulebook};
pub use rulebook::RuleBook;
pub use skills::SkillDefinition;
