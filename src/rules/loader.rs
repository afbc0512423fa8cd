//! Load a rulebook override from TOML
//!
//! ```toml
//! [[classes]]
//! name = "Barbarian"
//! minimums = { Strength = 14, Dexterity = 9 }
//!
//! [[skills]]
//! name = "Acrobatics"
//! attribute = "Dexterity"
//! ```
//!
//! A missing `classes` or `skills` section falls back to the built-in set.

use crate::core::error::{Result, SheetError};
use crate::rules::attributes::Attribute;
use crate::rules::classes::{standard_classes, ClassRequirements};
use crate::rules::rulebook::RuleBook;
use crate::rules::skills::{standard_skills, SkillDefinition};
use std::fs;
use std::path::Path;

/// Load a rulebook from a TOML file
pub fn load_rulebook(path: &Path) -> Result<RuleBook> {
    let content = fs::read_to_string(path)
        .map_err(|e| SheetError::Rulebook(format!("Failed to read {}: {}", path.display(), e)))?;
    let book = parse_rulebook(&content)?;
    tracing::info!(
        "Loaded rulebook from {} ({} classes, {} skills)",
        path.display(),
        book.classes().len(),
        book.skills().len()
    );
    Ok(book)
}

/// Parse a rulebook from TOML text
pub fn parse_rulebook(content: &str) -> Result<RuleBook> {
    let toml: toml::Value = content
        .parse()
        .map_err(|e| SheetError::Rulebook(format!("Invalid TOML: {}", e)))?;

    let classes = match toml.get("classes") {
        Some(value) => {
            let entries = value
                .as_array()
                .ok_or_else(|| SheetError::Rulebook("classes must be an array of tables".into()))?;
            entries.iter().map(parse_class).collect::<Result<Vec<_>>>()?
        }
        None => standard_classes(),
    };

    let skills = match toml.get("skills") {
        Some(value) => {
            let entries = value
                .as_array()
                .ok_or_else(|| SheetError::Rulebook("skills must be an array of tables".into()))?;
            entries.iter().map(parse_skill).collect::<Result<Vec<_>>>()?
        }
        None => standard_skills(),
    };

    check_unique(classes.iter().map(|c| c.name.as_str()), "class")?;
    check_unique(skills.iter().map(|s| s.name.as_str()), "skill")?;

    Ok(RuleBook::new(classes, skills))
}

fn parse_class(value: &toml::Value) -> Result<ClassRequirements> {
    let name = value
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| SheetError::Rulebook("class missing name".into()))?
        .to_string();

    let mut minimums = Vec::new();
    if let Some(table) = value.get("minimums").and_then(|v| v.as_table()) {
        for (attr_name, min) in table {
            let attribute: Attribute = attr_name.parse()?;
            let min = min.as_integer().ok_or_else(|| {
                SheetError::Rulebook(format!(
                    "{}: minimum for {} must be an integer",
                    name, attr_name
                ))
            })?;
            let min = i32::try_from(min).map_err(|_| {
                SheetError::Rulebook(format!("{}: minimum for {} out of range", name, attr_name))
            })?;
            minimums.push((attribute, min));
        }
    }
    minimums.sort_by_key(|&(a, _)| a);

    Ok(ClassRequirements::new(name, minimums))
}

fn parse_skill(value: &toml::Value) -> Result<SkillDefinition> {
    let name = value
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| SheetError::Rulebook("skill missing name".into()))?;

    let attribute: Attribute = value
        .get("attribute")
        .and_then(|v| v.as_str())
        .ok_or_else(|| SheetError::Rulebook(format!("{}: skill missing attribute", name)))?
        .parse()?;

    Ok(SkillDefinition::new(name, attribute))
}

fn check_unique<'a>(names: impl Iterator<Item = &'a str>, kind: &str) -> Result<()> {
    let mut seen: Vec<String> = Vec::new();
    for name in names {
        let lower = name.to_ascii_lowercase();
        if seen.contains(&lower) {
            return Err(SheetError::Rulebook(format!("Duplicate {} '{}'", kind, name)));
        }
        seen.push(lower);
    }
    Ok(())
}
