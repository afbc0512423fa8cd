//! Text rendering of character sheets
//!
//! Eligible classes are green and ineligible ones red when colour is on;
//! plain mode spells the eligibility out instead.

use crate::rules::{Attribute, RuleBook, SkillCheckResult};
use crate::sheet::Roster;
use crossterm::style::{style, Stylize};
use std::fmt::Write;

/// Render every character in the roster
pub fn render_roster(roster: &Roster, color: bool) -> String {
    if roster.is_empty() {
        return "No characters. Type 'add' to create one.\n".to_string();
    }

    let mut out = String::new();
    for index in 0..roster.len() {
        out.push_str(&render_character(roster, index, color));
        out.push('\n');
    }
    out
}

/// Render one character: attributes, classes and its last skill check
pub fn render_character(roster: &Roster, index: usize, color: bool) -> String {
    let mut out = String::new();
    let Ok(character) = roster.character(index) else {
        return out;
    };

    let _ = writeln!(
        out,
        "Character {}  (points {}/{})",
        index + 1,
        character.total(),
        roster.max_attribute_total()
    );

    for &attribute in Attribute::all() {
        let modifier = character.modifier(attribute);
        let _ = match character.attributes.get(attribute) {
            Some(score) => writeln!(out, "  {}: {} (Modifier: {})", attribute, score, modifier),
            None => writeln!(out, "  {}: missing (Modifier: {})", attribute, modifier),
        };
    }

    out.push_str("  Classes:");
    for (class, eligible) in roster.rules().eligibility(&character.attributes) {
        let label = match (color, eligible) {
            (true, true) => style(class.name.as_str()).green().to_string(),
            (true, false) => style(class.name.as_str()).red().to_string(),
            (false, true) => format!("{} (eligible)", class.name),
            (false, false) => format!("{} (not eligible)", class.name),
        };
        let _ = write!(out, " {}", label);
    }
    out.push('\n');

    if let Some(result) = roster.last_check_for(index) {
        out.push_str(&render_check(result));
    }

    out
}

/// The skill check block shown under the acting character
pub fn render_check(result: &SkillCheckResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Skill Check");
    let _ = writeln!(out, "    Skill: {}", result.skill);
    let _ = writeln!(out, "    Rolled: {}", result.roll);
    let _ = writeln!(out, "    Total: {} (modifier {:+})", result.total, result.modifier);
    let _ = writeln!(out, "    DC: {}", result.dc);
    let _ = writeln!(out, "    Result: {}", result.outcome);
    out
}

/// Class minimums, one class per line
pub fn render_classes(rules: &RuleBook) -> String {
    let mut out = String::new();
    for class in rules.classes() {
        let minimums: Vec<String> = class
            .minimums
            .iter()
            .map(|(attr, min)| format!("{} {}", attr.abbreviation(), min))
            .collect();
        let _ = writeln!(out, "{}: {}", class.name, minimums.join(", "));
    }
    out
}

/// Skills with their governing attribute
pub fn render_skills(rules: &RuleBook) -> String {
    let mut out = String::new();
    for skill in rules.skills() {
        let _ = writeln!(out, "{} ({})", skill.name, skill.attribute.abbreviation());
    }
    out
}
