//! Parse REPL input into commands
//!
//! Character numbers are 1-based as displayed; the parsed command carries
//! the 0-based index.

use crate::core::error::{Result, SheetError};
use crate::rules::Attribute;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a character with default scores
    Add,
    /// Change one attribute by a delta
    Adjust {
        character: usize,
        attribute: Attribute,
        delta: i32,
    },
    /// Roll a skill check
    Roll {
        character: usize,
        skill: String,
        dc: i32,
    },
    Show,
    Classes,
    Skills,
    Save,
    Load,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  add / new                  - Add a character (all attributes 10)
  inc <n> <attr> / + <n> <attr>
                             - Raise an attribute by 1
  dec <n> <attr> / - <n> <attr>
                             - Lower an attribute by 1
  roll <n> <skill> [dc]      - Skill check (DC defaults to 0)
  show / s                   - Show all characters
  classes                    - List class requirements
  skills                     - List skills
  save                       - Save characters to the server
  load / reload              - Reload characters from the server
  help / h                   - Show this help
  quit / q                   - Exit";

/// Parse one line; empty input is `Ok(None)`
pub fn parse_command(input: &str) -> Result<Option<Command>> {
    let mut words = input.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" | "new" => Command::Add,
        "inc" | "+" => parse_adjust(&args, 1)?,
        "dec" | "-" => parse_adjust(&args, -1)?,
        "roll" | "r" => parse_roll(&args)?,
        "show" | "s" => Command::Show,
        "classes" => Command::Classes,
        "skills" => Command::Skills,
        "save" => Command::Save,
        "load" | "reload" => Command::Load,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => {
            return Err(SheetError::InvalidCommand(format!(
                "unknown command '{}' (try 'help')",
                other
            )))
        }
    };

    Ok(Some(command))
}

fn parse_adjust(args: &[&str], delta: i32) -> Result<Command> {
    let [number, attribute] = args else {
        return Err(SheetError::InvalidCommand(
            "usage: inc|dec <character> <attribute>".into(),
        ));
    };

    Ok(Command::Adjust {
        character: parse_character_number(number)?,
        attribute: attribute.parse()?,
        delta,
    })
}

fn parse_roll(args: &[&str]) -> Result<Command> {
    let Some((number, rest)) = args.split_first() else {
        return Err(SheetError::InvalidCommand(
            "usage: roll <character> <skill> [dc]".into(),
        ));
    };
    let character = parse_character_number(number)?;

    // A trailing integer is the DC; an omitted DC counts as 0
    let (skill_words, dc) = match rest.split_last() {
        Some((last, init)) => match last.parse::<i32>() {
            Ok(dc) => (init, dc),
            Err(_) => (rest, 0),
        },
        None => (rest, 0),
    };

    if skill_words.is_empty() {
        return Err(SheetError::InvalidCommand(
            "usage: roll <character> <skill> [dc]".into(),
        ));
    }

    Ok(Command::Roll {
        character,
        skill: skill_words.join(" "),
        dc,
    })
}

fn parse_character_number(s: &str) -> Result<usize> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(SheetError::InvalidCommand(format!(
            "'{}' is not a character number",
            s
        ))),
    }
}
