use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Character not found: {0}")]
    CharacterNotFound(usize),

    #[error("Attribute budget exceeded: total {total} + {delta} > {budget}")]
    BudgetExceeded { total: i32, delta: i32, budget: i32 },

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Rulebook error: {0}")]
    Rulebook(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl From<reqwest::Error> for SheetError {
    fn from(e: reqwest::Error) -> Self {
        SheetError::Transport(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SheetError>;
