//! REPL command parsing and execution

pub mod executor;
pub mod parser;

pub use executor::{CommandExecutor, ExecutionResult};
pub use parser::{parse_command, Command, HELP};
