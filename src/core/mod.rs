pub mod config;
pub mod error;

pub use config::{ConfigOverrides, SheetConfig};
pub use error::{Result, SheetError};
