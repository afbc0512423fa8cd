//! Character sheets and the roster being edited

pub mod character;
pub mod roster;

pub use character::Character;
pub use roster::Roster;
