//! Terminal presentation of the roster

pub mod display;

pub use display::{render_character, render_check, render_classes, render_roster, render_skills};
