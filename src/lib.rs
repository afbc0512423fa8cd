//! Character Sheet - point-buy character editor with remote persistence

pub mod command;
pub mod core;
pub mod persistence;
pub mod rules;
pub mod sheet;
pub mod ui;
