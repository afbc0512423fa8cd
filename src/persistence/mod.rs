//! Remote persistence for the roster

pub mod client;

pub use client::CharacterGateway;
