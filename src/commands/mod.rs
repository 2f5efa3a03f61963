//! Command implementations for the registry CLI

pub mod common;
pub mod players;
pub mod roster;
pub mod summary;
pub mod teams;
