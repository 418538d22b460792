//! Command-line inspection surface for feed trees.

pub mod cli;
pub mod commands;
pub mod logging;
