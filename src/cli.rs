//! Command-line surface: argument parsing and subcommand handlers.

pub mod commands;
pub mod parser;
