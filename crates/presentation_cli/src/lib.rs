//! SMAPP CLI
//!
//! Argument parsing and command execution for the `smapp-cli` binary.

pub mod cli;
pub mod commands;
