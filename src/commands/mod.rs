//! Command Handlers Module
//!
//! This module contains handlers for all CLI subcommands.

pub mod changer;
pub mod tape;
