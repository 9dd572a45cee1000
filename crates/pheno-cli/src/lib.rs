//! CLI library components for the phenotype manifest reshaper.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod types;
