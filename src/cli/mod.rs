//! CLI module for doggo-discriminator - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for labeling, showing a
//! random dog, and summarizing saved labels.

pub mod commands;

pub use commands::Cli;
