//! CLI module - Command-line interface for pricedex
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// pricedex - Product catalog seeder for the price-checker database
#[derive(Parser)]
#[command(name = "pricedex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Expand the embedded catalog and insert it into the database
    Seed {
        /// Validate and report without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Show per-category row counts against the expected expansion
    #[command(alias = "check")]
    Verify,

    /// List catalog rows
    #[command(alias = "ls", alias = "l")]
    List {
        /// Optional category to filter (cpu, gpu, ssd, ram, motherboard, psu, cooler, case)
        category: Option<String>,
    },

    /// Search catalog rows by name
    #[command(alias = "s")]
    Search {
        /// Search query
        #[arg(required = true)]
        query: Vec<String>,

        /// Filter by category
        #[arg(long)]
        category: Option<String>,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
