//! CLI argument definitions using clap
//!
//! Commands:
//! - shelfdb add --age <n> [--link <url>]
//! - shelfdb list [--min-age <n>]
//! - shelfdb seed
//! - shelfdb bump-ages
//! - shelfdb clear

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shelfdb - a schema-validated table store over a key-value backend
#[derive(Parser, Debug)]
#[command(name = "shelfdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the table files
    #[arg(long, global = true, default_value = "./shelfdb-data")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a single user record
    Add {
        /// Age in years (0-120)
        #[arg(long)]
        age: i64,

        /// Optional profile URL
        #[arg(long)]
        link: Option<String>,
    },

    /// Read all users, optionally filtered by minimum age
    List {
        /// Only show users at least this old
        #[arg(long)]
        min_age: Option<i64>,
    },

    /// Bulk-write a set of sample users
    Seed,

    /// Increment every user's age by one
    BumpAges,

    /// Delete all users
    Clear,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
