//! CLI module for shelfdb
//!
//! A small driver over a `users` table (age 0-120, optional URL link) backed
//! by the local filesystem store:
//! - add: write one user
//! - list: read all users, optionally filtered by minimum age
//! - seed: bulk-write sample users
//! - bump-ages: increment every user's age by one
//! - clear: delete the table

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
