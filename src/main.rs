//! shelfdb CLI entry point
//!
//! A minimal entrypoint: parse arguments, dispatch to the CLI module, print
//! failures to stderr, exit non-zero on error. All logic lives in `cli`.

use shelfdb::cli;
use shelfdb::observability::{Logger, Severity};

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        Logger::log_stderr(Severity::Error, "cli.failed", &[("error", &e.to_string())]);
        std::process::exit(1);
    }
}
