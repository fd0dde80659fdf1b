//! CLI command implementations
//!
//! Each command drives the table engine against a `users` table on the local
//! filesystem store and prints results as pretty JSON. Structured log events
//! go to stdout; the engine itself does not log.

use std::collections::BTreeMap;

use serde_json::{json, Value};

use crate::kv::LocalStore;
use crate::observability::{Logger, Severity};
use crate::schema::{FieldDef, Schema};
use crate::table::TableStore;

use super::args::{Cli, Command};
use super::errors::CliResult;

const USERS_TABLE: &str = "users";

/// The demo record type: age in human range, optional profile URL
fn user_schema() -> Schema {
    let mut fields = BTreeMap::new();
    fields.insert("age".into(), FieldDef::required_int_range(0, 120));
    fields.insert("link".into(), FieldDef::optional_url());
    Schema::new("user", fields)
}

/// Parse arguments and dispatch to the selected command
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let store = TableStore::new(user_schema(), LocalStore::new(&cli.data_dir));

    match cli.command {
        Command::Add { age, link } => add(&store, age, link).await,
        Command::List { min_age } => list(&store, min_age).await,
        Command::Seed => seed(&store).await,
        Command::BumpAges => bump_ages(&store).await,
        Command::Clear => clear(&store).await,
    }
}

async fn add(store: &TableStore<LocalStore>, age: i64, link: Option<String>) -> CliResult<()> {
    let record = match link {
        Some(link) => json!({ "age": age, "link": link }),
        None => json!({ "age": age }),
    };

    let written = store.write(USERS_TABLE, record).await?;
    Logger::log(
        Severity::Info,
        "table.write",
        &[("table", USERS_TABLE), ("age", &age.to_string())],
    );
    print_value(&written)
}

async fn list(store: &TableStore<LocalStore>, min_age: Option<i64>) -> CliResult<()> {
    let records = match min_age {
        Some(min) => {
            store
                .read_where(USERS_TABLE, |r| {
                    r.get("age").and_then(Value::as_i64).is_some_and(|a| a >= min)
                })
                .await?
        }
        None => store.read_all(USERS_TABLE).await?,
    };

    Logger::log(
        Severity::Info,
        "table.read",
        &[("table", USERS_TABLE), ("count", &records.len().to_string())],
    );
    print_value(&Value::Array(records))
}

async fn seed(store: &TableStore<LocalStore>) -> CliResult<()> {
    let users = vec![
        json!({ "age": 30, "link": "https://example.com/a" }),
        json!({ "age": 40 }),
    ];

    let written = store.write_all(USERS_TABLE, users).await?;
    Logger::log(
        Severity::Info,
        "table.write_all",
        &[("table", USERS_TABLE), ("count", &written.len().to_string())],
    );
    print_value(&Value::Array(written))
}

async fn bump_ages(store: &TableStore<LocalStore>) -> CliResult<()> {
    let updated = store
        .update(USERS_TABLE, |mut record| {
            if let Some(age) = record.get("age").and_then(Value::as_i64) {
                record["age"] = json!(age + 1);
            }
            record
        })
        .await?;

    Logger::log(
        Severity::Info,
        "table.update",
        &[("table", USERS_TABLE), ("count", &updated.len().to_string())],
    );
    print_value(&Value::Array(updated))
}

async fn clear(store: &TableStore<LocalStore>) -> CliResult<()> {
    store.delete_all(USERS_TABLE).await?;
    Logger::log(Severity::Info, "table.delete_all", &[("table", USERS_TABLE)]);
    Ok(())
}

fn print_value(value: &Value) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
