use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use student_directory::schema::demo_schema;
use student_directory::seed::seed_demo_data;
use student_directory::shell;
use student_directory::Store;

const DB_PATH: &str = "hw.db";

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = Store::open(DB_PATH).context("could not open the database")?;
    info!(path = DB_PATH, "connected to database");

    // close on every exit path, including failures during setup or the loop
    let outcome = run_session(&store);
    store.close()?;
    info!("database closed");
    outcome
}

fn run_session(store: &Store) -> anyhow::Result<()> {
    store.initialize(&demo_schema())?;
    // seeding runs on every start; a persistent database file accumulates
    // duplicate rows across runs
    seed_demo_data(store)?;

    let stdin = io::stdin();
    shell::run(store, stdin.lock(), io::stdout())?;
    Ok(())
}
