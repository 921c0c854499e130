// Drawings engine entry point.
//
// Headless inspector for the drawing state: loads configuration and the team
// list, replays the persisted results file, and prints the reconstructed
// group assignment. The presentation layer drives the same session API when
// a drawing is actually being run.

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{debug, info};

use drawings::config;
use drawings::draw::session::DrawSession;
use drawings::draw::team::{StorageBackedTeamList, TeamList};
use drawings::result_log::ResultLog;
use drawings::storage::{DirectoryStorage, Storage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (stderr; stdout carries the assignment)
    init_tracing()?;

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: {} groups of {}",
        config.drawings.group_count, config.drawings.teams_per_group
    );

    // 3. Open storage
    let storage: Arc<dyn Storage> = Arc::new(
        DirectoryStorage::new(&config.storage.directory)
            .with_context(|| format!("failed to open storage at {}", config.storage.directory))?,
    );

    // 4. Load the team list
    let team_list = StorageBackedTeamList::load(storage.as_ref(), &config.storage.teams_file)
        .context("failed to load team list")?;
    if team_list.teams().is_empty() {
        info!("no teams available, the drawing is inert");
    }

    // 5. Build the session and replay persisted results
    let result_log = ResultLog::new(Arc::clone(&storage), config.storage.results_file.as_str());
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut session = DrawSession::new(
        &config.drawings,
        Box::new(team_list),
        result_log,
        event_tx,
    );
    session.reset(true);

    // 6. Print the reconstructed assignment
    print!("{}", session.assignment().serialize());
    info!(
        "{} teams placed, {} still in the pool",
        session.assignment().team_count(),
        session.pool().len()
    );

    // 7. Drain events and wait for any outstanding log writes
    while let Ok(event) = event_rx.try_recv() {
        debug!("event: {event:?}");
    }
    session.flush().await;

    Ok(())
}

/// Initialize tracing to stderr so stdout stays clean for the assignment.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("drawings=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
