// Durable record of the group assignment.
//
// Writes are full overwrites of one text resource, applied by a single
// worker task in the exact order they were enqueued. The worker replaces the
// chained-continuation scheme a UI framework would use with an explicit
// single-consumer queue, which makes the ordering guarantee structurally
// obvious.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, warn};

use crate::draw::team::Team;
use crate::storage::Storage;

enum WriteJob {
    /// Overwrite the backing resource with this payload.
    Write(String),
    /// Queue marker: acknowledged once every earlier job has been attempted.
    Flush(oneshot::Sender<()>),
}

/// Strictly ordered asynchronous persistence for drawing results.
pub struct ResultLog {
    storage: Arc<dyn Storage>,
    file_name: String,
    tx: mpsc::UnboundedSender<WriteJob>,
}

impl ResultLog {
    /// Create the log and spawn its write worker. Must be called from within
    /// a tokio runtime.
    pub fn new(storage: Arc<dyn Storage>, file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(write_worker(
            Arc::clone(&storage),
            file_name.clone(),
            rx,
        ));

        ResultLog {
            storage,
            file_name,
            tx,
        }
    }

    /// Schedule a full overwrite of the backing resource with `text`.
    ///
    /// Never blocks. Writes are applied in enqueue order; a failed write is
    /// logged and does not skip or poison later writes.
    pub fn enqueue(&self, text: String) {
        if self.tx.send(WriteJob::Write(text)).is_err() {
            warn!("result log worker is gone, dropping write");
        }
    }

    /// Resolve once every write enqueued before this call has been attempted
    /// (successfully or not). Used at shutdown and by tests.
    pub async fn flush(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.tx.send(WriteJob::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.await;
        }
    }

    /// Read the backing resource and resolve its lines against `all_teams`,
    /// in file order.
    ///
    /// Lines are trimmed; blank lines and group headers (upper-cased line
    /// starts with `GROUP`) are skipped; lines naming no known team are
    /// silently dropped. Headers carry no placement information on the way
    /// back in: the caller re-derives grouping by first-fit over the
    /// returned order. A missing resource yields an empty list; a read
    /// failure is logged and also yields an empty list.
    pub fn load(&self, all_teams: &[Team]) -> Vec<Team> {
        if !self.storage.exists(&self.file_name) {
            return Vec::new();
        }

        let text = match self.storage.read_to_string(&self.file_name) {
            Ok(text) => text,
            Err(e) => {
                error!("failed to read last drawings results: {e}");
                return Vec::new();
            }
        };

        let mut resolved = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.to_uppercase().starts_with("GROUP") {
                continue;
            }
            match all_teams.iter().find(|t| t.full_name == line) {
                Some(team) => resolved.push(team.clone()),
                None => debug!("skipping unresolvable results line: {line}"),
            }
        }
        resolved
    }
}

async fn write_worker(
    storage: Arc<dyn Storage>,
    file_name: String,
    mut rx: mpsc::UnboundedReceiver<WriteJob>,
) {
    while let Some(job) = rx.recv().await {
        match job {
            WriteJob::Write(text) => {
                if let Err(e) = storage.write(&file_name, &text) {
                    error!("failed to write results to {file_name}: {e}");
                }
            }
            WriteJob::Flush(ack) => {
                // Receiver may have given up waiting; that's fine.
                let _ = ack.send(());
            }
        }
    }
}
