//! File ingestion scheduling.
//!
//! Policy for a second upload while one is still loading: cancel-and-replace.
//! Each upload takes a ticket; only the result of the newest ticket is
//! applied, older results are dropped when they arrive. `loading` stays true
//! until the newest ticket finishes.

use super::state::SessionStore;
use crate::data::{IngestLimits, ParseError, ParseResult, check_extension, ingest_with_limits};
use crate::types::Dataset;
use parking_lot::RwLock;
use std::sync::Arc;
use std::thread::JoinHandle;

/// Session store shared between the event loop and ingestion threads
pub type SharedSession = Arc<RwLock<SessionStore>>;

pub fn shared(store: SessionStore) -> SharedSession {
    Arc::new(RwLock::new(store))
}

/// Identifies one started ingestion
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IngestTicket(u64);

/// What happened to a finished ingestion
#[derive(Clone, Debug, PartialEq)]
pub enum IngestOutcome {
    /// The dataset was loaded into the session
    Applied,
    /// Parsing failed; the error is now the session's error text
    Failed(ParseError),
    /// A newer upload replaced this one; its result was discarded
    Superseded,
}

impl SessionStore {
    pub fn ingest_limits(&self) -> IngestLimits {
        IngestLimits::from(&self.settings)
    }

    /// Pre-flight check of an upload's name. A rejected name is reported and
    /// leaves any in-flight ingestion alone.
    pub fn accept_upload(&mut self, file_name: &str) -> ParseResult<()> {
        check_extension(file_name).inspect_err(|err| self.report(err))
    }

    /// Start an ingestion, superseding any in flight
    pub fn begin_ingestion(&mut self, file_name: &str) -> IngestTicket {
        if self.state.loading {
            tracing::debug!(ticket = self.latest_ticket, "Superseding in-flight ingestion");
        }
        self.latest_ticket += 1;
        self.state.loading = true;
        tracing::debug!(ticket = self.latest_ticket, file = file_name, "Ingestion started");
        IngestTicket(self.latest_ticket)
    }

    pub fn is_current(&self, ticket: IngestTicket) -> bool {
        self.state.loading && ticket.0 == self.latest_ticket
    }

    /// Apply an ingestion result if its ticket is still current
    pub fn finish_ingestion(
        &mut self,
        ticket: IngestTicket,
        result: ParseResult<Dataset>,
    ) -> IngestOutcome {
        if !self.is_current(ticket) {
            tracing::warn!(
                ticket = ticket.0,
                latest = self.latest_ticket,
                "Dropping stale ingestion result"
            );
            return IngestOutcome::Superseded;
        }

        self.state.loading = false;
        match result {
            Ok(dataset) => {
                self.load_dataset(dataset);
                IngestOutcome::Applied
            }
            Err(err) => {
                self.report(&err);
                IngestOutcome::Failed(err)
            }
        }
    }

    /// Synchronous upload: check, parse and apply in one call
    pub fn load_file(&mut self, file_name: &str, bytes: &[u8]) -> IngestOutcome {
        if let Err(err) = self.accept_upload(file_name) {
            return IngestOutcome::Failed(err);
        }
        let ticket = self.begin_ingestion(file_name);
        let result = ingest_with_limits(file_name, bytes, self.ingest_limits());
        self.finish_ingestion(ticket, result)
    }
}

/// Parse an upload on a background thread.
///
/// `loading` is set before this returns; the thread applies its result only
/// if no newer upload started meanwhile. A wrong extension is reported
/// immediately and no thread is started.
pub fn spawn_ingestion(
    session: &SharedSession,
    file_name: impl Into<String>,
    bytes: Vec<u8>,
) -> ParseResult<JoinHandle<IngestOutcome>> {
    let file_name = file_name.into();
    let (ticket, limits) = {
        let mut store = session.write();
        store.accept_upload(&file_name)?;
        (store.begin_ingestion(&file_name), store.ingest_limits())
    };

    let session = Arc::clone(session);
    Ok(std::thread::spawn(move || {
        let result = ingest_with_limits(&file_name, &bytes, limits);
        session.write().finish_ingestion(ticket, result)
    }))
}
