//! # Lead Recorder
//!
//! The single data-writing operation of the funnel: take one fully
//! qualified lead, stamp the hand-off timestamp, and append one row to the
//! warehouse table. Stateless and single-shot; the only state that grows is
//! the remote table's row set.

use crate::{
    errors::LeadError,
    providers::storage::LeadSink,
    types::{LeadRecord, WriteOutcome},
};
use tracing::{error, info, warn};

/// Appends qualified leads to the warehouse table.
///
/// The sink is injected at construction time. A recorder built with
/// [`LeadRecorder::uninitialized`] reports `client not initialized` for
/// every call instead of attempting a network write, which makes that
/// failure mode constructible in tests.
#[derive(Debug, Clone)]
pub struct LeadRecorder {
    sink: Option<Box<dyn LeadSink>>,
}

impl LeadRecorder {
    /// Creates a recorder writing through the given sink.
    pub fn new(sink: Box<dyn LeadSink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// Creates a recorder whose warehouse client failed to construct.
    pub fn uninitialized() -> Self {
        Self { sink: None }
    }

    /// Writes exactly one lead row and returns a binary outcome.
    ///
    /// The record's content is not re-validated here; the conversational
    /// layer is trusted to have confirmed the required fields. A transient
    /// failure is reported once and never retried; whether to re-engage
    /// the user is the caller's decision.
    pub async fn write_lead(&self, record: LeadRecord) -> WriteOutcome {
        let Some(sink) = &self.sink else {
            warn!("Lead write refused: warehouse client is not initialized");
            return WriteOutcome::Failure(LeadError::ClientNotInitialized.to_string());
        };

        let row = record.into_row();
        match sink.insert_lead(&row).await {
            Ok(()) => {
                info!("New lead inserted: {}", row.full_name);
                WriteOutcome::Success(format!(
                    "Lead data successfully saved to {}.",
                    sink.name()
                ))
            }
            Err(e) => {
                error!("Lead insert failed: {e}");
                WriteOutcome::Failure(e.to_string())
            }
        }
    }
}
