//! # Tool Boundary
//!
//! The callable surface consumed by the external conversational agent.
//! Arguments arrive as JSON and results leave as a `{"status", "message"}`
//! mapping, so the host never touches this crate's internal types.

use crate::{
    errors::LeadError,
    recorder::LeadRecorder,
    types::{LeadRecord, WriteOutcome},
};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// A callable exposed to the conversational host.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;

    async fn execute(&self, input: Value) -> Result<Value, LeadError>;
}

/// The set of tools an agent definition carries, addressable by name.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn register<T>(&mut self, tool: T)
    where
        T: Tool + 'static,
    {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Writes a fully qualified sales lead into the BigQuery data warehouse.
///
/// The host should only call this after the user has confirmed all required
/// qualification fields; disqualified leads never reach this tool.
pub struct WriteLeadTool {
    recorder: Arc<LeadRecorder>,
}

impl WriteLeadTool {
    pub fn new(recorder: Arc<LeadRecorder>) -> Self {
        Self { recorder }
    }
}

#[async_trait]
impl Tool for WriteLeadTool {
    fn name(&self) -> &'static str {
        "write_lead_to_bigquery"
    }

    /// Parses the tool arguments into a [`LeadRecord`], performs the write,
    /// and maps the outcome onto the host contract.
    ///
    /// Malformed arguments (a missing required field, a non-object payload)
    /// are an invocation error and surface as `Err`; a completed write
    /// always produces the `{"status", "message"}` mapping, success or not.
    async fn execute(&self, input: Value) -> Result<Value, LeadError> {
        let record: LeadRecord = serde_json::from_value(input)?;
        let outcome = self.recorder.write_lead(record).await;
        Ok(outcome_to_response(&outcome))
    }
}

fn outcome_to_response(outcome: &WriteOutcome) -> Value {
    match outcome {
        WriteOutcome::Success(message) => json!({ "status": "success", "message": message }),
        WriteOutcome::Failure(reason) => json!({ "status": "error", "message": reason }),
    }
}
