//! # WhatsApp Lead Recorder
//!
//! This crate persists sales-qualified leads gathered by a WhatsApp
//! conversational agent into a Google BigQuery table. It provides the fixed
//! warehouse schema, an idempotent provisioner for the dataset and table,
//! and the single `write_lead_to_bigquery` tool the external dialogue agent
//! invokes once all qualification fields are collected.

pub mod agent;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prompts;
pub mod providers;
pub mod provision;
pub mod recorder;
pub mod schema;
pub mod tool;
pub mod types;

pub use errors::LeadError;
pub use provision::{ensure_dataset, ensure_table, ProvisionOutcome};
pub use recorder::LeadRecorder;
pub use types::{LeadRecord, LeadRow, WriteOutcome};
