#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared mock providers for exercising the recorder and the provisioner
//! without a live warehouse.

use async_trait::async_trait;
use dotenvy::dotenv;
use gcp_bigquery_client::model::table_schema::TableSchema;
use leadbot::errors::LeadError;
use leadbot::providers::storage::{LeadSink, WarehouseAdmin};
use leadbot::types::LeadRow;
use std::collections::HashSet;
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        tracing_subscriber::fmt::init();
    });
}

// --- Mock Lead Sink ---

/// How the mock sink responds to inserts.
#[derive(Clone, Debug)]
enum MockSinkMode {
    Accept,
    Reject(String),
}

/// A sink that records every submitted row and replays a scripted result.
#[derive(Clone, Debug)]
pub struct MockLeadSink {
    mode: MockSinkMode,
    rows: Arc<RwLock<Vec<LeadRow>>>,
    calls: Arc<RwLock<usize>>,
}

impl MockLeadSink {
    /// A sink that accepts every row.
    pub fn accepting() -> Self {
        Self {
            mode: MockSinkMode::Accept,
            rows: Arc::new(RwLock::new(Vec::new())),
            calls: Arc::new(RwLock::new(0)),
        }
    }

    /// A sink that rejects every row with the given per-row error list.
    pub fn rejecting(errors: impl Into<String>) -> Self {
        Self {
            mode: MockSinkMode::Reject(errors.into()),
            rows: Arc::new(RwLock::new(Vec::new())),
            calls: Arc::new(RwLock::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.read().unwrap()
    }

    pub fn rows(&self) -> Vec<LeadRow> {
        self.rows.read().unwrap().clone()
    }
}

#[async_trait]
impl LeadSink for MockLeadSink {
    fn name(&self) -> &str {
        "BigQuery"
    }

    async fn insert_lead(&self, row: &LeadRow) -> Result<(), LeadError> {
        *self.calls.write().unwrap() += 1;
        match &self.mode {
            MockSinkMode::Accept => {
                self.rows.write().unwrap().push(row.clone());
                Ok(())
            }
            MockSinkMode::Reject(errors) => Err(LeadError::InsertRejected(errors.clone())),
        }
    }
}

// --- Mock Warehouse Admin ---

/// An in-memory control plane tracking which objects exist and how many
/// create calls were issued.
#[derive(Debug, Default)]
pub struct MockWarehouseAdmin {
    datasets: RwLock<HashSet<String>>,
    tables: RwLock<HashSet<String>>,
    dataset_creates: RwLock<usize>,
    table_creates: RwLock<usize>,
}

impl MockWarehouseAdmin {
    pub fn new() -> Self {
        Self::default()
    }

    /// An admin whose project already contains the given dataset.
    pub fn with_dataset(dataset_id: &str) -> Self {
        let admin = Self::default();
        admin
            .datasets
            .write()
            .unwrap()
            .insert(dataset_id.to_string());
        admin
    }

    pub fn dataset_create_count(&self) -> usize {
        *self.dataset_creates.read().unwrap()
    }

    pub fn table_create_count(&self) -> usize {
        *self.table_creates.read().unwrap()
    }
}

#[async_trait]
impl WarehouseAdmin for MockWarehouseAdmin {
    async fn dataset_exists(&self, dataset_id: &str) -> Result<bool, LeadError> {
        Ok(self.datasets.read().unwrap().contains(dataset_id))
    }

    async fn create_dataset(&self, dataset_id: &str, _location: &str) -> Result<(), LeadError> {
        *self.dataset_creates.write().unwrap() += 1;
        self.datasets
            .write()
            .unwrap()
            .insert(dataset_id.to_string());
        Ok(())
    }

    async fn table_exists(&self, dataset_id: &str, table_id: &str) -> Result<bool, LeadError> {
        Ok(self
            .tables
            .read()
            .unwrap()
            .contains(&format!("{dataset_id}.{table_id}")))
    }

    async fn create_table(
        &self,
        dataset_id: &str,
        table_id: &str,
        _schema: TableSchema,
    ) -> Result<(), LeadError> {
        *self.table_creates.write().unwrap() += 1;
        self.tables
            .write()
            .unwrap()
            .insert(format!("{dataset_id}.{table_id}"));
        Ok(())
    }
}
