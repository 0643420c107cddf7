use crate::{errors::LeadError, types::LeadRow};
use async_trait::async_trait;
use dyn_clone::DynClone;
use gcp_bigquery_client::model::table_schema::TableSchema;
use std::fmt::Debug;

/// A destination for qualified lead rows.
///
/// This trait defines the single data-plane operation the recorder needs:
/// a best-effort append of one row. Implementations report row-level
/// rejections and transport faults as errors; they never retry.
#[async_trait]
pub trait LeadSink: Send + Sync + DynClone + Debug {
    /// Returns the name of the sink (e.g., "BigQuery").
    fn name(&self) -> &str;

    /// Appends exactly one row to the lead table.
    ///
    /// Returns `Ok(())` only when the warehouse reported zero per-row
    /// errors for the submitted row.
    async fn insert_lead(&self, row: &LeadRow) -> Result<(), LeadError>;
}

dyn_clone::clone_trait_object!(LeadSink);

/// Control-plane operations used to provision the warehouse objects.
///
/// Kept separate from [`LeadSink`] because provisioning runs once per
/// environment, out of band, while the sink is a live-path dependency.
#[async_trait]
pub trait WarehouseAdmin: Send + Sync + Debug {
    async fn dataset_exists(&self, dataset_id: &str) -> Result<bool, LeadError>;

    async fn create_dataset(&self, dataset_id: &str, location: &str) -> Result<(), LeadError>;

    async fn table_exists(&self, dataset_id: &str, table_id: &str) -> Result<bool, LeadError>;

    async fn create_table(
        &self,
        dataset_id: &str,
        table_id: &str,
        schema: TableSchema,
    ) -> Result<(), LeadError>;
}
