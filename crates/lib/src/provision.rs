//! # Resource Provisioning
//!
//! Idempotent create-if-missing operations for the warehouse dataset and
//! table. These run once per environment setup, out of band from the live
//! agent: there is no retry loop, and any failure other than not-found
//! propagates to the caller and aborts the run.

use crate::{errors::LeadError, providers::storage::WarehouseAdmin};
use gcp_bigquery_client::model::table_schema::TableSchema;
use tracing::info;

/// Which branch an ensure operation took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    AlreadyExists,
    Created,
}

/// Ensures the dataset exists, creating it in the given location when absent.
///
/// Existing datasets are left untouched, so re-running provisioning never
/// destroys or alters data.
pub async fn ensure_dataset(
    admin: &dyn WarehouseAdmin,
    dataset_id: &str,
    location: &str,
) -> Result<ProvisionOutcome, LeadError> {
    if admin.dataset_exists(dataset_id).await? {
        info!("Dataset {dataset_id} already exists.");
        return Ok(ProvisionOutcome::AlreadyExists);
    }

    admin.create_dataset(dataset_id, location).await?;
    info!("Created dataset {dataset_id} in location {location}.");
    Ok(ProvisionOutcome::Created)
}

/// Ensures the table exists with the given schema, creating it when absent.
pub async fn ensure_table(
    admin: &dyn WarehouseAdmin,
    dataset_id: &str,
    table_id: &str,
    schema: TableSchema,
) -> Result<ProvisionOutcome, LeadError> {
    if admin.table_exists(dataset_id, table_id).await? {
        info!("Table {dataset_id}.{table_id} already exists.");
        return Ok(ProvisionOutcome::AlreadyExists);
    }

    admin.create_table(dataset_id, table_id, schema).await?;
    info!("Created table {dataset_id}.{table_id}.");
    Ok(ProvisionOutcome::Created)
}
