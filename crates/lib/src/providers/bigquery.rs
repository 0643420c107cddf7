use crate::{
    constants::{LEAD_DATASET_ID, LEAD_TABLE_ID},
    errors::LeadError,
    providers::storage::{LeadSink, WarehouseAdmin},
    types::LeadRow,
};
use async_trait::async_trait;
use gcp_bigquery_client::{
    model::{
        dataset::Dataset, table::Table,
        table_data_insert_all_request::TableDataInsertAllRequest, table_schema::TableSchema,
    },
    Client,
};
use std::fmt::{self, Debug};
use tracing::info;

/// A provider for interacting with Google BigQuery.
///
/// Holds the authenticated client and the target project ID. Cloning shares
/// the underlying connection state, so a single provider can back concurrent
/// recorder calls.
#[derive(Clone)]
pub struct BigQueryProvider {
    client: Client,
    project_id: String,
}

impl BigQueryProvider {
    /// Creates a new `BigQueryProvider` from application default credentials.
    pub async fn new(project_id: String) -> Result<Self, LeadError> {
        let client = Client::from_application_default_credentials().await?;
        Ok(Self { client, project_id })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

impl Debug for BigQueryProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigQueryProvider")
            .field("project_id", &self.project_id)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl LeadSink for BigQueryProvider {
    fn name(&self) -> &str {
        "BigQuery"
    }

    /// Submits one row through the streaming-insert API and surfaces any
    /// per-row errors verbatim.
    async fn insert_lead(&self, row: &LeadRow) -> Result<(), LeadError> {
        let mut request = TableDataInsertAllRequest::new();
        request.add_row(None, row)?;

        info!(
            "--> Inserting lead row into {}.{LEAD_DATASET_ID}.{LEAD_TABLE_ID}",
            self.project_id
        );
        let response = self
            .client
            .tabledata()
            .insert_all(&self.project_id, LEAD_DATASET_ID, LEAD_TABLE_ID, request)
            .await?;

        if let Some(errors) = response.insert_errors {
            if !errors.is_empty() {
                return Err(LeadError::InsertRejected(serde_json::to_string(&errors)?));
            }
        }

        Ok(())
    }
}

#[async_trait]
impl WarehouseAdmin for BigQueryProvider {
    async fn dataset_exists(&self, dataset_id: &str) -> Result<bool, LeadError> {
        Ok(self
            .client
            .dataset()
            .exists(&self.project_id, dataset_id)
            .await?)
    }

    async fn create_dataset(&self, dataset_id: &str, location: &str) -> Result<(), LeadError> {
        let dataset = Dataset::new(&self.project_id, dataset_id).location(location);
        self.client.dataset().create(dataset).await?;
        Ok(())
    }

    async fn table_exists(&self, dataset_id: &str, table_id: &str) -> Result<bool, LeadError> {
        Ok(self
            .client
            .table()
            .exists(&self.project_id, dataset_id, table_id)
            .await?)
    }

    async fn create_table(
        &self,
        dataset_id: &str,
        table_id: &str,
        schema: TableSchema,
    ) -> Result<(), LeadError> {
        let table = Table::new(&self.project_id, dataset_id, table_id, schema);
        self.client.table().create(table).await?;
        Ok(())
    }
}
