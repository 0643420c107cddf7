use thiserror::Error;

/// Custom error types for the application.
#[derive(Error, Debug)]
pub enum LeadError {
    #[error("BigQuery client error: {0}")]
    BigQueryClient(#[from] gcp_bigquery_client::error::BQError),
    #[error("Failed to insert rows: {0}")]
    InsertRejected(String),
    #[error("client not initialized")]
    ClientNotInitialized,
    #[error("BigQuery project ID is missing")]
    MissingProjectId,
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}
