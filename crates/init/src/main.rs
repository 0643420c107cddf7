//! # init-bigquery
//!
//! One-time provisioning for the lead funnel: ensures the `lead_data`
//! dataset and the `sql_leads` table exist before the agent goes live.
//! Re-running is safe; existing resources are left untouched. Any failure
//! other than a missing resource aborts the run with a non-zero exit
//! status.

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use leadbot::config::resolve_project_id;
use leadbot::constants::{
    DEFAULT_DATASET_LOCATION, LEAD_DATASET_ID, LEAD_TABLE_ID, PROJECT_ID_ENV_VAR,
};
use leadbot::providers::BigQueryProvider;
use leadbot::schema::lead_table_schema;
use leadbot::{ensure_dataset, ensure_table};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Provision the BigQuery dataset and table for the lead funnel", long_about = None)]
struct Cli {
    /// The Google Cloud project to provision. Falls back to application
    /// default credentials discovery when unset.
    #[arg(long, env = PROJECT_ID_ENV_VAR)]
    project_id: Option<String>,

    /// Storage location for the dataset (e.g., "asia-southeast2" for Jakarta).
    #[arg(long, default_value = DEFAULT_DATASET_LOCATION)]
    location: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let project_id = match cli.project_id {
        Some(id) => id,
        None => resolve_project_id()?,
    };

    info!("Initializing BigQuery for project: {project_id}");
    let provider = BigQueryProvider::new(project_id).await?;

    ensure_dataset(&provider, LEAD_DATASET_ID, &cli.location).await?;
    ensure_table(
        &provider,
        LEAD_DATASET_ID,
        LEAD_TABLE_ID,
        lead_table_schema(),
    )
    .await?;

    info!("BigQuery resources are ready.");
    Ok(())
}
