//! # Shared Constants
//!
//! This module provides a centralized location for constants that are shared
//! between the library and the provisioning binary. Using these constants
//! helps to avoid "magic strings" and ensures the recorder and the
//! provisioner always target the same warehouse objects.

/// The BigQuery dataset that holds all lead data.
pub const LEAD_DATASET_ID: &str = "lead_data";

/// The BigQuery table that sales-qualified leads are appended to.
pub const LEAD_TABLE_ID: &str = "sql_leads";

/// The default storage location for the lead dataset.
pub const DEFAULT_DATASET_LOCATION: &str = "US";

/// The environment variable holding the target Google Cloud project ID.
pub const PROJECT_ID_ENV_VAR: &str = "GOOGLE_CLOUD_PROJECT";

/// The environment variable pointing at an application default credentials file.
pub const CREDENTIALS_ENV_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";
