//! # Environment Configuration
//!
//! Resolves the target Google Cloud project ID. The explicit
//! `GOOGLE_CLOUD_PROJECT` variable wins; otherwise the application default
//! credentials file is consulted, mirroring the ambient credential
//! discovery available in Cloud Shell environments.

use crate::{
    constants::{CREDENTIALS_ENV_VAR, PROJECT_ID_ENV_VAR},
    errors::LeadError,
};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// The subset of an application default credentials file we care about.
#[derive(Deserialize)]
struct CredentialsFile {
    project_id: Option<String>,
    quota_project_id: Option<String>,
}

/// Resolves the project ID from the environment, falling back to the
/// application default credentials file.
pub fn resolve_project_id() -> Result<String, LeadError> {
    if let Ok(id) = env::var(PROJECT_ID_ENV_VAR) {
        if !id.is_empty() {
            return Ok(id);
        }
    }

    for path in credential_file_candidates() {
        if let Some(id) = project_id_from_credentials(&path) {
            return Ok(id);
        }
    }

    Err(LeadError::MissingProjectId)
}

/// Candidate credential files, in precedence order: the explicit
/// `GOOGLE_APPLICATION_CREDENTIALS` path, then the gcloud well-known path.
fn credential_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(path) = env::var(CREDENTIALS_ENV_VAR) {
        if !path.is_empty() {
            candidates.push(PathBuf::from(path));
        }
    }
    if let Ok(home) = env::var("HOME") {
        candidates
            .push(Path::new(&home).join(".config/gcloud/application_default_credentials.json"));
    }
    candidates
}

fn project_id_from_credentials(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let credentials: CredentialsFile = serde_json::from_str(&content).ok()?;
    credentials
        .project_id
        .or(credentials.quota_project_id)
        .filter(|id| !id.is_empty())
}
