use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A fully qualified sales lead, as gathered by the conversational layer.
///
/// This is the typed form of the `write_lead_to_bigquery` tool arguments.
/// The caller is trusted to have validated the content of the required
/// fields; no semantic validation happens here. Optional fields carry the
/// funnel's documented defaults so a minimal payload deserializes into a
/// complete record.
#[derive(Debug, Clone, Deserialize)]
pub struct LeadRecord {
    pub full_name: String,
    pub phone_number: String,
    /// The core problem or pain point (BANT - Need).
    pub specific_need: String,
    pub budget_range: String,
    pub timeline_urgency: String,
    #[serde(default = "default_company_name")]
    pub company_name: String,
    #[serde(default = "default_industry")]
    pub industry: String,
    #[serde(default = "default_lead_status")]
    pub lead_status: String,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default)]
    pub conversation_summary: String,
}

fn default_company_name() -> String {
    "NA".to_string()
}

fn default_industry() -> String {
    "NA".to_string()
}

fn default_lead_status() -> String {
    "Qualified - Hot Lead".to_string()
}

fn default_source() -> String {
    "Meta_WA_Ad".to_string()
}

impl LeadRecord {
    /// Creates a record from the five required qualification fields, with
    /// the remaining fields set to their defaults.
    pub fn new(
        full_name: impl Into<String>,
        phone_number: impl Into<String>,
        specific_need: impl Into<String>,
        budget_range: impl Into<String>,
        timeline_urgency: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            phone_number: phone_number.into(),
            specific_need: specific_need.into(),
            budget_range: budget_range.into(),
            timeline_urgency: timeline_urgency.into(),
            company_name: default_company_name(),
            industry: default_industry(),
            lead_status: default_lead_status(),
            source: default_source(),
            conversation_summary: String::new(),
        }
    }

    /// Converts the record into the row submitted to the warehouse,
    /// stamping `hand_off_timestamp` with the current UTC time.
    ///
    /// The timestamp is always assigned here, never by the caller.
    pub fn into_row(self) -> LeadRow {
        LeadRow {
            lead_status: self.lead_status,
            source: self.source,
            full_name: self.full_name,
            phone_number: self.phone_number,
            company_name: self.company_name,
            industry: self.industry,
            specific_need: self.specific_need,
            budget_range: self.budget_range,
            timeline_urgency: self.timeline_urgency,
            conversation_summary: self.conversation_summary,
            hand_off_timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// One row of the `sql_leads` table.
///
/// Field declaration order matches the warehouse column order defined in
/// [`crate::schema`]; the parity tests pin the two together.
#[derive(Debug, Clone, Serialize)]
pub struct LeadRow {
    pub lead_status: String,
    pub source: String,
    pub full_name: String,
    pub phone_number: String,
    pub company_name: String,
    pub industry: String,
    pub specific_need: String,
    pub budget_range: String,
    pub timeline_urgency: String,
    pub conversation_summary: String,
    /// ISO-8601 UTC timestamp, assigned by the recorder at write time.
    pub hand_off_timestamp: String,
}

impl LeadRow {
    /// The serialized field names, in declaration order.
    pub const COLUMNS: [&'static str; 11] = [
        "lead_status",
        "source",
        "full_name",
        "phone_number",
        "company_name",
        "industry",
        "specific_need",
        "budget_range",
        "timeline_urgency",
        "conversation_summary",
        "hand_off_timestamp",
    ];
}

/// The outcome of a single lead write.
///
/// Exactly one row is submitted per call, so the outcome is binary: either
/// the warehouse reported zero per-row errors, or the write failed with a
/// reason. There is no partial-success case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Success(String),
    Failure(String),
}

impl WriteOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, WriteOutcome::Success(_))
    }

    /// The human-readable message carried by either variant.
    pub fn message(&self) -> &str {
        match self {
            WriteOutcome::Success(message) => message,
            WriteOutcome::Failure(reason) => reason,
        }
    }
}
