pub mod bigquery;
pub mod storage;

pub use bigquery::BigQueryProvider;
pub use storage::{LeadSink, WarehouseAdmin};
