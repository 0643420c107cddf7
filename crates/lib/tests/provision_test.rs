//! # Provisioning Tests
//!
//! Exercises the idempotent create-if-missing behavior of `ensure_dataset`
//! and `ensure_table` against a mock control plane.

mod common;

use common::{setup_tracing, MockWarehouseAdmin};
use leadbot::constants::{DEFAULT_DATASET_LOCATION, LEAD_DATASET_ID, LEAD_TABLE_ID};
use leadbot::schema::lead_table_schema;
use leadbot::{ensure_dataset, ensure_table, ProvisionOutcome};

#[tokio::test]
async fn ensure_dataset_is_idempotent() {
    setup_tracing();
    let admin = MockWarehouseAdmin::new();

    let first = ensure_dataset(&admin, LEAD_DATASET_ID, DEFAULT_DATASET_LOCATION)
        .await
        .unwrap();
    assert_eq!(first, ProvisionOutcome::Created);
    assert_eq!(admin.dataset_create_count(), 1);

    let second = ensure_dataset(&admin, LEAD_DATASET_ID, DEFAULT_DATASET_LOCATION)
        .await
        .unwrap();
    assert_eq!(second, ProvisionOutcome::AlreadyExists);
    assert_eq!(admin.dataset_create_count(), 1);
}

#[tokio::test]
async fn ensure_table_is_idempotent() {
    setup_tracing();
    let admin = MockWarehouseAdmin::new();

    let first = ensure_table(&admin, LEAD_DATASET_ID, LEAD_TABLE_ID, lead_table_schema())
        .await
        .unwrap();
    assert_eq!(first, ProvisionOutcome::Created);

    let second = ensure_table(&admin, LEAD_DATASET_ID, LEAD_TABLE_ID, lead_table_schema())
        .await
        .unwrap();
    assert_eq!(second, ProvisionOutcome::AlreadyExists);
    assert_eq!(admin.table_create_count(), 1);
}

#[tokio::test]
async fn pre_existing_dataset_issues_no_create_call() {
    setup_tracing();
    let admin = MockWarehouseAdmin::with_dataset(LEAD_DATASET_ID);

    let outcome = ensure_dataset(&admin, LEAD_DATASET_ID, DEFAULT_DATASET_LOCATION)
        .await
        .unwrap();
    assert_eq!(outcome, ProvisionOutcome::AlreadyExists);
    assert_eq!(admin.dataset_create_count(), 0);
}

#[tokio::test]
async fn full_provisioning_run_converges() {
    setup_tracing();
    let admin = MockWarehouseAdmin::new();

    // First run creates both objects, a re-run touches nothing.
    ensure_dataset(&admin, LEAD_DATASET_ID, DEFAULT_DATASET_LOCATION)
        .await
        .unwrap();
    ensure_table(&admin, LEAD_DATASET_ID, LEAD_TABLE_ID, lead_table_schema())
        .await
        .unwrap();

    let dataset = ensure_dataset(&admin, LEAD_DATASET_ID, DEFAULT_DATASET_LOCATION)
        .await
        .unwrap();
    let table = ensure_table(&admin, LEAD_DATASET_ID, LEAD_TABLE_ID, lead_table_schema())
        .await
        .unwrap();

    assert_eq!(dataset, ProvisionOutcome::AlreadyExists);
    assert_eq!(table, ProvisionOutcome::AlreadyExists);
    assert_eq!(admin.dataset_create_count(), 1);
    assert_eq!(admin.table_create_count(), 1);
}
