//! Tests for tracing initialization.

use std::sync::Mutex;

use funcreg_core::tracing::setup::{build_filter, DEFAULT_DIRECTIVE};
use funcreg_core::tracing::init_tracing;

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn filter_accepts_per_crate_directives() {
    let (filter, rejected) = build_filter(Some("funcreg_storage=debug,funcreg_core=warn"));
    assert!(rejected.is_none());
    assert!(filter.to_string().to_lowercase().contains("funcreg_storage=debug"));
}

#[test]
fn filter_falls_back_on_garbage() {
    let (filter, rejected) = build_filter(Some("funcreg_storage=loud"));
    assert!(rejected.is_some());
    assert_eq!(filter.to_string().to_lowercase(), DEFAULT_DIRECTIVE);
}

#[test]
fn filter_defaults_when_unset() {
    let (filter, rejected) = build_filter(None);
    assert!(rejected.is_none());
    assert_eq!(filter.to_string().to_lowercase(), DEFAULT_DIRECTIVE);
}

#[test]
fn init_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("FUNCREG_LOG", "funcreg_storage=debug");
    init_tracing();
    init_tracing();
    std::env::remove_var("FUNCREG_LOG");
    tracing::info!("still fine");
}
