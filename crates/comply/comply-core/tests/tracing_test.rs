//! Tests for the Comply tracing setup.

use std::sync::Mutex;

use comply_core::tracing::init_tracing;

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_comply_log_filter_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("COMPLY_LOG", "comply_analysis=debug,comply_storage=warn");
    init_tracing();
    std::env::remove_var("COMPLY_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("COMPLY_LOG", "=====");
    init_tracing();
    std::env::remove_var("COMPLY_LOG");
}
