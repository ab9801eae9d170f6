//! Tracing/logging setup shared by binaries and tests.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogConfig::from_env());
}

/// Route tracing output to the test harness writer (captured per test).
pub fn init_for_tests() {
    tracing::init_for_tests();
}

/// Tracing configuration (filters, formats).
pub mod tracing;
