//! Process-wide tracing/logging setup shared by the binaries.

/// Tracing configuration (filters, formatting).
pub mod tracing;

/// Initialize tracing with the `info` default filter.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with_default("info");
}
