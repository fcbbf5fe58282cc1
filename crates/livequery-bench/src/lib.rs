//! livequery Benchmark Suite
//!
//! Criterion benchmarks for filter construction and evaluation over
//! custom-variable columns.

pub mod fixtures;

pub use fixtures::{generate_hosts, BenchHost, Scale};

/// Install a tracing subscriber honoring `RUST_LOG`, once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
