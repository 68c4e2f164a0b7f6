//! Benchmark and correctness driver for the route-bench router adapters.
//!
//! Everything here runs outside the measured closures: fixtures, request preparation,
//! configuration and the correctness checks used by `tests/`.

#[cfg(not(feature = "codspeed"))]
pub use criterion;
#[cfg(feature = "codspeed")]
pub use codspeed_criterion_compat as criterion;

mod bench;
mod cases;
mod config;
mod driver;
mod error;
pub mod fixtures;

pub use bench::{bench_fixture, bench_micro, selected_adapters};
pub use cases::{BenchCase, MicroCase, GITHUB_CASES, GPLUS_CASES, MICRO_CASES, PARAM_VALUE, PARAM_WRITE, PARSE_CASES};
pub use config::{init_tracing, BenchConfig, ReportFormat};
pub use driver::{check_param_mode, check_path_mode, request, requests_for, serve_all, Mismatch};
pub use error::ConfigError;

use once_cell::sync::Lazy;

static CONFIG: Lazy<BenchConfig> = Lazy::new(BenchConfig::load);

/// The process-wide configuration, read from the environment on first access.
///
/// # Panics
///
/// On an invalid `ROUTE_BENCH_*` configuration, see [`BenchConfig::load`].
pub fn config() -> &'static BenchConfig {
    &CONFIG
}

/// The criterion instance every benchmark group runs with.
pub fn criterion_config() -> criterion::Criterion {
    config().criterion()
}
