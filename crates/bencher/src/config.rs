//! Benchmark configuration, read from `ROUTE_BENCH_*` environment variables.
//!
//! | variable                       | meaning                                  | default      |
//! |--------------------------------|------------------------------------------|--------------|
//! | `ROUTE_BENCH_ADAPTERS`         | comma-separated adapter names to run     | all          |
//! | `ROUTE_BENCH_SAMPLE_SIZE`      | criterion sample size, at least 10       | criterion's  |
//! | `ROUTE_BENCH_MEASUREMENT_SECS` | measurement time per benchmark           | criterion's  |
//! | `ROUTE_BENCH_WARM_UP_SECS`     | warm-up time per benchmark               | criterion's  |
//! | `ROUTE_BENCH_LOG`              | tracing level                            | `info`       |
//! | `ROUTE_BENCH_FORMAT`           | memory report format, `text` or `json`   | `text`       |

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use route_bench::{Registry, Snapshot};
use tracing::{debug, error, Level};
use tracing_subscriber::FmtSubscriber;

use crate::criterion::Criterion;
use crate::error::ConfigError;

const ADAPTERS: &str = "ROUTE_BENCH_ADAPTERS";
const SAMPLE_SIZE: &str = "ROUTE_BENCH_SAMPLE_SIZE";
const MEASUREMENT_SECS: &str = "ROUTE_BENCH_MEASUREMENT_SECS";
const WARM_UP_SECS: &str = "ROUTE_BENCH_WARM_UP_SECS";
const LOG: &str = "ROUTE_BENCH_LOG";
const FORMAT: &str = "ROUTE_BENCH_FORMAT";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ConfigError::invalid(FORMAT, s, "expected text or json")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BenchConfig {
    adapters: Option<Vec<String>>,
    sample_size: Option<usize>,
    measurement_time: Option<Duration>,
    warm_up_time: Option<Duration>,
    log_level: Level,
    format: ReportFormat,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            adapters: None,
            sample_size: None,
            measurement_time: None,
            warm_up_time: None,
            log_level: Level::INFO,
            format: ReportFormat::Text,
        }
    }
}

impl BenchConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).map(|value| value.trim().to_owned()).filter(|value| !value.is_empty());
        let mut config = Self::default();

        if let Some(value) = lookup(ADAPTERS) {
            let names: Vec<String> =
                value.split(',').map(str::trim).filter(|name| !name.is_empty()).map(str::to_owned).collect();
            if names.is_empty() {
                return Err(ConfigError::invalid(ADAPTERS, value, "no adapter names"));
            }
            config.adapters = Some(names);
        }

        if let Some(value) = lookup(SAMPLE_SIZE) {
            let size = value.parse::<usize>().map_err(|e| ConfigError::invalid(SAMPLE_SIZE, &value, e))?;
            if size < 10 {
                return Err(ConfigError::invalid(SAMPLE_SIZE, value, "must be at least 10"));
            }
            config.sample_size = Some(size);
        }

        if let Some(value) = lookup(MEASUREMENT_SECS) {
            config.measurement_time = Some(parse_secs(MEASUREMENT_SECS, &value)?);
        }

        if let Some(value) = lookup(WARM_UP_SECS) {
            config.warm_up_time = Some(parse_secs(WARM_UP_SECS, &value)?);
        }

        if let Some(value) = lookup(LOG) {
            config.log_level = value.parse::<Level>().map_err(|e| ConfigError::invalid(LOG, &value, e))?;
        }

        if let Some(value) = lookup(FORMAT) {
            config.format = value.parse()?;
        }

        Ok(config)
    }

    /// Reads the environment and installs the tracing subscriber.
    ///
    /// # Panics
    ///
    /// On an invalid configuration.
    pub fn load() -> Self {
        match Self::from_env() {
            Ok(config) => {
                init_tracing(config.log_level);
                debug!(?config, "benchmark configuration loaded");
                config
            }
            Err(e) => {
                init_tracing(Level::INFO);
                error!(cause = %e, "invalid benchmark configuration");
                panic!("invalid benchmark configuration: {e}");
            }
        }
    }

    pub fn criterion(&self) -> Criterion {
        let mut criterion = Criterion::default();
        if let Some(size) = self.sample_size {
            criterion = criterion.sample_size(size);
        }
        if let Some(time) = self.measurement_time {
            criterion = criterion.measurement_time(time);
        }
        if let Some(time) = self.warm_up_time {
            criterion = criterion.warm_up_time(time);
        }
        criterion
    }

    /// The registered adapters selected by `ROUTE_BENCH_ADAPTERS`, all of them by default.
    pub fn adapters(&self, registry: &Registry) -> Result<Snapshot, ConfigError> {
        let Some(names) = &self.adapters else {
            return Ok(registry.snapshot());
        };

        let mut selected = Snapshot::new();
        for name in names {
            let Some(adapter) = registry.get(name) else {
                let known = registry.names().collect::<Vec<_>>().join(", ");
                return Err(ConfigError::UnknownAdapter { name: name.clone(), known });
            };
            selected.insert(adapter.name(), adapter);
        }
        Ok(selected)
    }

    pub fn log_level(&self) -> Level {
        self.log_level
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }
}

fn parse_secs(key: &'static str, value: &str) -> Result<Duration, ConfigError> {
    let secs = value.parse::<f64>().map_err(|e| ConfigError::invalid(key, value, e))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(ConfigError::invalid(key, value, "must be a positive number of seconds"));
    }
    Ok(Duration::from_secs_f64(secs))
}

/// Installs a global `FmtSubscriber`; a second call keeps the first subscriber.
pub fn init_tracing(level: Level) {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<BenchConfig, ConfigError> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        BenchConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.log_level(), Level::INFO);
        assert_eq!(config.format(), ReportFormat::Text);
        assert!(config.adapters.is_none());
        assert!(config.sample_size.is_none());
    }

    #[test]
    fn full_configuration() {
        let config = config(&[
            (ADAPTERS, "Matchit, PathTree,"),
            (SAMPLE_SIZE, "20"),
            (MEASUREMENT_SECS, "1.5"),
            (WARM_UP_SECS, "1"),
            (LOG, "debug"),
            (FORMAT, "JSON"),
        ])
        .unwrap();

        assert_eq!(config.adapters, Some(vec!["Matchit".to_owned(), "PathTree".to_owned()]));
        assert_eq!(config.sample_size, Some(20));
        assert_eq!(config.measurement_time, Some(Duration::from_millis(1500)));
        assert_eq!(config.warm_up_time, Some(Duration::from_secs(1)));
        assert_eq!(config.log_level(), Level::DEBUG);
        assert_eq!(config.format(), ReportFormat::Json);
    }

    #[test]
    fn blank_values_are_unset() {
        let config = config(&[(SAMPLE_SIZE, "  "), (FORMAT, "")]).unwrap();
        assert!(config.sample_size.is_none());
        assert_eq!(config.format(), ReportFormat::Text);
    }

    #[test]
    fn invalid_values() {
        assert!(matches!(config(&[(SAMPLE_SIZE, "many")]), Err(ConfigError::Invalid { key: SAMPLE_SIZE, .. })));
        assert!(matches!(config(&[(SAMPLE_SIZE, "5")]), Err(ConfigError::Invalid { key: SAMPLE_SIZE, .. })));
        assert!(matches!(config(&[(MEASUREMENT_SECS, "-1")]), Err(ConfigError::Invalid { key: MEASUREMENT_SECS, .. })));
        assert!(matches!(config(&[(LOG, "loud")]), Err(ConfigError::Invalid { key: LOG, .. })));
        assert!(matches!(config(&[(FORMAT, "yaml")]), Err(ConfigError::Invalid { key: FORMAT, .. })));
        assert!(matches!(config(&[(ADAPTERS, " , ")]), Err(ConfigError::Invalid { key: ADAPTERS, .. })));
    }

    #[test]
    fn error_message() {
        let err = config(&[(FORMAT, "yaml")]).unwrap_err();
        assert_eq!(err.to_string(), r#"invalid value "yaml" for ROUTE_BENCH_FORMAT: expected text or json"#);
    }
}
