use thiserror::Error;

/// Invalid benchmark configuration read from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid { key: &'static str, value: String, reason: String },

    #[error("unknown adapter {name:?}, registered adapters: {known}")]
    UnknownAdapter { name: String, known: String },
}

impl ConfigError {
    pub fn invalid<V: ToString, R: ToString>(key: &'static str, value: V, reason: R) -> Self {
        Self::Invalid { key, value: value.to_string(), reason: reason.to_string() }
    }
}
