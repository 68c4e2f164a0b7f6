use std::error::Error;
use thiserror::Error;

type BoxError = Box<dyn Error + Send + Sync>;

/// Errors raised while an adapter turns a route list into a router.
///
/// All of them are configuration errors: the fixtures and modes are fixed at compile
/// time, so [`crate::Adapter::build`] aborts on any of them.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("unknown http method: {method}")]
    UnknownMethod { method: String },

    #[error("invalid request path '{path}': {source}")]
    InvalidPath {
        path: String,
        #[source]
        source: http::uri::InvalidUri,
    },

    #[error("{adapter} rejected route '{path}': {source}")]
    Insert {
        adapter: &'static str,
        path: String,
        #[source]
        source: BoxError,
    },
}

impl BuildError {
    pub fn unknown_method<S: ToString>(method: S) -> Self {
        Self::UnknownMethod { method: method.to_string() }
    }

    pub fn invalid_path<P: ToString>(path: P, source: http::uri::InvalidUri) -> Self {
        Self::InvalidPath { path: path.to_string(), source }
    }

    pub fn insert<P, E>(adapter: &'static str, path: P, e: E) -> Self
    where
        P: ToString,
        E: Into<BoxError>,
    {
        Self::Insert { adapter, path: path.to_string(), source: e.into() }
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("adapter name must not be empty")]
    EmptyName,

    #[error("already registered adapter: {name}")]
    Duplicate { name: &'static str },
}

#[derive(Debug, Error)]
pub enum ModeError {
    #[error("unknown handler mode: {0:?}")]
    Unknown(String),
}

impl ModeError {
    pub fn unknown<S: ToString>(str: S) -> Self {
        Self::Unknown(str.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_error_keeps_source() {
        let err = BuildError::insert("Matchit", "/user/{name}", "conflict with '/user/{id}'");
        assert_eq!(err.to_string(), "Matchit rejected route '/user/{name}': conflict with '/user/{id}'");
        assert!(err.source().is_some());
    }

    #[test]
    fn duplicate_names_the_adapter() {
        let err = RegistryError::Duplicate { name: "Regex" };
        assert_eq!(err.to_string(), "already registered adapter: Regex");
    }
}
