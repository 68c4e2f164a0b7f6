//! Route descriptors, fixtures and path parameter syntax.
//!
//! Fixtures are written once in the colon convention (`/users/:user`) and every adapter
//! rewrites them into the syntax of the router it wraps with [`ParamStyle::rewrite`].
//! The rewrite is purely textual: static segments are assumed to contain no `:`, `{`
//! or `}`.

use std::borrow::Cow;
use std::fmt;

use http::Method;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::BuildError;

static COLON_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(":([^/]*)").expect("colon param pattern is valid"));
static BRACE_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^/}]*)\}").expect("brace param pattern is valid"));

/// A single `{method, path}` pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    method: &'static str,
    path: &'static str,
}

impl Route {
    pub const fn new(method: &'static str, path: &'static str) -> Self {
        Self { method, path }
    }

    pub const fn get(path: &'static str) -> Self {
        Self::new("GET", path)
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Parses the method into an [`http::Method`], accepting only the standard methods.
    pub fn http_method(&self) -> Result<Method, BuildError> {
        parse_method(self.method)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

macro_rules! standard_methods {
    ($($name:literal => $method:ident),* $(,)?) => {
        fn parse_method(method: &str) -> Result<Method, BuildError> {
            match method {
                $($name => Ok(Method::$method),)*
                other => Err(BuildError::unknown_method(other)),
            }
        }
    };
}

standard_methods! {
    "GET" => GET,
    "POST" => POST,
    "PUT" => PUT,
    "DELETE" => DELETE,
    "HEAD" => HEAD,
    "OPTIONS" => OPTIONS,
    "CONNECT" => CONNECT,
    "PATCH" => PATCH,
    "TRACE" => TRACE,
}

/// A named, ordered set of routes representing one benchmark scenario.
#[derive(Debug, Copy, Clone)]
pub struct Fixture {
    name: &'static str,
    routes: &'static [Route],
}

impl Fixture {
    pub const fn new(name: &'static str, routes: &'static [Route]) -> Self {
        Self { name, routes }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn routes(&self) -> &'static [Route] {
        self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'static, Route> {
        self.routes.iter()
    }
}

/// The path parameter convention a router understands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ParamStyle {
    /// `/user/:name`
    Colon,
    /// `/user/{name}`
    Brace,
}

impl ParamStyle {
    /// Rewrites a path written in either convention into this one.
    ///
    /// Paths already in this style, and paths without parameters, are borrowed unchanged.
    pub fn rewrite<'a>(&self, path: &'a str) -> Cow<'a, str> {
        match self {
            ParamStyle::Colon => BRACE_PARAM.replace_all(path, ":$1"),
            ParamStyle::Brace => COLON_PARAM.replace_all(path, "{$1}"),
        }
    }
}

impl fmt::Display for ParamStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamStyle::Colon => f.write_str("colon"),
            ParamStyle::Brace => f.write_str("brace"),
        }
    }
}

/// Returns the parameter names of a path, in order, whatever its convention.
pub fn param_names(path: &str) -> Vec<&str> {
    let mut names = Vec::new();
    for segment in path.split('/') {
        if let Some(name) = segment.strip_prefix(':') {
            names.push(name);
        } else if let Some(name) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            names.push(name);
        }
    }
    names
}
