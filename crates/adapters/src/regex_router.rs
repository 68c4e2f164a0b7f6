//! A linear list of anchored regular expressions, one per route.
//!
//! Routes are tried in registration order and the first one whose method and pattern both
//! match handles the request. Parameters become named capture groups.

use std::sync::Arc;

use http::{Method, Request, StatusCode};
use regex::{Captures, Regex};
use route_bench::{
    Adapter, BoxHandler, BuildError, Mode, ModeFn, ParamSource, ParamStyle, Registry, RequestHandler, ResponseSink,
    Route,
};
use tracing::trace;

const NAME: &str = "Regex";

pub(crate) fn register(registry: &mut Registry) {
    registry.register(Arc::new(RegexAdapter));
}

#[derive(Debug, Default, Copy, Clone)]
pub struct RegexAdapter;

impl Adapter for RegexAdapter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn param_style(&self) -> ParamStyle {
        ParamStyle::Brace
    }

    fn try_build(&self, routes: &[Route], mode: Mode) -> Result<BoxHandler, BuildError> {
        let handler = mode.handler();
        let mut compiled = Vec::with_capacity(routes.len());

        for route in routes {
            let method = route.http_method()?;
            let path = self.param_style().rewrite(route.path());
            let regex = path_to_regex(&path).map_err(|e| BuildError::insert(NAME, &path, e))?;
            compiled.push(RegexRoute { method, regex, handler });
        }

        Ok(Box::new(RegexRouter { routes: compiled }))
    }
}

/// Converts a brace-style pattern into an anchored regex with one named group per parameter.
fn path_to_regex(path: &str) -> Result<Regex, regex::Error> {
    if path == "/" {
        return Regex::new(r"^/$");
    }

    let mut pattern = String::with_capacity(path.len() + 8);
    pattern.push('^');

    for segment in path.split('/').skip(1) {
        pattern.push('/');
        if let Some(name) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            pattern.push_str("(?P<");
            pattern.push_str(name);
            pattern.push_str(">[^/]+)");
        } else {
            pattern.push_str(&regex::escape(segment));
        }
    }

    pattern.push('$');
    Regex::new(&pattern)
}

struct RegexRoute {
    method: Method,
    regex: Regex,
    handler: ModeFn,
}

struct RegexRouter {
    routes: Vec<RegexRoute>,
}

impl RequestHandler for RegexRouter {
    fn handle(&self, req: &Request<()>, sink: &mut dyn ResponseSink) {
        let path = req.uri().path();
        for route in &self.routes {
            if &route.method != req.method() {
                continue;
            }
            if let Some(captures) = route.regex.captures(path) {
                (route.handler)(req, &RegexParams(&captures), sink);
                return;
            }
        }

        if self.routes.iter().any(|route| route.regex.is_match(path)) {
            trace!(method = %req.method(), path, "method not allowed");
            sink.set_status(StatusCode::METHOD_NOT_ALLOWED);
        } else {
            trace!(path, "no route");
            sink.set_status(StatusCode::NOT_FOUND);
        }
    }
}

struct RegexParams<'c, 'h>(&'c Captures<'h>);

impl ParamSource for RegexParams<'_, '_> {
    #[inline]
    fn param(&self, name: &str) -> Option<&str> {
        self.0.name(name).map(|m| m.as_str())
    }
}
