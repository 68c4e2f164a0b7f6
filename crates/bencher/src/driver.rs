//! Request preparation, dispatch and the correctness checks.

use std::fmt;

use http::{Request, StatusCode, Uri};
use route_bench::{Adapter, BuildError, Fixture, Mode, RecordingSink, RequestHandler, ResponseSink, Route};
use tracing::{debug, warn};

use crate::cases::{PARAM_VALUE, PARAM_WRITE};

/// A request whose method and path match the route exactly.
pub fn request(route: &Route) -> Result<Request<()>, BuildError> {
    let mut req = Request::new(());
    *req.method_mut() = route.http_method()?;
    *req.uri_mut() = Uri::try_from(route.path()).map_err(|e| BuildError::invalid_path(route.path(), e))?;
    Ok(req)
}

/// One request per route, in route order.
pub fn requests_for(routes: &[Route]) -> Result<Vec<Request<()>>, BuildError> {
    routes.iter().map(request).collect()
}

/// Dispatches every request, strictly one after the other.
#[inline]
pub fn serve_all(router: &dyn RequestHandler, requests: &[Request<()>], sink: &mut dyn ResponseSink) {
    for req in requests {
        router.handle(req, sink);
    }
}

/// A response that differs from what the handler mode should have produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub adapter: &'static str,
    pub fixture: &'static str,
    pub route: Route,
    pub expected: &'static str,
    pub status: StatusCode,
    pub body: String,
}

impl Mismatch {
    fn new(adapter: &'static str, fixture: &'static str, route: Route, expected: &'static str, sink: &RecordingSink) -> Self {
        Self { adapter, fixture, route, expected, status: sink.status(), body: sink.body_str() }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in API {}: {} - {:?}; expected {} -> {:?}",
            self.adapter, self.fixture, self.status, self.body, self.route, self.expected
        )
    }
}

fn answered(sink: &RecordingSink, expected: &str) -> bool {
    sink.status() == StatusCode::OK && sink.body() == expected.as_bytes()
}

/// Requests every route of the fixture from a write-path router.
///
/// Each route must answer `200 OK` with its own path as the body; every route that does
/// not is returned, in fixture order.
pub fn check_path_mode(adapter: &dyn Adapter, fixture: &Fixture) -> Result<Vec<Mismatch>, BuildError> {
    let requests = requests_for(fixture.routes())?;
    let router = adapter.build(fixture.routes(), Mode::WritePath);

    let mut sink = RecordingSink::new();
    let mut mismatches = Vec::new();
    for (route, req) in fixture.iter().zip(&requests) {
        sink.reset();
        router.handle(req, &mut sink);
        if !answered(&sink, route.path()) {
            mismatches.push(Mismatch::new(adapter.name(), fixture.name(), *route, route.path(), &sink));
        }
    }

    if mismatches.is_empty() {
        debug!(adapter = adapter.name(), fixture = fixture.name(), routes = fixture.len(), "path mode passed");
    } else {
        warn!(adapter = adapter.name(), fixture = fixture.name(), mismatches = mismatches.len(), "path mode failed");
    }
    Ok(mismatches)
}

/// Requests `/user/gordon` from a single-route write-parameter router.
///
/// Returns the mismatch, if any, in the same shape as [`check_path_mode`].
pub fn check_param_mode(adapter: &dyn Adapter) -> Result<Vec<Mismatch>, BuildError> {
    let req = PARAM_WRITE.request()?;
    let router = PARAM_WRITE.build(adapter);
    let mut sink = RecordingSink::new();
    router.handle(&req, &mut sink);

    if answered(&sink, PARAM_VALUE) {
        return Ok(Vec::new());
    }

    warn!(adapter = adapter.name(), status = %sink.status(), body = %sink.body_str(), "parameter mode failed");
    Ok(vec![Mismatch::new(adapter.name(), "micro", PARAM_WRITE.route(adapter.param_style()), PARAM_VALUE, &sink)])
}
