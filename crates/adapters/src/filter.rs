//! Request filters for routers that resolve the path first and the method second.
//!
//! A path-first router keeps one list of items per path and picks the first item whose
//! filter accepts the request.

use http::{Method, Request};

/// Core trait for request filtering.
///
/// The `Filter` trait requires `Send + Sync`, so a built router can be shared with the
/// benchmark driver.
pub trait Filter: Send + Sync {
    /// Returns `true` if the request should be handled by the guarded item.
    fn matches(&self, req: &Request<()>) -> bool;
}

/// A filter that matches HTTP methods.
#[derive(Debug)]
pub struct MethodFilter(Method);

impl Filter for MethodFilter {
    #[inline]
    fn matches(&self, req: &Request<()>) -> bool {
        self.0.eq(req.method())
    }
}

/// Creates a filter that matches requests with the given method.
#[inline]
pub fn method(method: Method) -> MethodFilter {
    MethodFilter(method)
}
