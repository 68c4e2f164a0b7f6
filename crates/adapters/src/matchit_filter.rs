//! [`matchit`] with a single tree keyed by path.
//!
//! Every path owns a list of items, each guarded by a filter on the request method; the
//! first item whose filter matches handles the request. A path that resolves but has no
//! matching item answers `405 Method Not Allowed`.

use std::collections::HashMap;
use std::sync::Arc;

use http::{Request, StatusCode};
use route_bench::{
    Adapter, BoxHandler, BuildError, Mode, ModeFn, ParamStyle, Registry, RequestHandler, ResponseSink, Route,
};
use tracing::trace;

use crate::filter::{self, Filter, MethodFilter};
use crate::matchit_router::MatchitParams;

const NAME: &str = "MatchitFilter";

pub(crate) fn register(registry: &mut Registry) {
    registry.register(Arc::new(MatchitFilterAdapter));
}

#[derive(Debug, Default, Copy, Clone)]
pub struct MatchitFilterAdapter;

impl Adapter for MatchitFilterAdapter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn param_style(&self) -> ParamStyle {
        ParamStyle::Brace
    }

    fn try_build(&self, routes: &[Route], mode: Mode) -> Result<BoxHandler, BuildError> {
        let handler = mode.handler();
        let mut data: HashMap<String, Vec<RouterItem>> = HashMap::new();

        for route in routes {
            let filter = filter::method(route.http_method()?);
            let path = self.param_style().rewrite(route.path()).into_owned();
            data.entry(path).or_default().push(RouterItem { filter, handler });
        }

        let mut inner_router = matchit::Router::new();
        for (path, items) in data {
            inner_router.insert(path.as_str(), items).map_err(|e| BuildError::insert(NAME, &path, e))?;
        }

        Ok(Box::new(FilterRouter { inner_router }))
    }
}

struct RouterItem {
    filter: MethodFilter,
    handler: ModeFn,
}

struct FilterRouter {
    inner_router: matchit::Router<Vec<RouterItem>>,
}

impl RequestHandler for FilterRouter {
    fn handle(&self, req: &Request<()>, sink: &mut dyn ResponseSink) {
        let path = req.uri().path();
        let matched = match self.inner_router.at(path) {
            Ok(matched) => matched,
            Err(e) => {
                trace!(path, cause = %e, "no route");
                sink.set_status(StatusCode::NOT_FOUND);
                return;
            }
        };

        match matched.value.iter().find(|item| item.filter.matches(req)) {
            Some(item) => (item.handler)(req, &MatchitParams(&matched.params), sink),
            None => {
                trace!(method = %req.method(), path, "method not allowed");
                sink.set_status(StatusCode::METHOD_NOT_ALLOWED);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;
    use route_bench::RecordingSink;

    fn serve(router: &BoxHandler, method: Method, uri: &str) -> RecordingSink {
        let mut sink = RecordingSink::new();
        let req = Request::builder().method(method).uri(uri).body(()).unwrap();
        router.handle(&req, &mut sink);
        sink
    }

    fn router(mode: Mode) -> BoxHandler {
        let routes = [
            Route::new("POST", "/1/roles"),
            Route::get("/1/roles/:objectId"),
            Route::new("PUT", "/1/roles/:objectId"),
            Route::get("/1/roles"),
        ];
        MatchitFilterAdapter.build(&routes, mode)
    }

    #[test]
    fn items_are_picked_by_method() {
        let router = router(Mode::WritePath);

        let sink = serve(&router, Method::PUT, "/1/roles/42");
        assert_eq!(sink.status(), StatusCode::OK);
        assert_eq!(sink.body_str(), "/1/roles/42");

        assert_eq!(serve(&router, Method::GET, "/1/roles").body_str(), "/1/roles");
    }

    #[test]
    fn wrong_method_is_not_allowed() {
        let router = router(Mode::SkipData);

        assert_eq!(serve(&router, Method::DELETE, "/1/roles/42").status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(serve(&router, Method::GET, "/1/users").status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn params_are_shared_across_methods() {
        let routes = [Route::get("/user/:name"), Route::new("DELETE", "/user/:name")];
        let router = MatchitFilterAdapter.build(&routes, Mode::WriteParameter);

        assert_eq!(serve(&router, Method::DELETE, "/user/gordon").body_str(), "gordon");
    }
}
