//! [`matchit`] with one radix tree per method.

use std::collections::HashMap;
use std::sync::Arc;

use http::{Method, Request, StatusCode};
use route_bench::{
    Adapter, BoxHandler, BuildError, Mode, ModeFn, ParamSource, ParamStyle, Registry, RequestHandler, ResponseSink,
    Route,
};
use tracing::trace;

const NAME: &str = "Matchit";

pub(crate) fn register(registry: &mut Registry) {
    registry.register(Arc::new(MatchitAdapter));
}

#[derive(Debug, Default, Copy, Clone)]
pub struct MatchitAdapter;

impl Adapter for MatchitAdapter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn param_style(&self) -> ParamStyle {
        ParamStyle::Brace
    }

    fn try_build(&self, routes: &[Route], mode: Mode) -> Result<BoxHandler, BuildError> {
        let handler = mode.handler();
        let mut trees: HashMap<Method, matchit::Router<ModeFn>> = HashMap::new();

        for route in routes {
            let method = route.http_method()?;
            let path = self.param_style().rewrite(route.path());
            trees
                .entry(method)
                .or_insert_with(matchit::Router::new)
                .insert(path.as_ref(), handler)
                .map_err(|e| BuildError::insert(NAME, &path, e))?;
        }

        Ok(Box::new(MatchitRouter { trees }))
    }
}

struct MatchitRouter {
    trees: HashMap<Method, matchit::Router<ModeFn>>,
}

impl RequestHandler for MatchitRouter {
    fn handle(&self, req: &Request<()>, sink: &mut dyn ResponseSink) {
        let path = req.uri().path();
        let Some(tree) = self.trees.get(req.method()) else {
            trace!(method = %req.method(), path, "no route for method");
            sink.set_status(StatusCode::NOT_FOUND);
            return;
        };

        match tree.at(path) {
            Ok(matched) => {
                let handler = *matched.value;
                handler(req, &MatchitParams(&matched.params), sink);
            }
            Err(e) => {
                trace!(path, cause = %e, "no route");
                sink.set_status(StatusCode::NOT_FOUND);
            }
        }
    }
}

/// Path parameters of a [`matchit`] match.
pub(crate) struct MatchitParams<'p, 'k, 'v>(pub(crate) &'p matchit::Params<'k, 'v>);

impl ParamSource for MatchitParams<'_, '_, '_> {
    #[inline]
    fn param(&self, name: &str) -> Option<&str> {
        self.0.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use route_bench::RecordingSink;

    fn serve(router: &BoxHandler, method: Method, uri: &str) -> RecordingSink {
        let mut sink = RecordingSink::new();
        let req = Request::builder().method(method).uri(uri).body(()).unwrap();
        router.handle(&req, &mut sink);
        sink
    }

    #[test]
    fn colon_routes_are_rewritten() {
        let routes = [Route::get("/user/:name")];
        let router = MatchitAdapter.build(&routes, Mode::WriteParameter);

        assert_eq!(serve(&router, Method::GET, "/user/gordon").body_str(), "gordon");
    }

    #[test]
    fn trees_are_split_by_method() {
        let routes = [Route::get("/gists/:id"), Route::new("DELETE", "/gists/:id"), Route::new("POST", "/gists")];
        let router = MatchitAdapter.build(&routes, Mode::WritePath);

        assert_eq!(serve(&router, Method::DELETE, "/gists/1").body_str(), "/gists/1");
        assert_eq!(serve(&router, Method::POST, "/gists").body_str(), "/gists");
        assert_eq!(serve(&router, Method::PUT, "/gists/1").status(), StatusCode::NOT_FOUND);
        assert_eq!(serve(&router, Method::GET, "/gists/1/star").status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflicting_params_are_build_errors() {
        let routes = [Route::get("/users/:user"), Route::get("/users/:login")];
        let err = MatchitAdapter.try_build(&routes, Mode::SkipData).err().unwrap();

        assert!(matches!(err, BuildError::Insert { adapter: "Matchit", .. }));
    }

    #[test]
    fn unknown_method_is_build_error() {
        let routes = [Route::new("PURGE", "/cache")];
        assert!(matches!(MatchitAdapter.try_build(&routes, Mode::SkipData), Err(BuildError::UnknownMethod { .. })));
    }

    #[test]
    #[should_panic(expected = "Matchit failed to build router")]
    fn build_aborts_on_error() {
        MatchitAdapter.build(&[Route::new("PURGE", "/cache")], Mode::SkipData);
    }
}
