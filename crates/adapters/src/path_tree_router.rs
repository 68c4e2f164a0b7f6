//! [`path_tree`] with one tree per method.

use std::collections::HashMap;
use std::sync::Arc;

use http::{Method, Request, StatusCode};
use path_tree::PathTree;
use route_bench::{
    Adapter, BoxHandler, BuildError, Mode, ModeFn, ParamSource, ParamStyle, Registry, RequestHandler, ResponseSink,
    Route,
};
use tracing::trace;

const NAME: &str = "PathTree";

pub(crate) fn register(registry: &mut Registry) {
    registry.register(Arc::new(PathTreeAdapter));
}

#[derive(Debug, Default, Copy, Clone)]
pub struct PathTreeAdapter;

impl Adapter for PathTreeAdapter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn param_style(&self) -> ParamStyle {
        ParamStyle::Colon
    }

    fn try_build(&self, routes: &[Route], mode: Mode) -> Result<BoxHandler, BuildError> {
        let handler = mode.handler();
        let mut trees: HashMap<Method, PathTree<ModeFn>> = HashMap::new();

        for route in routes {
            let method = route.http_method()?;
            let path = self.param_style().rewrite(route.path());
            let _ = trees.entry(method).or_insert_with(PathTree::new).insert(&path, handler);
        }

        Ok(Box::new(PathTreeRouter { trees }))
    }
}

struct PathTreeRouter {
    trees: HashMap<Method, PathTree<ModeFn>>,
}

impl RequestHandler for PathTreeRouter {
    fn handle(&self, req: &Request<()>, sink: &mut dyn ResponseSink) {
        let path = req.uri().path();
        match self.trees.get(req.method()).and_then(|tree| tree.find(path)) {
            Some((handler, matched)) => handler(req, &PathTreeParams(&matched), sink),
            None => {
                trace!(method = %req.method(), path, "no route");
                sink.set_status(StatusCode::NOT_FOUND);
            }
        }
    }
}

struct PathTreeParams<'p, 'k, 'v>(&'p path_tree::Path<'k, 'v>);

impl ParamSource for PathTreeParams<'_, '_, '_> {
    fn param(&self, name: &str) -> Option<&str> {
        self.0.params().into_iter().find(|(key, _)| *key == name).map(|(_, value)| value)
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
    fn brace_routes_are_rewritten() {
        let routes = [Route::get("/user/{name}")];
        let router = PathTreeAdapter.build(&routes, Mode::WriteParameter);

        assert_eq!(serve(&router, Method::GET, "/user/gordon").body_str(), "gordon");
    }

    #[test]
    fn static_and_param_siblings() {
        let routes = [Route::get("/people/:userId"), Route::get("/people")];
        let router = PathTreeAdapter.build(&routes, Mode::WritePath);

        assert_eq!(serve(&router, Method::GET, "/people").body_str(), "/people");
        assert_eq!(serve(&router, Method::GET, "/people/118051310819094153327").body_str(), "/people/118051310819094153327");
        assert_eq!(serve(&router, Method::POST, "/people").status(), StatusCode::NOT_FOUND);
    }
}
