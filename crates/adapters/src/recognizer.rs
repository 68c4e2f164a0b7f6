//! [`route_recognizer`]: a single NFA over every path, with a method table per path.

use std::collections::HashMap;
use std::sync::Arc;

use http::{Method, Request, StatusCode};
use route_bench::{
    Adapter, BoxHandler, BuildError, Mode, ModeFn, ParamSource, ParamStyle, Registry, RequestHandler, ResponseSink,
    Route,
};
use tracing::trace;

const NAME: &str = "RouteRecognizer";

pub(crate) fn register(registry: &mut Registry) {
    registry.register(Arc::new(RouteRecognizerAdapter));
}

#[derive(Debug, Default, Copy, Clone)]
pub struct RouteRecognizerAdapter;

impl Adapter for RouteRecognizerAdapter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn param_style(&self) -> ParamStyle {
        ParamStyle::Colon
    }

    fn try_build(&self, routes: &[Route], mode: Mode) -> Result<BoxHandler, BuildError> {
        let handler = mode.handler();
        let mut data: HashMap<String, Vec<(Method, ModeFn)>> = HashMap::new();

        for route in routes {
            let method = route.http_method()?;
            let path = self.param_style().rewrite(route.path()).into_owned();
            data.entry(path).or_default().push((method, handler));
        }

        let mut inner = route_recognizer::Router::new();
        for (path, methods) in data {
            inner.add(&path, methods);
        }

        Ok(Box::new(RecognizerRouter { inner }))
    }
}

struct RecognizerRouter {
    inner: route_recognizer::Router<Vec<(Method, ModeFn)>>,
}

impl RequestHandler for RecognizerRouter {
    fn handle(&self, req: &Request<()>, sink: &mut dyn ResponseSink) {
        let path = req.uri().path();
        let matched = match self.inner.recognize(path) {
            Ok(matched) => matched,
            Err(e) => {
                trace!(path, cause = %e, "no route");
                sink.set_status(StatusCode::NOT_FOUND);
                return;
            }
        };

        match matched.handler().iter().find(|(method, _)| method == req.method()) {
            Some((_, handler)) => handler(req, &RecognizerParams(matched.params()), sink),
            None => {
                trace!(method = %req.method(), path, "method not allowed");
                sink.set_status(StatusCode::METHOD_NOT_ALLOWED);
            }
        }
    }
}

struct RecognizerParams<'p>(&'p route_recognizer::Params);

impl ParamSource for RecognizerParams<'_> {
    #[inline]
    fn param(&self, name: &str) -> Option<&str> {
        self.0.find(name)
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
    fn write_parameter() {
        let routes = [Route::get("/people/:userId/activities/:collection"), Route::get("/user/:name")];
        let router = RouteRecognizerAdapter.build(&routes, Mode::WriteParameter);

        assert_eq!(serve(&router, Method::GET, "/user/gordon").body_str(), "gordon");
    }

    #[test]
    fn methods_share_a_path() {
        let routes = [Route::new("POST", "/1/installations"), Route::get("/1/installations")];
        let router = RouteRecognizerAdapter.build(&routes, Mode::WritePath);

        assert_eq!(serve(&router, Method::POST, "/1/installations").body_str(), "/1/installations");
        assert_eq!(serve(&router, Method::GET, "/1/installations").body_str(), "/1/installations");
        assert_eq!(serve(&router, Method::PUT, "/1/installations").status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(serve(&router, Method::GET, "/1/functions").status(), StatusCode::NOT_FOUND);
    }
}
