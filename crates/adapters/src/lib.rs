//! Router adapters for the route-bench harness.
//!
//! Each module wraps one routing library behind [`route_bench::Adapter`]. All of them are
//! collected in a process-wide [`registry`], populated on first access.
//!
//! | name              | parameter style | dispatch                                        |
//! |-------------------|-----------------|-------------------------------------------------|
//! | `Matchit`         | brace           | one radix tree per method                       |
//! | `MatchitFilter`   | brace           | one radix tree, method filters per path (405)   |
//! | `PathTree`        | colon           | one tree per method                             |
//! | `RouteRecognizer` | colon           | one NFA, method table per path (405)            |
//! | `Regex`           | brace           | anchored regexes tried in order (405)           |

mod filter;
mod matchit_filter;
mod matchit_router;
mod path_tree_router;
mod recognizer;
mod regex_router;

use once_cell::sync::Lazy;
use route_bench::Registry;
use tracing::info;

pub use matchit_filter::MatchitFilterAdapter;
pub use matchit_router::MatchitAdapter;
pub use path_tree_router::PathTreeAdapter;
pub use recognizer::RouteRecognizerAdapter;
pub use regex_router::RegexAdapter;

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let mut registry = Registry::new();
    matchit_router::register(&mut registry);
    matchit_filter::register(&mut registry);
    path_tree_router::register(&mut registry);
    recognizer::register(&mut registry);
    regex_router::register(&mut registry);

    info!(adapters = ?registry, "router adapters registered");
    registry
});

/// Every adapter in this crate, keyed by name.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Request;
    use route_bench::{Mode, ParamStyle, RecordingSink, Route};

    #[test]
    fn all_adapters_registered() {
        let names: Vec<_> = registry().names().collect();
        assert_eq!(names, vec!["Matchit", "MatchitFilter", "PathTree", "Regex", "RouteRecognizer"]);
    }

    #[test]
    fn styles() {
        let registry = registry();
        let style = |name: &str| registry.get(name).map(|a| a.param_style());

        assert_eq!(style("Matchit"), Some(ParamStyle::Brace));
        assert_eq!(style("PathTree"), Some(ParamStyle::Colon));
        assert_eq!(style("RouteRecognizer"), Some(ParamStyle::Colon));
    }

    #[test]
    fn every_adapter_writes_the_parameter() {
        let routes = [Route::get("/user/:name")];
        let req = Request::get("/user/gordon").body(()).unwrap();

        for (name, adapter) in registry().snapshot() {
            let router = adapter.build(&routes, Mode::WriteParameter);
            let mut sink = RecordingSink::new();
            router.handle(&req, &mut sink);

            assert_eq!(sink.body_str(), "gordon", "adapter {name}");
        }
    }
}
