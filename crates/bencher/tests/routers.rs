use std::sync::Arc;

use bencher::fixtures::{all_fixtures, GITHUB_API, GPLUS_API, PARSE_API};
use bencher::{
    check_param_mode, check_path_mode, requests_for, serve_all, BenchConfig, ConfigError, MICRO_CASES, PARSE_CASES,
};
use http::{Request, StatusCode};
use route_bench::{Mode, RecordingSink, Registry, RequestHandler, Route};
use route_bench_adapters::{registry, MatchitAdapter, RegexAdapter};

fn serve(router: &dyn RequestHandler, req: &Request<()>) -> RecordingSink {
    let mut sink = RecordingSink::new();
    router.handle(req, &mut sink);
    sink
}

#[test]
fn path_mode() {
    let mut failures = Vec::new();
    for adapter in registry().snapshot().values() {
        for fixture in all_fixtures() {
            failures.extend(check_path_mode(adapter.as_ref(), fixture).unwrap());
        }
    }

    let report: Vec<String> = failures.iter().map(ToString::to_string).collect();
    assert!(report.is_empty(), "{}", report.join("\n"));
}

#[test]
fn parameter_mode() {
    for (name, adapter) in registry().snapshot() {
        let mismatches = check_param_mode(adapter.as_ref()).unwrap();
        assert!(mismatches.is_empty(), "{name}: {}", mismatches[0]);
    }
}

#[test]
fn micro_cases_resolve() {
    for (name, adapter) in registry().snapshot() {
        for case in &MICRO_CASES {
            let router = case.build(adapter.as_ref());
            assert_eq!(serve(&*router, &case.request().unwrap()).status(), StatusCode::OK, "{name} {}", case.name());
        }
    }
}

#[test]
fn gplus_requests() {
    let req = Request::get("/people/118051310819094153327").body(()).unwrap();
    let nested = Request::get("/people/118051310819094153327/activities/123456789").body(()).unwrap();

    for (name, adapter) in registry().snapshot() {
        let router = adapter.build(GPLUS_API.routes(), Mode::WritePath);

        let sink = serve(&*router, &req);
        assert_eq!(sink.status(), StatusCode::OK, "{name}");
        assert_eq!(sink.body_str(), "/people/118051310819094153327", "{name}");

        assert_eq!(serve(&*router, &nested).body_str(), "/people/118051310819094153327/activities/123456789", "{name}");
    }
}

#[test]
fn gplus_user_id_is_not_a_name() {
    let req = Request::get("/people/118051310819094153327").body(()).unwrap();

    for (name, adapter) in registry().snapshot() {
        let router = adapter.build(GPLUS_API.routes(), Mode::WriteParameter);
        let sink = serve(&*router, &req);

        assert_eq!(sink.status(), StatusCode::OK, "{name}");
        assert!(sink.body().is_empty(), "{name}");
    }
}

#[test]
fn parse_cases_resolve() {
    for (name, adapter) in registry().snapshot() {
        let router = adapter.build(PARSE_API.routes(), Mode::WritePath);
        for case in &PARSE_CASES {
            let sink = serve(&*router, &case.request().unwrap());
            assert_eq!(sink.status(), StatusCode::OK, "{name} {}", case.name);
            assert_eq!(sink.body_str(), case.url, "{name} {}", case.name);
        }
    }
}

#[test]
fn unknown_path_is_not_found() {
    let req = Request::get("/this/route/does/not/exist").body(()).unwrap();
    for (name, adapter) in registry().snapshot() {
        let router = adapter.build(GITHUB_API.routes(), Mode::WritePath);
        let sink = serve(&*router, &req);

        assert_eq!(sink.status(), StatusCode::NOT_FOUND, "{name}");
        assert!(sink.body().is_empty(), "{name}");
    }
}

#[test]
fn dispatch_is_repeatable() {
    let requests = requests_for(GITHUB_API.routes()).unwrap();
    for (name, adapter) in registry().snapshot() {
        let router = adapter.build(GITHUB_API.routes(), Mode::WritePath);

        let mut first = RecordingSink::new();
        serve_all(&*router, &requests, &mut first);
        let mut second = RecordingSink::new();
        serve_all(&*router, &requests, &mut second);

        assert!(!first.body().is_empty(), "{name}");
        assert_eq!(first.body(), second.body(), "{name}");
    }
}

#[test]
fn skip_mode_writes_nothing() {
    let requests = requests_for(GITHUB_API.routes()).unwrap();
    for (name, adapter) in registry().snapshot() {
        let router = adapter.build(GITHUB_API.routes(), Mode::SkipData);
        let mut sink = RecordingSink::new();
        serve_all(&*router, &requests, &mut sink);

        assert_eq!(sink.status(), StatusCode::OK, "{name}");
        assert!(sink.body().is_empty(), "{name}");
    }
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut registry = Registry::new();
    registry.try_register(Arc::new(MatchitAdapter)).unwrap();
    registry.try_register(Arc::new(RegexAdapter)).unwrap();

    assert!(registry.try_register(Arc::new(MatchitAdapter)).is_err());
    assert_eq!(registry.len(), 2);
}

#[test]
fn adapter_selection() {
    let lookup = |value: &'static str| {
        move |key: &str| (key == "ROUTE_BENCH_ADAPTERS").then(|| value.to_owned())
    };

    let config = BenchConfig::from_lookup(lookup("Regex,Matchit")).unwrap();
    let selected = config.adapters(registry()).unwrap();
    assert_eq!(selected.keys().copied().collect::<Vec<_>>(), vec!["Matchit", "Regex"]);

    let config = BenchConfig::from_lookup(lookup("Gin")).unwrap();
    assert!(matches!(config.adapters(registry()), Err(ConfigError::UnknownAdapter { .. })));

    let all = BenchConfig::from_lookup(|_| None).unwrap().adapters(registry()).unwrap();
    assert_eq!(all.len(), registry().len());
}

#[test]
fn literal_parameter_paths_resolve() {
    let route = Route::get("/repos/:owner/:repo/stargazers");
    let req = bencher::request(&route).unwrap();

    for (name, adapter) in registry().snapshot() {
        let router = adapter.build(&[route], Mode::WritePath);
        assert_eq!(serve(&*router, &req).body_str(), route.path(), "{name}");
    }
}
