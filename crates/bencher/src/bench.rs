//! Criterion bodies shared by the bench targets.
//!
//! Routers are built and requests prepared before a benchmark starts, so only dispatch
//! is measured. Every group reports throughput in requests.

use std::fmt::Display;
use std::hint::black_box;

use route_bench::{BoxHandler, DiscardSink, Fixture, Mode, RequestHandler, Snapshot};
use tracing::{error, info};

use crate::cases::{BenchCase, MICRO_CASES};
use crate::criterion::{BenchmarkId, Criterion, Throughput};
use crate::driver::{requests_for, serve_all};

fn prepare<T, E: Display>(what: &str, result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            error!(cause = %e, "failed to prepare {what}");
            panic!("failed to prepare {what}: {e}");
        }
    }
}

/// The adapters selected by the configuration.
///
/// # Panics
///
/// When `ROUTE_BENCH_ADAPTERS` names an adapter that is not registered.
pub fn selected_adapters() -> Snapshot {
    prepare("adapters", crate::config().adapters(route_bench_adapters::registry()))
}

/// `micro/<case>`: single-route routers, one request each.
pub fn bench_micro(criterion: &mut Criterion) {
    let adapters = selected_adapters();

    for case in &MICRO_CASES {
        let req = prepare(case.name(), case.request());
        let mut group = criterion.benchmark_group(format!("micro/{}", case.name()));
        group.throughput(Throughput::Elements(1));

        for (name, adapter) in &adapters {
            let router = case.build(adapter.as_ref());
            let mut sink = DiscardSink::new();
            group.bench_function(BenchmarkId::from_parameter(name), |b| {
                b.iter(|| router.handle(black_box(&req), &mut sink));
            });
        }

        group.finish();
    }
}

/// `<fixture>/<case>` for every single request case, then `<fixture>/all` dispatching every
/// route of the fixture once per iteration.
pub fn bench_fixture(criterion: &mut Criterion, fixture: &Fixture, cases: &[BenchCase]) {
    let routers: Vec<(&'static str, BoxHandler)> = selected_adapters()
        .into_iter()
        .map(|(name, adapter)| (name, adapter.build(fixture.routes(), Mode::SkipData)))
        .collect();
    info!(fixture = fixture.name(), routes = fixture.len(), routers = routers.len(), "routers built");

    for case in cases {
        let req = prepare(case.name, case.request());
        let mut group = criterion.benchmark_group(format!("{}/{}", fixture.name(), case.name));
        group.throughput(Throughput::Elements(1));

        for (name, router) in &routers {
            let mut sink = DiscardSink::new();
            group.bench_function(BenchmarkId::from_parameter(name), |b| {
                b.iter(|| router.handle(black_box(&req), &mut sink));
            });
        }

        group.finish();
    }

    let requests = prepare(fixture.name(), requests_for(fixture.routes()));
    let mut group = criterion.benchmark_group(format!("{}/all", fixture.name()));
    group.throughput(Throughput::Elements(u64::try_from(requests.len()).unwrap_or(u64::MAX)));

    for (name, router) in &routers {
        let mut sink = DiscardSink::new();
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| serve_all(&**router, black_box(&requests), &mut sink));
        });
    }

    group.finish();
}
