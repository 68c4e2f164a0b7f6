use bencher::criterion::{criterion_group, criterion_main, Criterion};
use bencher::fixtures::STATIC_ROUTES;

fn benchmark_static_routes(criterion: &mut Criterion) {
    bencher::bench_fixture(criterion, &STATIC_ROUTES, &[]);
}

criterion_group! {
    name = static_routes;
    config = bencher::criterion_config();
    targets = benchmark_static_routes
}
criterion_main!(static_routes);
