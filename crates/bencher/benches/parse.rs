use bencher::criterion::{criterion_group, criterion_main, Criterion};
use bencher::fixtures::PARSE_API;

fn benchmark_parse(criterion: &mut Criterion) {
    bencher::bench_fixture(criterion, &PARSE_API, &bencher::PARSE_CASES);
}

criterion_group! {
    name = parse;
    config = bencher::criterion_config();
    targets = benchmark_parse
}
criterion_main!(parse);
