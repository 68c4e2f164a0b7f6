//! Heap usage of every router adapter, measured with dhat.
//!
//! For each adapter and fixture: bytes and blocks still held by the built router, and
//! heap allocations per dispatched request in skip mode. `ROUTE_BENCH_FORMAT=json`
//! prints one JSON object per line instead of a table.

use std::process::ExitCode;

use bencher::fixtures::all_fixtures;
use bencher::{init_tracing, requests_for, serve_all, BenchConfig, ReportFormat};
use dhat::HeapStats;
use route_bench::{Adapter, BuildError, DiscardSink, Fixture, Mode};
use serde::Serialize;
use tracing::{error, info};

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[derive(Debug, Serialize)]
struct MemoryRow {
    adapter: &'static str,
    fixture: &'static str,
    routes: usize,
    bytes: usize,
    blocks: usize,
    allocs_per_request: f64,
}

#[allow(clippy::cast_precision_loss, reason = "allocation and request counts stay far below 2^52")]
fn per_request(blocks: u64, requests: usize) -> f64 {
    blocks as f64 / requests.max(1) as f64
}

fn measure(adapter: &dyn Adapter, fixture: &Fixture) -> Result<MemoryRow, BuildError> {
    let requests = requests_for(fixture.routes())?;
    let mut sink = DiscardSink::new();

    let before = HeapStats::get();
    let router = adapter.try_build(fixture.routes(), Mode::SkipData)?;
    let built = HeapStats::get();
    serve_all(&*router, &requests, &mut sink);
    let served = HeapStats::get();
    drop(router);

    Ok(MemoryRow {
        adapter: adapter.name(),
        fixture: fixture.name(),
        routes: fixture.len(),
        bytes: built.curr_bytes.saturating_sub(before.curr_bytes),
        blocks: built.curr_blocks.saturating_sub(before.curr_blocks),
        allocs_per_request: per_request(served.total_blocks - built.total_blocks, requests.len()),
    })
}

fn print_text(rows: &[MemoryRow]) {
    println!("{:<16} {:<8} {:>6} {:>12} {:>8} {:>14}", "adapter", "fixture", "routes", "bytes", "blocks", "allocs/request");
    for row in rows {
        println!(
            "{:<16} {:<8} {:>6} {:>12} {:>8} {:>14.2}",
            row.adapter, row.fixture, row.routes, row.bytes, row.blocks, row.allocs_per_request
        );
    }
}

fn print_json(rows: &[MemoryRow]) -> Result<(), serde_json::Error> {
    for row in rows {
        println!("{}", serde_json::to_string(row)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let _profiler = dhat::Profiler::new_heap();

    let config = match BenchConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid benchmark configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.log_level());

    let adapters = match config.adapters(route_bench_adapters::registry()) {
        Ok(adapters) => adapters,
        Err(e) => {
            error!(cause = %e, "invalid adapter selection");
            return ExitCode::FAILURE;
        }
    };

    let mut rows = Vec::with_capacity(adapters.len() * all_fixtures().len());
    let mut failed = false;
    for adapter in adapters.values() {
        for fixture in all_fixtures() {
            match measure(adapter.as_ref(), fixture) {
                Ok(row) => rows.push(row),
                Err(e) => {
                    error!(adapter = adapter.name(), fixture = fixture.name(), cause = %e, "failed to build router");
                    failed = true;
                }
            }
        }
    }
    info!(rows = rows.len(), format = %config.format(), "memory report ready");

    match config.format() {
        ReportFormat::Text => print_text(&rows),
        ReportFormat::Json => {
            if let Err(e) = print_json(&rows) {
                error!(cause = %e, "failed to encode memory report");
                return ExitCode::FAILURE;
            }
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
