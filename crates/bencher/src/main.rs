//! Benchmarks and correctness checks live in `cargo bench` and `cargo test`.

use std::process::ExitCode;

fn main() -> ExitCode {
    println!("Usage: cargo bench -p bencher (correctness: cargo test -p bencher)");
    ExitCode::FAILURE
}
