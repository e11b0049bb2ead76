pub mod report;
pub mod runner;

pub use runner::BenchmarkResult;
pub use runner::BenchmarkRunner;
pub use runner::DEFAULT_WORKLOAD;

/// Run the full benchmark at the given workload size.
pub fn run_benchmark(workload: usize) -> anyhow::Result<()> {
    let runner = BenchmarkRunner::new(workload);
    runner.run()
}
