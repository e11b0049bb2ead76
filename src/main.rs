#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use seqbench::benchmark;

fn main() -> Result<()> {
    // No flags, no environment variables: the workload size is a
    // compile-time choice.
    benchmark::run_benchmark(benchmark::DEFAULT_WORKLOAD)
}
