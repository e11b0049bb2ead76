use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::phases;
use crate::sequence::{LinkedSequence, VecSequence};
use crate::workload::WorkloadRng;

use super::report;

/// Build-time workload size. Not a runtime flag: changing it means
/// recompiling.
pub const DEFAULT_WORKLOAD: usize = 50_000;

/// Results file written next to wherever the binary runs.
pub const RESULTS_FILE: &str = "benchmark_results.json";

/// Timings for one storage strategy, in integer-truncated milliseconds.
///
/// Each phase duration is truncated independently before the total is
/// formed, so the total is always the exact sum of the printed cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyResult {
    pub strategy: String,
    pub insert_ms: u64,
    pub delete_ms: u64,
    pub total_ms: u64,
}

impl StrategyResult {
    pub fn new(strategy: &str, insert: Duration, delete: Duration) -> Self {
        let insert_ms = insert.as_millis() as u64;
        let delete_ms = delete.as_millis() as u64;
        Self {
            strategy: strategy.to_string(),
            insert_ms,
            delete_ms,
            total_ms: insert_ms + delete_ms,
        }
    }
}

/// One complete benchmark run: both strategies plus the derived ratio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub workload: usize,
    pub vector: StrategyResult,
    pub list: StrategyResult,
    /// List total over vector total. `None` when the vector total is zero
    /// milliseconds and the ratio is undefined.
    pub vector_speedup: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl BenchmarkResult {
    pub fn new(workload: usize, vector: StrategyResult, list: StrategyResult) -> Self {
        let vector_speedup = speedup(vector.total_ms, list.total_ms);
        Self {
            workload,
            vector,
            list,
            vector_speedup,
            timestamp: Some(Local::now().format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }
}

/// Ratio of list total to vector total, or `None` on a zero denominator
/// (possible on very fast hardware or a zero workload).
fn speedup(vector_total_ms: u64, list_total_ms: u64) -> Option<f64> {
    if vector_total_ms == 0 {
        None
    } else {
        Some(list_total_ms as f64 / vector_total_ms as f64)
    }
}

/// Drives the benchmark pipeline: seed, insert into each strategy, drain
/// each strategy, report. Strictly sequential, single-threaded.
pub struct BenchmarkRunner {
    workload: usize,
}

impl BenchmarkRunner {
    pub fn new(workload: usize) -> Self {
        Self { workload }
    }

    /// Run all four timed phases with an entropy-seeded generator, print
    /// the comparison table, and persist the results file.
    pub fn run(&self) -> Result<()> {
        let mut rng = WorkloadRng::from_entropy();
        let result = self.measure(&mut rng);

        report::print_table(&result);
        report::write_results(Path::new(RESULTS_FILE), &result)?;
        println!("\nResults saved to {}", RESULTS_FILE);

        Ok(())
    }

    /// Execute the four timed phases in pipeline order and assemble the
    /// result. Takes the generator by reference so tests can seed it.
    pub fn measure(&self, rng: &mut WorkloadRng) -> BenchmarkResult {
        let n = self.workload;

        let mut vec_seq = VecSequence::new();
        let mut list_seq = LinkedSequence::new();

        let vec_insert = phases::insertion(&mut vec_seq, n, rng);
        let list_insert = phases::insertion(&mut list_seq, n, rng);
        let vec_delete = phases::deletion(&mut vec_seq, rng);
        let list_delete = phases::deletion(&mut list_seq, rng);

        BenchmarkResult::new(
            n,
            StrategyResult::new("vector", vec_insert, vec_delete),
            StrategyResult::new("list", list_insert, list_delete),
        )
    }
}
