//! Report rendering: the stdout comparison table, a markdown rendition,
//! and the persisted results file.

use std::fs;
use std::path::Path;

use anyhow::Result;

use super::runner::BenchmarkResult;

/// Render the fixed-width comparison table.
///
/// Numeric cells are right-aligned in 10-character fields. The ratio row
/// prints two decimals with a trailing `x`, or `inf` when the vector
/// total is zero and the ratio is undefined.
pub fn render_table(result: &BenchmarkResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Vector vs List performance when N= {}\n",
        result.workload
    ));
    out.push_str("\n+------------------+------------+\n");
    out.push_str("| Operation        | Time (ms)  |\n");
    out.push_str("+------------------+------------+\n");
    out.push_str(&format!(
        "| Vector Insertion | {:>10} |\n",
        result.vector.insert_ms
    ));
    out.push_str(&format!(
        "| Vector Deletion  | {:>10} |\n",
        result.vector.delete_ms
    ));
    out.push_str(&format!(
        "| Vector Total     | {:>10} |\n",
        result.vector.total_ms
    ));
    out.push_str("+------------------+------------+\n");
    out.push_str(&format!(
        "| List Insertion   | {:>10} |\n",
        result.list.insert_ms
    ));
    out.push_str(&format!(
        "| List Deletion    | {:>10} |\n",
        result.list.delete_ms
    ));
    out.push_str(&format!(
        "| List Total       | {:>10} |\n",
        result.list.total_ms
    ));
    out.push_str("+------------------+------------+\n");
    out.push_str(&format!(
        "| Vector is Faster | {:>10}x|\n",
        ratio_cell(result.vector_speedup)
    ));
    out.push_str("+------------------+------------+\n");
    out
}

fn ratio_cell(speedup: Option<f64>) -> String {
    match speedup {
        Some(ratio) => format!("{:.2}", ratio),
        None => "inf".to_string(),
    }
}

/// Print the comparison table to standard output.
pub fn print_table(result: &BenchmarkResult) {
    print!("{}", render_table(result));
}

/// Persist a run as pretty-printed JSON.
pub fn write_results(path: &Path, result: &BenchmarkResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(path, json)?;
    Ok(())
}

/// Generate a markdown report from a previously written results file.
pub fn generate_markdown_report(results_file: &Path, output_file: &Path) -> Result<()> {
    let content = fs::read_to_string(results_file)?;
    let result: BenchmarkResult = serde_json::from_str(&content)?;

    fs::write(output_file, build_markdown_report(&result))?;
    Ok(())
}

fn build_markdown_report(result: &BenchmarkResult) -> String {
    let mut report = format!(
        "# Sequence Churn Benchmark\n\n\
         **Workload:** {} insertions and {} deletions per strategy\n\n",
        result.workload, result.workload
    );
    if let Some(timestamp) = &result.timestamp {
        report.push_str(&format!("**Generated:** {}\n\n", timestamp));
    }

    report.push_str("## Results\n\n");
    report.push_str("| Strategy | Insertion (ms) | Deletion (ms) | Total (ms) |\n");
    report.push_str("|----------|----------------|---------------|------------|\n");
    for strategy in [&result.vector, &result.list] {
        report.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            strategy.strategy, strategy.insert_ms, strategy.delete_ms, strategy.total_ms
        ));
    }

    report.push_str(&format!(
        "\n**Vector is faster by:** {}x\n",
        ratio_cell(result.vector_speedup)
    ));

    report.push_str("\n## Notes\n\n");
    report.push_str("- Insertion keeps each sequence sorted via a front-to-back scan\n");
    report.push_str("- Deletion removes uniformly random positions until empty\n");
    report.push_str("- Timings are wall-clock, truncated to whole milliseconds\n");
    report.push_str("- Single run, no warm-up; results vary with hardware and load\n");

    report
}
