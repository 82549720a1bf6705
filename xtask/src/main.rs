use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "spanpath workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the heap, disjoint-set and graph benchmarks
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCHES: &[&str] = &[
    "dary_heap_benchmark",
    "disjoint_set_benchmark",
    "graph_benchmark",
];

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct BenchmarkInfo {
    #[serde(default)]
    throughput: Option<Throughput>,
}

#[derive(Deserialize)]
enum Throughput {
    Elements(u64),
    Bytes(u64),
    #[serde(other)]
    Other,
}

/// One measured benchmark: mean wall time plus an ops/s figure.
struct Measurement {
    mean_ns: f64,
    per_second: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["bench", "--no-run", "-p", "spanpath"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    for bench in BENCHES {
        println!("\n>>> Running {bench}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.args(["bench", "-p", "spanpath", "--bench", bench]);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.args(["--measurement-time", "0.1", "--sample-size", "10", "--noplot"]);
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench {bench}"))?;

        if status.success() {
            println!("Finished {bench} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: benchmark {bench} failed");
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = BTreeMap::new();
    collect_results(criterion_dir, criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# spanpath Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Benchmark | Mean | Ops/s |")?;
    writeln!(file, "|---|---|---|")?;

    for (id, m) in &results {
        writeln!(
            file,
            "| {} | {} | {} |",
            id,
            format_time(m.mean_ns),
            format_rate(m.per_second)
        )?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Walks criterion's output tree, reading every `new/estimates.json`.
fn collect_results(
    root: &Path,
    dir: &Path,
    results: &mut BTreeMap<String, Measurement>,
) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) == Some("report") {
            continue;
        }

        let estimates = path.join("new").join("estimates.json");
        if estimates.is_file() {
            if let Some(m) = read_measurement(&path.join("new"))? {
                results.insert(benchmark_id(root, &path), m);
            }
        } else {
            collect_results(root, &path, results)?;
        }
    }
    Ok(())
}

fn read_measurement(dir: &Path) -> Result<Option<Measurement>> {
    let estimates: Estimates = read_json(&dir.join("estimates.json"))?;
    let mean_ns = estimates.mean.point_estimate;
    if mean_ns <= 0.0 {
        return Ok(None);
    }

    let elements = match read_json::<BenchmarkInfo>(&dir.join("benchmark.json")) {
        Ok(BenchmarkInfo {
            throughput: Some(Throughput::Elements(n) | Throughput::Bytes(n)),
        }) => n as f64,
        _ => 1.0,
    };

    Ok(Some(Measurement {
        mean_ns,
        per_second: elements * 1e9 / mean_ns,
    }))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

fn benchmark_id(root: &Path, dir: &Path) -> String {
    let relative: PathBuf = dir.strip_prefix(root).unwrap_or(dir).to_path_buf();
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn format_time(ns: f64) -> String {
    if ns > 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns > 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{ns:.0} ns")
    }
}

fn format_rate(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}
