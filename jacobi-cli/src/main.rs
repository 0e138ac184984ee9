//! `jacobi-tb` — host testbench for the 2D Jacobi kernel.
//!
//! ```text
//! USAGE:
//!   jacobi-tb [N M [ITERS]]              Print the regression checksum line
//!   jacobi-tb N M ITERS --csv [--header] Print one benchmark CSV row
//!   jacobi-tb N M ITERS f32|f64          Benchmark row in the given precision
//!   jacobi-tb N M ITERS --dump <DIR>     Also write grid.bin + meta.json
//! ```

mod bench;
mod config;
mod dump;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use bench::{BenchRecord, HEADER};
use clap::{ArgGroup, Parser, ValueEnum};
use config::RunConfig;
use jacobi_core::{Cell, Jacobi, relative_l2_error};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
#[command(group(ArgGroup::new("csv_mode").args(["csv", "bench_precision"]).multiple(true)))]
struct Args {
    /// Grid rows (default 1024, only used together with M)
    n: Option<usize>,

    /// Grid columns (default 1024)
    m: Option<usize>,

    /// Iteration count (default 10)
    iters: Option<usize>,

    /// Benchmark precision; selects the precision and prints a CSV row
    #[arg(value_enum, value_name = "PRECISION", conflicts_with = "precision")]
    bench_precision: Option<Precision>,

    /// Cell precision
    #[arg(long, value_enum, default_value_t = Precision::F32)]
    precision: Precision,

    /// Print a benchmark CSV row instead of the checksum line
    #[arg(long)]
    csv: bool,

    /// Print the CSV header before the row
    #[arg(long, requires = "csv_mode")]
    header: bool,

    /// Directory to write the final grid and its metadata into
    #[arg(long)]
    dump: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Precision {
    F32,
    F64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let dims: Vec<usize> = [args.n, args.m, args.iters].into_iter().flatten().collect();
    let cfg = RunConfig::from_positionals(&dims);
    let precision = args.bench_precision.unwrap_or(args.precision);
    let csv = args.csv || args.bench_precision.is_some();
    debug!(?cfg, ?precision, csv, "testbench config");

    match precision {
        Precision::F32 => run::<f32>(&args, cfg, precision, csv),
        Precision::F64 => run::<f64>(&args, cfg, precision, csv),
    }
}

fn run<T: Cell>(args: &Args, cfg: RunConfig, precision: Precision, csv: bool) -> Result<()> {
    let mut jacobi = Jacobi::<T>::new(cfg.n, cfg.m)?;

    let t0 = Instant::now();
    jacobi.run(cfg.iters)?;
    let elapsed = t0.elapsed();
    info!(
        n = cfg.n,
        m = cfg.m,
        iters = cfg.iters,
        elapsed_ms = elapsed.as_secs_f64() * 1e3,
        "iterations complete"
    );

    if csv {
        let rel_error = match precision {
            Precision::F64 => 0.0,
            Precision::F32 => {
                let mut reference = Jacobi::<f64>::new(cfg.n, cfg.m)?;
                reference.run(cfg.iters)?;
                relative_l2_error(jacobi.field(), reference.field())?
            }
        };
        if args.header {
            println!("{HEADER}");
        }
        println!("{}", BenchRecord::new(cfg, T::NAME, elapsed, rel_error).csv_row());
    } else {
        println!("{}", jacobi.report());
    }

    if let Some(dir) = &args.dump {
        dump::write_dump(dir, &jacobi)?;
        info!(dir = %dir.display(), "wrote grid dump");
    }

    Ok(())
}
