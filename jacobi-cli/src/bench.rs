use std::time::Duration;

use crate::config::RunConfig;

pub const BACKEND: &str = "rust_cpu";
pub const HEADER: &str = "backend,precision,N,M,iters,runtime_ms,MLUPS,rel_error";

/// One row of the benchmark sweep CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchRecord {
    pub precision: &'static str,
    pub n: usize,
    pub m: usize,
    pub iters: usize,
    pub runtime_ms: f64,
    pub mlups: f64,
    pub rel_error: f64,
}

impl BenchRecord {
    pub fn new(cfg: RunConfig, precision: &'static str, elapsed: Duration, rel_error: f64) -> Self {
        let runtime_ms = elapsed.as_secs_f64() * 1e3;
        BenchRecord {
            precision,
            n: cfg.n,
            m: cfg.m,
            iters: cfg.iters,
            runtime_ms,
            mlups: mlups(cfg.cell_updates(), runtime_ms),
            rel_error,
        }
    }

    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{:.3},{:.3},{:.6e}",
            BACKEND,
            self.precision,
            self.n,
            self.m,
            self.iters,
            self.runtime_ms,
            self.mlups,
            self.rel_error
        )
    }
}

/// Million lattice updates per second; 0 for an unmeasurably short run.
pub fn mlups(updates: u64, runtime_ms: f64) -> f64 {
    if runtime_ms > 0.0 {
        updates as f64 / (runtime_ms * 1e3)
    } else {
        0.0
    }
}
