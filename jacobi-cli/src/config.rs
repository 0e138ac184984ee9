use tracing::warn;

pub const DEFAULT_N: usize = 1024;
pub const DEFAULT_M: usize = 1024;
pub const DEFAULT_ITERS: usize = 10;

/// Grid shape and iteration count for one testbench run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub n: usize,
    pub m: usize,
    pub iters: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            n: DEFAULT_N,
            m: DEFAULT_M,
            iters: DEFAULT_ITERS,
        }
    }
}

impl RunConfig {
    /// Resolves the `N M [ITERS]` positionals.
    ///
    /// N and M are only taken together: a lone value leaves both at their
    /// defaults. ITERS is independent of them.
    pub fn from_positionals(values: &[usize]) -> RunConfig {
        let mut cfg = RunConfig::default();
        match values {
            [] => {}
            [lone] => {
                warn!(value = *lone, "N and M must be given together; using defaults");
            }
            [n, m] => {
                cfg.n = *n;
                cfg.m = *m;
            }
            [n, m, iters, ..] => {
                cfg.n = *n;
                cfg.m = *m;
                cfg.iters = *iters;
            }
        }
        cfg
    }

    /// Lattice-cell updates performed by the whole run.
    pub fn cell_updates(&self) -> u64 {
        self.n as u64 * self.m as u64 * self.iters as u64
    }
}
