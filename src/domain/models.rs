use serde::Serialize;
use std::path::PathBuf;

/// The three artifact classes pulled from the remote home directory.
/// Globs are expanded remotely by scp; the order is the copy order.
pub const ARTIFACT_GLOBS: [&str; 3] = ["*.jl", "*.jl.gz", "*.log"];

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Everything needed to reach the crawl box and lay files out locally.
/// Defaults live in `cli.rs`; all fields are flag-overridable.
#[derive(Debug, Clone)]
pub struct FetchTarget {
    pub host: String,
    pub data_root: PathBuf,
    pub frontier_script: String,
    pub state_glob: String,
}

/// Outcome of one step of the fetch sequence. A failed step is data, not an
/// error: the sequence never short-circuits.
#[derive(Debug, Serialize)]
pub struct StepReport {
    pub step: String,
    pub detail: String,
    /// Exit code of the underlying subprocess; `None` when it could not be
    /// spawned at all, or was killed by a signal.
    pub exit_code: Option<i32>,
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct FetchReport {
    pub label: String,
    pub dest: String,
    pub snapshot: String,
    pub steps: Vec<StepReport>,
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub label: String,
    pub artifacts: usize,
    pub snapshots: usize,
}

#[derive(Debug, Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct DoctorReport {
    pub overall: String,
    pub checks: Vec<CheckItem>,
}
