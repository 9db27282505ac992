//! The fetch sequence.
//!
//! Five steps, in order: ensure the run directory, copy the three artifact
//! classes, snapshot the frontier. Steps run unconditionally; an earlier
//! failure never stops a later step. The caller gets every outcome back in
//! the report and decides what the overall exit status should be.

use crate::domain::models::{FetchReport, FetchTarget, StepReport, ARTIFACT_GLOBS};
use crate::services::{storage, transfer};
use log::debug;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn run_fetch(target: &FetchTarget, label: &str) -> FetchReport {
    let dest = storage::run_dir(target, label);
    let mut steps = Vec::with_capacity(ARTIFACT_GLOBS.len() + 2);

    steps.push(ensure_run_dir(&dest));

    for glob in ARTIFACT_GLOBS {
        steps.push(transfer::copy_glob(target, glob, &dest));
    }

    let snapshot = dest.join(storage::snapshot_name(storage::unix_now()));
    steps.push(write_snapshot(target, &snapshot));

    let ok = steps.iter().all(|s| s.ok);
    FetchReport {
        label: label.to_string(),
        dest: dest.display().to_string(),
        snapshot: snapshot.display().to_string(),
        steps,
        ok,
    }
}

fn ensure_run_dir(dest: &Path) -> StepReport {
    debug!("ensuring run dir {}", dest.display());
    let result = std::fs::create_dir_all(dest);
    StepReport {
        step: "create run dir".to_string(),
        detail: match &result {
            Ok(()) => dest.display().to_string(),
            Err(err) => format!("{}: {}", dest.display(), err),
        },
        exit_code: None,
        ok: result.is_ok(),
    }
}

/// The snapshot file is created (truncated) before the remote session is
/// spawned, so an unreachable host still leaves an empty `frontier-<ts>.txt`
/// behind, the same residue a shell redirect would leave. Captured stdout is
/// written verbatim, partial output from a failed run included.
fn write_snapshot(target: &FetchTarget, path: &Path) -> StepReport {
    let file = File::create(path);
    let (stdout, mut report) = transfer::capture_inventory(target);
    match file {
        Ok(mut f) => {
            if let Err(err) = f.write_all(&stdout) {
                report.ok = false;
                report.detail = format!("{}: write {}: {}", report.detail, path.display(), err);
            }
        }
        Err(err) => {
            report.ok = false;
            report.detail = format!("{}: create {}: {}", report.detail, path.display(), err);
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::ensure_run_dir;
    use tempfile::TempDir;

    #[test]
    fn run_dir_creation_is_idempotent() {
        let tmp = TempDir::new().expect("create temp dir");
        let dest = tmp.path().join("data").join("run42");

        let first = ensure_run_dir(&dest);
        assert!(first.ok);
        assert!(dest.is_dir());

        let second = ensure_run_dir(&dest);
        assert!(second.ok);
    }
}
