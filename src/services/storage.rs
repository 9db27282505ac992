//! Local path layout, snapshot naming and the best-effort audit log.

use crate::domain::models::{FetchTarget, RunSummary};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn run_dir(target: &FetchTarget, label: &str) -> PathBuf {
    target.data_root.join(label)
}

/// Snapshot filename for one invocation. Second-granularity timestamps mean
/// two invocations within the same second share a name and the later one
/// wins; a known limitation inherited from the naming scheme.
pub fn snapshot_name(ts: u64) -> String {
    format!("frontier-{ts}.txt")
}

pub fn is_snapshot_name(name: &str) -> bool {
    name.starts_with("frontier-") && name.ends_with(".txt")
}

pub fn is_artifact_name(name: &str) -> bool {
    name.ends_with(".jl") || name.ends_with(".jl.gz") || name.ends_with(".log")
}

/// Walks the data root and summarizes each run directory. A missing data
/// root is an empty listing, not an error.
pub fn list_runs(target: &FetchTarget) -> anyhow::Result<Vec<RunSummary>> {
    let entries = match std::fs::read_dir(&target.data_root) {
        Ok(e) => e,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut runs = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let label = entry.file_name().to_string_lossy().into_owned();
        let mut artifacts = 0;
        let mut snapshots = 0;
        for file in std::fs::read_dir(entry.path())? {
            let name = file?.file_name().to_string_lossy().into_owned();
            if is_snapshot_name(&name) {
                snapshots += 1;
            } else if is_artifact_name(&name) {
                artifacts += 1;
            }
        }
        runs.push(RunSummary {
            label,
            artifacts,
            snapshots,
        });
    }
    runs.sort_by(|a, b| a.label.cmp(&b.label));
    Ok(runs)
}

/// Append-only JSONL trail of invocations under the user config dir.
/// Best-effort: audit failures never affect the command itself.
pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/crawlfetch/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": unix_now(),
        "action": action,
        "data": data
    });
    let line = format!("{event}\n");
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

#[cfg(test)]
mod tests {
    use super::{is_artifact_name, is_snapshot_name, snapshot_name};

    #[test]
    fn snapshot_names_round_trip_through_the_filter() {
        let name = snapshot_name(1700000000);
        assert_eq!(name, "frontier-1700000000.txt");
        assert!(is_snapshot_name(&name));
        assert!(!is_snapshot_name("frontier.log"));
    }

    #[test]
    fn artifact_filter_matches_the_three_copied_classes() {
        assert!(is_artifact_name("items.jl"));
        assert!(is_artifact_name("items.jl.gz"));
        assert!(is_artifact_name("crawl.log"));
        assert!(!is_artifact_name("frontier-1.txt"));
    }
}
