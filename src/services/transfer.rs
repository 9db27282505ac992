//! Subprocess plumbing for the two transfer tools.
//!
//! Both tools inherit stderr so their own diagnostics reach the terminal
//! unreworded; crawlfetch only records exit statuses. No timeout is applied,
//! so an unresponsive host blocks the step indefinitely.

use crate::domain::models::{FetchTarget, StepReport};
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

/// Compressed copy of `host:<glob>` into `dest`, via `scp -C`. The glob is
/// expanded on the remote side; scp itself reports when nothing matches.
pub fn copy_glob(target: &FetchTarget, glob: &str, dest: &Path) -> StepReport {
    let source = format!("{}:{}", target.host, glob);
    let step = format!("copy {glob}");
    debug!("spawning: scp -C {} {}", source, dest.display());
    match Command::new("scp").arg("-C").arg(&source).arg(dest).status() {
        Ok(status) => StepReport {
            step,
            detail: source,
            exit_code: status.code(),
            ok: status.success(),
        },
        Err(err) => StepReport {
            step,
            detail: format!("{source}: {err}"),
            exit_code: None,
            ok: false,
        },
    }
}

/// The command line handed to the remote shell. The state glob is left
/// unquoted on purpose: the remote shell expands it into one jobdir argument
/// per directory, which is the inventory script's calling convention.
pub fn inventory_command(target: &FetchTarget) -> String {
    format!("python3 {} {}", target.frontier_script, target.state_glob)
}

/// Runs the frontier inventory over ssh and returns its captured stdout
/// alongside the step outcome. Partial output from a failed run is returned
/// as-is; the caller decides where the bytes go.
pub fn capture_inventory(target: &FetchTarget) -> (Vec<u8>, StepReport) {
    let remote_cmd = inventory_command(target);
    let step = "frontier snapshot".to_string();
    debug!("spawning: ssh {} {}", target.host, remote_cmd);
    let result = Command::new("ssh")
        .arg(&target.host)
        .arg(&remote_cmd)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output();
    match result {
        Ok(out) => {
            let report = StepReport {
                step,
                detail: format!("{} {}", target.host, remote_cmd),
                exit_code: out.status.code(),
                ok: out.status.success(),
            };
            (out.stdout, report)
        }
        Err(err) => (
            Vec::new(),
            StepReport {
                step,
                detail: format!("{} {}: {}", target.host, remote_cmd, err),
                exit_code: None,
                ok: false,
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::inventory_command;
    use crate::domain::models::FetchTarget;
    use std::path::PathBuf;

    fn target() -> FetchTarget {
        FetchTarget {
            host: "crawler".to_string(),
            data_root: PathBuf::from("data"),
            frontier_script: "frontier-size.py".to_string(),
            state_glob: ".scrapy/*".to_string(),
        }
    }

    #[test]
    fn inventory_command_leaves_glob_for_remote_shell() {
        assert_eq!(
            inventory_command(&target()),
            "python3 frontier-size.py .scrapy/*"
        );
    }

    #[test]
    fn inventory_command_respects_overrides() {
        let mut t = target();
        t.frontier_script = "/opt/crawl/frontier-size.py".to_string();
        t.state_glob = "/srv/jobs/*".to_string();
        assert_eq!(
            inventory_command(&t),
            "python3 /opt/crawl/frontier-size.py /srv/jobs/*"
        );
    }
}
