//! Environment preflight: can a fetch plausibly succeed here?

use crate::domain::models::{CheckItem, DoctorReport, FetchTarget};

fn binary_available(name: &str) -> bool {
    std::process::Command::new(name)
        .arg("-V")
        .output()
        .is_ok()
}

pub fn run_doctor(target: &FetchTarget) -> DoctorReport {
    let checks = vec![
        CheckItem {
            name: "host_configured".to_string(),
            status: if target.host.trim().is_empty() {
                "missing"
            } else {
                "ok"
            }
            .to_string(),
        },
        CheckItem {
            name: "data_root".to_string(),
            status: if target.data_root.is_dir() {
                "ok"
            } else {
                "will_create"
            }
            .to_string(),
        },
        CheckItem {
            name: "scp_available".to_string(),
            status: if binary_available("scp") { "ok" } else { "missing" }.to_string(),
        },
        CheckItem {
            name: "ssh_available".to_string(),
            status: if binary_available("ssh") { "ok" } else { "missing" }.to_string(),
        },
    ];

    let overall = if checks
        .iter()
        .all(|c| c.status == "ok" || c.status == "will_create")
    {
        "ok"
    } else {
        "needs_attention"
    }
    .to_string();

    DoctorReport { overall, checks }
}
