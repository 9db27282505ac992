use crate::cli::{Cli, Commands};
use crate::domain::models::{FetchTarget, JsonOut};
use crate::services::output::print_out;
use crate::services::{doctor, fetch_ops, storage};
use anyhow::bail;

pub fn handle_commands(cli: &Cli, target: &FetchTarget) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Fetch { label, .. } => {
            storage::audit(
                "fetch",
                serde_json::json!({ "label": label, "host": target.host }),
            );
            let report = fetch_ops::run_fetch(target, label);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: report.ok,
                        data: &report
                    })?
                );
            } else {
                for s in &report.steps {
                    println!(
                        "{}\t{}\t{}",
                        s.step,
                        if s.ok { "ok" } else { "failed" },
                        s.detail
                    );
                }
                println!("snapshot: {}", report.snapshot);
            }
            let failed = report.steps.iter().filter(|s| !s.ok).count();
            if failed > 0 {
                bail!("{failed} of {} steps failed", report.steps.len());
            }
        }
        Commands::Runs => {
            let runs = storage::list_runs(target)?;
            print_out(cli.json, &runs, |r| {
                format!(
                    "{}\t{} artifacts\t{} snapshots",
                    r.label, r.artifacts, r.snapshots
                )
            })?;
        }
        Commands::Doctor => {
            let report = doctor::run_doctor(target);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: report.overall == "ok",
                        data: &report
                    })?
                );
            } else {
                println!("crawlfetch doctor: {}", report.overall);
                for c in &report.checks {
                    println!("{}\t{}", c.name, c.status);
                }
            }
        }
    }
    Ok(())
}
