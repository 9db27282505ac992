//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `transfer.rs` — scp/ssh subprocess invocation and status capture.
//! - `fetch_ops.rs` — the fetch sequence: run directory, artifact copies,
//!   frontier snapshot.
//! - `doctor.rs` — environment preflight checks.
//! - `storage.rs` — local path layout, snapshot naming, audit log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod doctor;
pub mod fetch_ops;
pub mod output;
pub mod storage;
pub mod transfer;
