//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep DTO/report structs in one place.
//! - Make `--json` output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — fetch target, step/fetch reports, run summaries, doctor
//!   report, JSON output wrapper.
//!
//! ## Rule of thumb
//! Domain types are data-only: no filesystem/network side effects.

pub mod models;
