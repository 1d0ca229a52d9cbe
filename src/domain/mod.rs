//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep report and settings structs in one place.
//! - Make `--json` output schema changes explicit and reviewable.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or subprocess side effects.
//!
//! ## Compatibility note
//! Changes in the report structs alter `--json` output. Keep them in sync with
//! `docs/contracts/*`.

pub mod models;
