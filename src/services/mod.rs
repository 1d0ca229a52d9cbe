//! Service layer containing the side-effecting helpers.
//!
//! ## Service map
//! - `tools.rs` — brssl/openssl behind the `TrustAnchorCompiler` and `CertificateDecoder` traits.
//! - `certs.rs` — certificate bundle enumeration.
//! - `pipeline.rs` — bundle + real tools + `anchors::generate`.
//! - `storage.rs` — header file writing/reading + digests.
//! - `doctor.rs` — tool and path availability checks.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod certs;
pub mod doctor;
pub mod output;
pub mod pipeline;
pub mod storage;
pub mod tools;
