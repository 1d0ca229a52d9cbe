//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — generate/check (runs brssl and openssl).
//! - `admin.rs` — list/doctor (no header rendering).
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod admin;
pub mod runtime;

use crate::cli::{Cli, Commands};
use crate::domain::models::Settings;

pub use admin::{handle_doctor, handle_list};
pub use runtime::{handle_check, handle_generate};

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings {
        certs_dir: cli.certs_dir,
        output: cli.output,
        extension: cli.extension,
        brssl: cli.brssl,
        openssl: cli.openssl,
    };

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => handle_generate(&settings, cli.json),
        Commands::Check => handle_check(&settings, cli.json),
        Commands::List => handle_list(&settings, cli.json),
        Commands::Doctor => handle_doctor(&settings, cli.json),
    }
}
