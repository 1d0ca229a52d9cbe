use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_CERTS_DIR: &str = "certs";
pub const DEFAULT_OUTPUT: &str = "tls-anchors.h";
pub const DEFAULT_EXTENSION: &str = "cer";
pub const DEFAULT_BRSSL: &str = "brssl";
pub const DEFAULT_OPENSSL: &str = "openssl";

#[derive(Parser, Debug)]
#[command(
    name = "mkanchors",
    version,
    about = "Regenerate the compiled TLS trust-anchor header",
    args_override_self = true
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_CERTS_DIR,
        help = "Directory holding the certificate bundle"
    )]
    pub certs_dir: PathBuf,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_OUTPUT,
        help = "Generated header path (overwritten)"
    )]
    pub output: PathBuf,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_EXTENSION,
        help = "Certificate file extension"
    )]
    pub extension: String,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_BRSSL,
        help = "Trust-anchor compiler binary (BearSSL brssl)"
    )]
    pub brssl: PathBuf,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_OPENSSL,
        help = "Certificate decoder binary (openssl)"
    )]
    pub openssl: PathBuf,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Write the header (default when no subcommand is given)
    Generate,
    /// Render the header in memory and compare it with the file on disk
    Check,
    /// Print the certificates in the order they are handed to brssl
    List,
    /// Report whether the tools and paths are usable
    Doctor,
}
