use crate::anchors;
use crate::domain::models::{CertificateFile, GenerateStats, Settings};
use crate::services::certs::enumerate_certificates;
use crate::services::tools::{BrsslCompiler, OpensslDecoder};
use std::io::Write;

pub fn load_bundle(settings: &Settings) -> anyhow::Result<Vec<CertificateFile>> {
    let certs = enumerate_certificates(&settings.certs_dir, &settings.extension)?;
    log::info!(
        "{} certificates in {}",
        certs.len(),
        settings.certs_dir.display()
    );
    Ok(certs)
}

/// Runs the configured brssl and openssl over `certs`, writing the header to `out`.
pub fn render_header<W: Write>(
    settings: &Settings,
    certs: &[CertificateFile],
    out: &mut W,
) -> anyhow::Result<GenerateStats> {
    let compiler = BrsslCompiler::new(&settings.brssl);
    let decoder = OpensslDecoder::new(&settings.openssl);
    anchors::generate(certs, &compiler, &decoder, out)
}
