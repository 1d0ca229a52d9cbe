use crate::domain::models::{CheckReport, CheckStatus, GenerateReport, Settings};
use crate::services::output::emit;
use crate::services::pipeline::{load_bundle, render_header};
use crate::services::storage::{create_output, read_existing, sha256_hex, DigestWriter};

pub fn handle_generate(settings: &Settings, json: bool) -> anyhow::Result<()> {
    let certs = load_bundle(settings)?;
    let mut out = DigestWriter::new(create_output(&settings.output)?);
    let stats = render_header(settings, &certs, &mut out)?;
    let (_file, bytes, sha256) = out.finish()?;

    let report = GenerateReport {
        output: settings.output.display().to_string(),
        certificates: stats.certificates,
        annotated: stats.annotated,
        lines: stats.lines,
        bytes,
        sha256,
    };
    log::info!(
        "wrote {} ({} anchors, {} bytes)",
        report.output,
        report.annotated,
        report.bytes
    );

    emit(json, true, &report, |r| {
        vec![format!(
            "wrote {} ({} certificates, {} anchors annotated)",
            r.output, r.certificates, r.annotated
        )]
    })
}

pub fn handle_check(settings: &Settings, json: bool) -> anyhow::Result<()> {
    let certs = load_bundle(settings)?;
    let mut rendered = Vec::new();
    render_header(settings, &certs, &mut rendered)?;
    let existing = read_existing(&settings.output)?;

    let status = match &existing {
        None => CheckStatus::Missing,
        Some(bytes) if *bytes == rendered => CheckStatus::UpToDate,
        Some(_) => CheckStatus::Stale,
    };
    let report = CheckReport {
        output: settings.output.display().to_string(),
        status,
        expected_sha256: sha256_hex(&rendered),
        actual_sha256: existing.as_deref().map(sha256_hex),
        certificates: certs.len(),
    };

    let up_to_date = report.status == CheckStatus::UpToDate;
    emit(json, up_to_date, &report, |r| {
        vec![format!("{}: {}", r.output, r.status)]
    })?;
    if !up_to_date {
        anyhow::bail!(
            "{} is {}; run {} to regenerate",
            report.output,
            report.status,
            crate::anchors::GENERATOR_NAME
        );
    }
    Ok(())
}
