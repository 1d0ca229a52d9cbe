use crate::domain::models::{CertificateFile, GenerateStats};
use crate::services::tools::{CertificateDecoder, TrustAnchorCompiler};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

pub const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");

/// brssl opens every anchor with `static const unsigned char TA<N>_DN[] = {`.
const DN_DECL_PREFIX: &[u8] = b"static const unsigned char TA";
const DN_DECL_SUFFIX: &[u8] = b"_DN";

#[derive(thiserror::Error, Debug)]
pub enum AnchorError {
    #[error("failed to launch {tool}: {source}")]
    ToolLaunch {
        tool: String,
        source: std::io::Error,
    },
    #[error("{tool} exited unsuccessfully ({status})")]
    ToolFailed { tool: String, status: ExitStatus },
    #[error("trust anchor TA{index} has no certificate ({count} in bundle)")]
    UnknownAnchorIndex { index: String, count: usize },
    #[error("{tool} exited unsuccessfully ({status}): {reason}")]
    DecoderFailed {
        tool: String,
        status: ExitStatus,
        reason: String,
    },
    #[error("cannot read certificate directory {}: {source}", dir.display())]
    CertDir {
        dir: PathBuf,
        source: std::io::Error,
    },
}

/// The `N` of a `TA<N>_DN` declaration, as brssl printed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorIndex<'a> {
    pub digits: &'a str,
}

impl AnchorIndex<'_> {
    /// `None` when the printed index does not fit in `usize`.
    pub fn value(&self) -> Option<usize> {
        self.digits.parse().ok()
    }
}

/// Matches `^static const unsigned char TA(\d+)_DN` and nothing looser.
pub fn parse_anchor_index(line: &[u8]) -> Option<AnchorIndex<'_>> {
    let rest = line.strip_prefix(DN_DECL_PREFIX)?;
    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 || !rest[digits..].starts_with(DN_DECL_SUFFIX) {
        return None;
    }
    let digits = std::str::from_utf8(&rest[..digits]).ok()?;
    Some(AnchorIndex { digits })
}

pub fn write_banner(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "/*")?;
    writeln!(out, " * AUTOMATICALLY GENERATED, DO NOT MODIFY")?;
    writeln!(out, " * Run {} to regenerate", GENERATOR_NAME)?;
    writeln!(out, " */")
}

pub fn write_annotation(out: &mut impl Write, file_name: &str, decoded: &str) -> std::io::Result<()> {
    writeln!(out, "/*")?;
    writeln!(out, " * {}:", file_name)?;
    writeln!(out, " *")?;
    for line in decoded.lines() {
        writeln!(out, " * {}", line)?;
    }
    writeln!(out, " */")
}

/// Streams brssl output into `out`, inserting the decoded certificate as a
/// comment block in front of each `TA<N>_DN` declaration.
///
/// Every compiler line is copied verbatim and in order. Whatever was written
/// before an error stays written.
pub fn generate<W: Write>(
    certs: &[CertificateFile],
    compiler: &dyn TrustAnchorCompiler,
    decoder: &dyn CertificateDecoder,
    out: &mut W,
) -> anyhow::Result<GenerateStats> {
    write_banner(out)?;

    let paths: Vec<&Path> = certs.iter().map(|c| c.path.as_path()).collect();
    let mut stats = GenerateStats {
        certificates: certs.len(),
        ..GenerateStats::default()
    };

    compiler.compile(&paths, &mut |line: &[u8]| {
        stats.lines += 1;
        if let Some(index) = parse_anchor_index(line) {
            let cert = index.value().and_then(|i| certs.get(i)).ok_or_else(|| {
                AnchorError::UnknownAnchorIndex {
                    index: index.digits.to_string(),
                    count: certs.len(),
                }
            })?;
            log::debug!("annotating TA{} with {}", index.digits, cert.file_name);
            let decoded = decoder.decode(&cert.path)?;
            write_annotation(out, &cert.file_name, &decoded)?;
            stats.annotated += 1;
        }
        out.write_all(line)?;
        Ok(())
    })?;

    out.flush()?;
    Ok(stats)
}
