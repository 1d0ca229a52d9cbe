use crate::anchors::AnchorError;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Turns a certificate bundle into C trust-anchor source, one line at a time.
pub trait TrustAnchorCompiler {
    /// Runs the compiler over `certs` (in that order) and feeds each output
    /// line, terminator included, to `sink`.
    fn compile(
        &self,
        certs: &[&Path],
        sink: &mut dyn FnMut(&[u8]) -> anyhow::Result<()>,
    ) -> anyhow::Result<()>;
}

/// Produces a human-readable decode of one certificate.
pub trait CertificateDecoder {
    fn decode(&self, cert: &Path) -> anyhow::Result<String>;
}

/// `brssl ta <certs...>` from BearSSL.
pub struct BrsslCompiler {
    program: PathBuf,
}

impl BrsslCompiler {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl TrustAnchorCompiler for BrsslCompiler {
    fn compile(
        &self,
        certs: &[&Path],
        sink: &mut dyn FnMut(&[u8]) -> anyhow::Result<()>,
    ) -> anyhow::Result<()> {
        let tool = self.program.display().to_string();
        log::debug!("running {} ta over {} certificates", tool, certs.len());

        let mut child = Command::new(&self.program)
            .arg("ta")
            .args(certs)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| AnchorError::ToolLaunch {
                tool: tool.clone(),
                source,
            })?;

        let Some(stdout) = child.stdout.take() else {
            let _ = child.kill();
            let _ = child.wait();
            anyhow::bail!("{} stdout was not captured", tool);
        };

        if let Err(e) = stream_lines(std::io::BufReader::new(stdout), sink) {
            let _ = child.kill();
            let _ = child.wait();
            return Err(e);
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(AnchorError::ToolFailed { tool, status }.into());
        }
        Ok(())
    }
}

/// `openssl x509 -noout -text -in <cert>`.
pub struct OpensslDecoder {
    program: PathBuf,
}

impl OpensslDecoder {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl CertificateDecoder for OpensslDecoder {
    fn decode(&self, cert: &Path) -> anyhow::Result<String> {
        let tool = self.program.display().to_string();
        log::debug!("running {} x509 on {}", tool, cert.display());

        let output = Command::new(&self.program)
            .args(["x509", "-noout", "-text", "-in"])
            .arg(cert)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| AnchorError::ToolLaunch {
                tool: tool.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(AnchorError::DecoderFailed {
                tool,
                status: output.status,
                reason: first_line(&output.stderr),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn first_line(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    match text.lines().map(str::trim).find(|l| !l.is_empty()) {
        Some(line) => line.to_string(),
        None => "no diagnostics on stderr".to_string(),
    }
}

/// Hands `reader` to `sink` line by line without buffering the whole stream.
pub fn stream_lines(
    mut reader: impl BufRead,
    sink: &mut dyn FnMut(&[u8]) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(());
        }
        sink(&line)?;
    }
}

/// True when `program` can be started at all, whatever its exit status.
pub fn launches(program: &Path, args: &[&str]) -> bool {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}
