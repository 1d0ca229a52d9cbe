use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Where the bundle lives, where the header goes, and which tools to run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub certs_dir: PathBuf,
    pub output: PathBuf,
    pub extension: String,
    pub brssl: PathBuf,
    pub openssl: PathBuf,
}

/// One certificate of the bundle. `index` is the `N` in the `TA<N>_DN`
/// symbol brssl emits for it, i.e. its position on the brssl command line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CertificateFile {
    pub index: usize,
    pub file_name: String,
    pub path: PathBuf,
}

#[derive(Debug, Default, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct GenerateStats {
    pub certificates: usize,
    pub annotated: usize,
    pub lines: usize,
}

#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub output: String,
    pub certificates: usize,
    pub annotated: usize,
    pub lines: usize,
    pub bytes: u64,
    pub sha256: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    UpToDate,
    Stale,
    Missing,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::UpToDate => write!(f, "up to date"),
            CheckStatus::Stale => write!(f, "stale"),
            CheckStatus::Missing => write!(f, "missing"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub output: String,
    pub status: CheckStatus,
    pub expected_sha256: String,
    pub actual_sha256: Option<String>,
    pub certificates: usize,
}

#[derive(Debug, Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct DoctorReport {
    pub overall: String,
    pub checks: Vec<CheckItem>,
}
