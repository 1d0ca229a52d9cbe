use crate::anchors::AnchorError;
use crate::domain::models::CertificateFile;
use std::ffi::OsStr;
use std::path::Path;

/// Lists `dir/*.<extension>` sorted by file name, indexed in that order.
///
/// Dotfiles and directories are skipped, as a shell glob would. Names that are
/// not valid UTF-8 are kept; only their annotation label is converted lossily.
pub fn enumerate_certificates(dir: &Path, extension: &str) -> anyhow::Result<Vec<CertificateFile>> {
    let extension = extension.trim_start_matches('.');
    let cert_dir_err = |source| AnchorError::CertDir {
        dir: dir.to_path_buf(),
        source,
    };

    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(cert_dir_err)? {
        let entry = entry.map_err(cert_dir_err)?;
        let path = entry.path();
        let file_name = entry.file_name();
        if file_name.to_string_lossy().starts_with('.') || !path.is_file() {
            continue;
        }
        if path.extension() != Some(OsStr::new(extension)) {
            continue;
        }
        found.push((file_name, path));
    }

    found.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(found
        .into_iter()
        .enumerate()
        .map(|(index, (file_name, path))| CertificateFile {
            index,
            file_name: file_name.to_string_lossy().into_owned(),
            path,
        })
        .collect())
}
