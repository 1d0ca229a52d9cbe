use crate::domain::models::{CheckItem, DoctorReport, Settings};
use crate::services::tools::launches;
use std::path::Path;

fn status(ok: bool) -> String {
    let s = if ok { "ok" } else { "missing" };
    s.to_string()
}

fn output_parent_exists(output: &Path) -> bool {
    match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.is_dir(),
        _ => true,
    }
}

pub fn doctor(settings: &Settings) -> DoctorReport {
    let checks = vec![
        CheckItem {
            name: "certs_dir_exists".to_string(),
            status: status(settings.certs_dir.is_dir()),
        },
        CheckItem {
            name: "output_dir_exists".to_string(),
            status: status(output_parent_exists(&settings.output)),
        },
        CheckItem {
            // brssl has no version flag; being able to start it is enough.
            name: "brssl_available".to_string(),
            status: status(launches(&settings.brssl, &[])),
        },
        CheckItem {
            name: "openssl_available".to_string(),
            status: status(launches(&settings.openssl, &["version"])),
        },
    ];

    let overall = if checks.iter().all(|c| c.status == "ok") {
        "ok"
    } else {
        "needs_attention"
    }
    .to_string();

    DoctorReport { overall, checks }
}
