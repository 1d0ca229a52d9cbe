use crate::domain::models::Settings;
use crate::services::certs::enumerate_certificates;
use crate::services::doctor::doctor;
use crate::services::output::{emit, emit_rows};

pub fn handle_list(settings: &Settings, json: bool) -> anyhow::Result<()> {
    let certs = enumerate_certificates(&settings.certs_dir, &settings.extension)?;
    emit_rows(json, &certs, |c| format!("TA{}\t{}", c.index, c.file_name))
}

pub fn handle_doctor(settings: &Settings, json: bool) -> anyhow::Result<()> {
    let report = doctor(settings);
    emit(json, report.overall == "ok", &report, |r| {
        let mut lines: Vec<String> = r
            .checks
            .iter()
            .map(|c| format!("{}\t{}", c.name, c.status))
            .collect();
        lines.push(format!("overall\t{}", r.overall));
        lines
    })
}
