use crate::domain::models::JsonOut;
use serde::Serialize;

/// Prints `data` as a `{ ok, data }` JSON envelope, or as the text lines
/// `render` produces.
pub fn emit<T: Serialize>(
    json: bool,
    ok: bool,
    data: &T,
    render: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&JsonOut { ok, data })?);
    } else {
        for line in render(data) {
            println!("{}", line);
        }
    }
    Ok(())
}

pub fn emit_rows<T: Serialize>(
    json: bool,
    rows: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    emit(json, true, &rows, |rows| rows.iter().map(&row).collect())
}
