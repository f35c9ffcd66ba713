use super::model::{RecordExport, Snapshot};
use super::notify_export_success;
use crate::errors::AppResult;
use csv::Writer;
use std::fs;
use std::path::Path;

pub(crate) fn export_csv(rows: &[RecordExport], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

pub(crate) fn export_json(snapshot: &Snapshot<'_>, path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;

    notify_export_success("JSON", path);
    Ok(())
}
