// src/export/logic.rs

use crate::core::store::HabitStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{RecordExport, Snapshot};
use crate::storage::SlotStorage;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use chrono::Local;
use std::path::PathBuf;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the store.
    ///
    /// - `Json`: both collections as they are persisted
    /// - `Csv`: one row per record, oldest first, joined with the habit
    ///
    /// Returns the written path, or `None` when there was nothing to export.
    pub fn export<S: SlotStorage>(
        store: &HabitStore<S>,
        storage_version: &str,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let path = expand_tilde(file);

        if store.habits().is_empty() && store.records().is_empty() {
            warning("No habits or records to export.");
            return Ok(None);
        }

        ensure_writable(&path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        match format {
            ExportFormat::Json => {
                let snapshot = Snapshot {
                    exported_at: Local::now().to_rfc3339(),
                    storage_version,
                    habits: store.habits(),
                    records: store.records(),
                };
                export_json(&snapshot, &path)?;
            }
            ExportFormat::Csv => {
                let mut rows: Vec<RecordExport> = store
                    .records()
                    .iter()
                    .map(|r| RecordExport::from_record(r, store.get_habit(&r.habit_id)))
                    .collect();
                rows.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.habit.cmp(&b.habit)));
                export_csv(&rows, &path)?;
            }
        }

        Ok(Some(path))
    }
}
