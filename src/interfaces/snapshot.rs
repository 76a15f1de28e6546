use super::csv::snapshot_writer::SnapshotWriter;
use crate::domain::item::{Item, ItemStatus};
use crate::error::AppError;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Text,
    Csv,
    Json,
}

/// Flat view of one item's final state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRow {
    pub scenario: String,
    pub item: u32,
    pub kind: String,
    pub title: String,
    pub daily_rate: String,
    pub status: &'static str,
    pub holder: Option<u32>,
    pub term: Option<u32>,
}

impl ItemRow {
    pub fn new(scenario: &str, item: &Item) -> Self {
        let (status, holder, term) = match item.status() {
            ItemStatus::Available => ("available", None, None),
            ItemStatus::Held { holder, term } => ("held", Some(holder.0), Some(term.days())),
        };
        Self {
            scenario: scenario.to_string(),
            item: item.id().0,
            kind: item.kind().to_string(),
            title: item.title().to_string(),
            daily_rate: item.daily_rate().to_string(),
            status,
            holder,
            term,
        }
    }
}

pub fn write_snapshot<W: Write>(
    format: SnapshotFormat,
    rows: &[ItemRow],
    mut out: W,
) -> Result<(), AppError> {
    match format {
        SnapshotFormat::Csv => SnapshotWriter::new(out).write_rows(rows),
        SnapshotFormat::Json => {
            serde_json::to_writer_pretty(&mut out, rows)?;
            writeln!(out)?;
            Ok(())
        }
        SnapshotFormat::Text => {
            writeln!(
                out,
                "{:<8} {:>5}  {:<14} {:<20} {:>9}  status",
                "scenario", "item", "kind", "title", "rate"
            )?;
            for row in rows {
                let status = match (row.holder, row.term) {
                    (Some(holder), Some(term)) => format!("held by {holder} for {term}d"),
                    _ => row.status.to_string(),
                };
                writeln!(
                    out,
                    "{:<8} {:>5}  {:<14} {:<20} {:>9}  {}",
                    row.scenario, row.item, row.kind, row.title, row.daily_rate, status
                )?;
            }
            Ok(())
        }
    }
}
