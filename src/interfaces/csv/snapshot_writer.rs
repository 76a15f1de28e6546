use crate::error::AppError;
use crate::interfaces::snapshot::ItemRow;
use std::io::Write;

/// Writes item rows as CSV with a header line.
pub struct SnapshotWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SnapshotWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_rows(mut self, rows: &[ItemRow]) -> Result<(), AppError> {
        for row in rows {
            self.writer.serialize(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
