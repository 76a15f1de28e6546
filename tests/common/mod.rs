use std::io::Error;
use std::path::Path;

/// Writes a request script with the standard header.
pub fn write_script(path: &Path, rows: &[[&str; 4]]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(["op", "actor", "item", "term"])?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
