use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes an extra-payment rules CSV with the standard header.
pub fn rules_file(rows: &[[&str; 3]]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    {
        let mut wtr = csv::Writer::from_writer(file.as_file_mut());
        wtr.write_record(["amount", "frequency", "start"])?;
        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
    }
    file.flush()?;
    Ok(file)
}
