use std::path::Path;

use csv::{Terminator, WriterBuilder};

use crate::model::ranked::RankedRecord;

use super::{ExportError, Exporter};

/// Comma separated, header row first, `\n` line endings.
pub struct CsvExporter;

impl Exporter for CsvExporter {
    fn write(&self, records: &[RankedRecord], path: &Path) -> Result<(), ExportError> {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_path(path)?;

        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}
