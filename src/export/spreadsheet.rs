use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::model::ranked::RankedRecord;

use super::{ExportError, Exporter};

const SHEET_NAME: &str = "Sheet1";

/// Single worksheet, header in the first row, no index column.
pub struct ExcelExporter;

impl Exporter for ExcelExporter {
    fn write(&self, records: &[RankedRecord], path: &Path) -> Result<(), ExportError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        let header = Format::new().set_bold();
        for (col, name) in (0u16..).zip(RankedRecord::FIELD_NAMES) {
            worksheet.write_string_with_format(0, col, name, &header)?;
        }

        for (row, record) in (1u32..).zip(records) {
            worksheet.write_number(row, 0, record.rank)?;
            worksheet.write_string(row, 1, record.summoner_name.as_str())?;
            worksheet.write_number(row, 2, record.league_points)?;
            worksheet.write_number(row, 3, record.wins)?;
            worksheet.write_number(row, 4, record.losses)?;
            worksheet.write_string(row, 5, record.hot_streak.as_str())?;
            worksheet.write_string(row, 6, record.win_loss_ratio.as_str())?;
        }

        workbook.save(path)?;
        Ok(())
    }
}
