//! Workbook rendering; compiled in with the `xlsx` feature.

use super::ExportResult;
use crate::model::dork::DorkRecord;

#[cfg(feature = "xlsx")]
pub(super) const AVAILABLE: bool = true;
#[cfg(not(feature = "xlsx"))]
pub(super) const AVAILABLE: bool = false;

#[cfg(feature = "xlsx")]
const SHEET_NAME: &str = "Dorks";

#[cfg(feature = "xlsx")]
pub(super) fn render(records: &[DorkRecord]) -> ExportResult<Vec<u8>> {
    use super::header;
    use rust_xlsxwriter::{Format, Workbook};

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, name) in header(records).iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *name, &header_format)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = index as u32 + 1;
        for (col, value) in record.fields().iter().enumerate() {
            worksheet.write(row, col as u16, *value)?;
        }
    }

    worksheet.set_column_width(0, 24)?;
    worksheet.set_column_width(1, 18)?;
    worksheet.set_column_width(2, 60)?;

    Ok(workbook.save_to_buffer()?)
}

#[cfg(not(feature = "xlsx"))]
pub(super) fn render(_records: &[DorkRecord]) -> ExportResult<Vec<u8>> {
    Err(super::ExportError::MissingCapability {
        format: super::ExportFormat::Spreadsheet,
        remediation: "rebuild advaitzz_core with the `xlsx` feature enabled",
    })
}
