use super::{header, ExportResult};
use crate::model::dork::DorkRecord;
use csv::{Terminator, WriterBuilder};

pub(super) fn render(records: &[DorkRecord]) -> ExportResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(header(records))?;
    for record in records {
        writer.write_record(record.fields())?;
    }

    let data = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(data)
}
