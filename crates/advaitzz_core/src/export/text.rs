use crate::model::dork::DorkRecord;

/// Dorks joined by `\n`; no trailing newline after the last one.
pub(super) fn render(records: &[DorkRecord]) -> Vec<u8> {
    records
        .iter()
        .map(|record| record.dork.as_str())
        .collect::<Vec<_>>()
        .join("\n")
        .into_bytes()
}
