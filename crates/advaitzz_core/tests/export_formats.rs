use advaitzz_core::{
    default_catalog, expand, export_records, read_json_records, DorkRecord, ExportError,
    ExportFormat,
};

fn login_records() -> Vec<DorkRecord> {
    expand(&default_catalog(), "example.com", &["Login Pages"]).unwrap()
}

#[test]
fn txt_export_writes_one_dork_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let summary = export_records(&login_records(), &path).unwrap();

    assert_eq!(summary.format, ExportFormat::Text);
    assert_eq!(summary.records, 3);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "site:example.com inurl:login\nsite:example.com intitle:login\nsite:example.com inurl:signin"
    );
}

#[test]
fn csv_export_has_header_and_rows_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    export_records(&login_records(), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "domain,category,dork",
            "example.com,Login Pages,site:example.com inurl:login",
            "example.com,Login Pages,site:example.com intitle:login",
            "example.com,Login Pages,site:example.com inurl:signin",
        ]
    );
}

#[test]
fn json_export_roundtrips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    let records = expand(
        &default_catalog(),
        "example.com",
        &["Index Of", "Documents"],
    )
    .unwrap();

    export_records(&records, &path).unwrap();

    assert_eq!(read_json_records(&path).unwrap(), records);
    let parsed: Vec<DorkRecord> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, records);
}

#[test]
fn json_export_is_indented_with_stable_field_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    let records = vec![DorkRecord::from_template("a.test", "Index Of", "site:{d}")];

    export_records(&records, &path).unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[\n  {\n    \"domain\": \"a.test\",\n    \"category\": \"Index Of\",\n    \"dork\": \"site:a.test\"\n  }\n]"
    );
}

#[test]
fn extension_matching_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("OUT.CSV");

    let summary = export_records(&login_records(), &path).unwrap();
    assert_eq!(summary.format, ExportFormat::Csv);
}

#[test]
fn unsupported_extension_fails_without_creating_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");

    let err = export_records(&login_records(), &path).unwrap_err();

    assert!(matches!(
        err,
        ExportError::UnsupportedFormat { ref extension } if extension == "pdf"
    ));
    assert!(err.to_string().contains("pdf"));
    assert!(!path.exists());
}

#[test]
fn export_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    std::fs::write(&path, "stale content that is longer than the new output\n".repeat(20)).unwrap();

    let records = vec![DorkRecord::from_template("a.test", "Index Of", "site:{d}")];
    export_records(&records, &path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "site:a.test");
}

#[test]
fn failed_export_leaves_existing_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let missing_dir = dir.path().join("missing");
    let path = missing_dir.join("out.txt");

    let err = export_records(&login_records(), &path).unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
    assert!(!path.exists());

    let unsupported = dir.path().join("keep.md");
    std::fs::write(&unsupported, "keep me").unwrap();
    export_records(&login_records(), &unsupported).unwrap_err();
    assert_eq!(std::fs::read_to_string(&unsupported).unwrap(), "keep me");
}

#[test]
fn empty_record_list_exports_cleanly() {
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("empty.csv");
    export_records(&[], &csv_path).unwrap();
    assert_eq!(std::fs::read_to_string(&csv_path).unwrap(), "dork\n");

    let json_path = dir.path().join("empty.json");
    export_records(&[], &json_path).unwrap();
    assert!(read_json_records(&json_path).unwrap().is_empty());

    let txt_path = dir.path().join("empty.txt");
    export_records(&[], &txt_path).unwrap();
    assert_eq!(std::fs::read_to_string(&txt_path).unwrap(), "");
}

#[cfg(feature = "xlsx")]
#[test]
fn spreadsheet_export_writes_workbook_for_both_extensions() {
    let dir = tempfile::tempdir().unwrap();

    for name in ["out.xlsx", "out.xls"] {
        let path = dir.path().join(name);
        let summary = export_records(&login_records(), &path).unwrap();
        assert_eq!(summary.format, ExportFormat::Spreadsheet);
        assert_zip_archive(&path);

        let (sheets, rows) = read_sheet(&path);
        assert_eq!(sheets, vec!["Dorks".to_string()]);
        assert_eq!(
            rows,
            vec![
                vec!["domain", "category", "dork"],
                vec!["example.com", "Login Pages", "site:example.com inurl:login"],
                vec!["example.com", "Login Pages", "site:example.com intitle:login"],
                vec!["example.com", "Login Pages", "site:example.com inurl:signin"],
            ]
        );
    }
}

#[cfg(feature = "xlsx")]
#[test]
fn empty_spreadsheet_has_dork_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.xlsx");

    export_records(&[], &path).unwrap();

    let (sheets, rows) = read_sheet(&path);
    assert_eq!(sheets, vec!["Dorks".to_string()]);
    assert_eq!(rows, vec![vec!["dork"]]);
}

#[cfg(not(feature = "xlsx"))]
#[test]
fn spreadsheet_export_reports_missing_capability() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xlsx");

    let err = export_records(&login_records(), &path).unwrap_err();
    assert!(matches!(err, ExportError::MissingCapability { .. }));
    assert!(err.to_string().contains("xlsx"));
    assert!(!path.exists());
}

#[cfg(unix)]
#[test]
fn new_export_gets_the_same_mode_as_a_plain_write() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("plain.csv");
    std::fs::write(&plain, "dork\n").unwrap();

    let exported = dir.path().join("out.csv");
    export_records(&login_records(), &exported).unwrap();

    assert_eq!(file_mode(&exported), file_mode(&plain));
}

#[cfg(unix)]
#[test]
fn overwritten_export_keeps_existing_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    std::fs::write(&path, "old").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

    export_records(&login_records(), &path).unwrap();

    assert_eq!(file_mode(&path), 0o640);
}

#[cfg(unix)]
fn file_mode(path: &std::path::Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path).unwrap().permissions().mode() & 0o777
}

#[cfg(feature = "xlsx")]
fn assert_zip_archive(path: &std::path::Path) {
    let bytes = std::fs::read(path).unwrap();
    assert!(bytes.len() > 4);
    assert_eq!(&bytes[..4], b"PK\x03\x04");
}

/// Sheet names and the cell text of the `Dorks` sheet, row by row.
#[cfg(feature = "xlsx")]
fn read_sheet(path: &std::path::Path) -> (Vec<String>, Vec<Vec<String>>) {
    use calamine::{open_workbook, Reader, Xlsx};

    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let sheets = workbook.sheet_names();
    let range = workbook.worksheet_range("Dorks").unwrap();
    let rows = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    (sheets, rows)
}
