use passgen::exporters::csv::{CsvExporter, ExportError, CSV_HEADER};
use passgen::generate_batch;

#[test]
fn test_export_generated_batch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("passwords.csv");
    let passwords = generate_batch(25, 10, true, false).unwrap();

    let written = CsvExporter::new().export(&path, &passwords).unwrap();
    assert_eq!(written, 25);

    let bytes = std::fs::read(&path).unwrap();
    let content = String::from_utf8(bytes).expect("export is UTF-8");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER));
    assert_eq!(lines.collect::<Vec<_>>(), passwords);
}

#[test]
fn test_export_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("again.csv");
    std::fs::write(&path, "old contents\nmore\nand more\n").unwrap();

    CsvExporter::new().export(&path, &["Zz9".to_string()]).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().collect::<Vec<_>>(), vec!["senha", "Zz9"]);
}

#[test]
fn test_export_empty_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let err = CsvExporter::new()
        .export(&dir.path().join("none.csv"), &[])
        .unwrap_err();
    assert!(matches!(err, ExportError::NothingToExport));
}
