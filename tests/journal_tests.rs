//! Journal tests: form-driven add, positional multi-delete, persistence

use std::fs;
use std::path::Path;

use meteolog::{Error, FormInput, Journal, MeasurementKind, Storage};
use tempfile::{TempDir, tempdir};

fn journal_at(dir: &TempDir) -> (Journal, std::path::PathBuf) {
    let path = dir.path().join("measurements.txt");
    (Journal::new(Storage::new(&path)), path)
}

fn seeded_journal(dir: &TempDir, lines: &[&str]) -> (Journal, std::path::PathBuf) {
    let path = dir.path().join("measurements.txt");
    let storage = Storage::new(&path);
    fs::write(&path, lines.join("\n") + "\n").unwrap();
    let report = storage.load().unwrap();
    assert!(report.skipped.is_empty());
    (Journal::from_report(report, storage), path)
}

fn saved_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn add_temperature_from_form() {
    let dir = tempdir().unwrap();
    let (mut journal, path) = journal_at(&dir);

    let form = FormInput {
        kind: MeasurementKind::Temperature,
        date: "2024.01.15".to_string(),
        place: "Kyiv".to_string(),
        value1: "21.5".to_string(),
        value2: "60.2".to_string(),
    };
    let line = journal.add(&form).unwrap();
    assert_eq!(line, "temperature 2024.01.15 \"Kyiv\" 21.5 60.2");

    assert_eq!(journal.len(), 1);
    assert_eq!(
        journal.measurements()[0].to_string(),
        "Дата: 2024-01-15, Место: Kyiv, Температура: 21.50°C, Влажность: 60.20%"
    );
    assert_eq!(
        saved_lines(&path),
        ["temperature 2024.01.15 \"Kyiv\" 21.50 60.20"]
    );
}

#[test]
fn add_pressure_from_form() {
    let dir = tempdir().unwrap();
    let (mut journal, path) = journal_at(&dir);

    let form = FormInput {
        kind: MeasurementKind::Pressure,
        date: "2023.11.03".to_string(),
        place: "Lviv".to_string(),
        value1: "748".to_string(),
        value2: String::new(),
    };
    journal.add(&form).unwrap();

    assert_eq!(saved_lines(&path), ["pressure 2023.11.03 \"Lviv\" 748.00"]);
}

#[test]
fn temperature_without_humidity_is_rejected() {
    let dir = tempdir().unwrap();
    let (mut journal, path) = journal_at(&dir);

    let form = FormInput {
        kind: MeasurementKind::Temperature,
        date: "2024.01.15".to_string(),
        place: "Kyiv".to_string(),
        value1: "21.5".to_string(),
        value2: String::new(),
    };
    let err = journal.add(&form).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(err.to_string(), "Введите влажность для температуры");

    // Nothing was mutated or written.
    assert!(journal.is_empty());
    assert!(!path.exists());
}

#[test]
fn pressure_with_humidity_is_rejected() {
    let dir = tempdir().unwrap();
    let (mut journal, path) = journal_at(&dir);

    let form = FormInput {
        kind: MeasurementKind::Pressure,
        date: "2023.11.03".to_string(),
        place: "Lviv".to_string(),
        value1: "748".to_string(),
        value2: "60".to_string(),
    };
    let err = journal.add(&form).unwrap_err();
    assert_eq!(err.to_string(), "Влажность не нужна для давления");
    assert!(journal.is_empty());
    assert!(!path.exists());
}

#[test]
fn malformed_form_input_is_rejected_by_codec() {
    let dir = tempdir().unwrap();
    let (mut journal, path) = journal_at(&dir);

    let form = FormInput {
        kind: MeasurementKind::Temperature,
        date: "15 января".to_string(),
        place: "Kyiv".to_string(),
        value1: "21.5".to_string(),
        value2: "60.2".to_string(),
    };
    assert!(matches!(journal.add(&form), Err(Error::Format { .. })));
    assert!(journal.is_empty());
    assert!(!path.exists());
}

#[test]
fn place_with_space_makes_a_malformed_line() {
    // A two-word place is not representable by the whitespace-split format;
    // the composed line must be rejected as a whole, not silently mangled.
    let dir = tempdir().unwrap();
    let (mut journal, _path) = journal_at(&dir);

    let form = FormInput {
        kind: MeasurementKind::Pressure,
        date: "2024.01.15".to_string(),
        place: "Kryvyi Rih".to_string(),
        value1: "748".to_string(),
        value2: String::new(),
    };
    assert!(matches!(journal.add(&form), Err(Error::Format { .. })));
    assert!(journal.is_empty());
}

#[test]
fn delete_multiple_rows_in_ascending_selection_order() {
    let dir = tempdir().unwrap();
    let (mut journal, path) = seeded_journal(
        &dir,
        &[
            "temperature 2024.01.01 \"A\" 1.00 10.00",
            "temperature 2024.01.02 \"B\" 2.00 20.00",
            "temperature 2024.01.03 \"C\" 3.00 30.00",
            "temperature 2024.01.04 \"D\" 4.00 40.00",
        ],
    );

    // Rows 0 and 2 selected, handed over in ascending order. Removal must
    // still take out A and C, not A and the shifted D.
    let removed = journal.remove_rows(vec![0, 2]).unwrap();
    let removed: Vec<String> = removed.into_iter().map(|m| m.place).collect();
    assert_eq!(removed, ["A", "C"]);

    assert_eq!(
        saved_lines(&path),
        [
            "temperature 2024.01.02 \"B\" 2.00 20.00",
            "temperature 2024.01.04 \"D\" 4.00 40.00",
        ]
    );
}

#[test]
fn delete_ignores_selection_order_and_duplicates() {
    let dir = tempdir().unwrap();
    let (mut journal, path) = seeded_journal(
        &dir,
        &[
            "pressure 2024.01.01 \"A\" 741.00",
            "pressure 2024.01.02 \"B\" 742.00",
            "pressure 2024.01.03 \"C\" 743.00",
        ],
    );

    let removed = journal.remove_rows(vec![2, 0, 2]).unwrap();
    assert_eq!(removed.len(), 2);
    assert_eq!(removed[0].place, "A");
    assert_eq!(removed[1].place, "C");

    assert_eq!(saved_lines(&path), ["pressure 2024.01.02 \"B\" 742.00"]);
}

#[test]
fn delete_out_of_range_rows_is_a_no_op() {
    let dir = tempdir().unwrap();
    let (mut journal, path) = seeded_journal(&dir, &["pressure 2024.01.01 \"A\" 741.00"]);
    let before = saved_lines(&path);

    let removed = journal.remove_rows(vec![5, 17]).unwrap();
    assert!(removed.is_empty());
    assert_eq!(journal.len(), 1);
    assert_eq!(saved_lines(&path), before);
}

#[test]
fn delete_everything_leaves_an_empty_file() {
    let dir = tempdir().unwrap();
    let (mut journal, path) = seeded_journal(
        &dir,
        &[
            "pressure 2024.01.01 \"A\" 741.00",
            "pressure 2024.01.02 \"B\" 742.00",
        ],
    );

    let removed = journal.remove_rows(vec![0, 1]).unwrap();
    assert_eq!(removed.len(), 2);
    assert!(journal.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn add_appends_after_loaded_records() {
    let dir = tempdir().unwrap();
    let (mut journal, path) = seeded_journal(&dir, &["pressure 2024.01.01 \"A\" 741.00"]);

    journal
        .add_line("temperature 2024.01.02 \"B\" 2.0 20.0")
        .unwrap();

    assert_eq!(
        saved_lines(&path),
        [
            "pressure 2024.01.01 \"A\" 741.00",
            "temperature 2024.01.02 \"B\" 2.00 20.00",
        ]
    );
}

#[test]
fn failed_save_keeps_record_in_memory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("measurements.txt");
    let mut journal = Journal::new(Storage::new(&path));

    let err = journal
        .add_line("pressure 2024.01.01 \"A\" 741.00")
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));

    // The in-memory copy is now the only copy.
    assert_eq!(journal.len(), 1);
}
