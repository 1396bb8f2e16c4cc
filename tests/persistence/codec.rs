use std::fs;
use std::path::PathBuf;

use cd_inventory::persistence::{InventoryError, Record, Table, ensure_exists, load, save};
use tempfile::TempDir;

fn _prepare_store() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("CDInventory.txt");
    (dir, path)
}

fn _sample_table() -> Table {
    Table::from_records(vec![
        Record::new(1, "Thriller", "Jackson"),
        Record::new(2, "Back in Black", "AC/DC"),
    ])
}

#[test]
fn codec_save_then_load_round_trips() {
    let (_dir, path) = _prepare_store();
    let table = _sample_table();

    assert_eq!(save(&path, &table).unwrap(), 2);

    let mut loaded = Table::new();
    assert_eq!(load(&path, &mut loaded).unwrap(), 2);
    assert_eq!(loaded, table);
}

#[test]
fn codec_save_writes_plain_lines() {
    let (_dir, path) = _prepare_store();
    save(&path, &_sample_table()).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "1,Thriller,Jackson\n2,Back in Black,AC/DC\n");
}

#[test]
fn codec_save_overwrites_previous_contents() {
    let (_dir, path) = _prepare_store();
    fs::write(&path, "9,Old,Entry\n10,Another,Old\n11,Third,Old\n").unwrap();

    save(&path, &Table::from_records(vec![Record::new(1, "New", "Entry")])).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "1,New,Entry\n");
}

#[test]
fn codec_save_empty_table_empties_file() {
    let (_dir, path) = _prepare_store();
    fs::write(&path, "1,Thriller,Jackson\n").unwrap();

    save(&path, &Table::new()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn codec_load_replaces_table_contents() {
    let (_dir, path) = _prepare_store();
    fs::write(&path, "5,Blue,Joni Mitchell\n").unwrap();

    let mut table = _sample_table();
    load(&path, &mut table).unwrap();

    assert_eq!(table.records(), &[Record::new(5, "Blue", "Joni Mitchell")]);
}

#[test]
fn codec_load_keeps_fields_verbatim() {
    let (_dir, path) = _prepare_store();
    fs::write(&path, "3, Spaced Title ,Artist \n").unwrap();

    let mut table = Table::new();
    load(&path, &mut table).unwrap();

    assert_eq!(table.get(3).unwrap().title, " Spaced Title ");
    assert_eq!(table.get(3).unwrap().artist, "Artist ");
}

#[test]
fn codec_load_skips_blank_lines() {
    let (_dir, path) = _prepare_store();
    fs::write(&path, "1,Thriller,Jackson\n\n2,Back in Black,AC/DC\n").unwrap();

    let mut table = Table::new();
    assert_eq!(load(&path, &mut table).unwrap(), 2);
    assert_eq!(table, _sample_table());
}

#[test]
fn codec_round_trips_fields_with_delimiters_and_quotes() {
    let (_dir, path) = _prepare_store();
    let table = Table::from_records(vec![
        Record::new(1, "Crosby, Stills & Nash", "CSN"),
        Record::new(2, "The \"White\" Album", "The Beatles"),
        Record::new(3, "", ""),
    ]);

    save(&path, &table).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("1,\"Crosby, Stills & Nash\",CSN\n"));

    let mut loaded = Table::new();
    load(&path, &mut loaded).unwrap();
    assert_eq!(loaded, table);
}

#[test]
fn codec_load_rejects_wrong_field_count() {
    let (_dir, path) = _prepare_store();
    fs::write(&path, "1,Thriller,Jackson\n2,Back in Black\n").unwrap();

    let mut table = Table::new();
    match load(&path, &mut table) {
        Err(InventoryError::Malformed { line, reason, .. }) => {
            assert_eq!(line, 2);
            assert!(reason.contains("expected 3 fields, found 2"));
        }
        other => panic!("expected a malformed line error, got {:?}", other),
    }
}

#[test]
fn codec_load_rejects_non_integer_id() {
    let (_dir, path) = _prepare_store();
    fs::write(&path, "one,Thriller,Jackson\n").unwrap();

    let mut table = _sample_table();
    let result = load(&path, &mut table);

    assert!(matches!(result, Err(InventoryError::Malformed { line: 1, .. })));
    // a failed load leaves the table as it was
    assert_eq!(table, _sample_table());
}

#[test]
fn codec_load_missing_file_is_io_error() {
    let (_dir, path) = _prepare_store();

    let mut table = Table::new();
    assert!(matches!(
        load(&path, &mut table),
        Err(InventoryError::Io { .. })
    ));
}

#[test]
fn codec_ensure_exists_creates_empty_file() {
    let (_dir, path) = _prepare_store();

    ensure_exists(&path).unwrap();

    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn codec_ensure_exists_twice_keeps_contents() {
    let (_dir, path) = _prepare_store();
    fs::write(&path, "1,Thriller,Jackson\n").unwrap();

    ensure_exists(&path).unwrap();
    ensure_exists(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "1,Thriller,Jackson\n");
}

#[test]
fn codec_load_trims_spaces_around_id() {
    let (_dir, path) = _prepare_store();
    fs::write(&path, "1 ,Thriller,Jackson\n 2,Back in Black,AC/DC\n").unwrap();

    let mut table = Table::new();
    load(&path, &mut table).unwrap();

    assert_eq!(table, _sample_table());
}

#[test]
fn codec_load_rejects_quote_glued_to_plain_text() {
    let (_dir, path) = _prepare_store();
    fs::write(&path, "1,\"Weird\" Al Hits,Yankovic\n").unwrap();

    let mut table = Table::new();
    match load(&path, &mut table) {
        Err(InventoryError::Malformed { line, reason, .. }) => {
            assert_eq!(line, 1);
            assert!(reason.contains("field 2"));
            assert!(reason.contains("double quote"));
        }
        other => panic!("expected a malformed line error, got {:?}", other),
    }
    assert!(table.is_empty());
}

#[test]
fn codec_load_rejects_unbalanced_quote() {
    let (_dir, path) = _prepare_store();
    fs::write(&path, "1,\"Heroes,Bowie\n2,Thriller,Jackson\n").unwrap();

    let mut table = Table::new();
    match load(&path, &mut table) {
        Err(InventoryError::Malformed { line, reason, .. }) => {
            assert_eq!(line, 1);
            assert!(reason.contains("double quote"));
        }
        other => panic!("expected a malformed line error, got {:?}", other),
    }
}

#[test]
fn codec_load_keeps_quotes_inside_plain_fields() {
    let (_dir, path) = _prepare_store();
    fs::write(&path, "1,Say \"Hi\",Bob\n").unwrap();

    let mut table = Table::new();
    load(&path, &mut table).unwrap();

    assert_eq!(table.get(1).unwrap().title, "Say \"Hi\"");
}

#[test]
fn codec_load_reports_invalid_utf8_readably() {
    let (_dir, path) = _prepare_store();
    fs::write(&path, b"1,Thriller,Jackson\n2,Back in \xff,AC/DC\n").unwrap();

    let mut table = Table::new();
    match load(&path, &mut table) {
        Err(InventoryError::Malformed { line, reason, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(reason, "the file is not valid UTF-8");
        }
        other => panic!("expected a malformed file error, got {:?}", other),
    }
}
