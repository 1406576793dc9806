use std::fs;

use chrono::NaiveDate;
use literacy_core::model::{Outcome, PassageCatalog, PassageDraft, StudentBook};
use literacy_core::streak::record_attempt;
use storage::json::JsonRepository;
use storage::repository::{PassageRepository, Storage, StudentRepository};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

#[test]
fn json_roundtrip_persists_catalog_and_students() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonRepository::in_dir(dir.path());

    let mut catalog = PassageCatalog::new();
    catalog.append(
        PassageDraft::new("Kancil", "Si kancil cerdik.", "Siapa?", "Kancil")
            .validate()
            .unwrap(),
    );
    catalog.append(
        PassageDraft::new("Malin", "Malin Kundang.", "Jadi apa?", "batu")
            .validate()
            .unwrap(),
    );
    repo.save_passages(&catalog).unwrap();

    let mut book = StudentBook::new();
    record_attempt(book.get_or_create("Ana"), "Kancil", Outcome::Correct, day(1));
    record_attempt(book.get_or_create("Ana"), "Malin", Outcome::Incorrect, day(2));
    book.get_or_create("Budi");
    repo.save_students(&book).unwrap();

    let reopened = JsonRepository::in_dir(dir.path());
    assert_eq!(reopened.load_passages().unwrap(), catalog);
    assert_eq!(reopened.load_students().unwrap(), book);
}

#[test]
fn students_file_has_documented_shape() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonRepository::in_dir(dir.path());

    let mut book = StudentBook::new();
    record_attempt(book.get_or_create("Ana"), "Kancil", Outcome::Correct, day(1));
    repo.save_students(&book).unwrap();

    let raw = fs::read_to_string(repo.students_path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["Ana"]["points"], 10);
    assert_eq!(value["Ana"]["streak"], 1);
    assert_eq!(value["Ana"]["last_read_date"], "2024-01-01");
    assert_eq!(value["Ana"]["history"][0]["outcome"], "correct");
    assert_eq!(value["Ana"]["history"][0]["date"], "2024-01-01");
}

#[test]
fn missing_and_corrupt_files_load_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonRepository::in_dir(dir.path());

    assert!(repo.load_passages().unwrap().is_empty());
    assert!(repo.load_students().unwrap().is_empty());

    fs::write(repo.passages_path(), "[{\"title\": ").unwrap();
    fs::write(repo.students_path(), "\"just a string\"").unwrap();

    assert!(repo.load_passages().unwrap().is_empty());
    assert!(repo.load_students().unwrap().is_empty());
}

#[test]
fn storage_json_shares_one_backend() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::json(JsonRepository::in_dir(dir.path()));

    let mut catalog = PassageCatalog::new();
    catalog.append(PassageDraft::new("T", "B", "Q", "a").validate().unwrap());
    storage.passages.save_passages(&catalog).unwrap();

    assert_eq!(storage.passages.load_passages().unwrap().len(), 1);
    assert!(storage.students.load_students().unwrap().is_empty());
}
