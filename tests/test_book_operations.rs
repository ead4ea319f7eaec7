//! Scenario tests for directory-level operations: adding, removing,
//! searching, paging, and snapshot round-trips through JSON text.

use contact_book::{BookError, ContactDirectory, ContactRecord, DirectorySnapshot};

fn sample_book() -> ContactDirectory {
    let mut book = ContactDirectory::new();
    book.add_record(ContactRecord::from_raw("Bill", &["1234567890"], Some("1994-02-26")).unwrap())
        .unwrap();
    book.add_record(ContactRecord::from_raw("Ann", &["0987654321", "1112223334"], None).unwrap())
        .unwrap();
    book.add_record(ContactRecord::from_raw("Zoe", &["4445556667"], None).unwrap())
        .unwrap();
    book
}

#[test]
fn duplicate_name_keeps_first_record_intact() {
    let mut book = sample_book();
    let replacement = ContactRecord::from_raw("Bill", &["9998887776"], None).unwrap();

    let err = book.add_record(replacement).unwrap_err();
    assert_eq!(err, BookError::DuplicateName("Bill".to_string()));

    let bill = book.get("Bill").unwrap();
    assert_eq!(bill.phones()[0], "1234567890");
    assert_eq!(bill.birthday().unwrap().as_str(), "1994-02-26");
}

#[test]
fn record_mutations_through_the_directory() {
    let mut book = sample_book();

    book.get_mut("Ann").unwrap().add_phone("777 888 99 00").unwrap();
    let phones: Vec<&str> = book
        .get("Ann")
        .unwrap()
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect();
    assert_eq!(phones, vec!["0987654321", "1112223334", "7778889900"]);

    // a failed change leaves both record and directory untouched
    let err = book
        .get_mut("Ann")
        .unwrap()
        .change_phone("0000000000", "5556667778")
        .unwrap_err();
    assert_eq!(err, BookError::PhoneNotFound("0000000000".to_string()));
    assert_eq!(book.get("Ann").unwrap().phones().len(), 3);
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let book = sample_book();

    let hits: Vec<&str> = book.search("BILL").iter().map(|r| r.name().as_str()).collect();
    assert_eq!(hits, vec!["Bill"]);

    // matches the birthday text too
    assert_eq!(book.search("1994-02-26").len(), 1);

    // term spanning no record
    assert!(book.search("xyz").is_empty());
}

#[test]
fn pagination_partitions_in_insertion_order() {
    let mut book = ContactDirectory::new();
    for name in ["A", "B", "C", "D", "E"] {
        book.add_record(ContactRecord::from_raw(name, &["1234567890"], None).unwrap())
            .unwrap();
    }

    let pages: Vec<Vec<&str>> = book
        .paginate(2)
        .unwrap()
        .map(|page| page.iter().map(|r| r.name().as_str()).collect())
        .collect();
    assert_eq!(pages, vec![vec!["A", "B"], vec!["C", "D"], vec!["E"]]);

    let pages: Vec<usize> = book.paginate(10).unwrap().map(|p| p.len()).collect();
    assert_eq!(pages, vec![5]);

    assert_eq!(book.paginate(0).unwrap_err(), BookError::InvalidPageSize(0));
}

#[test]
fn snapshot_roundtrip_through_json_text() {
    let book = sample_book();

    let json = serde_json::to_string_pretty(&book.dump()).unwrap();
    let snapshot: DirectorySnapshot = serde_json::from_str(&json).unwrap();
    let restored = ContactDirectory::load(snapshot).unwrap();

    assert_eq!(restored.len(), book.len());
    for record in book.iter() {
        let other = restored.get(record.name().as_str()).unwrap();
        assert_eq!(other.phones(), record.phones());
        assert_eq!(other.birthday(), record.birthday());
    }
}

#[test]
fn snapshot_wire_format_matches_the_contract() {
    let mut book = ContactDirectory::new();
    book.add_record(ContactRecord::from_raw("Bill", &["1234567890"], Some("1994-02-26")).unwrap())
        .unwrap();
    book.add_record(ContactRecord::from_raw("Ann", &[], None).unwrap())
        .unwrap();

    let value = serde_json::to_value(book.dump()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "Ann": { "phones": [], "birthday": null },
            "Bill": { "phones": ["1234567890"], "birthday": "1994-02-26" },
        })
    );
}

#[test]
fn load_rejects_invalid_phone_in_snapshot() {
    let json = r#"{ "Bill": { "phones": ["123"], "birthday": null } }"#;
    let result: Result<DirectorySnapshot, _> = serde_json::from_str(json);
    assert!(result.is_err());
}
