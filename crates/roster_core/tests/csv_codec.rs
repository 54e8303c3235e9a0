use chrono::NaiveDate;
use roster_core::codec;
use roster_core::{Gender, Person};
use uuid::Uuid;

fn person(first: &str, last: &str, gender: Gender, dob: (i32, u32, u32)) -> Person {
    Person {
        id: Uuid::new_v4(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        gender,
        date_of_birth: NaiveDate::from_ymd_opt(dob.0, dob.1, dob.2).unwrap(),
        phone_number: "1234567890".to_string(),
        birth_place: "New York".to_string(),
        is_graduated: false,
    }
}

#[test]
fn save_then_load_round_trips_field_for_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.csv");

    let people = vec![
        person("John", "Doe", Gender::Male, (1990, 5, 15)),
        person("Jane", "Smith", Gender::Female, (1985, 10, 20)),
    ];

    codec::save(&people, &path).unwrap();
    let loaded = codec::load(&path).unwrap();

    assert_eq!(loaded, people);
}

#[test]
fn load_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    assert!(codec::load(&path).is_err());
}

#[test]
fn load_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.csv");
    std::fs::write(&path, "Id,FirstName\nnot-a-uuid,John\n").unwrap();

    assert!(codec::load(&path).is_err());
}

#[test]
fn saving_unchanged_data_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.csv");
    let people = vec![person("John", "Doe", Gender::Male, (1990, 5, 15))];

    codec::save(&people, &path).unwrap();
    let first = std::fs::read(&path).unwrap();
    codec::save(&people, &path).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn save_replaces_previous_contents_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.csv");

    codec::save(
        &[
            person("John", "Doe", Gender::Male, (1990, 5, 15)),
            person("Jane", "Smith", Gender::Female, (1985, 10, 20)),
        ],
        &path,
    )
    .unwrap();

    let shorter = vec![person("Bob", "Johnson", Gender::Male, (1995, 3, 1))];
    codec::save(&shorter, &path).unwrap();

    assert_eq!(codec::load(&path).unwrap(), shorter);
}

#[test]
fn empty_sequence_round_trips_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.csv");

    codec::save(&[], &path).unwrap();

    assert!(path.exists());
    assert!(codec::load(&path).unwrap().is_empty());
}

#[test]
fn empty_sequence_still_writes_the_header_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.csv");

    codec::save(&[], &path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let header = raw.lines().next().unwrap_or("");
    assert_eq!(
        header,
        "Id,FirstName,LastName,Gender,DateOfBirth,PhoneNumber,BirthPlace,IsGraduated"
    );
    assert_eq!(raw.lines().count(), 1);
}

#[test]
fn deleting_down_to_empty_keeps_the_on_disk_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.csv");

    let people = vec![person("John", "Doe", Gender::Male, (1990, 5, 15))];
    codec::save(&people, &path).unwrap();
    let populated_header = std::fs::read_to_string(&path)
        .unwrap()
        .lines()
        .next()
        .unwrap()
        .to_string();

    codec::save(&[], &path).unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(raw.lines().next().unwrap(), populated_header);
}

#[test]
fn dates_persist_in_iso_form() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.csv");

    codec::save(&[person("John", "Doe", Gender::Male, (1990, 5, 15))], &path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("1990-05-15"));
    assert!(raw.contains("Male"));
}
