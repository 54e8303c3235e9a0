use chrono::NaiveDate;
use roster_core::{Gender, NewPerson, Person};
use uuid::Uuid;

fn draft() -> NewPerson {
    NewPerson {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        gender: Gender::Male,
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
        phone_number: "1234567890".to_string(),
        birth_place: "New York".to_string(),
        is_graduated: true,
    }
}

#[test]
fn into_person_attaches_id_and_keeps_fields() {
    let id = Uuid::new_v4();
    let person = draft().into_person(id);

    assert_eq!(person.id, id);
    assert_eq!(person.first_name, "John");
    assert_eq!(person.last_name, "Doe");
    assert_eq!(person.gender, Gender::Male);
    assert_eq!(
        person.date_of_birth,
        NaiveDate::from_ymd_opt(1990, 5, 15).unwrap()
    );
    assert_eq!(person.phone_number, "1234567890");
    assert_eq!(person.birth_place, "New York");
    assert!(person.is_graduated);
}

#[test]
fn full_name_joins_first_and_last() {
    let person = draft().into_person(Uuid::new_v4());
    assert_eq!(person.full_name(), "John Doe");
}

#[test]
fn person_serialization_uses_expected_wire_fields() {
    let person_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let person = draft().into_person(person_id);

    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(json["Id"], person_id.to_string());
    assert_eq!(json["FirstName"], "John");
    assert_eq!(json["LastName"], "Doe");
    assert_eq!(json["Gender"], "Male");
    assert_eq!(json["DateOfBirth"], "1990-05-15");
    assert_eq!(json["PhoneNumber"], "1234567890");
    assert_eq!(json["BirthPlace"], "New York");
    assert_eq!(json["IsGraduated"], true);

    let decoded: Person = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
}

#[test]
fn gender_displays_as_textual_name() {
    assert_eq!(Gender::Male.to_string(), "Male");
    assert_eq!(Gender::Female.to_string(), "Female");
}
