use serde_json::json;

use crate::contacts::contact::Contact;

#[test]
fn test_new_contact_defaults() {
    let contact = Contact::new();

    assert_eq!(contact.id(), None);
    assert_eq!(contact.url(), None);
    assert_eq!(contact.first_name(), None);
    assert_eq!(contact.last_name(), None);
    assert_eq!(contact.is_favorite(), false);
    assert_eq!(contact.key(), "");
    assert_eq!(contact.full_name(), "");
    assert_eq!(contact.section_key(), "");
}

#[test]
fn test_full_name_trims_missing_parts() {
    let mut contact = Contact::new();
    contact.set_first_name("Amitabh");
    assert_eq!(contact.full_name(), "Amitabh");

    contact.set_last_name("Bachchan");
    assert_eq!(contact.full_name(), "Amitabh Bachchan");

    let mut last_only = Contact::new();
    last_only.set_last_name("Khan");
    assert_eq!(last_only.full_name(), "Khan");
}

#[test]
fn test_section_key_derivation() {
    let mut contact = Contact::new();
    contact.set_first_name("amitabh");
    contact.set_last_name("bachchan");
    assert_eq!(contact.section_key(), "A");

    let mut last_only = Contact::new();
    last_only.set_last_name("khan");
    assert_eq!(last_only.section_key(), "K");

    assert_eq!(Contact::new().section_key(), "");
}

#[test]
fn test_phone_digits() {
    let mut contact = Contact::new();
    contact.set_phone("+1 (234) 567-8901");
    assert_eq!(contact.phone_digits(), "12345678901");

    assert_eq!(Contact::new().phone_digits(), "");
}

#[test]
fn test_decode_all_wire_fields() {
    let payload = json!({
        "id": 7,
        "url": "http://backend.example/contacts/7.json",
        "first_name": "Amitabh",
        "last_name": "Bachchan",
        "email": "ab@example.com",
        "phone_number": "12345678901",
        "profile_pic": "/images/missing.png",
        "favorite": true,
        "created_at": "2019-02-09T06:13:41.834Z",
        "updated_at": "2019-02-09T06:13:41.834Z"
    });

    let contact: Contact = serde_json::from_value(payload).unwrap();
    assert_eq!(contact.id(), Some(7));
    assert_eq!(contact.url(), Some("http://backend.example/contacts/7.json"));
    assert_eq!(contact.first_name(), Some("Amitabh"));
    assert_eq!(contact.last_name(), Some("Bachchan"));
    assert_eq!(contact.email(), Some("ab@example.com"));
    assert_eq!(contact.phone(), Some("12345678901"));
    assert_eq!(contact.profile_pic(), Some("/images/missing.png"));
    assert_eq!(contact.is_favorite(), true);
    assert_eq!(contact.created_at(), Some("2019-02-09T06:13:41.834Z"));
    assert_eq!(contact.updated_at(), Some("2019-02-09T06:13:41.834Z"));
}

#[test]
fn test_decode_tolerates_missing_fields() {
    let contact: Contact = serde_json::from_value(json!({
        "first_name": "Shahrukh"
    })).unwrap();

    assert_eq!(contact.id(), None);
    assert_eq!(contact.first_name(), Some("Shahrukh"));
    assert_eq!(contact.is_favorite(), false);
}

#[test]
fn test_encode_drops_server_owned_fields() {
    let payload = json!({
        "id": 7,
        "url": "http://backend.example/contacts/7.json",
        "first_name": "Amitabh",
        "last_name": "Bachchan",
        "email": "ab@example.com",
        "phone_number": "12345678901",
        "profile_pic": "/images/missing.png",
        "favorite": true,
        "created_at": "2019-02-09T06:13:41.834Z",
        "updated_at": "2019-02-09T06:13:41.834Z"
    });

    let contact: Contact = serde_json::from_value(payload).unwrap();
    let encoded = serde_json::to_value(&contact).unwrap();
    let object = encoded.as_object().unwrap();

    assert!(!object.contains_key("id"));
    assert!(!object.contains_key("url"));
    assert!(!object.contains_key("created_at"));
    assert!(!object.contains_key("updated_at"));

    assert_eq!(object["first_name"], "Amitabh");
    assert_eq!(object["last_name"], "Bachchan");
    assert_eq!(object["email"], "ab@example.com");
    assert_eq!(object["phone_number"], "12345678901");
    assert_eq!(object["profile_pic"], "/images/missing.png");
    assert_eq!(object["favorite"], true);
}

#[test]
fn test_copy_from_reassigns_every_field() {
    let source: Contact = serde_json::from_value(json!({
        "id": 7,
        "url": "http://backend.example/contacts/7.json",
        "first_name": "Amitabh",
        "last_name": "Bachchan",
        "favorite": true
    })).unwrap();

    let mut target = Contact::new();
    target.set_first_name("Someone");
    target.copy_from(&source);

    assert_eq!(target, source);
}
