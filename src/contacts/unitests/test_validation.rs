use crate::contacts::validation::{
    validate_email,
    validate_name,
    validate_phone,
};

#[test]
fn test_phone_must_be_exactly_eleven_digits() {
    assert!(validate_phone(Some("12345678901")));

    assert!(!validate_phone(Some("1234567890")));
    assert!(!validate_phone(Some("123456789012")));
    assert!(!validate_phone(Some("")));
    assert!(!validate_phone(None));
}

#[test]
fn test_name_needs_two_characters() {
    assert!(validate_name(Some("Al")));
    assert!(validate_name(Some("Amitabh")));

    assert!(!validate_name(Some("A")));
    assert!(!validate_name(Some("")));
    assert!(!validate_name(None));
}

#[test]
fn test_email_shape() {
    assert!(validate_email(Some("ab@example.com")));
    assert!(validate_email(Some("first.last+tag@sub.example.co")));

    assert!(!validate_email(Some("not-an-email")));
    assert!(!validate_email(Some("missing@tld")));
    assert!(!validate_email(Some("@example.com")));
    assert!(!validate_email(Some("")));
    assert!(!validate_email(None));
}
