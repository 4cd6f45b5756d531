use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::config;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$").unwrap()
});

/// Standard email-shape check.
pub fn validate_email(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    EMAIL_REGEX.is_match(value)
}

/// The backend rejects phone numbers that are not exactly 11 digits.
pub fn validate_phone(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    !value.is_empty() && value.chars().count() == config::MIN_PHONE_DIGITS
}

/// The backend rejects names shorter than 2 characters.
pub fn validate_name(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    value.chars().count() >= config::MIN_NAME_LEN
}
