// Backend contract constants. The phone/name thresholds come from the
// server-side validation rules, not from anything this crate enforces
// on the wire.

pub const DEFAULT_BASE_URL: &str = "http://gojek-contacts-app.herokuapp.com";

pub const SUCCESS_STATUS_CODES: [u16; 2] = [200, 201];

pub const MIN_PHONE_DIGITS: usize = 11;
pub const MIN_NAME_LEN: usize = 2;
