use std::fmt;
use std::result;

#[derive(Debug)]
pub enum Error {
    InvalidUrl(String),
    NoData(String),
    Status(u16),
    Network(String),
    Json(String),
    IncompleteResult(String),
    UnknownId(String),
    MissingContact(String),
    State(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidUrl(msg)  => write!(f, "{}", msg),
            Error::NoData(msg)      => write!(f, "{}", msg),
            Error::Status(code)     => write!(f, "Invalid response with code: [{}]", code),
            Error::Network(msg)     => write!(f, "{}", msg),
            Error::Json(msg)        => write!(f, "{}", msg),
            Error::IncompleteResult(msg) => write!(f, "{}", msg),
            Error::UnknownId(msg)   => write!(f, "{}", msg),
            Error::MissingContact(msg) => write!(f, "{}", msg),
            Error::State(msg)       => write!(f, "{}", msg),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(format!("JSON error: {}", err))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidUrl(format!("Invalid URL: {}", err))
    }
}

pub type Result<T> = result::Result<T, Error>;
