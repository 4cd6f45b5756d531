pub(crate) mod logger;

pub mod config;
pub mod error;

pub use crate::core::error::Result;
