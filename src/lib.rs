pub mod core;
pub mod contacts;

pub use crate::core::{
    error::{self, Error, Result},
    config,
};

pub use crate::contacts::{
    contact::Contact,
    directory::{Directory, Position},
    cache::Cache,
    transport::{Transport, HttpTransport},
    client::{ContactClient, ContactClientBuilder},
    validation,
};
