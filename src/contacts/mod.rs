pub mod contact;
pub mod directory;
pub mod cache;
pub mod transport;
pub mod client;
pub mod validation;

#[cfg(test)]
mod unitests;
