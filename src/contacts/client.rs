use std::time::Duration;
use log::debug;
use reqwest::Method;
use url::Url;

use crate::{
    Error,
    error::Result,
    core::config,
};

use super::{
    cache::Cache,
    contact::Contact,
    directory::Directory,
    transport::{Transport, HttpTransport},
};

pub struct ContactClientBuilder<'a> {
    base_url: &'a str,
    success_codes: Vec<u16>,
    timeout: Option<Duration>,
    transport: Option<Box<dyn Transport>>,
}

impl<'a> ContactClientBuilder<'a> {
    pub fn new() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL,
            success_codes: config::SUCCESS_STATUS_CODES.to_vec(),
            timeout: None,
            transport: None,
        }
    }

    pub fn with_base_url(&mut self, base_url: &'a str) -> &mut Self {
        self.base_url = base_url;
        self
    }

    pub fn with_success_codes(&mut self, codes: &[u16]) -> &mut Self {
        self.success_codes = codes.to_vec();
        self
    }

    /// Request deadline for every operation. Without one, calls run
    /// to completion or failure.
    pub fn with_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_transport(&mut self, transport: Box<dyn Transport>) -> &mut Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(&mut self) -> Result<ContactClient> {
        let base_url = Url::parse(self.base_url).map_err(|e| {
            Error::InvalidUrl(format!("Invalid base url {}: {e}", self.base_url))
        })?;

        let transport = match self.transport.take() {
            Some(v) => v,
            None => Box::new(HttpTransport::new(&self.success_codes, self.timeout)?),
        };

        Ok(ContactClient {
            base_url,
            transport,
            records: Cache::new(),
            images: Cache::new(),
        })
    }
}

impl<'a> Default for ContactClientBuilder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the remote contacts backend, owning the two-tier cache:
/// decoded records keyed by canonical URL, raw image bytes keyed by
/// resolved photo URL.
///
/// An explicitly constructed instance; callers pass it to whoever
/// needs it instead of reaching for process-wide state. There is no
/// request coalescing: concurrent misses for the same key each go to
/// the network and the cache slot is last-write-wins.
pub struct ContactClient {
    base_url: Url,
    transport: Box<dyn Transport>,

    records: Cache<Contact>,
    images: Cache<Vec<u8>>,
}

impl ContactClient {
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Fetches the full contact list. Always goes to the network;
    /// the list itself is never cached.
    pub async fn fetch_all(&self) -> Result<Directory> {
        let url = self.collection_url()?;
        debug!("Fetching contact list from {url}");

        let data = self.transport.get(&url).await?;
        Directory::from_json(&data)
    }

    /// Fetches one record's detail, cache-first by canonical URL.
    ///
    /// On a miss the detail payload is decoded and the request URL is
    /// re-attached: the URL field the server puts in the body is not
    /// trusted as the cache key.
    pub async fn fetch_detail(&self, contact: &Contact) -> Result<Contact> {
        let key = contact.key();
        if let Some(cached) = self.records.get(key) {
            debug!("Contact detail for {key} served from cache");
            return Ok(cached);
        }

        let url = Url::parse(key).map_err(|e| {
            Error::InvalidUrl(format!("Invalid contact url {key}: {e}"))
        })?;

        let data = self.transport.get(&url).await?;
        let mut fetched: Contact = serde_json::from_slice(&data)?;
        fetched.set_url(key);

        self.records.put(key, fetched.clone());
        Ok(fetched)
    }

    /// Pushes edited fields to the backend with a PUT against the
    /// record's canonical URL, then refreshes the cache entry with
    /// the server's response.
    pub async fn update(&self, contact: &Contact) -> Result<Contact> {
        let Some(key) = contact.url() else {
            return Err(Error::UnknownId("Contact has no resource url to update".into()));
        };

        let url = Url::parse(key).map_err(|e| {
            Error::InvalidUrl(format!("Invalid contact url {key}: {e}"))
        })?;

        let body = serde_json::to_vec(contact)?;
        let data = self.transport.send(Method::PUT, &url, body).await?;

        let mut refreshed: Contact = serde_json::from_slice(&data)?;
        refreshed.set_url(key);

        self.records.put(key, refreshed.clone());
        Ok(refreshed)
    }

    /// Creates the record with a POST to the collection endpoint. The
    /// new record's canonical URL is synthesized from the base
    /// endpoint and the server-assigned identifier, and the cache
    /// entry is keyed under that post-creation URL.
    pub async fn append(&self, contact: &Contact) -> Result<Contact> {
        let url = self.collection_url()?;

        let body = serde_json::to_vec(contact)?;
        let data = self.transport.send(Method::POST, &url, body).await?;

        let mut refreshed: Contact = serde_json::from_slice(&data)?;
        let Some(id) = refreshed.id() else {
            return Err(Error::IncompleteResult("Create response carries no contact id".into()));
        };

        let key = format!("{}/contacts/{}.json", self.base(), id);
        refreshed.set_url(&key);

        self.records.put(&key, refreshed.clone());
        Ok(refreshed)
    }

    /// Downloads the record's profile photo, cache-first by resolved
    /// URL. A stored path with no "http" in it is treated as relative
    /// to the base endpoint.
    pub async fn image_data(&self, contact: &Contact) -> Result<Vec<u8>> {
        let mut path = contact.profile_pic().unwrap_or("").to_string();
        if !path.contains("http") {
            path = format!("{}{}", self.base(), path);
        }

        let url = Url::parse(&path).map_err(|e| {
            Error::InvalidUrl(format!("Invalid image url {path}: {e}"))
        })?;

        if let Some(data) = self.images.get(&path) {
            debug!("Image data for {path} served from cache");
            return Ok(data);
        }

        let data = self.transport.get(&url).await?;
        self.images.put(&path, data.clone());
        Ok(data)
    }

    /// Synchronous cache probe for a record's detail; absent means
    /// "not cached", never triggers a fetch.
    pub fn cached_record(&self, contact: &Contact) -> Option<Contact> {
        self.records.get(contact.key())
    }

    /// Synchronous cache probe for image bytes by resolved URL.
    pub fn cached_image(&self, path: &str) -> Option<Vec<u8>> {
        self.images.get(path)
    }

    fn collection_url(&self) -> Result<Url> {
        self.base_url.join("/contacts.json").map_err(|e| {
            Error::InvalidUrl(format!("Invalid collection url: {e}"))
        })
    }

    fn base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}
