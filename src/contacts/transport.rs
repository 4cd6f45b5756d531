use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use url::Url;

use crate::{
    Error,
    error::Result,
};

/// Seam between the client's orchestration and the HTTP stack, so
/// tests can substitute a canned transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET the resource, returning the raw body bytes.
    async fn get(&self, url: &Url) -> Result<Vec<u8>>;

    /// Send a JSON body with the given method, returning the raw
    /// response bytes.
    async fn send(&self, method: Method, url: &Url, body: Vec<u8>) -> Result<Vec<u8>>;
}

/// reqwest-backed transport enforcing the configured success-status
/// set. No timeout unless one is configured explicitly.
pub struct HttpTransport {
    client: Client,
    success_codes: Vec<u16>,
}

impl HttpTransport {
    pub fn new(success_codes: &[u16], timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            Error::State(format!("Http error: creating http client error {e}"))
        })?;

        Ok(Self {
            client,
            success_codes: success_codes.to_vec(),
        })
    }

    async fn read_body(&self, rsp: Response) -> Result<Vec<u8>> {
        let status = rsp.status().as_u16();
        if !self.success_codes.contains(&status) {
            return Err(Error::Status(status));
        }

        let bytes = rsp.bytes().await.map_err(|e| {
            Error::Network(format!("Http error: reading response body error {e}"))
        })?;

        if bytes.is_empty() {
            return Err(Error::NoData("Http error: empty response body".into()));
        }
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<Vec<u8>> {
        let rsp = self.client.get(url.clone())
            .send()
            .await
            .map_err(|e| {
            Error::Network(format!("Http error: sending http request error {e}"))
        })?;

        self.read_body(rsp).await
    }

    async fn send(&self, method: Method, url: &Url, body: Vec<u8>) -> Result<Vec<u8>> {
        let rsp = self.client.request(method, url.clone())
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
            Error::Network(format!("Http error: sending http request error {e}"))
        })?;

        self.read_body(rsp).await
    }
}
