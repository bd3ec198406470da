use crate::{errors::BinmarkError, Settings};
use anyhow::anyhow;
use async_trait::async_trait;
use log::{debug, trace};
use parking_lot::Mutex;
use reqwest::{header::CONTENT_TYPE, Client as ReqwestClient, Response};
use std::{collections::HashMap, sync::Arc, time::Duration};
use url::Url;

/// A trait to fetch content from a real or mock client.
#[async_trait]
pub trait Fetch: Clone + Send + Sync {
    /// Fetch content of a website as HTML.
    async fn fetch(&self, url: &Url) -> Result<String, BinmarkError>;

    /// Fetch the raw body of a JSON endpoint.
    async fn fetch_json(&self, url: &Url) -> Result<String, BinmarkError>;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// The request timeout in milliseconds.
    pub request_timeout: u64,
    /// The user agent sent with every request.
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(settings: &Settings) -> Self {
        Self {
            request_timeout: settings.request_timeout,
            user_agent: settings.sources.user_agent.clone(),
        }
    }

    /// Build the underlying http client with an explicit timeout.
    pub fn build(&self) -> Result<ReqwestClient, BinmarkError> {
        ReqwestClient::builder()
            .timeout(Duration::from_millis(self.request_timeout))
            .user_agent(&self.user_agent)
            .build()
            .map_err(BinmarkError::CreateClient)
    }
}

/// A client to fetch websites.
#[derive(Debug, Clone)]
pub struct Client {
    client: ReqwestClient,
}

impl Client {
    pub fn new(config: &ClientConfig) -> Result<Self, BinmarkError> {
        let client = config.build()?;
        Ok(Self { client })
    }

    async fn get(&self, url: &Url) -> Result<Response, BinmarkError> {
        let response = self
            .client
            .get(url.to_owned())
            .send()
            .await
            .map_err(BinmarkError::Network)?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(BinmarkError::HttpStatus {
                status: response.status(),
                url: url.to_string(),
            })
        }
    }
}

fn is_binary(content_type: &str) -> bool {
    content_type.starts_with("application/")
        || content_type.starts_with("image/")
        || content_type.starts_with("audio/")
        || content_type.starts_with("video/")
}

#[async_trait]
impl Fetch for Client {
    async fn fetch(&self, url: &Url) -> Result<String, BinmarkError> {
        debug!("Fetch website ({url})");
        let response = self.get(url).await?;

        if let Some(content_type) = response.headers().get(CONTENT_TYPE) {
            let content_type = content_type
                .to_str()
                .map_err(|err| BinmarkError::Other(err.into()))?;

            // XHTML is served as `application/xhtml+xml`.
            if is_binary(content_type) && !content_type.contains("html") {
                return Err(BinmarkError::BinaryResponse(url.to_string()));
            }
        }

        let html = response
            .text()
            .await
            .map_err(BinmarkError::ParseHttpResponse)?;
        trace!("Fetched website: {html}");

        if html.trim().is_empty() {
            Err(BinmarkError::EmptyResponse(url.to_string()))
        } else {
            Ok(html)
        }
    }

    async fn fetch_json(&self, url: &Url) -> Result<String, BinmarkError> {
        debug!("Fetch json ({url})");
        let response = self.get(url).await?;
        let body = response
            .text()
            .await
            .map_err(BinmarkError::ParseHttpResponse)?;
        trace!("Fetched json: {body}");
        Ok(body)
    }
}

/// A mock client to fetch websites used in testing.
#[derive(Debug, Default, Clone)]
pub struct MockClient {
    /// Mock the content by url.
    client_map: Arc<Mutex<HashMap<Url, String>>>,
    /// The number of requests sent to the mock.
    requests: Arc<Mutex<usize>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, content: impl Into<String>, url: &Url) {
        let mut client_map = self.client_map.lock();
        client_map.insert(url.clone(), content.into());
    }

    pub fn get(&self, url: &Url) -> Option<String> {
        let client_map = self.client_map.lock();
        client_map.get(url).map(|content| content.to_owned())
    }

    pub fn requests(&self) -> usize {
        *self.requests.lock()
    }

    fn respond(&self, url: &Url) -> Result<String, BinmarkError> {
        *self.requests.lock() += 1;
        let content = self
            .get(url)
            .ok_or(anyhow!("Can't fetch mocked url: {url}"))?;
        Ok(content)
    }
}

#[async_trait]
impl Fetch for MockClient {
    async fn fetch(&self, url: &Url) -> Result<String, BinmarkError> {
        self.respond(url)
    }

    async fn fetch_json(&self, url: &Url) -> Result<String, BinmarkError> {
        self.respond(url)
    }
}
