use super::{CollectionRef, ListOptions, StorageBackend, PAGE_SIZE};
use crate::{
    bookmarks::{Bookmark, BookmarkRecord, BookmarkSummary, Visibility},
    client::ClientConfig,
    config::Credentials,
    errors::BinmarkError,
    json, utils,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, trace};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Client as ReqwestClient, RequestBuilder, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

const MASTER_KEY: HeaderName = HeaderName::from_static("x-master-key");
const ACCESS_KEY: HeaderName = HeaderName::from_static("x-access-key");
const BIN_PRIVATE: HeaderName = HeaderName::from_static("x-bin-private");
const BIN_NAME: HeaderName = HeaderName::from_static("x-bin-name");
const COLLECTION_ID: HeaderName = HeaderName::from_static("x-collection-id");
const SORT_ORDER: HeaderName = HeaderName::from_static("x-sort-order");

/// The maximal length of a bin name accepted by JSONBin.
pub const BIN_NAME_MAX_CHARS: usize = 128;

/// The metadata JSONBin assigns to a bin.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BinMetadata {
    id: String,
    created_at: DateTime<Utc>,
    private: bool,
    #[serde(default)]
    name: Option<String>,
}

/// The response for creating or reading a bin.
#[derive(Debug, Deserialize)]
struct BinResponse {
    record: Bookmark,
    metadata: BinMetadata,
}

impl From<BinResponse> for BookmarkRecord {
    fn from(response: BinResponse) -> Self {
        let mut bookmark = response.record;
        bookmark.fill_missing(response.metadata.name.as_deref());

        BookmarkRecord {
            id: response.metadata.id,
            created_at: response.metadata.created_at,
            visibility: Visibility::from_private(response.metadata.private),
            bookmark,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SnippetMeta {
    name: Option<String>,
}

/// An entry in the listing of a collection. `record` is the id of the bin.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BinEntry {
    record: String,
    created_at: DateTime<Utc>,
    private: bool,
    #[serde(default)]
    snippet_meta: SnippetMeta,
}

impl From<BinEntry> for BookmarkSummary {
    fn from(entry: BinEntry) -> Self {
        BookmarkSummary {
            id: entry.record,
            name: entry.snippet_meta.name,
            created_at: entry.created_at,
            visibility: Visibility::from_private(entry.private),
        }
    }
}

/// Stores every bookmark as a bin in a JSONBin collection.
#[derive(Debug, Clone)]
pub struct JsonBinBackend {
    client: ReqwestClient,
    base_url: Url,
    credentials: Credentials,
}

impl JsonBinBackend {
    /// Fails if a credential is missing, before any request is sent.
    pub fn new(
        base_url: Url,
        credentials: Credentials,
        config: &ClientConfig,
    ) -> Result<Self, BinmarkError> {
        credentials.validate()?;
        let client = config.build()?;

        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    fn headers(&self) -> Result<HeaderMap, BinmarkError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(MASTER_KEY, credential(self.credentials.api_key())?);
        headers.insert(ACCESS_KEY, credential(self.credentials.access_key())?);
        Ok(headers)
    }

    /// Send a request and map error statuses. A 404 is reported as
    /// `NotFound` if the request addressed `object_id`.
    async fn send(
        &self,
        request: RequestBuilder,
        object_id: Option<&str>,
    ) -> Result<Response, BinmarkError> {
        let response = request
            .headers(self.headers()?)
            .send()
            .await
            .map_err(BinmarkError::Network)?;
        let status = response.status();
        debug!("Received response with status {status}");

        match (status, object_id) {
            (status, _) if status.is_success() => Ok(response),
            (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, _) => {
                Err(BinmarkError::Auth { status })
            }
            (StatusCode::NOT_FOUND, Some(object_id)) => {
                Err(BinmarkError::NotFound(object_id.to_owned()))
            }
            (status, _) => {
                let body = response.text().await.unwrap_or_default();
                Err(BinmarkError::Remote { status, body })
            }
        }
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, BinmarkError> {
        let body = response
            .bytes()
            .await
            .map_err(BinmarkError::ParseHttpResponse)?;
        trace!("Response body: {}", String::from_utf8_lossy(&body));
        json::deserialize(&body)
    }
}

fn credential(key: &str) -> Result<HeaderValue, BinmarkError> {
    let mut value = HeaderValue::from_str(key)
        .map_err(|_| BinmarkError::Config("Credentials contain invalid characters".to_owned()))?;
    value.set_sensitive(true);
    Ok(value)
}

/// The bin name shown in listings. Control characters are not allowed in
/// headers. Returns `None` if nothing visible is left.
fn bin_name(title: &str) -> Result<Option<HeaderValue>, BinmarkError> {
    let name = title
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>();
    let name = utils::truncate(name.trim(), BIN_NAME_MAX_CHARS);

    if name.is_empty() {
        return Ok(None);
    }

    HeaderValue::from_bytes(name.as_bytes())
        .map(Some)
        .map_err(|err| BinmarkError::Other(err.into()))
}

#[async_trait]
impl StorageBackend for JsonBinBackend {
    async fn create(
        &self,
        collection: &CollectionRef,
        bookmark: &Bookmark,
        visibility: Visibility,
    ) -> Result<BookmarkRecord, BinmarkError> {
        debug!("Create bookmark in collection {}", collection.name);
        let private = if visibility.is_private() {
            "true"
        } else {
            "false"
        };
        let collection_id = HeaderValue::from_str(&collection.id)
            .map_err(|_| BinmarkError::Config(format!("Invalid collection id: {}", collection.id)))?;

        let mut request = self
            .client
            .post(self.endpoint("b"))
            .header(BIN_PRIVATE, private)
            .header(COLLECTION_ID, collection_id);

        if let Some(name) = bin_name(bookmark.title())? {
            request = request.header(BIN_NAME, name);
        }

        let request = request.body(json::serialize(bookmark)?);
        let response = self.send(request, None).await?;
        let bin = Self::parse::<BinResponse>(response).await?;

        Ok(bin.into())
    }

    async fn list(
        &self,
        collection: &CollectionRef,
        options: ListOptions,
    ) -> Result<Vec<BookmarkSummary>, BinmarkError> {
        debug!("List bookmarks in collection {}: {options:?}", collection.name);
        let mut summaries = Vec::<BookmarkSummary>::new();
        let mut last_id: Option<String> = None;

        loop {
            let path = match &last_id {
                Some(last_id) => format!("c/{}/bins/{last_id}", collection.id),
                None => format!("c/{}/bins", collection.id),
            };
            let mut request = self.client.get(self.endpoint(&path));

            if options.ascending {
                request = request.header(SORT_ORDER, "ascending");
            }

            let response = self.send(request, None).await?;
            let page = Self::parse::<Vec<BinEntry>>(response).await?;
            let page_len = page.len();
            summaries.extend(page.into_iter().map(BookmarkSummary::from));

            if !options.all || page_len < PAGE_SIZE {
                break;
            }

            let next_id = summaries.last().map(|summary| summary.id.clone());

            // Guard against a remote which keeps returning the same page.
            if next_id == last_id {
                break;
            }

            last_id = next_id;
        }

        if !options.all {
            summaries.truncate(PAGE_SIZE);
        }

        Ok(summaries)
    }

    async fn get(
        &self,
        collection: &CollectionRef,
        object_id: &str,
    ) -> Result<BookmarkRecord, BinmarkError> {
        debug!("Get bookmark {object_id} in collection {}", collection.name);
        let request = self
            .client
            .get(self.endpoint(&format!("b/{object_id}/latest")));
        let response = self.send(request, Some(object_id)).await?;
        let bin = Self::parse::<BinResponse>(response).await?;

        Ok(bin.into())
    }

    async fn delete(
        &self,
        collection: &CollectionRef,
        object_id: &str,
    ) -> Result<(), BinmarkError> {
        debug!("Delete bookmark {object_id} in collection {}", collection.name);
        let request = self.client.delete(self.endpoint(&format!("b/{object_id}")));
        self.send(request, Some(object_id)).await?;

        Ok(())
    }
}
