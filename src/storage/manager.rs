use super::{CollectionRef, JsonBinBackend, ListOptions, StorageBackend};
use crate::{
    bookmarks::{Bookmark, BookmarkRecord, BookmarkSummary, Visibility},
    client::ClientConfig,
    config::Credentials,
    errors::BinmarkError,
    settings::BackendType,
    Config,
};
use log::debug;
use std::fmt;

/// Resolves configured collections to their storage backend.
#[derive(Debug)]
pub struct StorageManager<'a> {
    config: &'a Config,
    credentials: Credentials,
}

impl<'a> StorageManager<'a> {
    pub fn new(config: &'a Config, credentials: Credentials) -> Self {
        Self {
            config,
            credentials,
        }
    }

    /// Bind the collection configured under `collection_name` to its backend.
    ///
    /// No request is sent while resolving.
    pub fn resolve(&self, collection_name: &str) -> Result<BoundCollection, BinmarkError> {
        let settings = &self.config.settings;
        let collection_settings = settings
            .collection(collection_name)
            .ok_or(BinmarkError::UnknownCollection(collection_name.to_owned()))?;
        let collection = CollectionRef::new(collection_name, &collection_settings.id);
        debug!(
            "Resolved collection {collection_name} ({}) with backend {}",
            collection.id, collection_settings.backend
        );

        let backend: Box<dyn StorageBackend> = match collection_settings.backend {
            BackendType::JsonBin => Box::new(JsonBinBackend::new(
                settings.jsonbin.base_url.clone(),
                self.credentials.clone(),
                &ClientConfig::new(settings),
            )?),
        };

        Ok(BoundCollection::new(collection, backend))
    }
}

/// A collection together with the backend storing it.
pub struct BoundCollection {
    collection: CollectionRef,
    backend: Box<dyn StorageBackend>,
}

impl fmt::Debug for BoundCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundCollection")
            .field("collection", &self.collection)
            .finish_non_exhaustive()
    }
}

impl BoundCollection {
    pub fn new(collection: CollectionRef, backend: Box<dyn StorageBackend>) -> Self {
        Self {
            collection,
            backend,
        }
    }

    pub fn collection(&self) -> &CollectionRef {
        &self.collection
    }

    pub async fn create(
        &self,
        bookmark: &Bookmark,
        visibility: Visibility,
    ) -> Result<BookmarkRecord, BinmarkError> {
        self.backend
            .create(&self.collection, bookmark, visibility)
            .await
    }

    pub async fn list(&self, options: ListOptions) -> Result<Vec<BookmarkSummary>, BinmarkError> {
        self.backend.list(&self.collection, options).await
    }

    pub async fn get(&self, object_id: &str) -> Result<BookmarkRecord, BinmarkError> {
        self.backend.get(&self.collection, object_id).await
    }

    pub async fn delete(&self, object_id: &str) -> Result<(), BinmarkError> {
        self.backend.delete(&self.collection, object_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bookmarks::SourceKind,
        settings::{CollectionSettings, JsonBinSettings},
        storage::MockBackend,
        Settings,
    };
    use assert_matches::assert_matches;
    use std::{collections::BTreeMap, path::Path};
    use url::Url;
    use wiremock::MockServer;

    fn config(base_url: &str) -> Config {
        let collections = BTreeMap::from([(
            "tech_bookmarks".to_owned(),
            CollectionSettings {
                id: "abc123".to_owned(),
                name: "Tech".to_owned(),
                backend: BackendType::JsonBin,
            },
        )]);
        let settings = Settings::new(
            JsonBinSettings {
                base_url: Url::parse(base_url).unwrap(),
            },
            collections,
            vec!["programming".to_owned()],
        );
        Config::new(Path::new("config.yaml"), settings)
    }

    #[tokio::test]
    async fn test_resolve() {
        let config = config("https://api.jsonbin.io/v3");
        let manager = StorageManager::new(&config, Credentials::new("api", "access"));

        let res = manager.resolve("tech_bookmarks");
        assert!(res.is_ok(), "{}", res.unwrap_err());
        assert_eq!(
            res.unwrap().collection(),
            &CollectionRef::new("tech_bookmarks", "abc123")
        );
    }

    #[tokio::test]
    async fn test_resolve_unknown_collection() {
        let mock_server = MockServer::start().await;
        let config = config(&mock_server.uri());
        let manager = StorageManager::new(&config, Credentials::new("api", "access"));

        let res = manager.resolve("recipes");
        assert_matches!(res, Err(BinmarkError::UnknownCollection(name)) if name == "recipes");

        let requests = mock_server.received_requests().await.unwrap();
        assert!(requests.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_missing_credentials() {
        let mock_server = MockServer::start().await;
        let config = config(&mock_server.uri());
        let manager = StorageManager::new(&config, Credentials::new("", "access"));

        let res = manager.resolve("tech_bookmarks");
        assert_matches!(res, Err(BinmarkError::Config(_)));

        let requests = mock_server.received_requests().await.unwrap();
        assert!(requests.is_empty());
    }

    #[tokio::test]
    async fn test_bound_collection() {
        let backend = MockBackend::new();
        let collection = BoundCollection::new(
            CollectionRef::new("tech_bookmarks", "abc123"),
            Box::new(backend.clone()),
        );
        let bookmark = Bookmark::builder(
            Url::parse("https://example.com").unwrap(),
            SourceKind::Generic,
        )
        .with_title("Example")
        .with_category("programming")
        .build()
        .unwrap();

        let record = collection
            .create(&bookmark, Visibility::Private)
            .await
            .unwrap();
        assert_eq!(collection.get(&record.id).await.unwrap(), record);
        assert_eq!(
            collection.list(ListOptions::default()).await.unwrap().len(),
            1
        );

        collection.delete(&record.id).await.unwrap();
        assert_matches!(
            collection.get(&record.id).await,
            Err(BinmarkError::NotFound(_))
        );
        assert_eq!(backend.requests(), 5);
    }

    #[tokio::test]
    async fn test_bound_collection_debug() {
        let config = config("https://api.jsonbin.io/v3");
        let credentials = Credentials::new("secret-api", "secret-access");
        let manager = StorageManager::new(&config, credentials);

        let res = manager.resolve("tech_bookmarks");
        assert!(res.is_ok(), "{:?}", res.unwrap_err());

        let debug = format!("{:?}", res.unwrap());
        assert!(debug.contains("tech_bookmarks"));
        assert!(debug.contains("abc123"));
        assert!(!debug.contains("secret"));
    }
}
