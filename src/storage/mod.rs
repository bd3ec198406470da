mod jsonbin;
mod manager;
mod mock_backend;

use crate::{
    bookmarks::{Bookmark, BookmarkRecord, BookmarkSummary, Visibility},
    errors::BinmarkError,
};
use async_trait::async_trait;
pub use jsonbin::{JsonBinBackend, BIN_NAME_MAX_CHARS};
pub use manager::{BoundCollection, StorageManager};
pub use mock_backend::MockBackend;

/// The number of bookmarks in a page of a listing.
pub const PAGE_SIZE: usize = 10;

/// A collection as addressed by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRef {
    /// The name used on the command line.
    pub name: String,
    /// The backend-specific identifier.
    pub id: String,
}

impl CollectionRef {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// List the oldest bookmarks first.
    pub ascending: bool,
    /// Fetch all pages instead of the first one.
    pub all: bool,
}

/// A trait to store bookmarks in a remote or mock backend.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Store a new bookmark and return it with the fields assigned by the
    /// backend.
    async fn create(
        &self,
        collection: &CollectionRef,
        bookmark: &Bookmark,
        visibility: Visibility,
    ) -> Result<BookmarkRecord, BinmarkError>;

    /// List the bookmarks of a collection, newest first unless
    /// `options.ascending` is set.
    async fn list(
        &self,
        collection: &CollectionRef,
        options: ListOptions,
    ) -> Result<Vec<BookmarkSummary>, BinmarkError>;

    async fn get(
        &self,
        collection: &CollectionRef,
        object_id: &str,
    ) -> Result<BookmarkRecord, BinmarkError>;

    async fn delete(&self, collection: &CollectionRef, object_id: &str)
        -> Result<(), BinmarkError>;
}
