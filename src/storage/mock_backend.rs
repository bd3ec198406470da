use super::{CollectionRef, ListOptions, StorageBackend, BIN_NAME_MAX_CHARS, PAGE_SIZE};
use crate::{
    bookmarks::{Bookmark, BookmarkRecord, BookmarkSummary, Visibility},
    errors::BinmarkError,
    utils,
};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::{collections::HashMap, sync::Arc};
use uuid::Uuid;

/// An in-memory backend used in testing.
///
/// Bookmarks are kept per collection id in insertion order.
#[derive(Debug, Default, Clone)]
pub struct MockBackend {
    collections: Arc<Mutex<HashMap<String, Vec<BookmarkRecord>>>>,
    requests: Arc<Mutex<usize>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of operations performed on the backend.
    pub fn requests(&self) -> usize {
        *self.requests.lock()
    }

    /// All records of a collection in insertion order.
    pub fn records(&self, collection: &CollectionRef) -> Vec<BookmarkRecord> {
        let collections = self.collections.lock();
        collections.get(&collection.id).cloned().unwrap_or_default()
    }

    fn count(&self) {
        *self.requests.lock() += 1;
    }
}

#[async_trait]
impl StorageBackend for MockBackend {
    async fn create(
        &self,
        collection: &CollectionRef,
        bookmark: &Bookmark,
        visibility: Visibility,
    ) -> Result<BookmarkRecord, BinmarkError> {
        self.count();
        let record = BookmarkRecord {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            visibility,
            bookmark: bookmark.clone(),
        };

        let mut collections = self.collections.lock();
        collections
            .entry(collection.id.clone())
            .or_default()
            .push(record.clone());

        Ok(record)
    }

    async fn list(
        &self,
        collection: &CollectionRef,
        options: ListOptions,
    ) -> Result<Vec<BookmarkSummary>, BinmarkError> {
        self.count();
        let mut summaries = self
            .records(collection)
            .into_iter()
            .map(|record| BookmarkSummary {
                name: Some(utils::truncate(record.bookmark.title(), BIN_NAME_MAX_CHARS).to_owned()),
                id: record.id,
                created_at: record.created_at,
                visibility: record.visibility,
            })
            .collect::<Vec<_>>();

        if !options.ascending {
            summaries.reverse();
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
        self.count();
        self.records(collection)
            .into_iter()
            .find(|record| record.id == object_id)
            .ok_or(BinmarkError::NotFound(object_id.to_owned()))
    }

    async fn delete(
        &self,
        collection: &CollectionRef,
        object_id: &str,
    ) -> Result<(), BinmarkError> {
        self.count();
        let mut collections = self.collections.lock();
        let records = collections
            .get_mut(&collection.id)
            .ok_or(BinmarkError::NotFound(object_id.to_owned()))?;
        let len = records.len();
        records.retain(|record| record.id != object_id);

        if records.len() == len {
            Err(BinmarkError::NotFound(object_id.to_owned()))
        } else {
            Ok(())
        }
    }
}
