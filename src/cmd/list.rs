use crate::{
    args::ListArgs,
    bookmarks::BookmarkSummary,
    storage::{BoundCollection, ListOptions, StorageManager},
    Config, Credentials,
};
use log::debug;

const HEADERS: [&str; 4] = ["ID", "Name", "Created", "Visibility"];

/// List the bookmarks of a collection.
pub async fn list(
    config: &Config,
    credentials: Credentials,
    args: &ListArgs,
) -> Result<(), anyhow::Error> {
    debug!("{args:?}");

    let manager = StorageManager::new(config, credentials);
    let collection = manager.resolve(&args.collection)?;
    let options = ListOptions {
        ascending: args.ascending,
        all: args.all,
    };

    let output = list_bookmarks(&collection, options).await?;
    println!("{output}");

    Ok(())
}

pub async fn list_bookmarks(
    collection: &BoundCollection,
    options: ListOptions,
) -> Result<String, anyhow::Error> {
    let summaries = collection.list(options).await?;
    debug!("Listed {} bookmarks", summaries.len());

    if summaries.is_empty() {
        Ok(format!(
            "No bookmarks found in collection '{}'",
            collection.collection().name
        ))
    } else {
        Ok(render_table(&summaries))
    }
}

/// Render the summaries as a grid.
pub fn render_table(summaries: &[BookmarkSummary]) -> String {
    let rows = summaries
        .iter()
        .map(|summary| {
            [
                summary.id.clone(),
                summary
                    .name
                    .clone()
                    .unwrap_or_else(|| "Unnamed".to_owned()),
                summary.created_at.format("%Y-%m-%d %H:%M").to_string(),
                summary.visibility.to_string(),
            ]
        })
        .collect::<Vec<_>>();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = widths
        .iter()
        .map(|width| "-".repeat(width + 2))
        .collect::<Vec<_>>()
        .join("+");
    let separator = format!("+{separator}+");
    let render_row = |cells: &[String]| {
        let cells = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!(" {cell:<width$} "))
            .collect::<Vec<_>>()
            .join("|");
        format!("|{cells}|")
    };

    let mut lines = vec![
        separator.clone(),
        render_row(&HEADERS.map(|header| header.to_owned())),
        separator.replace('-', "="),
    ];

    for row in &rows {
        lines.push(render_row(row));
        lines.push(separator.clone());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bookmarks::{Bookmark, SourceKind, Visibility},
        storage::{CollectionRef, MockBackend, PAGE_SIZE},
    };
    use chrono::{TimeZone, Utc};
    use url::Url;

    fn collection(backend: &MockBackend) -> BoundCollection {
        BoundCollection::new(
            CollectionRef::new("tech_bookmarks", "abc123"),
            Box::new(backend.clone()),
        )
    }

    async fn add_bookmarks(collection: &BoundCollection, count: usize) {
        for i in 0..count {
            let bookmark = Bookmark::builder(
                Url::parse(&format!("https://url{i}.com")).unwrap(),
                SourceKind::Generic,
            )
            .with_title(format!("Bookmark {i}"))
            .with_category("programming")
            .build()
            .unwrap();
            collection
                .create(&bookmark, Visibility::Private)
                .await
                .unwrap();
        }
    }

    #[test]
    fn test_render_table() {
        let summaries = vec![
            BookmarkSummary {
                id: "bin-1".to_owned(),
                name: Some("Rust in 100 seconds".to_owned()),
                created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap(),
                visibility: Visibility::Private,
            },
            BookmarkSummary {
                id: "bin-2".to_owned(),
                name: None,
                created_at: Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap(),
                visibility: Visibility::Public,
            },
        ];

        let table = render_table(&summaries);
        let expected = "\
+-------+---------------------+------------------+------------+
| ID    | Name                | Created          | Visibility |
+=======+=====================+==================+============+
| bin-1 | Rust in 100 seconds | 2024-05-01 10:30 | Private    |
+-------+---------------------+------------------+------------+
| bin-2 | Unnamed             | 2024-05-02 08:00 | Public     |
+-------+---------------------+------------------+------------+";
        assert_eq!(table, expected);
    }

    #[tokio::test]
    async fn test_list_bookmarks_empty() {
        let backend = MockBackend::new();

        let res = list_bookmarks(&collection(&backend), ListOptions::default()).await;
        assert!(res.is_ok(), "{}", res.unwrap_err());
        assert_eq!(
            res.unwrap(),
            "No bookmarks found in collection 'tech_bookmarks'"
        );
    }

    #[tokio::test]
    async fn test_list_bookmarks_first_page() {
        let backend = MockBackend::new();
        let collection = collection(&backend);
        add_bookmarks(&collection, 12).await;

        let output = list_bookmarks(&collection, ListOptions::default())
            .await
            .unwrap();
        // Header, rows and separators.
        assert_eq!(output.lines().count(), 3 + 2 * PAGE_SIZE);
        assert!(output.contains("Bookmark 11"));
        assert!(!output.contains("Bookmark 1 "));
    }

    #[tokio::test]
    async fn test_list_bookmarks_all() {
        let backend = MockBackend::new();
        let collection = collection(&backend);
        add_bookmarks(&collection, 12).await;

        let options = ListOptions {
            ascending: true,
            all: true,
        };
        let output = list_bookmarks(&collection, options).await.unwrap();
        assert_eq!(output.lines().count(), 3 + 2 * 12);

        let first = output.find("Bookmark 0").unwrap();
        let last = output.find("Bookmark 11").unwrap();
        assert!(first < last);
    }
}
