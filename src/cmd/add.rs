use crate::{
    args::AddArgs,
    bookmarks::{Bookmark, BookmarkRecord, Visibility},
    client::ClientConfig,
    json,
    prompt::{DialoguerPrompt, Prompt},
    sources::SourceResolver,
    storage::{BoundCollection, StorageManager},
    utils, Client, Config, Credentials, Settings,
};
use anyhow::anyhow;
use log::{debug, warn};

/// Add a bookmark to a collection.
pub async fn add(
    config: &Config,
    credentials: Credentials,
    args: &AddArgs,
) -> Result<(), anyhow::Error> {
    debug!("{args:?}");

    let manager = StorageManager::new(config, credentials);
    let collection = manager.resolve(&args.collection)?;
    let client = Client::new(&ClientConfig::new(&config.settings))?;
    let resolver = SourceResolver::new(client, &config.settings.sources)?;
    let visibility = if args.public {
        Visibility::Public
    } else {
        Visibility::Private
    };
    let mut prompt = DialoguerPrompt;

    let record = add_bookmark(
        &config.settings,
        &resolver,
        &collection,
        &mut prompt,
        args.url.as_deref(),
        visibility,
    )
    .await?;

    println!("Bookmark added successfully!");
    println!("Object ID: {}", record.id);
    println!("Collection: {}", collection.collection().name);
    println!("Type: {}", record.bookmark.kind());

    Ok(())
}

/// Extract the metadata of the url, let the user complete the bookmark, and
/// store it.
///
/// If the metadata can't be extracted, the description is asked for instead.
pub async fn add_bookmark(
    settings: &Settings,
    resolver: &SourceResolver,
    collection: &BoundCollection,
    prompt: &mut impl Prompt,
    url: Option<&str>,
    visibility: Visibility,
) -> Result<BookmarkRecord, anyhow::Error> {
    let url = match url {
        Some(url) => url.to_owned(),
        None => prompt.input("Enter URL", None)?,
    };
    let url = utils::parse_url(&url)?;
    let kind = resolver.detect(&url);

    let (source, text) = match resolver.resolve(&url).await {
        Ok(resolved) => {
            println!("{}", json::to_pretty_string(&resolved.metadata)?);
            let description = resolved.metadata.description().to_owned();

            let text = if !description.is_empty()
                && prompt.confirm(
                    &format!("Use automatically generated description?\n{description}"),
                    true,
                )? {
                description
            } else {
                prompt.input("Enter description", None)?
            };

            (Some(resolved.metadata), text)
        }
        Err(err) if err.is_recoverable() => {
            warn!("Could not extract metadata: {err}");
            (None, prompt.input("Enter description", None)?)
        }
        Err(err) => return Err(err.into()),
    };

    let note = prompt.input("Enter note (optional)", None)?;
    let index = prompt.select("Select category", &settings.categories)?;
    let category = settings
        .categories
        .get(index)
        .ok_or(anyhow!("Invalid category"))?;
    let default_name = source
        .as_ref()
        .map(|source| source.title().to_owned())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| url.to_string());
    let name = prompt.input("Enter bookmark name", Some(default_name.as_str()))?;

    let mut builder = Bookmark::builder(url, kind)
        .with_title(name)
        .with_text(text)
        .with_note(note)
        .with_category(category);

    if let Some(source) = source {
        builder = builder.with_source(source);
    }

    let bookmark = builder.build()?;
    let record = collection.create(&bookmark, visibility).await?;
    debug!("Created bookmark {}", record.id);

    Ok(record)
}
