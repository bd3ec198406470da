use crate::{
    args::ShowArgs,
    bookmarks::{BookmarkRecord, SourceMetadata},
    storage::{BoundCollection, StorageManager},
    Config, Credentials,
};
use colored::Colorize;
use log::debug;
use std::fmt::Write;

const WIDTH: usize = 50;

/// Show the details of a bookmark.
pub async fn show(
    config: &Config,
    credentials: Credentials,
    args: &ShowArgs,
) -> Result<(), anyhow::Error> {
    debug!("{args:?}");

    let manager = StorageManager::new(config, credentials);
    let collection = manager.resolve(&args.collection)?;
    let output = show_bookmark(&collection, &args.object_id).await?;
    println!("{output}");

    Ok(())
}

pub async fn show_bookmark(
    collection: &BoundCollection,
    object_id: &str,
) -> Result<String, anyhow::Error> {
    let record = collection.get(object_id).await?;
    Ok(render_details(&record)?)
}

fn section(output: &mut String, title: &str) -> std::fmt::Result {
    writeln!(output)?;
    writeln!(output, "{}", title.green().bold())?;
    writeln!(output, "{}", "-".repeat(WIDTH))
}

/// Render a record in sections: basic information, description, note,
/// source details, and system metadata.
pub fn render_details(record: &BookmarkRecord) -> Result<String, std::fmt::Error> {
    let bookmark = &record.bookmark;
    let mut output = String::new();

    writeln!(output, "{}", "=".repeat(WIDTH))?;
    writeln!(output, "{:^WIDTH$}", "Bookmark Details".blue().bold())?;
    writeln!(output, "{}", "=".repeat(WIDTH))?;

    section(&mut output, "Basic Information")?;
    writeln!(output, "Name:       {}", bookmark.title().bold())?;
    writeln!(
        output,
        "URL:        {}",
        bookmark.url().as_str().blue().underline()
    )?;
    writeln!(output, "Category:   {}", bookmark.category().yellow())?;

    section(&mut output, "Description")?;
    if bookmark.text().is_empty() {
        writeln!(output, "{}", "(none)".dimmed())?;
    } else {
        writeln!(output, "{}", bookmark.text())?;
    }

    if let Some(note) = bookmark.note() {
        section(&mut output, "Notes")?;
        writeln!(output, "{note}")?;
    }

    section(&mut output, "Source Details")?;
    writeln!(
        output,
        "Type:       {}",
        bookmark.kind().to_string().magenta()
    )?;

    match bookmark.source() {
        Some(SourceMetadata::YouTube(metadata)) => {
            writeln!(output, "Channel:    {}", metadata.author)?;
            writeln!(output, "Title:      {}", metadata.title)?;
            writeln!(output, "Video:      {}", metadata.video_id)?;
            writeln!(output, "Thumbnail:  {}", metadata.thumbnail)?;
        }
        Some(SourceMetadata::Reddit(metadata)) => {
            writeln!(output, "Subreddit:  r/{}", metadata.subreddit)?;
            writeln!(output, "Score:      {}", metadata.score)?;
            writeln!(output, "Author:     u/{}", metadata.author)?;
        }
        Some(SourceMetadata::Generic(metadata)) => {
            if let Some(author) = &metadata.author {
                writeln!(output, "Author:     {author}")?;
            }
            writeln!(output, "Title:      {}", metadata.title)?;
            if let Some(site) = &metadata.site {
                writeln!(output, "Site:       {site}")?;
            }
            if !metadata.keywords.is_empty() {
                writeln!(output, "Keywords:   {}", metadata.keywords.join(", "))?;
            }
        }
        None => writeln!(output, "{}", "No extracted metadata".dimmed())?,
    }

    section(&mut output, "System Metadata")?;
    writeln!(
        output,
        "Created:    {}",
        record.created_at.format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(output, "ID:         {}", record.id)?;
    writeln!(output, "Visibility: {}", record.visibility)?;
    writeln!(output)?;
    write!(output, "{}", "=".repeat(WIDTH))?;

    Ok(output)
}
