use crate::errors::BinmarkError;
use anyhow::{anyhow, Context};
use std::{fs::File, io::Read, path::Path};
use url::Url;

/// Helper function to read a file that logs the path of the file in case of an error.
pub fn read_file(path: &Path) -> Result<Vec<u8>, anyhow::Error> {
    let mut buffer = Vec::new();
    let mut file = open_file(path)?;
    file.read_to_end(&mut buffer)
        .context(format!("Can't read file at {}", path.display()))?;
    Ok(buffer)
}

/// Helper function to open a file that logs the path of the file in case of an error.
pub fn open_file(path: &Path) -> Result<File, anyhow::Error> {
    let file = File::open(path).context(format!("Can't open file at {}", path.display()))?;
    Ok(file)
}

/// Parse a bookmark url. Only absolute `http` and `https` urls are accepted.
pub fn parse_url(url: &str) -> Result<Url, BinmarkError> {
    let url = Url::parse(url.trim())?;

    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        _ => Err(BinmarkError::Other(anyhow!("Unsupported url: {url}"))),
    }
}

/// Truncate `text` to at most `max_chars` characters.
pub fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
