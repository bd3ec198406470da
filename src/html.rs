use crate::{errors::BinmarkError, utils};
use anyhow::anyhow;
use log::debug;
use readability::ExtractOptions;
use scraper::{Html, Selector};
use url::Url;

/// The maximal length of a generated summary in characters.
pub const SUMMARY_MAX_CHARS: usize = 500;

/// The maximal number of sentences in a generated summary.
const SUMMARY_MAX_SENTENCES: usize = 3;

/// Metadata found in the HTML of a webpage.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub author: Option<String>,
    /// The main text of the page as extracted by readability.
    pub text: Option<String>,
}

impl PageMetadata {
    /// Use the description of the page, or summarize its main text.
    pub fn summary(&self) -> String {
        match (&self.description, &self.text) {
            (Some(description), _) => utils::truncate(description, SUMMARY_MAX_CHARS).to_owned(),
            (None, Some(text)) => summarize(text, SUMMARY_MAX_CHARS),
            (None, None) => String::new(),
        }
    }
}

pub fn extract_page(html: &str, url: &Url) -> Result<PageMetadata, BinmarkError> {
    let document = Html::parse_document(html);

    let title = select_meta(&document, r#"meta[property="og:title"]"#)?
        .or(select_text(&document, "title")?);
    let description = select_meta(&document, r#"meta[property="og:description"]"#)?
        .or(select_meta(&document, r#"meta[name="description"]"#)?);
    let author = select_meta(&document, r#"meta[name="author"]"#)?;
    let keywords = select_meta(&document, r#"meta[name="keywords"]"#)?
        .map(|keywords| split_keywords(&keywords))
        .unwrap_or_default();

    let (readable_title, text) =
        match readability::extract(&mut html.as_bytes(), url, ExtractOptions::default()) {
            Ok(readable) => (
                Some(normalize(&readable.title)).filter(|title| !title.is_empty()),
                Some(normalize(&readable.text)).filter(|text| !text.is_empty()),
            ),
            Err(err) => {
                debug!("Can't extract readable content for {url}: {err}");
                (None, None)
            }
        };

    Ok(PageMetadata {
        title: title.or(readable_title),
        description,
        keywords,
        author,
        text,
    })
}

fn selector(selector: &str) -> Result<Selector, BinmarkError> {
    Selector::parse(selector)
        .map_err(|err| BinmarkError::Other(anyhow!("Invalid selector {selector}: {err}")))
}

fn select_meta(document: &Html, meta: &str) -> Result<Option<String>, BinmarkError> {
    let selector = selector(meta)?;
    let content = document
        .select(&selector)
        .filter_map(|element| element.value().attr("content"))
        .map(normalize)
        .find(|content| !content.is_empty());
    Ok(content)
}

fn select_text(document: &Html, tag: &str) -> Result<Option<String>, BinmarkError> {
    let selector = selector(tag)?;
    let text = document
        .select(&selector)
        .map(|element| normalize(&element.text().collect::<String>()))
        .find(|text| !text.is_empty());
    Ok(text)
}

/// Collapse whitespace.
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn split_keywords(keywords: &str) -> Vec<String> {
    let mut unique = Vec::new();

    for keyword in keywords.split(',').map(str::trim) {
        if !keyword.is_empty() && !unique.iter().any(|k: &String| k == keyword) {
            unique.push(keyword.to_owned());
        }
    }

    unique
}

/// Take the leading sentences of `text` that fit into `max_chars`.
pub fn summarize(text: &str, max_chars: usize) -> String {
    let text = normalize(text);
    let mut summary = String::new();
    let mut sentences = 0;

    for sentence in text.split_inclusive(['.', '!', '?']) {
        let sentence = sentence.trim();

        if sentence.is_empty() {
            continue;
        }

        let len = summary.chars().count() + sentence.chars().count() + 1;

        if sentences == SUMMARY_MAX_SENTENCES || len > max_chars {
            break;
        }

        if !summary.is_empty() {
            summary.push(' ');
        }

        summary.push_str(sentence);
        sentences += 1;
    }

    if summary.is_empty() {
        utils::truncate(&text, max_chars).to_owned()
    } else {
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_page_meta() {
        let html = r#"
        <html>
        <head>
            <title>Fallback title</title>
            <meta property="og:title" content="  The   Rust Blog ">
            <meta name="description" content="Empowering everyone to build reliable software.">
            <meta name="keywords" content="rust, programming, rust, ">
            <meta name="author" content="The Rust Team">
        </head>
        <body><p>Paragraph</p></body>
        </html>
        "#;
        let url = Url::parse("https://blog.rust-lang.org").unwrap();

        let res = extract_page(html, &url);
        assert!(res.is_ok(), "{}", res.unwrap_err());

        let page = res.unwrap();
        assert_eq!(page.title, Some("The Rust Blog".to_owned()));
        assert_eq!(
            page.description,
            Some("Empowering everyone to build reliable software.".to_owned())
        );
        assert_eq!(page.keywords, vec!["rust", "programming"]);
        assert_eq!(page.author, Some("The Rust Team".to_owned()));
        assert_eq!(
            page.summary(),
            "Empowering everyone to build reliable software."
        );
    }

    #[test]
    fn test_extract_page_title_tag() {
        let html = r#"
        <html>
        <head><title>
            title_content
        </title></head>
        <body></body>
        </html>
        "#;
        let url = Url::parse("https://url.com").unwrap();

        let page = extract_page(html, &url).unwrap();
        assert_eq!(page.title, Some("title_content".to_owned()));
        assert!(page.description.is_none());
        assert!(page.keywords.is_empty());
        assert!(page.author.is_none());
    }

    #[test]
    fn test_extract_page_readable_text() {
        let html = r#"
        <html>
        <head><title>Ownership explained</title></head>
        <body>
            <article>
                <p>Ownership is the most unique feature of the language.</p>
                <p>It enables memory safety guarantees without a garbage collector.</p>
                <p>Each value has a variable that is called its owner.</p>
                <p>When the owner goes out of scope the value is dropped.</p>
            </article>
        </body>
        </html>
        "#;
        let url = Url::parse("https://example.com/ownership").unwrap();

        let res = extract_page(html, &url);
        assert!(res.is_ok(), "{}", res.unwrap_err());

        let page = res.unwrap();
        assert_eq!(page.title, Some("Ownership explained".to_owned()));
        assert!(page.description.is_none());
        assert!(page.text.is_some());
        assert_eq!(
            page.summary(),
            "Ownership is the most unique feature of the language. \
            It enables memory safety guarantees without a garbage collector. \
            Each value has a variable that is called its owner."
        );
    }

    #[test]
    fn test_extract_page_readable_text_max_chars() {
        let sentences = (1..=3)
            .map(|i| format!("Sentence {i} lorem ipsum{}.", " dolor".repeat(30)))
            .collect::<Vec<_>>();
        let paragraphs = sentences
            .iter()
            .map(|sentence| format!("<p>{sentence}</p>"))
            .collect::<String>();
        let html = format!(
            "<html><head><title>Lorem</title></head>\
            <body><article>{paragraphs}</article></body></html>"
        );
        let url = Url::parse("https://example.com/lorem").unwrap();

        let page = extract_page(&html, &url).unwrap();
        let summary = page.summary();
        assert!(summary.chars().count() <= SUMMARY_MAX_CHARS);
        assert_eq!(summary, format!("{} {}", sentences[0], sentences[1]));
    }

    #[test]
    fn test_summary_from_text() {
        let page = PageMetadata {
            text: Some("First sentence. Second sentence! Third? Fourth sentence.".to_owned()),
            ..Default::default()
        };
        assert_eq!(page.summary(), "First sentence. Second sentence! Third?");
    }

    #[test]
    fn test_summarize_max_chars() {
        let text = "A short one. This second sentence does not fit into the limit.";
        assert_eq!(summarize(text, 20), "A short one.");
    }

    #[test]
    fn test_summarize_long_sentence() {
        let text = "abcdefghijklmnopqrstuvwxyz";
        assert_eq!(summarize(text, 10), "abcdefghij");
    }

    #[test]
    fn test_summarize_whitespace() {
        assert_eq!(summarize("  line\n\n  break.  ", 100), "line break.");
        assert_eq!(summarize("", 100), "");
    }
}
