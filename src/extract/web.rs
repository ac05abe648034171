use scraper::{Html, Node};
use tracing::{debug, info};

use crate::error::{FetchError, Result};

/// Fetch a web page and return its tag-stripped text content.
///
/// Script, style and noscript contents are dropped; remaining text nodes are
/// joined and whitespace-collapsed. Any non-2xx response is an error.
pub async fn fetch_page_text(url: &str) -> Result<String> {
    info!("fetching lesson content from {}", url);

    let response = reqwest::get(url).await.map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        }
        .into());
    }

    let body = response.text().await.map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })?;

    let text = html_to_text(&body);
    debug!("extracted {} chars of page text", text.len());
    Ok(text)
}

/// Collect the visible text of an HTML document.
fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts: Vec<&str> = Vec::new();

    for node in document.tree.nodes() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let parent_is_hidden = node
            .parent()
            .and_then(|p| p.value().as_element())
            .map(|e| matches!(e.name(), "script" | "style" | "noscript"))
            .unwrap_or(false);
        if !parent_is_hidden {
            parts.push(&**text);
        }
    }

    parts
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
