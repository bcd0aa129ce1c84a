//! Single-attempt fetch of a canonical documentation page

use futures::StreamExt;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

use crate::errors::{DocError, DocResult};
use crate::utils::MAX_DOCUMENT_SIZE;

/// A fetched page body and whether it was declared as HTML
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub body: String,
    pub is_html: bool,
}

/// GET `url` once. No retry, no redirect special-casing.
///
/// `timeout` bounds the whole exchange, body included.
///
/// # Errors
///
/// `HttpStatus` for non-2xx, `Timeout` when the deadline passes, `Network`
/// for any other transport failure, `Conversion` for an oversized body.
pub async fn fetch_page(
    client: &Client,
    url: &str,
    timeout: Duration,
    user_agent: &str,
) -> DocResult<FetchedPage> {
    let response = client
        .get(url)
        .timeout(timeout)
        .header("User-Agent", user_agent)
        .header("Accept", "text/html,application/xhtml+xml,text/markdown;q=0.9,*/*;q=0.8")
        .send()
        .await
        .map_err(|e| DocError::from_reqwest(url, timeout, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DocError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let is_html = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(is_html_content_type);

    let expected_size = response.content_length().unwrap_or(0);
    if expected_size > MAX_DOCUMENT_SIZE as u64 {
        return Err(DocError::Conversion(format!(
            "document too large: {expected_size} bytes exceeds limit of {MAX_DOCUMENT_SIZE} bytes"
        )));
    }

    let mut buffer = Vec::with_capacity(usize::try_from(expected_size).unwrap_or(0));
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| DocError::from_reqwest(url, timeout, e))?;
        if buffer.len() + chunk.len() > MAX_DOCUMENT_SIZE {
            return Err(DocError::Conversion(format!(
                "document exceeded size limit of {MAX_DOCUMENT_SIZE} bytes during download"
            )));
        }
        buffer.extend_from_slice(&chunk);
    }

    Ok(FetchedPage {
        body: String::from_utf8_lossy(&buffer).into_owned(),
        is_html,
    })
}

/// `text/html` or `application/xhtml+xml`, parameters ignored
pub fn is_html_content_type(value: &str) -> bool {
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "text/html" || mime == "application/xhtml+xml"
}
