use reqwest::Url;

use wishmeta_core::PageMetadata;

use crate::client::PageClient;
use crate::document::Document;
use crate::error::ExtractError;
use crate::fields::{extract_description, extract_image, extract_price, extract_title};
use crate::resolve::resolve_image_url;

/// One-shot page metadata pipeline: validate → fetch → parse → extract →
/// resolve → assemble.
///
/// Holds no per-request state; a single instance serves any number of
/// concurrent runs. The [`PageClient`] is an injected dependency so tests can
/// point the pipeline at a local server.
pub struct MetadataPipeline {
    client: PageClient,
}

impl MetadataPipeline {
    #[must_use]
    pub fn new(client: PageClient) -> Self {
        Self { client }
    }

    /// Extracts the metadata bundle for `url`.
    ///
    /// Extraction-strategy misses and image/price resolution failures never
    /// abort a run — any subset of fields may legitimately come back
    /// empty/absent in a successful result. The returned `url` is the
    /// caller's original request URL; a relative image is resolved against
    /// the page's effective (post-redirect) URL.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::Validation`] — empty, unparseable, or non-http(s)
    ///   `url`; raised before any network call.
    /// - [`ExtractError::Timeout`] / [`ExtractError::Transport`] — fetch
    ///   failure.
    /// - [`ExtractError::Parse`] — untokenizable page body.
    pub async fn run(&self, url: &str) -> Result<PageMetadata, ExtractError> {
        validate_url(url)?;

        let page = self.client.fetch(url).await?;
        let doc = Document::parse(&page.body)?;

        let title = extract_title(&doc).unwrap_or_default();
        let description = extract_description(&doc).unwrap_or_default();
        let image = extract_image(&doc)
            .and_then(|candidate| resolve_image_url(&candidate, &page.final_url));
        let price = extract_price(&doc, &title, &description);

        tracing::debug!(
            url,
            has_title = !title.is_empty(),
            has_description = !description.is_empty(),
            has_image = image.is_some(),
            has_price = price.is_some(),
            "extraction complete"
        );

        Ok(PageMetadata {
            title,
            description,
            image,
            price,
            url: url.to_owned(),
        })
    }
}

fn validate_url(raw: &str) -> Result<(), ExtractError> {
    if raw.trim().is_empty() {
        return Err(ExtractError::Validation {
            url: raw.to_owned(),
            reason: "url is required".to_string(),
        });
    }
    let parsed = Url::parse(raw).map_err(|e| ExtractError::Validation {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ExtractError::Validation {
            url: raw.to_owned(),
            reason: format!("unsupported scheme \"{}\"", parsed.scheme()),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
