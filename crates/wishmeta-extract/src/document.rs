use scraper::{Html, Selector};

use crate::error::ExtractError;

/// Read-only queryable view of a parsed HTML page.
///
/// Thin adapter over [`scraper::Html`], whose html5ever parser is tolerant of
/// unclosed tags and invalid nesting by construction, matching real-world
/// page quality. One `Document` lives for one pipeline run; it is never
/// cached or shared.
#[derive(Debug)]
pub struct Document {
    tree: Html,
}

impl Document {
    /// Parses raw page text into a queryable document.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Parse`] only when the payload cannot be
    /// tokenized as text at all: empty/whitespace-only bodies and NUL-bearing
    /// (binary) payloads. Malformed markup is repaired, not rejected.
    pub fn parse(raw: &str) -> Result<Self, ExtractError> {
        if raw.trim().is_empty() {
            return Err(ExtractError::Parse {
                reason: "empty payload".to_string(),
            });
        }
        if raw.contains('\0') {
            return Err(ExtractError::Parse {
                reason: "binary payload".to_string(),
            });
        }
        Ok(Self {
            tree: Html::parse_document(raw),
        })
    }

    /// Looks up `<meta property=key>` then `<meta name=key>` and returns the
    /// first trimmed, non-blank `content` value.
    pub fn meta_content(&self, key: &str) -> Option<String> {
        self.attr_of(&format!(r#"meta[property="{key}"]"#), "content")
            .or_else(|| self.attr_of(&format!(r#"meta[name="{key}"]"#), "content"))
    }

    /// Returns the trimmed, non-blank `attr` value of the first element
    /// matching `selector`.
    pub fn attr_of(&self, selector: &str, attr: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        let element = self.tree.select(&selector).next()?;
        element
            .value()
            .attr(attr)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
    }

    /// Returns the trimmed, non-blank text content of the first element
    /// matching `selector`.
    pub fn text_of(&self, selector: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        let element = self.tree.select(&selector).next()?;
        let text = element.text().collect::<String>();
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    }
}
