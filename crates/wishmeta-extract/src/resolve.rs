use reqwest::Url;

/// Absolutizes an extracted image reference against the page's own URL.
///
/// Candidates that already carry an `http`/`https` scheme pass through
/// unchanged; anything else (scheme-relative, absolute-path, relative-path)
/// is resolved per standard URL reference rules. Returns `None` when the
/// base or the reference is malformed — a bad image is dropped, never a
/// pipeline failure.
#[must_use]
pub fn resolve_image_url(candidate: &str, base_url: &str) -> Option<String> {
    if candidate.starts_with("http://") || candidate.starts_with("https://") {
        return Some(candidate.to_owned());
    }
    let base = Url::parse(base_url).ok()?;
    base.join(candidate).ok().map(|u| u.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_candidate_passes_through() {
        assert_eq!(
            resolve_image_url("https://cdn.example.com/a.jpg", "https://example.com/p").as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
    }

    #[test]
    fn absolute_path_resolves_against_origin() {
        assert_eq!(
            resolve_image_url("/img/a.jpg", "https://example.com/product").as_deref(),
            Some("https://example.com/img/a.jpg")
        );
    }

    #[test]
    fn relative_path_resolves_against_page_directory() {
        assert_eq!(
            resolve_image_url("a.jpg", "https://example.com/shop/product").as_deref(),
            Some("https://example.com/shop/a.jpg")
        );
    }

    #[test]
    fn scheme_relative_inherits_page_scheme() {
        assert_eq!(
            resolve_image_url("//cdn.example.com/a.jpg", "https://example.com/p").as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
    }

    #[test]
    fn malformed_base_drops_the_image() {
        assert!(resolve_image_url("/img/a.jpg", "not a url").is_none());
    }
}
