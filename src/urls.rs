// =============================================================================
// urls.rs — THE LINK LAUNDERER
// =============================================================================
//
// Every href the site gives us comes out of here either as a fully
// qualified absolute URL or as an empty string. Never a bare relative
// path — the frontend has been burned by those before.
//
// The site's markup mixes absolute links, root-relative links, bare
// relative links and the occasional protocol-relative CDN reference, so
// this function has to take all comers and can never be allowed to throw.
// =============================================================================

use url::Url;

/// Resolve an optional href against the given base origin.
///
/// Rules, in order:
/// - missing or empty input → `""`
/// - `data:` URIs → `""` (embedded blobs are not documents)
/// - `//host/path` → `https:` prefixed, returned as-is
/// - anything without a scheme or leading `/` is forced root-relative
///   before resolution
/// - any resolution failure → `""`
pub fn absolutize(base: &str, href: Option<&str>) -> String {
    let Some(href) = href else {
        return String::new();
    };
    let trimmed = href.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    // Ignore data URLs
    if trimmed.starts_with("data:") {
        return String::new();
    }
    // Protocol-relative URLs
    if trimmed.starts_with("//") {
        return format!("https:{}", trimmed);
    }

    // Ensure relative paths resolve to site root
    let normalized = if has_scheme(trimmed) || trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    };

    match Url::parse(base).and_then(|b| b.join(&normalized)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => String::new(),
    }
}

/// `letters://` counts as a scheme; anything else does not.
fn has_scheme(href: &str) -> bool {
    match href.split_once("://") {
        Some((scheme, _)) => {
            !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.parliament.gh";

    #[test]
    fn test_missing_and_empty_hrefs_become_empty() {
        assert_eq!(absolutize(BASE, None), "");
        assert_eq!(absolutize(BASE, Some("")), "");
        assert_eq!(absolutize(BASE, Some("   ")), "");
    }

    #[test]
    fn test_data_uris_are_rejected() {
        assert_eq!(absolutize(BASE, Some("data:text/plain,x")), "");
    }

    #[test]
    fn test_protocol_relative_gets_https() {
        assert_eq!(absolutize(BASE, Some("//cdn.x/y")), "https://cdn.x/y");
    }

    #[test]
    fn test_root_relative_resolves_against_base() {
        assert_eq!(
            absolutize(BASE, Some("/docs/a.pdf")),
            "https://www.parliament.gh/docs/a.pdf"
        );
    }

    #[test]
    fn test_bare_relative_is_forced_to_site_root() {
        assert_eq!(
            absolutize(BASE, Some("epanel/docs/agenda.pdf")),
            "https://www.parliament.gh/epanel/docs/agenda.pdf"
        );
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        assert_eq!(
            absolutize(BASE, Some("https://other.example/x.pdf")),
            "https://other.example/x.pdf"
        );
    }

    #[test]
    fn test_query_strings_survive() {
        assert_eq!(
            absolutize(BASE, Some("/docs?type=AG&page=2")),
            "https://www.parliament.gh/docs?type=AG&page=2"
        );
    }

    #[test]
    fn test_unresolvable_base_becomes_empty() {
        assert_eq!(absolutize("not a url", Some("/docs/a.pdf")), "");
    }
}
