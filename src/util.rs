use url::Url;

/// True when `u` is an http(s) URL with a host, i.e. something that can serve
/// as the public origin in front of `/u/<slug>`.
pub fn valid_origin(u: &str) -> bool {
    if let Ok(parsed) = Url::parse(u) {
        match parsed.scheme() {
            "http" | "https" => {}
            _ => return false,
        }
        return parsed.host().is_some();
    }
    false
}

/// Public share URL for a slug. The slug is percent-encoded even though
/// validated slugs never need it; callers may pass unvalidated input here.
pub fn share_url(origin: &str, slug: &str) -> String {
    format!("{}/u/{}", origin, urlencoding::encode(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_origin() {
        assert!(valid_origin("https://example.com"));
        assert!(valid_origin("http://localhost:3000"));
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert!(!valid_origin("javascript:alert(1)"));
        assert!(!valid_origin("file:///tmp"));
    }

    #[test]
    fn rejects_empty() {
        assert!(!valid_origin(""));
    }

    #[test]
    fn builds_share_url() {
        assert_eq!(
            share_url("https://example.com", "my-shop"),
            "https://example.com/u/my-shop"
        );
    }

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(share_url("", "a b/c"), "/u/a%20b%2Fc");
    }
}
