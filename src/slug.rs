use rand::{distributions::Alphanumeric, Rng};

pub const MIN_LEN: usize = 3;
pub const MAX_LEN: usize = 60;

/// True iff `s` matches `^[A-Za-z0-9_-]{3,60}$`. Case-sensitive; the caller
/// is responsible for any trimming before validation.
pub fn valid_slug(s: &str) -> bool {
    if s.len() < MIN_LEN || s.len() > MAX_LEN {
        return false;
    }
    s.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Derive a slug candidate from free text such as a page title: lowercase,
/// collapse runs of other characters into single dashes, cap at the length
/// limit. Returns `None` when the input can't produce at least 3 usable
/// characters.
pub fn derive_slug(source: &str) -> Option<String> {
    let mut out = String::with_capacity(source.len().min(MAX_LEN));
    let mut pending_dash = false;
    for c in source.chars() {
        if out.len() == MAX_LEN {
            break;
        }
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_dash && !out.is_empty() && out.len() < MAX_LEN {
                out.push('-');
            }
            pending_dash = false;
            if out.len() < MAX_LEN {
                out.push(c.to_ascii_lowercase());
            }
        } else {
            pending_dash = true;
        }
    }
    if out.len() < MIN_LEN {
        None
    } else {
        Some(out)
    }
}

/// Salt a taken slug with a short random suffix for another attempt. Expects
/// an already-valid slug; the result stays within the length limit.
pub fn with_suffix(slug: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(4)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();
    let keep = slug.len().min(MAX_LEN - 5);
    format!("{}-{}", &slug[..keep], suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_slugs() {
        assert!(valid_slug("my-shop"));
        assert!(valid_slug("Shop_01"));
        assert!(valid_slug("abc"));
        assert!(valid_slug(&"a".repeat(60)));
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        assert!(!valid_slug(""));
        assert!(!valid_slug("ab"));
        assert!(!valid_slug(&"a".repeat(61)));
    }

    #[test]
    fn rejects_other_characters() {
        assert!(!valid_slug("my shop"));
        assert!(!valid_slug("my.shop"));
        assert!(!valid_slug(" myshop"));
        assert!(!valid_slug("café"));
        assert!(!valid_slug("a/b/c"));
    }

    #[test]
    fn derives_from_titles() {
        assert_eq!(
            derive_slug("John's Fashion Store").as_deref(),
            Some("john-s-fashion-store")
        );
        assert_eq!(derive_slug("  Side__Hustle  ").as_deref(), Some("side__hustle"));
    }

    #[test]
    fn derive_rejects_degenerate_input() {
        assert_eq!(derive_slug(""), None);
        assert_eq!(derive_slug("!!"), None);
        assert_eq!(derive_slug("ab"), None);
    }

    #[test]
    fn derive_caps_length() {
        let long = "word ".repeat(40);
        let slug = derive_slug(&long).unwrap();
        assert!(slug.len() <= MAX_LEN);
        assert!(valid_slug(&slug));
    }

    #[test]
    fn suffixed_candidates_stay_valid() {
        let base = derive_slug(&"x".repeat(80)).unwrap();
        let salted = with_suffix(&base);
        assert!(valid_slug(&salted));
        assert_ne!(salted, base);
    }
}
