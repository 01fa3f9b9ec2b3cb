use serde::{Deserialize, Serialize};

/// Shown on the public page when no CTA text was configured.
pub const DEFAULT_CTA_TEXT: &str = "Buy Now";

/// One public link-page configuration, keyed by slug.
///
/// The JSON shape uses camelCase keys and omits unset optional fields, so
/// records written by older sessions (or by hand) read back cleanly.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkPageConfig {
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Opaque reference produced by the image-upload control; stored verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_url: Option<String>,
}

impl LinkPageConfig {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..Self::default()
        }
    }

    /// CTA text with the stock fallback applied.
    pub fn cta_text_or_default(&self) -> &str {
        self.cta_text.as_deref().unwrap_or(DEFAULT_CTA_TEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let cfg = LinkPageConfig {
            cta_text: Some("Shop Now".into()),
            cta_url: Some("https://shop.example".into()),
            ..LinkPageConfig::new("my-shop")
        };
        let raw = serde_json::to_string(&cfg).unwrap();
        assert!(raw.contains("\"ctaText\":\"Shop Now\""));
        assert!(raw.contains("\"ctaUrl\":\"https://shop.example\""));
    }

    #[test]
    fn omits_unset_fields() {
        let raw = serde_json::to_string(&LinkPageConfig::new("my-shop")).unwrap();
        assert_eq!(raw, "{\"slug\":\"my-shop\"}");
    }

    #[test]
    fn tolerates_missing_and_unknown_fields() {
        let cfg: LinkPageConfig =
            serde_json::from_str("{\"slug\":\"s1\",\"legacyField\":true}").unwrap();
        assert_eq!(cfg.slug, "s1");
        assert_eq!(cfg.title, None);
    }

    #[test]
    fn cta_text_falls_back_to_default() {
        let mut cfg = LinkPageConfig::new("s1");
        assert_eq!(cfg.cta_text_or_default(), "Buy Now");
        cfg.cta_text = Some("Order".into());
        assert_eq!(cfg.cta_text_or_default(), "Order");
    }
}
