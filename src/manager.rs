use thiserror::Error;

use crate::model::LinkPageConfig;
use crate::slug::valid_slug;
use crate::store::{KvStore, StoreError};
use crate::util::share_url;

/// Per-slug records live under `linkpage:<slug>`.
pub const RECORD_PREFIX: &str = "linkpage:";
/// Ordered list of every slug ever saved.
pub const INDEX_KEY: &str = "linkpage:index";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("invalid slug: use 3-60 letters, digits, '-' or '_'")]
    InvalidSlug,
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

/// Validates slugs, builds share URLs, and persists link-page records plus
/// the slug index through an injected [`KvStore`].
///
/// Single-writer by design: two sessions racing on the index resolve as
/// last-writer-wins.
pub struct LinkPageManager<S> {
    store: S,
    origin: String,
}

impl<S: KvStore> LinkPageManager<S> {
    pub fn new(store: S, origin: impl Into<String>) -> Self {
        Self {
            store,
            origin: origin.into(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn record_key(slug: &str) -> String {
        format!("{RECORD_PREFIX}{slug}")
    }

    /// Validate a candidate slug and return its share URL. Touches nothing;
    /// safe to call on every keystroke.
    pub fn generate_preview(&self, slug: &str) -> Result<String, SaveError> {
        if !valid_slug(slug) {
            return Err(SaveError::InvalidSlug);
        }
        Ok(share_url(&self.origin, slug))
    }

    /// Persist `config` under its slug and make sure the slug is indexed.
    /// Returns the share URL. An invalid slug fails before any storage
    /// mutation; storage faults never escape as panics or raw errors.
    pub fn save_config(&mut self, config: &LinkPageConfig) -> Result<String, SaveError> {
        if !valid_slug(&config.slug) {
            return Err(SaveError::InvalidSlug);
        }
        let key = Self::record_key(&config.slug);
        let raw = serde_json::to_string(config).map_err(StoreError::from)?;

        // Keep the previous value around so a failed index update can be
        // undone; the index must never miss a freshly created slug.
        let prior = self.store.get(&key)?;
        self.store.set(&key, &raw)?;

        if let Err(e) = self.index_insert(&config.slug) {
            let undo = match &prior {
                Some(old) => self.store.set(&key, old),
                None => self.store.remove(&key),
            };
            if let Err(undo_err) = undo {
                tracing::warn!(slug = %config.slug, "rollback after index failure also failed: {undo_err}");
            }
            return Err(e.into());
        }

        Ok(share_url(&self.origin, &config.slug))
    }

    /// The stored record for `slug`. Absent, unreadable, and corrupt records
    /// all read as `None`.
    pub fn load_config(&self, slug: &str) -> Option<LinkPageConfig> {
        let raw = match self.store.get(&Self::record_key(slug)) {
            Ok(v) => v?,
            Err(e) => {
                tracing::warn!(slug, "record read failed: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                tracing::warn!(slug, "corrupt record treated as absent: {e}");
                None
            }
        }
    }

    /// Every known slug, in the order first saved. A missing or corrupt
    /// index reads as empty.
    pub fn list_slugs(&self) -> Vec<String> {
        match self.read_index() {
            Ok(slugs) => slugs,
            Err(e) => {
                tracing::warn!("unreadable slug index: {e}");
                Vec::new()
            }
        }
    }

    fn index_insert(&mut self, slug: &str) -> Result<(), StoreError> {
        let mut index = self.read_index()?;
        if !index.iter().any(|s| s == slug) {
            index.push(slug.to_string());
            let raw = serde_json::to_string(&index)?;
            self.store.set(INDEX_KEY, &raw)?;
        }
        Ok(())
    }

    fn read_index(&self) -> Result<Vec<String>, StoreError> {
        match self.store.get(INDEX_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }
}
