//! Link-page configuration for a business profile: validate a user-chosen
//! slug, build the public share URL, and persist per-slug records plus a
//! global slug index through pluggable key-value storage.

pub mod manager;
pub mod model;
pub mod settings;
pub mod slug;
pub mod store;
pub mod util;

pub use manager::{LinkPageManager, SaveError};
pub use model::LinkPageConfig;
pub use store::{FileStore, KvStore, MemoryStore, StoreError};
