//! Campaign and tile persistence for seedscape
//!
//! Campaign metadata and generated tiles are stored as pretty-printed JSON:
//! ```text
//! <data>/campaigns/<name>/meta.json
//! <data>/campaigns/<name>/hexes/<tile id>.json
//! ```
//!
//! ```ignore
//! let store = Store::from_env();
//! let tile = store.get_or_generate_tile("westmarch", "H4", None).await?;
//! ```

pub mod error;
pub mod env;
pub mod campaign;
pub mod storage;

pub use campaign::CampaignMeta;
pub use error::{Error, Result};
pub use storage::Store;
