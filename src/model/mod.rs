//! Catalog data model: the edition record, the persisted document, and the
//! seed set used to initialize an empty store.

pub mod edition;
pub mod seed;

pub use edition::{next_id, Edition, EditionDocument, EditionId};
pub use seed::{seed_editions, SEED_COUNT};
