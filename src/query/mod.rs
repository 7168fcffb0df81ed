//! # Query Pipeline
//!
//! Filter, sort, then paginate an in-memory collection. A linear scan with
//! no indexes; a pure function of the collection and the parameters.

pub mod filter;
pub mod page;
pub mod params;
pub mod sorter;

pub use page::EditionPage;
pub use params::{ListParams, SortField, SortOrder, DEFAULT_LIMIT, MAX_LIMIT};
pub use sorter::EditionSorter;

use crate::model::Edition;

/// Run the full pipeline over `editions`
pub fn query(mut editions: Vec<Edition>, params: &ListParams) -> EditionPage {
    filter::apply_filters(&mut editions, params.q.as_deref(), params.tag.as_deref());
    EditionSorter::sort(&mut editions, params.sort_by, params.sort_order);
    EditionPage::paginate(editions, params.page, params.limit)
}
