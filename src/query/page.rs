//! Pagination and the list response body

use serde::Serialize;

use crate::model::Edition;

/// One page of editions plus pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditionPage {
    pub data: Vec<Edition>,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl EditionPage {
    /// Slice `page` out of the filtered, sorted rows.
    ///
    /// A page past the end is empty, never an error.
    pub fn paginate(rows: Vec<Edition>, page: usize, limit: usize) -> Self {
        let total = rows.len();
        let total_pages = total.div_ceil(limit).max(1);
        let start = page.saturating_sub(1).saturating_mul(limit);

        let data = rows.into_iter().skip(start).take(limit).collect();

        Self {
            data,
            page,
            limit,
            total,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed_editions;

    #[test]
    fn test_first_page() {
        let page = EditionPage::paginate(seed_editions(), 1, 4);
        assert_eq!(page.data.len(), 4);
        assert_eq!(page.total, 10);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_last_partial_page() {
        let page = EditionPage::paginate(seed_editions(), 3, 4);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].id, 9);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = EditionPage::paginate(seed_editions(), 7, 4);
        assert!(page.data.is_empty());
        assert_eq!(page.page, 7);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let page = EditionPage::paginate(Vec::new(), 1, 9);
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_wire_format() {
        let page = EditionPage::paginate(Vec::new(), 1, 9);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalPages"], 1);
        assert!(json["data"].as_array().unwrap().is_empty());
    }
}
