//! Search and tag filters

use crate::model::Edition;

/// True if `needle` (already lowercased) occurs in the title, the summary,
/// or any tag, ignoring case.
pub fn matches_search(edition: &Edition, needle: &str) -> bool {
    edition.title.to_lowercase().contains(needle)
        || edition.summary.to_lowercase().contains(needle)
        || edition
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Keep only editions matching the search text and tag, preserving order.
pub fn apply_filters(editions: &mut Vec<Edition>, q: Option<&str>, tag: Option<&str>) {
    if let Some(needle) = q {
        editions.retain(|e| matches_search(e, needle));
    }
    if let Some(tag) = tag {
        editions.retain(|e| e.has_tag(tag));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed_editions;

    #[test]
    fn test_search_matches_title_summary_and_tags() {
        let seed = seed_editions();
        let by_id = |id: u64| seed.iter().find(|e| e.id == id).unwrap();

        assert!(matches_search(by_id(1), "spring"));
        assert!(matches_search(by_id(2), "internship diaries"));
        assert!(matches_search(by_id(9), "robot"));
        assert!(!matches_search(by_id(9), "festival"));
    }

    #[test]
    fn test_tag_filter_is_exact() {
        let mut editions = seed_editions();
        apply_filters(&mut editions, None, Some("ai"));
        assert_eq!(editions.len(), 1);
        assert_eq!(editions[0].id, 9);

        let mut editions = seed_editions();
        apply_filters(&mut editions, None, Some("innov"));
        assert!(editions.is_empty());
    }

    #[test]
    fn test_search_and_tag_combine() {
        let mut editions = seed_editions();
        apply_filters(&mut editions, Some("alumni"), Some("research"));
        let ids: Vec<_> = editions.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1]);
    }
}
