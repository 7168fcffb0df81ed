//! # List Parameter Parser
//!
//! Turns the raw `GET /editions` query string into [`ListParams`]. Parsing
//! never fails: every malformed value degrades to its default.

use std::collections::HashMap;

/// Page size used when `limit` is absent or unusable
pub const DEFAULT_LIMIT: usize = 9;

/// Largest page size a client can ask for
pub const MAX_LIMIT: usize = 50;

/// Field the list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    PublishDate,
    IssueNumber,
    Title,
}

impl SortField {
    /// Parse a `sortBy` value; unknown names fall back to `publishDate`
    pub fn parse(value: &str) -> Self {
        match value {
            "issueNumber" => SortField::IssueNumber,
            "title" => SortField::Title,
            _ => SortField::PublishDate,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::PublishDate => "publishDate",
            SortField::IssueNumber => "issueNumber",
            SortField::Title => "title",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Only the exact value `asc` ascends
    pub fn parse(value: &str) -> Self {
        if value == "asc" {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }
}

/// Parsed list parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// Search text, already trimmed and lowercased; `None` when blank
    pub q: Option<String>,

    /// Exact tag to keep (case-insensitive)
    pub tag: Option<String>,

    pub sort_by: SortField,
    pub sort_order: SortOrder,

    /// 1-based page number
    pub page: usize,

    /// Page size in `[1, MAX_LIMIT]`
    pub limit: usize,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            q: None,
            tag: None,
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListParams {
    /// Parse list parameters from a query map
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        let mut params = ListParams::default();

        if let Some(q) = query.get("q") {
            let q = q.trim().to_lowercase();
            if !q.is_empty() {
                params.q = Some(q);
            }
        }

        if let Some(tag) = query.get("tag") {
            if !tag.is_empty() {
                params.tag = Some(tag.clone());
            }
        }

        if let Some(sort_by) = query.get("sortBy") {
            params.sort_by = SortField::parse(sort_by);
        }

        if let Some(sort_order) = query.get("sortOrder") {
            params.sort_order = SortOrder::parse(sort_order);
        }

        params.page = parse_page(query.get("page").map(String::as_str));
        params.limit = parse_limit(query.get("limit").map(String::as_str));

        params
    }
}

/// Zero and non-numeric values count as "not given".
fn parse_nonzero(value: Option<&str>) -> Option<i64> {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|n| *n != 0)
}

fn parse_page(value: Option<&str>) -> usize {
    match parse_nonzero(value) {
        Some(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
        _ => 1,
    }
}

fn parse_limit(value: Option<&str>) -> usize {
    match parse_nonzero(value) {
        Some(n) => n.clamp(1, MAX_LIMIT as i64) as usize,
        None => DEFAULT_LIMIT,
    }
}
