//! Edition payload validator
//!
//! Create payloads must carry every required field. Update payloads are
//! partial and skip the presence check; format rules apply in both modes
//! to every field that is supplied (not null, not empty).

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::coerce::{is_blank, parse_issue_number, parse_tags, parse_text};

/// Fields a create payload must supply, in reporting order
pub const REQUIRED_FIELDS: [&str; 5] = [
    "title",
    "issueNumber",
    "coverImageUrl",
    "publishDate",
    "summary",
];

/// Fields stored as plain text
pub const TEXT_FIELDS: [&str; 3] = ["title", "coverImageUrl", "summary"];

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("publish date pattern compiles")
    })
}

/// True if `value` has the `YYYY-MM-DD` shape
pub fn is_publish_date(value: &str) -> bool {
    date_pattern().is_match(value)
}

/// Validate a submitted payload.
///
/// Returns one message per problem; an empty vector means the payload is
/// acceptable. `partial` selects update mode.
pub fn validate_edition(payload: &Map<String, Value>, partial: bool) -> Vec<String> {
    let mut errors = Vec::new();

    if !partial {
        for field in REQUIRED_FIELDS {
            if payload.get(field).map_or(true, is_blank) {
                errors.push(format!("{} is required", field));
            }
        }
    }

    let supplied = |field: &str| payload.get(field).filter(|v| !is_blank(v));

    for field in TEXT_FIELDS {
        if let Some(value) = supplied(field) {
            if parse_text(value).is_none() {
                errors.push(format!("{} must be a string", field));
            }
        }
    }

    if let Some(value) = supplied("issueNumber") {
        if parse_issue_number(value).is_none() {
            errors.push("issueNumber must be a number".to_string());
        }
    }

    if let Some(value) = supplied("publishDate") {
        if !value.as_str().is_some_and(is_publish_date) {
            errors.push("publishDate must be YYYY-MM-DD format".to_string());
        }
    }

    if let Some(value) = supplied("tags") {
        if parse_tags(value).is_none() {
            errors.push("tags must be an array of strings".to_string());
        }
    }

    errors
}
