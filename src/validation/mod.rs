//! # Payload Validation
//!
//! Field-presence and format rules for submitted editions, plus the typed
//! conversions applied once a payload has passed.

pub mod coerce;
pub mod validator;

pub use coerce::{is_blank, parse_issue_number, parse_tags, parse_text};
pub use validator::{is_publish_date, validate_edition, REQUIRED_FIELDS};
