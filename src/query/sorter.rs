//! Edition sorting
//!
//! Ties keep collection order in both directions: the key comparison is
//! reversed for `desc`, the position tie-break never is.

use std::cmp::Ordering;

use chrono::NaiveDate;

use super::params::{SortField, SortOrder};
use crate::model::Edition;

/// Sorts editions by a single field
pub struct EditionSorter;

impl EditionSorter {
    pub fn sort(editions: &mut Vec<Edition>, field: SortField, order: SortOrder) {
        let mut indexed: Vec<(usize, Edition)> = editions.drain(..).enumerate().collect();

        indexed.sort_by(|(a_pos, a), (b_pos, b)| {
            let ordering = Self::compare(a, b, field);
            let ordering = match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            };
            ordering.then(a_pos.cmp(b_pos))
        });

        editions.extend(indexed.into_iter().map(|(_, e)| e));
    }

    fn compare(a: &Edition, b: &Edition, field: SortField) -> Ordering {
        match field {
            SortField::IssueNumber => a.issue_number_f64().total_cmp(&b.issue_number_f64()),
            // Dates that do not parse sort before every real date
            SortField::PublishDate => {
                parse_date(&a.publish_date).cmp(&parse_date(&b.publish_date))
            }
            SortField::Title => a.title.cmp(&b.title),
        }
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
