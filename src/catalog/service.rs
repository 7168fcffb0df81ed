//! # Edition Service
//!
//! List, create, update and delete over a [`EditionStore`]. Each call
//! reloads the whole collection; writes persist the whole collection.
//! Nothing serializes concurrent writers, so a write can overwrite another
//! that finished between its load and its save.

use serde_json::{Map, Value};
use tracing::{debug, info};

use super::errors::{CatalogError, CatalogResult};
use crate::model::{next_id, Edition, EditionId};
use crate::query::{self, EditionPage, ListParams};
use crate::store::EditionStore;
use crate::validation::{is_blank, parse_issue_number, parse_tags, parse_text, validate_edition};

/// Resource operations on the edition collection
#[derive(Debug)]
pub struct EditionService<S: EditionStore> {
    store: S,
}

impl<S: EditionStore> EditionService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Filter, sort and paginate the current collection
    pub fn list(&self, params: &ListParams) -> CatalogResult<EditionPage> {
        let editions = self.store.load()?;
        debug!(
            q = params.q.as_deref(),
            tag = params.tag.as_deref(),
            sort_by = params.sort_by.as_str(),
            page = params.page,
            limit = params.limit,
            "listing editions"
        );
        Ok(query::query(editions, params))
    }

    /// Validate a full payload and append it under the next id
    pub fn create(&self, payload: &Map<String, Value>) -> CatalogResult<Edition> {
        let errors = validate_edition(payload, false);
        if !errors.is_empty() {
            return Err(CatalogError::Validation(errors));
        }

        let mut editions = self.store.load()?;
        let id = next_id(&editions).ok_or(CatalogError::IdsExhausted(EditionId::MAX))?;
        let edition = Edition {
            id,
            title: required_text(payload, "title")?,
            issue_number: payload
                .get("issueNumber")
                .and_then(parse_issue_number)
                .ok_or_else(|| CatalogError::validation("issueNumber must be a number"))?,
            cover_image_url: required_text(payload, "coverImageUrl")?,
            publish_date: required_text(payload, "publishDate")?,
            summary: required_text(payload, "summary")?,
            tags: payload.get("tags").and_then(parse_tags).unwrap_or_default(),
        };

        editions.push(edition.clone());
        self.store.save(&editions)?;

        info!(id = edition.id, title = %edition.title, "created edition");
        Ok(edition)
    }

    /// Merge a partial payload over an existing edition.
    ///
    /// Only supplied fields change; `id` is never taken from the payload.
    pub fn update(&self, id: EditionId, payload: &Map<String, Value>) -> CatalogResult<Edition> {
        let errors = validate_edition(payload, true);
        if !errors.is_empty() {
            return Err(CatalogError::Validation(errors));
        }

        let mut editions = self.store.load()?;
        let current = editions
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(CatalogError::NotFound)?;

        merge_payload(current, payload);
        let updated = current.clone();
        self.store.save(&editions)?;

        info!(id, "updated edition");
        Ok(updated)
    }

    /// Remove an edition by id
    pub fn delete(&self, id: EditionId) -> CatalogResult<()> {
        let mut editions = self.store.load()?;
        let before = editions.len();

        editions.retain(|e| e.id != id);
        if editions.len() == before {
            return Err(CatalogError::NotFound);
        }

        self.store.save(&editions)?;
        info!(id, "deleted edition");
        Ok(())
    }
}

fn required_text(payload: &Map<String, Value>, field: &str) -> CatalogResult<String> {
    payload
        .get(field)
        .and_then(parse_text)
        .ok_or_else(|| CatalogError::validation(format!("{} is required", field)))
}

/// Shallow merge: a field is applied when supplied (not null, not `""`)
/// and convertible.
fn merge_payload(edition: &mut Edition, payload: &Map<String, Value>) {
    let supplied = |field: &str| payload.get(field).filter(|v| !is_blank(v));

    if let Some(title) = supplied("title").and_then(parse_text) {
        edition.title = title;
    }
    if let Some(issue_number) = supplied("issueNumber").and_then(parse_issue_number) {
        edition.issue_number = issue_number;
    }
    if let Some(url) = supplied("coverImageUrl").and_then(parse_text) {
        edition.cover_image_url = url;
    }
    if let Some(date) = supplied("publishDate").and_then(parse_text) {
        edition.publish_date = date;
    }
    if let Some(summary) = supplied("summary").and_then(parse_text) {
        edition.summary = summary;
    }
    if let Some(tags) = supplied("tags").and_then(parse_tags) {
        edition.tags = tags;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{seed_editions, SEED_COUNT};
    use crate::store::MemoryEditionStore;
    use serde_json::json;

    fn service() -> EditionService<MemoryEditionStore> {
        EditionService::new(MemoryEditionStore::new())
    }

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn new_edition() -> Map<String, Value> {
        payload(json!({
            "title": "DTU Times — Monsoon 2025",
            "issueNumber": "44",
            "coverImageUrl": "https://example.com/monsoon.jpg",
            "publishDate": "2025-08-01",
            "summary": "Rain, resilience, and research."
        }))
    }

    #[test]
    fn test_create_assigns_next_id_and_coerces() {
        let service = service();
        let created = service.create(&new_edition()).unwrap();

        assert_eq!(created.id, 11);
        assert_eq!(created.issue_number.as_u64(), Some(44));
        assert!(created.tags.is_empty());
        assert_eq!(service.store().load().unwrap().len(), SEED_COUNT + 1);
    }

    #[test]
    fn test_create_into_empty_store_starts_at_one() {
        let service = EditionService::new(MemoryEditionStore::with_editions(vec![]));
        assert_eq!(service.create(&new_edition()).unwrap().id, 1);
    }

    #[test]
    fn test_create_after_gap_uses_max_plus_one() {
        let mut editions = seed_editions();
        editions.retain(|e| e.id != 3);
        let service = EditionService::new(MemoryEditionStore::with_editions(editions));

        assert_eq!(service.create(&new_edition()).unwrap().id, 11);
    }

    #[test]
    fn test_create_fails_when_ids_are_exhausted() {
        let mut editions = seed_editions();
        editions[0].id = EditionId::MAX;
        let service = EditionService::new(MemoryEditionStore::with_editions(editions));

        let err = service.create(&new_edition()).unwrap_err();
        assert!(matches!(err, CatalogError::IdsExhausted(_)));
        assert_eq!(service.store().load().unwrap().len(), SEED_COUNT);
    }

    #[test]
    fn test_create_rejects_without_mutation() {
        let service = service();
        let mut p = new_edition();
        p.remove("summary");

        let err = service.create(&p).unwrap_err();
        match err {
            CatalogError::Validation(errors) => assert_eq!(errors, vec!["summary is required"]),
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(service.store().load().unwrap().len(), SEED_COUNT);
    }

    #[test]
    fn test_update_merges_supplied_fields() {
        let service = service();
        let updated = service
            .update(
                2,
                &payload(json!({
                    "summary": "Revised",
                    "issueNumber": "430",
                    "id": 99,
                    "tags": null
                })),
            )
            .unwrap();

        assert_eq!(updated.id, 2);
        assert_eq!(updated.summary, "Revised");
        assert_eq!(updated.issue_number.as_u64(), Some(430));
        assert_eq!(updated.title, "DTU Times — Summer 2025");
        assert_eq!(updated.tags.len(), 3);

        let stored = service.store().load().unwrap();
        assert_eq!(stored.iter().find(|e| e.id == 2), Some(&updated));
    }

    #[test]
    fn test_update_ignores_blank_fields() {
        let service = service();
        let updated = service
            .update(1, &payload(json!({"title": "", "tags": ["x"]})))
            .unwrap();

        assert!(!updated.title.is_empty());
        assert_eq!(updated.tags, vec!["x"]);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let service = service();
        let before = service.store().load().unwrap();

        let err = service.update(999, &payload(json!({"title": "x"}))).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound));
        assert_eq!(service.store().load().unwrap(), before);
    }

    #[test]
    fn test_update_validates_before_lookup() {
        let service = service();
        let err = service
            .update(999, &payload(json!({"publishDate": "soon"})))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn test_delete_twice() {
        let service = service();
        service.delete(4).unwrap();
        assert_eq!(service.store().load().unwrap().len(), SEED_COUNT - 1);

        assert!(matches!(service.delete(4), Err(CatalogError::NotFound)));
        assert_eq!(service.store().load().unwrap().len(), SEED_COUNT - 1);
    }

    #[test]
    fn test_created_edition_is_searchable() {
        let service = service();
        let created = service.create(&new_edition()).unwrap();

        let params = ListParams {
            q: Some("monsoon".to_string()),
            ..Default::default()
        };
        let page = service.list(&params).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].id, created.id);
    }
}
