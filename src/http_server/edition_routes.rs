//! Edition HTTP Routes
//!
//! `GET/POST /editions`, `PUT/DELETE /editions/:id`. Handlers only extract
//! request parts and delegate to [`EditionService`].

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde_json::{Map, Value};

use super::health_routes::route_not_found;
use crate::catalog::{CatalogError, CatalogResult, EditionService};
use crate::model::{Edition, EditionId};
use crate::query::{EditionPage, ListParams};
use crate::store::EditionStore;

/// Shared state type
pub type EditionState<S> = Arc<EditionService<S>>;

/// Create edition routes
pub fn edition_routes<S: EditionStore + 'static>(service: EditionState<S>) -> Router {
    Router::new()
        .route(
            "/editions",
            get(list_handler::<S>)
                .post(create_handler::<S>)
                .fallback(route_not_found),
        )
        .route(
            "/editions/:id",
            put(update_handler::<S>)
                .delete(delete_handler::<S>)
                .fallback(route_not_found),
        )
        .with_state(service)
}

/// Request bodies must be JSON objects; an empty body counts as `{}`.
fn parse_body(body: &Bytes) -> CatalogResult<Map<String, Value>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(CatalogError::validation("request body must be a JSON object")),
    }
}

/// Ids that are not positive integers can never match a record.
fn parse_id(raw: &str) -> CatalogResult<EditionId> {
    raw.trim()
        .parse::<EditionId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(CatalogError::NotFound)
}

async fn list_handler<S: EditionStore + 'static>(
    State(service): State<EditionState<S>>,
    Query(query): Query<HashMap<String, String>>,
) -> CatalogResult<Json<EditionPage>> {
    let params = ListParams::from_query(&query);
    Ok(Json(service.list(&params)?))
}

async fn create_handler<S: EditionStore + 'static>(
    State(service): State<EditionState<S>>,
    body: Bytes,
) -> CatalogResult<(StatusCode, Json<Edition>)> {
    let payload = parse_body(&body)?;
    let created = service.create(&payload)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_handler<S: EditionStore + 'static>(
    State(service): State<EditionState<S>>,
    Path(id): Path<String>,
    body: Bytes,
) -> CatalogResult<Json<Edition>> {
    let payload = parse_body(&body)?;
    let id = parse_id(&id)?;
    Ok(Json(service.update(id, &payload)?))
}

async fn delete_handler<S: EditionStore + 'static>(
    State(service): State<EditionState<S>>,
    Path(id): Path<String>,
) -> CatalogResult<StatusCode> {
    let id = parse_id(&id)?;
    service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
