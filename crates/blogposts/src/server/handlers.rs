use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use blogposts_core::pagination::{parse_or_default, DEFAULT_LIMIT, DEFAULT_PAGE};
use blogposts_core::{Post, PostDraft};

use super::envelope::Envelope;
use super::state::AppState;
use crate::prelude::*;

type ApiResult<T> = std::result::Result<Json<Envelope<T>>, ApiError>;

/// Raw list query parameters
///
/// Kept as strings so unusable `page`/`limit` values fall back to the defaults
/// instead of rejecting the request. A repeated key keeps its first value.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListParams {
    pub title: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "title" => &mut params.title,
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

fn parse_id(raw: &str) -> std::result::Result<u64, ApiError> {
    raw.parse::<u64>()
        .map_err(|e| ApiError::BadRequest(f!("invalid post id {raw:?}: {e}")))
}

fn read_draft(
    payload: std::result::Result<Json<PostDraft>, JsonRejection>,
) -> std::result::Result<PostDraft, ApiError> {
    payload
        .map(|Json(draft)| draft)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// `GET /v1/posts?title=&page=&limit=`
pub async fn list_posts(
    State(state): State<AppState>,
    pairs: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Vec<Post>> {
    let Query(pairs) = pairs.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let params = ListParams::from_pairs(pairs);

    let title = params.title.unwrap_or_default();
    let page = parse_or_default(params.page.as_deref(), DEFAULT_PAGE);
    let limit = parse_or_default(params.limit.as_deref(), DEFAULT_LIMIT);

    let posts = state.read().await?.query(&title, page, limit)?;

    Ok(Json(Envelope::data("", posts)))
}

/// `GET /v1/posts/{id}`
pub async fn get_post(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Post> {
    let id = parse_id(&id)?;
    let post = state.read().await?.get(id)?;

    Ok(Json(Envelope::data("", post)))
}

/// `POST /v1/posts`
pub async fn create_post(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PostDraft>, JsonRejection>,
) -> ApiResult<u64> {
    let draft = read_draft(payload)?;
    let id = state.write().await?.insert(draft)?;

    log::info!("added post {id}");

    Ok(Json(Envelope::data("post added", id)))
}

/// `PUT /v1/posts/{id}`
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<PostDraft>, JsonRejection>,
) -> ApiResult<()> {
    let id = parse_id(&id)?;
    let draft = read_draft(payload)?;
    state.write().await?.update(id, draft)?;

    log::info!("updated post {id}");

    Ok(Json(Envelope::message("post updated")))
}

/// `DELETE /v1/posts/{id}`
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let id = parse_id(&id)?;
    state.write().await?.delete(id)?;

    log::info!("deleted post {id}");

    Ok(Json(Envelope::message("post deleted")))
}

/// `GET /v1/healthcheck`
pub async fn heartbeat() -> &'static str {
    "."
}
