use super::response::{
    DietResponse, bad_request, created, deleted, not_found, ok_request,
};
use super::state::AppState;
use crate::errors::AppError;
use crate::models::record::{DietRequest, Record};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::Response,
};
use std::sync::Arc;

type Shared = State<Arc<AppState>>;

/// Transport-level id check: the store only ever sees integers.
fn parse_id(raw: &str) -> Result<i64, Response> {
    raw.parse::<i64>()
        .map_err(|e| bad_request("Failed to get id", e))
}

pub async fn post_records(
    State(state): Shared,
    payload: Result<Json<DietRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(e) => return Ok(bad_request("Failed to process", e.body_text())),
    };

    state
        .run(move |store| store.create_batch(&request.data))
        .await?;
    Ok(created())
}

pub async fn get_records(State(state): Shared) -> Result<Response, AppError> {
    let window = state.window_days;
    let data = state.run(move |store| store.read_range(window)).await?;
    Ok(ok_request(DietResponse::new(data)))
}

pub async fn get_record(
    State(state): Shared,
    Path(raw): Path<String>,
) -> Result<Response, AppError> {
    let id = match parse_id(&raw) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    match state.run(move |store| store.read_by_id(id)).await? {
        Some(record) => Ok(ok_request(record)),
        None => Ok(not_found(id)),
    }
}

pub async fn put_record(
    State(state): Shared,
    Path(raw): Path<String>,
    payload: Result<Json<Record>, JsonRejection>,
) -> Result<Response, AppError> {
    let id = match parse_id(&raw) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let record = match payload {
        Ok(Json(record)) => record,
        Err(e) => return Ok(bad_request("Failed to process", e.body_text())),
    };

    if record.id != id {
        return Ok(bad_request(
            "Invalid request",
            format!(
                "Path variable {} and request body ID {} are different",
                id, record.id
            ),
        ));
    }

    match state.run(move |store| store.update_by_id(&record)).await? {
        Some(updated) => Ok(ok_request(updated)),
        None => Ok(not_found(id)),
    }
}

pub async fn delete_record(
    State(state): Shared,
    Path(raw): Path<String>,
) -> Result<Response, AppError> {
    let id = match parse_id(&raw) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    state.run(move |store| store.delete_by_id(id)).await?;
    Ok(deleted())
}
