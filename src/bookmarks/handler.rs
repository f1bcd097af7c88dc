//! HTTP handlers for the bookmark API.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::{Bookmarks, CreateBookmark, UpdateBookmark};
use crate::handler::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn success<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

fn created<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

fn no_content() -> Response {
    (StatusCode::NO_CONTENT, ()).into_response()
}

fn bad_request(msg: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
        .into_response()
}

fn internal_error(msg: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
        .into_response()
}

pub async fn list_bookmarks(State(state): State<AppState>) -> Response {
    let store = Bookmarks::new(state.db.connection());

    match store.list().await {
        Ok(bookmarks) => success(bookmarks),
        Err(e) => {
            tracing::error!("Failed to list bookmarks: {}", e);
            internal_error("Failed to list bookmarks")
        }
    }
}

pub async fn create_bookmark(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookmark>, JsonRejection>,
) -> Response {
    let Json(input) = match payload {
        Ok(json) => json,
        Err(rejection) => return bad_request(&rejection.body_text()),
    };

    let store = Bookmarks::new(state.db.connection());

    match store.create(input).await {
        Ok(bookmark) => created(bookmark),
        Err(e) => {
            tracing::error!("Failed to create bookmark: {}", e);
            bad_request("Failed to create bookmark")
        }
    }
}

pub async fn update_bookmark(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateBookmark>, JsonRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(path) => path,
        Err(rejection) => return bad_request(&rejection.body_text()),
    };
    let Json(input) = match payload {
        Ok(json) => json,
        Err(rejection) => return bad_request(&rejection.body_text()),
    };

    let store = Bookmarks::new(state.db.connection());

    // A missing id is passed through as a 200 with a null body, not a 404.
    match store.update(id, input).await {
        Ok(result) => success(result),
        Err(e) => {
            tracing::error!("Failed to update bookmark {}: {}", id, e);
            bad_request("Failed to update bookmark")
        }
    }
}

pub async fn delete_bookmark(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(path) => path,
        Err(rejection) => return bad_request(&rejection.body_text()),
    };

    let store = Bookmarks::new(state.db.connection());

    // 204 whether or not the record existed.
    match store.delete(id).await {
        Ok(_) => no_content(),
        Err(e) => {
            tracing::error!("Failed to delete bookmark {}: {}", id, e);
            bad_request("Failed to delete bookmark")
        }
    }
}
