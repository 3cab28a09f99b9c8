use axum::{
    body::Bytes,
    extract::State,
    http::Method,
    response::{IntoResponse, Response},
    Json,
};
use service::workshop::Workshop;

use crate::errors::ApiError;
use crate::routes::ServerState;

/// `/workshop` entry point: GET reads, POST replaces, anything else is 405.
pub async fn dispatch(State(state): State<ServerState>, method: Method, body: Bytes) -> Response {
    match method {
        Method::GET => get_workshop(&state).await.into_response(),
        Method::POST => replace_workshop(&state, &body).await.into_response(),
        _ => ApiError::MethodNotAllowed.into_response(),
    }
}

/// Current record as JSON.
pub async fn get_workshop(state: &ServerState) -> Json<Workshop> {
    Json(state.workshops.get().await)
}

/// Decode the body as a full record and replace the stored one with it.
/// The body is decoded regardless of the request Content-Type.
pub async fn replace_workshop(state: &ServerState, body: &[u8]) -> Result<Json<Workshop>, ApiError> {
    let candidate = Workshop::from_json(body)?;
    let stored = state.workshops.replace(candidate).await?;
    Ok(Json(stored))
}
