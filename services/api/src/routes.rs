//! API service routes

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    middleware,
    response::IntoResponse,
    routing::get,
};

use crate::{
    error::{ApiError, ApiResult},
    middleware::{allow_headers_header, allow_methods_header, cors_layer, log_requests},
    models::UserPayload,
    state::AppState,
};

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/users", get(get_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .fallback(not_found)
        .layer(middleware::from_fn(log_requests))
        .layer(cors_layer())
        .layer(allow_methods_header())
        .layer(allow_headers_header())
        .with_state(state)
}

/// Path identifiers must be plain digit strings that fit in a `u64`
fn parse_user_id(raw: &str) -> ApiResult<u64> {
    let invalid = || ApiError::BadRequest(format!("Invalid user ID: {}", raw));
    // u64::from_str also takes a leading '+'
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse().map_err(|_| invalid())
}

/// Unwrap a JSON body, reporting any rejection as a client error
fn json_body(payload: Result<Json<UserPayload>, JsonRejection>) -> ApiResult<UserPayload> {
    payload
        .map(|Json(payload)| payload)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Health status: running")
}

/// Get all users
pub async fn get_users(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let users = state.user_repository.list().await?;
    Ok(Json(users))
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_user_id(&id)?;
    let user = state.user_repository.get(id).await?;
    Ok(Json(user))
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let payload = json_body(payload)?;
    let user = state.user_repository.create(payload).await?;

    let location = format!("/users/{}", user.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(user)))
}

/// Replace a user by ID
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_user_id(&id)?;
    let payload = json_body(payload)?;
    let user = state.user_repository.update(id, payload).await?;
    Ok(Json(user))
}

/// Delete a user by ID
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_user_id(&id)?;
    state.user_repository.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for unknown routes
async fn not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("12").unwrap(), 12);
        assert_eq!(parse_user_id("005").unwrap(), 5);
        assert!(matches!(parse_user_id("+5"), Err(ApiError::BadRequest(_))));
        assert!(matches!(parse_user_id(""), Err(ApiError::BadRequest(_))));
        assert!(matches!(
            parse_user_id("99999999999999999999"),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(parse_user_id("-1"), Err(ApiError::BadRequest(_))));
        assert!(matches!(parse_user_id("abc"), Err(ApiError::BadRequest(_))));
    }
}
