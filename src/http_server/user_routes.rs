//! User HTTP Routes
//!
//! Endpoints for the user collection. Every handler follows the same shape:
//! load the full collection from the store, compute the result or mutation,
//! persist the full collection when mutating, respond with JSON.
//!
//! Path ids and the minAge filter arrive as text and are parsed explicitly
//! into their numeric types; unparsable input fails the request with 400.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult, MessageResponse};
use crate::observability::Logger;
use crate::store::{email_exists, find_by_id, next_id, position_by_id, User, UserStore};

// ==================
// Shared State
// ==================

/// State shared across user handlers
pub struct UserState {
    pub store: UserStore,
}

impl UserState {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Partial update: only fields present in the payload are applied, so an
/// explicit `"age": 0` or empty string still counts as a change.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MinAgeQuery {
    #[serde(rename = "minAge")]
    pub min_age: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedUserResponse {
    pub message: String,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct UpdatedUserResponse {
    pub message: String,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct DeletedUserResponse {
    pub message: String,
    #[serde(rename = "deletedUser")]
    pub deleted_user: User,
}

#[derive(Debug, Serialize)]
pub struct SingleUserResponse {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
}

// ==================
// User Routes
// ==================

/// Create user routes
///
/// Every method router carries the not-found fallback so an unhandled
/// method on a known path yields the same 404 body as an unknown path,
/// not a bare 405.
pub fn user_routes(state: Arc<UserState>) -> Router {
    Router::new()
        .route(
            "/users",
            post(create_user_handler)
                .get(get_user_by_name_handler)
                .fallback(not_found_fallback),
        )
        .route(
            "/users/:id",
            patch(update_user_handler)
                .delete(delete_user_handler)
                .get(get_user_by_id_handler)
                .fallback(not_found_fallback),
        )
        .route("/allUsers", get(list_users_handler).fallback(not_found_fallback))
        .route(
            "/filterUsers",
            get(filter_users_handler).fallback(not_found_fallback),
        )
        .with_state(state)
}

/// Fallback for any route/method combination with no handler
pub async fn not_found_fallback() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse {
            message: "Not Found".to_string(),
        }),
    )
}

// ==================
// Helper Functions
// ==================

/// Parses a path-supplied user id into its numeric type.
fn parse_user_id(raw: &str) -> ApiResult<u64> {
    raw.parse::<u64>().map_err(|_| ApiError::InvalidId(raw.to_string()))
}

// ==================
// Mutation Handlers
// ==================

async fn create_user_handler(
    State(state): State<Arc<UserState>>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<CreatedUserResponse>)> {
    let _guard = state.store.write_guard().await;
    let mut users = state.store.load()?;

    if email_exists(&users, &request.email) {
        return Err(ApiError::DuplicateEmail);
    }

    let user = User {
        id: next_id(&users),
        name: request.name,
        email: request.email,
        age: request.age,
    };
    users.push(user.clone());
    state.store.save(&users)?;

    Logger::info("USER_CREATED", &[("id", &user.id.to_string())]);

    Ok((
        StatusCode::CREATED,
        Json(CreatedUserResponse {
            message: "User added successfully".to_string(),
            user,
        }),
    ))
}

async fn update_user_handler(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Json<UpdatedUserResponse>> {
    let id = parse_user_id(&id)?;

    let _guard = state.store.write_guard().await;
    let mut users = state.store.load()?;

    let index = position_by_id(&users, id).ok_or(ApiError::NotFound)?;

    if let Some(name) = request.name {
        users[index].name = name;
    }
    if let Some(email) = request.email {
        users[index].email = email;
    }
    if let Some(age) = request.age {
        users[index].age = age;
    }

    let user = users[index].clone();
    state.store.save(&users)?;

    Logger::info("USER_UPDATED", &[("id", &user.id.to_string())]);

    Ok(Json(UpdatedUserResponse {
        message: "User updated successfully".to_string(),
        user,
    }))
}

async fn delete_user_handler(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeletedUserResponse>> {
    let id = parse_user_id(&id)?;

    let _guard = state.store.write_guard().await;
    let mut users = state.store.load()?;

    let index = position_by_id(&users, id).ok_or(ApiError::NotFound)?;
    let deleted_user = users.remove(index);
    state.store.save(&users)?;

    Logger::info("USER_DELETED", &[("id", &deleted_user.id.to_string())]);

    Ok(Json(DeletedUserResponse {
        message: "User deleted successfully".to_string(),
        deleted_user,
    }))
}

// ==================
// Lookup Handlers
// ==================

async fn get_user_by_name_handler(
    State(state): State<Arc<UserState>>,
    Query(query): Query<NameQuery>,
) -> ApiResult<Json<SingleUserResponse>> {
    let name = query.name.ok_or(ApiError::MissingParam("name"))?;

    let users = state.store.load()?;

    // First exact match wins when duplicate names exist
    let user = users
        .iter()
        .find(|u| u.name == name)
        .cloned()
        .ok_or(ApiError::NotFound)?;

    Ok(Json(SingleUserResponse { user }))
}

async fn get_user_by_id_handler(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SingleUserResponse>> {
    let id = parse_user_id(&id)?;

    let users = state.store.load()?;
    let user = find_by_id(&users, id).cloned().ok_or(ApiError::NotFound)?;

    Ok(Json(SingleUserResponse { user }))
}

async fn list_users_handler(
    State(state): State<Arc<UserState>>,
) -> ApiResult<Json<UserListResponse>> {
    let users = state.store.load()?;
    Ok(Json(UserListResponse { users }))
}

async fn filter_users_handler(
    State(state): State<Arc<UserState>>,
    Query(query): Query<MinAgeQuery>,
) -> ApiResult<Json<UserListResponse>> {
    let raw = query.min_age.ok_or(ApiError::MissingParam("minAge"))?;
    let min_age = raw
        .parse::<u32>()
        .map_err(|_| ApiError::InvalidMinAge(raw))?;

    let users = state.store.load()?;
    let matching: Vec<User> = users.into_iter().filter(|u| u.age >= min_age).collect();

    if matching.is_empty() {
        return Err(ApiError::NoUsersMatchFilter);
    }

    Ok(Json(UserListResponse { users: matching }))
}
