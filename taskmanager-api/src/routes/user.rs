//! User resource controller.
//!
//! # Endpoints
//!
//! - `GET /user/` — list all users
//! - `GET /user/:id` — fetch one user (404 if absent)
//! - `POST /user/create` — create user, 201 with the created record
//! - `PUT /user/update?user_id=` — full overwrite, 200 (404 if absent)
//! - `DELETE /user/delete?user_id=` — delete user and owned tasks, 204
//! - `GET /user/:id/tasks/` — tasks owned by that user

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use taskmanager_shared::models::{
    task::Task,
    user::{CreateUser, UpdateUser, User},
};

/// Request body for creating a user. Slug is derived server-side.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
}

/// Request body for updating a user. Every field overwrites the stored one.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
}

/// Query parameter for update/delete endpoints.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: i32,
}

/// `GET /user/` — lists all users.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list(&state.db).await?;
    Ok(Json(users))
}

/// `GET /user/:id` — fetches one user by id.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<User>> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User was not found".to_string()))?;

    Ok(Json(user))
}

/// `POST /user/create` — creates a user and returns it with 201.
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = User::create(
        &state.db,
        CreateUser {
            username: req.username,
            firstname: req.firstname,
            lastname: req.lastname,
            age: req.age,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// `PUT /user/update?user_id=` — full overwrite of an existing user.
///
/// The slug keeps the value derived at creation.
pub async fn update_user(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<User>> {
    let user = User::update(
        &state.db,
        query.user_id,
        UpdateUser {
            username: req.username,
            firstname: req.firstname,
            lastname: req.lastname,
            age: req.age,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("User was not found".to_string()))?;

    Ok(Json(user))
}

/// `DELETE /user/delete?user_id=` — deletes a user and every task it owns.
///
/// Both deletes happen in one transaction (tasks first, then the user).
pub async fn delete_user(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<StatusCode> {
    let deleted = User::delete_with_tasks(&state.db, query.user_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// `GET /user/:id/tasks/` — lists the tasks owned by one user.
///
/// An unknown user id yields an empty list rather than a 404.
pub async fn list_user_tasks(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list_by_user(&state.db, id).await?;
    Ok(Json(tasks))
}
