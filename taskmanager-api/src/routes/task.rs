//! Task resource controller.
//!
//! # Endpoints
//!
//! - `GET /task/` — list all tasks
//! - `GET /task/:id` — fetch one task (404 if absent)
//! - `POST /task/create?user_id=` — create task, 404 if the owner is missing
//! - `PUT /task/update?task_id=` — full overwrite, 200 (404 if absent)
//! - `DELETE /task/delete?task_id=` — delete task, 204 (404 if absent)

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
    task::{CreateTask, Task, UpdateTask},
    user::User,
};

/// Request body for creating a task. The owner comes from the query string.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub content: String,
    pub priority: i32,
}

/// Request body for updating a task. Every field overwrites the stored one.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: String,
    pub content: String,
    pub priority: i32,
}

/// Query parameter naming the owning user on create.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: i32,
}

/// Query parameter for update/delete endpoints.
#[derive(Debug, Deserialize)]
pub struct TaskIdQuery {
    pub task_id: i32,
}

/// `GET /task/` — lists all tasks.
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list(&state.db).await?;
    Ok(Json(tasks))
}

/// `GET /task/:id` — fetches one task by id.
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Task>> {
    let task = Task::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task was not found".to_string()))?;

    Ok(Json(task))
}

/// `POST /task/create?user_id=` — creates a task for an existing user.
///
/// Fails with 404 before persisting anything if the referenced user does
/// not exist.
pub async fn create_task(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    // Owner must exist at creation time
    if User::find_by_id(&state.db, query.user_id).await?.is_none() {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    let task = Task::create(
        &state.db,
        CreateTask {
            title: req.title,
            content: req.content,
            priority: req.priority,
            user_id: query.user_id,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /task/update?task_id=` — full overwrite of an existing task.
///
/// The slug and owner keep the values set at creation.
pub async fn update_task(
    State(state): State<AppState>,
    Query(query): Query<TaskIdQuery>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<Task>> {
    let task = Task::update(
        &state.db,
        query.task_id,
        UpdateTask {
            title: req.title,
            content: req.content,
            priority: req.priority,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Task was not found".to_string()))?;

    Ok(Json(task))
}

/// `DELETE /task/delete?task_id=` — deletes one task.
pub async fn delete_task(
    State(state): State<AppState>,
    Query(query): Query<TaskIdQuery>,
) -> ApiResult<StatusCode> {
    let deleted = Task::delete(&state.db, query.task_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Task was not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
