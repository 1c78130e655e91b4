//! Handlers for the `/admin/users` resource (user and role management).
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use oia_core::error::CoreError;
use oia_core::roles::ALL_ROLES;
use oia_core::types::{DbId, Timestamp};
use oia_db::models::user::{CreateUser, UpdateUser, User};
use oia_db::repositories::{RoleRepo, UserRepo};

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Minimum password length enforced on user creation.
const MIN_PASSWORD_LENGTH: usize = 12;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub department: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Request body for `PUT /admin/users/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub department: Option<String>,
    pub is_active: Option<bool>,
}

/// Request body for `PUT /admin/users/{id}/roles`.
#[derive(Debug, Deserialize)]
pub struct SetRolesRequest {
    pub roles: Vec<String>,
}

/// Safe user representation with the resolved role set.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub department: Option<String>,
    pub roles: Vec<String>,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/users
///
/// Create a new user with an initial role set. Validates password strength
/// and role names, hashes the password, and returns 201 Created.
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    validate_role_names(&input.roles)?;

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        username: input.username,
        email: input.email,
        password_hash: hashed,
        department: input.department,
    };
    crate::error::validate_input(&create_dto)?;

    let user = UserRepo::create(&state.pool, &create_dto).await?;
    RoleRepo::set_roles_for_user(&state.pool, user.id, &input.roles).await?;

    let response = build_user_response(user, input.roles);
    Ok((StatusCode::CREATED, Json(DataResponse { data: response })))
}

/// GET /api/v1/admin/users
///
/// List all users with their resolved role sets.
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = UserRepo::list(&state.pool).await?;

    let mut responses = Vec::with_capacity(users.len());
    for user in users {
        let roles = RoleRepo::names_for_user(&state.pool, user.id).await?;
        responses.push(build_user_response(user, roles));
    }

    Ok(Json(DataResponse { data: responses }))
}

/// GET /api/v1/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    let roles = RoleRepo::names_for_user(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: build_user_response(user, roles),
    }))
}

/// PUT /api/v1/admin/users/{id}
///
/// Update a user's profile fields (not password, not roles).
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let update_dto = UpdateUser {
        email: input.email,
        department: input.department,
        is_active: input.is_active,
    };
    crate::error::validate_input(&update_dto)?;

    let user = UserRepo::update(&state.pool, id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    let roles = RoleRepo::names_for_user(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: build_user_response(user, roles),
    }))
}

/// DELETE /api/v1/admin/users/{id}
///
/// Soft-deactivate a user (sets `is_active = false`). Returns 204 No Content.
pub async fn deactivate_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deactivated = UserRepo::deactivate(&state.pool, id).await?;
    if deactivated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}

/// PUT /api/v1/admin/users/{id}/roles
///
/// Replace a user's role set. Role names must come from the seeded
/// vocabulary; unknown names are rejected with 400.
pub async fn set_roles(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<SetRolesRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    validate_role_names(&input.roles)?;

    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    RoleRepo::set_roles_for_user(&state.pool, id, &input.roles).await?;
    let roles = RoleRepo::names_for_user(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: build_user_response(user, roles),
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_role_names(roles: &[String]) -> AppResult<()> {
    for role in roles {
        if !ALL_ROLES.contains(&role.as_str()) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown role '{role}'"
            ))));
        }
    }
    Ok(())
}

fn build_user_response(user: User, roles: Vec<String>) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        department: user.department,
        roles,
        is_active: user.is_active,
        last_login_at: user.last_login_at,
        created_at: user.created_at,
    }
}
