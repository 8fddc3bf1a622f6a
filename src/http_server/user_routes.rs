//! User HTTP Routes
//!
//! CRUD endpoints for the user collection with field validation.

use std::sync::{Arc, RwLock};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::Value;

use crate::model::{seed_users, Record, User};
use crate::store::ResourceStore;
use crate::validation::{integer_field, string_field, RuleSet};

use super::errors::{ApiError, ApiResult};
use super::response::MessageResponse;

// ==================
// Shared State
// ==================

/// User controller state shared across handlers
pub struct UsersState {
    store: RwLock<ResourceStore<User>>,
}

impl UsersState {
    /// State over an empty store
    pub fn new() -> Self {
        Self::with_store(ResourceStore::new())
    }

    /// State over an explicitly constructed store; tests build isolated
    /// instances this way.
    pub fn with_store(store: ResourceStore<User>) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// State pre-populated with the server's seed users
    pub fn seeded() -> Self {
        Self::with_store(ResourceStore::with_records(seed_users()))
    }
}

impl Default for UsersState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Validation Rules
// ==================

const NAME_EMPTY: &str = "Name must not be empty.";
const NAME_LENGTH: &str = "Name must be between 5 and 15 characters.";
const AGE_EMPTY: &str = "Age must not be empty.";
const AGE_INTEGER: &str = "Age must be an integer.";
const EMAIL_INVALID: &str = "Email must be a valid email address.";

/// Field rules for user creation, in declaration order.
fn validate_new_user(body: &Value) -> Result<(), ApiError> {
    let mut rules = RuleSet::new(body);
    rules
        .check("name")
        .not_empty(NAME_EMPTY)
        .length_between(5, 15, NAME_LENGTH);
    rules.check("age").not_empty(AGE_EMPTY).is_integer(AGE_INTEGER);
    rules.check("email").is_email(EMAIL_INVALID);
    rules.finish().map_err(ApiError::Validation)
}

/// The same rules, each applied only when the field is supplied.
fn validate_user_update(body: &Value) -> Result<(), ApiError> {
    let mut rules = RuleSet::new(body);
    rules
        .check("name")
        .optional()
        .not_empty(NAME_EMPTY)
        .length_between(5, 15, NAME_LENGTH);
    rules
        .check("age")
        .optional()
        .not_empty(AGE_EMPTY)
        .is_integer(AGE_INTEGER);
    rules.check("email").optional().is_email(EMAIL_INVALID);
    rules.finish().map_err(ApiError::Validation)
}

// ==================
// User Routes
// ==================

/// Create user routes
pub fn user_routes(state: Arc<UsersState>) -> Router {
    Router::new()
        .route("/", get(list_users_handler))
        .route("/", post(create_user_handler))
        .route("/:id", get(get_user_handler))
        .route("/:id", put(update_user_handler))
        .route("/:id", delete(delete_user_handler))
        .with_state(state)
}

/// Parse a path id. Non-numeric ids yield None and fall through to the
/// not-found response: the lookup simply fails to match.
fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

/// List users handler
async fn list_users_handler(State(state): State<Arc<UsersState>>) -> ApiResult<Json<Vec<User>>> {
    let store = state
        .store
        .read()
        .map_err(|_| ApiError::Internal("Lock poisoned".to_string()))?;

    Ok(Json(store.list().to_vec()))
}

/// Get user by id handler
async fn get_user_handler(
    State(state): State<Arc<UsersState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let store = state
        .store
        .read()
        .map_err(|_| ApiError::Internal("Lock poisoned".to_string()))?;

    let user = parse_id(&id)
        .and_then(|id| store.find_by_id(id))
        .ok_or(ApiError::NotFound(User::RESOURCE))?;

    Ok(Json(user.clone()))
}

/// Create user handler
async fn create_user_handler(
    State(state): State<Arc<UsersState>>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<User>)> {
    validate_new_user(&body)?;

    let mut store = state
        .store
        .write()
        .map_err(|_| ApiError::Internal("Lock poisoned".to_string()))?;

    let user = User {
        id: store.next_id(),
        name: string_field(&body, "name"),
        email: string_field(&body, "email"),
        age: integer_field(&body, "age").unwrap_or_default(),
    };
    let user = store.append(user).clone();

    Ok((StatusCode::CREATED, Json(user)))
}

/// Update user handler
///
/// Existence is checked before field validation, so an unknown id is a 404
/// even when the body is also invalid. Only supplied fields change; a failed
/// validation leaves the record untouched.
async fn update_user_handler(
    State(state): State<Arc<UsersState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<User>> {
    let mut store = state
        .store
        .write()
        .map_err(|_| ApiError::Internal("Lock poisoned".to_string()))?;

    let id = parse_id(&id)
        .filter(|id| store.find_by_id(*id).is_some())
        .ok_or(ApiError::NotFound(User::RESOURCE))?;

    validate_user_update(&body)?;

    let user = store
        .find_by_id_mut(id)
        .ok_or(ApiError::NotFound(User::RESOURCE))?;

    if body.get("name").is_some() {
        user.name = string_field(&body, "name");
    }
    if body.get("email").is_some() {
        user.email = string_field(&body, "email");
    }
    if let Some(age) = integer_field(&body, "age") {
        user.age = age;
    }

    Ok(Json(user.clone()))
}

/// Delete user handler
async fn delete_user_handler(
    State(state): State<Arc<UsersState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let mut store = state
        .store
        .write()
        .map_err(|_| ApiError::Internal("Lock poisoned".to_string()))?;

    let removed = parse_id(&id).map(|id| store.remove_by_id(id)).unwrap_or(false);
    if !removed {
        return Err(ApiError::NotFound(User::RESOURCE));
    }

    Ok(Json(MessageResponse::deleted(User::RESOURCE)))
}
