//! Fruit HTTP Routes
//!
//! CRUD endpoints for the fruit collection, structurally identical to the
//! user controller with its own field set.

use std::sync::{Arc, RwLock};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::Value;

use crate::model::{Fruit, Record};
use crate::store::ResourceStore;
use crate::validation::{string_field, RuleSet};

use super::errors::{ApiError, ApiResult};
use super::response::MessageResponse;

// ==================
// Shared State
// ==================

/// Fruit controller state shared across handlers
pub struct FruitsState {
    store: RwLock<ResourceStore<Fruit>>,
}

impl FruitsState {
    /// State over an empty store
    pub fn new() -> Self {
        Self::with_store(ResourceStore::new())
    }

    /// State over an explicitly constructed store
    pub fn with_store(store: ResourceStore<Fruit>) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }
}

impl Default for FruitsState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Validation Rules
// ==================

const NAME_EMPTY: &str = "Name must not be empty.";
const NAME_LENGTH: &str = "Name must be between 5 and 20 characters.";
const COLOR_EMPTY: &str = "Color must not be empty.";

/// Field rules for fruit creation, in declaration order.
fn validate_new_fruit(body: &Value) -> Result<(), ApiError> {
    let mut rules = RuleSet::new(body);
    rules
        .check("name")
        .not_empty(NAME_EMPTY)
        .length_between(5, 20, NAME_LENGTH);
    rules.check("color").not_empty(COLOR_EMPTY);
    rules.finish().map_err(ApiError::Validation)
}

/// The same rules, each applied only when the field is supplied.
fn validate_fruit_update(body: &Value) -> Result<(), ApiError> {
    let mut rules = RuleSet::new(body);
    rules
        .check("name")
        .optional()
        .not_empty(NAME_EMPTY)
        .length_between(5, 20, NAME_LENGTH);
    rules.check("color").optional().not_empty(COLOR_EMPTY);
    rules.finish().map_err(ApiError::Validation)
}

// ==================
// Fruit Routes
// ==================

/// Create fruit routes
pub fn fruit_routes(state: Arc<FruitsState>) -> Router {
    Router::new()
        .route("/", get(list_fruits_handler))
        .route("/", post(create_fruit_handler))
        .route("/:id", get(get_fruit_handler))
        .route("/:id", put(update_fruit_handler))
        .route("/:id", delete(delete_fruit_handler))
        .with_state(state)
}

/// Parse a path id; non-numeric ids fall through to the not-found response.
fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

/// List fruits handler
async fn list_fruits_handler(State(state): State<Arc<FruitsState>>) -> ApiResult<Json<Vec<Fruit>>> {
    let store = state
        .store
        .read()
        .map_err(|_| ApiError::Internal("Lock poisoned".to_string()))?;

    Ok(Json(store.list().to_vec()))
}

/// Get fruit by id handler
async fn get_fruit_handler(
    State(state): State<Arc<FruitsState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Fruit>> {
    let store = state
        .store
        .read()
        .map_err(|_| ApiError::Internal("Lock poisoned".to_string()))?;

    let fruit = parse_id(&id)
        .and_then(|id| store.find_by_id(id))
        .ok_or(ApiError::NotFound(Fruit::RESOURCE))?;

    Ok(Json(fruit.clone()))
}

/// Create fruit handler
async fn create_fruit_handler(
    State(state): State<Arc<FruitsState>>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Fruit>)> {
    validate_new_fruit(&body)?;

    let mut store = state
        .store
        .write()
        .map_err(|_| ApiError::Internal("Lock poisoned".to_string()))?;

    let fruit = Fruit {
        id: store.next_id(),
        name: string_field(&body, "name"),
        color: string_field(&body, "color"),
    };
    let fruit = store.append(fruit).clone();

    Ok((StatusCode::CREATED, Json(fruit)))
}

/// Update fruit handler
///
/// Existence is checked before field validation; only supplied fields
/// change.
async fn update_fruit_handler(
    State(state): State<Arc<FruitsState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Fruit>> {
    let mut store = state
        .store
        .write()
        .map_err(|_| ApiError::Internal("Lock poisoned".to_string()))?;

    let id = parse_id(&id)
        .filter(|id| store.find_by_id(*id).is_some())
        .ok_or(ApiError::NotFound(Fruit::RESOURCE))?;

    validate_fruit_update(&body)?;

    let fruit = store
        .find_by_id_mut(id)
        .ok_or(ApiError::NotFound(Fruit::RESOURCE))?;

    if body.get("name").is_some() {
        fruit.name = string_field(&body, "name");
    }
    if body.get("color").is_some() {
        fruit.color = string_field(&body, "color");
    }

    Ok(Json(fruit.clone()))
}

/// Delete fruit handler
async fn delete_fruit_handler(
    State(state): State<Arc<FruitsState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let mut store = state
        .store
        .write()
        .map_err(|_| ApiError::Internal("Lock poisoned".to_string()))?;

    let removed = parse_id(&id).map(|id| store.remove_by_id(id)).unwrap_or(false);
    if !removed {
        return Err(ApiError::NotFound(Fruit::RESOURCE));
    }

    Ok(Json(MessageResponse::deleted(Fruit::RESOURCE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_router_builds() {
        let _router = fruit_routes(Arc::new(FruitsState::new()));
    }

    #[test]
    fn test_create_rules_pass_for_valid_body() {
        let body = json!({"name": "Apple", "color": "red"});
        assert!(validate_new_fruit(&body).is_ok());
    }

    #[test]
    fn test_create_rules_collect_both_failures() {
        let body = json!({"name": "", "color": ""});
        let err = validate_new_fruit(&body).unwrap_err();
        let errors = match err {
            ApiError::Validation(errors) => errors,
            other => panic!("expected validation error, got {:?}", other),
        };
        // name fails both of its rules, color fails its one
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].msg, NAME_EMPTY);
        assert_eq!(errors[1].msg, NAME_LENGTH);
        assert_eq!(errors[2].msg, COLOR_EMPTY);
    }

    #[test]
    fn test_name_length_bounds() {
        let body = json!({"name": "Kiwi", "color": "green"});
        assert!(validate_new_fruit(&body).is_err());

        let body = json!({"name": "Dragonfruit", "color": "pink"});
        assert!(validate_new_fruit(&body).is_ok());
    }

    #[test]
    fn test_update_rules_skip_absent_fields() {
        let body = json!({"color": "yellow"});
        assert!(validate_fruit_update(&body).is_ok());
    }
}
