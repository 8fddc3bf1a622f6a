//! # fruitstand HTTP Server Module
//!
//! The HTTP surface of the service: CRUD controllers for the user and fruit
//! collections, a health check, and the unified Axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/users` - User CRUD
//! - `/fruits` - Fruit CRUD

pub mod config;
pub mod errors;
pub mod fruit_routes;
pub mod health_routes;
pub mod response;
pub mod server;
pub mod user_routes;

pub use config::{ConfigError, ServerConfig};
pub use errors::{ApiError, ApiResult};
pub use fruit_routes::{fruit_routes, FruitsState};
pub use health_routes::health_routes;
pub use response::MessageResponse;
pub use server::{app_router, HttpServer};
pub use user_routes::{user_routes, UsersState};
