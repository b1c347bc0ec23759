//! Playlist Server Library
//!
//! HTTP handlers for managing user playlists: create, list by owner, fetch
//! with resolved videos, add/remove videos, update, and delete.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod response;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use response::ApiResponse;
pub use services::auth::AuthService;
pub use state::AppState;
