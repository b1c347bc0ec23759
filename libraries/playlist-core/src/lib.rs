//! Playlist Core
//!
//! Storage-agnostic domain types, identifier validation, and the store trait
//! shared by the playlist storage layer and the HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Playlist`, `PlaylistWithVideos`, `Video` and their
//!   creation/update payloads
//! - **Identifiers**: `PlaylistId`, `UserId`, `VideoId` with format validation
//! - **Store Trait**: `PlaylistStore`, implemented by `playlist-storage`
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use playlist_core::types::{CreatePlaylist, PlaylistId, UserId};
//! use playlist_core::validate::is_valid_identifier;
//!
//! let owner = UserId::generate();
//! assert!(is_valid_identifier(owner.as_str()));
//! assert!(PlaylistId::parse("not-an-id").is_err());
//!
//! let request = CreatePlaylist {
//!     name: "Road trip".to_string(),
//!     description: "Long drives".to_string(),
//!     created_by: owner,
//! };
//! assert_eq!(request.name, "Road trip");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use storage::{PlaylistStore, VideoChange};

pub use types::{
    CreatePlaylist, CreateVideo, Playlist, PlaylistId, PlaylistWithVideos, UpdatePlaylist, UserId,
    Video, VideoId,
};
