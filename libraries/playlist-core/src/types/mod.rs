//! Domain types: identifiers, playlists and video records

mod ids;
mod playlist;
mod video;

pub use ids::{PlaylistId, UserId, VideoId};
pub use playlist::{CreatePlaylist, Playlist, PlaylistWithVideos, UpdatePlaylist};
pub use video::{CreateVideo, Video};
