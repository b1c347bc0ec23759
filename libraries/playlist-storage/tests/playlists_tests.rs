//! Integration tests for the playlists vertical slice
//!
//! Tests playlist operations including:
//! - Creation and ownership
//! - Owner listing order
//! - Atomic video add/remove and ordering
//! - Reference resolution
//! - Update and delete returning records


use playlist_core::{
    CreatePlaylist, PlaylistId, PlaylistStore, UpdatePlaylist, UserId, VideoChange, VideoId,
};
use std::sync::Arc;
use test_helpers::*;

#[tokio::test]
async fn test_create_and_get_playlist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let owner = UserId::generate();

    let playlist = playlist_storage::playlists::create(
        pool,
        CreatePlaylist {
            name: "My Favorites".to_string(),
            description: "Best videos ever".to_string(),
            created_by: owner.clone(),
        },
    )
    .await
    .expect("Failed to create playlist");

    assert_eq!(playlist.name, "My Favorites");
    assert_eq!(playlist.description, "Best videos ever");
    assert_eq!(playlist.created_by, owner);
    assert!(playlist.videos.is_empty());
    assert_eq!(playlist.created_at, playlist.updated_at);

    let retrieved = playlist_storage::playlists::get_by_id(pool, &playlist.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(retrieved, playlist);
}

#[tokio::test]
async fn test_get_missing_playlist_returns_none() {
    let test_db = TestDb::new().await;

    let result = playlist_storage::playlists::get_by_id(test_db.pool(), &PlaylistId::generate())
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_get_playlists_by_owner_newest_first() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user1 = UserId::generate();
    let user2 = UserId::generate();

    let first = create_test_playlist(pool, "User 1 Playlist A", &user1).await;
    create_test_playlist(pool, "User 2 Playlist", &user2).await;
    let second = create_test_playlist(pool, "User 1 Playlist B", &user1).await;

    let playlists = playlist_storage::playlists::get_by_owner(pool, &user1)
        .await
        .unwrap();

    assert_eq!(playlists.len(), 2);
    assert_eq!(playlists[0].id, second.id);
    assert_eq!(playlists[1].id, first.id);
    for playlist in &playlists {
        assert_eq!(playlist.created_by, user1);
    }
}

#[tokio::test]
async fn test_get_playlists_by_owner_includes_videos() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let owner = UserId::generate();
    let with_videos = create_test_playlist(pool, "With videos", &owner).await;
    let empty = create_test_playlist(pool, "Empty", &owner).await;

    let v1 = VideoId::generate();
    let v2 = VideoId::generate();
    playlist_storage::playlists::add_video(pool, &with_videos.id, &v1).await.unwrap();
    playlist_storage::playlists::add_video(pool, &with_videos.id, &v2).await.unwrap();

    let playlists = playlist_storage::playlists::get_by_owner(pool, &owner)
        .await
        .unwrap();

    assert_eq!(playlists[0].id, empty.id);
    assert!(playlists[0].videos.is_empty());
    assert_eq!(playlists[1].videos, vec![v1, v2]);
}

#[tokio::test]
async fn test_get_playlists_for_unknown_owner_is_empty() {
    let test_db = TestDb::new().await;

    let playlists = playlist_storage::playlists::get_by_owner(test_db.pool(), &UserId::generate())
        .await
        .unwrap();

    assert!(playlists.is_empty());
}

#[tokio::test]
async fn test_add_video_appends_in_order() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist = create_test_playlist(pool, "Queue", &UserId::generate()).await;
    let v1 = VideoId::generate();
    let v2 = VideoId::generate();

    let change = playlist_storage::playlists::add_video(pool, &playlist.id, &v1)
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(change, VideoChange::Applied(ref p) if p.videos == vec![v1.clone()]));

    let change = playlist_storage::playlists::add_video(pool, &playlist.id, &v2)
        .await
        .unwrap()
        .unwrap();

    let VideoChange::Applied(updated) = change else {
        panic!("expected video to be added");
    };
    assert_eq!(updated.videos, vec![v1, v2]);
    assert!(updated.updated_at >= playlist.updated_at);
}

#[tokio::test]
async fn test_add_duplicate_video_is_unchanged() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist = create_test_playlist(pool, "Queue", &UserId::generate()).await;
    let video = VideoId::generate();

    playlist_storage::playlists::add_video(pool, &playlist.id, &video)
        .await
        .unwrap();
    let change = playlist_storage::playlists::add_video(pool, &playlist.id, &video)
        .await
        .unwrap()
        .unwrap();

    let VideoChange::Unchanged(current) = change else {
        panic!("duplicate add should not apply");
    };
    assert_eq!(current.videos, vec![video]);
}

#[tokio::test]
async fn test_add_video_to_missing_playlist() {
    let test_db = TestDb::new().await;

    let result = playlist_storage::playlists::add_video(
        test_db.pool(),
        &PlaylistId::generate(),
        &VideoId::generate(),
    )
    .await
    .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_concurrent_adds_of_same_video_apply_once() {
    let test_db = TestDb::new().await;
    let store = Arc::new(test_db.store.clone());

    let playlist = create_test_playlist(test_db.pool(), "Race", &UserId::generate()).await;
    let video = VideoId::generate();

    let mut handles = Vec::new();
    for _ in 0..4 {
        let store = Arc::clone(&store);
        let playlist_id = playlist.id.clone();
        let video = video.clone();
        handles.push(tokio::spawn(async move {
            store.add_video(&playlist_id, &video).await
        }));
    }

    let mut applied = 0;
    for handle in handles {
        if let Some(VideoChange::Applied(_)) = handle.await.unwrap().unwrap() {
            applied += 1;
        }
    }

    assert_eq!(applied, 1);
    let current = store.get_playlist(&playlist.id).await.unwrap().unwrap();
    assert_eq!(current.videos, vec![video]);
}

#[tokio::test]
async fn test_remove_video_keeps_order_of_others() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist = create_test_playlist(pool, "Queue", &UserId::generate()).await;
    let v1 = VideoId::generate();
    let v2 = VideoId::generate();
    let v3 = VideoId::generate();
    for video in [&v1, &v2, &v3] {
        playlist_storage::playlists::add_video(pool, &playlist.id, video)
            .await
            .unwrap();
    }

    let change = playlist_storage::playlists::remove_video(pool, &playlist.id, &v2)
        .await
        .unwrap()
        .unwrap();

    let VideoChange::Applied(updated) = change else {
        panic!("expected video to be removed");
    };
    assert_eq!(updated.videos, vec![v1.clone(), v3.clone()]);

    // Appending after a removal still goes to the end
    let v4 = VideoId::generate();
    playlist_storage::playlists::add_video(pool, &playlist.id, &v4)
        .await
        .unwrap();
    let current = playlist_storage::playlists::get_by_id(pool, &playlist.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(current.videos, vec![v1, v3, v4]);
}

#[tokio::test]
async fn test_remove_absent_video_is_unchanged() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist = create_test_playlist(pool, "Queue", &UserId::generate()).await;

    let change = playlist_storage::playlists::remove_video(pool, &playlist.id, &VideoId::generate())
        .await
        .unwrap()
        .unwrap();

    assert!(matches!(change, VideoChange::Unchanged(ref p) if p.videos.is_empty()));
}

#[tokio::test]
async fn test_get_with_videos_resolves_in_order_and_skips_unknown() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let owner = UserId::generate();
    let playlist = create_test_playlist(pool, "Resolved", &owner).await;
    let second = create_test_video(pool, "Second", &owner).await;
    let first = create_test_video(pool, "First", &owner).await;
    let dangling = VideoId::generate();

    for video in [&first.id, &dangling, &second.id] {
        playlist_storage::playlists::add_video(pool, &playlist.id, video)
            .await
            .unwrap();
    }

    let resolved = playlist_storage::playlists::get_with_videos(pool, &playlist.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(resolved.id, playlist.id);
    assert_eq!(resolved.videos, vec![first, second]);
}

#[tokio::test]
async fn test_update_changes_only_name_and_description() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let owner = UserId::generate();
    let playlist = create_test_playlist(pool, "Old", &owner).await;
    let video = VideoId::generate();
    playlist_storage::playlists::add_video(pool, &playlist.id, &video)
        .await
        .unwrap();

    let updated = playlist_storage::playlists::update(
        pool,
        &playlist.id,
        UpdatePlaylist {
            name: "New".to_string(),
            description: "Desc".to_string(),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.name, "New");
    assert_eq!(updated.description, "Desc");
    assert_eq!(updated.created_by, owner);
    assert_eq!(updated.videos, vec![video]);
    assert_eq!(updated.created_at, playlist.created_at);
}

#[tokio::test]
async fn test_update_missing_playlist_returns_none() {
    let test_db = TestDb::new().await;

    let result = playlist_storage::playlists::update(
        test_db.pool(),
        &PlaylistId::generate(),
        UpdatePlaylist {
            name: "New".to_string(),
            description: "Desc".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_playlist_returns_record_and_keeps_videos() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let owner = UserId::generate();
    let playlist = create_test_playlist(pool, "To Delete", &owner).await;
    let video = create_test_video(pool, "Keeper", &owner).await;
    playlist_storage::playlists::add_video(pool, &playlist.id, &video.id)
        .await
        .unwrap();

    let deleted = playlist_storage::playlists::delete(pool, &playlist.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(deleted.id, playlist.id);
    assert_eq!(deleted.videos, vec![video.id.clone()]);

    assert!(playlist_storage::playlists::get_by_id(pool, &playlist.id)
        .await
        .unwrap()
        .is_none());

    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM playlist_videos WHERE playlist_id = ?")
            .bind(&playlist.id)
            .fetch_one(pool)
            .await
            .unwrap();
    assert_eq!(count, 0);

    // Video record should still exist
    assert!(playlist_storage::videos::get_by_id(pool, &video.id)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_delete_missing_playlist_returns_none() {
    let test_db = TestDb::new().await;

    let result = playlist_storage::playlists::delete(test_db.pool(), &PlaylistId::generate())
        .await
        .unwrap();

    assert!(result.is_none());
}
