//! Shared request logic between chat commands and the HTTP facade
//!
//! Both surfaces funnel "turn this text into a queued song" through here
//! so they cannot drift apart in how songs are resolved and persisted.

use kazoo_core::types::Song;
use kazoo_core::{Result, SongStore};
use kazoo_playback::Coordinator;
use kazoo_resolver::Resolver;

/// Resolve a query, persist the song and user, and enqueue the pair
///
/// Playback starts immediately when nothing was playing; otherwise the
/// song waits its turn.
pub async fn resolve_and_enqueue(
    store: &dyn SongStore,
    resolver: &dyn Resolver,
    coordinator: &Coordinator,
    query: &str,
    requested_by: &str,
) -> Result<Song> {
    let resolved = resolver.resolve(query).await?;

    let song = store
        .get_or_create_song(&resolved.title, &resolved.url, resolved.thumbnail.as_deref())
        .await?;
    let user = store.get_or_create_user(requested_by).await?;

    coordinator.enqueue(&song, &user).await?;

    Ok(song)
}

/// Resolve a query and add the song to the user's playlist
///
/// Returns the song and whether it was already saved.
pub async fn resolve_and_save(
    store: &dyn SongStore,
    resolver: &dyn Resolver,
    query: &str,
    username: &str,
) -> Result<(Song, bool)> {
    let resolved = resolver.resolve(query).await?;

    let song = store
        .get_or_create_song(&resolved.title, &resolved.url, resolved.thumbnail.as_deref())
        .await?;
    let user = store.get_or_create_user(username).await?;

    let already = store.add_to_playlist(&user, &song).await?;
    Ok((song, already))
}

/// Download a song's audio and record the file path in the store
pub async fn download_song(
    store: &dyn SongStore,
    resolver: &dyn Resolver,
    song: &Song,
) -> Result<std::path::PathBuf> {
    let path = resolver.download(&song.url).await?;
    store.set_file_path(&song.url, &path).await?;
    Ok(path)
}
