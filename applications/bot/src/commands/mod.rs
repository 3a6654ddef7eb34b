//! Chat commands
//!
//! Every command is a thin surface over the coordinator and the store;
//! none of them hold playback state of their own.

use crate::services::jukebox;
use crate::transport::SongbirdTransport;
use kazoo_core::{KazooError, SongStore};
use kazoo_playback::{Coordinator, SkipOutcome};
use kazoo_resolver::Resolver;
use kazoo_storage::SqliteSongStore;
use std::sync::Arc;

/// Shared bot data available to every command
pub struct Data {
    pub store: Arc<SqliteSongStore>,
    pub resolver: Arc<dyn Resolver>,
    pub coordinator: Arc<Coordinator>,
    pub transport: Arc<SongbirdTransport>,
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// All chat commands, in registration order
pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![
        play(),
        queue(),
        skip(),
        replay(),
        pause(),
        resume(),
        leave(),
        remove(),
        playlist(),
        save(),
        vote(),
        download(),
    ]
}

/// The requesting user's voice channel, captured as the playback target
async fn capture_voice_target(ctx: Context<'_>) -> Result<bool, Error> {
    let (guild_id, channel_id) = {
        let Some(guild) = ctx.guild() else {
            return Ok(false);
        };
        let channel = guild
            .voice_states
            .get(&ctx.author().id)
            .and_then(|voice_state| voice_state.channel_id);
        (guild.id, channel)
    };

    match channel_id {
        Some(channel) => {
            ctx.data().transport.set_target(guild_id, channel).await;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Play a song, or queue it when something is already playing
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn play(
    ctx: Context<'_>,
    #[rest]
    #[description = "URL or search terms"]
    query: String,
) -> Result<(), Error> {
    if !capture_voice_target(ctx).await? {
        ctx.say("Join a voice channel first.").await?;
        return Ok(());
    }

    ctx.defer().await?;

    let data = ctx.data();
    let result = jukebox::resolve_and_enqueue(
        data.store.as_ref(),
        data.resolver.as_ref(),
        &data.coordinator,
        &query,
        &ctx.author().name,
    )
    .await;

    match result {
        Ok(song) => {
            if data.coordinator.is_playing() {
                ctx.say(format!("Queued **{}**", song.title)).await?;
            } else {
                ctx.say(format!("Playing **{}**", song.title)).await?;
            }
        }
        Err(KazooError::NotFound { .. }) => {
            ctx.say(format!("No results for `{query}`.")).await?;
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

/// Show the queue
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn queue(ctx: Context<'_>) -> Result<(), Error> {
    let entries = ctx.data().store.list_queue().await?;

    if entries.is_empty() {
        ctx.say("The queue is empty.").await?;
        return Ok(());
    }

    let playing = ctx.data().coordinator.is_playing();
    let lines: Vec<String> = entries
        .iter()
        .map(|entry| {
            let marker = if playing && entry.position == 0 {
                "▶ "
            } else {
                ""
            };
            format!(
                "{}. {}{} (requested by {})",
                entry.position + 1,
                marker,
                entry.song.title,
                entry.user.name
            )
        })
        .collect();

    ctx.say(format!("**Queue:**\n{}", lines.join("\n"))).await?;
    Ok(())
}

/// Skip the current song
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn skip(ctx: Context<'_>) -> Result<(), Error> {
    match ctx.data().coordinator.skip().await? {
        SkipOutcome::Skipped(song) => {
            ctx.say(format!("Skipped **{}**", song.title)).await?;
        }
        SkipOutcome::NothingPlaying => {
            ctx.say("Nothing is playing.").await?;
        }
    }
    Ok(())
}

/// Restart the current song from the beginning
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn replay(ctx: Context<'_>) -> Result<(), Error> {
    match ctx.data().coordinator.replay().await? {
        Some(song) => {
            ctx.say(format!("Replaying **{}**", song.title)).await?;
        }
        None => {
            ctx.say("Nothing to replay.").await?;
        }
    }
    Ok(())
}

/// Pause playback
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn pause(ctx: Context<'_>) -> Result<(), Error> {
    if ctx.data().coordinator.pause().await? {
        ctx.say("Paused.").await?;
    } else {
        ctx.say("Nothing is playing.").await?;
    }
    Ok(())
}

/// Resume paused playback
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn resume(ctx: Context<'_>) -> Result<(), Error> {
    if ctx.data().coordinator.resume().await? {
        ctx.say("Resumed.").await?;
    } else {
        ctx.say("Nothing is paused.").await?;
    }
    Ok(())
}

/// Leave the voice channel
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn leave(ctx: Context<'_>) -> Result<(), Error> {
    ctx.data().coordinator.leave().await?;
    ctx.say("Left the voice channel.").await?;
    Ok(())
}

/// Remove a queue entry by position, or `all` to clear the queue
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn remove(
    ctx: Context<'_>,
    #[description = "Queue position (1-based) or `all`"] target: String,
) -> Result<(), Error> {
    let data = ctx.data();

    if target.eq_ignore_ascii_case("all") {
        data.store.clear_queue().await?;
        ctx.say("Queue cleared.").await?;
        return Ok(());
    }

    let Ok(position) = target.parse::<usize>() else {
        ctx.say("Give a queue position or `all`.").await?;
        return Ok(());
    };
    if position == 0 {
        ctx.say("Positions start at 1.").await?;
        return Ok(());
    }

    match data.store.remove_position(position - 1).await {
        Ok(entry) => {
            ctx.say(format!("Removed **{}**", entry.song.title)).await?;
        }
        Err(KazooError::InvalidRequest(_)) => {
            ctx.say(format!("No song at position {position}.")).await?;
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

/// Show your playlist
#[poise::command(slash_command, prefix_command)]
pub async fn playlist(ctx: Context<'_>) -> Result<(), Error> {
    let data = ctx.data();
    let user = data.store.get_or_create_user(&ctx.author().name).await?;
    let songs = data.store.get_playlist(&user).await?;

    if songs.is_empty() {
        ctx.say("Your playlist is empty.").await?;
        return Ok(());
    }

    let lines: Vec<String> = songs
        .iter()
        .enumerate()
        .map(|(i, song)| format!("{}. {} <{}>", i + 1, song.title, song.url))
        .collect();

    ctx.say(format!("**Your playlist:**\n{}", lines.join("\n")))
        .await?;
    Ok(())
}

/// Save a song to your playlist (the current song when no query is given)
#[poise::command(slash_command, prefix_command)]
pub async fn save(
    ctx: Context<'_>,
    #[rest]
    #[description = "URL or search terms (defaults to the current song)"]
    query: Option<String>,
) -> Result<(), Error> {
    let data = ctx.data();
    let username = &ctx.author().name;

    let (song, already) = match query {
        Some(query) => {
            ctx.defer().await?;
            match jukebox::resolve_and_save(
                data.store.as_ref(),
                data.resolver.as_ref(),
                &query,
                username,
            )
            .await
            {
                Ok(result) => result,
                Err(KazooError::NotFound { .. }) => {
                    ctx.say(format!("No results for `{query}`.")).await?;
                    return Ok(());
                }
                Err(err) => return Err(err.into()),
            }
        }
        None => {
            let Some(current) = data.coordinator.now_playing().await? else {
                ctx.say("Nothing is playing.").await?;
                return Ok(());
            };
            let user = data.store.get_or_create_user(username).await?;
            let already = data.store.add_to_playlist(&user, &current.song).await?;
            (current.song, already)
        }
    };

    if already {
        ctx.say(format!("**{}** is already in your playlist.", song.title))
            .await?;
    } else {
        ctx.say(format!("Saved **{}** to your playlist.", song.title))
            .await?;
    }
    Ok(())
}

/// Upvote the current song
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn vote(ctx: Context<'_>) -> Result<(), Error> {
    let data = ctx.data();

    let Some(current) = data.coordinator.now_playing().await? else {
        ctx.say("Nothing is playing.").await?;
        return Ok(());
    };

    let song = data.store.upvote_song(&current.song.url).await?;
    ctx.say(format!(
        "**{}** now has {} upvote{}.",
        song.title,
        song.upvotes,
        if song.upvotes == 1 { "" } else { "s" }
    ))
    .await?;
    Ok(())
}

/// Download the current song so replays skip the network
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn download(ctx: Context<'_>) -> Result<(), Error> {
    let data = ctx.data();

    let Some((song, _user)) = data.store.peek_head().await? else {
        ctx.say("Nothing to download.").await?;
        return Ok(());
    };

    if song.file_path.is_some() {
        ctx.say(format!("**{}** is already downloaded.", song.title))
            .await?;
        return Ok(());
    }

    ctx.defer().await?;

    match jukebox::download_song(data.store.as_ref(), data.resolver.as_ref(), &song).await {
        Ok(_path) => {
            ctx.say(format!("Downloaded **{}**.", song.title)).await?;
        }
        Err(err) => {
            tracing::warn!(%err, url = %song.url, "download failed");
            ctx.say(format!("Could not download **{}**.", song.title))
                .await?;
        }
    }

    Ok(())
}
