use super::*;
use crate::commands::music::utils::{
    embedded_messages,
    event_handlers::play_next_track,
    library,
    music_manager::MusicManager,
    player_state::{PlayerEvent, PlayerState},
};
use tracing::info;

/// Play a song from the music folder, or resume paused playback
#[poise::command(slash_command, prefix_command, category = "Music")]
pub async fn play(
    ctx: Context<'_>,
    #[description = "File name in the music folder"]
    #[rest]
    name: Option<String>,
) -> CommandResult {
    let session = &ctx.data().session;
    let config = &ctx.data().config;

    // Bare `$play` resumes a paused track
    let Some(name) = name else {
        return resume_current(ctx).await;
    };

    info!("Received play command for: {}", name);

    let Some(track) = library::find_track(&config.music_dir, &name) else {
        ctx.send(embedded_messages::track_not_found(&name)).await?;
        return Ok(());
    };

    let (Some(guild_id), Some(voice_channel_id)) = (config.guild_id, config.voice_channel_id)
    else {
        ctx.send(embedded_messages::missing_config(
            "GUILD_ID and VOICE_CHANNEL_ID",
        ))
        .await?;
        return Ok(());
    };

    // Defer the response since joining and starting playback can take time
    ctx.defer().await?;

    session.replace_queue(track.clone()).await;

    // Join the voice channel if not already connected
    let call = match MusicManager::get_call(ctx.serenity_context(), guild_id).await {
        Ok(call) => call,
        Err(_) => {
            match MusicManager::join_channel(ctx.serenity_context(), guild_id, voice_channel_id)
                .await
            {
                Ok(call) => call,
                Err(err) => {
                    ctx.send(embedded_messages::join_failed(err)).await?;
                    return Ok(());
                }
            }
        }
    };

    if let Some((handle, _)) = session.current().await {
        // Stopping the running track makes the end-of-track handler pick up
        // the replaced queue
        session.apply(PlayerEvent::Skip { has_next: true }).await;
        handle.stop()?;
    } else {
        play_next_track(ctx.serenity_context(), session, config, call).await?;
    }

    ctx.send(embedded_messages::playing(&track)).await?;

    Ok(())
}

async fn resume_current(ctx: Context<'_>) -> CommandResult {
    let session = &ctx.data().session;

    let Some((handle, track)) = session.current().await else {
        ctx.send(embedded_messages::nothing_playing()).await?;
        return Ok(());
    };

    if session.state().await == PlayerState::Paused {
        handle.play()?;
        session.apply(PlayerEvent::Resume).await;
        ctx.send(embedded_messages::resumed(&track)).await?;
    } else {
        ctx.send(embedded_messages::already_playing()).await?;
    }

    Ok(())
}
