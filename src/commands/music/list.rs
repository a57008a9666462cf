use super::*;
use crate::commands::music::utils::{embedded_messages, library};

/// List the songs in the music folder
#[poise::command(slash_command, prefix_command, category = "Music")]
pub async fn list(ctx: Context<'_>) -> CommandResult {
    let config = &ctx.data().config;

    let tracks = library::scan(&config.music_dir);

    if tracks.is_empty() {
        ctx.send(embedded_messages::no_songs_found()).await?;
        return Ok(());
    }

    let listing = embedded_messages::track_listing(&tracks);
    for chunk in embedded_messages::split_message(&listing, embedded_messages::MESSAGE_LIMIT) {
        ctx.say(chunk).await?;
    }

    Ok(())
}
