use super::*;
use crate::commands::music::utils::{
    embedded_messages,
    player_state::{PlayerEvent, PlayerState},
};

/// Pause the current track
#[poise::command(slash_command, prefix_command, category = "Music")]
pub async fn pause(ctx: Context<'_>) -> CommandResult {
    let session = &ctx.data().session;

    let current = session.current().await;
    let state = session.state().await;

    match current {
        Some((handle, track)) if state == PlayerState::Playing => {
            handle.pause()?;
            session.apply(PlayerEvent::Pause).await;
            ctx.send(embedded_messages::paused(&track)).await?;
        }
        _ => {
            ctx.send(embedded_messages::cannot_pause()).await?;
        }
    }

    Ok(())
}
