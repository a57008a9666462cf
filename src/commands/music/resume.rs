use super::*;
use crate::commands::music::utils::{
    embedded_messages,
    player_state::{PlayerEvent, PlayerState},
};

/// Resume the paused track
#[poise::command(slash_command, prefix_command, category = "Music")]
pub async fn resume(ctx: Context<'_>) -> CommandResult {
    let session = &ctx.data().session;

    let current = session.current().await;
    let state = session.state().await;

    match current {
        Some((handle, track)) if state == PlayerState::Paused => {
            handle.play()?;
            session.apply(PlayerEvent::Resume).await;
            ctx.send(embedded_messages::resumed(&track)).await?;
        }
        _ => {
            ctx.send(embedded_messages::nothing_paused()).await?;
        }
    }

    Ok(())
}
