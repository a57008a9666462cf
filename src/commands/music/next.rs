use super::*;
use crate::commands::music::utils::{embedded_messages, event_handlers::skip_to_next};

/// Skip to the next track in the queue
#[poise::command(slash_command, prefix_command, category = "Music")]
pub async fn next(ctx: Context<'_>) -> CommandResult {
    let session = &ctx.data().session;
    let config = &ctx.data().config;

    if session.queue_is_empty().await {
        ctx.send(embedded_messages::queue_empty()).await?;
        return Ok(());
    }

    match skip_to_next(ctx.serenity_context(), session, config).await {
        Ok(()) => {
            ctx.send(embedded_messages::skipped()).await?;
        }
        Err(err) => {
            ctx.send(embedded_messages::not_connected(err)).await?;
        }
    }

    Ok(())
}
