use super::*;
use crate::commands::music::utils::embedded_messages;
use poise::serenity_prelude::CreateMessage;
use tracing::warn;

/// Post the interactive player controls in this channel
#[poise::command(slash_command, prefix_command, category = "Music")]
pub async fn controls(ctx: Context<'_>) -> CommandResult {
    let session = &ctx.data().session;

    let data = session.player_message_data().await;
    let (embed, components) = embedded_messages::player_message(&data);

    let message = ctx
        .channel_id()
        .send_message(
            ctx.http(),
            CreateMessage::new().embed(embed).components(components),
        )
        .await?;

    // Drop the stale controls message, if any
    if let Some((channel_id, message_id)) = session
        .set_controls_message(ctx.channel_id(), message.id)
        .await
    {
        if let Err(e) = ctx.http().delete_message(channel_id, message_id, None).await {
            warn!("Failed to delete old controls message {}: {}", message_id, e);
        }
    }

    ctx.send(
        CreateReply::default()
            .content("🎛️ Controls posted.")
            .ephemeral(true),
    )
    .await?;

    Ok(())
}
