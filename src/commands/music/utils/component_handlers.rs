use std::sync::Arc;
use std::time::Duration;

use poise::serenity_prelude::{self as serenity, Context};
use serenity::all::ComponentInteraction;
use tokio::time::sleep;
use tracing::{error, info};

use crate::config::Config;

use super::embedded_messages;
use super::event_handlers::skip_to_next;
use super::player_state::{PlayerEvent, PlayerState};
use super::session::PlayerSession;

type ButtonInteractionResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Handle a button interaction
pub async fn handle_interaction(
    ctx: &Context,
    interaction: &mut ComponentInteraction,
    session: &Arc<PlayerSession>,
    config: &Arc<Config>,
) -> ButtonInteractionResult {
    // Defer the interaction response immediately
    interaction.defer(ctx).await?;

    match interaction.data.custom_id.as_str() {
        "music_play_pause" => handle_play_pause(ctx, interaction, session).await?,
        "music_next" => handle_next(ctx, interaction, session, config).await?,
        "music_previous" => handle_previous(ctx, interaction, session, config).await?,
        "music_shuffle" => handle_shuffle(ctx, interaction, session).await?,
        "music_loop" => handle_loop(ctx, interaction, session).await?,
        _ => {
            error!("Unknown button ID: {}", interaction.data.custom_id);
            error_followup(ctx, interaction, "Unknown button action.").await?;
        }
    }

    Ok(())
}

/// Handler for the alternating Play/Pause button
async fn handle_play_pause(
    ctx: &Context,
    interaction: &ComponentInteraction,
    session: &Arc<PlayerSession>,
) -> ButtonInteractionResult {
    let Some((handle, _track)) = session.current().await else {
        return error_followup(ctx, interaction, "No track is currently playing.").await;
    };

    match session.state().await {
        PlayerState::Playing => {
            handle.pause()?;
            session.apply(PlayerEvent::Pause).await;
        }
        PlayerState::Paused => {
            handle.play()?;
            session.apply(PlayerEvent::Resume).await;
        }
        PlayerState::Idle => {
            return error_followup(ctx, interaction, "No track is currently playing.").await;
        }
    }

    update_player_message(ctx, interaction, session).await
}

/// Handler for the Next Track button
async fn handle_next(
    ctx: &Context,
    interaction: &ComponentInteraction,
    session: &Arc<PlayerSession>,
    config: &Arc<Config>,
) -> ButtonInteractionResult {
    if session.queue_is_empty().await {
        return error_followup(
            ctx,
            interaction,
            "The queue is empty. Add more songs to play next.",
        )
        .await;
    }

    if let Err(e) = skip_to_next(ctx, session, config).await {
        return error_followup(ctx, interaction, &format!("Failed to skip: {}", e)).await;
    }

    // Give a moment for the next track event to fire before refreshing
    sleep(Duration::from_millis(100)).await;

    update_player_message(ctx, interaction, session).await
}

/// Handler for the Previous Track button
async fn handle_previous(
    ctx: &Context,
    interaction: &ComponentInteraction,
    session: &Arc<PlayerSession>,
    config: &Arc<Config>,
) -> ButtonInteractionResult {
    let Some(previous) = session.pop_history().await else {
        return error_followup(ctx, interaction, "No previous track in history.").await;
    };

    info!("Returning to previous track: {}", previous.title);
    session.push_front(previous).await;
    if let Err(e) = skip_to_next(ctx, session, config).await {
        return error_followup(ctx, interaction, &format!("Failed to play it: {}", e)).await;
    }

    sleep(Duration::from_millis(100)).await;

    update_player_message(ctx, interaction, session).await
}

/// Handler for the Shuffle toggle button
async fn handle_shuffle(
    ctx: &Context,
    interaction: &ComponentInteraction,
    session: &Arc<PlayerSession>,
) -> ButtonInteractionResult {
    session.toggle_shuffle().await;
    update_player_message(ctx, interaction, session).await
}

/// Handler for the Loop toggle button
async fn handle_loop(
    ctx: &Context,
    interaction: &ComponentInteraction,
    session: &Arc<PlayerSession>,
) -> ButtonInteractionResult {
    session.toggle_loop().await;
    update_player_message(ctx, interaction, session).await
}

/// Update the original player message after a button interaction
async fn update_player_message(
    ctx: &Context,
    interaction: &ComponentInteraction,
    session: &Arc<PlayerSession>,
) -> ButtonInteractionResult {
    let data = session.player_message_data().await;
    let (embed, components) = embedded_messages::player_message(&data);

    interaction
        .edit_response(
            &ctx.http,
            serenity::EditInteractionResponse::new()
                .embed(embed)
                .components(components),
        )
        .await?;

    Ok(())
}

/// Send an ephemeral error followup message for failed interactions
async fn error_followup(
    ctx: &Context,
    interaction: &ComponentInteraction,
    content: &str,
) -> ButtonInteractionResult {
    interaction
        .create_followup(
            &ctx.http,
            serenity::CreateInteractionResponseFollowup::new()
                .content(content)
                .ephemeral(true),
        )
        .await?;
    Ok(())
}
