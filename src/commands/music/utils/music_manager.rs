use std::sync::Arc;

use poise::serenity_prelude as serenity;
use serenity::client::Context;
use serenity::model::id::{ChannelId, GuildId};
use serenity::prelude::Mutex as SerenityMutex;
use songbird::{Call, Songbird};
use thiserror::Error;

/// Errors that can occur during music operations
#[derive(Error, Debug)]
pub enum MusicError {
    #[error("Failed to join voice channel: {0}")]
    JoinError(String),

    #[error("Not connected to a voice channel")]
    NotConnected,

    #[error("Failed to get voice manager")]
    NoVoiceManager,

    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),
}

/// Result type for music operations
pub type MusicResult<T> = Result<T, MusicError>;

/// Voice-connection plumbing around the Songbird manager
pub struct MusicManager;

impl MusicManager {
    /// Get the Songbird voice client from the context
    pub async fn get_songbird(ctx: &Context) -> MusicResult<Arc<Songbird>> {
        songbird::get(ctx).await.ok_or(MusicError::NoVoiceManager)
    }

    /// Get the current voice channel call handle
    pub async fn get_call(
        ctx: &Context,
        guild_id: GuildId,
    ) -> MusicResult<Arc<SerenityMutex<Call>>> {
        let songbird = Self::get_songbird(ctx).await?;
        songbird.get(guild_id).ok_or(MusicError::NotConnected)
    }

    /// Join a voice channel
    pub async fn join_channel(
        ctx: &Context,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> MusicResult<Arc<SerenityMutex<Call>>> {
        let songbird = Self::get_songbird(ctx).await?;

        songbird
            .join(guild_id, channel_id)
            .await
            .map_err(|e| MusicError::JoinError(e.to_string()))
    }

    /// Leave a voice channel
    pub async fn leave_channel(ctx: &Context, guild_id: GuildId) -> MusicResult<()> {
        let songbird = Self::get_songbird(ctx).await?;

        if songbird.get(guild_id).is_none() {
            return Err(MusicError::NotConnected);
        }

        songbird
            .remove(guild_id)
            .await
            .map_err(|_| MusicError::JoinError("Failed to leave voice channel".to_string()))?;

        Ok(())
    }
}
