use std::sync::Arc;

use serenity::all::ComponentInteraction;
use serenity::async_trait;
use serenity::model::application::Interaction;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tracing::{error, info, warn};

use crate::commands::music::utils::{
    component_handlers, event_handlers, library, music_manager::MusicManager,
    session::PlayerSession,
};
use crate::config::Config;

pub struct Handler {
    pub config: Arc<Config>,
    pub session: Arc<PlayerSession>,
}

#[async_trait]
impl serenity::prelude::EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Logged in as {}", ready.user.name);
        self.start_folder_playback(&ctx).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Component(mut component) => {
                if component.data.custom_id.starts_with("music_") {
                    self.music_component_interaction(&ctx, &mut component).await;
                }
            }
            _ => (),
        }
    }
}

impl Handler {
    /// Join the configured voice channel and queue the whole music folder
    async fn start_folder_playback(&self, ctx: &Context) {
        let (Some(guild_id), Some(channel_id)) =
            (self.config.guild_id, self.config.voice_channel_id)
        else {
            warn!("GUILD_ID or VOICE_CHANNEL_ID is not set, skipping startup playback");
            return;
        };

        let call = match MusicManager::join_channel(ctx, guild_id, channel_id).await {
            Ok(call) => call,
            Err(e) => {
                error!("Failed to join voice channel {}: {}", channel_id, e);
                return;
            }
        };

        let tracks = library::scan(&self.config.music_dir);
        if tracks.is_empty() {
            info!(
                "No audio files found in {}",
                self.config.music_dir.display()
            );
            return;
        }

        info!(
            "Queueing {} tracks from {}",
            tracks.len(),
            self.config.music_dir.display()
        );
        self.session.enqueue_all(tracks).await;

        if let Err(e) =
            event_handlers::play_next_track(ctx, &self.session, &self.config, call).await
        {
            error!("Failed to start playback: {}", e);
        }
    }

    /// Handle component interactions for components with identities starting with "music_"
    async fn music_component_interaction(
        &self,
        ctx: &Context,
        component: &mut ComponentInteraction,
    ) {
        if let Err(e) =
            component_handlers::handle_interaction(ctx, component, &self.session, &self.config)
                .await
        {
            error!("Error handling component interaction: {}", e);
        }
    }
}
