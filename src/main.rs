use ::serenity::all::ClientBuilder;
use dotenv::dotenv;
use poise::serenity_prelude as serenity;
use songbird::SerenityInit;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;
mod config;
mod events;

use commands::music::utils::session::PlayerSession;
use commands::music::{controls::*, list::*, next::*, pause::*, play::*, resume::*};
use config::Config;

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Data, Error>;
type CommandResult = Result<(), Error>;

/// Shared state, accessible in all command invocations
pub struct Data {
    pub config: Arc<Config>,
    pub session: Arc<PlayerSession>,
}

#[poise::command(slash_command, prefix_command, category = "General")]
async fn help(
    ctx: Context<'_>,
    #[description = "Specific command to show help about"]
    #[autocomplete = "poise::builtins::autocomplete_command"]
    command: Option<String>,
) -> CommandResult {
    poise::builtins::help(
        ctx,
        command.as_deref(),
        poise::builtins::HelpConfiguration {
            show_context_menu_commands: true,
            ..Default::default()
        },
    )
    .await
    .map_err(|e| e.into())
}

#[poise::command(prefix_command, hide_in_help)]
async fn register(ctx: Context<'_>) -> Result<(), Error> {
    poise::builtins::register_application_commands_buttons(ctx)
        .await
        .map_err(|e| e.into())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize logging with debug level for our crate
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vinyl=debug,warn")),
        )
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .with_target(true)
        .with_ansi(true)
        .pretty()
        .init();

    dotenv().ok();

    let config = Arc::new(Config::from_env()?);
    let session = Arc::new(PlayerSession::new());

    let intents = serenity::GatewayIntents::non_privileged()
        | serenity::GatewayIntents::MESSAGE_CONTENT
        | serenity::GatewayIntents::GUILD_VOICE_STATES;

    let commands = vec![
        // Default commands
        register(),
        help(),
        // Playback commands
        play(),
        pause(),
        resume(),
        next(),
        list(),
        controls(),
    ];

    let data_config = Arc::clone(&config);
    let data_session = Arc::clone(&session);

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands,
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some("$".into()),
                ..Default::default()
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(Data {
                    config: data_config,
                    session: data_session,
                })
            })
        });

    let mut client = ClientBuilder::new(config.token.clone(), intents)
        .framework(framework.build())
        .event_handler(events::Handler {
            config: Arc::clone(&config),
            session: Arc::clone(&session),
        })
        .register_songbird()
        .await?;

    // A failed login is the one fatal error: it propagates out of main
    client.start().await.map_err(Into::into)
}
