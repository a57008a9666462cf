use std::env;
use std::path::PathBuf;

use serenity::model::id::{ChannelId, GuildId};
use thiserror::Error;

/// Errors raised while reading configuration from the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    InvalidId { name: &'static str, value: String },
}

/// Process configuration, read once at startup. The guild and channel ids
/// are optional; commands that need an unset one reply with an error
/// instead of failing the process.
#[derive(Debug)]
pub struct Config {
    pub token: String,
    pub guild_id: Option<GuildId>,
    pub voice_channel_id: Option<ChannelId>,
    pub text_channel_id: Option<ChannelId>,
    pub music_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let token =
            env::var("DISCORD_TOKEN").map_err(|_| ConfigError::MissingVar("DISCORD_TOKEN"))?;

        Ok(Self {
            token,
            guild_id: optional_id("GUILD_ID")?.map(GuildId::new),
            voice_channel_id: optional_id("VOICE_CHANNEL_ID")?.map(ChannelId::new),
            text_channel_id: optional_id("TEXT_CHANNEL_ID")?.map(ChannelId::new),
            music_dir: env::var("MUSIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("Music")),
        })
    }
}

fn optional_id(name: &'static str) -> Result<Option<u64>, ConfigError> {
    match env::var(name) {
        Ok(value) => parse_id(name, &value).map(Some),
        Err(_) => Ok(None),
    }
}

// Discord snowflakes are nonzero u64s
fn parse_id(name: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| ConfigError::InvalidId {
            name,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_a_snowflake() {
        assert_eq!(
            parse_id("GUILD_ID", "123456789012345678").unwrap(),
            123456789012345678
        );
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_id("GUILD_ID", " 42 \n").unwrap(), 42);
    }

    #[test]
    fn rejects_garbage_and_zero() {
        assert!(parse_id("GUILD_ID", "abc").is_err());
        assert!(parse_id("GUILD_ID", "").is_err());
        assert!(parse_id("GUILD_ID", "0").is_err());
        assert!(parse_id("GUILD_ID", "-5").is_err());
    }
}
