use poise::{CreateReply, serenity_prelude as serenity};
use serenity::all::{CreateActionRow, CreateEmbed};
use std::fmt::Display;

use super::button_controls;
use super::library::Track;
use super::player_state::PlayerState;

/// Discord rejects messages longer than this many characters. The splitter
/// counts bytes, which is stricter and therefore always safe.
pub const MESSAGE_LIMIT: usize = 2000;

/// Split `text` into chunks of at most `limit` bytes, breaking after a
/// newline whenever one falls inside the window. Chunks are contiguous
/// slices of the input: concatenated, they equal the original string.
pub fn split_message(text: &str, limit: usize) -> Vec<&str> {
    // 4 is the longest UTF-8 encoding, so a chunk can never be empty
    assert!(limit >= 4);

    let mut chunks = Vec::new();
    let mut rest = text;

    while rest.len() > limit {
        let mut cut = limit;
        while !rest.is_char_boundary(cut) {
            cut -= 1;
        }
        let split_at = match rest[..cut].rfind('\n') {
            Some(newline) => newline + 1,
            None => cut,
        };
        let (chunk, tail) = rest.split_at(split_at);
        chunks.push(chunk);
        rest = tail;
    }

    chunks.push(rest);
    chunks
}

/// The numbered folder listing sent by the `list` command
pub fn track_listing(tracks: &[Track]) -> String {
    let mut listing = format!("There are {} songs in the music folder:", tracks.len());
    for (index, track) in tracks.iter().enumerate() {
        listing.push_str(&format!("\n{}. {}", index + 1, track.title));
    }
    listing
}

/// Create an embed for when a song is now playing
pub fn now_playing(track: &Track) -> CreateEmbed {
    CreateEmbed::new()
        .title("🎵 Now Playing")
        .description(track.title.clone())
        .color(0x00ff00)
}

/// Reply for a successful `play <name>`
pub fn playing(track: &Track) -> CreateReply {
    CreateReply::default().embed(now_playing(track))
}

/// Create an embed for when a track is paused
pub fn paused(track: &Track) -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("⏸️ Paused")
            .description(format!("Paused {}", track.title))
            .color(0x00ff00),
    )
}

/// Create an embed for when a track is resumed
pub fn resumed(track: &Track) -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("▶️ Resumed")
            .description(format!("Resumed {}", track.title))
            .color(0x00ff00),
    )
}

pub fn skipped() -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("⏭️ Skipped Track")
            .description("Skipped to the next track")
            .color(0x00ff00),
    )
}

pub fn nothing_playing() -> CreateReply {
    error_reply("No music is currently playing.")
}

pub fn already_playing() -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("▶️ Playing")
            .description("Playback is already running.")
            .color(0x00ff00),
    )
}

pub fn cannot_pause() -> CreateReply {
    error_reply("No music is currently playing or it is already paused.")
}

pub fn nothing_paused() -> CreateReply {
    error_reply("No music is currently paused.")
}

pub fn track_not_found(name: &str) -> CreateReply {
    error_reply(&format!(
        "The file \"{}\" does not exist in the music folder.",
        name
    ))
}

pub fn queue_empty() -> CreateReply {
    error_reply("The queue is empty. Add more songs to play next.")
}

pub fn no_songs_found() -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("🎵 Music Folder")
            .description("No songs found in the music folder.")
            .color(0x00ff00),
    )
}

pub fn missing_config(what: &str) -> CreateReply {
    error_reply(&format!(
        "Missing configuration: {}. Set it in the environment.",
        what
    ))
}

pub fn join_failed(err: impl Display) -> CreateReply {
    error_reply(&format!("Failed to join voice channel: {}", err))
}

pub fn not_connected(err: impl Display) -> CreateReply {
    error_reply(&format!("Not connected to a voice channel: {}", err))
}

fn error_reply(description: &str) -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("❌ Error")
            .description(description)
            .color(0xff0000),
    )
}

/// Everything the controls message needs, snapshotted from the session
pub struct PlayerMessageData {
    pub current: Option<Track>,
    pub state: PlayerState,
    pub queue: Vec<Track>,
    pub looping: bool,
    pub shuffling: bool,
    pub has_history: bool,
}

// The embed shows at most this many upcoming tracks
const QUEUE_PREVIEW_LENGTH: usize = 10;

/// Build the controls message: the player embed plus the button row
pub fn player_message(data: &PlayerMessageData) -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .title("🎛️ Player Controls")
        .description(player_description(data))
        .color(0x00ff00);

    let buttons = button_controls::playback_buttons(
        data.state,
        data.looping,
        data.shuffling,
        data.has_history,
        !data.queue.is_empty(),
    );

    (embed, buttons)
}

fn player_description(data: &PlayerMessageData) -> String {
    let mut description = String::new();

    match &data.current {
        Some(track) => {
            description.push_str("**🎵 Now Playing**\n");
            description.push_str(&track.title);
            if data.state == PlayerState::Paused {
                description.push_str(" *(paused)*");
            }
            description.push('\n');
        }
        None => description.push_str("**🔇 Nothing playing**\n"),
    }
    description.push('\n');

    if data.queue.is_empty() {
        description.push_str("**📭 Queue is empty**");
    } else {
        description.push_str(&format!("**📋 Queue - {} tracks**\n", data.queue.len()));
        for (index, track) in data.queue.iter().take(QUEUE_PREVIEW_LENGTH).enumerate() {
            description.push_str(&format!("{}. {}\n", index + 1, track.title));
        }
        if data.queue.len() > QUEUE_PREVIEW_LENGTH {
            description.push_str(&format!(
                "…and {} more\n",
                data.queue.len() - QUEUE_PREVIEW_LENGTH
            ));
        }
    }

    let mut modes = Vec::new();
    if data.looping {
        modes.push("🔁 loop");
    }
    if data.shuffling {
        modes.push("🔀 shuffle");
    }
    if !modes.is_empty() {
        description.push_str(&format!("\n\n{}", modes.join(" • ")));
    }

    description
}
