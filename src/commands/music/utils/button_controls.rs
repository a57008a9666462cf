use serenity::all::{ButtonStyle, CreateActionRow, CreateButton, ReactionType};

use super::player_state::PlayerState;

/// Creates the row of playback control buttons, reflecting the current
/// player state
pub fn playback_buttons(
    state: PlayerState,
    looping: bool,
    shuffling: bool,
    has_history: bool,
    has_queue: bool,
) -> Vec<CreateActionRow> {
    let previous = CreateButton::new("music_previous")
        .emoji(ReactionType::Unicode("⏮️".to_string()))
        .style(ButtonStyle::Secondary)
        .label("Previous")
        .disabled(!has_history);

    let playing = state == PlayerState::Playing;
    let play_pause = CreateButton::new("music_play_pause")
        .emoji(ReactionType::Unicode(
            if playing { "⏸️" } else { "▶️" }.to_string(),
        ))
        .style(ButtonStyle::Primary)
        .label(if playing { "Pause" } else { "Play" })
        .disabled(state == PlayerState::Idle);

    let next = CreateButton::new("music_next")
        .emoji(ReactionType::Unicode("⏭️".to_string()))
        .style(ButtonStyle::Secondary)
        .label("Next")
        .disabled(!has_queue);

    let shuffle = CreateButton::new("music_shuffle")
        .emoji(ReactionType::Unicode("🔀".to_string()))
        .style(if shuffling {
            ButtonStyle::Success
        } else {
            ButtonStyle::Secondary
        })
        .label("Shuffle");

    let repeat = CreateButton::new("music_loop")
        .emoji(ReactionType::Unicode("🔁".to_string()))
        .style(if looping {
            ButtonStyle::Success
        } else {
            ButtonStyle::Secondary
        })
        .label("Loop");

    vec![CreateActionRow::Buttons(vec![
        previous, play_pause, next, shuffle, repeat,
    ])]
}
