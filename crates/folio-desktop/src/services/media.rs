//! Background music and page-flip sound control through the webview.

use dioxus::prelude::*;
use folio_core::viewer::PlaybackCommand;

pub const BACKGROUND_MUSIC_ID: &str = "background-music";
pub const PAGE_FLIP_SOUND_ID: &str = "page-flip-sound";

/// Mute or unmute both media elements
pub fn set_muted(muted: bool) {
    run_script(mute_script(muted));
}

/// Start or pause the background music
pub fn apply_playback(command: PlaybackCommand) {
    run_script(playback_script(command));
}

/// Restart the page-flip sound from the beginning
pub fn play_flip_sound() {
    run_script(flip_sound_script());
}

fn run_script(script: String) {
    spawn(async move {
        if let Err(error) = document::eval(&script).join::<serde_json::Value>().await {
            tracing::warn!("Media script failed: {}", error);
        }
    });
}

fn mute_script(muted: bool) -> String {
    format!(
        "for (const id of ['{BACKGROUND_MUSIC_ID}', '{PAGE_FLIP_SOUND_ID}']) {{ \
           const el = document.getElementById(id); if (el) {{ el.muted = {muted}; }} \
         }} return null;"
    )
}

fn playback_script(command: PlaybackCommand) -> String {
    let call = match command {
        PlaybackCommand::Play => "play().catch(() => {})",
        PlaybackCommand::Pause => "pause()",
    };
    format!(
        "const el = document.getElementById('{BACKGROUND_MUSIC_ID}'); \
         if (el) {{ el.{call}; }} return null;"
    )
}

// Rewinding lets rapid page turns each play the full sound.
fn flip_sound_script() -> String {
    format!(
        "const el = document.getElementById('{PAGE_FLIP_SOUND_ID}'); \
         if (el && !el.muted) {{ try {{ el.currentTime = 0; }} catch (e) {{}} \
         el.play().catch(() => {{}}); }} return null;"
    )
}
