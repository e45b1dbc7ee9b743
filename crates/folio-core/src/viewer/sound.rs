//! Background music and page-flip sound toggles

/// Command for the background music element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
}

/// Sound switches. Both start off: media is muted and music paused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoundState {
    sound_on: bool,
    playing: bool,
}

impl SoundState {
    /// Flip mute for both media elements; returns the new `muted` value
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_on = !self.sound_on;
        self.is_muted()
    }

    /// Flip background music between playing and paused
    pub fn toggle_playback(&mut self) -> PlaybackCommand {
        self.playing = !self.playing;
        if self.playing {
            PlaybackCommand::Play
        } else {
            PlaybackCommand::Pause
        }
    }

    #[must_use]
    pub const fn is_sound_on(self) -> bool {
        self.sound_on
    }

    #[must_use]
    pub const fn is_muted(self) -> bool {
        !self.sound_on
    }

    #[must_use]
    pub const fn is_playing(self) -> bool {
        self.playing
    }

    /// Whether a page turn should play the flip sound
    #[must_use]
    pub const fn should_play_flip_sound(self) -> bool {
        self.sound_on
    }

    #[must_use]
    pub const fn sound_icon(self) -> &'static str {
        if self.sound_on {
            "🔊"
        } else {
            "🔇"
        }
    }

    #[must_use]
    pub const fn playback_icon(self) -> &'static str {
        if self.playing {
            "⏸"
        } else {
            "▶"
        }
    }
}
