//! Audio cues.
//!
//! The firmware's speaker takes (frequency, duration) pairs.  The two cues
//! here confirm a default layer change, so they are distinguishable by ear:
//! rising for Base, falling for Game.  Playback is entirely the firmware's
//! business; this module is data.

/// One note: frequency in hertz, duration in milliseconds.  A frequency of
/// zero is a rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Note {
    pub freq: f32,
    pub ms: f32,
}

/// A short compiled-in tune.
#[derive(Debug, PartialEq)]
pub struct Song(pub &'static [Note]);

const fn note(freq: f32, ms: f32) -> Note {
    Note { freq, ms }
}

/// Played when Base becomes the default layer.
pub static BASE_SONG: Song = Song(&[
    note(587.33, 100.0),  // D5
    note(830.61, 200.0),  // GS5
    note(739.99, 100.0),  // FS5
]);

/// Played when Game becomes the default layer.
pub static GAME_SONG: Song = Song(&[
    note(880.00, 100.0),  // A5
    note(659.26, 100.0),  // E5
    note(587.33, 200.0),  // D5
]);
