//! The keymap proper.
//!
//! Six layers over the same 5x12 grid.  Base and Game are the two typing
//! layers the board can boot into, Lower and Raise hang off the thumb keys,
//! Adjust sits on Lower+Raise, and the VisualStudio layer is reached by
//! holding the pointer tap dance key.
//!
//! Most cells resolve entirely inside the firmware (plain keys, chords,
//! momentary layers, mod taps).  The few that don't come back to
//! [`Keymap::process`], which emits their effects and tells the firmware
//! whether to keep going with its own handling.

use enumset::{EnumSet, EnumSetType};
use usbd_human_interface_device::page::Keyboard;

use crate::log::info;
use crate::sound;
use crate::{Config, Event, EventQueue, KeyAction, Mods};

pub use self::dance::{DanceKey, Gesture};
pub use self::layers::{grid, Grid, COLS, LAYERS, ROWS};

pub mod dance;
mod layers;

/// The layers, in stacking order.  `Base` and `Game` are default layers, the
/// rest are activated on top.
#[derive(EnumSetType, Debug)]
pub enum Layer {
    Base,
    Game,
    Lower,
    Raise,
    Adjust,
    VisualStudio,
}

pub const NLAYERS: usize = 6;

#[cfg(feature = "defmt")]
impl defmt::Format for Layer {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Layer::Base => defmt::write!(fmt, "base"),
            Layer::Game => defmt::write!(fmt, "game"),
            Layer::Lower => defmt::write!(fmt, "lower"),
            Layer::Raise => defmt::write!(fmt, "raise"),
            Layer::Adjust => defmt::write!(fmt, "adjust"),
            Layer::VisualStudio => defmt::write!(fmt, "visualstudio"),
        }
    }
}

/// A single cell of a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keycode {
    /// Unwired or intentionally dead position.
    None,
    /// Transparent, resolves on the next active layer down.
    Trans,
    /// Plain key.
    Key(Keyboard),
    /// Key sent with modifiers held.
    Chord(Mods, Keyboard),
    /// Modifiers while held, the key when tapped.
    ModTap(Mods, Keyboard),
    /// Layer active while held.
    Momentary(Layer),
    /// One of the tap dance slots.
    Dance(DanceKey),
    /// Handled by [`Keymap::process`].
    Custom(CustomKey),
    /// Firmware-owned controls that still need a place in the grid.
    System(SystemKey),
}

/// The keycodes with bespoke behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustomKey {
    /// Types `->`.
    PointerGlyph,
    /// Ctrl+K Ctrl+O, toggle between header and source file.
    OpenHeader,
    /// Ctrl+K Ctrl+J, peek the header instead of switching to it.
    PeekHeader,
    /// Make Base the default layer.
    SelectBase,
    /// Make Game the default layer.
    SelectGame,
}

/// Controls the firmware resolves itself; listed here so the grid can name
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemKey {
    Reset,
    EepromReset,
    MusicOn,
    MusicOff,
    MusicMode,
    AutoShiftOn,
    AutoShiftOff,
    AutoShiftUp,
    AutoShiftDown,
    AutoShiftReport,
    MouseWheelUp,
    MouseWheelDown,
}

/// The keymap engine.  Owns the firmware capabilities and the tap dance
/// state.
pub struct Keymap {
    config: Config,
    dances: dance::DanceStates,
}

impl Keymap {
    pub fn new(config: Config) -> Self {
        Keymap {
            config,
            dances: dance::DanceStates::new(),
        }
    }

    /// Startup hook, run once the firmware is up.
    pub fn post_init(&self, events: &mut dyn EventQueue) {
        if self.config.auto_shift {
            events.push(Event::AutoShift(false));
        }
    }

    /// Handle one key event for a resolved keycode.  Returns `true` when the
    /// firmware should continue with its own handling of the key.
    pub fn process(&self, code: Keycode, pressed: bool, events: &mut dyn EventQueue) -> bool {
        let custom = match code {
            Keycode::Custom(custom) => custom,
            _ => return true,
        };
        // All of these act on press and ignore the release.
        if pressed {
            match custom {
                CustomKey::PointerGlyph => crate::typer::type_str(events, "->"),
                CustomKey::OpenHeader => header_chord(events, Keyboard::O),
                CustomKey::PeekHeader => header_chord(events, Keyboard::J),
                CustomKey::SelectBase => self.select_default(Layer::Base, &sound::BASE_SONG, events),
                CustomKey::SelectGame => self.select_default(Layer::Game, &sound::GAME_SONG, events),
            }
        }
        false
    }

    /// Tap dance gesture classified; apply the action for it.
    pub fn dance_finished(&mut self, key: DanceKey, gesture: Gesture, events: &mut dyn EventQueue) {
        self.dances.finished(key, gesture, events);
    }

    /// The tap dance key was released; undo whatever `dance_finished` did.
    pub fn dance_reset(&mut self, key: DanceKey, events: &mut dyn EventQueue) {
        self.dances.reset(key, events);
    }

    fn select_default(&self, layer: Layer, song: &'static sound::Song, events: &mut dyn EventQueue) {
        events.push(Event::DefaultLayer(EnumSet::only(layer)));
        if self.config.audio {
            events.push(Event::Song(song));
        }
        info!("default layer: {:?}", layer);
    }
}

/// The two-stroke IDE chords: Ctrl+K, then a second key, with control held
/// across both strokes.
fn header_chord(events: &mut dyn EventQueue, second: Keyboard) {
    events.push(Event::Key(KeyAction::KeyPress(Keyboard::K, Mods::CONTROL)));
    events.push(Event::Key(KeyAction::KeyPress(second, Mods::CONTROL)));
    events.push(Event::Key(KeyAction::KeyRelease));
}
