//! Preonic keymap core.
//!
//! The portable half of a Preonic (5x12 ortholinear) keymap: the static layer
//! tables, the dispatcher for the handful of custom keycodes, and the tap
//! dance engine behind the pointer key.  Matrix scanning, debouncing, HID
//! reporting, layer stack resolution and tap dance timing all belong to the
//! firmware this crate is embedded in.  That firmware calls in with resolved
//! keycodes and gesture snapshots, and everything this crate wants done comes
//! back out through an [`EventQueue`].

#![cfg_attr(not(any(feature = "std", test)), no_std)]

use arraydeque::ArrayDeque;
use arrayvec::ArrayVec;
use bitflags::bitflags;
use enumset::EnumSet;
use usbd_human_interface_device::page::Keyboard;

pub use keymap::{Keymap, Layer};

use sound::Song;

pub mod keymap;
pub mod sound;
pub mod typer;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "defmt", not(test)))] {
        mod log {
            pub use defmt::{info, warn};
        }
    } else {
        mod log {
            pub use log::{info, warn};
        }
    }
}

bitflags! {
    /// A modifier map, the modifiers to hold down while a keypress is sent.
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
    pub struct Mods: u8 {
        const SHIFT = 0b0000_0001;
        const CONTROL = 0b0000_0010;
        const ALT = 0b0000_0100;
        const GUI = 0b0000_1000;
    }
}

/// Keys held together as one chord.  The largest chord in the map is three
/// keys; six is a full boot protocol report.
pub type KeyVec = ArrayVec<Keyboard, 6>;

/// Indicates keypresses that should be sent to the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a single key, with the given modifiers held.
    KeyPress(Keyboard, Mods),
    /// Release whatever `KeyPress` put down.
    KeyRelease,
    /// Replace the set of keys held down.  An empty set releases them all.
    KeySet(KeyVec),
}

/// Everything the keymap asks of the surrounding firmware.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Simulate a keypress on the host.
    Key(KeyAction),
    /// Set, and persist, the default layer mask.
    DefaultLayer(EnumSet<Layer>),
    /// Activate a layer for as long as the matching `LayerOff`.
    LayerOn(Layer),
    /// Deactivate a layer activated by `LayerOn`.
    LayerOff(Layer),
    /// Play an audio cue, if the board has a speaker.
    Song(&'static Song),
    /// Turn the auto shift engine on or off.
    AutoShift(bool),
}

/// A generalized event queue.  Events are discarded if the queue is full.
pub trait EventQueue {
    /// Attempt to push to the queue.
    fn push(&mut self, val: Event);
}

/// Bounded queue for the firmware side of the boundary.
pub type EventBuffer = ArrayDeque<Event, 32>;

impl EventQueue for EventBuffer {
    fn push(&mut self, val: Event) {
        if self.push_back(val).is_err() {
            crate::log::warn!("event queue full, dropping");
        }
    }
}

#[cfg(any(feature = "std", test))]
impl EventQueue for Vec<Event> {
    fn push(&mut self, val: Event) {
        Vec::push(self, val);
    }
}

/// Capabilities of the embedding firmware, resolved at its build time.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// A speaker is wired up, so layer select cues can be played.
    pub audio: bool,
    /// The auto shift engine is compiled in.  It gets disabled at startup.
    pub auto_shift: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            audio: true,
            auto_shift: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_event_buffer_discards() {
        let mut queue = EventBuffer::new();
        for _ in 0..40 {
            EventQueue::push(&mut queue, Event::AutoShift(false));
        }
        assert_eq!(queue.len(), 32);
    }
}
