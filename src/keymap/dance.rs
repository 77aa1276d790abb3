//! Tap dance.
//!
//! The firmware's tap dance engine owns the timing: it watches presses and
//! releases of a dance key and, when the gesture window closes, hands us a
//! [`Gesture`] snapshot through `finished`, then a matching `reset` when the
//! key finally comes up.  We classify the snapshot, apply the action for it,
//! and undo that exact action on reset.  The two calls pair exactly once per
//! gesture, so the stored classification is taken (not just read) by reset.

use usbd_human_interface_device::page::Keyboard;

use crate::log::warn;
use crate::{Event, EventQueue, KeyAction, KeyVec, Mods};

use super::Layer;

/// The dance slots in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DanceKey {
    /// Run / build / IDE layer, on the key that types `->` elsewhere.
    Pointer,
    Left,
    Down,
    Up,
    Right,
    StepInto,
}

pub const NDANCES: usize = 6;

impl DanceKey {
    fn index(self) -> usize {
        self as usize
    }
}

/// What the firmware saw of the gesture when the window closed.
#[derive(Clone, Copy, Debug)]
pub struct Gesture {
    /// Number of complete taps, counting a press still held as a tap.
    pub count: u8,
    /// The key was still down when the window closed.
    pub pressed: bool,
    /// Another key was pressed mid-gesture.
    pub interrupted: bool,
}

/// The recognized gesture shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DanceKind {
    SingleTap,
    SingleHold,
    DoubleTap,
}

/// Classify a gesture snapshot.  An interrupted single press counts as a tap,
/// since the user has moved on to other keys.  Anything past a double tap is
/// unrecognized and yields `None`.
pub fn classify(gesture: Gesture) -> Option<DanceKind> {
    match gesture.count {
        1 if gesture.interrupted || !gesture.pressed => Some(DanceKind::SingleTap),
        1 => Some(DanceKind::SingleHold),
        2 => Some(DanceKind::DoubleTap),
        _ => None,
    }
}

enum DanceDef {
    /// One key on tap, an alternate on double tap.  Holding acts like the
    /// tap key.
    Pair {
        tap: (Mods, Keyboard),
        double: (Mods, Keyboard),
    },
    /// The pointer key: F5 on tap, the build chord on double tap, the
    /// VisualStudio layer while held.
    Pointer,
}

static DANCES: [DanceDef; NDANCES] = [
    DanceDef::Pointer,
    DanceDef::Pair {
        tap: (Mods::empty(), Keyboard::LeftArrow),
        double: (Mods::CONTROL, Keyboard::LeftArrow),
    },
    DanceDef::Pair {
        tap: (Mods::empty(), Keyboard::DownArrow),
        double: (Mods::empty(), Keyboard::Home),
    },
    DanceDef::Pair {
        tap: (Mods::empty(), Keyboard::UpArrow),
        double: (Mods::empty(), Keyboard::End),
    },
    DanceDef::Pair {
        tap: (Mods::empty(), Keyboard::RightArrow),
        double: (Mods::CONTROL, Keyboard::RightArrow),
    },
    DanceDef::Pair {
        tap: (Mods::empty(), Keyboard::F11),
        double: (Mods::SHIFT.union(Mods::ALT), Keyboard::F11),
    },
];

/// Per-slot stored classification.  At most one gesture is outstanding per
/// key; `finished` stores, `reset` takes.
pub(super) struct DanceStates {
    state: [Option<DanceKind>; NDANCES],
}

impl DanceStates {
    pub(super) fn new() -> Self {
        DanceStates {
            state: [None; NDANCES],
        }
    }

    pub(super) fn finished(&mut self, key: DanceKey, gesture: Gesture, events: &mut dyn EventQueue) {
        let kind = match classify(gesture) {
            Some(kind) => kind,
            None => {
                warn!("unrecognized dance gesture: {} taps", gesture.count);
                return;
            }
        };
        self.state[key.index()] = Some(kind);
        match (&DANCES[key.index()], kind) {
            (DanceDef::Pair { double, .. }, DanceKind::DoubleTap) => press(events, *double),
            (DanceDef::Pair { tap, .. }, _) => press(events, *tap),
            (DanceDef::Pointer, DanceKind::SingleTap) => {
                press(events, (Mods::empty(), Keyboard::F5))
            }
            (DanceDef::Pointer, DanceKind::DoubleTap) => {
                let mut chord = KeyVec::new();
                chord.push(Keyboard::LeftControl);
                chord.push(Keyboard::LeftShift);
                chord.push(Keyboard::B);
                events.push(Event::Key(KeyAction::KeySet(chord)));
            }
            (DanceDef::Pointer, DanceKind::SingleHold) => {
                events.push(Event::LayerOn(Layer::VisualStudio));
            }
        }
    }

    pub(super) fn reset(&mut self, key: DanceKey, events: &mut dyn EventQueue) {
        // A gesture that never classified holds nothing down.
        let kind = match self.state[key.index()].take() {
            Some(kind) => kind,
            None => return,
        };
        match (&DANCES[key.index()], kind) {
            (DanceDef::Pair { .. }, _) => events.push(Event::Key(KeyAction::KeyRelease)),
            (DanceDef::Pointer, DanceKind::SingleTap) => {
                events.push(Event::Key(KeyAction::KeyRelease))
            }
            (DanceDef::Pointer, DanceKind::DoubleTap) => {
                events.push(Event::Key(KeyAction::KeySet(KeyVec::new())))
            }
            (DanceDef::Pointer, DanceKind::SingleHold) => {
                events.push(Event::LayerOff(Layer::VisualStudio));
            }
        }
    }
}

fn press(events: &mut dyn EventQueue, (mods, key): (Mods, Keyboard)) {
    events.push(Event::Key(KeyAction::KeyPress(key, mods)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture(count: u8, pressed: bool, interrupted: bool) -> Gesture {
        Gesture {
            count,
            pressed,
            interrupted,
        }
    }

    #[test]
    fn classify_single_tap() {
        assert_eq!(classify(gesture(1, false, false)), Some(DanceKind::SingleTap));
        // Interrupted counts as a tap even if still held.
        assert_eq!(classify(gesture(1, true, true)), Some(DanceKind::SingleTap));
    }

    #[test]
    fn classify_single_hold() {
        assert_eq!(classify(gesture(1, true, false)), Some(DanceKind::SingleHold));
    }

    #[test]
    fn classify_double_tap() {
        assert_eq!(classify(gesture(2, false, false)), Some(DanceKind::DoubleTap));
        assert_eq!(classify(gesture(2, true, false)), Some(DanceKind::DoubleTap));
    }

    #[test]
    fn classify_overflow_is_none() {
        assert_eq!(classify(gesture(3, false, false)), None);
        assert_eq!(classify(gesture(0, false, false)), None);
    }
}
