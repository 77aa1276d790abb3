//! The static layer grids.
//!
//! One 5x12 grid per layer.  The bottom row holds a 2u spacebar, so its
//! seventh column is unwired on every layer.

use usbd_human_interface_device::page::Keyboard::{self, *};

use crate::Mods;

use super::CustomKey::*;
use super::DanceKey;
use super::SystemKey::*;
use super::{CustomKey, Keycode, Layer, SystemKey, NLAYERS};

pub const ROWS: usize = 5;
pub const COLS: usize = 12;

pub type Grid = [[Keycode; COLS]; ROWS];

const __: Keycode = Keycode::None;
const TR: Keycode = Keycode::Trans;

const PTR: Keycode = Keycode::Dance(DanceKey::Pointer);
const STEP: Keycode = Keycode::Dance(DanceKey::StepInto);

// Shift while held, the key when tapped.
const SHESC: Keycode = Keycode::ModTap(Mods::SHIFT, Escape);
const SHENT: Keycode = Keycode::ModTap(Mods::SHIFT, ReturnEnter);

const LOWER: Keycode = Keycode::Momentary(Layer::Lower);
const RAISE: Keycode = Keycode::Momentary(Layer::Raise);
const ADJ: Keycode = Keycode::Momentary(Layer::Adjust);

const fn k(key: Keyboard) -> Keycode {
    Keycode::Key(key)
}

const fn s(key: Keyboard) -> Keycode {
    Keycode::Chord(Mods::SHIFT, key)
}

const fn c(key: Keyboard) -> Keycode {
    Keycode::Chord(Mods::CONTROL, key)
}

const fn a(key: Keyboard) -> Keycode {
    Keycode::Chord(Mods::ALT, key)
}

const fn cs(key: Keyboard) -> Keycode {
    Keycode::Chord(Mods::CONTROL.union(Mods::SHIFT), key)
}

const fn ca(key: Keyboard) -> Keycode {
    Keycode::Chord(Mods::CONTROL.union(Mods::ALT), key)
}

const fn cu(key: CustomKey) -> Keycode {
    Keycode::Custom(key)
}

const fn sys(key: SystemKey) -> Keycode {
    Keycode::System(key)
}

/// All of the layers, indexed by [`Layer`].
#[rustfmt::skip]
pub static LAYERS: [Grid; NLAYERS] = [
    // Base: regular typing, pointer dance on the top left letter corner.
    [
        [k(Grave),         k(Keyboard1), k(Keyboard2), k(Keyboard3), k(Keyboard4), k(Keyboard5), k(Keyboard6), k(Keyboard7), k(Keyboard8), k(Keyboard9), k(Keyboard0),  k(Minus)],
        [PTR,              k(Q),         k(W),         k(E),         k(R),         k(T),         k(Y),         k(U),         k(I),         k(O),         k(P),          k(DeleteBackspace)],
        [k(Tab),           k(A),         k(S),         k(D),         k(F),         k(G),         k(H),         k(J),         k(K),         k(L),         k(Semicolon),  k(Apostrophe)],
        [SHESC,            k(Z),         k(X),         k(C),         k(V),         k(B),         k(N),         k(M),         k(Comma),     k(Dot),       k(ForwardSlash), SHENT],
        [k(LeftControl),   __,           k(LeftGUI),   k(LeftAlt),   LOWER,        k(Space),     __,           RAISE,        k(LeftArrow), k(DownArrow), k(UpArrow),    k(RightArrow)],
    ],
    // Game: no mod taps or dances in the way of WASD.
    [
        [k(Grave),         k(Keyboard1), k(Keyboard2), k(Keyboard3), k(Keyboard4), k(Keyboard5), k(Keyboard6), k(Keyboard7), k(Keyboard8), k(Keyboard9), k(Keyboard0),  k(Minus)],
        [k(Escape),        k(Q),         k(W),         k(E),         k(R),         k(T),         k(Y),         k(U),         k(I),         k(O),         k(P),          k(DeleteBackspace)],
        [k(Tab),           k(A),         k(S),         k(D),         k(F),         k(G),         k(H),         k(J),         k(K),         k(L),         k(Semicolon),  k(Apostrophe)],
        [k(LeftShift),     k(Z),         k(X),         k(C),         k(V),         k(B),         k(N),         k(M),         k(Comma),     k(Dot),       k(ForwardSlash), k(ReturnEnter)],
        [k(LeftControl),   __,           __,           k(LeftAlt),   LOWER,        k(Space),     __,           RAISE,        k(LeftArrow), k(DownArrow), k(UpArrow),    k(RightArrow)],
    ],
    // Lower: symbols on the right hand, navigation on the left.
    [
        [__,               __,           __,           __,           __,           __,           __,           s(Keyboard7), s(Keyboard8), s(Keyboard9), s(Keyboard0),  k(Equal)],
        [__,               __,           k(PageUp),    k(PageDown),  __,           __,           __,           s(Backslash), k(KeypadAdd), s(LeftBrace), s(RightBrace), k(DeleteForward)],
        [__,               k(Home),      c(LeftArrow), c(RightArrow), k(End),      __,           __,           __,           k(Equal),     k(LeftBrace), k(RightBrace), __],
        [TR,               __,           __,           __,           __,           __,           __,           __,           __,           cu(PointerGlyph), k(Backslash), TR],
        [TR,               __,           __,           TR,           TR,           __,           __,           ADJ,          k(Home),      k(PageDown),  k(PageUp),     k(End)],
    ],
    // Raise: function keys, arrows and the mouse wheel.
    [
        [__,               __,           __,           __,           __,           __,           __,           __,           __,           __,           __,            s(Minus)],
        [__,               __,           sys(MouseWheelUp), sys(MouseWheelDown), __, __,         __,           k(F1),        k(F2),        k(F3),        k(F4),         __],
        [__,               k(LeftArrow), k(DownArrow), k(UpArrow),   k(RightArrow), __,          __,           k(F5),        k(F6),        k(F7),        k(F8),         __],
        [__,               __,           __,           __,           __,           __,           __,           k(F9),        k(F10),       k(F11),       k(F12),        __],
        [TR,               __,           __,           TR,           ADJ,          __,           __,           TR,           __,           __,           k(VolumeDown), __],
    ],
    // Adjust: board controls, default layer select, music and auto shift.
    [
        [sys(Reset),       cu(SelectBase), cu(SelectGame), __,       __,           __,           __,           __,           __,           __,           __,            sys(EepromReset)],
        [__,               __,           __,           __,           __,           __,           __,           __,           __,           __,           __,            __],
        [__,               __,           __,           __,           __,           __,           __,           __,           __,           sys(MusicOn), sys(MusicOff), sys(MusicMode)],
        [__,               __,           __,           __,           __,           __,           __,           __,           __,           sys(AutoShiftOn), sys(AutoShiftOff), __],
        [__,               __,           __,           __,           TR,           __,           __,           TR,           __,           sys(AutoShiftDown), sys(AutoShiftUp), sys(AutoShiftReport)],
    ],
    // VisualStudio: debugging and navigation, held through the pointer key.
    [
        [__,               c(Minus),     cs(Minus),    __,           __,           __,           __,           __,           __,           __,           __,            __],
        [TR,               a(F12),       k(F12),       __,           __,           __,           __,           __,           __,           __,           __,            ca(Pause)],
        [__,               cu(PeekHeader), cu(OpenHeader), __,       __,           __,           __,           cs(B),        k(F5),        ca(F11),      __,            __],
        [s(F5),            __,           __,           __,           __,           __,           __,           __,           __,           __,           __,            k(F5)],
        [__,               __,           __,           __,           __,           __,           __,           __,           cs(F5),       STEP,         s(F11),        k(F10)],
    ],
];

/// The grid for one layer.
pub fn grid(layer: Layer) -> &'static Grid {
    &LAYERS[layer as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layers_are_fully_specified() {
        // A transparent cell on a default layer has nothing to fall through
        // to.
        for layer in [Layer::Base, Layer::Game] {
            for row in grid(layer) {
                for code in row {
                    assert_ne!(*code, Keycode::Trans, "transparent cell in {:?}", layer);
                }
            }
        }
    }

    #[test]
    fn adjust_is_reachable_from_both_thumb_layers() {
        let lower_has = grid(Layer::Lower)
            .iter()
            .flatten()
            .any(|code| *code == Keycode::Momentary(Layer::Adjust));
        let raise_has = grid(Layer::Raise)
            .iter()
            .flatten()
            .any(|code| *code == Keycode::Momentary(Layer::Adjust));
        assert!(lower_has && raise_has);
    }

    #[test]
    fn pointer_dance_sits_on_the_base_layer_only() {
        let count = LAYERS
            .iter()
            .flatten()
            .flatten()
            .filter(|code| **code == Keycode::Dance(DanceKey::Pointer))
            .count();
        assert_eq!(count, 1);
        assert_eq!(grid(Layer::Base)[1][0], Keycode::Dance(DanceKey::Pointer));
    }

    #[test]
    fn spacebar_column_is_unwired_everywhere() {
        for layer_grid in &LAYERS {
            assert_eq!(layer_grid[ROWS - 1][6], Keycode::None);
        }
    }
}
