//! String typer.
//!
//! Turns short ASCII strings into simulated keypresses, one press/release
//! pair per character, assuming the host uses a US layout.

use usbd_human_interface_device::page::Keyboard;

use crate::{Event, EventQueue, KeyAction, Mods};

/// Push the key actions that type `text`.  Characters with no key behind
/// them are skipped.
pub fn type_str(events: &mut dyn EventQueue, text: &str) {
    for ch in text.chars() {
        if let Some((mods, key)) = key_for(ch) {
            events.push(Event::Key(KeyAction::KeyPress(key, mods)));
            events.push(Event::Key(KeyAction::KeyRelease));
        }
    }
}

/// The key, and the modifiers to hold, that produce `ch`.
fn key_for(ch: char) -> Option<(Mods, Keyboard)> {
    let n = |key| Some((Mods::empty(), key));
    let s = |key| Some((Mods::SHIFT, key));
    match ch {
        'a'..='z' => Some((Mods::empty(), (Keyboard::A as u8 + (ch as u8 - b'a')).into())),
        'A'..='Z' => Some((Mods::SHIFT, (Keyboard::A as u8 + (ch as u8 - b'A')).into())),
        '1'..='9' => Some((
            Mods::empty(),
            (Keyboard::Keyboard1 as u8 + (ch as u8 - b'1')).into(),
        )),
        '0' => n(Keyboard::Keyboard0),
        ' ' => n(Keyboard::Space),
        '\n' => n(Keyboard::ReturnEnter),
        '\t' => n(Keyboard::Tab),
        '!' => s(Keyboard::Keyboard1),
        '@' => s(Keyboard::Keyboard2),
        '#' => s(Keyboard::Keyboard3),
        '$' => s(Keyboard::Keyboard4),
        '%' => s(Keyboard::Keyboard5),
        '^' => s(Keyboard::Keyboard6),
        '&' => s(Keyboard::Keyboard7),
        '*' => s(Keyboard::Keyboard8),
        '(' => s(Keyboard::Keyboard9),
        ')' => s(Keyboard::Keyboard0),
        '-' => n(Keyboard::Minus),
        '_' => s(Keyboard::Minus),
        '=' => n(Keyboard::Equal),
        '+' => s(Keyboard::Equal),
        '[' => n(Keyboard::LeftBrace),
        ']' => n(Keyboard::RightBrace),
        '{' => s(Keyboard::LeftBrace),
        '}' => s(Keyboard::RightBrace),
        '\\' => n(Keyboard::Backslash),
        '|' => s(Keyboard::Backslash),
        ';' => n(Keyboard::Semicolon),
        ':' => s(Keyboard::Semicolon),
        '\'' => n(Keyboard::Apostrophe),
        '"' => s(Keyboard::Apostrophe),
        '`' => n(Keyboard::Grave),
        '~' => s(Keyboard::Grave),
        ',' => n(Keyboard::Comma),
        '<' => s(Keyboard::Comma),
        '.' => n(Keyboard::Dot),
        '>' => s(Keyboard::Dot),
        '/' => n(Keyboard::ForwardSlash),
        '?' => s(Keyboard::ForwardSlash),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_glyph() {
        let mut events: Vec<Event> = Vec::new();
        type_str(&mut events, "->");
        assert_eq!(
            events,
            vec![
                Event::Key(KeyAction::KeyPress(Keyboard::Minus, Mods::empty())),
                Event::Key(KeyAction::KeyRelease),
                Event::Key(KeyAction::KeyPress(Keyboard::Dot, Mods::SHIFT)),
                Event::Key(KeyAction::KeyRelease),
            ]
        );
    }

    #[test]
    fn letters_and_case() {
        assert_eq!(key_for('a'), Some((Mods::empty(), Keyboard::A)));
        assert_eq!(key_for('z'), Some((Mods::empty(), Keyboard::Z)));
        assert_eq!(key_for('Q'), Some((Mods::SHIFT, Keyboard::Q)));
        assert_eq!(key_for('5'), Some((Mods::empty(), Keyboard::Keyboard5)));
        assert_eq!(key_for('0'), Some((Mods::empty(), Keyboard::Keyboard0)));
    }

    #[test]
    fn unsupported_characters_are_skipped() {
        let mut events: Vec<Event> = Vec::new();
        type_str(&mut events, "\u{e9}\u{7f}");
        assert!(events.is_empty());
    }
}
