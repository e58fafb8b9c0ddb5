//! Key mapping from terminal events to raw key bytes.
//!
//! The engine decodes a small byte protocol (see [`crate::poll`]). This module
//! produces that protocol from crossterm key events and from symbols.

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::{Symbol, ARROW_SENTINEL};

/// Raw bytes for a single key press.
pub type RawKey = ArrayVec<u8, 4>;

/// Encode a symbol as the bytes a terminal would send for it.
///
/// `Symbol::Null` encodes as the sentinel followed by an unused scan code, so it
/// decodes back to `Null`.
pub fn encode_symbol(symbol: Symbol) -> RawKey {
    let mut out = RawKey::new();
    match symbol {
        Symbol::Char(ch) => {
            let mut buf = [0u8; 4];
            for &b in ch.encode_utf8(&mut buf).as_bytes() {
                out.push(b);
            }
        }
        Symbol::Null => {
            out.push(ARROW_SENTINEL);
            out.push(0);
        }
        arrow => {
            out.push(ARROW_SENTINEL);
            // Arrows always have a scan code.
            out.push(arrow.scan_code().unwrap_or(0));
        }
    }
    out
}

/// Map a crossterm key event to raw key bytes.
///
/// Returns None for releases and for keys with no byte form. Characters whose
/// UTF-8 encoding starts with the arrow sentinel are dropped, since they would
/// decode as arrow sequences.
pub fn encode_key_event(key: KeyEvent) -> Option<RawKey> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let symbol = match key.code {
        KeyCode::Up => Symbol::Up,
        KeyCode::Down => Symbol::Down,
        KeyCode::Left => Symbol::Left,
        KeyCode::Right => Symbol::Right,

        // Control characters, e.g. Ctrl+C -> 0x03
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if !c.is_ascii_alphabetic() {
                return None;
            }
            Symbol::Char(((c.to_ascii_lowercase() as u8) & 0x1f) as char)
        }
        KeyCode::Char(c) => Symbol::Char(c),

        KeyCode::Enter => Symbol::Char('\r'),
        KeyCode::Tab => Symbol::Char('\t'),
        KeyCode::Backspace => Symbol::Char('\u{8}'),
        KeyCode::Esc => Symbol::Char('\u{1b}'),

        _ => return None,
    };

    let raw = encode_symbol(symbol);
    if matches!(symbol, Symbol::Char(_)) && raw.first() == Some(&ARROW_SENTINEL) {
        return None;
    }
    Some(raw)
}
