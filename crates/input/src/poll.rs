//! Raw key decoding.

use anyhow::Result;

use crate::source::InputSource;
use crate::types::{Symbol, ARROW_SENTINEL};

/// Read one key press from `source` and decode it.
///
/// Only call this after [`InputSource::key_waiting`] reported true.
///
/// - `ARROW_SENTINEL` + scan code: an arrow symbol, or `Null` for an unknown
///   scan code. A sentinel with nothing after it is `Null`.
/// - Anything else: a literal character. Multi-byte UTF-8 characters pull their
///   continuation bytes; bytes that do not decode yield `Null`.
pub fn poll_input<S: InputSource + ?Sized>(source: &mut S) -> Result<Symbol> {
    let first = source.read_byte()?;

    if first == ARROW_SENTINEL {
        // A truncated sequence must not block the loop.
        if !source.key_waiting()? {
            return Ok(Symbol::Null);
        }
        let code = source.read_byte()?;
        return Ok(Symbol::from_scan_code(code));
    }

    let len = utf8_len(first);
    match len {
        0 => Ok(Symbol::Null),
        1 => Ok(Symbol::Char(first as char)),
        _ => {
            let mut buf = [0u8; 4];
            buf[0] = first;
            for slot in buf.iter_mut().take(len).skip(1) {
                // A truncated sequence must not block the loop.
                if !source.key_waiting()? {
                    return Ok(Symbol::Null);
                }
                *slot = source.read_byte()?;
            }
            Ok(std::str::from_utf8(&buf[..len])
                .ok()
                .and_then(|s| s.chars().next())
                .map(Symbol::Char)
                .unwrap_or(Symbol::Null))
        }
    }
}

/// Length of the UTF-8 sequence started by `lead`, or 0 if it cannot start one.
fn utf8_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
