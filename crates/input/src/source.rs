//! Raw input sources.
//!
//! An [`InputSource`] hands out key bytes one at a time and can say, without
//! blocking, whether a key is waiting.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{anyhow, Result};
use arrayvec::ArrayVec;
use crossterm::event::{self, Event};

use crate::map::{encode_key_event, encode_symbol};
use crate::types::Symbol;

pub trait InputSource {
    /// True if at least one byte can be read. Never blocks.
    fn key_waiting(&mut self) -> Result<bool>;

    /// Read the next byte. May block briefly; only called after
    /// [`key_waiting`](InputSource::key_waiting) returned true.
    fn read_byte(&mut self) -> Result<u8>;
}

impl<S: InputSource + ?Sized> InputSource for &mut S {
    fn key_waiting(&mut self) -> Result<bool> {
        (**self).key_waiting()
    }

    fn read_byte(&mut self) -> Result<u8> {
        (**self).read_byte()
    }
}

/// In-memory byte queue.
///
/// Used by tests, replays and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    bytes: VecDeque<u8>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bytes(bytes: impl IntoIterator<Item = u8>) -> Self {
        Self {
            bytes: bytes.into_iter().collect(),
        }
    }

    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut input = Self::new();
        for symbol in symbols {
            input.push_symbol(symbol);
        }
        input
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend(bytes.iter().copied());
    }

    pub fn push_symbol(&mut self, symbol: Symbol) {
        self.push_bytes(&encode_symbol(symbol));
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn key_waiting(&mut self) -> Result<bool> {
        Ok(!self.bytes.is_empty())
    }

    fn read_byte(&mut self) -> Result<u8> {
        self.bytes
            .pop_front()
            .ok_or_else(|| anyhow!("scripted input exhausted"))
    }
}

/// Keyboard input from the real terminal via crossterm.
///
/// Key presses are translated into the raw byte protocol as they are read.
/// The terminal must be in raw mode (see `TerminalRenderer::enter`).
#[derive(Debug, Default)]
pub struct CrosstermInput {
    pending: ArrayVec<u8, 8>,
}

impl CrosstermInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer_event(&mut self, ev: Event) {
        if let Event::Key(key) = ev {
            if let Some(raw) = encode_key_event(key) {
                for b in raw {
                    // The buffer only ever holds one key; overflow would mean
                    // read_byte was skipped, so drop rather than panic.
                    let _ = self.pending.try_push(b);
                }
            }
        }
    }
}

impl InputSource for CrosstermInput {
    fn key_waiting(&mut self) -> Result<bool> {
        while self.pending.is_empty() {
            if !event::poll(Duration::ZERO)? {
                return Ok(false);
            }
            let ev = event::read()?;
            self.buffer_event(ev);
        }
        Ok(true)
    }

    fn read_byte(&mut self) -> Result<u8> {
        while self.pending.is_empty() {
            let ev = event::read()?;
            self.buffer_event(ev);
        }
        self.pending
            .pop_at(0)
            .ok_or_else(|| anyhow!("no key buffered"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poll::poll_input;

    #[test]
    fn scripted_input_reports_waiting_until_drained() {
        let mut input = ScriptedInput::from_bytes(*b"ab");
        assert!(input.key_waiting().unwrap());
        assert_eq!(input.read_byte().unwrap(), b'a');
        assert_eq!(input.read_byte().unwrap(), b'b');
        assert!(!input.key_waiting().unwrap());
        assert!(input.read_byte().is_err());
    }

    #[test]
    fn scripted_symbols_decode_back() {
        let symbols = [
            Symbol::Up,
            Symbol::Char('q'),
            Symbol::Left,
            Symbol::Null,
            Symbol::Char('ß'),
        ];
        let mut input = ScriptedInput::from_symbols(symbols);
        for expected in symbols {
            assert!(input.key_waiting().unwrap());
            assert_eq!(poll_input(&mut input).unwrap(), expected);
        }
        assert!(input.is_empty());
    }

    #[test]
    fn crossterm_input_buffers_key_bytes() {
        use crossterm::event::{KeyCode, KeyEvent};

        let mut input = CrosstermInput::new();
        input.buffer_event(Event::Key(KeyEvent::from(KeyCode::Left)));
        input.buffer_event(Event::FocusGained);
        assert_eq!(poll_input(&mut input).unwrap(), Symbol::Left);
        assert!(input.pending.is_empty());
    }
}
