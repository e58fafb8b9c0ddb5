//! TerminalRenderer: writes frames to a real terminal.
//!
//! This module intentionally keeps the drawing API small: clear the screen and
//! print the board. Output is queued into a byte buffer and flushed once per
//! call so a frame reaches the terminal in a single write.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::sink::RenderSink;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    active: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
            active: false,
        }
    }

    /// Switch to raw mode and the alternate screen. Safe to call more than once.
    pub fn enter(&mut self) -> Result<()> {
        if self.active {
            return Ok(());
        }
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.active = true;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        self.active = false;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        // Always try to restore terminal state.
        let _ = self.exit();
    }
}

impl RenderSink for TerminalRenderer {
    fn clear_screen(&mut self) -> Result<()> {
        self.buf.clear();
        encode_clear_into(&mut self.buf)?;
        self.flush_buf()
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        encode_line_into(text, &mut self.buf)?;
        self.flush_buf()
    }
}

/// Encode a full-screen clear into `out`.
pub fn encode_clear_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    Ok(())
}

/// Encode `text` plus a line break into `out`.
///
/// Raw mode does not translate `'\n'`, so every line ends in `"\r\n"`.
pub fn encode_line_into(text: &str, out: &mut Vec<u8>) -> Result<()> {
    for line in text.split('\n') {
        out.queue(Print(line))?;
        out.queue(Print("\r\n"))?;
    }
    Ok(())
}
