//! Render sinks: where finished frames go.

use anyhow::Result;

/// Output side of the game loop.
///
/// Each redraw calls [`clear_screen`](RenderSink::clear_screen) once followed
/// by [`write_line`](RenderSink::write_line) with the whole rendered board.
pub trait RenderSink {
    fn clear_screen(&mut self) -> Result<()>;

    /// Write `text` followed by a line break. `text` may contain `'\n'`.
    fn write_line(&mut self, text: &str) -> Result<()>;
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn clear_screen(&mut self) -> Result<()> {
        (**self).clear_screen()
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        (**self).write_line(text)
    }
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn clear_screen(&mut self) -> Result<()> {
        (**self).clear_screen()
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        (**self).write_line(text)
    }
}

/// Records frames in memory.
///
/// A frame starts at every `clear_screen`; lines written afterwards are joined
/// with `'\n'`.
#[derive(Debug, Clone, Default)]
pub struct FrameCapture {
    frames: Vec<String>,
    clears: usize,
}

impl FrameCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// Number of redraws seen so far.
    pub fn redraws(&self) -> usize {
        self.clears
    }
}

impl RenderSink for FrameCapture {
    fn clear_screen(&mut self) -> Result<()> {
        self.clears += 1;
        self.frames.push(String::new());
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        if self.frames.is_empty() {
            self.frames.push(String::new());
        }
        if let Some(frame) = self.frames.last_mut() {
            if !frame.is_empty() {
                frame.push('\n');
            }
            frame.push_str(text);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_splits_frames_on_clear() {
        let mut sink = FrameCapture::new();
        sink.clear_screen().unwrap();
        sink.write_line("ab\ncd").unwrap();
        sink.clear_screen().unwrap();
        sink.write_line("one").unwrap();
        sink.write_line("two").unwrap();

        assert_eq!(sink.redraws(), 2);
        assert_eq!(sink.frames(), ["ab\ncd".to_string(), "one\ntwo".to_string()]);
        assert_eq!(sink.last_frame(), Some("one\ntwo"));
    }

    fn draw(mut sink: impl RenderSink) {
        sink.clear_screen().unwrap();
        sink.write_line("x").unwrap();
    }

    #[test]
    fn capture_through_mut_ref() {
        let mut sink = FrameCapture::new();
        draw(&mut sink);
        assert_eq!(sink.last_frame(), Some("x"));
    }
}
