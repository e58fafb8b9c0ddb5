//! Frame scheduler - decides whether a loop iteration redraws.

use std::num::NonZeroU32;

/// How often the game loop redraws the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// Redraw on every iteration.
    #[default]
    EveryFrame,
    /// Redraw only when something marked the scheduler dirty.
    Smart,
    /// Redraw on every Nth iteration, starting with iteration 0.
    Interval(NonZeroU32),
}

impl UpdateMode {
    /// Resolve the requested smart/interval flags into one mode.
    ///
    /// Asking for both logs a warning and keeps smart updating.
    pub fn resolve(smart: bool, interval: Option<NonZeroU32>) -> Self {
        match (smart, interval) {
            (true, Some(n)) => {
                log::warn!(
                    "both smart and interval({}) updating requested; only smart updating will be used",
                    n
                );
                UpdateMode::Smart
            }
            (true, None) => UpdateMode::Smart,
            (false, Some(n)) => UpdateMode::Interval(n),
            (false, None) => UpdateMode::EveryFrame,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FrameScheduler {
    mode: UpdateMode,
    pending_update: bool,
    iteration: u64,
}

impl FrameScheduler {
    /// New scheduler at iteration 0.
    ///
    /// Starts dirty so smart updating draws the initial board.
    pub fn new(mode: UpdateMode) -> Self {
        Self {
            mode,
            pending_update: true,
            iteration: 0,
        }
    }

    pub fn mode(&self) -> UpdateMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: UpdateMode) {
        self.mode = mode;
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn is_dirty(&self) -> bool {
        self.pending_update
    }

    /// Record that rendered output may have changed.
    pub fn mark_dirty(&mut self) {
        self.pending_update = true;
    }

    pub fn clear_dirty(&mut self) {
        self.pending_update = false;
    }

    /// Decide whether the current iteration redraws.
    ///
    /// - `EveryFrame`: always.
    /// - `Smart`: when dirty; the flag is cleared on a yes.
    /// - `Interval(n)`: when `iteration % n == 0`.
    pub fn should_redraw(&mut self) -> bool {
        match self.mode {
            UpdateMode::EveryFrame => true,
            UpdateMode::Smart => {
                if self.pending_update {
                    self.pending_update = false;
                    true
                } else {
                    false
                }
            }
            UpdateMode::Interval(n) => self.iteration % u64::from(n.get()) == 0,
        }
    }

    /// Move to the next iteration.
    pub fn advance(&mut self) {
        self.iteration += 1;
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(UpdateMode::default())
    }
}
