//! Console game loop.
//!
//! One iteration ([`ConsoleGame::step`]) runs, in order:
//!
//! 1. the `preupdate` hook
//! 2. if a key is waiting: decode it and pass it to the `on_key` hook
//! 3. (hooks move players through [`World::apply_player_movement`], which marks
//!    the frame dirty)
//! 4. if the scheduler says so: reset the board, clamp and draw every player,
//!    clear the screen and write the frame
//! 5. the `postupdate` hook
//! 6. the per-iteration delay
//! 7. advance the iteration counter
//!
//! Hook errors are not caught; they end the loop and surface from
//! [`ConsoleGame::step`] / [`ConsoleGame::start`].

use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::{debug, trace};

use crate::config::{Hooks, LoopConfig};
use crate::core::{Board, FrameScheduler, Grid, KeyBindings, UpdateMode};
use crate::error::EngineError;
use crate::input::{poll_input, InputSource};
use crate::term::RenderSink;
use crate::types::{LoopState, Position};
use crate::world::{PlayerId, World};

pub struct ConsoleGame<S, I> {
    board: Board,
    frame: Grid,
    text: String,
    world: World,
    hooks: Hooks,
    delay: Duration,
    sink: S,
    input: I,
}

impl<S: RenderSink, I: InputSource> ConsoleGame<S, I> {
    pub fn new(board: Board, sink: S, input: I) -> Self {
        let frame = board.reset();
        let text = String::with_capacity(board.height() * (board.width() + 1));
        Self {
            board,
            frame,
            text,
            world: World::new(),
            hooks: Hooks::default(),
            delay: Duration::ZERO,
            sink,
            input,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The grid drawn by the most recent redraw (the bare baseline before the
    /// first one).
    pub fn frame(&self) -> &Grid {
        &self.frame
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn state(&self) -> LoopState {
        self.world.state()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn update_mode(&self) -> UpdateMode {
        self.world.scheduler().mode()
    }

    /// Shorthand for [`World::add_player`].
    pub fn add_player(&mut self, glyph: char, start: Position, bindings: KeyBindings) -> PlayerId {
        self.world.add_player(glyph, start, bindings)
    }

    /// Apply a loop configuration and move to `Running`.
    ///
    /// Resets the iteration counter; the first smart-updating iteration always
    /// draws. A stopped game cannot be restarted.
    pub fn initialize(&mut self, config: LoopConfig) -> Result<(), EngineError> {
        if self.world.state() == LoopState::Stopped {
            return Err(EngineError::Stopped);
        }

        let (mode, delay, hooks) = config.into_parts()?;
        debug!("initializing loop: mode={:?} delay={:?}", mode, delay);

        *self.world.scheduler_mut() = FrameScheduler::new(mode);
        self.delay = delay;
        self.hooks = hooks;
        self.world.set_state(LoopState::Running);
        Ok(())
    }

    /// Run iterations until the game stops or a hook fails.
    pub fn start(&mut self) -> Result<()> {
        match self.world.state() {
            LoopState::Idle => return Err(EngineError::NotInitialized.into()),
            LoopState::Stopped => return Err(EngineError::Stopped.into()),
            LoopState::Running => {}
        }

        while self.world.is_running() {
            self.step()?;
        }
        debug!("loop exited after {} iterations", self.world.iteration());
        Ok(())
    }

    /// [`initialize`](Self::initialize) then [`start`](Self::start).
    pub fn run(&mut self, config: LoopConfig) -> Result<()> {
        self.initialize(config)?;
        self.start()
    }

    /// Stop the game and clear its configuration.
    pub fn stop(&mut self) {
        self.world.stop();
        self.settle_stop();
    }

    /// Run a single iteration.
    pub fn step(&mut self) -> Result<()> {
        match self.world.state() {
            LoopState::Idle => return Err(EngineError::NotInitialized.into()),
            LoopState::Stopped => return Err(EngineError::Stopped.into()),
            LoopState::Running => {}
        }

        if let Some(hook) = self.hooks.preupdate.as_mut() {
            hook(&mut self.world)?;
            self.settle_stop();
        }

        if self.input.key_waiting()? {
            let symbol = poll_input(&mut self.input)?;
            trace!("key {}", symbol);
            if let Some(hook) = self.hooks.on_key.as_mut() {
                hook(&mut self.world, symbol)?;
                self.settle_stop();
            }
        }

        if self.world.scheduler_mut().should_redraw() {
            self.redraw()?;
        }

        if let Some(hook) = self.hooks.postupdate.as_mut() {
            hook(&mut self.world)?;
            self.settle_stop();
        }

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        self.world.scheduler_mut().advance();
        Ok(())
    }

    /// Once stopped, drop hooks, delay and update mode so the rest of the
    /// current iteration runs unconfigured.
    fn settle_stop(&mut self) {
        if self.world.state() != LoopState::Stopped {
            return;
        }
        self.hooks.clear();
        self.delay = Duration::ZERO;
        let scheduler = self.world.scheduler_mut();
        scheduler.set_mode(UpdateMode::EveryFrame);
        scheduler.clear_dirty();
    }

    /// Rebuild the frame from the baseline, draw players and send it out.
    ///
    /// Each player is clamped back onto the board first and the corrected
    /// position is kept. A player that overflows on two axes is only corrected
    /// on one per redraw and is not drawn while it is still off the board.
    fn redraw(&mut self) -> Result<()> {
        self.board.reset_into(&mut self.frame);

        for player in self.world.players_mut() {
            let mut pos = player.position();
            if self.board.clamp(&mut pos) {
                trace!(
                    "clamped player {:?} from {} to {}",
                    player.glyph(),
                    player.position(),
                    pos
                );
                player.set_position(pos);
            }
            if !self.frame.set(pos, player.glyph()) {
                trace!("player {:?} still off the board at {}", player.glyph(), pos);
            }
        }

        self.text.clear();
        self.frame.render_into(&mut self.text);
        self.sink.clear_screen()?;
        self.sink.write_line(&self.text)?;
        Ok(())
    }
}

impl<S, I> std::fmt::Debug for ConsoleGame<S, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleGame")
            .field("board", &self.board)
            .field("world", &self.world)
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}
