//! World - the entities and loop state hooks are allowed to touch.
//!
//! The world owns the player and collectible lists (insertion order is
//! iteration and draw order), the frame scheduler and the loop state. Hooks get
//! `&mut World`, so they can move players, add entities or stop the loop
//! without any locking.

use crate::core::{CollideAction, Entity, FrameScheduler, KeyBindings};
use crate::error::EngineError;
use crate::types::{LoopState, MovementResult, Position, Symbol};

/// Handle to a player owned by a [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(usize);

impl PlayerId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Handle to a collectible owned by a [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectibleId(usize);

impl CollectibleId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct World {
    players: Vec<Entity>,
    collectibles: Vec<Entity>,
    scheduler: FrameScheduler,
    state: LoopState,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player and mark the frame dirty so it shows up.
    pub fn add_player(&mut self, glyph: char, start: Position, bindings: KeyBindings) -> PlayerId {
        self.push_player(Entity::player(glyph, start, bindings))
    }

    /// Add a pre-built player entity (e.g. one with a collision callback).
    pub fn add_player_entity(&mut self, entity: Entity) -> Result<PlayerId, EngineError> {
        if !entity.is_player() {
            return Err(EngineError::WrongKind {
                expected: "player",
                found: entity.kind().as_str(),
            });
        }
        Ok(self.push_player(entity))
    }

    fn push_player(&mut self, entity: Entity) -> PlayerId {
        log::debug!(
            "adding player {:?} at {}",
            entity.glyph(),
            entity.position()
        );
        self.players.push(entity);
        self.scheduler.mark_dirty();
        PlayerId(self.players.len() - 1)
    }

    /// Add a collectible. The engine never removes it; `action` is the game's
    /// pickup logic.
    pub fn add_collectible(
        &mut self,
        glyph: char,
        position: Position,
        action: Option<CollideAction>,
    ) -> CollectibleId {
        self.collectibles
            .push(Entity::collectible(glyph, position, action));
        CollectibleId(self.collectibles.len() - 1)
    }

    pub fn players(&self) -> &[Entity] {
        &self.players
    }

    pub fn collectibles(&self) -> &[Entity] {
        &self.collectibles
    }

    pub fn player(&self, id: PlayerId) -> Result<&Entity, EngineError> {
        self.players
            .get(id.0)
            .ok_or(EngineError::UnknownPlayer(id.0))
    }

    /// Mutable access to a player. Direct edits do not mark the frame dirty;
    /// call [`World::mark_dirty`] if smart updating should pick them up.
    pub fn player_mut(&mut self, id: PlayerId) -> Result<&mut Entity, EngineError> {
        self.players
            .get_mut(id.0)
            .ok_or(EngineError::UnknownPlayer(id.0))
    }

    pub fn collectible(&self, id: CollectibleId) -> Result<&Entity, EngineError> {
        self.collectibles
            .get(id.0)
            .ok_or(EngineError::UnknownCollectible(id.0))
    }

    pub fn collectible_mut(&mut self, id: CollectibleId) -> Result<&mut Entity, EngineError> {
        self.collectibles
            .get_mut(id.0)
            .ok_or(EngineError::UnknownCollectible(id.0))
    }

    /// Collectibles sitting on `position`, in insertion order.
    pub fn collectibles_at(&self, position: Position) -> impl Iterator<Item = CollectibleId> + '_ {
        self.collectibles
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.position() == position)
            .map(|(i, _)| CollectibleId(i))
    }

    /// Feed `symbol` to a player.
    ///
    /// Always marks the frame dirty, whether or not the player moved.
    pub fn apply_player_movement(
        &mut self,
        id: PlayerId,
        symbol: &Symbol,
    ) -> Result<MovementResult, EngineError> {
        self.scheduler.mark_dirty();
        let player = self
            .players
            .get_mut(id.0)
            .ok_or(EngineError::UnknownPlayer(id.0))?;
        Ok(player.resolve_movement(symbol))
    }

    /// Ask for a redraw on the next smart-updating iteration.
    pub fn mark_dirty(&mut self) {
        self.scheduler.mark_dirty();
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub(crate) fn scheduler_mut(&mut self) -> &mut FrameScheduler {
        &mut self.scheduler
    }

    pub(crate) fn players_mut(&mut self) -> &mut [Entity] {
        &mut self.players
    }

    /// Iterations completed since the loop was initialized.
    pub fn iteration(&self) -> u64 {
        self.scheduler.iteration()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub(crate) fn set_state(&mut self, state: LoopState) {
        if self.state != state {
            log::debug!("loop {} -> {}", self.state.as_str(), state.as_str());
            self.state = state;
        }
    }

    /// Stop the loop after the current iteration.
    pub fn stop(&mut self) {
        self.set_state(LoopState::Stopped);
    }
}
