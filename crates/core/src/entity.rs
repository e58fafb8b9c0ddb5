//! Entity model - everything that can sit on the board
//!
//! Entities share a glyph, a position, a collideable flag and an optional
//! collision callback. What an entity can do is decided by its [`EntityKind`]:
//!
//! - **Static**: terrain; never moves and lives in the board baseline
//! - **Dynamic**: moves via [`Entity::translate`]
//! - **Collectible**: fixed position with a pickup callback
//! - **Player**: dynamic, plus [`KeyBindings`] that turn symbols into movement
//!
//! Movement never checks bounds. The game loop clamps positions when it draws.

use std::fmt;

use crate::types::{Direction, MovementResult, Position, Symbol};

/// Callback run when the game author reports a collision with an entity.
///
/// Receives the entity's position at the time of the collision.
pub type CollideAction = Box<dyn FnMut(Position)>;

/// Symbols bound to each movement direction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyBindings {
    up: Vec<Symbol>,
    down: Vec<Symbol>,
    left: Vec<Symbol>,
    right: Vec<Symbol>,
}

impl KeyBindings {
    /// No bindings at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Arrow keys only.
    pub fn arrows() -> Self {
        Self::empty()
            .bind(Direction::Up, Symbol::Up)
            .bind(Direction::Down, Symbol::Down)
            .bind(Direction::Left, Symbol::Left)
            .bind(Direction::Right, Symbol::Right)
    }

    /// Arrow keys plus lowercase WASD.
    pub fn arrows_and_wasd() -> Self {
        Self::arrows()
            .bind(Direction::Up, 'w')
            .bind(Direction::Down, 's')
            .bind(Direction::Left, 'a')
            .bind(Direction::Right, 'd')
    }

    /// Add `symbol` to the key-set of `direction`.
    pub fn bind(mut self, direction: Direction, symbol: impl Into<Symbol>) -> Self {
        self.keys_mut(direction).push(symbol.into());
        self
    }

    pub fn keys(&self, direction: Direction) -> &[Symbol] {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    fn keys_mut(&mut self, direction: Direction) -> &mut Vec<Symbol> {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    /// Direction bound to `symbol`, if any.
    ///
    /// Key-sets are checked up, left, down, right; when a symbol is bound to
    /// more than one direction the first match wins. Overlapping bindings are
    /// allowed but discouraged.
    pub fn direction_for(&self, symbol: &Symbol) -> Option<Direction> {
        [
            Direction::Up,
            Direction::Left,
            Direction::Down,
            Direction::Right,
        ]
        .into_iter()
        .find(|&direction| self.keys(direction).contains(symbol))
    }
}

/// Variant-specific part of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKind {
    Static,
    Dynamic,
    Collectible,
    Player(KeyBindings),
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Static => "static",
            EntityKind::Dynamic => "dynamic",
            EntityKind::Collectible => "collectible",
            EntityKind::Player(_) => "player",
        }
    }
}

/// A glyph placed on the board.
pub struct Entity {
    glyph: char,
    position: Position,
    collideable: bool,
    on_collide: Option<CollideAction>,
    kind: EntityKind,
}

impl Entity {
    fn with_kind(glyph: char, position: Position, collideable: bool, kind: EntityKind) -> Self {
        Self {
            glyph,
            position,
            collideable,
            on_collide: None,
            kind,
        }
    }

    /// Terrain that never moves.
    pub fn new_static(glyph: char, position: Position) -> Self {
        Self::with_kind(glyph, position, true, EntityKind::Static)
    }

    pub fn dynamic(glyph: char, position: Position) -> Self {
        Self::with_kind(glyph, position, false, EntityKind::Dynamic)
    }

    /// A pickup. The core never removes it; `action` decides what happens.
    pub fn collectible(glyph: char, position: Position, action: Option<CollideAction>) -> Self {
        let mut entity = Self::with_kind(glyph, position, true, EntityKind::Collectible);
        entity.on_collide = action;
        entity
    }

    pub fn player(glyph: char, position: Position, bindings: KeyBindings) -> Self {
        Self::with_kind(glyph, position, false, EntityKind::Player(bindings))
    }

    pub fn with_collideable(mut self, collideable: bool) -> Self {
        self.collideable = collideable;
        self
    }

    pub fn with_on_collide(mut self, action: CollideAction) -> Self {
        self.on_collide = Some(action);
        self
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Overwrite the position. Used by the game loop to persist clamping.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn is_collideable(&self) -> bool {
        self.collideable
    }

    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    pub fn is_static(&self) -> bool {
        matches!(self.kind, EntityKind::Static)
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, EntityKind::Player(_))
    }

    pub fn key_bindings(&self) -> Option<&KeyBindings> {
        match &self.kind {
            EntityKind::Player(bindings) => Some(bindings),
            _ => None,
        }
    }

    /// Move by `(dx, dy)` without bounds checking.
    ///
    /// Only dynamic entities and players move; returns false (and leaves the
    /// position alone) for statics and collectibles.
    pub fn translate(&mut self, dx: i32, dy: i32) -> bool {
        match self.kind {
            EntityKind::Dynamic | EntityKind::Player(_) => {
                self.position.translate(dx, dy);
                true
            }
            EntityKind::Static | EntityKind::Collectible => false,
        }
    }

    /// Apply the movement bound to `symbol`.
    ///
    /// Non-player entities always ignore input.
    pub fn resolve_movement(&mut self, symbol: &Symbol) -> MovementResult {
        let direction = match &self.kind {
            EntityKind::Player(bindings) => bindings.direction_for(symbol),
            _ => None,
        };

        match direction {
            Some(direction) => {
                let (dx, dy) = direction.delta();
                self.translate(dx, dy);
                MovementResult::Moved
            }
            None => MovementResult::Ignored,
        }
    }

    /// Run the collision callback, if any.
    ///
    /// Returns false when the entity is not collideable or has no callback.
    /// The engine never calls this on its own; games decide what counts as a
    /// collision.
    pub fn collide(&mut self) -> bool {
        if !self.collideable {
            return false;
        }
        let position = self.position;
        match self.on_collide.as_mut() {
            Some(action) => {
                action(position);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("glyph", &self.glyph)
            .field("position", &self.position)
            .field("collideable", &self.collideable)
            .field("on_collide", &self.on_collide.is_some())
            .field("kind", &self.kind)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn player_moves_with_fixed_deltas() {
        let mut p = Entity::player('@', Position::new(2, 2), KeyBindings::arrows_and_wasd());

        assert_eq!(p.resolve_movement(&Symbol::Up), MovementResult::Moved);
        assert_eq!(p.position(), Position::new(2, 1));
        assert_eq!(p.resolve_movement(&Symbol::Char('d')), MovementResult::Moved);
        assert_eq!(p.position(), Position::new(3, 1));
        assert_eq!(p.resolve_movement(&Symbol::Down), MovementResult::Moved);
        assert_eq!(p.position(), Position::new(3, 2));
        assert_eq!(p.resolve_movement(&Symbol::Char('a')), MovementResult::Moved);
        assert_eq!(p.position(), Position::new(2, 2));
    }

    #[test]
    fn unbound_symbol_is_ignored() {
        let mut p = Entity::player('@', Position::new(1, 1), KeyBindings::arrows());
        assert_eq!(p.resolve_movement(&Symbol::Char('w')), MovementResult::Ignored);
        assert_eq!(p.resolve_movement(&Symbol::Null), MovementResult::Ignored);
        assert_eq!(p.position(), Position::new(1, 1));
    }

    #[test]
    fn overlapping_bindings_resolve_up_left_down_right() {
        let bindings = KeyBindings::empty()
            .bind(Direction::Right, 'x')
            .bind(Direction::Down, 'x')
            .bind(Direction::Left, 'x');
        assert_eq!(bindings.direction_for(&Symbol::Char('x')), Some(Direction::Left));

        let bindings = bindings.bind(Direction::Up, 'x');
        assert_eq!(bindings.direction_for(&Symbol::Char('x')), Some(Direction::Up));
    }

    #[test]
    fn translate_has_no_bounds_checking() {
        let mut e = Entity::dynamic('*', Position::new(0, 0));
        assert!(e.translate(-5, 100));
        assert_eq!(e.position(), Position::new(-5, 100));
    }

    #[test]
    fn statics_and_collectibles_do_not_move() {
        let mut wall = Entity::new_static('#', Position::new(1, 1));
        assert!(!wall.translate(1, 0));
        assert_eq!(wall.position(), Position::new(1, 1));

        let mut coin = Entity::collectible('$', Position::new(2, 2), None);
        assert!(!coin.translate(0, 1));
        assert_eq!(coin.resolve_movement(&Symbol::Up), MovementResult::Ignored);
        assert_eq!(coin.position(), Position::new(2, 2));
    }

    #[test]
    fn collide_runs_callback_with_position() {
        let hit = Rc::new(Cell::new(None::<Position>));
        let seen = Rc::clone(&hit);
        let mut coin = Entity::collectible(
            '$',
            Position::new(3, 4),
            Some(Box::new(move |pos: Position| seen.set(Some(pos)))),
        );

        assert!(coin.collide());
        assert_eq!(hit.get(), Some(Position::new(3, 4)));

        let mut rock = Entity::dynamic('o', Position::new(0, 0));
        assert!(!rock.collide());
    }

    #[test]
    fn collideable_defaults_follow_kind() {
        assert!(Entity::new_static('#', Position::new(0, 0)).is_collideable());
        assert!(Entity::collectible('$', Position::new(0, 0), None).is_collideable());
        assert!(!Entity::dynamic('*', Position::new(0, 0)).is_collideable());
        assert!(!Entity::player('@', Position::new(0, 0), KeyBindings::arrows()).is_collideable());
    }

    #[test]
    fn non_collideable_entity_skips_callback() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut ghost = Entity::collectible(
            '$',
            Position::new(1, 1),
            Some(Box::new(move |_: Position| counter.set(counter.get() + 1))),
        )
        .with_collideable(false);

        assert!(!ghost.collide());
        assert_eq!(calls.get(), 0);

        let mut ghost = ghost.with_collideable(true);
        assert!(ghost.collide());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn debug_output_hides_callback() {
        let e = Entity::dynamic('*', Position::new(0, 0)).with_on_collide(Box::new(|_: Position| {}));
        let dbg = format!("{:?}", e);
        assert!(dbg.contains("on_collide: true"));
    }
}
