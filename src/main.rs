//! Treasure hunt (default binary).
//!
//! Two walkers share a walled room: `@` moves with the arrow keys, `&` with
//! WASD. Somewhere in the room a treasure is buried; collectibles are never
//! drawn, so it stays hidden until a walker steps on it. Q or Ctrl+C quits.
//!
//! Loop settings come from `CGE_*` environment variables (see
//! `console_game::engine::config`); without them the room redraws on change.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use log::info;

use console_game::core::{Board, Entity, KeyBindings};
use console_game::engine::config::{ENV_DELAY_SECS, ENV_INTERVAL_UPDATING, ENV_SMART_UPDATING};
use console_game::engine::{ConsoleGame, LoopConfig};
use console_game::input::CrosstermInput;
use console_game::logging::init_logging;
use console_game::term::TerminalRenderer;
use console_game::types::{Direction, Position, Symbol, CTRL_C};

const ROOM: &str = "\
####################
#                  #
#                  #
#                  #
#                  #
#                  #
#                  #
#                  #
####################";

const DEFAULT_FRAME_MS: u64 = 33;

fn main() -> Result<()> {
    init_logging()?;

    let config = loop_config(|key| std::env::var(key).ok())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        Some(pos) => println!("Treasure found at {}!", pos),
        None => println!("Gave up."),
    }
    Ok(())
}

/// Loop settings from `lookup`, defaulting to smart updating and a ~30 fps
/// delay for whatever is left unset. Blank values count as unset.
fn loop_config(lookup: impl Fn(&str) -> Option<String>) -> Result<LoopConfig> {
    let is_set = |key: &str| lookup(key).map_or(false, |value| !value.trim().is_empty());

    let mut config = LoopConfig::from_lookup(&lookup)?;
    if !is_set(ENV_SMART_UPDATING) && !is_set(ENV_INTERVAL_UPDATING) {
        config = config.smart_updating(true);
    }
    if !is_set(ENV_DELAY_SECS) {
        config = config.delay(Duration::from_millis(DEFAULT_FRAME_MS));
    }
    Ok(config)
}

fn run(term: &mut TerminalRenderer, config: LoopConfig) -> Result<Option<Position>> {
    let pillars = [
        Entity::new_static('#', Position::new(6, 3)),
        Entity::new_static('#', Position::new(6, 4)),
        Entity::new_static('#', Position::new(13, 4)),
        Entity::new_static('#', Position::new(13, 5)),
    ];
    let board = Board::from_text(ROOM)?.with_statics(&pillars)?;

    let mut game = ConsoleGame::new(board, term, CrosstermInput::new());
    let hero = game.add_player('@', Position::new(1, 1), KeyBindings::arrows());
    let rival = game.add_player(
        '&',
        Position::new(18, 7),
        KeyBindings::empty()
            .bind(Direction::Up, 'w')
            .bind(Direction::Down, 's')
            .bind(Direction::Left, 'a')
            .bind(Direction::Right, 'd'),
    );

    let found = Rc::new(Cell::new(None));
    let on_found = Rc::clone(&found);
    game.world_mut().add_collectible(
        '$',
        Position::new(15, 2),
        Some(Box::new(move |pos: Position| on_found.set(Some(pos)))),
    );

    let stop_when_found = Rc::clone(&found);
    let config = config
        .on_key(move |world, symbol| {
            if matches!(symbol, Symbol::Char('q' | 'Q')) || symbol == Symbol::Char(CTRL_C as char) {
                world.stop();
                return Ok(());
            }
            world.apply_player_movement(hero, &symbol)?;
            world.apply_player_movement(rival, &symbol)?;
            Ok(())
        })
        .postupdate(move |world| {
            for id in [hero, rival] {
                let pos = world.player(id)?.position();
                let hits: Vec<_> = world.collectibles_at(pos).collect();
                for hit in hits {
                    world.collectible_mut(hit)?.collide();
                }
            }
            if let Some(pos) = stop_when_found.get() {
                info!("treasure found at {} after {} iterations", pos, world.iteration());
                world.stop();
            }
            Ok(())
        });

    game.run(config)?;
    Ok(found.get())
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_game::core::UpdateMode;

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn unset_environment_gets_walker_defaults() {
        let config = loop_config(env(&[])).unwrap();
        assert_eq!(config.update_mode().unwrap(), UpdateMode::Smart);
        assert_eq!(config.delay_duration(), Duration::from_millis(DEFAULT_FRAME_MS));
    }

    #[test]
    fn explicit_zero_delay_is_kept() {
        let config = loop_config(env(&[(ENV_DELAY_SECS, "0")])).unwrap();
        assert_eq!(config.delay_duration(), Duration::ZERO);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = loop_config(env(&[(ENV_SMART_UPDATING, " "), (ENV_DELAY_SECS, "")])).unwrap();
        assert_eq!(config.update_mode().unwrap(), UpdateMode::Smart);
        assert_eq!(config.delay_duration(), Duration::from_millis(DEFAULT_FRAME_MS));
    }

    #[test]
    fn explicit_mode_is_not_overridden() {
        let config = loop_config(env(&[(ENV_INTERVAL_UPDATING, "5")])).unwrap();
        assert!(matches!(config.update_mode().unwrap(), UpdateMode::Interval(n) if n.get() == 5));
    }
}
