use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use anyhow::Result;

use console_game::core::{Board, KeyBindings};
use console_game::engine::{ConsoleGame, LoopConfig};
use console_game::input::ScriptedInput;
use console_game::term::RenderSink;
use console_game::types::{Position, Symbol};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[derive(Default)]
struct CountingSink {
    clears: usize,
    bytes: usize,
}

impl RenderSink for CountingSink {
    fn clear_screen(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.bytes += text.len();
        Ok(())
    }
}

#[test]
fn game_step_is_allocation_free_after_warmup() {
    let board = Board::filled(40, 20, '.').unwrap();
    let mut input = ScriptedInput::new();
    for i in 0..401 {
        input.push_symbol(if i % 2 == 0 { Symbol::Right } else { Symbol::Left });
    }

    let mut game = ConsoleGame::new(board, CountingSink::default(), input);
    let id = game.add_player('@', Position::new(10, 10), KeyBindings::arrows());
    game.initialize(LoopConfig::new().on_key(move |world, symbol| {
        world.apply_player_movement(id, &symbol)?;
        Ok(())
    }))
    .unwrap();

    // Warm-up (first redraw sizes the frame text).
    game.step().unwrap();

    let allocs = with_alloc_counting(|| {
        for _ in 0..400 {
            game.step().unwrap();
        }
    });

    assert!(allocs == 0);
    assert_eq!(game.sink().clears, 401);
    assert_eq!(game.world().player(id).unwrap().position(), Position::new(10, 10));
}
