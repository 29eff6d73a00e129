//! Terminal Columns runner (default binary).
//!
//! The core is purely turn-based; this loop owns all timing. It polls input
//! between gravity ticks, and after each freeze drives the
//! detect → mark → flash → clear → settle cascade until detection comes back
//! empty, then spawns the next faller.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_columns::core::{GameError, GameState};
use tui_columns::input::{handle_key_event, should_quit};
use tui_columns::term::{GameView, TerminalRenderer, Viewport};
use tui_columns::types::{BOARD_COLS, FLASH_CYCLES, FLASH_MS, TICK_MS, VISIBLE_ROWS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);

    let mut game = GameState::new(VISIBLE_ROWS, BOARD_COLS, seed);
    game.spawn_random_faller()?;

    let view = GameView::default();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS);

    loop {
        draw(term, &view, &game)?;

        if game.is_game_over() {
            return wait_for_any_key();
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(cmd) = handle_key_event(key) {
                        // Blocked moves are no-ops; a rotate with no faller
                        // can land here between freeze and respawn.
                        match game.apply_command(cmd) {
                            Ok(()) | Err(GameError::InvalidMove(_)) => {
                                // A soft drop can freeze the piece; flush its
                                // matches now instead of waiting for the tick.
                                if game.faller().is_none() {
                                    run_cascades(term, &view, &mut game)?;
                                }
                            }
                            // Same terminal outcome as a tick-driven freeze:
                            // loop back around to the overlay.
                            Err(GameError::GameOver) => continue,
                            Err(err) => return Err(err.into()),
                        }
                    }
                }
            }
        }

        // Gravity tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            match game.advance_tick() {
                Ok(()) => {}
                Err(GameError::GameOver) => continue,
                Err(err) => return Err(err.into()),
            }

            run_cascades(term, &view, &mut game)?;

            if game.faller().is_none() && !game.is_game_over() {
                game.spawn_random_faller()?;
            }
        }
    }
}

/// Clear and settle matches repeatedly until the grid is quiet, flashing
/// each match set before it disappears.
fn run_cascades(term: &mut TerminalRenderer, view: &GameView, game: &mut GameState) -> Result<()> {
    loop {
        let matches = game.detect_matches();
        if matches.is_empty() {
            return Ok(());
        }

        for _ in 0..FLASH_CYCLES {
            game.mark_matches(&matches);
            draw(term, view, game)?;
            thread::sleep(Duration::from_millis(FLASH_MS));

            game.unmark_matches(&matches);
            draw(term, view, game)?;
            thread::sleep(Duration::from_millis(FLASH_MS));
        }

        game.mark_matches(&matches);
        game.clear_marked();
        game.settle();
    }
}

fn draw(term: &mut TerminalRenderer, view: &GameView, game: &GameState) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let fb = view.render(game, Viewport::new(w, h));
    term.draw(&fb)
}

fn wait_for_any_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
