//! Terminal blockfall runner (default binary).
//!
//! Event loop: render, poll input with a timeout that expires at the next
//! gravity step, then tick. The gravity interval comes from the engine and
//! shortens as the level climbs.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::Game;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::store::{default_score_path, ScoreStore};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{Command, Phase};

fn main() -> Result<()> {
    let mut store = ScoreStore::open(default_score_path())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut store);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

/// Time left until the gravity deadline; zero once it has passed.
fn poll_timeout(drop_duration: Duration, since_last_drop: Duration) -> Duration {
    drop_duration.saturating_sub(since_last_drop)
}

fn run(term: &mut TerminalRenderer, store: &mut ScoreStore) -> Result<()> {
    let mut game = Game::new(time_seed());
    let view = GameView::default();
    let mut fb = blockfall::term::FrameBuffer::new(0, 0);

    let mut last_drop = Instant::now();
    let mut score_recorded = false;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), store.best(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next gravity step.
        let drop_duration = Duration::from_millis(u64::from(game.drop_interval_ms()));
        let timeout = poll_timeout(drop_duration, last_drop.elapsed());

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key, game.phase()) {
                        if command == Command::Start {
                            last_drop = Instant::now();
                            score_recorded = false;
                        }
                        game.apply(command);
                    }
                }
            }
        }

        // Gravity. The timer re-arms while not running so a pause does not
        // bank a pending drop.
        if game.phase() != Phase::Running {
            last_drop = Instant::now();
        } else if last_drop.elapsed() >= drop_duration {
            last_drop = Instant::now();
            game.tick();
        }

        if game.phase() == Phase::Over && !score_recorded {
            score_recorded = true;
            store.record(game.score())?;
        }
    }
}
