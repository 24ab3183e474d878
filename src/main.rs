//! Terminal driver (default binary).
//!
//! Renders the session with crossterm, maps keys to engine calls and runs
//! gravity at the session's current speed.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetris_rules::event_log::EventLog;
use tetris_rules::input::{handle_key_event, should_quit};
use tetris_rules::term::{SessionView, TerminalRenderer};
use tetris_rules::{records, App, Config};

fn main() -> Result<()> {
    let config = Config::from_env();

    let mut warnings = Vec::new();
    let high_score = records::load(&config.records_path).unwrap_or_else(|e| {
        warnings.push(format!("{:#}", e));
        Default::default()
    });
    let log = match config.log_path.as_deref() {
        Some(path) => EventLog::open(path).unwrap_or_else(|e| {
            warnings.push(format!("{:#}", e));
            EventLog::disabled()
        }),
        None => EventLog::disabled(),
    };

    let mut app = App::new(config, high_score, log);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();

    warnings.extend(app.take_warnings());
    for warning in warnings {
        eprintln!("[Records] {}", warning);
    }
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let view = SessionView::default();
    let mut last_tick = Instant::now();

    loop {
        let frame = view.render_with_colors(
            app.game(),
            Some(app.settled_colors()),
            app.high_score(),
            app.overlay(),
        );
        term.draw(&frame)?;

        // Re-read every loop: the interval shrinks as the level rises.
        let tick_duration = Duration::from_millis(app.game().speed_ms() as u64);
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(command) = handle_key_event(key) {
                    app.apply(command);
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick();
        } else if !app.is_running() {
            // Paused or over: keep the gravity clock from piling up.
            last_tick = Instant::now();
        }
    }
}
