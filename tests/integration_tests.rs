//! End-to-end: keys through the driver state into the view

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};

use tetris_rules::core::HighScore;
use tetris_rules::event_log::EventLog;
use tetris_rules::input::handle_key_event;
use tetris_rules::term::{encode_into, Overlay, SessionView};
use tetris_rules::types::Command;
use tetris_rules::{App, Config};

fn records_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tetris-rules-it-{}-{}.json", name, std::process::id()))
}

fn app(name: &str) -> App {
    let config = Config {
        board_width: 8,
        board_height: 12,
        records_path: records_path(name),
        seed: Some(31337),
        ..Config::default()
    };
    App::new(config, HighScore::default(), EventLog::disabled())
}

fn press(app: &mut App, code: KeyCode) {
    if let Some(command) = handle_key_event(KeyEvent::from(code)) {
        app.apply(command);
    }
}

#[test]
fn test_keys_move_the_piece() {
    let mut app = app("keys");
    let start = app.game().piece().min_corner();

    press(&mut app, KeyCode::Left);
    assert_eq!(app.game().piece().min_corner(), (start.0, start.1 - 1));

    press(&mut app, KeyCode::Down);
    assert_eq!(app.game().piece().min_corner(), (start.0 + 1, start.1 - 1));

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.game().board().filled_cells(), 4);
}

#[test]
fn test_pause_key_toggles_overlay() {
    let mut app = app("pause");
    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.overlay(), Overlay::Paused);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.overlay(), Overlay::None);
}

#[test]
fn test_full_game_renders_and_records() {
    let mut app = app("full");

    let view = SessionView::default();
    for _ in 0..500 {
        if app.game().is_over() {
            break;
        }
        let frame = view.render_with_colors(
            app.game(),
            Some(app.settled_colors()),
            app.high_score(),
            app.overlay(),
        );
        let mut bytes = Vec::new();
        encode_into(&frame, &mut bytes).unwrap();
        assert!(!bytes.is_empty());

        app.apply(Command::Rotate);
        app.apply(Command::HardDrop);
    }
    assert!(app.game().is_over());
    assert_eq!(app.high_score().best(), Some(app.game().score()));
    assert_eq!(tetris_rules::records::load(&records_path("full")).unwrap().len(), 1);

    let frame = view.render_with_colors(
        app.game(),
        Some(app.settled_colors()),
        app.high_score(),
        app.overlay(),
    );
    let text = frame.lines().join("\n");
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("HIGH SCORES"));

    press(&mut app, KeyCode::Char('r'));
    assert!(app.is_running());
    let _ = std::fs::remove_file(records_path("full"));
}

#[test]
fn test_gravity_ticks_until_landing() {
    let mut app = app("gravity");
    for _ in 0..12 {
        app.tick();
    }
    assert_eq!(app.game().board().filled_cells(), 4);
}
