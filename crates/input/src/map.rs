//! Key mapping from terminal events to engine commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Command, Phase};

/// Map a key press to a command, given the current game phase.
///
/// Movement and rotation keys are only meaningful while running (the engine
/// would ignore them anyway, but mapping them to `None` keeps drivers from
/// treating them as handled). `p` toggles between pause and resume; `s` and
/// `r` start or restart.
pub fn handle_key_event(key: KeyEvent, phase: Phase) -> Option<Command> {
    match key.code {
        // Start / restart from any phase.
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('r') | KeyCode::Char('R') => {
            return Some(Command::Start);
        }
        // Pause toggle.
        KeyCode::Char('p') | KeyCode::Char('P') => {
            return match phase {
                Phase::Running => Some(Command::Pause),
                Phase::Paused => Some(Command::Resume),
                Phase::Idle | Phase::Over => None,
            };
        }
        _ => {}
    }

    if phase != Phase::Running {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(Command::SoftDrop),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char(' ') => Some(Command::Rotate),

        // Hard drop
        KeyCode::Enter => Some(Command::HardDrop),

        _ => None,
    }
}

/// Whether this key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
