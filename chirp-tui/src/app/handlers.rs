use crate::app::state::{App, InputMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // Priority 1: Help modal (highest priority)
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return Ok(());
    }

    // Priority 2: The filter prompt captures all input while typing
    if app.input_mode == InputMode::Typing {
        match key.code {
            KeyCode::Esc => app.cancel_filter_prompt(),
            KeyCode::Enter => app.submit_filter_prompt(),
            KeyCode::Backspace => {
                app.filter_prompt.input.pop();
            }
            KeyCode::Char(c) => {
                app.filter_prompt.input.push(c);
            }
            _ => {}
        }
        return Ok(());
    }

    // Navigation mode
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.next_tweet();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.previous_tweet();
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.request_load();
        }
        KeyCode::Char('/') => {
            app.open_filter_prompt();
        }
        KeyCode::Char('o') | KeyCode::Char('O') => {
            app.open_selected_link();
        }
        KeyCode::Char('?') => {
            app.toggle_help();
        }
        _ => {}
    }

    Ok(())
}
