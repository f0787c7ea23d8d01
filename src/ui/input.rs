use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Focus};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::Contact => handle_contact_key(app, key),
        Focus::Carousel => handle_carousel_key(app, key),
    }
}

fn handle_carousel_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.navigate(-1),
        KeyCode::Right | KeyCode::Char('l') => app.navigate(1),
        KeyCode::Enter => app.activate_center(),
        KeyCode::Char('a') => app.view_all(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('c') => app.open_contact(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char(ch) if ch.is_ascii_digit() && ch != '0' => {
            // Dots are numbered from 1.
            let index = ch.to_digit(10).map_or(0, i64::from) - 1;
            app.select(index);
        }
        _ => {}
    }
}

fn handle_contact_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_contact(),
        KeyCode::Tab | KeyCode::Down => app.contact_next_field(),
        KeyCode::Enter => app.submit_lead(),
        KeyCode::Backspace => app.contact_backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.contact_input(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
