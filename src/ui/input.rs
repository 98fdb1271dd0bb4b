use crate::ui::app::{App, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::List if app.search_focused() => handle_search_key(app, key),
        Screen::List => handle_list_key(app, key),
        Screen::Detail => handle_detail_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    let page = isize::try_from(app.viewport_rows().max(1)).unwrap_or(1);
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::PageUp => app.move_cursor(-page),
        KeyCode::PageDown => app.move_cursor(page),
        KeyCode::Home | KeyCode::Char('g') => app.move_cursor(isize::MIN),
        KeyCode::End | KeyCode::Char('G') => app.move_cursor(isize::MAX),
        KeyCode::Enter => {
            app.open_selected();
        }
        KeyCode::Char('f') => {
            app.toggle_favorite_selected();
        }
        KeyCode::Char('r') | KeyCode::F(5) => {
            app.refresh();
        }
        KeyCode::Char('/') => app.focus_search(),
        KeyCode::Esc if !app.catalog().query().is_empty() => app.set_query(String::new()),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.blur_search(),
        KeyCode::Backspace => app.pop_query_char(),
        KeyCode::Up => app.move_cursor(-1),
        KeyCode::Down => app.move_cursor(1),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_query_char(ch)
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            app.close_detail()
        }
        KeyCode::Char('f') | KeyCode::Enter => {
            app.toggle_favorite_current();
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
