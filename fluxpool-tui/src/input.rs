//! Keyboard input dispatch: dialog first, then global keys, then table keys.

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use fluxpool_core::broadcast::DialogState;
use fluxpool_core::Tab;

use crate::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent, now: DateTime<Utc>) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. The broadcast dialog consumes input while it is up.
    match app.dashboard.dialog().state() {
        DialogState::Open => {
            handle_dialog_key(app, key, now);
            return;
        }
        DialogState::Confirmed => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                app.dashboard.cancel_broadcast();
            }
            return;
        }
        DialogState::Closed => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            if let Some(tab) = Tab::from_index(index) {
                app.select_tab(tab);
            }
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_tab();
            } else {
                app.next_tab();
            }
            return;
        }
        KeyCode::BackTab => {
            app.prev_tab();
            return;
        }
        _ => {}
    }

    // 3. Table keys.
    handle_table_key(app, key, now);
}

fn handle_dialog_key(app: &mut App, key: KeyEvent, now: DateTime<Utc>) {
    match key.code {
        KeyCode::Esc => {
            app.dashboard.cancel_broadcast();
        }
        KeyCode::Enter => app.submit_broadcast(now),
        KeyCode::Backspace => {
            app.dashboard.dialog_mut().pop_char();
        }
        KeyCode::Char(c) => {
            app.dashboard.dialog_mut().push_char(c);
        }
        _ => {}
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent, now: DateTime<Utc>) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let rows = app.table(now).len();
            app.cursor_down(rows);
        }
        KeyCode::Char('k') | KeyCode::Up => app.cursor_up(),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('s') => app.share_selected(now),
        KeyCode::Char('c') => app.close_selected(now),
        KeyCode::Char('o') => {
            let table = app.table(now);
            app.cycle_sort(&table);
        }
        KeyCode::Char('r') => app.reverse_sort(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{app, press, t0};
    use chrono::Duration;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, press(KeyCode::Char(c)), t0());
        }
    }

    #[test]
    fn number_keys_select_tabs() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('4')), t0());
        assert_eq!(app.active_tab(), Tab::Holders);
        handle_key(&mut app, press(KeyCode::BackTab), t0());
        assert_eq!(app.active_tab(), Tab::Curve);
    }

    #[test]
    fn dialog_swallows_global_keys() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('2')), t0());
        handle_key(&mut app, press(KeyCode::Char('s')), t0());
        assert_eq!(app.dashboard.dialog().state(), DialogState::Open);

        type_text(&mut app, "q1 gm");
        assert!(app.running);
        assert_eq!(app.active_tab(), Tab::Spot);
        assert_eq!(app.dashboard.dialog().message(), "q1 gm");

        handle_key(&mut app, press(KeyCode::Backspace), t0());
        assert_eq!(app.dashboard.dialog().message(), "q1 g");
    }

    #[test]
    fn enter_submits_and_tick_closes() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('2')), t0());
        handle_key(&mut app, press(KeyCode::Char('s')), t0());
        type_text(&mut app, "gm");
        handle_key(&mut app, press(KeyCode::Enter), t0());
        assert_eq!(app.dashboard.dialog().state(), DialogState::Confirmed);

        app.tick(t0() + Duration::milliseconds(1500));
        assert_eq!(app.dashboard.dialog().state(), DialogState::Closed);
        assert_eq!(app.dashboard.broadcasts().records().unwrap().len(), 1);
    }

    #[test]
    fn esc_cancels_without_append() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('3')), t0());
        handle_key(&mut app, press(KeyCode::Char('s')), t0());
        type_text(&mut app, "nope");
        handle_key(&mut app, press(KeyCode::Esc), t0());
        assert_eq!(app.dashboard.dialog().state(), DialogState::Closed);
        assert!(app.dashboard.broadcasts().records().unwrap().is_empty());
    }

    #[test]
    fn cursor_stays_within_rows() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('2')), t0());
        for _ in 0..10 {
            handle_key(&mut app, press(KeyCode::Char('j')), t0());
        }
        assert_eq!(app.cursor, 2);
        handle_key(&mut app, press(KeyCode::Char('k')), t0());
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('q')), t0());
        assert!(!app.running);
    }
}
