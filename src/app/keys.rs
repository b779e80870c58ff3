// roster_tui — Keyboard-navigable meeting roster for the terminal
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use super::activation::{navigate, run_menu_action};
use super::focus::KeyOwner;
use super::state::App;
use crate::nav::NavKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::num::NonZeroUsize;

fn is_ctrl_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}

fn is_ctrl_char_shortcut(key: KeyEvent, expected: char) -> bool {
    is_ctrl_shortcut(key.modifiers)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&expected))
}

pub fn dispatch_key(app: &mut App, key: KeyEvent) {
    if handle_global_shortcuts(app, key) {
        return;
    }

    match app.key_owner() {
        KeyOwner::Help => handle_help_key(app, key),
        KeyOwner::ActionMenu => handle_menu_key(app, key),
        KeyOwner::Lists => handle_list_key(app, key),
    }
}

/// Shortcuts that work regardless of who owns the keyboard.
fn handle_global_shortcuts(app: &mut App, key: KeyEvent) -> bool {
    if is_ctrl_char_shortcut(key, 'c') || is_ctrl_char_shortcut(key, 'q') {
        app.should_quit = true;
        return true;
    }
    if is_ctrl_char_shortcut(key, 'e') {
        app.close_menu();
        let compact = !app.compact;
        app.set_compact(compact);
        return true;
    }
    false
}

fn handle_help_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
        app.toggle_help();
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') if key.modifiers.is_empty() => app.should_quit = true,
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Tab | KeyCode::BackTab => {
            app.active_list = app.active_list.other();
            tracing::debug!(list = %app.active_list, "pane focus moved");
        }
        code => {
            if let Some(nav_key) = NavKey::from_key_code(code) {
                navigate(app, nav_key);
            }
        }
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    let Some(menu) = app.menu.as_mut() else {
        return;
    };
    let count = NonZeroUsize::new(menu.actions.len());
    match key.code {
        KeyCode::Esc | KeyCode::Left => app.close_menu(),
        KeyCode::Down | KeyCode::Tab => {
            if let Some(n) = count {
                menu.cursor.advance(n);
            }
        }
        KeyCode::Up | KeyCode::BackTab => {
            if let Some(n) = count {
                menu.cursor.retreat(n);
            }
        }
        KeyCode::Enter | KeyCode::Right => run_menu_action(app, None),
        KeyCode::Char(c) => {
            if let Some(i) = c.to_digit(10).and_then(|d| usize::try_from(d).ok())
                && i > 0
            {
                run_menu_action(app, Some(i - 1));
            }
        }
        _ => {}
    }
}
