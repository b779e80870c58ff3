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

use super::keys::dispatch_key;
use super::state::App;
use crate::roster::RosterEvent;
use crossterm::event::{Event, KeyEventKind};

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => dispatch_key(app, key),
        // Resize is handled automatically by ratatui
        _ => {}
    }
}

/// Apply a roster change. List lengths move under the navigator here; its
/// cursors are left alone and recover on the next key.
pub fn handle_roster_event(app: &mut App, event: RosterEvent) {
    tracing::debug!(?event, "roster event");
    if !app.roster.apply(event) {
        tracing::debug!("roster event had no effect");
        return;
    }
    let menu_target_gone =
        app.menu.as_ref().is_some_and(|menu| app.roster.user(&menu.user_id).is_none());
    if menu_target_gone {
        tracing::debug!("closing action menu, participant left");
        app.close_menu();
    }
}
