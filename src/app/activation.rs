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

use super::state::{ActionMenu, App};
use super::{actions, surface::Surface};
use crate::nav::{ActivationRequest, FocusCursor, ListId, NavKey, NavigationEvent};
use std::num::NonZeroUsize;

/// Feed one navigation key for the active pane through the engine, then act on any activation.
pub fn navigate(app: &mut App, key: NavKey) {
    let Some(navigator) = app.navigator.as_mut() else {
        return;
    };
    let event = NavigationEvent::new(key, app.active_list);
    let mut requests: Vec<ActivationRequest> = Vec::new();
    let mut surface = Surface::new(&app.roster, &mut app.panes);
    match navigator.handle(&mut surface, &mut requests, event) {
        Ok(state) => tracing::trace!(list = %event.source, ?key, ?state, "navigation handled"),
        Err(e) => {
            tracing::warn!(error = %e, ?key, "dropping navigation event");
            return;
        }
    }
    for request in requests {
        activate(app, request);
    }
}

/// Translate an activation into the row's primary behaviour.
pub fn activate(app: &mut App, request: ActivationRequest) {
    match request.list {
        ListId::Messages => open_chat(app, request.index),
        ListId::Participants => open_user_menu(app, request.index),
    }
}

fn open_chat(app: &mut App, index: usize) {
    let Some(chat) = app.roster.open_chats.get_mut(index) else {
        tracing::warn!(index, "activated chat row no longer exists");
        return;
    };
    chat.unread = 0;
    let route = actions::chat_route(&chat.id);
    tracing::info!(route = %route, "open chat");
    app.status_line = Some(route.clone());
    app.route = Some(route);
}

fn open_user_menu(app: &mut App, index: usize) {
    let Some(user) = app.roster.users.get(index) else {
        tracing::warn!(index, "activated participant row no longer exists");
        return;
    };
    let available = actions::available_for(&app.roster, user);
    let Some(count) = NonZeroUsize::new(available.len()) else {
        tracing::debug!(user_id = %user.id, "no actions available");
        return;
    };
    let mut cursor = FocusCursor::new();
    cursor.advance(count);
    let menu = ActionMenu {
        user_id: user.id.clone(),
        user_name: user.name.clone(),
        actions: available,
        cursor,
    };
    app.open_menu(menu);
}

/// Run the selected (or numbered) menu row and close the menu.
pub fn run_menu_action(app: &mut App, index: Option<usize>) {
    let Some(menu) = app.menu.as_ref() else {
        return;
    };
    let action = match index {
        Some(i) => menu.actions.get(i).copied(),
        None => menu.selected(),
    };
    let user_id = menu.user_id.clone();
    let Some(action) = action else {
        return;
    };
    app.close_menu();
    actions::run(app, action, &user_id);
}
