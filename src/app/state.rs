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

use super::actions::{ServerCall, UserAction};
use super::focus::{KeyContext, KeyFocusManager, KeyOwner, KeyTarget};
use crate::nav::{FocusCursor, FocusSlot, ListId, RovingNavigator};
use crate::roster::{Roster, RosterEvent};
use tokio::sync::mpsc;

/// Roving tab stop of one pane: the container or exactly one row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaneFocus {
    pub slot: FocusSlot,
}

impl PaneFocus {
    pub fn focused_item(self) -> Option<usize> {
        match self.slot {
            FocusSlot::Item(i) => Some(i),
            FocusSlot::Container => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Panes {
    pub messages: PaneFocus,
    pub participants: PaneFocus,
}

impl Panes {
    pub fn get(&self, id: ListId) -> PaneFocus {
        match id {
            ListId::Messages => self.messages,
            ListId::Participants => self.participants,
        }
    }
}

/// Popup listing the actions available for one participant.
#[derive(Debug, Clone)]
pub struct ActionMenu {
    pub user_id: String,
    pub user_name: String,
    pub actions: Vec<UserAction>,
    pub cursor: FocusCursor,
}

impl ActionMenu {
    pub fn selected(&self) -> Option<UserAction> {
        self.cursor.index().and_then(|i| self.actions.get(i).copied())
    }
}

pub struct App {
    pub roster: Roster,
    pub panes: Panes,
    /// Pane that currently receives navigation keys.
    pub active_list: ListId,
    /// `None` in compact mode: nothing is tracked and arrow keys do not move through the lists.
    pub navigator: Option<RovingNavigator>,
    pub compact: bool,
    pub menu: Option<ActionMenu>,
    pub show_help: bool,
    pub key_focus: KeyFocusManager,
    /// Last route requested by an activation (`/users/chat/{id}`).
    pub route: Option<String>,
    /// Server calls requested by row actions, oldest first.
    pub outbox: Vec<ServerCall>,
    /// Outcome of the most recent activation or action, shown in the footer.
    pub status_line: Option<String>,
    pub should_quit: bool,
    pub event_tx: mpsc::UnboundedSender<RosterEvent>,
    pub event_rx: mpsc::UnboundedReceiver<RosterEvent>,
}

impl App {
    pub fn new(roster: Roster, compact: bool) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            roster,
            panes: Panes::default(),
            active_list: ListId::Messages,
            navigator: None,
            compact,
            menu: None,
            show_help: false,
            key_focus: KeyFocusManager::default(),
            route: None,
            outbox: Vec::new(),
            status_line: None,
            should_quit: false,
            event_tx,
            event_rx,
        };
        app.set_compact(compact);
        app
    }

    /// Switch compact mode. Leaving compact mode starts a fresh navigator with every
    /// cursor on its container.
    pub fn set_compact(&mut self, compact: bool) {
        self.compact = compact;
        self.panes = Panes::default();
        self.navigator = if compact { None } else { Some(RovingNavigator::new(ListId::ALL)) };
        tracing::info!(compact, "navigation {}", if compact { "disabled" } else { "enabled" });
    }

    pub fn key_context(&self) -> KeyContext {
        KeyContext::new(self.menu.is_some(), self.show_help)
    }

    pub fn key_owner(&self) -> KeyOwner {
        self.key_focus.owner(self.key_context())
    }

    pub fn open_menu(&mut self, menu: ActionMenu) {
        self.menu = Some(menu);
        let ctx = self.key_context();
        self.key_focus.claim(KeyTarget::ActionMenu, ctx);
    }

    pub fn close_menu(&mut self) {
        self.menu = None;
        let ctx = self.key_context();
        self.key_focus.release(KeyTarget::ActionMenu, ctx);
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        let ctx = self.key_context();
        if self.show_help {
            self.key_focus.claim(KeyTarget::Help, ctx);
        } else {
            self.key_focus.release(KeyTarget::Help, ctx);
        }
    }

    pub fn item_count(&self, id: ListId) -> usize {
        match id {
            ListId::Messages => self.roster.open_chats.len(),
            ListId::Participants => self.roster.users.len(),
        }
    }

    /// Build a minimal `App` for testing: demo roster, navigation enabled, no terminal.
    pub fn test_default() -> Self {
        Self::new(Roster::demo(), false)
    }
}
