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

use super::state::{PaneFocus, Panes};
use crate::nav::{FocusSlot, ListHandle, ListId, ListProvider};
use crate::roster::Roster;

/// One pane as the navigator sees it. The count is taken when the surface is built.
pub(super) struct PaneHandle<'a> {
    count: usize,
    focus: &'a mut PaneFocus,
}

impl ListHandle for PaneHandle<'_> {
    fn item_count(&self) -> usize {
        self.count
    }

    fn focus(&mut self, slot: FocusSlot) {
        self.focus.slot = slot;
    }
}

/// Both panes, borrowed for the duration of a single navigation event.
pub(super) struct Surface<'a> {
    messages: PaneHandle<'a>,
    participants: PaneHandle<'a>,
}

impl<'a> Surface<'a> {
    pub(super) fn new(roster: &Roster, panes: &'a mut Panes) -> Self {
        Self {
            messages: PaneHandle { count: roster.open_chats.len(), focus: &mut panes.messages },
            participants: PaneHandle {
                count: roster.users.len(),
                focus: &mut panes.participants,
            },
        }
    }
}

impl ListProvider for Surface<'_> {
    fn resolve(&mut self, id: ListId) -> Option<&mut dyn ListHandle> {
        Some(match id {
            ListId::Messages => &mut self.messages,
            ListId::Participants => &mut self.participants,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_follow_roster_and_focus_writes_through() {
        let roster = Roster::demo();
        let mut panes = Panes::default();
        {
            let mut surface = Surface::new(&roster, &mut panes);
            let handle = surface.resolve(ListId::Participants).unwrap();
            assert_eq!(handle.item_count(), roster.users.len());
            handle.focus(FocusSlot::Item(3));
            let handle = surface.resolve(ListId::Messages).unwrap();
            assert_eq!(handle.item_count(), roster.open_chats.len());
        }
        assert_eq!(panes.participants.slot, FocusSlot::Item(3));
        assert_eq!(panes.messages.slot, FocusSlot::Container);
    }
}
