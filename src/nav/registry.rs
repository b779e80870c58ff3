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

use super::cursor::FocusCursor;
use super::types::{FocusSlot, ListDescriptor, ListId};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("list `{0}` is not registered or has no live handle")]
    ListNotFound(ListId),
}

/// Live view of one rendered list, supplied by the UI layer.
pub trait ListHandle {
    /// Current number of rows. Read once per event.
    fn item_count(&self) -> usize;

    /// Move UI focus (and the list's single tab stop) to `slot`.
    fn focus(&mut self, slot: FocusSlot);
}

/// Resolves a list id to its live handle.
pub trait ListProvider {
    fn resolve(&mut self, id: ListId) -> Option<&mut dyn ListHandle>;
}

/// Everything the engine needs for one event.
pub struct Resolved<'h, 'c> {
    pub descriptor: ListDescriptor,
    pub handle: &'h mut dyn ListHandle,
    pub cursor: &'c mut FocusCursor,
}

/// Registered lists and their cursors, one per list.
#[derive(Debug, Clone, Default)]
pub struct ListRegistry {
    cursors: HashMap<ListId, FocusCursor>,
}

impl ListRegistry {
    pub fn new(ids: impl IntoIterator<Item = ListId>) -> Self {
        Self { cursors: ids.into_iter().map(|id| (id, FocusCursor::new())).collect() }
    }

    pub fn is_registered(&self, id: ListId) -> bool {
        self.cursors.contains_key(&id)
    }

    pub fn cursor(&self, id: ListId) -> Option<FocusCursor> {
        self.cursors.get(&id).copied()
    }

    /// Look up `id` and take a fresh count from its live handle.
    pub fn resolve<'h, P>(
        &mut self,
        lists: &'h mut P,
        id: ListId,
    ) -> Result<Resolved<'h, '_>, NavError>
    where
        P: ListProvider + ?Sized,
    {
        let cursor = self.cursors.get_mut(&id).ok_or(NavError::ListNotFound(id))?;
        let handle = lists.resolve(id).ok_or(NavError::ListNotFound(id))?;
        let descriptor = ListDescriptor { id, item_count: handle.item_count() };
        Ok(Resolved { descriptor, handle, cursor })
    }
}
