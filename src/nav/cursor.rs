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

use super::types::NavState;
use std::num::NonZeroUsize;

/// Focused index within one list. `None` means the container itself holds focus.
///
/// Moves take a `NonZeroUsize` count: stepping through an empty list is not
/// expressible, callers fall back to [`FocusCursor::reset`] instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusCursor {
    index: Option<usize>,
}

impl FocusCursor {
    #[must_use]
    pub const fn new() -> Self {
        Self { index: None }
    }

    #[must_use]
    pub const fn index(self) -> Option<usize> {
        self.index
    }

    #[must_use]
    pub const fn state(self) -> NavState {
        match self.index {
            Some(i) => NavState::ItemFocused(i),
            None => NavState::ContainerFocused,
        }
    }

    /// Integer view with `-1` for container focus.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn raw(self) -> isize {
        self.index.map_or(-1, |i| i as isize)
    }

    pub fn reset(&mut self) {
        self.index = None;
    }

    /// Step forward, wrapping from the last item to the first.
    pub fn advance(&mut self, count: NonZeroUsize) -> usize {
        let next = match self.index {
            None => 0,
            Some(i) => (i + 1) % count.get(),
        };
        self.index = Some(next);
        next
    }

    /// Step back, wrapping from the first item (or from the container) to the last.
    pub fn retreat(&mut self, count: NonZeroUsize) -> usize {
        let prev = match self.index {
            None | Some(0) => count.get() - 1,
            Some(i) => (i - 1).min(count.get() - 1),
        };
        self.index = Some(prev);
        prev
    }

    /// True when the cursor points at an item that exists in a list of `count` items.
    #[must_use]
    pub fn is_valid_for(self, count: usize) -> bool {
        self.index.is_some_and(|i| i < count)
    }
}
