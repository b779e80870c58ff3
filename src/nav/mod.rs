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

//! Roving-tabindex keyboard navigation.
//!
//! Only one element per list is focusable at a time: either the list's
//! container or exactly one of its rows. Arrow keys move that single tab stop
//! through the rows, `Enter`/`Right` activate the focused row, `Escape`
//! returns to the container. The engine never touches a UI toolkit; it talks
//! to the rendered list through [`ListHandle`] and hands activations to an
//! [`ActivationDispatcher`].

mod cursor;
mod engine;
mod registry;
mod types;

pub use cursor::FocusCursor;
pub use engine::{ActivationDispatcher, RovingNavigator};
pub use registry::{ListHandle, ListProvider, ListRegistry, NavError, Resolved};
pub use types::{
    ActivationRequest, FocusSlot, ListDescriptor, ListId, NavKey, NavState, NavigationEvent,
};
