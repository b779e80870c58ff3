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

use std::fmt;

/// Identifies one navigable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListId {
    Messages,
    Participants,
}

impl ListId {
    pub const ALL: [Self; 2] = [Self::Messages, Self::Participants];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Messages => "messages",
            Self::Participants => "participants",
        }
    }

    /// The other pane, used for Tab cycling.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Messages => Self::Participants,
            Self::Participants => Self::Messages,
        }
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized key set the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
}

impl NavKey {
    /// Map a terminal key to a navigation key. Anything else is not a navigation event.
    #[must_use]
    pub fn from_key_code(code: crossterm::event::KeyCode) -> Option<Self> {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Esc => Some(Self::Escape),
            KeyCode::Up => Some(Self::ArrowUp),
            KeyCode::Down => Some(Self::ArrowDown),
            KeyCode::Left => Some(Self::ArrowLeft),
            KeyCode::Right => Some(Self::ArrowRight),
            KeyCode::Enter => Some(Self::Enter),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_activation(self) -> bool {
        matches!(self, Self::ArrowRight | Self::Enter)
    }
}

/// One keystroke, tagged with the list it originated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEvent {
    pub key: NavKey,
    pub source: ListId,
}

impl NavigationEvent {
    #[must_use]
    pub const fn new(key: NavKey, source: ListId) -> Self {
        Self { key, source }
    }
}

/// Snapshot of a list taken at event time. Never cached across events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListDescriptor {
    pub id: ListId,
    pub item_count: usize,
}

/// Where UI focus sits inside one list. The focused slot is also the list's only tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusSlot {
    #[default]
    Container,
    Item(usize),
}

/// Engine state for one list after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    ContainerFocused,
    ItemFocused(usize),
}

impl NavState {
    #[must_use]
    pub const fn slot(self) -> FocusSlot {
        match self {
            Self::ContainerFocused => FocusSlot::Container,
            Self::ItemFocused(i) => FocusSlot::Item(i),
        }
    }
}

/// Emitted when the user confirms the focused item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationRequest {
    pub list: ListId,
    pub index: usize,
}
