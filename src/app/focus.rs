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

/// Overlay that can claim keyboard input away from the list panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTarget {
    ActionMenu,
    Help,
}

/// Effective owner of keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOwner {
    Lists,
    ActionMenu,
    Help,
}

#[derive(Debug, Clone, Copy)]
pub struct KeyContext {
    pub menu_open: bool,
    pub help_open: bool,
}

impl KeyContext {
    #[must_use]
    pub const fn new(menu_open: bool, help_open: bool) -> Self {
        Self { menu_open, help_open }
    }

    #[must_use]
    pub const fn supports(self, target: KeyTarget) -> bool {
        match target {
            KeyTarget::ActionMenu => self.menu_open,
            KeyTarget::Help => self.help_open,
        }
    }
}

impl From<KeyTarget> for KeyOwner {
    fn from(value: KeyTarget) -> Self {
        match value {
            KeyTarget::ActionMenu => Self::ActionMenu,
            KeyTarget::Help => Self::Help,
        }
    }
}

/// Overlay claim stack:
/// latest valid claim wins; claims whose overlay has closed are dropped during normalization.
#[derive(Debug, Clone, Default)]
pub struct KeyFocusManager {
    stack: Vec<KeyTarget>,
}

impl KeyFocusManager {
    /// Resolve who receives the next key.
    #[must_use]
    pub fn owner(&self, context: KeyContext) -> KeyOwner {
        self.stack
            .iter()
            .rev()
            .copied()
            .find(|target| context.supports(*target))
            .map_or(KeyOwner::Lists, KeyOwner::from)
    }

    pub fn claim(&mut self, target: KeyTarget, context: KeyContext) {
        self.stack.retain(|t| *t != target);
        self.stack.push(target);
        self.normalize(context);
    }

    pub fn release(&mut self, target: KeyTarget, context: KeyContext) {
        if let Some(idx) = self.stack.iter().rposition(|t| *t == target) {
            self.stack.remove(idx);
        }
        self.normalize(context);
    }

    pub fn normalize(&mut self, context: KeyContext) {
        self.stack.retain(|target| context.supports(*target));
    }
}
