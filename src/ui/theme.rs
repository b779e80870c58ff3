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

use ratatui::style::Color;

// Accent
pub const ACCENT: Color = Color::Rgb(244, 118, 0);

// UI chrome
pub const DIM: Color = Color::DarkGray;
pub const SEPARATOR_CHAR: &str = "─";
pub const FOCUS_BG: Color = Color::Rgb(40, 44, 52);

// Row markers
pub const ICON_PRESENTER: &str = "▣";
pub const ICON_MODERATOR: &str = "★";
pub const ICON_MUTED: &str = "🔇";
pub const ICON_VOICE: &str = "🎙";
pub const ICON_CHAT: &str = "●";
pub const ICON_FOCUS: &str = "❯";

pub const UNREAD: Color = Color::Yellow;
pub const YOU: Color = Color::Cyan;
