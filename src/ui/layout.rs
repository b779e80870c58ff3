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

use ratatui::layout::{Constraint, Layout, Rect};

pub struct AppLayout {
    /// Zero-height in compact mode.
    pub header: Rect,
    pub header_sep: Rect,
    pub messages: Rect,
    pub participants: Rect,
    pub footer: Rect,
}

/// Split the frame. The messages pane gets its rows plus borders, up to a third of the body.
pub fn compute(area: Rect, compact: bool, chat_count: usize) -> AppLayout {
    let header_height = u16::from(!compact);
    let [header, header_sep, body, footer] = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Length(header_height),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let wanted = u16::try_from(chat_count).unwrap_or(u16::MAX).saturating_add(2);
    let messages_height = wanted.clamp(3, (body.height / 3).max(3));
    let [messages, participants] =
        Layout::vertical([Constraint::Length(messages_height), Constraint::Min(0)]).areas(body);

    AppLayout { header, header_sep, messages, participants, footer }
}
