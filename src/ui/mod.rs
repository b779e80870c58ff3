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

mod header;
mod help;
mod layout;
mod lists;
mod menu;
pub mod theme;

pub use lists::{scroll_offset, truncate_to_width};

use crate::app::App;
use crate::nav::ListId;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, app: &App) {
    let frame_area = frame.area();
    let areas = layout::compute(frame_area, app.compact, app.roster.open_chats.len());

    if areas.header.height > 0 {
        header::render(frame, areas.header, app);
        render_separator(frame, areas.header_sep);
    }

    lists::render(frame, areas.messages, app, ListId::Messages);
    lists::render(frame, areas.participants, app, ListId::Participants);

    if let Some(menu) = app.menu.as_ref() {
        menu::render(frame, areas.participants, menu);
    }

    render_footer(frame, areas.footer, app);
    help::render(frame, frame_area, app);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let line = theme::SEPARATOR_CHAR.repeat(usize::from(area.width));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(line, Style::default().fg(theme::DIM)))),
        area,
    );
}

const FOOTER_PAD: u16 = 1;

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 || area.width <= FOOTER_PAD * 2 {
        return;
    }
    let padded = Rect {
        x: area.x + FOOTER_PAD,
        y: area.y,
        width: area.width - FOOTER_PAD * 2,
        height: area.height,
    };

    let left = if app.compact {
        "compact · Ctrl+E navigation · ? help".to_owned()
    } else {
        format!(
            "{} · Tab pane · ↑↓ move · Enter open · Esc back · ? help",
            app.active_list
        )
    };
    let right = app.status_line.clone();

    let right_width = right.as_deref().map_or(0, UnicodeWidthStr::width);
    let left_max = usize::from(padded.width).saturating_sub(right_width + 1);
    frame.render_widget(
        Paragraph::new(Span::styled(
            truncate_to_width(&left, left_max),
            Style::default().fg(theme::DIM),
        )),
        padded,
    );
    if let Some(right) = right {
        frame.render_widget(
            Paragraph::new(Span::styled(right, Style::default().fg(theme::ACCENT)))
                .alignment(Alignment::Right),
            padded,
        );
    }
}
