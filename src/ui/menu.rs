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

use crate::app::ActionMenu;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

const MENU_WIDTH: u16 = 32;

/// Action popup anchored near the top-right of the participants pane.
pub fn render(frame: &mut Frame, pane: Rect, menu: &ActionMenu) {
    let height = u16::try_from(menu.actions.len()).unwrap_or(u16::MAX).saturating_add(2);
    let width = MENU_WIDTH.min(pane.width);
    let area = Rect {
        x: pane.x + pane.width.saturating_sub(width + 1),
        y: pane.y.saturating_add(1),
        width,
        height: height.min(pane.height.saturating_sub(1)),
    };
    if area.height < 3 {
        return;
    }

    let selected = menu.cursor.index();
    let lines: Vec<Line<'static>> = menu
        .actions
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let style = if Some(i) == selected {
                Style::default().fg(theme::ACCENT).bg(theme::FOCUS_BG).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(theme::DIM)),
                Span::styled(format!("{} {}", action.icon, action.label), style),
            ])
        })
        .collect();

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", menu.user_name),
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
