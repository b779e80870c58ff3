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

use crate::app::App;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table};
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if !app.show_help || area.height < 3 || area.width < 10 {
        return;
    }
    let items = build_help_items(app);
    let key_width = items.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    let desc_width = items.iter().map(|(_, d)| d.width()).max().unwrap_or(0);

    let rows: Vec<Row<'static>> =
        items.into_iter().map(|(k, d)| Row::new(vec![Cell::from(k), Cell::from(d)])).collect();
    let height = u16::try_from(rows.len()).unwrap_or(u16::MAX).saturating_add(2).min(area.height);
    let width = u16::try_from(key_width + desc_width)
        .unwrap_or(u16::MAX)
        .saturating_add(COLUMN_GAP + 4)
        .min(area.width);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let table = Table::new(
        rows,
        [
            Constraint::Length(u16::try_from(key_width).unwrap_or(u16::MAX)),
            Constraint::Min(0),
        ],
    )
    .column_spacing(COLUMN_GAP)
    .block(block);

    frame.render_widget(Clear, popup);
    frame.render_widget(table, popup);
}

fn build_help_items(app: &App) -> Vec<(String, String)> {
    let mut items: Vec<(String, String)> = vec![
        ("Ctrl+C / q".to_owned(), "Quit".to_owned()),
        ("Ctrl+E".to_owned(), "Toggle compact mode".to_owned()),
        ("?".to_owned(), "Toggle this help".to_owned()),
    ];
    if app.compact {
        items.push((String::new(), "Navigation is off in compact mode".to_owned()));
        return items;
    }
    items.extend([
        ("Tab / Shift+Tab".to_owned(), "Switch between panes".to_owned()),
        ("Up / Down".to_owned(), "Move through rows (wraps)".to_owned()),
        ("Enter / Right".to_owned(), "Open chat or participant actions".to_owned()),
        ("Esc".to_owned(), "Back to the pane".to_owned()),
        ("1-9".to_owned(), "Run a numbered action".to_owned()),
    ]);
    items
}
