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
use crate::nav::ListId;
use crate::roster::{Chat, User};
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Render one pane: border (titled unless compact) plus its rows, scrolled to keep
/// the focused row visible.
pub fn render(frame: &mut Frame, area: Rect, app: &App, id: ListId) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let active = app.active_list == id && !app.compact;
    let focused = app.panes.get(id).focused_item().filter(|i| *i < app.item_count(id));

    let border_style = if active && focused.is_none() {
        Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
    } else if active {
        Style::default().fg(theme::ACCENT)
    } else {
        Style::default().fg(theme::DIM)
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    if !app.compact {
        let style = Style::default().add_modifier(Modifier::BOLD);
        block = block.title(Span::styled(title(app, id), style));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = usize::from(inner.width);
    let lines: Vec<Line<'static>> = match id {
        ListId::Messages => app.roster.open_chats.iter().map(|c| chat_line(c, width)).collect(),
        ListId::Participants => app.roster.users.iter().map(|u| user_line(u, width)).collect(),
    };

    let visible = usize::from(inner.height);
    let offset = scroll_offset(focused, visible, lines.len());
    let rows: Vec<Line<'static>> = lines
        .into_iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, line)| decorate(line, Some(i) == focused, active))
        .collect();
    frame.render_widget(Paragraph::new(rows), inner);
}

fn title(app: &App, id: ListId) -> String {
    match id {
        ListId::Messages => " Messages ".to_owned(),
        ListId::Participants => format!(" Users ({}) ", app.roster.users.len()),
    }
}

/// First row to draw so that `focused` stays on screen.
pub fn scroll_offset(focused: Option<usize>, visible: usize, total: usize) -> usize {
    let max_offset = total.saturating_sub(visible);
    match focused {
        Some(i) if visible > 0 && i >= visible => (i + 1 - visible).min(max_offset),
        _ => 0,
    }
}

fn decorate(line: Line<'static>, is_focused: bool, pane_active: bool) -> Line<'static> {
    if !is_focused {
        let mut spans = vec![Span::raw("  ")];
        spans.extend(line.spans);
        return Line::from(spans);
    }
    let marker_style = if pane_active {
        Style::default().fg(theme::ACCENT)
    } else {
        Style::default().fg(theme::DIM)
    };
    let mut spans = vec![Span::styled(format!("{} ", theme::ICON_FOCUS), marker_style)];
    spans.extend(line.spans);
    let line = Line::from(spans);
    if pane_active { line.style(Style::default().bg(theme::FOCUS_BG)) } else { line }
}

fn chat_line(chat: &Chat, width: usize) -> Line<'static> {
    let badge = if chat.unread > 0 { format!(" ({})", chat.unread) } else { String::new() };
    let name_width = width.saturating_sub(4 + badge.width());
    Line::from(vec![
        Span::styled(format!("{} ", theme::ICON_CHAT), Style::default().fg(theme::DIM)),
        Span::styled(truncate_to_width(&chat.name, name_width), Style::default().fg(Color::White)),
        Span::styled(badge, Style::default().fg(theme::UNREAD).add_modifier(Modifier::BOLD)),
    ])
}

fn user_line(user: &User, width: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(6);
    let role_icon = if user.is_presenter {
        theme::ICON_PRESENTER
    } else if user.is_moderator() {
        theme::ICON_MODERATOR
    } else {
        " "
    };
    spans.push(Span::styled(format!("{role_icon} "), Style::default().fg(theme::ACCENT)));

    let mut suffix = String::new();
    if user.is_current {
        suffix.push_str(" (you)");
    }
    if let Some(emoji) = user.emoji.as_deref() {
        suffix.push_str(" [");
        suffix.push_str(emoji);
        suffix.push(']');
    }
    let voice = match user.voice {
        Some(v) if v.muted => format!(" {}", theme::ICON_MUTED),
        Some(_) => format!(" {}", theme::ICON_VOICE),
        None => String::new(),
    };

    let name_width = width.saturating_sub(4 + suffix.width() + voice.width());
    let name_style = if user.is_current {
        Style::default().fg(theme::YOU)
    } else {
        Style::default().fg(Color::White)
    };
    spans.push(Span::styled(truncate_to_width(&user.name, name_width), name_style));
    spans.push(Span::styled(suffix, Style::default().fg(theme::DIM)));
    spans.push(Span::raw(voice));
    Line::from(spans)
}

/// Cut `text` to at most `max` display columns, ending in `…` when shortened.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_owned();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::{scroll_offset, truncate_to_width};

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("Ana Lima", 20), "Ana Lima");
        assert_eq!(truncate_to_width("Ana Lima", 5), "Ana …");
        assert_eq!(truncate_to_width("田中太郎", 5), "田中…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn offset_keeps_focus_visible() {
        assert_eq!(scroll_offset(None, 5, 20), 0);
        assert_eq!(scroll_offset(Some(3), 5, 20), 0);
        assert_eq!(scroll_offset(Some(7), 5, 20), 3);
        assert_eq!(scroll_offset(Some(19), 5, 20), 15);
        assert_eq!(scroll_offset(Some(4), 0, 20), 0);
    }
}
