// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Render the status line.
//!
//! The left side reports the state of the latest search, including a
//! distinct message when it failed. The right side lists the keys.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, model::search::SearchStatus, theme::Theme, util::format::format_count};

const KEY_HELP: &str = "type to search  ^R reset  ↑↓ ⇥ move  Esc quit";

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(KEY_HELP.chars().count() as u16)])
        .horizontal_margin(1)
        .split(area);

    let line = if app.search.next_deadline().is_some() {
        pending_line(app.search.query(), &app.theme)
    } else {
        status_line(app.search.status(), app.card_grid.selected(), &app.theme)
    };

    f.render_widget(Paragraph::new(line), chunks[0]);

    f.render_widget(
        Paragraph::new(KEY_HELP)
            .style(Style::default().fg(app.theme.muted_colour))
            .alignment(Alignment::Right),
        chunks[1],
    );
}

/// Shown while the user is still typing and the search has not gone out.
fn pending_line(query: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!("Typing \"{}\"", query),
        Style::default().fg(theme.muted_colour),
    ))
}

fn status_line(status: &SearchStatus, selected: Option<usize>, theme: &Theme) -> Line<'static> {
    match status {
        SearchStatus::Idle => Line::from(""),
        SearchStatus::Searching(term) => Line::from(vec![
            Span::styled("Searching ", Style::default().fg(theme.muted_colour)),
            Span::styled(
                format!("\"{}\"", term),
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        SearchStatus::Ready(count) => {
            let mut spans = vec![Span::styled(
                format_count(*count),
                Style::default().fg(theme.accent_colour),
            )];
            if let Some(index) = selected {
                spans.push(Span::styled(
                    format!("  card {} of {}", index + 1, count),
                    Style::default().fg(theme.muted_colour),
                ));
            }
            Line::from(spans)
        }
        SearchStatus::Failed(message) => Line::from(Span::styled(
            format!("Search failed: {}", message),
            Style::default()
                .fg(theme.error_colour)
                .add_modifier(Modifier::BOLD),
        )),
    }
}
