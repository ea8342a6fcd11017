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

//! UI rendering logic for the card grid.
//!
//! Cards are laid out row by row in response order. Each card shows the
//! track title, the artwork reference and three tags for artist, collection
//! and genre. An empty result set renders a single placeholder instead.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{
        CardGrid,
        card_grid::{CARD_HEIGHT, EMPTY_PLACEHOLDER, columns_for},
    },
    model::Track,
    theme::Theme,
    util::format::ellipsize,
};

impl CardGrid {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, tracks: &[Track], theme: &Theme) {
        if tracks.is_empty() {
            draw_placeholder(f, area, theme);
            return;
        }

        let columns = columns_for(area.width);
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        self.update_layout(columns, visible_rows);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
            .split(area);

        for (row_index, row_area) in rows.iter().enumerate() {
            let first = (self.offset_row + row_index) * columns;
            if first >= tracks.len() {
                break;
            }

            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row_area);

            for (column, cell) in cells.iter().enumerate() {
                let index = first + column;
                if let Some(track) = tracks.get(index) {
                    draw_card(f, *cell, track, self.selected == index, theme);
                }
            }
        }
    }
}

fn draw_placeholder(f: &mut Frame, area: Rect, theme: &Theme) {
    let middle = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let placeholder = Paragraph::new(EMPTY_PLACEHOLDER)
        .style(Style::default().fg(theme.muted_colour))
        .alignment(Alignment::Center);

    f.render_widget(placeholder, middle[1]);
}

fn draw_card(f: &mut Frame, area: Rect, track: &Track, selected: bool, theme: &Theme) {
    let border_colour = if selected {
        theme.card_selected_border
    } else {
        theme.border_colour
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_colour))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width as usize;

    let lines = vec![
        Line::from(Span::styled(
            ellipsize(track.title(), width),
            Style::default()
                .fg(theme.card_title_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            ellipsize(track.artwork(), width),
            Style::default()
                .fg(theme.muted_colour)
                .add_modifier(Modifier::DIM),
        )),
        tag("Artist", track.artist(), width, theme.tag_artist_fg, theme),
        tag("Album", track.collection(), width, theme.tag_collection_fg, theme),
        tag("Genre", track.genre(), width, theme.tag_genre_fg, theme),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}

/// A labelled pill, cut to fit the card width.
fn tag(label: &str, value: &str, width: usize, fg: Color, theme: &Theme) -> Line<'static> {
    let label_width = label.len() + 1;
    let value_width = width.saturating_sub(label_width + 2);

    Line::from(vec![
        Span::styled(format!("{label} "), Style::default().fg(theme.muted_colour)),
        Span::styled(
            format!(" {} ", ellipsize(value, value_width)),
            Style::default().fg(fg).bg(theme.tag_bg),
        ),
    ])
}
