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

//! Render the search box.
//!
//! The input shows a placeholder while empty and scrolls horizontally to
//! keep the cursor visible. The reset control sits at the right-hand edge.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{
        SearchBox,
        search_box::{PLACEHOLDER, RESET_LABEL},
    },
    theme::Theme,
};

impl SearchBox {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .title(" Search ")
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(RESET_LABEL.len() as u16),
            ])
            .split(inner);

        let input_area = chunks[0];
        let width = input_area.width.max(1) as usize;
        let scroll = self.input.visual_scroll(width);

        let input = if self.input.value().is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(theme.placeholder_fg))
        } else {
            Paragraph::new(self.input.value())
                .style(Style::default().fg(theme.input_fg))
                .scroll((0, scroll as u16))
        };
        f.render_widget(input, input_area);

        let button = Paragraph::new(RESET_LABEL).style(
            Style::default()
                .fg(theme.button_fg)
                .bg(theme.button_bg)
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(button, chunks[2]);

        let cursor = self.input.visual_cursor().saturating_sub(scroll) as u16;
        f.set_cursor_position((input_area.x + cursor, input_area.y));
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn render(search_box: &SearchBox, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 3)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                search_box.draw(f, area, &Theme::default());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..3)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn empty_box_shows_placeholder_and_reset_label() {
        let screen = render(&SearchBox::new(), 50);

        assert!(screen.contains(PLACEHOLDER));
        assert!(screen.contains("[ Reset ^R ]"));
    }

    #[test]
    fn typed_text_replaces_placeholder() {
        let mut search_box = SearchBox::new();
        for c in "jazz".chars() {
            search_box.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
        }

        let screen = render(&search_box, 50);

        assert!(screen.contains("jazz"));
        assert!(!screen.contains(PLACEHOLDER));
        assert!(screen.contains(RESET_LABEL));
    }
}
