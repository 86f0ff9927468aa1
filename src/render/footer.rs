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

//! Render the status line and key hints.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

const KEY_HINTS: &str =
    "j/k move  g/G first/last  enter profile  d dates  t tokens  n numbers  q quit";

pub(crate) fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let status = app.status.as_deref().unwrap_or_default();
    let status_style = Style::default().fg(app.theme.accent_colour);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(status, status_style))),
        chunks[0],
    );

    let hints_style = Style::default().fg(app.theme.muted_colour).italic();
    f.render_widget(
        Paragraph::new(Line::from(KEY_HINTS).style(hints_style)),
        chunks[1],
    );
}
