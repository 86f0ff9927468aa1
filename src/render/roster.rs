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

//! Render the character roster table.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Row, Table},
};

use crate::App;

/// Renders one row per character, coloured by vocation token.
pub(crate) fn draw_roster(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let formatter = &app.formatter;

    let rows = app.characters.iter().map(|c| {
        let token = formatter.vocation_token(&c.vocation);
        let colour = theme.token_colour(token);

        let level = c.level.map(|l| l.to_string()).unwrap_or_default();
        let experience = formatter.compact_number(c.experience);
        let last_seen = formatter.last_seen(c.last_seen.as_ref());

        let name_style = Style::default().fg(colour).add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(theme.muted_colour);

        Row::new(vec![
            Cell::from(formatter.vocation_icon(&c.vocation)),
            Cell::from(Line::from(c.name.as_str()).style(name_style)),
            Cell::from(Line::from(c.vocation.as_str()).style(Style::default().fg(colour))),
            Cell::from(Line::from(level).alignment(Alignment::Right)),
            Cell::from(Line::from(c.world.as_str()).style(muted)),
            Cell::from(Line::from(experience).alignment(Alignment::Right)),
            Cell::from(Line::from(last_seen).style(muted)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Length(6),
            Constraint::Percentage(15),
            Constraint::Length(10),
            Constraint::Min(16),
        ],
    )
    .header(
        Row::new(vec![
            Cell::from(""),
            Cell::from("Name"),
            Cell::from("Vocation"),
            Cell::from(Line::from("Level").alignment(Alignment::Right)),
            Cell::from("World"),
            Cell::from(Line::from("Exp").alignment(Alignment::Right)),
            Cell::from("Last seen"),
        ])
        .style(Style::default().bold().fg(theme.accent_colour))
        .bottom_margin(1),
    )
    .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1)),
    );

    f.render_stateful_widget(table, area, &mut app.table_state);
}
