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

//! Render the command line and status messages.
//!
//! The bottom row shows the command being typed while the command line is
//! open, otherwise the last status message, otherwise the position on the
//! page.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, MainView, events::Status};

pub(crate) fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let commander = &app.commander;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    f.render_widget(
        Paragraph::new("").style(Style::default().bg(theme.status_colour)),
        area,
    );

    if commander.active() {
        f.render_widget(
            Paragraph::new(format!(":{}", commander.input.value()))
                .style(Style::default().fg(theme.text_colour).bg(theme.status_colour)),
            container[0],
        );

        let cursor_x = container[0].x + 1 + commander.input.visual_cursor() as u16;
        let cursor_y = container[0].y;
        f.set_cursor_position((cursor_x, cursor_y));
        return;
    }

    let (text, colour) = match &app.status {
        Some(Status::Error(message)) => (message.clone(), theme.error_colour),
        Some(Status::Info(message)) => (message.clone(), theme.text_colour),
        None => (position_summary(app), theme.muted_colour),
    };

    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(colour).bg(theme.status_colour)),
        container[0],
    );
}

fn position_summary(app: &App) -> String {
    if app.main_view == MainView::Shop {
        return "shop".to_string();
    }

    match app.carousel.as_ref() {
        Some(carousel) => format!(
            "{}  {}/{}",
            app.composer.active(),
            carousel.index() + 1,
            carousel.len()
        ),
        None => app.composer.active().to_string(),
    }
}
