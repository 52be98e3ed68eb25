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

//! Render the site header and the shop page.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{App, render::icons::ICON_BACK, util::layout};

const BACK_LABEL: &str = "BACK";
const SHOP_LABEL: &str = "SHOP";

/// Draws the header bar over the top row of the page.
pub(crate) fn draw_header(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let row = Rect::new(area.x, area.y, area.width, area.height.min(1));
    if row.is_empty() {
        return;
    }

    f.render_widget(Block::default().style(Style::default().bg(theme.overlay_colour)), row);

    let back = format!(" {} {} ", ICON_BACK, BACK_LABEL);
    let back_width = back.chars().count() as u16;
    let shop = format!(" {} ", SHOP_LABEL);
    let shop_width = shop.chars().count() as u16;

    let [left, middle, right] = Layout::horizontal([
        Constraint::Length(back_width),
        Constraint::Min(0),
        Constraint::Length(shop_width),
    ])
    .areas(row);

    let item = Style::default().fg(theme.text_colour).add_modifier(Modifier::BOLD);

    f.render_widget(Paragraph::new(back).style(item), left);
    f.render_widget(
        Paragraph::new(app.config.site.artist_name.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)),
        middle,
    );
    f.render_widget(Paragraph::new(shop).style(item), right);

    app.hits.back = Some(left);
    app.hits.shop = Some(right);
}

/// Draws the shop page, which has nothing for sale yet.
pub(crate) fn draw_shop(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .title(" SHOP ")
        .title_style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let message = layout::centered(inner, inner.width, 3);
    let [title, _, hint] = Layout::vertical([Constraint::Length(1); 3]).areas(message);

    f.render_widget(
        Paragraph::new("Coming Soon")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.text_colour).add_modifier(Modifier::BOLD)),
        title,
    );
    f.render_widget(
        Paragraph::new("Esc or b to go back")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.muted_colour)),
        hint,
    );

    let back = format!(" {} {} ", ICON_BACK, BACK_LABEL);
    let back_area = Rect::new(
        inner.x,
        inner.y,
        (back.chars().count() as u16).min(inner.width),
        inner.height.min(1),
    );
    f.render_widget(
        Paragraph::new(back).style(Style::default().fg(theme.text_colour).add_modifier(Modifier::BOLD)),
        back_area,
    );
    app.hits.shop_back = Some(back_area);
}
