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

//! Rendering for the album card.
//!
//! The renderer works in whatever coordinate space it is given. The areas it
//! records are in that space too, so callers drawing off screen translate
//! them before hit testing.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget},
};

use crate::{
    components::album_card::{AlbumCardState, CardAreas},
    model::Album,
    theme::Theme,
    util::layout,
};

const CARD_WIDTH: u16 = 44;
const CARD_HEIGHT: u16 = 18;

const MIN_WIDTH: u16 = 12;
const MIN_HEIGHT: u16 = 5;

const STREAM_LABEL: &str = " STREAM NOW ";

const COVER_GLYPHS: [&str; 4] = ["\u{2591}", "\u{2592}", "\u{2593}", " "];

pub(crate) struct AlbumCard<'a> {
    album: &'a Album,
    title: &'a str,
    theme: &'a Theme,
    active: bool,
}

impl<'a> AlbumCard<'a> {
    /// `title` is what to print, which may still be scrambling.
    pub(crate) fn new(album: &'a Album, title: &'a str, theme: &'a Theme) -> Self {
        Self {
            album,
            title,
            theme,
            active: true,
        }
    }

    /// A neighbouring slide: dimmed, and never shows the overlay.
    pub(crate) fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

impl StatefulWidget for AlbumCard<'_> {
    type State = AlbumCardState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut AlbumCardState) {
        let theme = self.theme;
        let links = &self.album.streaming_links;

        state.set_link_count(links.len());
        state.areas = CardAreas::default();

        let width = area.width.saturating_sub(4).min(CARD_WIDTH);
        let height = area.height.saturating_sub(2).min(CARD_HEIGHT);
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return;
        }

        let alpha = if self.active { 1.0 } else { 0.45 };
        let hovered = self.active && state.is_hovered();

        let card = layout::centered(area, width, height);
        let border_colour = if hovered {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.fade(border_colour, alpha)))
            .style(Style::default().bg(theme.card_colour));
        let inner = block.inner(card);
        block.render(card, buf);

        let [cover, title_row] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        render_cover(cover, buf, &self.album.id, theme, alpha);

        Paragraph::new(self.title)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.fade(theme.text_colour, alpha))
                    .add_modifier(Modifier::BOLD),
            )
            .render(title_row, buf);

        state.areas.card = Some(card);

        if !hovered {
            return;
        }

        buf.set_style(
            cover,
            Style::default().bg(theme.overlay_colour).fg(theme.muted_colour),
        );

        if state.shows_links() {
            let rows = links.len().min(cover.height as usize) as u16;
            let top = cover.y + (cover.height - rows) / 2;

            for (i, link) in links.iter().take(rows as usize).enumerate() {
                let row = Rect::new(cover.x + 1, top + i as u16, cover.width.saturating_sub(2), 1);
                let line = Line::from(vec![
                    Span::styled(
                        format!("{} ", i + 1),
                        Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(link.name.as_str(), Style::default().fg(theme.text_colour)),
                ])
                .centered();
                line.render(row, buf);
                state.areas.links.push(row);
            }
        } else {
            let button = layout::centered(cover, STREAM_LABEL.len() as u16, 1);
            Paragraph::new(STREAM_LABEL)
                .style(
                    Style::default()
                        .fg(theme.text_colour)
                        .bg(theme.accent_colour)
                        .add_modifier(Modifier::BOLD),
                )
                .render(button, buf);
            state.areas.button = Some(button);
        }
    }
}

/// Fills the cover with a shaded pattern derived from the album id, standing
/// in for artwork.
fn render_cover(area: Rect, buf: &mut Buffer, id: &str, theme: &Theme, alpha: f64) {
    let seed = id.bytes().fold(7usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let n = (x as usize * 7 + y as usize * 13 + seed) % 11;
            let glyph = COVER_GLYPHS[n % COVER_GLYPHS.len()];
            let colour = if (x as usize + seed) % 3 == 0 {
                theme.secondary_colour
            } else {
                theme.accent_colour
            };
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(glyph).set_fg(theme.fade(colour, alpha * 0.6));
            }
        }
    }
}
