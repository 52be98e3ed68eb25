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

//! Render the text sections of the page: intro, logo and footer.
//!
//! Each renderer draws into a buffer one viewport tall with its origin at
//! the section top.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Widget,
};

use crate::{
    App,
    nav::composer::SectionView,
    render::icons::{ICON_SCROLL_DOWN, ICON_SPARK_LARGE, ICON_SPARK_SMALL},
};

/// Puts a space between every character, for display titles.
pub(super) fn spaced(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Fully opaque while the section rests in the viewport, fading as it leaves
/// through the top.
fn fade_out(progress: f64) -> f64 {
    (1.0 - (progress - 0.5) * 2.0).clamp(0.0, 1.0)
}

/// Strongest while the section rests in the viewport, fading towards either
/// edge.
fn emphasis(progress: f64) -> f64 {
    (1.0 - (progress - 0.5).abs() * 2.0).clamp(0.0, 1.0)
}

pub(super) fn centered_line(buf: &mut Buffer, y: u16, line: Line) {
    let area = buf.area;
    if y >= area.bottom() {
        return;
    }
    line.centered().render(Rect::new(area.x, y, area.width, 1), buf);
}

pub(super) fn render_intro(buf: &mut Buffer, app: &App, view: SectionView) {
    let theme = &app.theme;
    let area = buf.area;
    let alpha = fade_out(view.progress);
    let middle = area.height / 2;

    let name = spaced(&app.effects.artist_name());
    centered_line(
        buf,
        middle.saturating_sub(1),
        Line::styled(
            name,
            Style::default()
                .fg(theme.fade(theme.text_colour, alpha))
                .add_modifier(Modifier::BOLD),
        ),
    );

    centered_line(
        buf,
        area.height.saturating_sub(2),
        Line::styled(
            format!("{} SCROLL", ICON_SCROLL_DOWN),
            Style::default().fg(theme.fade(theme.muted_colour, alpha)),
        ),
    );
}

pub(super) fn render_logo(buf: &mut Buffer, app: &App, view: SectionView) {
    let theme = &app.theme;
    let area = buf.area;
    let strength = emphasis(view.progress);

    for spark in app.effects.sparkles().sparks() {
        let x = (spark.x * area.width as f64) as u16;
        let y = (spark.y * area.height as f64) as u16;
        let glyph = if spark.scale > 0.7 {
            ICON_SPARK_LARGE
        } else {
            ICON_SPARK_SMALL
        };
        if let Some(cell) = buf.cell_mut((x.min(area.width.saturating_sub(1)), y.min(area.height.saturating_sub(1)))) {
            cell.set_symbol(glyph)
                .set_fg(theme.fade(theme.text_colour, spark.opacity * strength));
        }
    }

    let site = &app.config.site;
    let middle = area.height / 2;

    centered_line(
        buf,
        middle.saturating_sub(1),
        Line::styled(
            spaced(&site.tagline),
            Style::default().fg(theme.fade(theme.muted_colour, strength)),
        ),
    );
    centered_line(
        buf,
        middle + 1,
        Line::styled(
            site.headline.clone(),
            Style::default()
                .fg(theme.fade(theme.accent_colour, strength))
                .add_modifier(Modifier::BOLD),
        ),
    );
}

/// The footer stays blank until it has been seen once, then stays revealed.
pub(super) fn render_footer(buf: &mut Buffer, app: &App, view: SectionView) {
    if !view.has_entered_view {
        return;
    }

    let theme = &app.theme;
    let area = buf.area;
    let middle = area.height / 2;

    centered_line(
        buf,
        middle.saturating_sub(1),
        Line::styled(
            spaced(&app.config.site.artist_name),
            Style::default().fg(theme.secondary_colour).add_modifier(Modifier::BOLD),
        ),
    );
    centered_line(
        buf,
        middle + 1,
        Line::styled(
            format!("\u{a9} {}", app.config.site.footer),
            Style::default().fg(theme.muted_colour),
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaced() {
        assert_eq!(spaced("ABC"), "A B C");
        assert_eq!(spaced(""), "");
    }

    #[test]
    fn test_fades() {
        assert_eq!(fade_out(0.5), 1.0);
        assert_eq!(fade_out(1.0), 0.0);
        assert_eq!(emphasis(0.5), 1.0);
        assert_eq!(emphasis(0.0), 0.0);
    }
}
