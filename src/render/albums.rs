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

//! Render the albums section.
//!
//! The slides sit side by side on a horizontal strip one viewport wide per
//! album, offset by the carousel's animated strip position. Over the strip
//! go the position dots, the arrows and the scroll hints. The dots and
//! arrows are dimmed while the carousel is locked.

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::StatefulWidget,
};

use crate::{
    App,
    components::{AlbumCard, AlbumCardState},
    render::{
        icons::{ICON_ARROW_LEFT, ICON_ARROW_RIGHT, ICON_DOT, ICON_DOT_ACTIVE, ICON_GRAIN_BRIGHT, ICON_GRAIN_FAINT, ICON_GRAIN},
        sections::centered_line,
    },
    effects::grain::GrainTone,
    util::layout,
};

const UNTITLED: &str = "Untitled";

/// Draws the section into `buf`, which will be copied to the screen at
/// `(dx, dy)` and clipped to `clip`. Clickable areas are recorded in screen
/// coordinates.
pub(super) fn render_albums(buf: &mut Buffer, app: &mut App, (dx, dy, clip): (i32, i32, Rect), now: Instant) {
    render_grain(buf, app);

    let area = buf.area;
    let albums = &app.config.site.albums;
    let theme = &app.theme;

    if area.width < 4 || area.height < 4 {
        return;
    }

    if albums.is_empty() {
        centered_line(
            buf,
            area.height / 2,
            Line::styled("No albums yet", Style::default().fg(theme.muted_colour)),
        );
        return;
    }

    let slides = match app.carousel.as_ref() {
        Some(carousel) => SlideView {
            index: carousel.index(),
            strip_offset: carousel.strip_offset() as i32,
            is_first: carousel.is_first(),
            is_last: carousel.is_last(),
            locked: carousel.is_locked(now),
            mounted: true,
        },
        None => {
            let index = app.resume_index.min(albums.len() - 1);
            SlideView {
                index,
                strip_offset: index as i32 * area.width as i32,
                is_first: index == 0,
                is_last: index + 1 == albums.len(),
                locked: false,
                mounted: false,
            }
        }
    };
    let SlideView { index, strip_offset, mounted, .. } = slides;

    let title = app.effects.album_title();

    for (i, album) in albums.iter().enumerate() {
        let slide_x = i as i32 * area.width as i32 - strip_offset;
        if slide_x >= area.width as i32 || slide_x + area.width as i32 <= 0 {
            continue;
        }

        let mut slide = Buffer::empty(Rect::new(0, 0, area.width, area.height));
        let fallback = if album.title.is_empty() {
            UNTITLED
        } else {
            album.title.as_str()
        };

        if mounted && i == index {
            let shown = if title.is_empty() { fallback } else { title.as_str() };
            AlbumCard::new(album, shown, theme).render(slide.area, &mut slide, &mut app.album_card);

            let (sx, sy) = (slide_x + dx, dy);
            let areas = &mut app.album_card.areas;
            areas.card = areas.card.and_then(|r| layout::translate(r, sx, sy, clip));
            areas.button = areas.button.and_then(|r| layout::translate(r, sx, sy, clip));
            areas.links = areas
                .links
                .iter()
                .filter_map(|r| layout::translate(*r, sx, sy, clip))
                .collect();
        } else {
            let mut scratch = AlbumCardState::new();
            AlbumCard::new(album, fallback, theme)
                .inactive()
                .render(slide.area, &mut slide, &mut scratch);
        }

        layout::blit(&slide, buf, slide_x, 0, area);
    }

    let len = albums.len();
    let lock_style = if slides.locked {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };

    // Position dots
    let dots_y = area.height.saturating_sub(3);
    let dots_width = (len * 2).saturating_sub(1) as u16;
    let dots_x = area.width.saturating_sub(dots_width) / 2;
    for i in 0..len {
        let x = dots_x + (i * 2) as u16;
        if x >= area.width {
            break;
        }
        let (glyph, colour) = if i == index {
            (ICON_DOT_ACTIVE, theme.accent_colour)
        } else {
            (ICON_DOT, theme.muted_colour)
        };
        buf.set_string(x, dots_y, glyph, lock_style.fg(colour));
        if mounted {
            if let Some(r) = layout::translate(Rect::new(x, dots_y, 1, 1), dx, dy, clip) {
                app.hits.dots.push(r);
            }
        }
    }

    // Arrows, hidden at the bounds
    let middle = area.height / 2;
    let arrow_style = if slides.locked {
        lock_style.fg(theme.muted_colour)
    } else {
        Style::default().fg(theme.text_colour).add_modifier(Modifier::BOLD)
    };
    if !slides.is_first {
        let r = Rect::new(1, middle, 1, 1);
        buf.set_string(r.x, r.y, ICON_ARROW_LEFT, arrow_style);
        if mounted {
            app.hits.prev = layout::translate(r, dx, dy, clip);
        }
    }
    if !slides.is_last {
        let r = Rect::new(area.width.saturating_sub(2), middle, 1, 1);
        buf.set_string(r.x, r.y, ICON_ARROW_RIGHT, arrow_style);
        if mounted {
            app.hits.next = layout::translate(r, dx, dy, clip);
        }
    }

    let hint = Style::default().fg(theme.muted_colour);
    if slides.is_first {
        centered_line(buf, 1, Line::from(Span::styled("SCROLL UP", hint)));
    }
    if slides.is_last {
        centered_line(buf, area.height.saturating_sub(2), Line::from(Span::styled("SCROLL DOWN", hint)));
    }
}

/// What the slide strip shows, read from the carousel when it is mounted.
struct SlideView {
    index: usize,
    strip_offset: i32,
    is_first: bool,
    is_last: bool,
    locked: bool,
    mounted: bool,
}

fn render_grain(buf: &mut Buffer, app: &App) {
    let Some(frame) = app.effects.grain_frame() else {
        return;
    };

    for grain in &frame.grains {
        let glyph = match grain.tone {
            GrainTone::Bright => ICON_GRAIN_BRIGHT,
            GrainTone::Pink | GrainTone::Blue => ICON_GRAIN,
            GrainTone::Faint => ICON_GRAIN_FAINT,
        };
        let colour = app.theme.fade(app.theme.grain_colour(grain.tone), grain.alpha);
        if let Some(cell) = buf.cell_mut((grain.x, grain.y)) {
            cell.set_symbol(glyph).set_fg(colour);
        }
    }
}
