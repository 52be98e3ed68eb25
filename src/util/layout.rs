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

//! Geometry helpers.
//!
//! Sections and slides are drawn into their own off-screen buffers and then
//! copied onto the frame at a scroll offset, which may be negative or push
//! them partly off screen. These helpers do the clipping.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
};

/// A `width` by `height` rectangle centred in `area`, shrunk to fit.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Moves `rect` by `(dx, dy)` and clips it to `clip`.
///
/// Returns `None` when nothing of the moved rectangle is left.
pub(crate) fn translate(rect: Rect, dx: i32, dy: i32, clip: Rect) -> Option<Rect> {
    let x0 = (rect.x as i32 + dx).max(clip.x as i32);
    let y0 = (rect.y as i32 + dy).max(clip.y as i32);
    let x1 = (rect.right() as i32 + dx).min(clip.right() as i32);
    let y1 = (rect.bottom() as i32 + dy).min(clip.bottom() as i32);

    if x1 <= x0 || y1 <= y0 {
        return None;
    }

    Some(Rect::new(x0 as u16, y0 as u16, (x1 - x0) as u16, (y1 - y0) as u16))
}

/// Copies every cell of `src` onto `dst`, shifted by `(dx, dy)`, skipping
/// cells that land outside `clip`.
pub(crate) fn blit(src: &Buffer, dst: &mut Buffer, dx: i32, dy: i32, clip: Rect) {
    let area = src.area;
    let Some(visible) = translate(area, dx, dy, clip) else {
        return;
    };

    for y in visible.top()..visible.bottom() {
        for x in visible.left()..visible.right() {
            let from = Position::new((x as i32 - dx) as u16, (y as i32 - dy) as u16);
            if let (Some(cell), Some(target)) = (src.cell(from), dst.cell_mut(Position::new(x, y))) {
                *target = cell.clone();
            }
        }
    }
}
