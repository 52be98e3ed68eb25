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

//! Input normalization.
//!
//! Terminal input arrives as `crossterm` events. The [`GestureTracker`] turns
//! those into [`RawInput`]s (a mouse press/release pair is the terminal
//! equivalent of a touch swipe), and the [`InputNormalizer`] reduces every raw
//! input to at most one [`Direction`].

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};

use crate::{config::NavigationConfig, nav::Direction};

/// A position in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl Point {
    pub(crate) const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum RawInput {
    Wheel { delta_y: f64 },
    Touch { start: Point, end: Point },
    Key(KeyCode),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct InputNormalizer {
    swipe_threshold: f64,
}

impl InputNormalizer {
    pub(crate) fn new(swipe_threshold: f64) -> Self {
        Self { swipe_threshold }
    }

    /// Maps a raw input to a direction, or `None` when the input is noise.
    ///
    /// * Wheel: only the sign of the vertical delta matters.
    /// * Touch: the axis with the larger displacement decides, and a
    ///   displacement below the swipe threshold is discarded.
    /// * Key: right/down arrows go forward, left/up arrows go back.
    pub(crate) fn normalize(&self, input: &RawInput) -> Option<Direction> {
        match *input {
            RawInput::Wheel { delta_y } => sign_to_direction(delta_y),

            RawInput::Touch { start, end } => {
                let dx = end.x - start.x;
                let dy = end.y - start.y;
                let dominant = if dx.abs() >= dy.abs() { dx } else { dy };
                if dominant.abs() < self.swipe_threshold {
                    return None;
                }
                sign_to_direction(dominant)
            }

            RawInput::Key(code) => match code {
                KeyCode::Right | KeyCode::Down => Some(Direction::Next),
                KeyCode::Left | KeyCode::Up => Some(Direction::Previous),
                _ => None,
            },
        }
    }
}

fn sign_to_direction(value: f64) -> Option<Direction> {
    if value > 0.0 {
        Some(Direction::Next)
    } else if value < 0.0 {
        Some(Direction::Previous)
    } else {
        None
    }
}

/// Builds raw inputs from terminal events.
///
/// The tracker remembers where the left mouse button went down so that the
/// matching release can be reported as a swipe. Terminal coordinates are in
/// cells, so they are scaled by the configured cell size.
#[derive(Debug, Clone)]
pub(crate) struct GestureTracker {
    cell_width: f64,
    cell_height: f64,
    press: Option<(u16, u16)>,
}

impl GestureTracker {
    pub(crate) fn new(config: &NavigationConfig) -> Self {
        Self {
            cell_width: config.cell_width_px,
            cell_height: config.cell_height_px,
            press: None,
        }
    }

    pub(crate) fn track(&mut self, event: &Event) -> Option<RawInput> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(RawInput::Key(key.code)),

            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => Some(RawInput::Wheel { delta_y: 1.0 }),
                MouseEventKind::ScrollUp => Some(RawInput::Wheel { delta_y: -1.0 }),

                MouseEventKind::Down(MouseButton::Left) => {
                    self.press = Some((mouse.column, mouse.row));
                    None
                }

                MouseEventKind::Up(MouseButton::Left) => {
                    self.press.take().map(|(column, row)| RawInput::Touch {
                        start: self.to_point(column, row),
                        end: self.to_point(mouse.column, mouse.row),
                    })
                }

                _ => None,
            },

            _ => None,
        }
    }

    fn to_point(&self, column: u16, row: u16) -> Point {
        Point::new(column as f64 * self.cell_width, row as f64 * self.cell_height)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};

    use super::*;

    fn normalizer() -> InputNormalizer {
        InputNormalizer::new(50.0)
    }

    fn swipe(dx: f64, dy: f64) -> RawInput {
        RawInput::Touch {
            start: Point::new(100.0, 100.0),
            end: Point::new(100.0 + dx, 100.0 + dy),
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_wheel_uses_sign_only() {
        let n = normalizer();
        assert_eq!(n.normalize(&RawInput::Wheel { delta_y: 0.01 }), Some(Direction::Next));
        assert_eq!(n.normalize(&RawInput::Wheel { delta_y: 900.0 }), Some(Direction::Next));
        assert_eq!(n.normalize(&RawInput::Wheel { delta_y: -3.0 }), Some(Direction::Previous));
        assert_eq!(n.normalize(&RawInput::Wheel { delta_y: 0.0 }), None);
    }

    #[test]
    fn test_short_swipe_is_noise() {
        assert_eq!(normalizer().normalize(&swipe(30.0, 10.0)), None);
    }

    #[test]
    fn test_horizontal_swipe_dominates() {
        assert_eq!(normalizer().normalize(&swipe(80.0, 20.0)), Some(Direction::Next));
        assert_eq!(normalizer().normalize(&swipe(-80.0, 20.0)), Some(Direction::Previous));
    }

    #[test]
    fn test_vertical_swipe_dominates() {
        assert_eq!(normalizer().normalize(&swipe(10.0, -120.0)), Some(Direction::Previous));
        assert_eq!(normalizer().normalize(&swipe(-40.0, 60.0)), Some(Direction::Next));
    }

    #[test]
    fn test_arrow_keys() {
        let n = normalizer();
        assert_eq!(n.normalize(&RawInput::Key(KeyCode::Right)), Some(Direction::Next));
        assert_eq!(n.normalize(&RawInput::Key(KeyCode::Down)), Some(Direction::Next));
        assert_eq!(n.normalize(&RawInput::Key(KeyCode::Left)), Some(Direction::Previous));
        assert_eq!(n.normalize(&RawInput::Key(KeyCode::Up)), Some(Direction::Previous));
        assert_eq!(n.normalize(&RawInput::Key(KeyCode::Char('x'))), None);
        assert_eq!(n.normalize(&RawInput::Key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_tracker_turns_press_release_into_swipe() {
        let mut tracker = GestureTracker::new(&NavigationConfig::default());

        assert_eq!(tracker.track(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 5)), None);
        let input = tracker.track(&mouse(MouseEventKind::Up(MouseButton::Left), 20, 6));

        // 10 columns of 8px and 1 row of 16px
        assert_eq!(input, Some(swipe_from(Point::new(80.0, 80.0), Point::new(160.0, 96.0))));
        assert_eq!(normalizer().normalize(&input.unwrap()), Some(Direction::Next));
    }

    #[test]
    fn test_tracker_ignores_release_without_press() {
        let mut tracker = GestureTracker::new(&NavigationConfig::default());
        assert_eq!(tracker.track(&mouse(MouseEventKind::Up(MouseButton::Left), 20, 6)), None);
    }

    #[test]
    fn test_tracker_wheel_and_keys() {
        let mut tracker = GestureTracker::new(&NavigationConfig::default());
        assert_eq!(
            tracker.track(&mouse(MouseEventKind::ScrollDown, 0, 0)),
            Some(RawInput::Wheel { delta_y: 1.0 })
        );
        assert_eq!(
            tracker.track(&mouse(MouseEventKind::ScrollUp, 0, 0)),
            Some(RawInput::Wheel { delta_y: -1.0 })
        );

        let key = Event::Key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        assert_eq!(tracker.track(&key), Some(RawInput::Key(KeyCode::Left)));
    }

    fn swipe_from(start: Point, end: Point) -> RawInput {
        RawInput::Touch { start, end }
    }
}
