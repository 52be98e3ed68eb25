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

//! Input handling for the album card.
//!
//! Mouse movement drives hover, clicks drive the overlay button and links.
//! `Enter` stands in for hover plus button click, `Esc` for leaving the card,
//! and digits pick a link while the list is open.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Position;

use crate::components::album_card::{AlbumCardState, CardAction};

impl AlbumCardState {
    /// Processes an event, returning whether it was consumed and any action.
    pub(crate) fn process_event(&mut self, event: &Event) -> (bool, Option<CardAction>) {
        match event {
            Event::Mouse(mouse) => {
                let position = Position::new(mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Moved => {
                        if self.over_card(position) {
                            self.enter();
                        } else if self.hovered {
                            self.leave();
                        }
                        (false, None)
                    }

                    MouseEventKind::Down(MouseButton::Left) => {
                        if self.show_links {
                            if let Some(index) = self.link_at(position) {
                                return (true, self.link_action(index));
                            }
                        }
                        if self.hovered && self.over_button(position) {
                            self.toggle_links();
                            return (true, None);
                        }
                        (false, None)
                    }

                    _ => (false, None),
                }
            }

            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Enter => {
                    if !self.hovered {
                        self.enter();
                    }
                    self.toggle_links();
                    (true, None)
                }

                KeyCode::Esc if self.hovered => {
                    self.leave();
                    (true, None)
                }

                KeyCode::Char(c @ '1'..='9') if self.show_links => {
                    let index = (c as u8 - b'1') as usize;
                    (true, self.link_action(index))
                }

                _ => (false, None),
            },

            _ => (false, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};
    use ratatui::layout::Rect;

    use super::*;
    use crate::components::album_card::CardAreas;

    fn card() -> AlbumCardState {
        let mut state = AlbumCardState::new();
        state.set_link_count(4);
        state.areas = CardAreas {
            card: Some(Rect::new(10, 5, 30, 12)),
            button: Some(Rect::new(18, 10, 14, 1)),
            links: (0..4).map(|i| Rect::new(14, 8 + i, 20, 1)).collect(),
        };
        state
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_hover_shows_and_leave_hides() {
        let mut state = card();

        state.process_event(&mouse(MouseEventKind::Moved, 12, 6));
        assert!(state.is_hovered());

        state.process_event(&mouse(MouseEventKind::Down(MouseButton::Left), 20, 10));
        assert!(state.shows_links());

        state.process_event(&mouse(MouseEventKind::Moved, 2, 2));
        assert!(!state.is_hovered());
        assert!(!state.shows_links());
    }

    #[test]
    fn test_button_needs_hover() {
        let mut state = card();
        let (consumed, _) = state.process_event(&mouse(MouseEventKind::Down(MouseButton::Left), 20, 10));
        assert!(!consumed);
        assert!(!state.shows_links());
    }

    #[test]
    fn test_click_link() {
        let mut state = card();
        state.process_event(&mouse(MouseEventKind::Moved, 12, 6));
        state.process_event(&mouse(MouseEventKind::Down(MouseButton::Left), 20, 10));

        let (consumed, action) = state.process_event(&mouse(MouseEventKind::Down(MouseButton::Left), 15, 9));
        assert!(consumed);
        assert_eq!(action, Some(CardAction::OpenLink(1)));
    }

    #[test]
    fn test_keyboard_flow() {
        let mut state = card();

        assert_eq!(state.process_event(&key(KeyCode::Char('1'))), (false, None));

        state.process_event(&key(KeyCode::Enter));
        assert!(state.is_hovered() && state.shows_links());

        assert_eq!(state.process_event(&key(KeyCode::Char('3'))), (true, Some(CardAction::OpenLink(2))));
        assert_eq!(state.process_event(&key(KeyCode::Char('9'))), (true, None));

        state.process_event(&key(KeyCode::Enter));
        assert!(state.is_hovered() && !state.shows_links());

        state.process_event(&key(KeyCode::Esc));
        assert!(!state.is_hovered());
    }

    #[test]
    fn test_arrows_pass_through() {
        let mut state = card();
        assert_eq!(state.process_event(&key(KeyCode::Right)), (false, None));
    }
}
