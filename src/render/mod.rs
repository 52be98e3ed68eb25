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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every event. Each visible page section is drawn into its own buffer, one
//! viewport tall, and copied onto the frame at its scroll position. The
//! header and the status line are drawn on top.
//!
//! Drawing also records the clickable areas of the frame in a [`HitMap`],
//! which the event router consults for the next mouse click.

mod albums;
mod commander;
mod header;
mod icons;
mod sections;

use std::time::Instant;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    widgets::Block,
};

use crate::{
    App, MainView,
    model::SectionKind,
    render::{commander::draw_status_line, header::{draw_header, draw_shop}},
    util::layout,
};

/// Something clickable on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Hit {
    Back,
    Shop,
    ShopBack,
    Prev,
    Next,
    Dot(usize),
}

/// Clickable areas of the last frame, in screen coordinates.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitMap {
    pub(crate) back: Option<Rect>,
    pub(crate) shop: Option<Rect>,
    pub(crate) shop_back: Option<Rect>,
    pub(crate) prev: Option<Rect>,
    pub(crate) next: Option<Rect>,
    pub(crate) dots: Vec<Rect>,
}

impl HitMap {
    pub(crate) fn hit(&self, position: Position) -> Option<Hit> {
        let inside = |area: &Option<Rect>| area.is_some_and(|r| r.contains(position));

        if inside(&self.back) {
            Some(Hit::Back)
        } else if inside(&self.shop) {
            Some(Hit::Shop)
        } else if inside(&self.shop_back) {
            Some(Hit::ShopBack)
        } else if inside(&self.prev) {
            Some(Hit::Prev)
        } else if inside(&self.next) {
            Some(Hit::Next)
        } else {
            self.dots.iter().position(|r| r.contains(position)).map(Hit::Dot)
        }
    }
}

/// Renders the user interface to the terminal frame.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, so that the
///   frame's clickable areas can be recorded.
/// * `now` - The time the frame is drawn for, used to read the navigation
///   lock.
pub(crate) fn draw(f: &mut Frame, app: &mut App, now: Instant) {
    let area = f.area();
    app.hits = HitMap::default();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour).fg(app.theme.text_colour)),
        area,
    );

    let [page, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    match app.main_view {
        MainView::Site => draw_site(f, page, app, now),
        MainView::Shop => draw_shop(f, page, app),
    }

    draw_status_line(f, status, app);
}

fn draw_site(f: &mut Frame, area: Rect, app: &mut App, now: Instant) {
    if area.is_empty() {
        return;
    }

    let offset = app.composer.offset() as i64;
    let sections: Vec<SectionKind> = app.composer.sections().to_vec();

    for (index, kind) in sections.into_iter().enumerate() {
        let top = app.composer.section_top(index) as i64 - offset;
        if top >= area.height as i64 || top + (area.height as i64) <= 0 {
            continue;
        }

        let local = Rect::new(0, 0, area.width, area.height);
        let mut buf = Buffer::empty(local);
        let view = app.composer.view(index);
        let dx = area.x as i32;
        let dy = area.y as i32 + top as i32;

        match kind {
            SectionKind::Intro => sections::render_intro(&mut buf, app, view),
            SectionKind::Logo => sections::render_logo(&mut buf, app, view),
            SectionKind::Albums => albums::render_albums(&mut buf, app, (dx, dy, area), now),
            SectionKind::Footer => sections::render_footer(&mut buf, app, view),
        }

        layout::blit(&buf, f.buffer_mut(), dx, dy, area);
    }

    if app.composer.header_visible() {
        draw_header(f, area, app);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::AppConfig;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_hit_map() {
        let hits = HitMap {
            back: Some(Rect::new(0, 0, 6, 1)),
            dots: vec![Rect::new(10, 5, 1, 1), Rect::new(12, 5, 1, 1)],
            ..HitMap::default()
        };

        assert_eq!(hits.hit(Position::new(2, 0)), Some(Hit::Back));
        assert_eq!(hits.hit(Position::new(12, 5)), Some(Hit::Dot(1)));
        assert_eq!(hits.hit(Position::new(11, 5)), None);
    }

    #[test]
    fn test_draws_intro_and_shop() {
        let (task_tx, _task_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), task_tx).unwrap();
        let now = std::time::Instant::now();
        crate::events::handle_event(
            &mut app,
            crate::events::AppEvent::Input(crossterm::event::Event::Resize(80, 24)),
            now,
        )
        .unwrap();
        let later = now + std::time::Duration::from_secs(5);
        crate::events::handle_event(&mut app, crate::events::AppEvent::Tick, later).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app, later)).unwrap();
        assert!(screen(&terminal).contains("A A D H Y A R A J A"));
        assert!(app.hits.back.is_none());

        app.main_view = MainView::Shop;
        terminal.draw(|f| draw(f, &mut app, later)).unwrap();
        assert!(screen(&terminal).contains("Coming Soon"));
        assert!(app.hits.shop_back.is_some());
    }

    #[test]
    fn test_arrows_dim_while_locked() {
        use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
        use std::time::Duration;

        use crate::events::{AppEvent, handle_event};

        let key = |code| AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
        let ms = Duration::from_millis;

        let (task_tx, _task_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), task_tx).unwrap();
        let t0 = std::time::Instant::now();
        handle_event(&mut app, AppEvent::Input(Event::Resize(80, 25)), t0).unwrap();
        handle_event(&mut app, key(KeyCode::PageDown), t0).unwrap();
        handle_event(&mut app, AppEvent::Tick, t0 + ms(500)).unwrap();
        handle_event(&mut app, key(KeyCode::PageDown), t0 + ms(600)).unwrap();
        handle_event(&mut app, AppEvent::Tick, t0 + ms(1100)).unwrap();
        handle_event(&mut app, AppEvent::Tick, t0 + ms(1700)).unwrap();
        assert_eq!(app.composer.active(), SectionKind::Albums);

        let now = t0 + ms(1700);
        handle_event(&mut app, key(KeyCode::Right), now).unwrap();
        assert_eq!(app.carousel.as_ref().map(|c| c.index()), Some(1));

        let mut terminal = Terminal::new(TestBackend::new(80, 25)).unwrap();
        let arrow_fg = |terminal: &Terminal<TestBackend>| {
            terminal.backend().buffer().cell((1, 12)).map(|c| (c.symbol().to_string(), c.fg))
        };

        terminal.draw(|f| draw(f, &mut app, now + ms(100))).unwrap();
        assert_eq!(
            arrow_fg(&terminal),
            Some((icons::ICON_ARROW_LEFT.to_string(), app.theme.muted_colour))
        );

        handle_event(&mut app, AppEvent::Tick, now + ms(800)).unwrap();
        terminal.draw(|f| draw(f, &mut app, now + ms(800))).unwrap();
        assert_eq!(
            arrow_fg(&terminal),
            Some((icons::ICON_ARROW_LEFT.to_string(), app.theme.text_colour))
        );
    }
}
