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

//! Application events and input routing.
//!
//! Every terminal event, tick and command arrives on one channel as an
//! [`AppEvent`]. Terminal input is routed in a fixed order, stopping at the
//! first consumer:
//!
//! 1. the command line, when open or being opened;
//! 2. window resizes;
//! 3. the shop page, which swallows everything else while shown;
//! 4. global keys (quit, shop, page up and down);
//! 5. clicks on the header, the position dots and the arrows;
//! 6. the album card overlay;
//! 7. wheel, swipe and arrow input, to the carousel while it is mounted and
//!    to the page otherwise.

mod handlers;
use handlers::*;

use std::{io::Stdout, time::Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{Terminal, layout::Position, prelude::CrosstermBackend};

use crate::{
    App, MainView,
    model::SectionKind,
    nav::{BoundaryExit, Direction, RawInput},
    render::{Hit, draw},
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppEvent {
    Input(Event),

    Tick,

    GotoAlbum(i64),
    GotoSection(SectionKind),
    NextSlide,
    PrevSlide,

    SetMainView(MainView),

    LinkOpened(String),

    ExitApplication,

    Error(String),
}

/// A one-line message for the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Status {
    Info(String),
    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        let now = Instant::now();
        handle_event(app, event, now)?;

        terminal.draw(|f| draw(f, app, now))?;
    }
    Ok(())
}

/// Applies one event to the application state at `now`.
pub(crate) fn handle_event(app: &mut App, event: AppEvent, now: Instant) -> Result<()> {
    match event {
        AppEvent::Input(input) => process_input_event(app, input, now)?,
        AppEvent::Tick => handle_tick(app, now),
        AppEvent::GotoAlbum(index) => handle_goto_album(app, index, now),
        AppEvent::GotoSection(kind) => handle_goto_section(app, kind, now),
        AppEvent::NextSlide => handle_step_slide(app, Direction::Next, now),
        AppEvent::PrevSlide => handle_step_slide(app, Direction::Previous, now),
        AppEvent::SetMainView(view) => handle_set_main_view(app, view),
        AppEvent::LinkOpened(name) => handle_link_opened(app, name),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::ExitApplication => {}
    }
    Ok(())
}

/// Routes terminal input to the first component that wants it.
///
/// # Errors
///
/// Returns an error if an event or task cannot be sent, which only happens
/// once the receiving side has shut down.
fn process_input_event(app: &mut App, event: Event, now: Instant) -> Result<()> {
    if app.commander.handle_event(&event, &app.event_tx) {
        return Ok(());
    }

    if let Event::Resize(width, height) = event {
        handle_resize(app, width, height, now);
        return Ok(());
    }

    if matches!(event, Event::Key(_)) {
        app.status = None;
    }

    if app.main_view == MainView::Shop {
        return process_shop_event(app, &event);
    }

    if let Event::Key(key) = event {
        if process_global_key_event(app, key, now)? {
            return Ok(());
        }
    }

    if let Event::Mouse(mouse) = event {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            if let Some(hit) = app.hits.hit(Position::new(mouse.column, mouse.row)) {
                return process_hit(app, hit, now);
            }
        }
    }

    if app.carousel.is_some() {
        let (consumed, action) = app.album_card.process_event(&event);
        if let Some(action) = action {
            handle_card_action(app, action)?;
        }
        if consumed {
            return Ok(());
        }
    }

    if let Some(raw) = app.gestures.track(&event) {
        process_raw_input(app, &raw, now);
    }

    Ok(())
}

/// Handles the keys that work anywhere on the site.
///
/// Returns `true` if the key was consumed.
fn process_global_key_event(app: &mut App, key: KeyEvent, now: Instant) -> Result<bool> {
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('s') => app.event_tx.send(AppEvent::SetMainView(MainView::Shop))?,

        KeyCode::PageDown | KeyCode::Char(' ') => {
            app.composer.step(BoundaryExit::Down, now);
        }
        KeyCode::PageUp => {
            app.composer.step(BoundaryExit::Up, now);
        }

        KeyCode::Home => {
            app.composer.scroll_to_section(0, now);
        }
        KeyCode::End => {
            let last = app.composer.sections().len() - 1;
            app.composer.scroll_to_section(last, now);
        }

        _ => return Ok(false),
    }

    Ok(true)
}

fn process_shop_event(app: &mut App, event: &Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Esc | KeyCode::Char('b') => app.event_tx.send(AppEvent::SetMainView(MainView::Site))?,
            KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,
            _ => {}
        },

        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            if app.hits.hit(Position::new(mouse.column, mouse.row)) == Some(Hit::ShopBack) {
                app.event_tx.send(AppEvent::SetMainView(MainView::Site))?;
            }
        }

        _ => {}
    }

    Ok(())
}

fn process_hit(app: &mut App, hit: Hit, now: Instant) -> Result<()> {
    match hit {
        Hit::Back => app.event_tx.send(AppEvent::GotoSection(SectionKind::Intro))?,
        Hit::Shop => app.event_tx.send(AppEvent::SetMainView(MainView::Shop))?,
        Hit::ShopBack => app.event_tx.send(AppEvent::SetMainView(MainView::Site))?,
        Hit::Dot(index) => handle_goto_album(app, index as i64, now),
        Hit::Prev => handle_step_slide(app, Direction::Previous, now),
        Hit::Next => handle_step_slide(app, Direction::Next, now),
    }

    Ok(())
}

/// Sends wheel, swipe and key input to the carousel when it is mounted,
/// otherwise moves the page.
fn process_raw_input(app: &mut App, raw: &RawInput, now: Instant) {
    if let Some(carousel) = app.carousel.as_mut() {
        // Input arriving mid-transition belongs to the gesture that started it.
        if app.composer.is_transitioning() {
            return;
        }
        if let Some(effect) = carousel.handle_input(raw, now) {
            apply_effect(app, effect, now);
        }
        return;
    }

    match raw {
        RawInput::Wheel { delta_y } => {
            let lines = app.config.page.wheel_lines as i32;
            let delta = if *delta_y > 0.0 { lines } else { -lines };
            app.composer.scroll_lines(delta, now);
        }

        _ => {
            if let Some(direction) = app.page_normalizer.normalize(raw) {
                let exit = match direction {
                    Direction::Next => BoundaryExit::Down,
                    Direction::Previous => BoundaryExit::Up,
                };
                app.composer.step(exit, now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::mpsc::{self, Receiver},
        time::Duration,
    };

    use crossterm::event::{KeyModifiers, MouseEvent};

    use super::*;
    use crate::{config::AppConfig, tasks::AppTask};

    fn app() -> (App, Receiver<AppTask>, Instant) {
        let (task_tx, task_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), task_tx).unwrap();
        let now = Instant::now();
        handle_event(&mut app, AppEvent::Input(Event::Resize(80, 25)), now).unwrap();
        (app, task_rx, now)
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> AppEvent {
        AppEvent::Input(Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// Pages down to the albums section and lets everything settle.
    fn to_albums(app: &mut App, now: Instant) -> Instant {
        handle_event(app, key(KeyCode::PageDown), now).unwrap();
        handle_event(app, AppEvent::Tick, now + ms(500)).unwrap();
        handle_event(app, key(KeyCode::PageDown), now + ms(600)).unwrap();
        handle_event(app, AppEvent::Tick, now + ms(1100)).unwrap();
        handle_event(app, AppEvent::Tick, now + ms(1700)).unwrap();
        now + ms(1700)
    }

    fn drain(app: &App) -> Vec<AppEvent> {
        app.event_rx.try_iter().collect()
    }

    #[test]
    fn test_carousel_mounts_with_albums_section() {
        let (mut app, _tasks, now) = app();
        assert_eq!(app.composer.active(), SectionKind::Intro);
        assert!(app.carousel.is_none());

        to_albums(&mut app, now);
        assert_eq!(app.composer.active(), SectionKind::Albums);
        assert_eq!(app.carousel.as_ref().map(|c| c.index()), Some(0));
        assert!(app.effects.grain_mounted());
    }

    #[test]
    fn test_carousel_navigation_and_boundary_exit() {
        let (mut app, _tasks, now) = app();
        let now = to_albums(&mut app, now);

        handle_event(&mut app, key(KeyCode::Right), now).unwrap();
        assert_eq!(app.carousel.as_ref().map(|c| c.index()), Some(1));

        // Inside the cool-down
        handle_event(&mut app, key(KeyCode::Right), now + ms(100)).unwrap();
        assert_eq!(app.carousel.as_ref().map(|c| c.index()), Some(1));

        handle_event(&mut app, key(KeyCode::Right), now + ms(800)).unwrap();
        assert_eq!(app.carousel.as_ref().map(|c| c.index()), Some(2));

        // Past the last slide the page moves on to the footer
        handle_event(&mut app, key(KeyCode::Down), now + ms(1600)).unwrap();
        assert!(app.composer.is_transitioning());
        handle_event(&mut app, AppEvent::Tick, now + ms(2200)).unwrap();

        assert_eq!(app.composer.active(), SectionKind::Footer);
        assert!(app.carousel.is_none());
        assert_eq!(app.resume_index, 2);
        assert!(!app.effects.grain_mounted());
    }

    #[test]
    fn test_remount_resumes_index() {
        let (mut app, _tasks, now) = app();
        let now = to_albums(&mut app, now);

        handle_event(&mut app, key(KeyCode::Right), now).unwrap();
        handle_event(&mut app, key(KeyCode::PageUp), now + ms(800)).unwrap();
        handle_event(&mut app, AppEvent::Tick, now + ms(1400)).unwrap();
        assert_eq!(app.composer.active(), SectionKind::Logo);
        assert!(app.carousel.is_none());

        handle_event(&mut app, key(KeyCode::PageDown), now + ms(1500)).unwrap();
        handle_event(&mut app, AppEvent::Tick, now + ms(2100)).unwrap();
        assert_eq!(app.carousel.as_ref().map(|c| c.index()), Some(1));
    }

    #[test]
    fn test_page_wheel_scrolls_freely() {
        let (mut app, _tasks, now) = app();
        handle_event(&mut app, mouse(MouseEventKind::ScrollDown, 10, 10), now).unwrap();
        handle_event(&mut app, AppEvent::Tick, now + ms(500)).unwrap();
        assert_eq!(app.composer.offset(), 3);
        assert_eq!(app.composer.active(), SectionKind::Intro);
    }

    #[test]
    fn test_goto_album_from_elsewhere() {
        let (mut app, _tasks, now) = app();
        handle_event(&mut app, AppEvent::GotoAlbum(10), now).unwrap();
        assert_eq!(app.resume_index, 2);

        handle_event(&mut app, AppEvent::Tick, now + ms(500)).unwrap();
        handle_event(&mut app, AppEvent::Tick, now + ms(1000)).unwrap();
        assert_eq!(app.composer.active(), SectionKind::Albums);
        assert_eq!(app.carousel.as_ref().map(|c| c.index()), Some(2));
    }

    #[test]
    fn test_goto_album_jumps_when_mounted() {
        let (mut app, _tasks, now) = app();
        let now = to_albums(&mut app, now);

        handle_event(&mut app, AppEvent::GotoAlbum(2), now).unwrap();
        assert_eq!(app.carousel.as_ref().map(|c| c.index()), Some(2));

        // The jump starts a lock window
        handle_event(&mut app, key(KeyCode::Left), now + ms(100)).unwrap();
        assert_eq!(app.carousel.as_ref().map(|c| c.index()), Some(2));
    }

    #[test]
    fn test_card_link_opens_on_worker() {
        let (mut app, tasks, now) = app();
        let now = to_albums(&mut app, now);

        handle_event(&mut app, key(KeyCode::Enter), now).unwrap();
        assert!(app.album_card.shows_links());

        handle_event(&mut app, key(KeyCode::Char('2')), now).unwrap();
        match tasks.try_recv() {
            Ok(AppTask::OpenLink(link)) => assert_eq!(link.name, "Apple Music"),
            other => panic!("unexpected task {:?}", other),
        }
    }

    #[test]
    fn test_slide_change_resets_card() {
        let (mut app, _tasks, now) = app();
        let now = to_albums(&mut app, now);

        handle_event(&mut app, key(KeyCode::Enter), now).unwrap();
        handle_event(&mut app, key(KeyCode::Right), now).unwrap();
        assert!(!app.album_card.is_hovered());
        assert!(!app.album_card.shows_links());
    }

    #[test]
    fn test_shop_view() {
        let (mut app, _tasks, now) = app();

        handle_event(&mut app, key(KeyCode::Char('s')), now).unwrap();
        for event in drain(&app) {
            handle_event(&mut app, event, now).unwrap();
        }
        assert_eq!(app.main_view, MainView::Shop);

        // Page keys do nothing on the shop page
        handle_event(&mut app, key(KeyCode::PageDown), now).unwrap();
        assert!(!app.composer.is_transitioning());

        handle_event(&mut app, key(KeyCode::Char('b')), now).unwrap();
        for event in drain(&app) {
            handle_event(&mut app, event, now).unwrap();
        }
        assert_eq!(app.main_view, MainView::Site);
    }

    #[test]
    fn test_quit_and_commander() {
        let (mut app, _tasks, now) = app();

        handle_event(&mut app, key(KeyCode::Char('q')), now).unwrap();
        assert_eq!(drain(&app), vec![AppEvent::ExitApplication]);

        for code in [KeyCode::Char(':'), KeyCode::Char('q'), KeyCode::Enter] {
            handle_event(&mut app, key(code), now).unwrap();
        }
        assert_eq!(drain(&app), vec![AppEvent::ExitApplication]);
    }

    #[test]
    fn test_arrow_clicks_share_the_cooldown() {
        let (mut app, _tasks, now) = app();
        let now = to_albums(&mut app, now);
        let click = || mouse(MouseEventKind::Down(MouseButton::Left), 78, 12);
        app.hits.next = Some(ratatui::layout::Rect::new(78, 12, 1, 1));

        handle_event(&mut app, click(), now).unwrap();
        handle_event(&mut app, click(), now + ms(200)).unwrap();
        assert_eq!(app.carousel.as_ref().map(|c| c.index()), Some(1));

        handle_event(&mut app, click(), now + ms(700)).unwrap();
        assert_eq!(app.carousel.as_ref().map(|c| c.index()), Some(2));
    }

    #[test]
    fn test_error_sets_status() {
        let (mut app, _tasks, now) = app();
        handle_event(&mut app, AppEvent::Error("boom".to_string()), now).unwrap();
        assert_eq!(app.status, Some(Status::Error("boom".to_string())));

        handle_event(&mut app, key(KeyCode::Char('x')), now).unwrap();
        assert_eq!(app.status, None);
    }
}
