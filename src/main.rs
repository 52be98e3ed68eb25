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

//! # Artist Site TUI.
//!
//! A terminal rendition of an artist's promotional site: an intro, a logo
//! section, an album carousel and a footer, stacked one screen each.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, navigation state and
//!   UI rendering.
//! * A **Background Worker** handles blocking actions such as opening
//!   streaming links in the browser.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state and its animations.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod commander;
mod components;
mod config;
mod effects;
mod error;
mod events;
mod model;
mod nav;
mod render;
mod scroll;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::{
    fs::File,
    io::{self},
    sync::{
        Mutex,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Instant,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::{
    commander::Commander,
    components::AlbumCardState,
    config::AppConfig,
    effects::SiteEffects,
    events::{AppEvent, Status, handle_event, process_events},
    model::SectionKind,
    nav::{CarouselController, GestureTracker, SectionComposer, input::InputNormalizer},
    render::HitMap,
    tasks::{AppTask, SystemOpener},
    theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainView {
    Site,
    Shop,
}

/// Application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,

    pub(crate) theme: Theme,
    pub(crate) main_view: MainView,

    pub(crate) event_tx: Sender<AppEvent>,
    pub(crate) event_rx: Receiver<AppEvent>,

    pub(crate) task_tx: Sender<AppTask>,

    pub(crate) composer: SectionComposer,
    pub(crate) carousel: Option<CarouselController>,
    /// Slide to resume from when the carousel is next mounted.
    pub(crate) resume_index: usize,

    pub(crate) gestures: GestureTracker,
    pub(crate) page_normalizer: InputNormalizer,

    pub(crate) album_card: AlbumCardState,
    pub(crate) effects: SiteEffects,

    pub(crate) commander: Commander,
    pub(crate) hits: HitMap,
    pub(crate) status: Option<Status>,
    pub(crate) viewport: Rect,
}

impl App {
    /// Create a new instance of application state.
    pub(crate) fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let composer = SectionComposer::new(SectionKind::PAGE.to_vec(), &config.page)
            .context("Failed to lay out the page")?;
        let effects = SiteEffects::new(&config.effects, &config.site, Instant::now());

        Ok(Self {
            theme: Theme::default(),
            main_view: MainView::Site,
            event_tx,
            event_rx,
            task_tx,
            composer,
            carousel: None,
            resume_index: 0,
            gestures: GestureTracker::new(&config.navigation),
            page_normalizer: InputNormalizer::new(config.navigation.swipe_threshold_px),
            album_card: AlbumCardState::new(),
            effects,
            commander: Commander::new(),
            hits: HitMap::default(),
            status: None,
            viewport: Rect::default(),
            config,
        })
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    init_logging();

    let config = config::load_config();

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx).context("Failed to initialise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Sends log output to a file, since the terminal belongs to the UI.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Failing to set up
/// logging is not fatal.
fn init_logging() {
    let path = config::log_file_path();
    if let Some(dir) = path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }

    let Ok(file) = File::create(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init();
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables mouse capture, for the wheel, clicks, drags and hover.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        if let Err(e) = util::term::set_terminal_bg(&hex) {
            warn!(error = %e, "could not set terminal background");
        }
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process blocking [`AppTask`]s.
/// * An input thread to read terminal events.
/// * A tick thread to drive animations and effects.
///
/// After spawning the workers, it lays the page out for the current terminal
/// size and hands control to [`process_events`].
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    tasks::spawn_task_worker(SystemOpener, task_rx, app.event_tx.clone());

    // Spawn a thread to forward raw terminal events to the application.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if tx_input.send(AppEvent::Input(event)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "terminal input failed");
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the frame rate of every animation.
    let tx_tick = app.event_tx.clone();
    let tick_rate = app.config.page.tick_rate();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(tick_rate);
        }
    });

    let (width, height) = terminal::size().context("Failed to read terminal size")?;
    handle_event(app, AppEvent::Input(event::Event::Resize(width, height)), Instant::now())?;
    info!(width, height, "site started");

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
