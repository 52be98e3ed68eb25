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

use std::time::Instant;

use anyhow::Result;
use ratatui::layout::Rect;
use tracing::{info, warn};

use crate::{
    App, MainView,
    components::CardAction,
    events::Status,
    model::SectionKind,
    nav::{CarouselController, Direction, Effect, composer::SectionChange},
    tasks::AppTask,
};

/// Rows reserved below the page for the status line.
const STATUS_ROWS: u16 = 1;

pub(super) fn handle_tick(app: &mut App, now: Instant) {
    if let Some(change) = app.composer.update(now) {
        handle_section_change(app, change, now);
    }

    if let Some(carousel) = app.carousel.as_mut() {
        carousel.update(now);
    }

    app.effects.update(now);
}

pub(super) fn handle_resize(app: &mut App, width: u16, height: u16, now: Instant) {
    app.viewport = Rect::new(0, 0, width, height);
    let section_height = height.saturating_sub(STATUS_ROWS);

    if let Some(change) = app.composer.resize(section_height) {
        handle_section_change(app, change, now);
    }
    if let Some(carousel) = app.carousel.as_mut() {
        carousel.set_slide_width(width);
    }
    app.effects.resize_grain(width, section_height);
}

fn handle_section_change(app: &mut App, change: SectionChange, now: Instant) {
    if change.from == SectionKind::Albums {
        unmount_albums(app);
    }
    if change.to == SectionKind::Albums {
        mount_albums(app, now);
    }
}

/// Builds the carousel for the albums section, resuming from the slide it
/// was last torn down on.
fn mount_albums(app: &mut App, now: Instant) {
    if app.carousel.is_some() {
        return;
    }

    let carousel = match CarouselController::new(
        app.config.site.albums.len(),
        app.resume_index,
        &app.config.navigation,
        &app.config.page,
    ) {
        Ok(carousel) => carousel,
        Err(e) => {
            warn!(error = %e, "albums section has nothing to show");
            app.status = Some(Status::Error(e.to_string()));
            return;
        }
    };

    app.carousel = Some(carousel);
    if let Some(carousel) = app.carousel.as_mut() {
        carousel.set_slide_width(app.viewport.width);
    }

    app.effects.mount_grain(app.viewport.width, app.composer.section_height());
    show_current_album(app, now);

    // Free scrolling stops at the carousel
    if let Some(albums) = app.composer.position_of(SectionKind::Albums) {
        if app.composer.heading_to() == albums {
            app.composer.scroll_to_section(albums, now);
        }
    }
}

fn unmount_albums(app: &mut App) {
    if let Some(carousel) = app.carousel.take() {
        app.resume_index = carousel.teardown();
    }
    app.effects.unmount_grain();
    app.album_card.reset();
}

/// Resets the card for the current slide and starts its title reveal.
fn show_current_album(app: &mut App, now: Instant) {
    let Some(index) = app.carousel.as_ref().map(|c| c.index()) else {
        return;
    };
    let Some(album) = app.config.site.albums.get(index) else {
        return;
    };

    app.album_card.reset();
    app.album_card.set_link_count(album.streaming_links.len());
    app.effects.restart_album_title(&album.title, now);
}

pub(super) fn apply_effect(app: &mut App, effect: Effect, now: Instant) {
    match effect {
        Effect::Moved(_) => show_current_album(app, now),
        Effect::BoundaryExit(exit) => {
            app.composer.on_boundary_exit(exit, now);
        }
    }
}

pub(super) fn handle_goto_album(app: &mut App, index: i64, now: Instant) {
    app.main_view = MainView::Site;

    if let Some(carousel) = app.carousel.as_mut() {
        let effect = carousel.jump_to(index, now);
        apply_effect(app, effect, now);
        return;
    }

    let len = app.config.site.albums.len();
    if len == 0 {
        app.status = Some(Status::Error("There are no albums".to_string()));
        return;
    }

    app.resume_index = index.clamp(0, len as i64 - 1) as usize;
    if let Some(albums) = app.composer.position_of(SectionKind::Albums) {
        app.composer.scroll_to_section(albums, now);
    }
}

pub(super) fn handle_goto_section(app: &mut App, kind: SectionKind, now: Instant) {
    app.main_view = MainView::Site;
    if let Some(index) = app.composer.position_of(kind) {
        app.composer.scroll_to_section(index, now);
    }
}

pub(super) fn handle_step_slide(app: &mut App, direction: Direction, now: Instant) {
    let Some(carousel) = app.carousel.as_mut() else {
        app.status = Some(Status::Info("The albums are not on screen".to_string()));
        return;
    };

    if let Some(effect) = carousel.advance(direction, now) {
        apply_effect(app, effect, now);
    }
}

pub(super) fn handle_set_main_view(app: &mut App, main_view: MainView) {
    info!(?main_view, "switching view");
    app.album_card.reset();
    if let Some(album) = app
        .carousel
        .as_ref()
        .and_then(|c| app.config.site.albums.get(c.index()))
    {
        app.album_card.set_link_count(album.streaming_links.len());
    }
    app.main_view = main_view;
}

pub(super) fn handle_card_action(app: &mut App, action: CardAction) -> Result<()> {
    match action {
        CardAction::OpenLink(link_index) => {
            let link = app
                .carousel
                .as_ref()
                .and_then(|c| app.config.site.albums.get(c.index()))
                .and_then(|album| album.streaming_links.get(link_index));

            if let Some(link) = link {
                app.task_tx.send(AppTask::OpenLink(link.clone()))?;
            }
        }
    }

    Ok(())
}

pub(super) fn handle_link_opened(app: &mut App, name: String) {
    app.status = Some(Status::Info(format!("Opened {}", name)));
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!(error = %message, "error reported");
    app.status = Some(Status::Error(message));
}
