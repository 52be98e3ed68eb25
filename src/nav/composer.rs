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

//! Page-level section composition.
//!
//! The page is a vertical stack of sections, each exactly one viewport tall.
//! The [`SectionComposer`] owns the page scroll offset and derives from it:
//!
//! * the active section, the one with more than the visibility threshold of
//!   its height on screen;
//! * per-section visibility ([`SectionView`]) used for reveal effects;
//! * the header flag, set once the page has scrolled past a fraction of the
//!   first section.
//!
//! Boundary exits from the carousel become smooth transitions to the
//! adjacent section. Transitions never skip sections.

use std::time::Instant;

use tracing::{debug, info};

use crate::{
    config::PageConfig,
    error::NavError,
    model::SectionKind,
    nav::BoundaryExit,
    scroll::ScrollAnimator,
};

/// Visibility of one section at the current scroll offset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct SectionView {
    pub(crate) in_view: bool,
    /// Set the first time the section comes into view, never cleared.
    pub(crate) has_entered_view: bool,
    /// `0.0` while the section top sits at the viewport bottom, `1.0` once it
    /// has scrolled fully past the viewport top.
    pub(crate) progress: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SectionChange {
    pub(crate) from: SectionKind,
    pub(crate) to: SectionKind,
}

#[derive(Debug)]
pub(crate) struct SectionComposer {
    sections: Vec<SectionKind>,
    views: Vec<SectionView>,
    section_height: u16,
    scroll: ScrollAnimator,
    active: usize,
    header_visible: bool,
    visibility_threshold: f64,
    header_fraction: f64,
}

impl SectionComposer {
    pub(crate) fn new(sections: Vec<SectionKind>, page: &PageConfig) -> Result<Self, NavError> {
        if sections.is_empty() {
            return Err(NavError::NoSections);
        }

        let mut composer = Self {
            views: vec![SectionView::default(); sections.len()],
            sections,
            section_height: 0,
            scroll: ScrollAnimator::new(page.transition(), page.easing),
            active: 0,
            header_visible: false,
            visibility_threshold: page.visibility_threshold,
            header_fraction: page.header_fraction,
        };
        composer.refresh();
        Ok(composer)
    }

    pub(crate) fn sections(&self) -> &[SectionKind] {
        &self.sections
    }

    pub(crate) fn active(&self) -> SectionKind {
        self.sections[self.active]
    }

    pub(crate) fn view(&self, index: usize) -> SectionView {
        self.views.get(index).copied().unwrap_or_default()
    }

    pub(crate) fn header_visible(&self) -> bool {
        self.header_visible
    }

    pub(crate) fn offset(&self) -> u16 {
        self.scroll.current()
    }

    pub(crate) fn section_height(&self) -> u16 {
        self.section_height
    }

    pub(crate) fn is_transitioning(&self) -> bool {
        self.scroll.is_animating()
    }

    pub(crate) fn position_of(&self, kind: SectionKind) -> Option<usize> {
        self.sections.iter().position(|s| *s == kind)
    }

    /// Top of a section in page coordinates.
    pub(crate) fn section_top(&self, index: usize) -> u32 {
        index as u32 * self.section_height as u32
    }

    /// Lays the sections out for a new viewport height, keeping the active
    /// section aligned with the top of the viewport.
    pub(crate) fn resize(&mut self, viewport_height: u16) -> Option<SectionChange> {
        if viewport_height == self.section_height {
            return None;
        }
        self.section_height = viewport_height;
        self.scroll.set(self.offset_of(self.active));
        self.refresh()
    }

    /// Fraction of a section's height inside the viewport.
    pub(crate) fn visibility_ratio(&self, index: usize) -> f64 {
        if self.section_height == 0 {
            return if index == self.active { 1.0 } else { 0.0 };
        }

        let height = self.section_height as f64;
        let top = self.section_top(index) as f64;
        let viewport_top = self.scroll.current() as f64;

        let overlap = (top + height).min(viewport_top + height) - top.max(viewport_top);
        (overlap / height).clamp(0.0, 1.0)
    }

    /// Free scrolling, as the mouse wheel does outside the carousel.
    pub(crate) fn scroll_lines(&mut self, delta: i32, now: Instant) {
        self.scroll.scroll_by(delta, self.max_offset(), now);
    }

    pub(crate) fn scroll_to_section(&mut self, index: usize, now: Instant) -> Option<SectionKind> {
        let kind = *self.sections.get(index)?;
        info!(section = %kind, "scrolling to section");
        self.scroll.scroll_to(self.offset_of(index), self.max_offset(), now);
        Some(kind)
    }

    /// Moves one section up or down from where the page is heading.
    pub(crate) fn step(&mut self, direction: BoundaryExit, now: Instant) -> Option<SectionKind> {
        let from = self.heading_to();
        let to = match direction {
            BoundaryExit::Up => from.checked_sub(1)?,
            BoundaryExit::Down => from + 1,
        };
        self.scroll_to_section(to, now)
    }

    /// Routes a boundary exit from the carousel to the adjacent section.
    ///
    /// Returns the section being scrolled to, or `None` when the carousel is
    /// already the first or last section of the page.
    pub(crate) fn on_boundary_exit(&mut self, exit: BoundaryExit, now: Instant) -> Option<SectionKind> {
        debug!(?exit, from = %self.active(), "boundary exit");
        self.step(exit, now)
    }

    /// Advances any running transition and recomputes derived state.
    ///
    /// Returns the change of active section, if there was one.
    pub(crate) fn update(&mut self, now: Instant) -> Option<SectionChange> {
        self.scroll.update(now);
        self.refresh()
    }

    fn refresh(&mut self) -> Option<SectionChange> {
        let height = self.section_height as f64;
        let offset = self.scroll.current() as f64;

        for index in 0..self.sections.len() {
            let ratio = self.visibility_ratio(index);
            let top = self.section_top(index) as f64 - offset;
            let view = &mut self.views[index];

            view.in_view = ratio >= self.visibility_threshold;
            view.has_entered_view |= view.in_view;
            view.progress = scroll_progress(top, height, height);
        }

        self.header_visible = offset > height * self.header_fraction;

        let candidate = (0..self.sections.len())
            .map(|index| (index, self.visibility_ratio(index)))
            .filter(|(_, ratio)| *ratio > self.visibility_threshold)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index);

        match candidate {
            Some(index) if index != self.active => {
                let change = SectionChange {
                    from: self.sections[self.active],
                    to: self.sections[index],
                };
                info!(from = %change.from, to = %change.to, "active section changed");
                self.active = index;
                Some(change)
            }
            _ => None,
        }
    }

    /// The section the page is scrolling towards, or resting on.
    pub(crate) fn heading_to(&self) -> usize {
        if self.section_height == 0 {
            return self.active;
        }
        let target = self.scroll.target() as u32;
        let height = self.section_height as u32;
        (((target + height / 2) / height) as usize).min(self.sections.len() - 1)
    }

    fn offset_of(&self, index: usize) -> u16 {
        self.section_top(index).min(u16::MAX as u32) as u16
    }

    fn max_offset(&self) -> u16 {
        self.offset_of(self.sections.len() - 1)
    }
}

/// Scroll progress of an element relative to the viewport.
///
/// `top` is the element's top edge relative to the viewport top.
pub(crate) fn scroll_progress(top: f64, element_height: f64, viewport_height: f64) -> f64 {
    let progress = if top < viewport_height && top > -element_height {
        1.0 - (top + element_height) / (viewport_height + element_height)
    } else if top <= -element_height {
        1.0
    } else {
        0.0
    };
    progress.clamp(0.0, 1.0)
}
