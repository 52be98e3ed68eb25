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

//! Site content.
//!
//! This module defines the static payload shown by the site: the artist, the
//! albums in the carousel with their streaming links, and the ordered page
//! sections. Content is read-only once loaded.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StreamingLink {
    pub name: String,
    pub url: String,
}

impl StreamingLink {
    fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub streaming_links: Vec<StreamingLink>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SiteContent {
    pub artist_name: String,
    pub tagline: String,
    pub headline: String,
    pub footer: String,
    pub albums: Vec<Album>,
}

impl Default for SiteContent {
    fn default() -> Self {
        let album = |id: &str, title: &str| Album {
            id: id.to_string(),
            title: title.to_string(),
            streaming_links: vec![
                StreamingLink::new("Spotify", "https://open.spotify.com"),
                StreamingLink::new("Apple Music", "https://music.apple.com"),
                StreamingLink::new("YouTube", "https://music.youtube.com"),
                StreamingLink::new("SoundCloud", "https://soundcloud.com"),
            ],
        };

        Self {
            artist_name: "AADHYARAJA".to_string(),
            tagline: "EXPLORE".to_string(),
            headline: "UTOPIA WORLD".to_string(),
            footer: "AADHYARAJA. All Rights Reserved.".to_string(),
            albums: vec![
                album("album-1", "UTOPIA"),
                album("album-2", "ASTROWORLD"),
                album("album-3", "RODEO"),
            ],
        }
    }
}

/// A full-viewport page region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum SectionKind {
    Intro,
    Logo,
    Albums,
    Footer,
}

impl SectionKind {
    /// The page, top to bottom.
    pub(crate) const PAGE: [SectionKind; 4] = [
        SectionKind::Intro,
        SectionKind::Logo,
        SectionKind::Albums,
        SectionKind::Footer,
    ];

    pub(crate) fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "intro" | "home" => Some(Self::Intro),
            "logo" => Some(Self::Logo),
            "albums" | "music" => Some(Self::Albums),
            "footer" => Some(Self::Footer),
            _ => None,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Intro => "intro",
            Self::Logo => "logo",
            Self::Albums => "albums",
            Self::Footer => "footer",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_section_names() {
        assert_eq!(SectionKind::parse("Albums"), Some(SectionKind::Albums));
        assert_eq!(SectionKind::parse("home"), Some(SectionKind::Intro));
        assert_eq!(SectionKind::parse("shop"), None);
    }

    #[test]
    fn test_default_albums_have_links() {
        let site = SiteContent::default();
        let titles: Vec<&str> = site.albums.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["UTOPIA", "ASTROWORLD", "RODEO"]);
        assert!(site.albums.iter().all(|a| a.streaming_links.len() == 4));
    }
}
