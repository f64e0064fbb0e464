// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Read-only views of the watch library shown on the dashboard.

use std::fmt;

use strum::{EnumString, IntoStaticStr};
use uuid::Uuid;

/// Default page size when browsing the watch history.
pub const DEFAULT_HISTORY_PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    pub show_id: Uuid,
    pub tmdb_id: i64,
    pub tvdb_id: Option<i64>,
    pub imdb_id: Option<String>,
    pub title: String,
    pub year: Option<i32>,
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { title, year, .. } = self;
        if let Some(year) = year {
            write!(f, "{title} ({year})")
        } else {
            write!(f, "{title} (n/a)")
        }
    }
}

/// Watch progress of a single user for a show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowProgress {
    pub show_id: Uuid,
    pub show_tmdb_id: i64,
    pub show_title: String,
    pub user_id: Uuid,
    pub total_episodes: u64,
    pub watched_episodes: u64,

    /// Decimal number as reported by the backend.
    pub watched_percent: String,
}

impl fmt::Display for ShowProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            show_title,
            total_episodes,
            watched_episodes,
            watched_percent,
            ..
        } = self;
        write!(
            f,
            "{show_title}: {watched_episodes}/{total_episodes} ({watched_percent}%)"
        )
    }
}

/// An episode of a show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub media_item_id: Uuid,
    pub title: String,
    pub season_number: Option<i32>,
    pub episode_number: Option<i32>,

    /// Watch events of all users.
    pub watched_count: u64,

    /// `None` if the episode was not queried for a particular user.
    pub watched_by_user: Option<bool>,
}

impl Episode {
    #[must_use]
    pub fn watched_label(&self) -> String {
        match self.watched_by_user {
            Some(true) => "watched".to_owned(),
            Some(false) => "not watched".to_owned(),
            None => format!("watches: {}", self.watched_count),
        }
    }
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            title,
            season_number,
            episode_number,
            ..
        } = self;
        let season = season_number.map_or_else(|| "?".to_owned(), |number| number.to_string());
        let episode = episode_number.map_or_else(|| "?".to_owned(), |number| number.to_string());
        write!(
            f,
            "S{season}E{episode} - {title} ({watched})",
            watched = self.watched_label()
        )
    }
}

/// A show with its episodes and the watch progress of the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowDetail {
    pub show: Show,
    pub progress: Option<ShowProgress>,
    pub episodes: Vec<Episode>,
}

impl ShowDetail {
    #[must_use]
    pub fn progress_line(&self) -> String {
        let Some(progress) = &self.progress else {
            return "Progress: no watched data yet".to_owned();
        };
        let ShowProgress {
            total_episodes,
            watched_episodes,
            watched_percent,
            ..
        } = progress;
        format!("Progress: {watched_episodes}/{total_episodes} ({watched_percent}%)")
    }

    /// The title, the progress, and one line per episode.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.episodes.len() + 2);
        lines.push(self.show.title.clone());
        lines.push(self.progress_line());
        lines.extend(self.episodes.iter().map(ToString::to_string));
        lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MediaType {
    Movie,
    Show,
    Episode,
}

impl MediaType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// An entry of the watch history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEvent {
    pub watch_id: Uuid,
    pub user_id: Uuid,
    pub media_item_id: Uuid,
    pub watched_at: String,
    pub playback_source: String,
    pub completed: bool,

    /// Decimal number as reported by the backend.
    pub progress_percent: Option<String>,

    pub import_batch_id: Option<Uuid>,
    pub media_item_title: Option<String>,
    pub media_item_type: Option<MediaType>,
    pub season_number: Option<i32>,
    pub episode_number: Option<i32>,
}

impl WatchEvent {
    /// Title of the watched media item, falling back to its id.
    ///
    /// Episodes are suffixed with season and episode number if both are known.
    #[must_use]
    pub fn title(&self) -> String {
        let title = self
            .media_item_title
            .clone()
            .unwrap_or_else(|| self.media_item_id.to_string());
        match (self.media_item_type, self.season_number, self.episode_number) {
            (Some(MediaType::Episode), Some(season), Some(episode)) => {
                format!("{title} (S{season}E{episode})")
            }
            _ => title,
        }
    }
}

impl fmt::Display for WatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            watched_at,
            playback_source,
            completed,
            progress_percent,
            media_item_type,
            ..
        } = self;
        let title = self.title();
        let media_type = media_item_type.map_or("-", MediaType::as_str);
        let completed = if *completed { "yes" } else { "no" };
        write!(
            f,
            "{watched_at} {title} [{media_type}] {playback_source} completed: {completed}"
        )?;
        if let Some(progress_percent) = progress_percent {
            write!(f, " ({progress_percent}%)")?;
        }
        Ok(())
    }
}

/// Pagination and filtering of the watch history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryQuery {
    pub limit: u32,
    pub offset: u32,
    pub media_type: Option<MediaType>,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_HISTORY_PAGE_SIZE,
            offset: 0,
            media_type: None,
        }
    }
}

impl HistoryQuery {
    /// 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        if self.limit == 0 {
            return 1;
        }
        self.offset / self.limit + 1
    }

    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.offset > 0
    }

    /// A full page indicates that more entries might follow.
    #[must_use]
    pub const fn has_next_page(&self, loaded_count: usize) -> bool {
        self.limit > 0 && loaded_count >= self.limit as usize
    }

    #[must_use]
    pub const fn previous_page(self) -> Self {
        Self {
            offset: self.offset.saturating_sub(self.limit),
            ..self
        }
    }

    #[must_use]
    pub const fn next_page(self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.limit),
            ..self
        }
    }

    /// Changing the filter restarts at the first page.
    #[must_use]
    pub const fn with_media_type(self, media_type: Option<MediaType>) -> Self {
        Self {
            media_type,
            offset: 0,
            ..self
        }
    }

    /// Query string parameters in request order.
    #[must_use]
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let Self {
            limit,
            offset,
            media_type,
        } = self;
        let mut params = vec![("limit", limit.to_string()), ("offset", offset.to_string())];
        if let Some(media_type) = media_type {
            params.push(("media_type", media_type.as_str().to_owned()));
        }
        params
    }
}
