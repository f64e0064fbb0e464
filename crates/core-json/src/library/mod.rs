// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use uuid::Uuid;

use crate::prelude::*;

mod _core {
    pub(super) use klug_core::library::*;
}

///////////////////////////////////////////////////////////////////////
// Show
///////////////////////////////////////////////////////////////////////

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Show {
    show_id: Uuid,
    tmdb_id: i64,

    #[serde(default)]
    tvdb_id: Option<i64>,

    #[serde(default)]
    imdb_id: Option<String>,

    title: String,

    #[serde(default)]
    year: Option<i32>,
}

impl From<Show> for _core::Show {
    fn from(from: Show) -> Self {
        let Show {
            show_id,
            tmdb_id,
            tvdb_id,
            imdb_id,
            title,
            year,
        } = from;
        Self {
            show_id,
            tmdb_id,
            tvdb_id,
            imdb_id,
            title,
            year,
        }
    }
}

///////////////////////////////////////////////////////////////////////
// ShowProgress
///////////////////////////////////////////////////////////////////////

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ShowProgress {
    show_id: Uuid,
    show_tmdb_id: i64,
    show_title: String,
    user_id: Uuid,
    total_episodes: u64,
    watched_episodes: u64,
    watched_percent: Decimal,
}

impl From<ShowProgress> for _core::ShowProgress {
    fn from(from: ShowProgress) -> Self {
        let ShowProgress {
            show_id,
            show_tmdb_id,
            show_title,
            user_id,
            total_episodes,
            watched_episodes,
            watched_percent,
        } = from;
        Self {
            show_id,
            show_tmdb_id,
            show_title,
            user_id,
            total_episodes,
            watched_episodes,
            watched_percent: watched_percent.into(),
        }
    }
}

///////////////////////////////////////////////////////////////////////
// ShowDetail
///////////////////////////////////////////////////////////////////////

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Episode {
    media_item_id: Uuid,
    title: String,

    #[serde(default)]
    season_number: Option<i32>,

    #[serde(default)]
    episode_number: Option<i32>,

    #[serde(default)]
    watched_count: u64,

    #[serde(default)]
    watched_by_user: Option<bool>,
}

impl From<Episode> for _core::Episode {
    fn from(from: Episode) -> Self {
        let Episode {
            media_item_id,
            title,
            season_number,
            episode_number,
            watched_count,
            watched_by_user,
        } = from;
        Self {
            media_item_id,
            title,
            season_number,
            episode_number,
            watched_count,
            watched_by_user,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ShowDetail {
    show: Show,

    #[serde(default)]
    progress: Vec<ShowProgress>,

    #[serde(default)]
    episodes: Vec<Episode>,
}

impl From<ShowDetail> for _core::ShowDetail {
    fn from(from: ShowDetail) -> Self {
        let ShowDetail {
            show,
            progress,
            episodes,
        } = from;
        Self {
            show: show.into(),
            // Contains at most the progress of the requesting user
            progress: progress.into_iter().next().map(Into::into),
            episodes: episodes.into_iter().map(Into::into).collect(),
        }
    }
}

///////////////////////////////////////////////////////////////////////
// WatchEvent
///////////////////////////////////////////////////////////////////////

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WatchEvent {
    watch_id: Uuid,
    user_id: Uuid,
    media_item_id: Uuid,
    watched_at: String,
    playback_source: String,

    #[serde(default)]
    completed: bool,

    #[serde(default)]
    progress_percent: Option<Decimal>,

    #[serde(default)]
    import_batch_id: Option<Uuid>,

    #[serde(default)]
    media_item_title: Option<String>,

    #[serde(default)]
    media_item_type: Option<String>,

    #[serde(default)]
    media_item_season_number: Option<i32>,

    #[serde(default)]
    media_item_episode_number: Option<i32>,
}

impl From<WatchEvent> for _core::WatchEvent {
    fn from(from: WatchEvent) -> Self {
        let WatchEvent {
            watch_id,
            user_id,
            media_item_id,
            watched_at,
            playback_source,
            completed,
            progress_percent,
            import_batch_id,
            media_item_title,
            media_item_type,
            media_item_season_number,
            media_item_episode_number,
        } = from;
        let media_item_type = media_item_type.and_then(|media_type| {
            media_type
                .parse::<_core::MediaType>()
                .inspect_err(|_| log::debug!("Unknown media type: {media_type}"))
                .ok()
        });
        Self {
            watch_id,
            user_id,
            media_item_id,
            watched_at,
            playback_source,
            completed,
            progress_percent: progress_percent.map(Into::into),
            import_batch_id: non_nil_uuid(import_batch_id),
            media_item_title,
            media_item_type,
            season_number: media_item_season_number,
            episode_number: media_item_episode_number,
        }
    }
}

fn decode_list<T, U>(body: &[u8]) -> anyhow::Result<Vec<U>>
where
    T: serde::de::DeserializeOwned + Into<U>,
{
    let items = serde_json::from_slice::<Vec<T>>(body)?;
    Ok(items.into_iter().map(Into::into).collect())
}

pub fn decode_shows(body: &[u8]) -> anyhow::Result<Vec<_core::Show>> {
    decode_list::<Show, _>(body)
}

pub fn decode_show_progress(body: &[u8]) -> anyhow::Result<Vec<_core::ShowProgress>> {
    decode_list::<ShowProgress, _>(body)
}

pub fn decode_show_detail(body: &[u8]) -> anyhow::Result<_core::ShowDetail> {
    let detail = serde_json::from_slice::<ShowDetail>(body)?;
    Ok(detail.into())
}

pub fn decode_watch_events(body: &[u8]) -> anyhow::Result<Vec<_core::WatchEvent>> {
    decode_list::<WatchEvent, _>(body)
}

#[cfg(test)]
mod tests;
