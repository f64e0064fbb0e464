// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use klug_core::{HistoryQuery, Show, ShowDetail, ShowProgress, WatchEvent};
use klug_core_json::library::{
    decode_show_detail, decode_show_progress, decode_shows, decode_watch_events,
};
use uuid::Uuid;

use crate::webapi::{Request, SHOW_PROGRESS_PATH, SHOWS_PATH, WebApi};

pub async fn fetch_shows<A>(api: &A) -> anyhow::Result<Vec<Show>>
where
    A: WebApi + ?Sized,
{
    let response_body = api.send(Request::get(SHOWS_PATH)).await?.into_success_body()?;
    let shows = decode_shows(&response_body)?;
    log::debug!("Fetched {} show(s)", shows.len());
    Ok(shows)
}

pub async fn fetch_show_progress<A>(api: &A) -> anyhow::Result<Vec<ShowProgress>>
where
    A: WebApi + ?Sized,
{
    let response_body = api
        .send(Request::get(SHOW_PROGRESS_PATH))
        .await?
        .into_success_body()?;
    let progress = decode_show_progress(&response_body)?;
    log::debug!("Fetched {} progress row(s)", progress.len());
    Ok(progress)
}

pub async fn fetch_show_detail<A>(api: &A, show_id: &Uuid) -> anyhow::Result<ShowDetail>
where
    A: WebApi + ?Sized,
{
    let response_body = api
        .send(Request::fetch_show_detail(show_id))
        .await?
        .into_success_body()?;
    let detail = decode_show_detail(&response_body)?;
    log::debug!(
        "Fetched detail of show {show_id} with {} episode(s)",
        detail.episodes.len()
    );
    Ok(detail)
}

pub async fn fetch_watch_events<A>(
    api: &A,
    query: &HistoryQuery,
) -> anyhow::Result<Vec<WatchEvent>>
where
    A: WebApi + ?Sized,
{
    let response_body = api
        .send(Request::fetch_watch_events(query))
        .await?
        .into_success_body()?;
    let events = decode_watch_events(&response_body)?;
    log::debug!(
        "Fetched {} watch event(s) of page {}",
        events.len(),
        query.page()
    );
    Ok(events)
}
