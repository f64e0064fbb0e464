// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde_json::json;

use super::*;

#[test]
fn decode_show_progress_with_decimal_string() {
    let body = json!([{
        "show_id": Uuid::new_v4(),
        "show_tmdb_id": 1399,
        "show_title": "Some Show",
        "user_id": Uuid::new_v4(),
        "total_episodes": 73,
        "watched_episodes": 10,
        "watched_percent": "13.70",
    }])
    .to_string();
    let rows = decode_show_progress(body.as_bytes()).unwrap();
    assert_eq!("Some Show: 10/73 (13.70%)", rows[0].to_string());
}

#[test]
fn decode_watch_event_list_item() {
    let batch_id = Uuid::new_v4();
    let body = json!([
        {
            "watch_id": Uuid::new_v4(),
            "user_id": Uuid::new_v4(),
            "media_item_id": Uuid::new_v4(),
            "watched_at": "2025-02-11T20:15:00Z",
            "playback_source": "legacy_source",
            "total_seconds": null,
            "watched_seconds": 1800,
            "progress_percent": 75.5,
            "completed": false,
            "import_batch_id": batch_id,
            "media_item_title": "Pilot",
            "media_item_type": "episode",
            "media_item_season_number": 1,
            "media_item_episode_number": 2,
        },
        {
            "watch_id": Uuid::new_v4(),
            "user_id": Uuid::new_v4(),
            "media_item_id": Uuid::new_v4(),
            "watched_at": "2025-02-10T20:15:00Z",
            "playback_source": "legacy_source",
            "completed": true,
            "media_item_type": "podcast",
        },
    ])
    .to_string();
    let events = decode_watch_events(body.as_bytes()).unwrap();
    assert_eq!(2, events.len());
    assert_eq!("Pilot (S1E2)", events[0].title());
    assert_eq!(Some("75.5"), events[0].progress_percent.as_deref());
    assert_eq!(Some(batch_id), events[0].import_batch_id);
    assert_eq!(None, events[1].media_item_type);
    assert_eq!(None, events[1].progress_percent);
}

#[test]
fn decode_show_list() {
    let body = json!([{
        "show_id": Uuid::new_v4(),
        "tmdb_id": 1399,
        "tvdb_id": null,
        "imdb_id": "tt0944947",
        "title": "Some Show",
        "year": 2011,
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-01T00:00:00Z",
    }])
    .to_string();
    let shows = decode_shows(body.as_bytes()).unwrap();
    assert_eq!("Some Show (2011)", shows[0].to_string());
}

#[test]
fn decode_show_detail_with_progress_of_user() {
    let show_id = Uuid::new_v4();
    let body = json!({
        "show": {
            "show_id": show_id,
            "tmdb_id": 1399,
            "tvdb_id": 121_361,
            "imdb_id": null,
            "title": "Some Show",
            "year": 2011,
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z",
        },
        "progress": [{
            "show_id": show_id,
            "show_tmdb_id": 1399,
            "show_title": "Some Show",
            "user_id": Uuid::new_v4(),
            "total_episodes": 2,
            "watched_episodes": 1,
            "watched_percent": 50.0,
        }],
        "episodes": [
            {
                "media_item_id": Uuid::new_v4(),
                "title": "Pilot",
                "season_number": 1,
                "episode_number": 1,
                "watched_count": 1,
                "watched_by_user": true,
            },
            {
                "media_item_id": Uuid::new_v4(),
                "title": "Special",
                "season_number": null,
                "episode_number": null,
                "watched_count": 0,
                "watched_by_user": false,
            },
        ],
    })
    .to_string();
    let detail = decode_show_detail(body.as_bytes()).unwrap();
    assert_eq!(show_id, detail.show.show_id);
    assert_eq!(
        vec![
            "Some Show".to_owned(),
            "Progress: 1/2 (50.0%)".to_owned(),
            "S1E1 - Pilot (watched)".to_owned(),
            "S?E? - Special (not watched)".to_owned(),
        ],
        detail.lines()
    );
}

#[test]
fn decode_show_detail_without_user() {
    let body = json!({
        "show": {
            "show_id": Uuid::new_v4(),
            "tmdb_id": 1399,
            "title": "Some Show",
        },
        "progress": [],
        "episodes": [{
            "media_item_id": Uuid::new_v4(),
            "title": "Pilot",
            "season_number": 1,
            "episode_number": 1,
            "watched_count": 4,
            "watched_by_user": null,
        }],
    })
    .to_string();
    let detail = decode_show_detail(body.as_bytes()).unwrap();
    assert!(detail.progress.is_none());
    assert_eq!("S1E1 - Pilot (watches: 4)", detail.episodes[0].to_string());
}
