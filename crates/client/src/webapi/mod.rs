// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Requests and responses of the backend API.

use std::future::Future;

use bytes::Bytes;
use klug_core::{HistoryQuery, ImportBatchId};
use mime::Mime;
use uuid::Uuid;

#[cfg(feature = "webapi-backend")]
mod backend;
#[cfg(feature = "webapi-backend")]
pub use self::backend::{ClientEnvironment, receive_response};

#[cfg(test)]
pub(crate) mod mock;

pub const UPLOAD_IMPORT_PATH: &str = "v1/imports/watch-events/legacy-source/upload";

pub const IMPORT_BATCHES_PATH: &str = "v1/import-batches";

pub const SESSION_ME_PATH: &str = "v1/session/me";

pub const SESSION_LOGIN_PATH: &str = "v1/session/login";

pub const SESSION_LOGOUT_PATH: &str = "v1/session/logout";

pub const SHOWS_PATH: &str = "v1/shows";

pub const SHOW_PROGRESS_PATH: &str = "v1/shows/progress";

pub const WATCH_EVENTS_PATH: &str = "v1/watch-events";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone)]
pub struct FilePart {
    pub field_name: &'static str,
    pub file_name: String,
    pub mime_type: Mime,
    pub content: Bytes,
}

#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    pub text_fields: Vec<(&'static str, String)>,
    pub file: Option<FilePart>,
}

impl MultipartForm {
    #[must_use]
    pub fn text_field(&self, name: &str) -> Option<&str> {
        self.text_fields
            .iter()
            .find_map(|(field_name, value)| (*field_name == name).then_some(value.as_str()))
    }
}

#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,

    /// Path relative to the API base URL.
    pub path: String,

    pub query: Vec<(&'static str, String)>,
    pub body: RequestBody,
}

impl Request {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    #[must_use]
    pub fn post(path: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            body,
        }
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: Vec<(&'static str, String)>) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub fn fetch_import_batch_errors(import_batch_id: &ImportBatchId, limit: u32) -> Self {
        Self::get(format!("{IMPORT_BATCHES_PATH}/{import_batch_id}/errors"))
            .with_query(vec![("limit", limit.to_string())])
    }

    #[must_use]
    pub fn fetch_import_batches(limit: u32) -> Self {
        Self::get(IMPORT_BATCHES_PATH).with_query(vec![("limit", limit.to_string())])
    }

    #[must_use]
    pub fn fetch_show_detail(show_id: &Uuid) -> Self {
        Self::get(format!("{SHOWS_PATH}/{show_id}"))
    }

    #[must_use]
    pub fn fetch_watch_events(query: &HistoryQuery) -> Self {
        Self::get(WATCH_EVENTS_PATH).with_query(query.query_params())
    }
}

/// A response with any status code.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// The body of a successful response.
    pub fn into_success_body(self) -> anyhow::Result<Bytes> {
        if self.is_success() {
            return Ok(self.body);
        }
        let Self { status, body } = self;
        let err = anyhow::anyhow!("HTTP status {status}");
        let json = serde_json::from_slice::<serde_json::Value>(&body).unwrap_or_default();
        let err = if json.is_null() {
            err
        } else {
            err.context(json)
        };
        Err(err)
    }
}

/// Sends requests to the backend.
///
/// Only transport failures are reported as errors. Responses
/// with an error status are returned as is.
pub trait WebApi {
    fn send(&self, request: Request) -> impl Future<Output = anyhow::Result<Response>> + Send;
}
