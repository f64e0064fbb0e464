// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::time::Duration;

use klug_client::webapi::ClientEnvironment;
use reqwest::{
    Client, Url,
    header::{HeaderMap, HeaderValue},
};

const API_KEY_HEADER: &str = "X-API-Key";

/// Immutable environment
#[derive(Debug)]
pub(crate) struct Environment {
    service_url: Url,
    client: Client,
}

impl Environment {
    /// Requests are authenticated either by an API key or by
    /// the session cookie that is obtained when logging in.
    pub(crate) fn new(
        service_url: Url,
        api_key: Option<&str>,
        timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let mut default_headers = HeaderMap::new();
        if let Some(api_key) = api_key {
            let mut header_value = HeaderValue::from_str(api_key)?;
            header_value.set_sensitive(true);
            default_headers.insert(API_KEY_HEADER, header_value);
        }
        let mut builder = Client::builder()
            .cookie_store(true)
            .default_headers(default_headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            service_url,
            client,
        })
    }
}

impl ClientEnvironment for Environment {
    fn client(&self) -> &Client {
        &self.client
    }

    fn join_api_url(&self, query_suffix: &str) -> anyhow::Result<Url> {
        let api_url = self.service_url.join("api/")?.join(query_suffix)?;
        log::debug!("API URL: {api_url}");
        Ok(api_url)
    }
}
