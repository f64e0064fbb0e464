// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use klug_core_json::session::{LoginRequest, SessionStatus};

use crate::webapi::{
    Request, RequestBody, SESSION_LOGIN_PATH, SESSION_LOGOUT_PATH, SESSION_ME_PATH, WebApi,
};

pub async fn fetch_session_status<A>(api: &A) -> anyhow::Result<SessionStatus>
where
    A: WebApi + ?Sized,
{
    let response_body = api
        .send(Request::get(SESSION_ME_PATH))
        .await?
        .into_success_body()?;
    let status: SessionStatus = serde_json::from_slice(&response_body)?;
    log::debug!("Fetched session status: {status:?}");
    Ok(status)
}

pub async fn login<A>(api: &A, password: &str) -> anyhow::Result<()>
where
    A: WebApi + ?Sized,
{
    let body = serde_json::to_value(LoginRequest { password })?;
    api.send(Request::post(SESSION_LOGIN_PATH, RequestBody::Json(body)))
        .await?
        .into_success_body()?;
    Ok(())
}

pub async fn logout<A>(api: &A) -> anyhow::Result<()>
where
    A: WebApi + ?Sized,
{
    api.send(Request::delete(SESSION_LOGOUT_PATH))
        .await?
        .into_success_body()?;
    Ok(())
}
