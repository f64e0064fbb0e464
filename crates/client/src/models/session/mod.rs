// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use klug_core_json::session::SessionStatus;

use crate::util::{remote::RemoteData, roundtrip::PendingToken};

pub mod task;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unknown,
    Checking,
    Authenticated {
        auth_mode: Option<String>,
        expires_at: Option<String>,
    },
    NotAuthenticated,
    CheckFailed,
}

impl SessionState {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

impl From<SessionStatus> for SessionState {
    fn from(from: SessionStatus) -> Self {
        let SessionStatus {
            authenticated,
            auth_mode,
            expires_at,
        } = from;
        if authenticated {
            Self::Authenticated {
                auth_mode,
                expires_at,
            }
        } else {
            Self::NotAuthenticated
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => Ok(()),
            Self::Checking => f.write_str("Checking session..."),
            Self::Authenticated {
                auth_mode,
                expires_at,
            } => {
                f.write_str("Authenticated")?;
                if let Some(auth_mode) = auth_mode {
                    write!(f, " ({auth_mode})")?;
                }
                if let Some(expires_at) = expires_at {
                    write!(f, " until {expires_at}")?;
                }
                Ok(())
            }
            Self::NotAuthenticated => f.write_str("Not authenticated"),
            Self::CheckFailed => f.write_str("Session check failed"),
        }
    }
}

#[derive(Debug, Default)]
pub struct Model {
    status: RemoteData<SessionStatus>,
    state: SessionState,
    login_error: Option<&'static str>,
}

impl Model {
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn login_error(&self) -> Option<&'static str> {
        self.login_error
    }

    #[must_use]
    pub fn start_check(&mut self) -> PendingToken {
        self.state = SessionState::Checking;
        self.status.start_pending_now()
    }

    pub fn finish_check(
        &mut self,
        token: PendingToken,
        result: anyhow::Result<SessionStatus>,
    ) -> bool {
        match result {
            Ok(status) => {
                let state = SessionState::from(status.clone());
                if self
                    .status
                    .finish_pending_with_value_now(token, status)
                    .is_err()
                {
                    log::warn!("Discarding outdated session status");
                    return false;
                }
                self.state = state;
            }
            Err(err) => {
                if !self.status.finish_pending_with_failure(token) {
                    log::warn!("Discarding outdated failure: {err:#}");
                    return false;
                }
                log::warn!("Session check failed: {err:#}");
                self.state = SessionState::CheckFailed;
            }
        }
        true
    }

    pub fn login_succeeded(&mut self) {
        self.login_error = None;
    }

    pub fn login_failed(&mut self) {
        self.login_error = Some(LOGIN_FAILED_MESSAGE);
    }
}
