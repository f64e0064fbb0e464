// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    collections::VecDeque,
    future::{self, Future},
    sync::Mutex,
};

use bytes::Bytes;

use super::{Method, Request, Response, WebApi};

#[derive(Debug)]
pub(crate) enum Scripted {
    Respond { status: u16, body: Bytes },
    TransportFailure(String),
}

impl Scripted {
    pub(crate) fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::Respond {
            status,
            body: body.to_string().into(),
        }
    }

    pub(crate) fn text(status: u16, body: &'static str) -> Self {
        Self::Respond {
            status,
            body: Bytes::from_static(body.as_bytes()),
        }
    }
}

/// Responds to requests by matching method and path against
/// scripted responses.
///
/// Multiple responses for the same route are consumed in order.
#[derive(Debug, Default)]
pub(crate) struct ScriptedWebApi {
    routes: Mutex<Vec<(Method, String, VecDeque<Scripted>)>>,
    requests: Mutex<Vec<Request>>,
}

impl ScriptedWebApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn on(&self, method: Method, path: impl Into<String>, scripted: Scripted) {
        let path = path.into();
        let mut routes = self.routes.lock().unwrap();
        if let Some((_, _, queue)) = routes
            .iter_mut()
            .find(|(m, p, _)| *m == method && *p == path)
        {
            queue.push_back(scripted);
        } else {
            routes.push((method, path, VecDeque::from([scripted])));
        }
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn requests_to(&self, method: Method, path: &str) -> Vec<Request> {
        self.requests()
            .into_iter()
            .filter(|request| request.method == method && request.path == path)
            .collect()
    }

    fn respond(&self, request: Request) -> anyhow::Result<Response> {
        let scripted = {
            let mut routes = self.routes.lock().unwrap();
            routes
                .iter_mut()
                .find(|(method, path, _)| *method == request.method && *path == request.path)
                .and_then(|(_, _, queue)| queue.pop_front())
        };
        let path = request.path.clone();
        self.requests.lock().unwrap().push(request);
        match scripted {
            Some(Scripted::Respond { status, body }) => Ok(Response { status, body }),
            Some(Scripted::TransportFailure(reason)) => Err(anyhow::anyhow!(reason)),
            None => Err(anyhow::anyhow!("no response scripted for {path}")),
        }
    }
}

impl WebApi for ScriptedWebApi {
    fn send(&self, request: Request) -> impl Future<Output = anyhow::Result<Response>> + Send {
        future::ready(self.respond(request))
    }
}
