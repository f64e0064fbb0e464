// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::future::Future;

use reqwest::{
    Client, Url,
    header::CONTENT_TYPE,
    multipart::{Form, Part},
};

use super::{Method, Request, RequestBody, Response, WebApi};

pub trait ClientEnvironment {
    fn client(&self) -> &Client;
    fn join_api_url(&self, query_suffix: &str) -> anyhow::Result<Url>;
}

pub async fn receive_response(response: reqwest::Response) -> anyhow::Result<Response> {
    let status = response.status().as_u16();
    let body = response.bytes().await?;
    log::debug!("Received response with status {status} ({} byte(s))", body.len());
    Ok(Response { status, body })
}

fn multipart_form(form: super::MultipartForm) -> anyhow::Result<Form> {
    let super::MultipartForm { text_fields, file } = form;
    let mut form = text_fields
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value));
    if let Some(file) = file {
        let super::FilePart {
            field_name,
            file_name,
            mime_type,
            content,
        } = file;
        let part = Part::bytes(content.to_vec())
            .file_name(file_name)
            .mime_str(mime_type.as_ref())?;
        form = form.part(field_name, part);
    }
    Ok(form)
}

async fn send_request<E>(env: &E, request: Request) -> anyhow::Result<Response>
where
    E: ClientEnvironment + ?Sized,
{
    let Request {
        method,
        path,
        query,
        body,
    } = request;
    let mut url = env.join_api_url(&path)?;
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    log::debug!("Sending {method:?} request: {url}");
    let client = env.client();
    let builder = match method {
        Method::Get => client.get(url),
        Method::Post => client.post(url),
        Method::Delete => client.delete(url),
    };
    let builder = match body {
        RequestBody::Empty => builder,
        RequestBody::Json(json) => builder
            .header(CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .body(serde_json::to_vec(&json)?),
        RequestBody::Multipart(form) => builder.multipart(multipart_form(form)?),
    };
    let response = builder.send().await?;
    receive_response(response).await
}

impl<E> WebApi for E
where
    E: ClientEnvironment + Sync,
{
    fn send(&self, request: Request) -> impl Future<Output = anyhow::Result<Response>> + Send {
        send_request(self, request)
    }
}
