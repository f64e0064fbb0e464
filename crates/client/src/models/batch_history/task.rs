// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use klug_core::ImportBatchHistoryEntry;
use klug_core_json::batch::decode_import_batch_history;

use crate::webapi::{Request, WebApi};

pub async fn fetch_import_batches<A>(
    api: &A,
    limit: u32,
) -> anyhow::Result<Vec<ImportBatchHistoryEntry>>
where
    A: WebApi + ?Sized,
{
    let request = Request::fetch_import_batches(limit);
    let response_body = api.send(request).await?.into_success_body()?;
    let entries = decode_import_batch_history(&response_body)?;
    log::debug!("Fetched {} import batch(es)", entries.len());
    Ok(entries)
}
