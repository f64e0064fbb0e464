// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use klug_core::{ImportBatchId, ImportRowError};
use klug_core_json::batch::decode_import_row_errors;

use crate::webapi::{Request, WebApi};

pub async fn fetch_import_batch_errors<A>(
    api: &A,
    import_batch_id: &ImportBatchId,
    limit: u32,
) -> anyhow::Result<Vec<ImportRowError>>
where
    A: WebApi + ?Sized,
{
    let request = Request::fetch_import_batch_errors(import_batch_id, limit);
    let response_body = api.send(request).await?.into_success_body()?;
    let row_errors = decode_import_row_errors(&response_body)?;
    log::debug!(
        "Fetched {} error(s) of batch {import_batch_id}",
        row_errors.len()
    );
    Ok(row_errors)
}
