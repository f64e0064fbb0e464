// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use klug_core::{FileFormat, ImportBatchSummary, ImportSettings};
use klug_core_json::{
    error::translate_error_payload,
    import::{UPLOAD_FILE_FIELD, decode_import_batch_summary, upload_form_fields},
};

use super::{ImportUpload, SubmissionFailure};
use crate::webapi::{FilePart, MultipartForm, Request, RequestBody, UPLOAD_IMPORT_PATH, WebApi};

#[must_use]
pub fn upload_request(
    format: FileFormat,
    settings: &ImportSettings,
    upload: ImportUpload,
) -> Request {
    let ImportUpload { file_name, content } = upload;
    let form = MultipartForm {
        text_fields: upload_form_fields(format, settings),
        file: Some(FilePart {
            field_name: UPLOAD_FILE_FIELD,
            file_name,
            mime_type: format.mime_type(),
            content,
        }),
    };
    Request::post(UPLOAD_IMPORT_PATH, RequestBody::Multipart(form))
}

pub async fn upload<A>(
    api: &A,
    format: FileFormat,
    settings: &ImportSettings,
    upload: ImportUpload,
) -> Result<ImportBatchSummary, SubmissionFailure>
where
    A: WebApi + ?Sized,
{
    log::debug!(
        "Uploading {} ({} byte(s)) as {format}",
        upload.file_name,
        upload.content.len()
    );
    let request = upload_request(format, settings, upload);
    let response = api.send(request).await.map_err(SubmissionFailure::Transport)?;
    if !response.is_success() {
        let (message, payload) = translate_error_payload(&response.body);
        return Err(SubmissionFailure::Rejected {
            status: response.status,
            message,
            payload,
        });
    }
    let summary =
        decode_import_batch_summary(&response.body).map_err(SubmissionFailure::Transport)?;
    log::debug!("Import succeeded: {}", summary.digest());
    Ok(summary)
}
