use axum::Json;
use log::debug;
use serde::Deserialize;

use crate::classify::{classify, Classification};
use crate::server::extractors::ValidJson;

#[derive(Deserialize)]
pub(in crate::server) struct Attachment {
    url: String,
}

#[derive(Deserialize)]
pub(in crate::server) struct FileRequest {
    attachments: Attachment,
}

/// `POST /file`: classify the attachment's data URI.
pub async fn detect_type(ValidJson(request): ValidJson<FileRequest>) -> Json<Classification> {
    let url = request.attachments.url;
    let kind = classify(&url);
    debug!("Classified data URI ({} bytes) as {kind}", url.len());
    Json(Classification::from(kind))
}
