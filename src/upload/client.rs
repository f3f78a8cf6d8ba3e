use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::Sender;

use reqwest::multipart::{Form, Part};
use tracing::{debug, error, info, warn};

use crate::error::UploadError;
use crate::upload::delivery;
use crate::upload::types::{CandidateFile, TransferEvent, PDF_MIME};

/// Message shown when the service rejects the upload without a body.
const FALLBACK_FAILURE: &str = "Upload failed";

/// One-shot exchange with the extraction service: post the document,
/// save the returned spreadsheet.
pub struct ExtractionClient {
    base_url: String,
    download_dir: PathBuf,
}

impl ExtractionClient {
    pub fn new(base_url: impl Into<String>, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            download_dir: download_dir.into(),
        }
    }

    /// Runs the full exchange, reporting progress through `events`.
    /// Failures never escape; they arrive as a `Failed` event carrying
    /// the user-facing message.
    pub async fn run(&self, file: CandidateFile, events: &Sender<TransferEvent>) {
        match self.execute(&file, events).await {
            Ok(saved) => {
                info!(path = %saved.display(), "extraction complete");
                events.send(TransferEvent::Completed).unwrap_or_default();
            }
            Err(UploadError::Service { status, message }) => {
                warn!(name = %file.name, %status, "service rejected upload");
                events
                    .send(TransferEvent::Failed(message))
                    .unwrap_or_default();
            }
            Err(e) => {
                error!(name = %file.name, error = %e, "submission failed");
                events
                    .send(TransferEvent::Failed(e.to_string()))
                    .unwrap_or_default();
            }
        }
    }

    async fn execute(
        &self,
        file: &CandidateFile,
        events: &Sender<TransferEvent>,
    ) -> Result<PathBuf, UploadError> {
        let payload = fs::read(&file.path).map_err(UploadError::ReadFile)?;
        debug!(name = %file.name, bytes = payload.len(), "read document");

        let part = Part::bytes(payload)
            .file_name(file.name.clone())
            .mime_str(PDF_MIME)?;
        let form = Form::new().part("file", part);

        let client = reqwest::Client::new();
        events.send(TransferEvent::Dispatched).unwrap_or_default();

        let response = client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                FALLBACK_FAILURE.to_string()
            } else {
                body
            };
            return Err(UploadError::Service { status, message });
        }

        events.send(TransferEvent::Received).unwrap_or_default();

        let artifact = response.bytes().await.map_err(UploadError::Decode)?;
        debug!(bytes = artifact.len(), "received spreadsheet");

        delivery::save_artifact(&artifact, &self.download_dir).map_err(UploadError::Save)
    }

    fn upload_url(&self) -> String {
        format!("{}/upload", self.base_url.trim_end_matches('/'))
    }
}
