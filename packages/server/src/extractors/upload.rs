use axum::extract::multipart::Field;
use axum::extract::{FromRequest, Multipart, Request};
use common::storage::resolve_content_type;

use crate::error::AppError;
use crate::state::AppState;
use crate::workflow::UploadedFile;

/// Multipart upload form: a `file` part plus optional `project` / `year` text fields.
///
/// The whole body is read before any handler logic runs, so field order does not
/// matter and validation can happen before anything is written. Unknown fields are
/// ignored. A `file` part without a filename is treated as absent, and so is a body
/// that is not `multipart/form-data` at all.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<UploadedFile>,
    pub project: Option<String>,
    pub year: Option<String>,
}

impl FromRequest<AppState> for UploadForm {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let mut multipart = match Multipart::from_request(req, state).await {
            Ok(multipart) => multipart,
            Err(e) => {
                tracing::debug!("Upload body is not multipart: {}", e.body_text());
                return Ok(UploadForm::default());
            }
        };

        let max_size = state.config.storage.max_upload_size;
        let mut form = UploadForm::default();
        let mut oversized = false;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
        {
            match field.name() {
                Some("file") => match read_file_field(field, max_size).await? {
                    FilePart::Read(file) => form.file = Some(file),
                    FilePart::Unnamed => form.file = None,
                    FilePart::TooLarge => oversized = true,
                },
                Some("project") => {
                    form.project = Some(read_text_field(field, "project").await?);
                }
                Some("year") => {
                    form.year = Some(read_text_field(field, "year").await?);
                }
                _ => {} // Ignore unknown fields.
            }
        }

        if oversized {
            return Err(AppError::Validation(format!(
                "File exceeds maximum size of {max_size} bytes"
            )));
        }

        Ok(form)
    }
}

enum FilePart {
    Read(UploadedFile),
    /// Sent without a filename.
    Unnamed,
    /// Larger than the configured limit. The part has been drained.
    TooLarge,
}

/// Buffer a file part, keeping at most `max_size` bytes of it.
///
/// An oversized part is still read to the end so the rest of the form (and the
/// connection) stays usable; its bytes are discarded.
async fn read_file_field(mut field: Field<'_>, max_size: u64) -> Result<FilePart, AppError> {
    let Some(filename) = field.file_name().map(|s| s.to_string()) else {
        return Ok(FilePart::Unnamed);
    };
    let content_type = resolve_content_type(field.content_type(), &filename);

    let mut data = Vec::new();
    let mut too_large = false;
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| AppError::Validation(format!("Upload read error: {e}")))?
    {
        if too_large {
            continue;
        }
        if (data.len() + chunk.len()) as u64 > max_size {
            too_large = true;
            data = Vec::new();
            continue;
        }
        data.extend_from_slice(&chunk);
    }

    if too_large {
        return Ok(FilePart::TooLarge);
    }

    Ok(FilePart::Read(UploadedFile {
        filename,
        content_type,
        data,
    }))
}

async fn read_text_field(field: Field<'_>, name: &str) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read {name}: {e}")))
}
