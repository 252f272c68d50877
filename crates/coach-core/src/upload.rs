//! Two-phase media commits.
//!
//! Phase one sends the file to the backend's upload endpoint and gets back
//! the stored URL. Phase two saves the record that references that URL.
//! When phase two fails the media is already stored but unreferenced; the
//! URL goes into an [`OrphanLedger`] and the caller gets
//! [`AdminError::OrphanedUpload`].

use std::future::Future;
use std::path::Path;

use async_trait::async_trait;
use log::{debug, error, warn};
use reqwest::multipart::{Form, Part};

use crate::client::{ApiClient, RequestOptions};
use crate::error::{AdminError, Result, TransportResultExt};
use crate::models::MediaKind;

/// A file read into memory, ready to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    /// MIME type is guessed from the file name.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .to_string();
        Self {
            file_name,
            mime,
            bytes,
        }
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| AdminError::FileSystem {
                path: path.to_path_buf(),
                source,
            })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }

    /// The file as one multipart field.
    pub(crate) fn into_part(self) -> Result<Part> {
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime)
            .transport_context("Invalid media type")
    }

    /// Whether the file's type fits the upload endpoint.
    pub fn fits(&self, kind: MediaKind) -> bool {
        let top_level = match kind {
            MediaKind::MealImage => "image/",
            MediaKind::ExerciseVideo => "video/",
        };
        self.mime.starts_with(top_level)
    }
}

/// Media stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    pub kind: MediaKind,
    pub url: String,
}

/// Records media that ended up unreferenced.
#[async_trait]
pub trait OrphanLedger: Send + Sync {
    async fn record_orphan(&self, media: &UploadedMedia, reason: &str) -> Result<()>;
}

/// Phase one: upload the file and return the stored URL.
pub async fn upload(client: &ApiClient, kind: MediaKind, file: MediaFile) -> Result<UploadedMedia> {
    if file.bytes.is_empty() {
        return Err(AdminError::invalid_input("file")
            .with_reason(format!("{} is empty", file.file_name)));
    }
    if !file.fits(kind) {
        return Err(AdminError::invalid_input("file").with_reason(format!(
            "{} has type {}, which cannot be uploaded as {kind}",
            file.file_name, file.mime
        )));
    }

    debug!("Uploading {} ({} bytes) as {kind}", file.file_name, file.bytes.len());
    let form = Form::new().part(kind.form_field(), file.into_part()?);

    let response = client
        .mutate(
            &format!("Upload {kind}"),
            kind.upload_path(),
            RequestOptions::post_form(form),
        )
        .await?;

    let url = response
        .field(kind.url_field())
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AdminError::UnexpectedShape {
            found: format!("upload response without {}", kind.url_field()),
        })?;

    Ok(UploadedMedia {
        kind,
        url: url.to_string(),
    })
}

/// Phase two: run the save that references `media`. If it fails the URL
/// is handed to `ledger` and the error names the orphaned URL.
pub async fn reference<T, F>(ledger: &dyn OrphanLedger, media: &UploadedMedia, save: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match save.await {
        Ok(value) => Ok(value),
        Err(source) => {
            warn!("Save referencing {} failed: {source}", media.url);
            if let Err(ledger_error) = ledger.record_orphan(media, &source.user_message()).await {
                error!("Failed to record orphaned upload {}: {ledger_error}", media.url);
            }
            Err(AdminError::OrphanedUpload {
                url: media.url.clone(),
                source: Box::new(source),
            })
        }
    }
}
