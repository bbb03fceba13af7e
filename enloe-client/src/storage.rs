//! Object storage endpoints

use std::path::Path;

use enloe_core::dto::storage::UploadedFile;
use enloe_core::validation::validate_upload_size;
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::EnloeClient;
use crate::error::{ClientError, Result};

/// Bucket chat images are uploaded into
pub const DEFAULT_BUCKET: &str = "chat-images";

impl EnloeClient {
    /// Upload raw bytes into a bucket, letting the backend pick the object key
    ///
    /// # Returns
    /// The stored object; its `url` is always set
    pub async fn upload(
        &self,
        bucket: &str,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<UploadedFile> {
        validate_upload_size(bytes.len() as u64)?;

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = Form::new().part("file", part);

        let path = format!("/api/storage/buckets/{}/objects", bucket);
        let response = self
            .request(Method::POST, &path)
            .multipart(form)
            .send()
            .await?;

        let uploaded: UploadedFile = self.handle_response(response).await?;
        if uploaded.url.is_none() {
            return Err(ClientError::ParseError("Upload failed".to_string()));
        }
        Ok(uploaded)
    }

    /// Upload an image file from disk
    ///
    /// Files over 5 MB are rejected before they are read or sent.
    ///
    /// # Returns
    /// The public URL of the stored image
    pub async fn upload_image(&self, bucket: &str, path: &Path) -> Result<String> {
        let metadata = tokio::fs::metadata(path).await?;
        validate_upload_size(metadata.len())?;

        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
            .to_string();
        debug!("Uploading {} ({} bytes) to {}", file_name, bytes.len(), bucket);

        let uploaded = self
            .upload(bucket, &file_name, bytes, content_type_for(path))
            .await?;
        uploaded
            .url
            .ok_or_else(|| ClientError::ParseError("Upload failed".to_string()))
    }

    /// Public URL of an object; no request is made
    pub fn public_url(&self, bucket: &str, key: &str) -> String {
        self.url(&format!("/api/storage/buckets/{}/objects/{}", bucket, key))
    }
}

/// Content type guessed from the file extension
fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enloe_core::validation::MAX_UPLOAD_BYTES;
    use std::io::Write;

    #[test]
    fn test_public_url() {
        let client = EnloeClient::new("http://localhost:7130/");
        assert_eq!(
            client.public_url(DEFAULT_BUCKET, "cat.png"),
            "http://localhost:7130/api/storage/buckets/chat-images/objects/cat.png"
        );
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for(Path::new("a/b/Cat.PNG")), "image/png");
        assert_eq!(content_type_for(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("notes")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_oversized_file_rejected_before_request() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&vec![0u8; (MAX_UPLOAD_BYTES + 1) as usize])
            .unwrap();

        let client = EnloeClient::new("http://127.0.0.1:9");
        let err = client
            .upload_image(DEFAULT_BUCKET, file.path())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(err.user_message(), "File size must be less than 5MB");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let client = EnloeClient::new("http://127.0.0.1:9");
        let err = client
            .upload_image(DEFAULT_BUCKET, Path::new("/definitely/not/here.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Io(_)));
    }
}
