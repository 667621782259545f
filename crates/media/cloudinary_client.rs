use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::error;

use crate::domain::repositories::media_storage::MediaStorageClient;

const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(10);

/// Cloudinary upload client using signed uploads with SHA-256 signatures.
/// https://cloudinary.com/documentation/upload_images#generating_authentication_signatures
pub struct CloudinaryClient {
    http: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

impl CloudinaryClient {
    pub fn new(cloud_name: String, api_key: String, api_secret: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(OUTBOUND_TIMEOUT)
            .build()
            .context("failed to build Cloudinary http client")?;

        Ok(Self {
            http,
            cloud_name,
            api_key,
            api_secret,
        })
    }

    /// Signature over the sorted request parameters with the API secret
    /// appended, hex encoded.
    fn sign(&self, timestamp: i64) -> String {
        let to_sign = format!(
            "signature_algorithm=sha256&timestamp={}{}",
            timestamp, self.api_secret
        );

        let mut hasher = Sha256::new();
        hasher.update(to_sign.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[async_trait]
impl MediaStorageClient for CloudinaryClient {
    async fn upload(&self, bytes: Vec<u8>, content_type: &str) -> Result<String> {
        let timestamp = Utc::now().timestamp();
        let signature = self.sign(timestamp);

        let file_part = Part::bytes(bytes)
            .file_name("upload")
            .mime_str(content_type)
            .context("invalid upload content type")?;

        let form = Form::new()
            .part("file", file_part)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("signature_algorithm", "sha256")
            .text("signature", signature);

        let resp = self
            .http
            .post(format!(
                "https://api.cloudinary.com/v1_1/{}/auto/upload",
                self.cloud_name
            ))
            .multipart(form)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = match resp.text().await {
                Ok(text) if !text.is_empty() => text,
                Ok(_) => "<empty response body>".to_string(),
                Err(err) => format!("<failed to read response body: {err}>"),
            };

            error!(
                status = %status,
                response_body = %body,
                "cloudinary upload failed"
            );

            anyhow::bail!("Cloudinary upload failed (status {})", status);
        }

        let parsed: UploadResponse = resp.json().await?;
        Ok(parsed.secure_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_is_deterministic_hex() {
        let client = CloudinaryClient::new(
            "demo".to_string(),
            "key".to_string(),
            "secret".to_string(),
        )
        .unwrap();

        let first = client.sign(1_700_000_000);
        let second = client.sign(1_700_000_000);

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(first, client.sign(1_700_000_001));
    }

    // Manual check: export the CLOUDINARY_* credentials, then run:
    // cargo test -p crates cloudinary_client::tests::upload_buffer_to_cloudinary -- --ignored --nocapture
    #[tokio::test]
    #[ignore = "hits real Cloudinary and needs credentials"]
    async fn upload_buffer_to_cloudinary() -> Result<()> {
        dotenvy::dotenv().ok();

        let client = CloudinaryClient::new(
            std::env::var("CLOUDINARY_CLOUD_NAME")?,
            std::env::var("CLOUDINARY_API_KEY")?,
            std::env::var("CLOUDINARY_API_SECRET")?,
        )?;

        let url = client
            .upload(b"solace-upload-check".to_vec(), "text/plain")
            .await?;
        println!("uploaded to {url}");

        assert!(url.starts_with("https://"));
        Ok(())
    }
}
