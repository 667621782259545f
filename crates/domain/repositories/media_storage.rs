use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

/// Uploads a binary attachment to the media host and returns its public URL.
#[async_trait]
#[automock]
pub trait MediaStorageClient: Send + Sync {
    async fn upload(&self, bytes: Vec<u8>, content_type: &str) -> Result<String>;
}
