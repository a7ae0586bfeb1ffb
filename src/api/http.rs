use super::{ApiResult, Backend, ChatReply, ChatRequest, UploadBody, UploadReply};
use crate::config::ClientConfig;
use crate::types::SelectedFile;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// `reqwest` client for the ingestion/chat backend
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    upload_url: String,
    chat_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    timeout: Duration,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            upload_url: config.upload_url(),
            chat_url: config.chat_endpoint(),
            #[cfg(not(target_arch = "wasm32"))]
            timeout: config.request_timeout,
        }
    }

    fn post(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.client.post(url);
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.timeout(self.timeout);
        request
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn upload(&self, file: SelectedFile) -> ApiResult<UploadReply> {
        tracing::debug!(url = %self.upload_url, name = %file.name, size = file.size, "uploading document");
        let part = Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(&file.mime)?;
        let form = Form::new().part("file", part);

        let response = self.post(&self.upload_url).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let body: UploadBody = serde_json::from_str(&body)?;

        Ok(UploadReply {
            success: status.is_success(),
            status: status.as_u16(),
            body,
        })
    }

    async fn chat(&self, query: &str) -> ApiResult<ChatReply> {
        tracing::debug!(url = %self.chat_url, "sending chat query");
        let response = self
            .post(&self.chat_url)
            .json(&ChatRequest { query })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!(%status, "chat endpoint returned an error status");
        }

        Ok(serde_json::from_str(&body)?)
    }
}
