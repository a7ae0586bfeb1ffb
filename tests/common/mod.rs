//! Shared test doubles for the flow tests
#![allow(dead_code)]

use async_trait::async_trait;
use pdfchat::api::{ApiError, ApiResult, Backend, ChatReply, UploadBody, UploadReply};
use pdfchat::types::SelectedFile;
use std::cell::RefCell;
use std::collections::VecDeque;

pub const MB: u64 = 1024 * 1024;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Backend double that replays scripted replies and records every call
#[derive(Default)]
pub struct MockBackend {
    upload_replies: RefCell<VecDeque<ApiResult<UploadReply>>>,
    chat_replies: RefCell<VecDeque<ApiResult<ChatReply>>>,
    pub uploads: RefCell<Vec<SelectedFile>>,
    pub queries: RefCell<Vec<String>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_upload_reply(self, reply: ApiResult<UploadReply>) -> Self {
        self.upload_replies.borrow_mut().push_back(reply);
        self
    }

    pub fn with_chat_reply(self, reply: ApiResult<ChatReply>) -> Self {
        self.chat_replies.borrow_mut().push_back(reply);
        self
    }

    pub fn network_calls(&self) -> usize {
        self.uploads.borrow().len() + self.queries.borrow().len()
    }
}

#[async_trait(?Send)]
impl Backend for MockBackend {
    async fn upload(&self, file: SelectedFile) -> ApiResult<UploadReply> {
        self.uploads.borrow_mut().push(file);
        self.upload_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted upload reply".into())))
    }

    async fn chat(&self, query: &str) -> ApiResult<ChatReply> {
        self.queries.borrow_mut().push(query.to_string());
        self.chat_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted chat reply".into())))
    }
}

pub fn upload_ok(message: &str) -> ApiResult<UploadReply> {
    Ok(UploadReply {
        success: true,
        status: 200,
        body: UploadBody {
            message: Some(message.to_string()),
            detail: None,
        },
    })
}

pub fn upload_failed(status: u16, detail: Option<&str>) -> ApiResult<UploadReply> {
    Ok(UploadReply {
        success: false,
        status,
        body: UploadBody {
            message: None,
            detail: detail.map(str::to_string),
        },
    })
}

pub fn chat_ok(response: &str) -> ApiResult<ChatReply> {
    Ok(ChatReply {
        response: Some(response.to_string()),
        ..ChatReply::default()
    })
}

pub fn pdf_of_size(size: u64) -> SelectedFile {
    SelectedFile::unread("paper.pdf", size)
}
