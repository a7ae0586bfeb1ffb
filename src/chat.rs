use crate::api::{ApiResult, Backend, ChatReply};
use crate::types::{ChatMessage, Sender};

pub const THINKING_TEXT: &str = "Thinking...";
const NO_REPLY: &str = "No response received.";

/// Message list for one session.
///
/// Holds at most one thinking placeholder, always as the last entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    pending: usize,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of queries sent but not yet answered
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn is_thinking(&self) -> bool {
        self.messages.iter().any(|msg| msg.thinking)
    }

    /// Start a query from the raw input.
    ///
    /// An empty input changes nothing and returns `None`. Otherwise the user
    /// message and the placeholder are appended and the query is returned.
    pub fn begin_query(&mut self, input: &str) -> Option<String> {
        if input.is_empty() {
            return None;
        }
        self.remove_placeholder();
        self.messages.push(ChatMessage::new(Sender::User, input));
        self.pending += 1;
        self.push_placeholder();
        Some(input.to_string())
    }

    /// Replace the placeholder with the reply (or the failure) of one query.
    pub fn settle(&mut self, result: ApiResult<ChatReply>) {
        self.remove_placeholder();
        self.pending = self.pending.saturating_sub(1);
        let message = match result {
            Ok(reply) => {
                let sources = reply.sources.clone();
                ChatMessage::new(Sender::Ai, reply_text(reply)).with_sources(sources)
            }
            Err(err) => ChatMessage::new(Sender::Ai, format!("Error: {err}")),
        };
        self.messages.push(message);
        // Earlier queries still in flight keep the placeholder at the bottom
        if self.pending > 0 {
            self.push_placeholder();
        }
    }

    fn push_placeholder(&mut self) {
        let mut placeholder = ChatMessage::new(Sender::Ai, THINKING_TEXT);
        placeholder.thinking = true;
        self.messages.push(placeholder);
    }

    fn remove_placeholder(&mut self) {
        self.messages.retain(|msg| !msg.thinking);
    }
}

/// `response` if present and non-empty, else `error`, else a fixed fallback.
pub fn reply_text(reply: ChatReply) -> String {
    reply
        .response
        .filter(|text| !text.is_empty())
        .or(reply.error.filter(|text| !text.is_empty()))
        .unwrap_or_else(|| NO_REPLY.to_string())
}

/// Send one query that [`Conversation::begin_query`] accepted.
///
/// The conversation is not borrowed across the await, so callers holding it
/// in shared UI state settle it once the reply lands.
pub async fn request_reply<B>(backend: &B, query: &str) -> ApiResult<ChatReply>
where
    B: Backend + ?Sized,
{
    tracing::info!(len = query.len(), "sending chat query");
    let result = backend.chat(query).await;
    if let Err(err) = &result {
        tracing::warn!(%err, "chat request failed");
    }
    result
}

/// Run one chat submission end to end against `conversation`.
///
/// Returns `false` when the input was empty and nothing was sent.
pub async fn send_query<B>(backend: &B, conversation: &mut Conversation, input: &str) -> bool
where
    B: Backend + ?Sized,
{
    let Some(query) = conversation.begin_query(input) else {
        return false;
    };
    conversation.settle(request_reply(backend, &query).await);
    true
}
