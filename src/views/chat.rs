use crate::api::HttpBackend;
use crate::chat::{Conversation, request_reply};
use crate::types::{ChatMessage, Sender};
use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

fn format_message_timestamp(timestamp: Option<OffsetDateTime>) -> Option<String> {
    let mut datetime = timestamp?;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

fn sender_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "user",
        Sender::Ai => "assistant",
    }
}

#[component]
pub fn ChatView() -> Element {
    let backend = use_context::<HttpBackend>();
    let mut conversation = use_signal(Conversation::new);
    let mut input = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let text = input();
        let Some(query) = conversation.with_mut(|c| c.begin_query(&text)) else {
            return;
        };
        input.set(String::new());

        let backend = backend.clone();
        spawn(async move {
            let result = request_reply(&backend, &query).await;
            conversation.with_mut(|c| c.settle(result));
        });
    };

    let messages = conversation.read().messages().to_vec();

    rsx! {
        div { class: "chat-wrap",
            div { id: "chat-list", class: "chat-list",
                for msg in messages.iter() {
                    MessageRow { message: msg.clone() }
                }
            }
            form { id: "chatForm", class: "composer", onsubmit: on_submit,
                div { class: "hstack",
                    input {
                        id: "userInput",
                        r#type: "text",
                        placeholder: "Ask a question about your document",
                        autocomplete: "off",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Send" }
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: ChatMessage) -> Element {
    let class = sender_class(message.sender);
    let sender = message.sender.label();
    let sources = message.sources.clone();

    rsx! {
        div { class: format_args!("message-row {}", class),
            div { class: "message-stack",
                if message.thinking {
                    div { class: "bubble assistant thinking",
                        span { class: "shimmer-text", "{message.text}" }
                    }
                } else {
                    div { class: format_args!("bubble {}", class),
                        strong { class: "message-sender", "{sender}: " }
                        span { "{message.text}" }
                    }
                }
                if !sources.is_empty() {
                    details { class: "message-sources",
                        summary { "Sources ({sources.len()})" }
                        ol {
                            for source in sources.iter() {
                                li { "{source}" }
                            }
                        }
                    }
                }
                if let Some(ts) = format_message_timestamp(message.created_at) {
                    div { class: "message-meta",
                        span { class: "message-timestamp", "{ts}" }
                    }
                }
            }
        }
    }
}
