use crate::api::HttpBackend;
use crate::types::SelectedFile;
use crate::upload::{FileSelection, UploadSettings, UploadStatus, submit_upload};
use dioxus::html::FileEngine;
use dioxus::prelude::*;
use std::path::Path;

/// Desktop pickers report full paths; only the file name goes on the wire.
fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// Read the first picked file. Oversized files are never read into memory.
async fn read_picked_file(evt: &FormEvent, max_bytes: u64) -> Option<SelectedFile> {
    let engine = evt.files()?;
    let path = engine.files().into_iter().next()?;
    let size = engine.file_size(&path).await.unwrap_or_default();
    let name = display_name(&path);
    if size > max_bytes {
        return Some(SelectedFile::unread(name, size));
    }
    let bytes = engine.read_file(&path).await?;
    Some(SelectedFile::new(name, bytes))
}

fn status_class(status: &UploadStatus) -> &'static str {
    match status {
        UploadStatus::Rejected(_) | UploadStatus::Failed(_) => "upload-status error",
        UploadStatus::Indexed { .. } => "upload-status success",
        _ => "upload-status",
    }
}

#[component]
pub fn UploadView(settings: UploadSettings, chat_enabled: Signal<bool>) -> Element {
    let backend = use_context::<HttpBackend>();
    let mut selection = use_signal(FileSelection::default);
    let status = use_signal(UploadStatus::default);

    let max_bytes = settings.max_bytes();
    let on_pick = move |evt: FormEvent| async move {
        // Drop the previous file before reading so a submit mid-read can't send it
        let ticket = selection.with_mut(|s| s.begin_pick());
        let file = read_picked_file(&evt, max_bytes).await;
        selection.with_mut(|s| s.finish_pick(ticket, file));
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        let settings = settings.clone();
        let file = selection.read().file().cloned();
        let mut status = status;
        let mut chat_enabled = chat_enabled;
        spawn(async move {
            let outcome = submit_upload(&backend, file, &settings, |update| {
                status.set(update.clone())
            })
            .await;
            if outcome.is_indexed() {
                chat_enabled.set(true);
            }
        });
    };

    let current = status();
    let reading = selection.read().is_reading();

    rsx! {
        div { class: "upload-panel",
            h3 { class: "section-title", "Upload a document" }
            form { id: "uploadForm", class: "upload-form", onsubmit: on_submit,
                input {
                    id: "pdfFile",
                    r#type: "file",
                    accept: ".pdf,application/pdf",
                    onchange: on_pick,
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: reading,
                    if reading { "Reading..." } else { "Upload" }
                }
            }
            p { id: "message", class: status_class(&current), "{current}" }
        }
    }
}

#[component]
pub fn ModelInfo(model_name: String, embedding_model: String) -> Element {
    rsx! {
        div { class: "model-info",
            h3 { class: "section-title", "Model" }
            dl {
                dt { "Language model" }
                dd { "{model_name}" }
                dt { "Embeddings" }
                dd { "{embedding_model}" }
            }
            p { class: "text-muted",
                "Upload a PDF to index it, then ask questions about its contents."
            }
        }
    }
}
