use crate::api::HttpBackend;
use crate::config::ClientConfig;
use crate::theme::theme_definition;
use crate::types::ThemeMode;
use crate::upload::UploadSettings;
use crate::views::{ChatView, ModelInfo, UploadView};
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn load_config() -> ClientConfig {
    ClientConfig::from_env().unwrap_or_else(|err| {
        tracing::error!("invalid configuration, using defaults: {err:#}");
        ClientConfig::default()
    })
}

fn display_style(visible: bool) -> &'static str {
    if visible { "display: block;" } else { "display: none;" }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    use_context_provider(|| HttpBackend::new(&config));
    let theme = use_signal(ThemeMode::default);
    let chat_enabled = use_signal(|| false);
    let theme_attr = theme().as_attr();

    rsx! {
        ThemeStyles { theme }
        div { class: "app", "data-theme": "{theme_attr}",
            AppHeader { theme }
            div { class: "main-container",
                UploadView { settings: UploadSettings::from(&config), chat_enabled }
                div { id: "model-info", style: display_style(!chat_enabled()),
                    ModelInfo {
                        model_name: config.model_name.clone(),
                        embedding_model: config.embedding_model.clone(),
                    }
                }
                div { id: "chat-interface", style: display_style(chat_enabled()),
                    ChatView {}
                }
            }
        }
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(theme: Signal<ThemeMode>) -> Element {
    rsx! {
        div { class: "header",
            div { class: "header-content",
                h1 { class: "header-title", "PDF Chat" }
                ThemeToggle { theme }
            }
        }
    }
}

#[component]
fn ThemeToggle(theme: Signal<ThemeMode>) -> Element {
    let mut theme = theme;
    let label = theme_definition(theme()).toggle_label;
    rsx! {
        button {
            id: "theme-toggle",
            class: "btn btn-ghost",
            r#type: "button",
            onclick: move |_| {
                let next = theme().toggle();
                tracing::debug!(theme = next.as_attr(), "theme toggled");
                theme.set(next);
            },
            "{label}"
        }
    }
}
