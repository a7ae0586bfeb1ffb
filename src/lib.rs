pub mod api;
pub mod chat;
pub mod config;
pub mod theme;
pub mod types;
pub mod upload;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
