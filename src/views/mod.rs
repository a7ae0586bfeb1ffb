pub mod chat;
pub mod upload;

pub use chat::ChatView;
pub use upload::{ModelInfo, UploadView};
