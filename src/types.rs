use time::OffsetDateTime;

pub const PDF_MIME: &str = "application/pdf";
const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    pub fn label(self) -> &'static str {
        match self {
            Sender::User => "User",
            Sender::Ai => "AI",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    /// Marks the transient placeholder shown while a reply is pending.
    pub thinking: bool,
    pub sources: Vec<String>,
    pub created_at: Option<OffsetDateTime>,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            thinking: false,
            sources: Vec::new(),
            created_at: Some(OffsetDateTime::now_utc()),
        }
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// A file picked through the upload form.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        Self {
            size: bytes.len() as u64,
            mime: mime_for_name(&name).to_string(),
            name,
            bytes,
        }
    }

    /// Metadata only; used when the file is too large to be worth reading.
    pub fn unread(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        Self {
            size,
            mime: mime_for_name(&name).to_string(),
            name,
            bytes: Vec::new(),
        }
    }
}

/// Browsers derive `File.type` from the extension; do the same for native pickers.
pub fn mime_for_name(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => PDF_MIME,
        "txt" => "text/plain",
        "md" => "text/markdown",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => FALLBACK_MIME,
    }
}
