use crate::api::{ApiResult, Backend, UploadReply};
use crate::config::ClientConfig;
use crate::types::{PDF_MIME, SelectedFile};
use std::fmt;

const BYTES_PER_MB: u64 = 1024 * 1024;
const PROCESSING_MESSAGE: &str = "Uploading and processing document...";
const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Client-side reasons to refuse a file before any request is made
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("Please select a file.")]
    MissingFile,

    #[error("File size must not exceed {limit_mb}MB.")]
    TooLarge { limit_mb: u64 },

    #[error("Only PDF files are allowed.")]
    NotPdf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadSettings {
    pub max_upload_mb: u64,
    /// Quoted back to the user once a document has been indexed
    pub chat_url: String,
}

impl UploadSettings {
    pub fn max_bytes(&self) -> u64 {
        self.max_upload_mb.saturating_mul(BYTES_PER_MB)
    }
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self::from(&ClientConfig::default())
    }
}

impl From<&ClientConfig> for UploadSettings {
    fn from(config: &ClientConfig) -> Self {
        Self {
            max_upload_mb: config.max_upload_mb,
            chat_url: config.chat_url.clone(),
        }
    }
}

/// What the upload form shows at any point of a submission
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Rejected(UploadRejection),
    Processing,
    Indexed { message: String, chat_url: String },
    Failed(String),
}

impl UploadStatus {
    pub fn is_indexed(&self) -> bool {
        matches!(self, UploadStatus::Indexed { .. })
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadStatus::Idle => Ok(()),
            UploadStatus::Rejected(reason) => write!(f, "{reason}"),
            UploadStatus::Processing => f.write_str(PROCESSING_MESSAGE),
            UploadStatus::Indexed { message, chat_url } if message.is_empty() => {
                write!(f, "You can now chat at {chat_url}")
            }
            UploadStatus::Indexed { message, chat_url } => {
                write!(f, "{message} You can now chat at {chat_url}")
            }
            UploadStatus::Failed(reason) => write!(f, "Error: {reason}"),
        }
    }
}

/// The file currently chosen in the upload form.
///
/// Reading a picked file is asynchronous. Every pick gets a ticket and
/// clears the previous file, so a submit during the read never sends the
/// file picked before, and a slow read never overwrites a newer pick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileSelection {
    ticket: u64,
    reading: bool,
    file: Option<SelectedFile>,
}

impl FileSelection {
    pub fn begin_pick(&mut self) -> u64 {
        self.ticket += 1;
        self.reading = true;
        self.file = None;
        self.ticket
    }

    /// Returns `false` when a newer pick has started since `ticket` was issued.
    pub fn finish_pick(&mut self, ticket: u64, file: Option<SelectedFile>) -> bool {
        if ticket != self.ticket {
            return false;
        }
        self.reading = false;
        self.file = file;
        true
    }

    pub fn is_reading(&self) -> bool {
        self.reading
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }
}

/// Check presence, then size, then type.
pub fn validate(file: Option<&SelectedFile>, settings: &UploadSettings) -> Result<(), UploadRejection> {
    let file = file.ok_or(UploadRejection::MissingFile)?;
    if file.size > settings.max_bytes() {
        return Err(UploadRejection::TooLarge {
            limit_mb: settings.max_upload_mb,
        });
    }
    if file.mime != PDF_MIME {
        return Err(UploadRejection::NotPdf);
    }
    Ok(())
}

pub fn interpret_reply(result: ApiResult<UploadReply>, settings: &UploadSettings) -> UploadStatus {
    match result {
        Ok(reply) if reply.success => UploadStatus::Indexed {
            message: reply.body.message.unwrap_or_default(),
            chat_url: settings.chat_url.clone(),
        },
        Ok(reply) => UploadStatus::Failed(
            reply
                .body
                .detail
                .filter(|detail| !detail.is_empty())
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        ),
        Err(err) => UploadStatus::Failed(err.to_string()),
    }
}

/// Run one upload submission.
///
/// `report` sees every status the form should display, in order; the final
/// status is also returned. A rejected file never reaches the backend; an
/// accepted one is handed over without copying its bytes.
pub async fn submit_upload<B>(
    backend: &B,
    file: Option<SelectedFile>,
    settings: &UploadSettings,
    mut report: impl FnMut(&UploadStatus),
) -> UploadStatus
where
    B: Backend + ?Sized,
{
    let checked = validate(file.as_ref(), settings)
        .and_then(|()| file.ok_or(UploadRejection::MissingFile));
    let file = match checked {
        Ok(file) => file,
        Err(reason) => {
            tracing::warn!(%reason, "upload rejected before sending");
            let status = UploadStatus::Rejected(reason);
            report(&status);
            return status;
        }
    };

    report(&UploadStatus::Processing);
    let name = file.name.clone();
    tracing::info!(%name, size = file.size, "submitting document");

    let status = interpret_reply(backend.upload(file).await, settings);
    match &status {
        UploadStatus::Indexed { .. } => tracing::info!(%name, "document indexed"),
        other => tracing::warn!(%name, status = %other, "upload failed"),
    }
    report(&status);
    status
}
