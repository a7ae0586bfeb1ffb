//! Integration tests for the upload flow
//!
//! Drives `submit_upload` against a scripted backend and checks both the
//! statuses shown to the user and the requests that were (not) made.

mod common;

use common::{MB, MockBackend, init_tracing, pdf_of_size, upload_failed, upload_ok};
use pdfchat::api::ApiError;
use pdfchat::types::SelectedFile;
use pdfchat::upload::{FileSelection, UploadRejection, UploadSettings, UploadStatus, submit_upload};

async fn run(backend: &MockBackend, file: Option<SelectedFile>) -> (UploadStatus, Vec<String>) {
    init_tracing();
    let mut shown = Vec::new();
    let status = submit_upload(backend, file, &UploadSettings::default(), |s| {
        shown.push(s.to_string())
    })
    .await;
    (status, shown)
}

mod validation_tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_sends_nothing() {
        let backend = MockBackend::new();
        let (status, shown) = run(&backend, None).await;

        assert_eq!(status, UploadStatus::Rejected(UploadRejection::MissingFile));
        assert_eq!(shown, vec!["Please select a file."]);
        assert_eq!(backend.network_calls(), 0);
    }

    #[tokio::test]
    async fn test_oversized_file_sends_nothing() {
        let backend = MockBackend::new().with_upload_reply(upload_ok("unused"));
        let (status, shown) = run(&backend, Some(pdf_of_size(105 * MB))).await;

        assert_eq!(status.to_string(), "File size must not exceed 100MB.");
        assert_eq!(shown, vec!["File size must not exceed 100MB."]);
        assert_eq!(backend.network_calls(), 0);
    }

    #[tokio::test]
    async fn test_any_size_over_limit_is_rejected() {
        for size in [100 * MB + 1, 101 * MB, 1024 * MB, u64::MAX] {
            let backend = MockBackend::new();
            let (status, _) = run(&backend, Some(pdf_of_size(size))).await;
            assert_eq!(
                status,
                UploadStatus::Rejected(UploadRejection::TooLarge { limit_mb: 100 })
            );
            assert_eq!(backend.network_calls(), 0, "size {size} reached the backend");
        }
    }

    #[tokio::test]
    async fn test_non_pdf_types_send_nothing() {
        for name in ["notes.txt", "scan.png", "paper.pdf.exe", "README"] {
            let backend = MockBackend::new();
            let file = SelectedFile::new(name, b"%PDF-1.7".to_vec());
            let (status, shown) = run(&backend, Some(file)).await;

            assert_eq!(status, UploadStatus::Rejected(UploadRejection::NotPdf));
            assert_eq!(shown, vec!["Only PDF files are allowed."]);
            assert_eq!(backend.network_calls(), 0, "{name} reached the backend");
        }
    }

    #[tokio::test]
    async fn test_custom_limit_in_message() {
        let backend = MockBackend::new();
        let settings = UploadSettings {
            max_upload_mb: 5,
            chat_url: "http://localhost:8080".into(),
        };
        let file = pdf_of_size(6 * MB);
        let status = submit_upload(&backend, Some(file), &settings, |_| {}).await;

        assert_eq!(status.to_string(), "File size must not exceed 5MB.");
        assert_eq!(backend.network_calls(), 0);
    }
}

mod submission_tests {
    use super::*;

    #[tokio::test]
    async fn test_indexed_document() {
        let backend = MockBackend::new().with_upload_reply(upload_ok("Indexed 5 pages"));
        let file = SelectedFile::new("paper.pdf", vec![0u8; MB as usize]);
        let (status, shown) = run(&backend, Some(file)).await;

        assert!(status.is_indexed());
        assert_eq!(
            shown,
            vec![
                "Uploading and processing document...",
                "Indexed 5 pages You can now chat at http://localhost:8080",
            ]
        );
        let uploads = backend.uploads.borrow();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].name, "paper.pdf");
        assert_eq!(uploads[0].size, MB);
        assert_eq!(uploads[0].bytes.len(), MB as usize);
    }

    #[tokio::test]
    async fn test_server_detail_is_shown() {
        let backend =
            MockBackend::new().with_upload_reply(upload_failed(422, Some("PDF has no text layer")));
        let (status, _) = run(&backend, Some(pdf_of_size(MB))).await;

        assert!(!status.is_indexed());
        assert_eq!(status.to_string(), "Error: PDF has no text layer");
    }

    #[tokio::test]
    async fn test_missing_detail_falls_back() {
        let backend = MockBackend::new().with_upload_reply(upload_failed(500, None));
        let (status, _) = run(&backend, Some(pdf_of_size(MB))).await;

        assert_eq!(status.to_string(), "Error: An unknown error occurred.");
    }

    #[tokio::test]
    async fn test_transport_and_decode_errors() {
        let backend = MockBackend::new()
            .with_upload_reply(Err(ApiError::Transport("connection refused".into())))
            .with_upload_reply(Err(ApiError::Decode("expected value at line 1 column 1".into())));

        let (first, _) = run(&backend, Some(pdf_of_size(MB))).await;
        assert_eq!(first.to_string(), "Error: connection refused");

        let (second, _) = run(&backend, Some(pdf_of_size(MB))).await;
        assert_eq!(second.to_string(), "Error: expected value at line 1 column 1");

        // One attempt per submission, no retries
        assert_eq!(backend.uploads.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_submit_while_reading_sends_nothing() {
        let backend = MockBackend::new()
            .with_upload_reply(upload_ok("Indexed 1 page"))
            .with_upload_reply(upload_ok("Indexed 9 pages"));
        let mut selection = FileSelection::default();

        let ticket = selection.begin_pick();
        selection.finish_pick(ticket, Some(SelectedFile::new("old.pdf", b"%PDF-old".to_vec())));
        let (first, _) = run(&backend, selection.file().cloned()).await;
        assert!(first.is_indexed());

        // A second pick is still being read when the form is submitted
        let ticket = selection.begin_pick();
        let (second, shown) = run(&backend, selection.file().cloned()).await;
        assert_eq!(second, UploadStatus::Rejected(UploadRejection::MissingFile));
        assert_eq!(shown, vec!["Please select a file."]);

        selection.finish_pick(ticket, Some(SelectedFile::new("new.pdf", b"%PDF-new".to_vec())));
        let (third, _) = run(&backend, selection.file().cloned()).await;
        assert!(third.is_indexed());

        let names: Vec<_> = backend.uploads.borrow().iter().map(|f| f.name.clone()).collect();
        assert_eq!(names, vec!["old.pdf", "new.pdf"]);
    }

    #[tokio::test]
    async fn test_handler_reusable_after_failure() {
        let backend = MockBackend::new()
            .with_upload_reply(upload_failed(503, Some("busy")))
            .with_upload_reply(upload_ok("Indexed 2 pages"));

        let (first, _) = run(&backend, Some(pdf_of_size(MB))).await;
        assert_eq!(first.to_string(), "Error: busy");

        let (second, _) = run(&backend, Some(pdf_of_size(MB))).await;
        assert!(second.is_indexed());
    }
}
