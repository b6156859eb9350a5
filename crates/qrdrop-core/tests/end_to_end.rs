//! End-to-end workflow tests
//!
//! Drive UploadWidget through intake, upload over real HTTP and download,
//! the same way the desktop app and the CLI do.

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use qrdrop_core::{
    HttpQrGenerator, Phase, PreviewStore, SelectedFile, UploadConfig, UploadOutcome, UploadWidget,
};
use tempfile::TempDir;

const QR_BYTES: [u8; 12] = [
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d,
];

// ============================================================================
// Test Utilities
// ============================================================================

/// Start a backend that ignores the upload and answers with `status`
async fn spawn_backend(status: StatusCode) -> UploadConfig {
    let app = Router::new().route(
        "/upload/",
        post(move || async move {
            if status.is_success() {
                (status, QR_BYTES.to_vec())
            } else {
                (status, b"internal error".to_vec())
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    UploadConfig::with_endpoint(&format!("http://{}/upload/", addr)).unwrap()
}

async fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> SelectedFile {
    let path = dir.path().join(name);
    tokio::fs::write(&path, contents).await.unwrap();
    SelectedFile::from_path(&path).await.unwrap()
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_photo_to_qr_download() {
    let config = spawn_backend(StatusCode::OK).await;
    let generator = HttpQrGenerator::new(&config);
    let mut widget = UploadWidget::new(&config, PreviewStore::new());
    let dir = TempDir::new().unwrap();

    let photo = write_file(&dir, "photo.png", b"not really a png").await;
    widget.intake([photo]);
    assert_eq!(widget.selected().unwrap().name, "photo.png");

    let outcome = widget.handle_upload(&generator).await;
    assert_eq!(outcome, UploadOutcome::Succeeded);
    assert!(!widget.is_loading());

    let view = widget.view(false);
    let preview = view.preview.expect("preview shown");
    assert_eq!(preview.download_name, "qr.png");
    assert!(preview.src.starts_with("data:image/png;base64,"));
    assert_eq!(widget.store().resolve(&preview.locator).unwrap(), &QR_BYTES[..]);

    let artifact = widget.download_artifact().unwrap();
    assert_eq!(artifact.file_name, "qr.png");
    let target = dir.path().join(&artifact.file_name);
    artifact.save_to(&target).await.unwrap();
    assert_eq!(tokio::fs::read(&target).await.unwrap(), QR_BYTES.to_vec());
}

#[tokio::test]
async fn test_pdf_never_selected() {
    let config = UploadConfig::default();
    let mut widget = UploadWidget::new(&config, PreviewStore::new());
    let dir = TempDir::new().unwrap();

    let pdf = write_file(&dir, "doc.pdf", b"%PDF-1.7").await;
    widget.intake([pdf]);

    assert!(widget.selected().is_none());
    assert_eq!(widget.phase(), Phase::Idle);
    assert!(!widget.view(false).upload_enabled);
}

#[tokio::test]
async fn test_server_error_alert_keeps_state() {
    let ok = spawn_backend(StatusCode::OK).await;
    let failing = spawn_backend(StatusCode::INTERNAL_SERVER_ERROR).await;
    let mut widget = UploadWidget::new(&ok, PreviewStore::new());

    widget.intake([SelectedFile::new("photo.png", "image/png", vec![1u8, 2, 3])]);
    widget.handle_upload(&HttpQrGenerator::new(&ok)).await;
    let before = widget.result().unwrap().locator();

    let outcome = widget.handle_upload(&HttpQrGenerator::new(&failing)).await;

    match outcome {
        UploadOutcome::Failed(notice) => assert_eq!(notice.message, "Upload failed"),
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(!widget.is_loading());
    assert_eq!(widget.phase(), Phase::Failed);
    assert_eq!(widget.selected().unwrap().name, "photo.png");
    assert_eq!(widget.result().unwrap().locator(), before);
    assert!(widget.view(false).upload_enabled, "retry stays possible");
}

#[tokio::test]
async fn test_server_error_without_prior_result() {
    let failing = spawn_backend(StatusCode::INTERNAL_SERVER_ERROR).await;
    let mut widget = UploadWidget::new(&failing, PreviewStore::new());

    widget.intake([SelectedFile::new("photo.png", "image/png", vec![1u8])]);
    let outcome = widget.handle_upload(&HttpQrGenerator::new(&failing)).await;

    assert!(matches!(outcome, UploadOutcome::Failed(_)));
    assert!(widget.result().is_none());
    assert!(widget.download_artifact().is_none());
}

#[tokio::test]
async fn test_reselect_after_success_clears_preview() {
    let config = spawn_backend(StatusCode::OK).await;
    let store = PreviewStore::new();
    let mut widget = UploadWidget::new(&config, store.clone());

    widget.intake([SelectedFile::new("photo.png", "image/png", vec![1u8])]);
    widget.handle_upload(&HttpQrGenerator::new(&config)).await;
    assert_eq!(store.live_count(), 1);

    // Re-dropping the same file still counts as a new selection.
    widget.intake([SelectedFile::new("photo.png", "image/png", vec![1u8])]);

    assert!(widget.result().is_none());
    assert_eq!(widget.phase(), Phase::FileSelected);
    assert_eq!(store.live_count(), 0);
}

/// Backend that promises a 100-byte body, sends 10 bytes and hangs up
async fn spawn_truncating_backend() -> UploadConfig {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let _ = socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n0123456789")
            .await;
        let _ = socket.shutdown().await;
    });

    UploadConfig::with_endpoint(&format!("http://{}/upload/", addr)).unwrap()
}

#[tokio::test]
async fn test_truncated_body_is_failure() {
    let config = spawn_truncating_backend().await;
    let mut widget = UploadWidget::new(&config, PreviewStore::new());

    widget.intake([SelectedFile::new("photo.png", "image/png", vec![1u8, 2, 3])]);
    let outcome = widget.handle_upload(&HttpQrGenerator::new(&config)).await;

    assert!(matches!(outcome, UploadOutcome::Failed(_)), "got {:?}", outcome);
    assert!(!widget.is_loading());
    assert_eq!(widget.phase(), Phase::Failed);
    assert!(widget.result().is_none());
    assert!(widget.download_artifact().is_none());
}
