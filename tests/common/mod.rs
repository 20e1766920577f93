//! Shared integration-test harness: a mock images API served in-process and
//! helpers for running the `thumbsketch` binary against a scratch site tree.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

use axum::Router;
use tokio::process::Command;
use tokio::task::JoinHandle;

/// Fake image payload written by the mock API. Not a decodable PNG; nothing
/// in the pipeline inspects the bytes.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nthumbsketch-test-image";

/// A mock images API bound to an ephemeral localhost port.
///
/// The server task is aborted on drop.
pub struct MockApi {
    /// Base URL including the `/v1` prefix, e.g. `http://127.0.0.1:PORT/v1`.
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl MockApi {
    /// Serves a fixed router.
    #[allow(clippy::missing_panics_doc)]
    pub async fn start(router: Router) -> Self {
        Self::start_with(|_| router).await
    }

    /// Serves a router built from the server's own origin, for routes that
    /// need to hand out absolute URLs pointing back at themselves.
    #[allow(clippy::missing_panics_doc)]
    pub async fn start_with(build: impl FnOnce(&str) -> Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock API listener");
        let addr = listener.local_addr().expect("mock API has no local addr");
        let origin = format!("http://{addr}");
        let router = build(&origin);

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("mock API server failed");
        });

        Self {
            base_url: format!("{origin}/v1"),
            handle,
        }
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Runs the thumbsketch binary in `site_root` with a scrubbed environment.
///
/// The credential and API base variables are cleared first so ambient
/// developer configuration cannot leak into tests; pass the ones a test
/// needs via `envs`.
#[allow(clippy::missing_panics_doc)]
pub async fn run_thumbsketch(site_root: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    let bin = env!("CARGO_BIN_EXE_thumbsketch");
    let mut command = Command::new(bin);
    command
        .args(args)
        .current_dir(site_root)
        .env_remove("OPENAI_API_KEY")
        .env_remove("OPENAI_BASE_URL")
        .env_remove("THUMBSKETCH_LOG_LEVEL")
        .env_remove("THUMBSKETCH_COLOR")
        .env_remove("NO_COLOR");
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().await.expect("failed to run thumbsketch")
}

/// Creates a scratch site tree and writes one post into it.
///
/// Returns the tempdir (keep it alive for the test's duration) and the
/// post's path relative to the site root.
#[allow(clippy::missing_panics_doc)]
pub fn site_with_post(post_name: &str, content: &str) -> (tempfile::TempDir, PathBuf) {
    let site = tempfile::tempdir().expect("failed to create site tempdir");
    let relative = PathBuf::from("blog").join(post_name);
    write_file(&site.path().join(&relative), content.as_bytes());
    (site, relative)
}

/// Writes a file, creating parent directories as needed.
#[allow(clippy::missing_panics_doc)]
pub fn write_file(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create parent dirs");
    }
    std::fs::write(path, bytes).expect("failed to write file");
}

/// Standard base64 encoding of [`PNG_BYTES`] for inline-payload responses.
#[must_use]
pub fn png_base64() -> String {
    use base64::Engine as _;
    base64::engine::general_purpose::STANDARD.encode(PNG_BYTES)
}
