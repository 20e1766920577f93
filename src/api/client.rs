//! Image acquisition client.
//!
//! Wraps the two images endpoints the generator uses: `/images/generations`
//! for text-to-image and `/images/edits` for redrawing a reference photo.
//! Each operation performs exactly one network round trip and normalizes the
//! response into a [`GenerationResult`].

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use futures_util::StreamExt;
use reqwest::{StatusCode, header, multipart, redirect};
use serde_json::json;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::error::{Result, ThumbsketchError};

use super::models::ImagesResponse;

/// Default base URL of the OpenAI API.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Model for text-to-image generation.
const TEXT_MODEL: &str = "dall-e-3";
/// Landscape size supported by the text-to-image model.
const TEXT_SIZE: &str = "1792x1024";
/// Model for reference-image edits.
const EDIT_MODEL: &str = "dall-e-2";
/// Largest square size the edits endpoint supports.
const EDIT_SIZE: &str = "1024x1024";

/// The two shapes a successful generation can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    /// The response inlined the image; base64 already decoded.
    Inline(Vec<u8>),
    /// The response referenced a remote URL to download.
    Remote(String),
}

/// Client for the images API.
#[derive(Debug, Clone)]
pub struct ImagesClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ImagesClient {
    /// Creates a client for the given credential and API base URL.
    ///
    /// The underlying HTTP client never follows redirects on its own;
    /// [`ImagesClient::materialize`] handles the single allowed redirect
    /// explicitly.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should never happen).
    #[must_use]
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Requests a single landscape image for a prompt.
    ///
    /// # Errors
    ///
    /// Returns `ThumbsketchError::Api` on a non-success status,
    /// `ThumbsketchError::Transport` on network failure, and
    /// `ThumbsketchError::Parse`/`ThumbsketchError::NoImageData` when the
    /// response body is unusable.
    pub async fn generate_from_text(&self, prompt: &str) -> Result<GenerationResult> {
        let url = self.endpoint("images/generations");
        let payload = json!({
            "model": TEXT_MODEL,
            "prompt": prompt,
            "n": 1,
            "size": TEXT_SIZE,
            "quality": "standard",
            "response_format": "url",
        });

        debug!(url = %url, model = TEXT_MODEL, "requesting image generation");
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        read_generation(response).await
    }

    /// Requests a redraw of a reference image.
    ///
    /// The upload content type is inferred from the filename extension:
    /// `.png` maps to `image/png`, anything else to `image/jpeg`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ImagesClient::generate_from_text`].
    pub async fn generate_from_reference(
        &self,
        prompt: &str,
        image: Vec<u8>,
        filename: &str,
    ) -> Result<GenerationResult> {
        let url = self.endpoint("images/edits");
        let part = multipart::Part::bytes(image)
            .file_name(filename.to_string())
            .mime_str(content_type_for(filename))?;
        let form = multipart::Form::new()
            .text("model", EDIT_MODEL)
            .text("prompt", prompt.to_string())
            .text("size", EDIT_SIZE)
            .part("image", part);

        debug!(url = %url, model = EDIT_MODEL, file = filename, "requesting image edit");
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        read_generation(response).await
    }

    /// Writes a generation result to `dest`.
    ///
    /// Inline bytes are written directly. A remote URL is fetched, following
    /// at most one 301/302 redirect, and streamed to the file; a partially
    /// written file is removed (best-effort) before a download error
    /// propagates.
    ///
    /// # Errors
    ///
    /// Returns `ThumbsketchError::Io` if the destination cannot be created,
    /// plus the fetch failure modes of the generation calls.
    pub async fn materialize(&self, result: GenerationResult, dest: &Path) -> Result<()> {
        match result {
            GenerationResult::Inline(bytes) => {
                info!(dest = %dest.display(), bytes = bytes.len(), "saving image");
                tokio::fs::write(dest, &bytes).await?;
                Ok(())
            }
            GenerationResult::Remote(url) => {
                info!(dest = %dest.display(), "downloading image");
                let response = self.fetch_following_once(&url).await?;
                let status = response.status();
                if !status.is_success() {
                    let body = response.text().await?;
                    return Err(ThumbsketchError::Api {
                        status: status.as_u16(),
                        body,
                    });
                }
                if let Err(err) = stream_to_file(response, dest).await {
                    let _ = tokio::fs::remove_file(dest).await;
                    return Err(err);
                }
                Ok(())
            }
        }
    }

    /// GETs a URL, re-requesting the `Location` target on a 301/302.
    ///
    /// Only one redirect is followed; whatever the second request returns is
    /// the final answer.
    async fn fetch_following_once(&self, url: &str) -> Result<reqwest::Response> {
        let response = self.http.get(url).send().await?;
        if !matches!(
            response.status(),
            StatusCode::MOVED_PERMANENTLY | StatusCode::FOUND
        ) {
            return Ok(response);
        }

        let target = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                ThumbsketchError::Parse("redirect response without a usable Location header".to_string())
            })?
            .to_string();

        debug!(target = %target, "following redirect");
        Ok(self.http.get(&target).send().await?)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }
}

/// Shared response policy for both generation endpoints: a non-success
/// status becomes an `Api` error carrying the raw body; a success body is
/// parsed and normalized, preferring inline data over a URL.
async fn read_generation(response: reqwest::Response) -> Result<GenerationResult> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ThumbsketchError::Api {
            status: status.as_u16(),
            body,
        });
    }

    let parsed: ImagesResponse = serde_json::from_str(&body)?;
    normalize(parsed)
}

fn normalize(response: ImagesResponse) -> Result<GenerationResult> {
    let Some(image) = response.data.into_iter().next() else {
        return Err(ThumbsketchError::NoImageData);
    };

    if let Some(revised) = &image.revised_prompt {
        debug!(revised_prompt = %revised, "model revised the prompt");
    }

    if let Some(b64) = image.b64_json {
        let bytes = BASE64.decode(b64.trim())?;
        return Ok(GenerationResult::Inline(bytes));
    }
    if let Some(url) = image.url {
        return Ok(GenerationResult::Remote(url));
    }
    Err(ThumbsketchError::NoImageData)
}

/// Streams a response body to `dest`. The handle closes on every path out.
async fn stream_to_file(response: reqwest::Response, dest: &Path) -> Result<()> {
    let mut file = tokio::fs::File::create(dest).await?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        file.write_all(&chunk?).await?;
    }
    file.flush().await?;
    Ok(())
}

/// Maps a reference image filename to its upload content type.
fn content_type_for(filename: &str) -> &'static str {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| ext.eq_ignore_ascii_case("png"))
        .map_or("image/jpeg", |_| "image/png")
}

// ============================================================================
// Tests
// ============================================================================
