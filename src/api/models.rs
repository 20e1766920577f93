//! Wire models for the images API.

use serde::Deserialize;

/// Successful response body from the images endpoints.
///
/// Both `/images/generations` and `/images/edits` use this shape.
#[derive(Debug, Deserialize)]
pub struct ImagesResponse {
    /// Generated images, one entry per requested image.
    #[serde(default)]
    pub data: Vec<ImageData>,
}

/// One generated image entry.
#[derive(Debug, Deserialize)]
pub struct ImageData {
    /// Base64-encoded image payload, when the API inlines the image.
    #[serde(default)]
    pub b64_json: Option<String>,
    /// Remote URL of the generated image.
    #[serde(default)]
    pub url: Option<String>,
    /// Prompt rewrite applied by the model, if any.
    #[serde(default)]
    pub revised_prompt: Option<String>,
}
