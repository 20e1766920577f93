//! `generate` command: one-shot thumbnail generation for a blog post.
//!
//! Reads the post, acquires an image (text-to-image from a location prompt,
//! or an edit of a reference photo), writes it to the deterministic artifact
//! path, and records that path in the post's front matter. Re-running reuses
//! the same filename and replaces the `image` field, so the command is
//! idempotent.

use tokio::fs;
use tracing::info;

use crate::api::ImagesClient;
use crate::artifact;
use crate::cli::args::GenerateArgs;
use crate::document;
use crate::error::{Result, ThumbsketchError};
use crate::prompt;

/// Environment variable the API credential is read from.
const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Generate a thumbnail for one blog post.
///
/// # Errors
///
/// Returns `MissingCredential` when no API key is available,
/// `InputNotFound` when the post or reference image does not exist,
/// `MissingFrontMatter` when the post has no front-matter block to update,
/// and the API/transport/parse/I-O errors of the underlying steps. Any
/// failure aborts the run; only the image file itself may already exist
/// when a later step fails.
pub async fn run(args: &GenerateArgs) -> Result<()> {
    let api_key = args
        .api_key
        .clone()
        .ok_or(ThumbsketchError::MissingCredential(API_KEY_VAR))?;

    if !args.post.exists() {
        return Err(ThumbsketchError::InputNotFound(args.post.clone()));
    }

    info!(post = %args.post.display(), "reading blog post");
    let content = fs::read_to_string(&args.post).await?;

    if !document::has_front_matter(&content) {
        return Err(ThumbsketchError::MissingFrontMatter(args.post.clone()));
    }

    let (front_matter, _) = document::parse(&content);
    if let Some(title) = front_matter.scalar("title") {
        info!(title, "post loaded");
    }

    let client = ImagesClient::new(api_key, args.api_base.clone());

    let result = if let Some(ref reference) = args.reference {
        if !reference.exists() {
            return Err(ThumbsketchError::InputNotFound(reference.clone()));
        }
        info!(reference = %reference.display(), "transforming reference photo");
        let image = fs::read(reference).await?;
        let filename = reference.file_name().map_or_else(
            || "reference.jpg".to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        client
            .generate_from_reference(&prompt::reference_prompt(), image, &filename)
            .await?
    } else {
        let location = args.location.as_deref().unwrap_or(prompt::DEFAULT_LOCATION);
        info!(location, "building image prompt");
        client
            .generate_from_text(&prompt::location_prompt(location))
            .await?
    };

    info!("image generated");

    let slug = artifact::derive_slug(&front_matter, &args.post);
    fs::create_dir_all(artifact::OUTPUT_DIR).await?;
    client
        .materialize(result, &artifact::thumbnail_path(&slug))
        .await?;

    let image_path = artifact::site_image_path(&slug);
    let updated = document::set_field(&content, "image", &image_path);
    fs::write(&args.post, updated).await?;
    info!(image = %image_path, "front matter updated");

    Ok(())
}
