//! OpenAI images API client.
//!
//! One client, two operations (text-to-image and reference-image edit), and
//! a materialization step that turns the normalized result into a file on
//! disk. No retries anywhere: a failed call fails the run.

pub mod client;
pub mod models;

pub use client::{DEFAULT_API_BASE, GenerationResult, ImagesClient};
