//! thumbsketch - ink-sketch thumbnail generation for blog posts
//!
//! This library provides the pieces behind the `thumbsketch` binary: a
//! front-matter codec, the prompt builder for the hand-drawn sketch style,
//! an images API client, and deterministic artifact naming.

pub mod api;
pub mod artifact;
pub mod cli;
pub mod document;
pub mod error;
pub mod logging;
pub mod prompt;
