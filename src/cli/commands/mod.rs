//! CLI command dispatch and handlers.
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod generate;
pub mod locations;

use crate::cli::args::{Cli, Commands};
use crate::error::ThumbsketchError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli) -> Result<(), ThumbsketchError> {
    match cli.command {
        Commands::Generate(args) => generate::run(&args).await,
        Commands::Locations(args) => {
            locations::run(&args);
            Ok(())
        }
    }
}
