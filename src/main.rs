//! thumbsketch - ink-sketch thumbnail generator for blog posts

use clap::Parser;

use thumbsketch::cli::args::Cli;
use thumbsketch::cli::commands;
use thumbsketch::error::ExitCode;
use thumbsketch::logging::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match commands::dispatch(cli).await {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(ExitCode::ERROR);
        }
    }
}
