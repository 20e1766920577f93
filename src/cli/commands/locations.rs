//! `locations` command: list the built-in location presets.

use serde_json::{Value, json};

use crate::cli::args::{LocationsArgs, OutputFormat};
use crate::prompt::LOCATIONS;

/// Print the known location presets.
pub fn run(args: &LocationsArgs) {
    match args.format {
        OutputFormat::Human => {
            for (name, _) in LOCATIONS {
                println!("{name}");
            }
        }
        OutputFormat::Json => {
            let entries: Vec<Value> = LOCATIONS
                .iter()
                .map(|(name, description)| json!({ "name": name, "description": description }))
                .collect();
            println!("{}", Value::Array(entries));
        }
    }
}
