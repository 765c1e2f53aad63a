use std::sync::Arc;

use clap::Parser;
use serde::Serialize;

use crate::runtime::{AppContext, ExtractRequest, ResizeRequest, Strict};

use super::types::{Cli, Commands, SourceArgs};

pub fn run_cli() -> Result<(), String> {
    run(Cli::parse())
}

pub(super) fn run(cli: Cli) -> Result<(), String> {
    let mut app = AppContext::new();
    if cli.strict {
        app = app.with_policy(Arc::new(Strict));
    }

    match cli.command {
        Commands::Resize {
            source,
            new_size,
            output_path,
            output_format,
        } => {
            let request = ResizeRequest {
                new_size: new_size.0,
                output_dir: output_path,
                output_format,
            };
            let service = app.resize_service();
            match source {
                SourceArgs {
                    image_path: Some(image),
                    ..
                } => print_json(&service.resize_file(&image, &request).map_err(to_message)?)?,
                SourceArgs {
                    folder_path: Some(folder),
                    ..
                } => print_json(&service.resize_folder(&folder, &request).map_err(to_message)?)?,
                _ => return Err(missing_source()),
            }
        }
        Commands::Extract2D {
            source,
            location,
            count,
            output_path,
        } => {
            let request = ExtractRequest {
                location,
                count,
                output_dir: output_path,
            };
            let service = app.extract_service();
            match source {
                SourceArgs {
                    image_path: Some(image),
                    ..
                } => print_json(&service.extract_file(&image, &request).map_err(to_message)?)?,
                SourceArgs {
                    folder_path: Some(folder),
                    ..
                } => print_json(&service.extract_folder(&folder, &request).map_err(to_message)?)?,
                _ => return Err(missing_source()),
            }
        }
        Commands::Info { input } => {
            let info = app.info_service().describe(&input).map_err(to_message)?;
            print_json(&info)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).map_err(|error| error.to_string())?
    );
    Ok(())
}

fn to_message(error: impl std::fmt::Display) -> String {
    error.to_string()
}

fn missing_source() -> String {
    "one of --imagePath or --folderPath is required".to_string()
}
