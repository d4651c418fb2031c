use std::fs;
use std::path::PathBuf;

use tracing::info;

use deckpdf::api::{BatchReport, convert_file_to_path, iterate_candidates};
use deckpdf::core::params::{ConvertParams, default_launcher};
use deckpdf::io::discover::output_path_for;
use deckpdf::types::{Outcome, SourceFormat};

use super::args::CliArgs;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = ConvertParams {
        launcher: args.launcher.unwrap_or_else(default_launcher),
        ..Default::default()
    };

    // Input resolution is the only fatal failure; everything past this
    // point is recovered per file.
    let candidates: Vec<PathBuf> = iterate_candidates(&args.input)?.collect();

    fs::create_dir_all(&args.output)?;

    info!("Starting batch conversion from: {:?}", args.input);
    info!("Output directory: {:?}", args.output);

    let mut report = BatchReport::default();

    for path in candidates {
        match SourceFormat::from_path(&path) {
            None => {
                println!(
                    "Skipping file '{}' as it does not have a presentation extension.",
                    path.display()
                );
                report.record(Outcome::Skipped);
            }
            Some(_) => {
                let output_path = output_path_for(&path, &args.output, params.format);
                info!("Converting: {:?} -> {:?}", path, output_path);

                match convert_file_to_path(&path, &output_path, &params) {
                    Ok(()) => {
                        info!("Successfully converted: {:?}", path);
                        report.record(Outcome::Converted);
                    }
                    Err(e) => {
                        println!("Error converting file '{}': {}", path.display(), e);
                        report.record(Outcome::Failed);
                    }
                }
            }
        }
    }

    println!(
        "Conversion completed: {} files converted successfully, {} files failed.",
        report.converted, report.errors
    );
    Ok(())
}
