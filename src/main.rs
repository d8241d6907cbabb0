mod config;
mod convert;
mod feed;
mod g1000;
mod track;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::Config;
use crate::convert::{write_log, Converter, OnFail};
use crate::feed::{extract, Extraction, Feed};
use crate::g1000::{default_file_name, Airframe};
use crate::track::{dedup_by_second, synthesize};

#[derive(Parser)]
#[command(name = "fa2g1000")]
#[command(about = "Convert flight-tracking exports into G1000 CSV track logs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one or more GeoJSON feeds into a single track log
    Convert {
        /// Feeds in the order their rows should appear
        #[arg(required = true)]
        sources: Vec<String>,
        /// Aircraft registration, written as system_id
        #[arg(long)]
        ident: Option<String>,
        /// Aircraft model, written as airframe_name
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Overrides the <IDENT>-<date_time>.csv name
        #[arg(long)]
        file_name: Option<String>,
        #[arg(long)]
        feature_index: Option<usize>,
        #[arg(long, value_enum)]
        on_fail: Option<OnFail>,
        /// YAML configuration file
        #[arg(long)]
        config: Option<String>,
    },
    /// Print what a feed contains
    Inspect {
        source: String,
        #[arg(long)]
        feature_index: Option<usize>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            sources,
            ident,
            model,
            output_dir,
            file_name,
            feature_index,
            on_fail,
            config,
        } => {
            let config = match config.as_deref().map(Config::from_file).transpose() {
                Ok(c) => c.unwrap_or_default(),
                Err(e) => {
                    eprintln!("Error reading config: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            let options = ConvertOptions {
                ident: ident.or(config.airframe.ident),
                model: model.or(config.airframe.model),
                output_dir: output_dir.unwrap_or(config.output.directory),
                file_name,
                converter: Converter::new(
                    feature_index.unwrap_or(config.feed.feature_index),
                    on_fail.unwrap_or(config.feed.on_fail),
                ),
            };
            run_convert(&sources, options)
        }
        Commands::Inspect {
            source,
            feature_index,
        } => inspect(
            &source,
            feature_index.unwrap_or(feed::TRAJECTORY_FEATURE_INDEX),
        ),
    }
}

struct ConvertOptions {
    ident: Option<String>,
    model: Option<String>,
    output_dir: PathBuf,
    file_name: Option<String>,
    converter: Converter,
}

fn run_convert(sources: &[String], options: ConvertOptions) -> ExitCode {
    let (Some(ident), Some(model)) = (options.ident, options.model) else {
        eprintln!("Aircraft ident and model are required (--ident/--model or airframe config)");
        return ExitCode::FAILURE;
    };
    let airframe = Airframe { model, ident };

    log::info!(
        "converting {} source(s), on_fail={}",
        sources.len(),
        options.converter.on_fail
    );

    let conversion = match options
        .converter
        .convert(sources, |label| Feed::from_file(Path::new(label)))
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Conversion failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let file_name = match (options.file_name, conversion.canonical_start()) {
        (Some(name), _) => name,
        (None, Some(start)) => default_file_name(&airframe.ident, start),
        (None, None) => {
            eprintln!("Conversion produced no rows");
            return ExitCode::FAILURE;
        }
    };

    let contents = conversion.render(&airframe);
    match write_log(&options.output_dir, &file_name, &contents) {
        Ok(path) => {
            println!(
                "Wrote {} rows from {} track(s) to {}",
                conversion.row_count(),
                conversion.tracks.len(),
                path.display()
            );
            for skipped in &conversion.skipped {
                println!("  skipped {}: {}", skipped.label, skipped.reason);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error writing log: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn inspect(path: &str, feature_index: usize) -> ExitCode {
    let feed = match Feed::from_file(Path::new(path)) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error reading feed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{} feature(s)", feed.features.len());
    for (i, feature) in feed.features.iter().enumerate() {
        let kind = feature
            .geometry
            .as_ref()
            .map(|g| g.kind.as_str())
            .unwrap_or("none");
        println!("  {}: {} ({})", i, feature.name().unwrap_or("unnamed"), kind);
    }

    let points = match extract(&feed, feature_index) {
        Ok(Extraction::Points(points)) => points,
        Ok(Extraction::Insufficient { points }) => {
            println!("Feature {} has only {} point(s)", feature_index, points);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Shape error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let raw = points.len();
    let unique = dedup_by_second(points.clone()).len();
    let track = synthesize(points);
    println!(
        "Feature {}: {} points, {} duplicate timestamp(s)",
        feature_index,
        raw,
        raw - unique
    );
    if let (Some(start), Some(end)) = (track.start(), track.end()) {
        println!("  {} -> {}", start, end);
    }
    if let Some(max) = track.points.iter().filter_map(|p| p.speed_knots).max() {
        println!("  max ground speed {} kt", max);
    }
    ExitCode::SUCCESS
}
