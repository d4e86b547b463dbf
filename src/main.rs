//! Burn-up annotation CLI
//!
//! Usage:
//!   burnup-annotate [OPTIONS] [FILE]
//!
//! Options:
//!   -p, --project <NAME>       Only place annotations of this project
//!   -f, --format <FORMAT>      Output format: text or svg
//!   -s, --stylesheet <FILE>    Stylesheet file for overlay colours (TOML format)
//!   --label-width <N>          Maximum characters per label line
//!   --log-level <LEVEL>        Log level (off, error, warn, info, debug, trace)
//!   -h, --help                 Print help

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use log::{debug, LevelFilter};

use burnup_annotations::{
    place_annotations_with, place_manifest, render_overlay_with_stylesheet, select_project,
    AnnotationManifest, LayoutConfig, LogObserver, PositionReport, PositionedAnnotation,
    RenderError, Stylesheet, SvgConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One row per annotation followed by the group report
    Text,
    /// SVG overlay with guide lines and labels
    Svg,
}

#[derive(Parser, Debug)]
#[command(name = "burnup-annotate")]
#[command(about = "Place due-date annotations on a burn-up chart without overlaps")]
struct Cli {
    /// Annotation manifest (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Only place annotations of this project
    #[arg(short, long)]
    project: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Stylesheet file for overlay colours (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Maximum characters per label line
    #[arg(long, default_value_t = 20)]
    label_width: usize,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!(cli:?; "Parsed arguments");

    // If no input file and stdin is a terminal (interactive), show usage
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let layout = LayoutConfig::default();
    let placed = match &cli.input {
        Some(path) => place_manifest(path, cli.project.as_deref(), &layout),
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                process::exit(1);
            }
            AnnotationManifest::from_str(&buffer)
                .map_err(RenderError::from)
                .and_then(|manifest| select_project(manifest, cli.project.as_deref()))
                .map(|annotations| place_annotations_with(&annotations, &layout, &mut LogObserver))
        }
    };

    let positions = match placed {
        Ok(positions) => positions,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match cli.format {
        OutputFormat::Text => print!("{}", format_table(&positions)),
        OutputFormat::Svg => {
            let config = SvgConfig::default().with_label_max_chars(cli.label_width);
            println!(
                "{}",
                render_overlay_with_stylesheet(&positions, &config, &stylesheet)
            );
        }
    }
}

/// Tabular listing of placed annotations plus the per-group report
fn format_table(positions: &[PositionedAnnotation]) -> String {
    let mut out = format!(
        "{:<6} {:>5} {:>7} {:<10} {:<16} {}\n",
        "group", "y", "offset", "due", "label at", "label"
    );
    for pos in positions {
        out.push_str(&format!(
            "{:<6} {:>5.0} {:>7.2} {:<10} {:<16} {}\n",
            pos.group_id.0 + 1,
            pos.y,
            pos.x_offset,
            pos.end_date.format("%Y-%m-%d").to_string(),
            pos.display_date().format("%Y-%m-%d %H:%M").to_string(),
            pos.task.label
        ));
    }
    out.push('\n');
    out.push_str(&PositionReport::from_positions(positions).to_string());
    out
}

fn print_intro() {
    println!(
        r#"burnup-annotate - due-date annotation placement for burn-up charts

USAGE:
    burnup-annotate [OPTIONS] [FILE]
    cat annotations.toml | burnup-annotate --format svg

MANIFEST:
    [[annotation]]
    project = "apollo"
    task_name = "Design review"
    end_date = 2024-03-01
    label = "Design review"    # optional
    show = true                # optional

Run --help for all options."#
    );
}
