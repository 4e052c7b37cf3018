mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use welldoc_core::CanvasSize;

#[derive(Parser)]
#[command(
    name = "welldoc",
    version,
    about = "Completion report checks and wellbore diagrams from extracted well data"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the constraint checks over an extracted job file
    Check {
        /// Path to a job-file JSON envelope
        input_file: PathBuf,

        /// Custom JSON rule file
        #[arg(short, long = "rules", value_name = "FILE", conflicts_with = "preset")]
        rules: Option<PathBuf>,

        /// Predefined ruleset (default: "default")
        #[arg(short, long = "preset", value_name = "NAME")]
        preset: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Compare the permit number in the filename with the extracted data
    Permit {
        /// Path to a job-file JSON envelope
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Lay out a wellbore diagram
    Layout {
        /// Path to a well record, bare or inside a job-file envelope
        input_file: PathBuf,

        /// Canvas size: small, medium (default) or large
        #[arg(short, long, default_value = "medium", value_parser = parse_canvas_size)]
        size: CanvasSize,

        /// Output format: json (default), svg or print
        #[arg(short, long, default_value = "json")]
        output: String,

        /// Write output to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Manage and inspect rulesets
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// List predefined rulesets
    List,
    /// Print a predefined ruleset as JSON
    Show {
        /// Preset name (e.g., "default")
        preset: String,
    },
    /// Validate a custom rule file
    Validate {
        /// Path to JSON rule file
        file: PathBuf,
    },
}

fn parse_canvas_size(s: &str) -> Result<CanvasSize, String> {
    CanvasSize::from_str_loose(s)
        .ok_or_else(|| format!("unknown canvas size '{s}'. Available: small, medium, large"))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            input_file,
            rules,
            preset,
            output,
        } => commands::check::run(input_file, rules, preset, &output),
        Commands::Permit { input_file, output } => commands::permit::run(input_file, &output),
        Commands::Layout {
            input_file,
            size,
            output,
            out,
        } => commands::layout::run(input_file, size, &output, out),
        Commands::Rules { action } => match action {
            RulesAction::List => commands::rules::list(),
            RulesAction::Show { preset } => commands::rules::show(&preset),
            RulesAction::Validate { file } => commands::rules::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
