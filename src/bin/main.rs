// File: src/bin/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use spell_core::config::{
    Config, OutputFormat, DEFAULT_DICTIONARY_PATH, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH,
};
use std::io::{stdin, stdout};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Highlights misspelled words in a text file and walks through corrections.
#[derive(Parser, Debug)]
#[command(name = "spell_checker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Word list; accepted corrections are appended to it
    #[arg(short, long, env = "SPELL_DICTIONARY", default_value = DEFAULT_DICTIONARY_PATH)]
    dictionary: PathBuf,

    /// Text to check
    #[arg(short, long, env = "SPELL_INPUT", default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Where the corrected text is written
    #[arg(short, long, env = "SPELL_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Largest edit distance for suggestions
    #[arg(short = 'm', long, env = "SPELL_MAX_DISTANCE", default_value_t = 1)]
    max_distance: usize,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn log_filter(&self) -> String {
        let level = match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, _) => "debug",
        };
        format!("spell_core={level},spell_checker={level}")
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            dictionary_path: args.dictionary,
            input_path: args.input,
            output_path: args.output,
            max_distance: args.max_distance,
            format: args.format,
            pretty: args.pretty,
        }
    }
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so they never mix with the checked text.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(args.into()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    let outcome = spell_core::app::run(&config, stdin().lock(), stdout().lock())
        .with_context(|| format!("spell check of {} failed", config.input_path.display()))?;
    tracing::info!(
        misspelled = outcome.misspelled,
        replaced = outcome.replaced,
        written = outcome.output_written,
        "done"
    );
    Ok(())
}
