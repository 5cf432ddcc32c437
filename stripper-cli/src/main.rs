//! Mapper Prefix Stripper - Singer inline mapper binary
//!
//! Sits between a tap and a target in a Singer pipeline, reading messages on
//! stdin and writing them to stdout with configured prefixes stripped from
//! SCHEMA property names and RECORD field names. STATE and ACTIVATE_VERSION
//! messages pass through untouched. Logging goes to stderr; stdout carries
//! only the message stream.

use std::error::Error;
use std::io;

use clap::Parser;
use serde_json::json;
use stripper_io::run_pipeline;
use stripper_map::PrefixStripper;

mod settings;

#[derive(Parser)]
#[command(name = "mapper-prefix-stripper")]
#[command(about = "Singer inline mapper that strips configured prefixes from field names")]
#[command(version)]
struct Cli {
    /// Configuration source: a JSON file path, an inline JSON object, or the
    /// literal ENV to read MAPPER_PREFIX_STRIPPER_* variables. May be given
    /// multiple times; later sources override earlier ones.
    #[arg(long = "config", value_name = "SOURCE")]
    config: Vec<String>,

    /// Validate configuration and exit without reading any input
    #[arg(long)]
    validate_config: bool,

    /// Print name, version, and supported settings as JSON, then exit
    #[arg(long)]
    about: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let cli = Cli::parse();

    if cli.about {
        print_about();
        return Ok(());
    }

    let config = settings::load_config(&cli.config)?;

    if cli.validate_config {
        println!("Config validation passed.");
        return Ok(());
    }

    tracing::debug!(prefixes = ?config.strip_prefixes, "starting stream loop");
    let stripper = PrefixStripper::new(config);
    let summary = run_pipeline(io::stdin().lock(), io::stdout().lock(), &stripper)?;
    tracing::debug!(
        messages_read = summary.messages_read,
        messages_written = summary.messages_written,
        "clean end of stream"
    );
    Ok(())
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_about() {
    let about = json!({
        "name": "mapper-prefix-stripper",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Singer inline mapper that strips configured prefixes from field names",
        "settings": {
            "type": "object",
            "properties": {
                "strip_prefixes": {
                    "type": "array",
                    "items": {"type": "string"},
                    "title": "The prefixes to replace",
                    "description": "The field prefixes that needs removal"
                }
            }
        }
    });
    println!("{about:#}");
}
