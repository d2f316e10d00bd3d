//! bloburl CLI - Command line interface for bloburl
//!
//! Encodes files as data-URI locators and decodes/inspects existing
//! locators from the command line.

use bloburl::{locator::data_uri, File, ObjectUrls};
use clap::{Parser, Subcommand};
use log::debug;
use simple_logger::{set_up_color_terminal, SimpleLogger};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bloburl")]
#[command(about = "In-memory blobs with data-URI and object-URL locators")]
#[command(version)]
struct Cli {
    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a file as a data-URI locator
    Encode {
        /// Path to the file to encode
        path: PathBuf,
        /// Content type (guessed from the extension when omitted)
        #[arg(short = 't', long)]
        content_type: Option<String>,
    },

    /// Decode a data-URI locator
    Decode {
        /// The locator string
        locator: String,
        /// Write the payload to this path instead of only reporting it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show a locator's content type and size
    Inspect {
        /// The locator string
        locator: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    set_up_color_terminal();
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let logger = SimpleLogger::new().without_timestamps().with_level(level);
    log::set_max_level(logger.max_level());
    log::set_boxed_logger(Box::new(logger))?;

    match cli.command {
        Commands::Encode { path, content_type } => {
            let data = std::fs::read(&path)?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let content_type =
                content_type.unwrap_or_else(|| guess_content_type(&path).to_string());
            debug!("encoding {} ({} bytes) as {}", name, data.len(), content_type);

            let file = File::new([data], name).with_content_type(&content_type);
            let urls = ObjectUrls::data_uri();
            let locator = urls.create(file.as_blob());

            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "name": file.name(),
                    "size": file.size(),
                    "type": file.content_type(),
                    "locator": locator
                }),
            );
        }

        Commands::Decode { locator, output: out_path } => {
            let blob = data_uri::decode(&locator)?;
            debug!("decoded {} bytes of {}", blob.size(), blob.content_type());

            if let Some(out_path) = &out_path {
                std::fs::write(out_path, blob.as_bytes())?;
            }

            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "size": blob.size(),
                    "type": blob.content_type(),
                    "written": out_path.as_ref().map(|p| p.display().to_string())
                }),
            );
        }

        Commands::Inspect { locator } => {
            let blob = data_uri::decode(&locator)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "type": blob.content_type(),
                    "size": blob.size()
                }),
            );
        }
    }

    Ok(())
}

/// Guess a content type from a file extension
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("txt") => "text/plain",
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

fn output(format: &OutputFormat, value: &serde_json::Value) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(value).unwrap());
        }
        OutputFormat::Text => {
            println!("{}", serde_json::to_string_pretty(value).unwrap());
        }
    }
}
