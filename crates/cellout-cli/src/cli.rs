//! Command-line arguments.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

/// Render a notebook cell value to HTML.
///
/// Reads a value as JSON or YAML (dates as `{"$date": "<RFC 3339>"}`,
/// undefined as `{"$undefined": true}`), runs it through the output
/// handlers and prints the resulting markup.
#[derive(Debug, Parser)]
#[command(name = "cellout", version, about)]
pub struct Cli {
    /// Input file; reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,

    /// Input format. Defaults to the file extension, then JSON.
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Plugin definition file (YAML or JSON). Repeatable; later files win.
    #[arg(short, long = "plugin", value_name = "FILE")]
    pub plugins: Vec<PathBuf>,

    /// Render configuration file (YAML or JSON).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Render as a nested value, without container chrome.
    #[arg(long)]
    pub in_container: bool,

    /// Render the empty placeholder, as for a cell whose output is hidden.
    #[arg(long)]
    pub hidden: bool,

    /// Print the handler order instead of rendering.
    #[arg(long)]
    pub list_handlers: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The log level requested with `-v`, if any.
    pub fn log_level(&self) -> Option<LevelFilter> {
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Guesses the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}
