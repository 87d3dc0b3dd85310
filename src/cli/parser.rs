use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for uTimeline
/// CLI application to render equipment usage timelines from CSV/XLSX
#[derive(Parser)]
#[command(
    name = "utimeline",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render equipment usage timelines (Gantt-style) from CSV and XLSX records",
    long_about = None
)]
pub struct Cli {
    /// Override the records directory (useful for tests or custom data)
    #[arg(global = true, long = "dir")]
    pub dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the usage timeline for one file or the whole records directory
    Show {
        /// Data file (.csv or .xlsx); relative paths resolve against the records directory
        file: Option<String>,

        #[arg(long = "sheet", help = "Workbook sheet to read (xlsx only)")]
        sheet: Option<String>,
    },

    /// List data files found under the records directory
    Files,

    /// List the sheets of an XLSX workbook, sorted descending
    Sheets {
        /// Workbook path; relative paths resolve against the records directory
        file: String,
    },

    /// Export usage records in display order
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long = "source",
            value_name = "DATA",
            help = "Read a single data file instead of the whole records directory"
        )]
        source: Option<String>,

        #[arg(long = "sheet", help = "Workbook sheet to read (xlsx only)")]
        sheet: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },
}
