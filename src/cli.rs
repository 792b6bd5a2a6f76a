//! Command-line interface definitions for the inicfg binary.

use std::path::PathBuf;

use clap::Parser;


/// Command-line arguments.
#[derive(Parser)]
#[command(
    name = "inicfg",
    author,
    about = "Reads an INI-style configuration file and prints its contents \
             or a single looked-up value.",
    version
)]
pub struct CLIArgs {
    /// This is the path to the configuration file to read.
    #[arg(help = "Path to the configuration file to read.")]
    pub file_path: PathBuf,

    #[arg(
        short = 's',
        long = "section",
        help = "Section to look a value up in. Requires --key. \
                If unspecified, the whole file is printed instead."
    )]
    pub section: Option<String>,

    #[arg(
        short = 'k',
        long = "key",
        help = "Key to look up inside the section given with --section."
    )]
    pub key: Option<String>,

    #[arg(
        short = 'd',
        long = "default",
        help = "Fallback value to print when the section or key is missing. \
                Defaults to an empty string."
    )]
    pub default: Option<String>,

    #[arg(
        long = "console-logging-level-filter",
        help = "Tracing level filter for console output (e.g. \"info\" or \
                \"inicfg=debug\"). Defaults to \"info\"."
    )]
    pub console_logging_level_filter: Option<String>,

    #[arg(
        long = "log-file-directory",
        help = "If set, log records are also written to inicfg.log inside \
                this directory."
    )]
    pub log_file_output_directory: Option<PathBuf>,
}
