use clap::Parser;
use miette::{miette, Context, IntoDiagnostic, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::CLIArgs;
use inicfg::logging::initialize_tracing;
use inicfg::IniReader;

mod cli;


/// Level filter used for the log file layer. The console filter is
/// configurable through the command line instead.
const LOG_FILE_LEVEL_FILTER: &str = "debug";

const LOG_FILE_NAME: &str = "inicfg.log";


fn main() -> Result<()> {
    let cli_args = CLIArgs::parse();

    let console_level_filter = cli_args
        .console_logging_level_filter
        .as_deref()
        .unwrap_or("info");

    let console_output_level_filter = EnvFilter::try_new(console_level_filter)
        .into_diagnostic()
        .wrap_err_with(|| {
            miette!(
                "Failed to parse console logging level filter: {}.",
                console_level_filter
            )
        })?;

    // PANIC SAFETY: This is safe because the filter string is a constant
    // that is known to be valid.
    let log_file_output_level_filter = EnvFilter::try_new(LOG_FILE_LEVEL_FILTER).unwrap();

    let logging_raii_guard = initialize_tracing(
        console_output_level_filter,
        log_file_output_level_filter,
        cli_args.log_file_output_directory.as_deref(),
        LOG_FILE_NAME,
    )
    .wrap_err("Failed to initialize tracing.")?;

    info!("Tracing initialized.");


    // Canonicalization is best-effort only: a missing file must still
    // reach the reader so it is reported as a parse outcome.
    let file_path =
        dunce::canonicalize(&cli_args.file_path).unwrap_or_else(|_| cli_args.file_path.clone());

    info!("Reading configuration file: {}.", file_path.display());

    let reader = IniReader::from_path(&file_path);

    if !reader.success() {
        // PANIC SAFETY: `success` returning false means an error is set.
        let error = reader.error().unwrap().clone();

        return Err(error).into_diagnostic().wrap_err_with(|| {
            miette!(
                "Failed to parse configuration file: {}.",
                file_path.display()
            )
        });
    }

    info!(
        "Configuration file parsed: {} sections.",
        reader.section_names().len()
    );


    match (cli_args.section.as_deref(), cli_args.key.as_deref()) {
        (Some(section), Some(key)) => {
            let default = cli_args.default.as_deref().unwrap_or("");
            println!("{}", reader.get_string(section, key, default));
        }
        (Some(_), None) | (None, Some(_)) => {
            return Err(miette!(
                "Options --section and --key must be used together."
            ));
        }
        (None, None) => {
            for name in reader.section_names() {
                println!("[{}]", name);

                // PANIC SAFETY: Every enumerated section name exists in the store.
                for field in reader.section_fields(name).unwrap() {
                    println!("{}", field);
                }

                println!();
            }
        }
    }


    drop(logging_raii_guard);
    Ok(())
}
