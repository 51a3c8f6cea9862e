//! Command-line argument parsing for the PetPal CLI.

use thiserror::Error;

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Run the TUI (default)
    RunTui,
    /// Probe `GET /health`, print the payload and exit
    Health,
    /// Print the version and exit
    Version,
    /// Print usage and exit
    Help,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// `--api-url` override for the inference service base URL
    pub api_url: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),
}

pub const USAGE: &str = "\
Usage: petpal [OPTIONS]

Options:
      --api-url <URL>  Inference service base URL (overrides PETPAL_API_URL)
      --health         Check the service health endpoint, print the JSON and exit
  -V, --version        Print version
  -h, --help           Print this help

Environment:
  PETPAL_API_URL       Inference service base URL
  PETPAL_RECIPE_COUNT  Recipes requested per regeneration
  PETPAL_LOG           Log filter, e.g. info or petpal=debug";

/// Parse command-line arguments. The first item is the program name.
///
/// `--version` and `--help` win over everything else. Unknown flags are
/// ignored.
///
/// ```
/// use petpal::cli::args::{parse_args, CliCommand};
///
/// let args = ["petpal", "--health", "--api-url", "http://localhost:7860"];
/// let parsed = parse_args(args.iter().map(|s| s.to_string())).unwrap();
/// assert_eq!(parsed.command, CliCommand::Health);
/// assert_eq!(parsed.api_url.as_deref(), Some("http://localhost:7860"));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut command = CliCommand::RunTui;
    let mut api_url = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                return Ok(CliArgs {
                    command: CliCommand::Version,
                    api_url,
                })
            }
            "--help" | "-h" => {
                return Ok(CliArgs {
                    command: CliCommand::Help,
                    api_url,
                })
            }
            "--health" => command = CliCommand::Health,
            "--api-url" => {
                let value = args.next().ok_or(ArgsError::MissingValue("--api-url"))?;
                api_url = Some(value);
            }
            other => {
                if let Some(value) = other.strip_prefix("--api-url=") {
                    if value.is_empty() {
                        return Err(ArgsError::MissingValue("--api-url"));
                    }
                    api_url = Some(value.to_string());
                }
            }
        }
    }

    Ok(CliArgs { command, api_url })
}
