//! Command-line argument parsing for the datadeck CLI.
//!
//! Flags that take a value accept both `--flag value` and `--flag=value`.

use std::path::PathBuf;

use crate::config::{parse_delay_scale, parse_seed};
use crate::error::ConfigError;
use crate::models::Category;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    Run(CliOptions),
}

/// Options that tune a TUI run. `None` means "not given on the command line".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub instant: bool,
    pub seed: Option<u64>,
    pub delay_scale: Option<f64>,
    pub log_file: Option<PathBuf>,
    pub category: Option<Category>,
}

/// Usage text shown for `--help`.
pub fn usage() -> String {
    format!(
        "datadeck {}\n\
         Browse mocked data sources in the terminal.\n\n\
         USAGE:\n    datadeck [OPTIONS]\n\n\
         OPTIONS:\n\
         \x20   --category <name>     Category loaded first (users, products, news, statistics)\n\
         \x20   --instant             Skip simulated network delays\n\
         \x20   --delay-scale <f>     Multiply simulated delays by <f>\n\
         \x20   --seed <n>            Seed for generated statistics\n\
         \x20   --log-file <path>     Write logs to <path>\n\
         \x20   -h, --help            Print help\n\
         \x20   -V, --version         Print version\n\n\
         KEYS:\n\
         \x20   1-4 select, Tab/Shift-Tab cycle, r retry, q quit",
        super::VERSION
    )
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first item is the program name and is skipped.
///
/// # Examples
///
/// ```
/// use datadeck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["datadeck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        let mut value = |name: &str| -> Result<String, ConfigError> {
            match inline.clone() {
                Some(v) => Ok(v),
                None => args.next().ok_or_else(|| ConfigError::MissingValue {
                    flag: name.to_string(),
                }),
            }
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--instant" => options.instant = true,
            "--seed" => {
                let raw = value("--seed")?;
                options.seed = Some(parse_seed("--seed", &raw)?);
            }
            "--delay-scale" => {
                let raw = value("--delay-scale")?;
                options.delay_scale = Some(parse_delay_scale("--delay-scale", &raw)?);
            }
            "--log-file" => options.log_file = Some(PathBuf::from(value("--log-file")?)),
            "--category" => options.category = Some(value("--category")?.parse()?),
            _ => return Err(ConfigError::UnknownArgument(arg)),
        }
    }

    Ok(CliCommand::Run(options))
}
