use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "usage: bank_sim [--log <filter>] <operations.csv>";

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing operations script\n{}", USAGE)]
    MissingScript,
    #[error("missing value for {0}\n{}", USAGE)]
    MissingValue(String),
    #[error("unexpected argument: {0}\n{}", USAGE)]
    UnexpectedArgument(String),
}

/// Command-line configuration of the `bank_sim` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The CSV script of operations to replay.
    pub script: PathBuf,

    /// A `tracing` filter directive, e.g. `info` or `bank_sim=debug`.
    /// When absent, `RUST_LOG` is used.
    pub log_filter: Option<String>,
}

impl Config {
    /// Build the configuration from the arguments, program name excluded.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let mut script = None;
        let mut log_filter = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--log" => {
                    let filter = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue("--log".to_string()))?;
                    log_filter = Some(filter);
                }
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnexpectedArgument(flag.to_string()));
                }
                path if script.is_none() => script = Some(PathBuf::from(path)),
                other => return Err(ConfigError::UnexpectedArgument(other.to_string())),
            }
        }

        Ok(Self {
            script: script.ok_or(ConfigError::MissingScript)?,
            log_filter,
        })
    }
}
