use std::{env, fmt, path::Path};

use log::LevelFilter;

use crate::{Error, Result, constants::DEFAULT_OUTPUT_PATH, distance::DistanceMode};

/// Runtime options for a solver run.
#[derive(Clone, Debug)]
pub struct SolverOptions {
    /// Optional input file path for the problem. Empty means stdin.
    pub input: String,
    /// Output file path for the tour. `-` means stdout.
    pub output: String,
    /// Prefix written before every id in the tour output.
    pub id_prefix: String,
    /// Distance convention; `auto` follows the problem's `EDGE_WEIGHT_TYPE`.
    pub distance: DistanceChoice,
    /// Structured logging level.
    pub log_level: LogLevel,
    /// Logging output format.
    pub log_format: LogFormat,
    /// Include timestamps in log lines.
    pub log_timestamp: bool,
    /// Optional output file path for logs. Empty means stderr.
    pub log_output: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DistanceChoice {
    Auto,
    Euclidean,
    Geographic,
}

impl DistanceChoice {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "euclidean" | "euc" | "euc-2d" => Ok(Self::Euclidean),
            "geographic" | "geo" => Ok(Self::Geographic),
            _ => Err(invalid_value("distance", raw, "auto|euclidean|geographic")),
        }
    }

    /// Picks the mode to solve with, given the one declared by the problem header.
    pub fn resolve(self, declared: DistanceMode) -> DistanceMode {
        match self {
            Self::Auto => declared,
            Self::Euclidean => DistanceMode::Euclidean,
            Self::Geographic => DistanceMode::Geographic,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            "off" => Ok(Self::Off),
            _ => Err(invalid_value(
                "log-level",
                raw,
                "error|warn|info|debug|trace|off",
            )),
        }
    }

    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl LogFormat {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            _ => Err(invalid_value("log-format", raw, "compact|pretty")),
        }
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            input: String::new(),
            output: DEFAULT_OUTPUT_PATH.to_string(),
            id_prefix: String::new(),
            distance: DistanceChoice::Auto,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_timestamp: true,
            log_output: String::new(),
        }
    }
}

impl SolverOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse_from_iter(env::args().skip(1))
    }

    fn parse_from_iter<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .peekable();

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::invalid_input(Self::usage()));
            }

            let Some(raw_name) = arg.strip_prefix("--") else {
                return Err(Error::invalid_input(format!(
                    "Unexpected argument: {arg}\n\n{}",
                    Self::usage()
                )));
            };

            if raw_name.is_empty() {
                return Err(Error::invalid_input(format!(
                    "Invalid option name: {arg}\n\n{}",
                    Self::usage()
                )));
            }

            let (name, value) = split_arg(raw_name, &mut args);

            match name.as_str() {
                "input" => options.input = required(&name, value)?,
                "output" => options.output = required(&name, value)?,
                "id-prefix" => options.id_prefix = required(&name, value)?,
                "distance" => {
                    options.distance = DistanceChoice::parse(&required(&name, value)?)?;
                }
                "log-level" => options.log_level = LogLevel::parse(&required(&name, value)?)?,
                "log-format" => {
                    options.log_format = LogFormat::parse(&required(&name, value)?)?;
                }
                "log-output" => options.log_output = required(&name, value)?,
                "log-timestamp" => {
                    options.log_timestamp = match value {
                        Some(v) => parse_bool(&name, &v)?,
                        None => true,
                    };
                }
                "no-log-timestamp" => {
                    if value.is_some() {
                        return Err(Error::invalid_input(format!(
                            "Flag --{name} does not take a value"
                        )));
                    }
                    options.log_timestamp = false;
                }
                _ => {
                    return Err(Error::invalid_input(format!(
                        "Unknown option: --{name}\n\n{}",
                        Self::usage()
                    )));
                }
            }
        }

        Ok(options)
    }

    pub fn usage() -> &'static str {
        concat!(
            "Usage:\n",
            "  tsp-insert [options] [--input problem.tsp]\n",
            "  tsp-insert [options] < problem.tsp\n\n",
            "Options:\n",
            "  --input <path>\n",
            "  --output <path|->           (default: tour.txt)\n",
            "  --id-prefix <text>\n",
            "  --distance <auto|euclidean|geographic>\n",
            "  --log-level <error|warn|info|debug|trace|off>\n",
            "  --log-format <compact|pretty>\n",
            "  --log-timestamp[=<bool>]\n",
            "  --no-log-timestamp\n",
            "  --log-output <path>\n",
            "  --help\n",
            "\n",
            "Examples:\n",
            "  tsp-insert --input ulysses16.tsp --output tour.txt\n",
            "  tsp-insert --id-prefix v_ --output - < att48.tsp\n",
            "  tsp-insert --log-level=debug --log-format=pretty --input berlin52.tsp\n",
        )
    }

    pub fn input_path(&self) -> Option<&Path> {
        optional_path(&self.input)
    }

    pub fn output_path(&self) -> Option<&Path> {
        optional_path(&self.output)
    }

    pub fn log_output_path(&self) -> Option<&Path> {
        optional_path(&self.log_output)
    }
}

impl fmt::Display for SolverOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let distance = match self.distance {
            DistanceChoice::Auto => "auto",
            DistanceChoice::Euclidean => "euclidean",
            DistanceChoice::Geographic => "geographic",
        };
        write!(
            f,
            "\n\tinput         = {}\n\toutput        = {}\n\tid_prefix     = {}\n\tdistance      = {distance}\n\tlog_level     = {:?}\n\tlog_format    = {:?}\n\tlog_timestamp = {}\n\tlog_output    = {}",
            display_or_std(&self.input, "stdin"),
            display_or_std(&self.output, "stdout"),
            self.id_prefix,
            self.log_level,
            self.log_format,
            self.log_timestamp,
            display_or_std(&self.log_output, "stderr"),
        )
    }
}

fn split_arg(
    raw_name: &str,
    args: &mut std::iter::Peekable<impl Iterator<Item = String>>,
) -> (String, Option<String>) {
    if let Some((k, v)) = raw_name.split_once('=') {
        return (k.to_string(), Some(v.to_string()));
    }

    let value = match args.peek() {
        Some(next) if !next.starts_with("--") => args.next(),
        _ => None,
    };

    (raw_name.to_string(), value)
}

fn required(name: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::invalid_input(format!("Missing value for --{name}")))
}

fn optional_path(raw: &str) -> Option<&Path> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "-" {
        None
    } else {
        Some(Path::new(raw))
    }
}

fn display_or_std<'a>(raw: &'a str, fallback: &'a str) -> &'a str {
    match optional_path(raw) {
        Some(_) => raw.trim(),
        None => fallback,
    }
}

fn invalid_value(option: &str, raw: &str, expected: &str) -> Error {
    Error::invalid_input(format!(
        "Invalid value for --{option}: {raw} (expected {expected})"
    ))
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON" => Ok(true),
        "0" | "false" | "FALSE" | "False" | "no" | "NO" | "off" | "OFF" => Ok(false),
        _ => Err(Error::invalid_input(format!(
            "Invalid boolean for --{name}: {value} (expected true/false)"
        ))),
    }
}
