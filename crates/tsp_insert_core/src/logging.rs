use std::{fs::File, io::Write};

use env_logger::{Builder, Target, fmt::Formatter};
use log::{Level, LevelFilter};

use crate::Result;
use crate::options::{LogFormat, SolverOptions};

/// Crates whose records follow `--log-level`; everything else stays at `Warn` or quieter.
const SOLVER_TARGETS: [&str; 2] = ["tsp_insert_core", "tsp_insert"];

pub fn init_logger(options: &SolverOptions) -> Result<()> {
    let mut builder = build_logger(options)?;
    builder
        .try_init()
        .map_err(|e| crate::Error::other(format!("logger init failed: {e}")))
}

fn build_logger(options: &SolverOptions) -> Result<Builder> {
    let log_format = options.log_format;
    let log_timestamp = options.log_timestamp;
    let level = options.log_level.to_filter();

    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Warn.min(level));
    for target in SOLVER_TARGETS {
        builder.filter_module(target, level);
    }
    builder
        .write_style(env_logger::WriteStyle::Never)
        .format(move |buf: &mut Formatter, record| {
            if log_timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }

            match log_format {
                LogFormat::Compact => {
                    writeln!(buf, "{} {}", level_tag(record.level()), record.args())
                }
                LogFormat::Pretty => {
                    writeln!(
                        buf,
                        "{} [{}] {}",
                        level_tag(record.level()),
                        short_target(record.target()),
                        record.args()
                    )
                }
            }
        });

    if let Some(log_path) = options.log_output_path() {
        let log_file = File::create(log_path).map_err(|e| {
            crate::Error::other(format!(
                "failed to create log output file {}: {e}",
                log_path.display()
            ))
        })?;
        builder.target(Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(Target::Stderr);
    }

    Ok(builder)
}

/// `tsp_insert_core::algo::solver` -> `algo::solver`.
fn short_target(target: &str) -> &str {
    target
        .strip_prefix("tsp_insert_core::")
        .unwrap_or(target)
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

#[cfg(test)]
mod tests {
    use log::{Level, LevelFilter, Log, Metadata};

    use super::{build_logger, level_tag, short_target};
    use crate::options::{LogLevel, SolverOptions};

    fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn level_tags_are_uppercase() {
        assert_eq!(level_tag(Level::Warn), "WARN");
        assert_eq!(level_tag(Level::Trace), "TRACE");
    }

    #[test]
    fn chosen_level_applies_to_solver_crates_only() {
        let options = SolverOptions {
            log_level: LogLevel::Debug,
            ..SolverOptions::default()
        };
        let logger = build_logger(&options).expect("builder").build();

        assert_eq!(logger.filter(), LevelFilter::Debug);
        assert!(enabled(&logger, "tsp_insert_core::algo::insertion", Level::Debug));
        assert!(enabled(&logger, "tsp_insert", Level::Info));
        assert!(!enabled(&logger, "tsp_insert_core::algo::insertion", Level::Trace));
        assert!(!enabled(&logger, "rand::rngs", Level::Info));
        assert!(enabled(&logger, "rand::rngs", Level::Warn));
    }

    #[test]
    fn off_silences_dependencies_too() {
        let options = SolverOptions {
            log_level: LogLevel::Off,
            ..SolverOptions::default()
        };
        let logger = build_logger(&options).expect("builder").build();
        assert_eq!(logger.filter(), LevelFilter::Off);
        assert!(!enabled(&logger, "rand::rngs", Level::Error));
    }

    #[test]
    fn pretty_targets_drop_the_core_prefix() {
        assert_eq!(short_target("tsp_insert_core::io::input"), "io::input");
        assert_eq!(short_target("tsp_insert"), "tsp_insert");
    }

    #[test]
    fn unwritable_log_output_is_reported() {
        let options = SolverOptions {
            log_output: "/nonexistent-dir/tsp-insert/run.log".to_string(),
            ..SolverOptions::default()
        };
        let err = build_logger(&options).err().expect("log file should fail");
        assert!(err.to_string().contains("failed to create log output file"));
    }
}
