use std::sync::Arc;
use std::time::Duration;

use spdlog::sink::{RotatingFileSink, RotationPolicy, StdStream, StdStreamSink};
use spdlog::{Level, LevelFilter, Logger, LoggerBuilder};

use crate::config::{Config, LogLevel};

fn level_filter(level: LogLevel) -> LevelFilter {
    let level = match level {
        LogLevel::Critical => Level::Critical,
        LogLevel::Error => Level::Error,
        LogLevel::Warn => Level::Warn,
        LogLevel::Info => Level::Info,
        LogLevel::Debug => Level::Debug,
        LogLevel::Trace => Level::Trace,
    };
    LevelFilter::MoreSevereEqual(level)
}

/// Progress goes to stdout, warnings and errors to stderr
fn add_console_sinks(builder: &mut LoggerBuilder) -> spdlog::Result<()> {
    let streams = [
        (StdStream::Stdout, LevelFilter::MoreVerbose(Level::Warn)),
        (StdStream::Stderr, LevelFilter::MoreSevereEqual(Level::Warn)),
    ];

    for (std_stream, stream_filter) in streams {
        let sink = Arc::new(StdStreamSink::builder()
            .std_stream(std_stream)
            .level_filter(stream_filter)
            .build()?);
        builder.sink(sink);
    }

    Ok(())
}

/// Without a [log] section the default console logger is kept
pub fn configure_logger(config: &Config) -> spdlog::Result<()> {
    let Some(ref log) = config.log else {
        return Ok(());
    };

    let mut builder = Logger::builder();

    if let Some(ref location) = log.location {
        let daily_sink = Arc::new(RotatingFileSink::builder()
            .base_path(location)
            .rotation_policy(RotationPolicy::Daily { hour: 0, minute: 0 })
            .max_files(30)
            .rotate_on_open(false)
            .build()?);
        builder.sink(daily_sink);
    }

    if log.log_to_console || log.location.is_none() {
        add_console_sinks(&mut builder)?;
    }

    let logger = Arc::new(builder.build()?);
    logger.set_flush_level_filter(LevelFilter::MoreSevereEqual(Level::Info));
    logger.set_flush_period(Some(Duration::from_secs(2)));
    logger.set_level_filter(level_filter(log.level));

    spdlog::set_default_logger(logger);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(level_filter(LogLevel::Critical), LevelFilter::MoreSevereEqual(Level::Critical));
        assert_eq!(level_filter(LogLevel::Warn), LevelFilter::MoreSevereEqual(Level::Warn));
        assert_eq!(level_filter(LogLevel::Trace), LevelFilter::MoreSevereEqual(Level::Trace));
    }
}
