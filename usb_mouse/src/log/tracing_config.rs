// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where the logs go, and how much of them.
///
/// Anything that is `Into<TracingConfig>` can be handed to
/// [`crate::try_initialize_logging_global`]:
///
/// ```
/// use usb_mouse::{DisplayPreference, TracingConfig, WriterConfig};
///
/// let from_level: TracingConfig = tracing_core::LevelFilter::DEBUG.into();
/// assert_eq!(
///     from_level.writer_config,
///     WriterConfig::File(usb_mouse::DEFAULT_LOG_FILE_NAME.to_string())
/// );
///
/// let from_display: TracingConfig = DisplayPreference::Stderr.into();
/// assert_eq!(from_display.level_filter, tracing_core::LevelFilter::DEBUG);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// The `String` is the path of the log file, eg: `log.txt` or `/tmp/read_mouse.log`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::Display(preferred_display),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_level_converts_to_file_config() {
        let it: TracingConfig = tracing::Level::INFO.into();
        assert_eq2!(
            it,
            TracingConfig {
                writer_config: WriterConfig::File("log.txt".to_string()),
                level_filter: LevelFilter::INFO,
            }
        );
    }

    #[test]
    fn test_writer_config_defaults_to_debug() {
        let it: TracingConfig = WriterConfig::None.into();
        assert_eq2!(it.get_level_filter(), LevelFilter::DEBUG);
        assert_eq2!(it.get_writer_config(), WriterConfig::None);
    }
}
