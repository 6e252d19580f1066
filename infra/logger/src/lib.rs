//! `tracing` subscriber for the `slugeq` binary.
//!
//! One env filter (configured level, overridable through `RUST_LOG`) feeds an optional
//! compact console layer and an optional rolling file layer. File lines are written by a
//! background worker whose guard is held by [`Logger`].
//!
//! ```rust
//! # use slugeq_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("slugeq")
//!     .stderr(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    stderr: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            stderr: false,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Typestate builder: file-only knobs unlock after [`LoggerBuilder::path`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    config: LoggerConfig,
    name: N,
    file_state: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Log file prefix; required before `init`.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { name: WithName(name.into()), config: self.config, file_state: PhantomData }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// Rotated files kept on disk.
    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// JSON lines instead of plain text in the file.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    /// Default directive when `RUST_LOG` is unset.
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Directives such as `slugeq_store=debug`, replacing `RUST_LOG`.
    #[must_use]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Console lines go to stderr so command output on stdout stays parseable.
    #[must_use]
    pub const fn stderr(mut self, enabled: bool) -> Self {
        self.config.stderr = enabled;
        self
    }

    /// Directory of the rolling log files.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut config = self.config;
        config.path = Some(path.into());
        LoggerBuilder { config, name: self.name, file_state: PhantomData }
    }

    /// Installs the global subscriber.
    ///
    /// # Errors
    /// [`LoggerError::Subscriber`] when a subscriber is already installed, and
    /// [`LoggerError::InvalidConfiguration`] for a blank name, zero `max_files`, a bad
    /// filter, or neither output enabled.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { config, name: WithName(name), .. } = self;
        validate_config(&config, &name)?;

        let env_filter = build_env_filter(&config)?;

        let mut layers = Vec::new();
        if config.console {
            let console = layer().compact().with_ansi(true);
            layers.push(if config.stderr {
                console.with_writer(std::io::stderr).boxed()
            } else {
                console.boxed()
            });
        }

        let guard = match &config.path {
            Some(path) => {
                let (file, guard) = file_layer(&config, &name, path)?;
                layers.push(file);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Neither console nor file output is enabled".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

fn file_layer<S>(
    config: &LoggerConfig,
    name: &str,
    path: &Path,
) -> Result<(BoxedLayer<S>, WorkerGuard), LoggerError>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fs::create_dir_all(path).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Failed to create path: {}", path.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(config.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(config.max_files)
        .build(path)?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let base = layer().with_writer(writer).with_ansi(false);
    let boxed = if config.json { base.json().boxed() } else { base.boxed() };

    Ok((boxed, guard))
}

/// Keeps the file worker alive; file output stops once this is dropped.
#[must_use = "Dropping the handle stops file output"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName, file_state: PhantomData }
    }

    /// Present only when file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing log file");
        }
    }
}

/// Level from `log.level` config text, case-insensitive.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for unknown level names.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    level.trim().parse::<LevelFilter>().map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Invalid log level '{level}': {e}").into(),
        context: None,
    })
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn builder_initial_state() {
        let builder = Logger::builder().name("test-app").env_filter("slugeq=debug");
        assert!(builder.config.console);
        assert!(!builder.config.stderr);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.env_filter.as_deref(), Some("slugeq=debug"));
        assert!(builder.config.path.is_none());
    }

    #[test]
    #[serial]
    fn builder_file_configuration() {
        let builder = Logger::builder()
            .name("test-app")
            .path("logs")
            .max_files(5)
            .json(true)
            .level(LevelFilter::DEBUG);

        assert_eq!(builder.config.level, LevelFilter::DEBUG);
        assert_eq!(builder.config.max_files, 5);
        assert!(builder.config.json);
        assert_eq!(builder.config.path.as_deref(), Some(Path::new("logs")));
    }

    #[test]
    fn zero_max_files_is_rejected() {
        let builder = Logger::builder().name("test-app").path("logs").max_files(0);
        let err = validate_config(&builder.config, "test-app").unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = validate_config(&LoggerConfig::default(), "  ").unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn invalid_env_filter_is_reported() {
        let config = LoggerConfig { env_filter: Some("slugeq=notalevel".to_owned()), ..LoggerConfig::default() };
        assert!(build_env_filter(&config).is_err());
    }

    #[test]
    fn levels_parse_from_config_text() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level(" WARN ").unwrap(), LevelFilter::WARN);
        assert!(parse_level("loud").is_err());
    }
}
