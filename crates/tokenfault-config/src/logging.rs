//! Tracing subscriber installation.
//!
//! A console layer in the configured format, plus an optional rolling daily
//! JSON file written through a non-blocking appender. Each layer carries its
//! own `EnvFilter` built from `logging.filter`.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Layer, Registry};

use crate::error::{ConfigError, Result};
use crate::types::{LogFormat, LoggingConfig};

/// A type-erased layer over the base registry.
pub type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps the file writer alive; dropping it flushes pending lines.
#[must_use = "dropping the guard stops file logging"]
#[derive(Default)]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Build the subscriber layers for `config` without installing them.
pub fn build_layers(config: &LoggingConfig) -> Result<(Vec<BoxedLayer>, LoggingGuard)> {
    let mut layers: Vec<BoxedLayer> = Vec::new();

    let console: BoxedLayer = match config.format {
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_target(config.with_target)
            .with_filter(config.env_filter()?)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(config.with_target)
            .with_filter(config.env_filter()?)
            .boxed(),
    };
    layers.push(console);

    let mut guard = LoggingGuard::default();
    if let Some(ref file) = config.file {
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(&file.prefix)
            .build(&file.directory)
            .map_err(|e| ConfigError::LogFile {
                path: file.directory.display().to_string(),
                reason: e.to_string(),
            })?;
        let (non_blocking, worker) = tracing_appender::non_blocking(appender);
        layers.push(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(config.env_filter()?)
                .boxed(),
        );
        guard._file = Some(worker);
    }

    Ok((layers, guard))
}

/// Install the global subscriber described by `config`.
///
/// Fails with [`ConfigError::Subscriber`] if one is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<LoggingGuard> {
    let (layers, guard) = build_layers(config)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| ConfigError::Subscriber(e.to_string()))?;
    tracing::debug!(filter = %config.filter, format = ?config.format, "tracing initialized");
    Ok(guard)
}
