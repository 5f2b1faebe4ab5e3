//! Diagnostic logging for the Kapili MCP Server.
//!
//! Diagnostics go to stderr only; stdout carries protocol traffic. The default
//! line format is `[<timestamp>]\t[<level>]\t<message and fields>`, with an
//! optional switch to tracing-subscriber's JSON output.

use std::fmt;

use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{KapiliError, KapiliResult};

/// Tab-separated diagnostic line format.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticFormat {
    timer: SystemTime,
    source_location: bool,
}

impl DiagnosticFormat {
    /// Creates the format, optionally appending `file:line` after the level.
    pub fn new(source_location: bool) -> Self {
        Self {
            timer: SystemTime,
            source_location,
        }
    }
}

impl<S, N> FormatEvent<S, N> for DiagnosticFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();

        write!(writer, "[")?;
        self.timer.format_time(&mut writer)?;
        write!(
            writer,
            "]\t[{}]\t",
            metadata.level().as_str().to_ascii_lowercase()
        )?;

        if self.source_location {
            if let (Some(file), Some(line)) = (metadata.file(), metadata.line()) {
                write!(writer, "{file}:{line}\t")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn config_filter(config: &LogConfig) -> KapiliResult<EnvFilter> {
    EnvFilter::try_new(&config.level)
        .map_err(|e| KapiliError::Custom(format!("Invalid log filter: {e}")))
}

fn env_filter(config: &LogConfig) -> KapiliResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => config_filter(config),
    }
}

/// Builds the subscriber described by `config`, writing to `writer`.
///
/// `RUST_LOG` takes precedence over `log.level` when set.
pub fn build_subscriber<W>(
    config: &LogConfig,
    writer: W,
) -> KapiliResult<Box<dyn Subscriber + Send + Sync>>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    Ok(subscriber_with_filter(env_filter(config)?, config, writer))
}

fn subscriber_with_filter<W>(
    filter: EnvFilter,
    config: &LogConfig,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false);

    if config.json {
        Box::new(
            builder
                .json()
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .finish(),
        )
    } else {
        Box::new(
            builder
                .event_format(DiagnosticFormat::new(config.source_location))
                .finish(),
        )
    }
}

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `log.level` when set.
pub fn init_logging(config: &LogConfig) -> KapiliResult<()> {
    let subscriber = build_subscriber(config, std::io::stderr)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| KapiliError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}
