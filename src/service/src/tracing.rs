use std::io;

use clap::Args;
use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Copy, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_level(self) -> Level {
        match self {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        l.as_level().into()
    }
}

/// Logging flags shared by the `gen` and `analyze` binaries.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl LogArgs {
    /// Installs the global subscriber. Logs go to stderr so stdout only carries the command result.
    pub fn init(&self) -> Result<(), anyhow::Error> {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(self.log_level)
            .with_target(false)
            .with_writer(io::stderr)
            .finish();

        Ok(tracing::subscriber::set_global_default(subscriber)?)
    }
}
