use clap::ValueEnum;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
	Text,
	Json,
}

/// Installs the global subscriber. Logs go to stderr: stdout carries the
/// protocol. `RUST_LOG` overrides the default `info` level.
pub fn init(format: LogFormat) {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	match format {
		LogFormat::Json => tracing_subscriber::registry()
			.with(env_filter)
			.with(fmt::layer().with_writer(std::io::stderr).json())
			.try_init()
			.ok(),
		LogFormat::Text => tracing_subscriber::registry()
			.with(env_filter)
			.with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
			.try_init()
			.ok(),
	};
}
