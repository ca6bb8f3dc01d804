use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use swap_view::{example, render, schema, validate};

mod cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        cli::Command::Schema => schema::run(),
        cli::Command::Example => example::run(),
        cli::Command::Validate { file } => validate::run(&file),
        cli::Command::Render {
            file,
            config,
            format,
        } => render::run(&file, config.as_deref(), &format),
    }
}

fn init_logging(level: &str) {
    let level = level.parse().unwrap_or(tracing::Level::WARN);
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("swap_view={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
