use clap::Parser;
use compose_action::cli::args::Cli;
use compose_action::cli::commands::{execute_command, needs_settings};
use compose_action::cli::output;
use compose_action::cli::CliError;
use compose_action::config::Settings;
use compose_action::infrastructure::di::ServiceContainer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let result = load_settings(&cli)
        .and_then(|settings| execute_command(&cli, &ServiceContainer::new(settings)));

    if let Err(e) = result {
        output::failure(&e);
        std::process::exit(e.exit_code());
    }
}

fn load_settings(cli: &Cli) -> Result<Settings, CliError> {
    if needs_settings(&cli.command) {
        Ok(Settings::load()?)
    } else {
        Ok(Settings::default())
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -vvv");
            LevelFilter::TRACE
        }
    };

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
