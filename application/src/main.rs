use std::{io, process::ExitCode, sync::OnceLock};

use application::{batch, Args, Config};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}

fn start() -> Result<(), ()> {
    let Args {
        config,
        input,
        output,
    } = Args::parse().map_err(|e| {
        if !e.use_stderr() {
            e.exit();
        }
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        input: configured_input,
        output: configured_output,
        batch,
        service,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let input = input.unwrap_or(configured_input);
    let output = output.unwrap_or(configured_output);

    let records = batch::read(&input).map_err(|e| {
        log::error!("failed to load input: {}\n{}", e.as_ref(), e.trace());
    })?;

    let report = batch::run(records, batch, service.into()).map_err(|e| {
        log::error!("failed to run batch: {}\n{}", e.as_ref(), e.trace());
    })?;

    batch::write(&output, &report).map_err(|e| {
        log::error!("failed to store report: {}\n{}", e.as_ref(), e.trace());
    })
}
