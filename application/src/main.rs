use std::{io, sync::OnceLock};

use application::{render, Args, Config, View};
use service::{infra::Http, Service};
use tokio::io::{AsyncBufReadExt as _, BufReader, Lines, Stdin};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
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

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let Args { config, reference } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config { api, log } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let http = Http::new(&api.into()).map_err(|e| {
        log::error!("failed to initialize `Http` gateway: {e}");
    })?;

    let mut view = View::new(Service::new(http));
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    if let Some(reference) = reference {
        view.submit_reference(&reference).await;
        print_view(&view);
        sign_prompt(&mut view, &mut input).await?;
    }

    loop {
        println!("\nالرقم المرجعي للعقد:");
        let Some(line) = next_line(&mut input).await? else {
            break Ok(());
        };
        view.submit_reference(&line).await;
        print_view(&view);
        sign_prompt(&mut view, &mut input).await?;
    }
}

/// Prompts for a signature while the displayed contract accepts one.
///
/// An empty input line skips signing and returns to the lookup prompt.
async fn sign_prompt(
    view: &mut View<Http>,
    input: &mut Lines<BufReader<Stdin>>,
) -> Result<(), ()> {
    while view.can_sign() {
        println!("\nالتوقيع الرقمي (اتركه فارغًا للتخطي):");
        let Some(line) = next_line(input).await? else {
            return Ok(());
        };
        if line.trim().is_empty() {
            return Ok(());
        }
        view.submit_signature(&line).await;
        print_view(view);
    }
    Ok(())
}

async fn next_line(
    input: &mut Lines<BufReader<Stdin>>,
) -> Result<Option<String>, ()> {
    input.next_line().await.map_err(|e| {
        log::error!("failed to read standard input: {e}");
    })
}

/// Prints the alert area and the displayed contract of the [`View`].
fn print_view(view: &View<Http>) {
    if let Some(alert) = view.alert() {
        println!("\n{alert}");
    }
    if let Some(contract) = view.contract() {
        println!("\n{}", render::contract(contract));
    }
}
