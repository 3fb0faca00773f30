use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use host_client::{
    config::{load_settings, normalize_host_url},
    HostClient,
};
use tracing_subscriber::EnvFilter;

mod bridge;
mod controller;

use controller::{orchestration::dispatch_host_command, reducer::ReaderState};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Output {
    Json,
    Html,
}

/// Public newspaper reader. Host messages and reader inputs arrive one per
/// line on stdin; the rendered view is written to stdout after each one.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    host_url: Option<String>,
    #[arg(long, value_enum, default_value = "json")]
    output: Output,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let base_url = normalize_host_url(args.host_url.as_deref().unwrap_or(&settings.host_url))?;
    tracing::info!(%base_url, "reader starting");
    let host = HostClient::new(base_url);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build host runtime")?;

    let (ui_tx, ui_rx) = crossbeam_channel::bounded(64);
    let reader = bridge::spawn_stdin_reader(ui_tx);

    let mut state = ReaderState::default();
    for event in ui_rx.iter() {
        if let Some(cmd) = state.update(event) {
            runtime.block_on(dispatch_host_command(&host, cmd));
        }
        tracing::debug!(
            visible = state.is_visible(),
            index = state.cursor().index(),
            pages = state.book().len(),
            "event applied"
        );
        let view = state.view();
        let rendered = match args.output {
            Output::Json => serde_json::to_string(&view)?,
            Output::Html => view.to_markup(),
        };
        println!("{rendered}");
    }

    if reader.join().is_err() {
        tracing::warn!("stdin reader panicked");
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod reducer_tests;

#[cfg(test)]
#[path = "tests/bridge_tests.rs"]
mod bridge_tests;
