use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use host_client::{
    config::{load_settings, normalize_host_url},
    HostClient,
};
use moderation::{card_summary, Dashboard, DashboardView};
use shared::{
    domain::SubmissionPosition,
    protocol::{decode_text, Decoded, HostMessage},
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long)]
    host_url: Option<String>,
    /// Print the dashboard markup instead of a plain listing.
    #[arg(long)]
    html: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the dashboard as the host's `owner_ui` message would.
    Open,
    /// Read host messages from stdin, one JSON document per line, and print
    /// the dashboard each time one opens it.
    Listen,
    List,
    Approve {
        position: u32,
    },
    Reject {
        position: u32,
    },
    Publish {
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        volume: String,
        #[arg(long, default_value = "")]
        number: String,
    },
    WriteArticle,
    Close,
}

fn position(raw: u32) -> Result<SubmissionPosition> {
    Ok(SubmissionPosition::try_from(raw)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let base_url = normalize_host_url(cli.host_url.as_deref().unwrap_or(&settings.host_url))?;
    tracing::debug!(%base_url, command = ?cli.command, "dashboard starting");
    let mut dashboard = Dashboard::new(HostClient::new(base_url));

    match cli.command {
        Command::Open => {
            dashboard
                .handle_message(&Decoded::Message(HostMessage::OwnerUi))
                .await;
        }
        Command::Listen => {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
                if line.trim().is_empty() {
                    continue;
                }
                if dashboard.handle_message(&decode_text(line.trim())).await {
                    print_view(&dashboard.view(), cli.html);
                }
            }
            return Ok(());
        }
        Command::List => dashboard.refresh().await,
        Command::Approve { position: raw } => dashboard.approve(position(raw)?).await,
        Command::Reject { position: raw } => dashboard.reject(position(raw)?).await,
        Command::Publish {
            date,
            volume,
            number,
        } => {
            dashboard.form.date = date;
            dashboard.form.volume = volume;
            dashboard.form.number = number;
            if !dashboard.publish().await {
                println!("publish did not go through; see log output");
            }
        }
        Command::WriteArticle => {
            dashboard.write_own_article().await;
            return Ok(());
        }
        Command::Close => {
            dashboard.close().await;
            return Ok(());
        }
    }

    if let Some(notice) = dashboard.take_notice() {
        println!("{}", notice.message());
    }
    print_view(&dashboard.view(), cli.html);
    Ok(())
}

fn print_view(view: &DashboardView, html: bool) {
    if html {
        println!("{}", view.to_markup());
        return;
    }
    if view.is_empty() {
        println!("No pending submissions.");
        return;
    }
    for card in &view.cards {
        println!("{}", card_summary(card));
        if !card.preview.is_empty() {
            println!("   {}", card.preview);
        }
    }
}
