use anyhow::Context;
use clap::Parser;
use release_feed::{assembler, config, writer, ChannelConfig, ReleaseFetcher, ReleasePipeline};
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Generate an RSS feed from the releases of tracked GitHub repositories.
#[derive(Debug, Parser)]
#[command(name = "release-feed", version, about)]
struct Cli {
    /// Path to the repository list (JSON)
    #[arg(long, default_value = "repos.json")]
    config: PathBuf,

    /// Where to write the generated feed
    #[arg(long, default_value = "public/feed.xml")]
    output: PathBuf,

    /// Override the channel's site link
    #[arg(long)]
    site_link: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("Feed generation failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let entries = config::load_entries(&cli.config).context("loading configuration")?;
    info!("Tracking {} repositories", entries.len());

    let mut channel = ChannelConfig::default();
    if let Some(link) = cli.site_link {
        channel.link = link;
    }

    let pipeline = ReleasePipeline::new(ReleaseFetcher::from_env(), channel);
    let outcome = pipeline.run(entries).await;

    let xml = assembler::to_rss_xml(&outcome.document);
    writer::write_feed(&cli.output, &xml)
        .await
        .context("writing feed")?;

    // Per-target failures are warnings only; the run still exits 0.
    for warning in &outcome.warnings {
        warn!("Target skipped: {}", warning);
    }
    info!(
        "Done: {} items written, {} targets skipped",
        outcome.document.items.len(),
        outcome.warnings.len()
    );

    Ok(())
}
