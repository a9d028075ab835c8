use crate::assembler::{self, TargetBatch};
use crate::classifier;
use crate::config::RepoEntry;
use crate::fetcher::ReleaseFetcher;
use crate::normalizer;
use crate::types::{ChannelConfig, FeedDocument, FeedItem};
use chrono::Utc;
use tracing::{info, warn};

/// Result of one full run: the assembled document plus the warnings
/// collected from targets that were skipped.
#[derive(Debug)]
pub struct RunOutcome {
    pub document: FeedDocument,
    pub warnings: Vec<String>,
}

/// Sequential fetch → classify → normalize → assemble orchestration.
///
/// Targets are processed one at a time; a failing target is recorded and
/// skipped, never aborting the rest of the run. The only accumulating
/// state is the per-target item batches and the warning list.
pub struct ReleasePipeline {
    fetcher: ReleaseFetcher,
    channel: ChannelConfig,
}

impl ReleasePipeline {
    pub fn new(fetcher: ReleaseFetcher, channel: ChannelConfig) -> Self {
        Self { fetcher, channel }
    }

    pub async fn run(&self, entries: Vec<RepoEntry>) -> RunOutcome {
        let mut batches: Vec<TargetBatch> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();

        for entry in entries {
            let raw_slug = entry.raw_slug().to_string();
            let target = match entry.into_target() {
                Ok(target) => target,
                Err(e) => {
                    warn!("Skipping {}: {}", raw_slug, e);
                    warnings.push(format!("{}: {}", raw_slug, e));
                    continue;
                }
            };

            match self.fetcher.fetch_releases(&target).await {
                Ok(releases) => {
                    let items: Vec<FeedItem> = releases
                        .iter()
                        .filter(|release| classifier::qualifies(release, &target))
                        .map(|release| normalizer::normalize(release, &target))
                        .collect();
                    info!(
                        "{}: {} of {} releases qualify",
                        target.slug(),
                        items.len(),
                        releases.len()
                    );
                    batches.push(TargetBatch {
                        cap: target.max_releases,
                        items,
                    });
                }
                Err(e) => {
                    warn!("Skipping {}: {}", target.slug(), e);
                    warnings.push(format!("{}: {}", target.slug(), e));
                }
            }
        }

        let document = assembler::assemble(&self.channel, batches, Utc::now());
        info!(
            "Run complete: {} items, {} warnings",
            document.items.len(),
            warnings.len()
        );

        RunOutcome { document, warnings }
    }
}
