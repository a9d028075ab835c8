pub mod assembler;
pub mod classifier;
pub mod config;
pub mod fetcher;
pub mod normalizer;
pub mod pipeline;
pub mod types;
pub mod utils;
pub mod writer;

pub use config::RepoEntry;
pub use fetcher::ReleaseFetcher;
pub use pipeline::{ReleasePipeline, RunOutcome};
pub use types::*;
