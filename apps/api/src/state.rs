use std::sync::Arc;

use crate::config::Config;
use crate::matching::extractor::SkillExtractor;
use crate::matching::scorer::{MatchScorer, MatchWeights, TfIdfMatchScorer};
use crate::taxonomy::SkillTaxonomy;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    #[allow(dead_code)]
    pub config: Config,
    /// Skill taxonomy served by the categories endpoint and used by the extractor.
    pub taxonomy: Arc<SkillTaxonomy>,
    pub extractor: Arc<SkillExtractor>,
    /// Pluggable match scorer. Default: TfIdfMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
}

impl AppState {
    pub fn new(config: Config, taxonomy: SkillTaxonomy) -> Result<Self, regex::Error> {
        let taxonomy = Arc::new(taxonomy);
        let extractor = Arc::new(SkillExtractor::new(&taxonomy)?);
        let scorer: Arc<dyn MatchScorer> =
            Arc::new(TfIdfMatchScorer::new(MatchWeights::default())?);

        Ok(Self {
            config,
            taxonomy,
            extractor,
            scorer,
        })
    }
}
