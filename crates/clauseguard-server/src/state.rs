use crate::config::ReviewConfig;
use clauseguard_classifiers::ReviewPipeline;
use clauseguard_core::Result;
use clauseguard_extract::TextExtractor;
use clauseguard_rules::RuleTable;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tracing::info;

/// Shared application state.
///
/// Everything here is read-only after startup; requests share no
/// mutable data.
#[derive(Clone)]
pub struct AppState {
    /// Effective configuration
    pub config: Arc<ReviewConfig>,

    /// Active rule table
    pub rules: Arc<RuleTable>,

    /// Split, classify and report
    pub pipeline: Arc<ReviewPipeline>,

    /// Upload decoding
    pub extractor: TextExtractor,

    /// Prometheus renderer, when a recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Load the rule table named by `config` and build the pipeline
    pub fn new(config: ReviewConfig, metrics: Option<PrometheusHandle>) -> Result<Self> {
        let rules = Arc::new(RuleTable::load_or_builtin(config.rules_path.as_deref())?);
        let pipeline = Arc::new(ReviewPipeline::from_rules(rules.clone())?);
        let extractor = TextExtractor::new(config.empty_page);

        info!(
            table = %rules.name,
            rules = rules.len(),
            empty_page = ?config.empty_page,
            strict_formats = config.strict_formats,
            "Review state initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            rules,
            pipeline,
            extractor,
            metrics,
        })
    }
}
