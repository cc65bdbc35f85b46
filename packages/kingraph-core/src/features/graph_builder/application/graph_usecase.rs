//! Graph Builder UseCase
//!
//! sanitize → build, with the sanitizer's findings returned alongside the graph.

use std::path::Path;

use tracing::info;

use crate::config::LoaderConfig;
use crate::errors::Result;
use crate::features::graph_builder::domain::{FamilyGraph, GraphStats};
use crate::features::graph_builder::infrastructure::GraphBuilder;
use crate::features::record_loader::{CsvRecordLoader, RecordSanitizer, SanitizeReport};
use crate::shared::models::PersonRecord;

/// Graph Builder UseCase Trait
pub trait GraphBuilderUseCase: Send + Sync {
    /// Build from raw (unsanitized) records
    fn build_graph(&self, records: Vec<PersonRecord>) -> Result<GraphBuildResult>;

    /// Load a family CSV and build from it
    fn build_from_csv(&self, path: &Path) -> Result<GraphBuildResult>;
}

#[derive(Debug, Clone, Default)]
pub struct GraphBuildResult {
    pub graph: FamilyGraph,
    pub report: SanitizeReport,
    pub stats: GraphStats,
}

/// Graph Builder UseCase Implementation
#[derive(Debug, Default)]
pub struct GraphBuilderUseCaseImpl {
    loader: CsvRecordLoader,
    sanitizer: RecordSanitizer,
    builder: GraphBuilder,
}

impl GraphBuilderUseCaseImpl {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            loader: CsvRecordLoader::new(),
            sanitizer: RecordSanitizer::new(config),
            builder: GraphBuilder::new(),
        }
    }

    pub fn with_loader(mut self, loader: CsvRecordLoader) -> Self {
        self.loader = loader;
        self
    }
}

impl GraphBuilderUseCase for GraphBuilderUseCaseImpl {
    fn build_graph(&self, records: Vec<PersonRecord>) -> Result<GraphBuildResult> {
        let outcome = self.sanitizer.sanitize(records)?;
        let graph = self.builder.build(&outcome.records)?;
        let stats = graph.stats();

        info!(%stats, issues = outcome.report.issues.len(), "family graph ready");

        Ok(GraphBuildResult {
            graph,
            report: outcome.report,
            stats,
        })
    }

    fn build_from_csv(&self, path: &Path) -> Result<GraphBuildResult> {
        let records = self.loader.load_path(path)?;
        self.build_graph(records)
    }
}
