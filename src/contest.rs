//! Contest Performance Pipeline
//! Ranks AI tools by the share of contest problems they solved.

use crate::config::ContestConfig;
use crate::data::{DataLoader, Dataset, LoaderError};
use crate::stats::{PairwiseComparison, StatsCalculator, ToolPerformance};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContestAnalysis {
    pub row_count: usize,
    pub column_count: usize,
    pub problems: Vec<String>,
    /// Ranked by success rate, highest first.
    pub tools: Vec<ToolPerformance>,
    pub pairwise: Vec<PairwiseComparison>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ContestReport {
    /// The log was not found; nothing was analysed.
    MissingData { path: PathBuf },
    Analyzed(ContestAnalysis),
}

/// Load the contest log and rank the tools.
pub fn run(config: &ContestConfig) -> Result<ContestReport, LoaderError> {
    match DataLoader::load_csv(&config.path) {
        Ok(dataset) => Ok(ContestReport::Analyzed(analyze(&dataset, config))),
        Err(LoaderError::NotFound(path)) => {
            log::warn!("Contest data not found at {}", path.display());
            Ok(ContestReport::MissingData { path })
        }
        Err(e) => Err(e),
    }
}

pub fn analyze(dataset: &Dataset, config: &ContestConfig) -> ContestAnalysis {
    let problems = StatsCalculator::problem_columns(dataset, |c| config.is_problem_column(c));
    log::info!(
        "Scoring {} problems for column {:?}",
        problems.len(),
        config.tool_column
    );

    let tools = StatsCalculator::compute_all_tools_parallel(
        dataset,
        &config.tool_column,
        &problems,
        &config.rejected_marker,
    );
    let tools = StatsCalculator::rank_by_success_rate(tools);

    let pairwise = if config.pairwise_tests {
        StatsCalculator::pairwise_comparisons(&tools, config.significance_threshold)
    } else {
        Vec::new()
    };

    ContestAnalysis {
        row_count: dataset.len(),
        column_count: dataset.columns().len(),
        problems,
        tools,
        pairwise,
    }
}
