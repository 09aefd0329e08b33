//! Statistics Calculator Module
//! Per-tool contest metrics, success-rate ranking and Fisher exact tests.

use crate::data::{DataProcessor, Dataset, Record, TimeSample};
use rayon::prelude::*;
use serde::Serialize;
use statrs::distribution::{Discrete, Hypergeometric};
use statrs::statistics::Statistics;
use std::collections::HashSet;

/// Metrics for a single AI tool across all contest problems.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolPerformance {
    pub tool: String,
    pub successful_problems: usize,
    pub total_problems: usize,
    pub success_rate: f64,
    pub response_times: Vec<f64>,
    pub avg_response_time: f64,
    /// Successful cells whose time could not be parsed.
    pub unparseable_times: usize,
}

impl ToolPerformance {
    pub fn failed_problems(&self) -> usize {
        self.total_problems - self.successful_problems
    }
}

/// Fisher exact test between two tools' success counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairwiseComparison {
    pub tool_a: String,
    pub tool_b: String,
    pub p_value: f64,
    pub is_significant: bool,
}

/// Handles the contest calculations with multi-threading support.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Problem columns of the schema, in file order.
    pub fn problem_columns(dataset: &Dataset, is_problem: impl Fn(&str) -> bool) -> Vec<String> {
        dataset
            .columns()
            .iter()
            .filter(|c| is_problem(c))
            .cloned()
            .collect()
    }

    /// Compute one tool's metrics from its row.
    pub fn compute_tool_performance(
        tool: &str,
        record: &Record,
        problems: &[String],
        rejected_marker: &str,
    ) -> ToolPerformance {
        let mut successful_problems = 0;
        let mut response_times = Vec::new();
        let mut unparseable_times = 0;

        for problem in problems {
            let cell = record.get(problem);
            if !DataProcessor::is_successful(cell, rejected_marker) {
                continue;
            }
            successful_problems += 1;

            match DataProcessor::parse_submission_time(cell, rejected_marker) {
                TimeSample::Seconds(s) => response_times.push(s),
                TimeSample::Unparseable(raw) => {
                    log::debug!("{}: unparseable time {:?} on problem {}", tool, raw, problem);
                    unparseable_times += 1;
                }
                TimeSample::Rejected | TimeSample::Missing => {}
            }
        }

        let total_problems = problems.len();
        let success_rate = if total_problems == 0 {
            0.0
        } else {
            100.0 * successful_problems as f64 / total_problems as f64
        };
        let avg_response_time = if response_times.is_empty() {
            0.0
        } else {
            response_times.iter().mean()
        };

        ToolPerformance {
            tool: tool.to_string(),
            successful_problems,
            total_problems,
            success_rate,
            response_times,
            avg_response_time,
            unparseable_times,
        }
    }

    /// Compute metrics for every tool in parallel, in row order.
    ///
    /// A tool listed twice is analysed once, from its first row.
    pub fn compute_all_tools_parallel(
        dataset: &Dataset,
        tool_column: &str,
        problems: &[String],
        rejected_marker: &str,
    ) -> Vec<ToolPerformance> {
        let mut seen = HashSet::new();
        let rows: Vec<(&str, &Record)> = dataset
            .records()
            .iter()
            .filter_map(|r| r.non_empty(tool_column).map(|tool| (tool, r)))
            .filter(|(tool, _)| seen.insert(*tool))
            .collect();

        rows.par_iter()
            .map(|(tool, record)| {
                Self::compute_tool_performance(tool, record, problems, rejected_marker)
            })
            .collect()
    }

    /// Sort by success rate, highest first. Ties keep their input order.
    pub fn rank_by_success_rate(mut tools: Vec<ToolPerformance>) -> Vec<ToolPerformance> {
        tools.sort_by(|a, b| {
            b.success_rate
                .partial_cmp(&a.success_rate)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        tools
    }

    /// Two-sided Fisher exact test on the table `[[a, b], [c, d]]`.
    pub fn fisher_exact(a: u64, b: u64, c: u64, d: u64) -> f64 {
        let population = a + b + c + d;
        let successes = a + c;
        let draws = a + b;

        let Ok(dist) = Hypergeometric::new(population, successes, draws) else {
            return 1.0;
        };

        let low = draws.saturating_sub(population - successes);
        let high = successes.min(draws);
        if low >= high {
            return 1.0;
        }

        // Relative tolerance as used by common implementations
        let observed = dist.pmf(a) * (1.0 + 1e-7);
        let p: f64 = (low..=high)
            .map(|x| dist.pmf(x))
            .filter(|&p| p <= observed)
            .sum();
        p.min(1.0)
    }

    /// Fisher exact test for every unordered pair, in the given order.
    pub fn pairwise_comparisons(tools: &[ToolPerformance], threshold: f64) -> Vec<PairwiseComparison> {
        let mut comparisons = Vec::new();
        for (i, first) in tools.iter().enumerate() {
            for second in &tools[i + 1..] {
                let p_value = Self::fisher_exact(
                    first.successful_problems as u64,
                    first.failed_problems() as u64,
                    second.successful_problems as u64,
                    second.failed_problems() as u64,
                );
                comparisons.push(PairwiseComparison {
                    tool_a: first.tool.clone(),
                    tool_b: second.tool.clone(),
                    p_value,
                    is_significant: p_value <= threshold,
                });
            }
        }
        comparisons
    }
}
