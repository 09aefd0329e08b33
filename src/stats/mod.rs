//! Stats module - Frequency tables and contest metrics

mod calculator;
mod frequency;

pub use calculator::{PairwiseComparison, StatsCalculator, ToolPerformance};
pub use frequency::{percentage, FrequencyEntry, FrequencyTable};
