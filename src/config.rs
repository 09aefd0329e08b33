//! Analysis Configuration
//! File locations and column headers for both pipelines.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default survey export, relative to the working directory.
pub const SURVEY_PATH: &str = "../AI Effects In Software Development(1-335).csv";
pub const AGE_COLUMN: &str = "How old are you?";
pub const TOOLS_COLUMN: &str = "Which tools of AI tools you prefer the most?";
pub const USAGE_COLUMN: &str = "How often will you use ai tools?";
pub const TRUST_COLUMN: &str = "How much do you trust AI generated code without manually reviewing it? (Rate from 1-5, where 1 = Not at all, 5 = Completely)";
pub const ROLE_COLUMN: &str = "What is your current role or background?";
/// Number of tool preference entries shown in the report.
pub const TOP_TOOLS_LIMIT: usize = 10;
/// Separator used inside multi-valued survey answers.
pub const MULTI_VALUE_DELIMITER: char = ';';

/// Default contest log, relative to the working directory.
pub const CONTEST_PATH: &str = "data/ai_tools_2.csv";
pub const TOOL_COLUMN: &str = "Ai_tools";
pub const FIRST_PROBLEM: char = 'A';
pub const LAST_PROBLEM: char = 'P';
/// Cell marker for a rejected submission.
pub const REJECTED_MARKER: &str = "rejected";
/// Significance threshold for the pairwise Fisher exact test.
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.05;

/// Survey pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SurveyConfig {
    pub path: PathBuf,
    pub age_column: String,
    pub tools_column: String,
    pub usage_column: String,
    pub trust_column: String,
    pub role_column: String,
    pub top_tools_limit: usize,
    pub delimiter: char,
    /// Also write the structured report as JSON here.
    pub json_output: Option<PathBuf>,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(SURVEY_PATH),
            age_column: AGE_COLUMN.to_string(),
            tools_column: TOOLS_COLUMN.to_string(),
            usage_column: USAGE_COLUMN.to_string(),
            trust_column: TRUST_COLUMN.to_string(),
            role_column: ROLE_COLUMN.to_string(),
            top_tools_limit: TOP_TOOLS_LIMIT,
            delimiter: MULTI_VALUE_DELIMITER,
            json_output: None,
        }
    }
}

impl SurveyConfig {
    /// Default settings reading the survey from `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

/// Contest pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContestConfig {
    pub path: PathBuf,
    pub tool_column: String,
    pub first_problem: char,
    pub last_problem: char,
    pub rejected_marker: String,
    pub significance_threshold: f64,
    pub pairwise_tests: bool,
    /// Also write the structured report as JSON here.
    pub json_output: Option<PathBuf>,
}

impl Default for ContestConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(CONTEST_PATH),
            tool_column: TOOL_COLUMN.to_string(),
            first_problem: FIRST_PROBLEM,
            last_problem: LAST_PROBLEM,
            rejected_marker: REJECTED_MARKER.to_string(),
            significance_threshold: SIGNIFICANCE_THRESHOLD,
            pairwise_tests: false,
            json_output: None,
        }
    }
}

impl ContestConfig {
    /// Default settings reading the contest log from `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Check whether a column header names a contest problem.
    pub fn is_problem_column(&self, name: &str) -> bool {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                c.is_alphabetic() && (self.first_problem..=self.last_problem).contains(&c)
            }
            _ => false,
        }
    }
}
