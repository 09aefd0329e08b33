//! Research Analysis - Descriptive statistics for AI programming tool studies
//!
//! Two pipelines share the loader, frequency tables and report renderer:
//! - `survey`: developer questionnaire distributions
//! - `contest`: per-tool contest success rates and timings

pub mod config;
pub mod contest;
pub mod data;
pub mod report;
pub mod stats;
pub mod survey;

pub use config::{ContestConfig, SurveyConfig};
pub use contest::{ContestAnalysis, ContestReport};
pub use data::{DataLoader, Dataset, LoaderError, Record};
pub use survey::{DataSource, SurveyAnalysis, SurveyReport};
