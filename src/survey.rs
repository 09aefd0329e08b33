//! Developer Survey Pipeline
//! Loads the questionnaire export and builds distribution tables per question.

use crate::config::SurveyConfig;
use crate::data::{DataLoader, DataProcessor, Dataset, LoaderError, TrustRating};
use crate::stats::{FrequencyEntry, FrequencyTable};
use serde::Serialize;
use std::path::PathBuf;

/// Whether the survey file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataSource {
    Loaded,
    Missing,
}

/// Trust rating distribution. Percentages use the valid response count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrustSummary {
    pub responses: usize,
    pub levels: Vec<FrequencyEntry<i64>>,
    pub average: f64,
    pub unparseable: usize,
}

/// Aggregated survey answers. Percentages use the respondent count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyAnalysis {
    pub age: Vec<FrequencyEntry<String>>,
    pub tool_preferences: Vec<FrequencyEntry<String>>,
    pub usage_frequency: Vec<FrequencyEntry<String>>,
    pub trust: Option<TrustSummary>,
    pub roles: Vec<FrequencyEntry<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyReport {
    pub source_path: PathBuf,
    pub source: DataSource,
    pub total_respondents: usize,
    /// `None` when there are no respondents; the fallback summary is shown instead.
    pub analysis: Option<SurveyAnalysis>,
}

/// Load the survey and analyse it. A missing file degrades to the fallback report.
pub fn run(config: &SurveyConfig) -> Result<SurveyReport, LoaderError> {
    let (source, dataset) = match DataLoader::load_csv(&config.path) {
        Ok(dataset) => (DataSource::Loaded, dataset),
        Err(LoaderError::NotFound(path)) => {
            log::warn!("Survey data not found at {}, using fallback summary", path.display());
            (DataSource::Missing, Dataset::empty())
        }
        Err(e) => return Err(e),
    };

    Ok(build_report(config, source, &dataset))
}

/// Build the report for an already loaded dataset.
pub fn build_report(config: &SurveyConfig, source: DataSource, dataset: &Dataset) -> SurveyReport {
    let analysis = if dataset.is_empty() {
        None
    } else {
        Some(analyze(dataset, config))
    };

    SurveyReport {
        source_path: config.path.clone(),
        source,
        total_respondents: dataset.len(),
        analysis,
    }
}

/// Aggregate every reported question.
pub fn analyze(dataset: &Dataset, config: &SurveyConfig) -> SurveyAnalysis {
    let respondents = dataset.len();

    SurveyAnalysis {
        age: single_valued(dataset, &config.age_column).distribution(respondents, None),
        tool_preferences: multi_valued(dataset, &config.tools_column, config.delimiter)
            .distribution(respondents, Some(config.top_tools_limit)),
        usage_frequency: single_valued(dataset, &config.usage_column)
            .distribution(respondents, None),
        trust: trust_summary(dataset, &config.trust_column),
        roles: single_valued(dataset, &config.role_column).distribution(respondents, None),
    }
}

/// Count a single-valued column, skipping empty answers.
pub fn single_valued(dataset: &Dataset, column: &str) -> FrequencyTable<String> {
    dataset
        .non_empty_values(column)
        .map(str::to_string)
        .collect()
}

/// Count every token of a delimited multi-valued column.
pub fn multi_valued(dataset: &Dataset, column: &str, delimiter: char) -> FrequencyTable<String> {
    dataset
        .non_empty_values(column)
        .flat_map(|field| DataProcessor::split_multi_valued(field, delimiter))
        .map(str::to_string)
        .collect()
}

/// Parse trust ratings. `None` when no rating is valid.
pub fn trust_summary(dataset: &Dataset, column: &str) -> Option<TrustSummary> {
    let mut ratings = Vec::new();
    let mut unparseable = 0;

    for record in dataset.records() {
        match DataProcessor::parse_trust_rating(record.get(column)) {
            TrustRating::Rating(level) => ratings.push(level),
            TrustRating::Unparseable(raw) => {
                log::debug!("Skipping unparseable trust rating {:?}", raw);
                unparseable += 1;
            }
            TrustRating::Missing => {}
        }
    }

    if ratings.is_empty() {
        return None;
    }

    let responses = ratings.len();
    let average = ratings.iter().sum::<i64>() as f64 / responses as f64;
    let table: FrequencyTable<i64> = ratings.into_iter().collect();

    Some(TrustSummary {
        responses,
        levels: table.sorted_by_value(responses),
        average,
        unparseable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AGE_COLUMN, TOOLS_COLUMN, TRUST_COLUMN};
    use crate::data::Record;

    fn dataset(rows: Vec<Vec<(&str, &str)>>) -> Dataset {
        let records: Vec<Record> = rows.into_iter().map(|r| r.into_iter().collect()).collect();
        Dataset::new(Vec::new(), records)
    }

    #[test]
    fn two_age_groups_split_evenly() {
        let data = dataset(vec![
            vec![(AGE_COLUMN, "25-34")],
            vec![(AGE_COLUMN, "35-44")],
        ]);
        let analysis = analyze(&data, &SurveyConfig::default());

        assert_eq!(analysis.age.len(), 2);
        for entry in &analysis.age {
            assert_eq!(entry.count, 1);
            assert_eq!(entry.percentage, 50.0);
        }
        assert_eq!(analysis.age[0].value, "25-34");
    }

    #[test]
    fn blank_answers_still_count_toward_denominator() {
        let data = dataset(vec![
            vec![(AGE_COLUMN, "18-24")],
            vec![(AGE_COLUMN, "")],
            vec![],
            vec![(AGE_COLUMN, "18-24")],
        ]);
        let analysis = analyze(&data, &SurveyConfig::default());
        assert_eq!(analysis.age.len(), 1);
        assert_eq!(analysis.age[0].count, 2);
        assert_eq!(analysis.age[0].percentage, 50.0);
        assert!(analysis.roles.is_empty());
    }

    #[test]
    fn tool_mentions_are_flattened_and_limited() {
        let data = dataset(vec![
            vec![(TOOLS_COLUMN, "ChatGPT; Claude")],
            vec![(TOOLS_COLUMN, "ChatGPT;Copilot;")],
            vec![(TOOLS_COLUMN, "Gemini")],
        ]);
        let table = multi_valued(&data, TOOLS_COLUMN, ';');
        assert_eq!(table.total(), 5);

        let config = SurveyConfig {
            top_tools_limit: 2,
            ..SurveyConfig::default()
        };
        let analysis = analyze(&data, &config);
        assert_eq!(analysis.tool_preferences.len(), 2);
        assert_eq!(analysis.tool_preferences[0].value, "ChatGPT");
        assert_eq!(analysis.tool_preferences[0].count, 2);
        assert_eq!(analysis.tool_preferences[0].percentage, 100.0 * 2.0 / 3.0);
        assert_eq!(analysis.tool_preferences[1].value, "Claude");
    }

    #[test]
    fn trust_uses_valid_responses_only() {
        let data = dataset(vec![
            vec![(TRUST_COLUMN, "4")],
            vec![(TRUST_COLUMN, "2")],
            vec![(TRUST_COLUMN, "n/a")],
            vec![(TRUST_COLUMN, "")],
            vec![(TRUST_COLUMN, "4")],
            vec![(TRUST_COLUMN, "3")],
        ]);
        let trust = trust_summary(&data, TRUST_COLUMN).unwrap();

        assert_eq!(trust.responses, 4);
        assert_eq!(trust.unparseable, 1);
        assert_eq!(trust.average, 13.0 / 4.0);
        let levels: Vec<(i64, usize)> = trust.levels.iter().map(|e| (e.value, e.count)).collect();
        assert_eq!(levels, vec![(2, 1), (3, 1), (4, 2)]);
        assert_eq!(trust.levels[2].percentage, 50.0);
    }

    #[test]
    fn no_valid_trust_ratings() {
        let data = dataset(vec![vec![(TRUST_COLUMN, "maybe")]]);
        assert!(trust_summary(&data, TRUST_COLUMN).is_none());
    }

    #[test]
    fn empty_dataset_has_no_analysis() {
        let report = build_report(&SurveyConfig::default(), DataSource::Loaded, &Dataset::empty());
        assert_eq!(report.total_respondents, 0);
        assert!(report.analysis.is_none());
    }
}
