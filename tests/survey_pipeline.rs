use research_analysis::config::{AGE_COLUMN, ROLE_COLUMN, TOOLS_COLUMN, TRUST_COLUMN, USAGE_COLUMN};
use research_analysis::report::render_survey;
use research_analysis::{survey, DataSource, SurveyConfig};
use std::io::Write;

fn write_survey(rows: &[[&str; 5]]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    let header = [AGE_COLUMN, TOOLS_COLUMN, USAGE_COLUMN, TRUST_COLUMN, ROLE_COLUMN];
    let quote = |cells: &[&str]| {
        cells
            .iter()
            .map(|c| format!("\"{}\"", c))
            .collect::<Vec<_>>()
            .join(",")
    };
    writeln!(file, "{}", quote(&header)).unwrap();
    for row in rows {
        writeln!(file, "{}", quote(row)).unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn survey_file_end_to_end() {
    let file = write_survey(&[
        ["25-34", "ChatGPT; Claude", "Daily", "4", "Student"],
        ["35-44", "ChatGPT", "Weekly", "2", "Professional developer"],
        ["25-34", "", "Daily", "x", "Student"],
        ["", "Copilot;Claude;", "", "", "Student"],
    ]);
    let report = survey::run(&SurveyConfig::with_path(file.path())).unwrap();

    assert_eq!(report.source, DataSource::Loaded);
    assert_eq!(report.total_respondents, 4);
    let analysis = report.analysis.as_ref().unwrap();

    let ages: Vec<(&str, usize, f64)> = analysis
        .age
        .iter()
        .map(|e| (e.value.as_str(), e.count, e.percentage))
        .collect();
    assert_eq!(ages, vec![("25-34", 2, 50.0), ("35-44", 1, 25.0)]);

    let tools: Vec<(&str, usize)> = analysis
        .tool_preferences
        .iter()
        .map(|e| (e.value.as_str(), e.count))
        .collect();
    assert_eq!(tools, vec![("ChatGPT", 2), ("Claude", 2), ("Copilot", 1)]);

    let trust = analysis.trust.as_ref().unwrap();
    assert_eq!(trust.responses, 2);
    assert_eq!(trust.unparseable, 1);
    assert_eq!(trust.average, 3.0);

    assert_eq!(analysis.roles[0].value, "Student");
    assert_eq!(analysis.roles[0].count, 3);

    let text = render_survey(&report);
    assert!(text.contains("  25-34: 2 (50.0%)\n"));
    assert!(text.contains("  Average trust level: 3.00/5.0\n"));
}

#[test]
fn missing_survey_file_uses_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let config = SurveyConfig::with_path(dir.path().join("absent.csv"));
    let report = survey::run(&config).unwrap();

    assert_eq!(report.source, DataSource::Missing);
    assert_eq!(report.total_respondents, 0);
    assert!(report.analysis.is_none());
    assert!(render_survey(&report).contains("Total Survey Size: 334 developers"));
}

#[test]
fn header_mismatch_yields_empty_tables() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "age,tools\n25-34,ChatGPT").unwrap();
    file.flush().unwrap();

    let report = survey::run(&SurveyConfig::with_path(file.path())).unwrap();
    let analysis = report.analysis.unwrap();
    assert!(analysis.age.is_empty());
    assert!(analysis.tool_preferences.is_empty());
    assert!(analysis.trust.is_none());
}

#[test]
fn empty_survey_file_uses_fallback() {
    let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    let report = survey::run(&SurveyConfig::with_path(file.path())).unwrap();

    assert_eq!(report.source, DataSource::Loaded);
    assert_eq!(report.total_respondents, 0);
    assert!(report.analysis.is_none());
    assert!(render_survey(&report).contains("EXPECTED SURVEY ANALYSIS RESULTS"));
}

#[test]
fn overlong_survey_row_is_kept() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "\"{}\",Role\n25-34,Student,EXTRA\n35-44,Dev", AGE_COLUMN).unwrap();
    file.flush().unwrap();

    let report = survey::run(&SurveyConfig::with_path(file.path())).unwrap();
    assert_eq!(report.total_respondents, 2);
    let ages: Vec<(&str, usize)> = report
        .analysis
        .as_ref()
        .unwrap()
        .age
        .iter()
        .map(|e| (e.value.as_str(), e.count))
        .collect();
    assert_eq!(ages, vec![("25-34", 1), ("35-44", 1)]);
}
