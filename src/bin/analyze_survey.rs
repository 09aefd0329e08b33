//! Developer survey analysis entry point.

use research_analysis::report::{self, render_survey};
use research_analysis::{survey, SurveyConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = SurveyConfig::default();
    let outcome = survey::run(&config)?;

    print!("{}", render_survey(&outcome));

    if let Some(path) = &config.json_output {
        report::write_json(&outcome, path)?;
    }
    Ok(())
}
