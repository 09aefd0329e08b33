//! Contest performance analysis entry point.
//!
//! A missing data file is reported and the run ends without analysis.

use research_analysis::report::{self, render_contest};
use research_analysis::{contest, ContestConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ContestConfig::default();
    let outcome = contest::run(&config)?;

    print!("{}", render_contest(&outcome));

    if let Some(path) = &config.json_output {
        report::write_json(&outcome, path)?;
    }
    Ok(())
}
