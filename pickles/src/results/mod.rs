//! Correlation of the domain model with recorded test outcomes.
//!
//! Every supported report schema is an adapter implementing [`TestResults`].
//! Adapters read their report once at construction and are immutable
//! afterwards, so queries may run concurrently without locking.

pub mod cucumber_json;
pub mod multiple;
pub mod spec_run;

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::core::model::{Feature, FeatureElement, Scenario, ScenarioOutline};
use crate::core::verdict::TestResult;
use crate::error::QueryError;
use crate::io::config::{ResultsFormat, ResultsSource};

pub use cucumber_json::CucumberJsonResults;
pub use multiple::MultipleTestResults;
pub use spec_run::SpecRunResults;

/// Query contract shared by all report adapters.
///
/// A title that is absent from the report yields
/// [`TestResult::Inconclusive`], never an error.
pub trait TestResults: Send + Sync {
    fn feature_result(&self, feature: &Feature) -> TestResult;

    fn scenario_result(&self, scenario: &Scenario) -> TestResult;

    fn scenario_outline_result(&self, outline: &ScenarioOutline) -> TestResult;

    /// Verdict for one example row of an outline.
    ///
    /// Callers must check [`TestResults::supports_example_results`] first;
    /// adapters that cannot resolve rows return
    /// [`QueryError::UnsupportedQuery`].
    fn example_result(
        &self,
        outline: &ScenarioOutline,
        example_values: &[String],
    ) -> Result<TestResult, QueryError>;

    fn supports_example_results(&self) -> bool;

    fn element_result(&self, element: &FeatureElement) -> TestResult {
        match element {
            FeatureElement::Scenario(scenario) => self.scenario_result(scenario),
            FeatureElement::ScenarioOutline(outline) => self.scenario_outline_result(outline),
        }
    }
}

/// Read one report and build the adapter for its format.
#[instrument(skip_all, fields(path = %source.path.display(), format = ?source.format))]
pub fn load_results(source: &ResultsSource) -> Result<Box<dyn TestResults>> {
    let results: Box<dyn TestResults> = match source.format {
        ResultsFormat::SpecRun => Box::new(
            SpecRunResults::load(&source.path)
                .with_context(|| format!("load spec run report {}", source.path.display()))?,
        ),
        ResultsFormat::CucumberJson => Box::new(
            CucumberJsonResults::load(&source.path)
                .with_context(|| format!("load cucumber report {}", source.path.display()))?,
        ),
    };
    info!("results loaded");
    Ok(results)
}

/// Load every configured report into one merged source.
pub fn load_all(sources: &[ResultsSource]) -> Result<MultipleTestResults> {
    let loaded = sources
        .iter()
        .map(load_results)
        .collect::<Result<Vec<_>>>()?;
    Ok(MultipleTestResults::new(loaded))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn loads_each_format() {
        let temp = tempfile::tempdir().expect("tempdir");
        let spec_run = temp.path().join("specrun.html");
        fs::write(
            &spec_run,
            "<html><!-- Pickles Begin\n&lt;features&gt;&lt;feature title=\"A\"&gt;&lt;/feature&gt;&lt;/features&gt;\nPickles End --></html>",
        )
        .expect("write");
        let cucumber = temp.path().join("cucumber.json");
        fs::write(&cucumber, "[]").expect("write");

        let merged = load_all(&[
            ResultsSource {
                path: spec_run,
                format: ResultsFormat::SpecRun,
            },
            ResultsSource {
                path: cucumber,
                format: ResultsFormat::CucumberJson,
            },
        ])
        .expect("load");

        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn missing_report_names_path() {
        let source = ResultsSource {
            path: PathBuf::from("/nonexistent/specrun.html"),
            format: ResultsFormat::SpecRun,
        };
        let err = load_results(&source).err().expect("missing file");
        assert!(format!("{err:#}").contains("/nonexistent/specrun.html"));
    }
}
