//! Cucumber JSON report adapter.
//!
//! Cucumber records each outline row as its own element carrying the
//! outline's name, and outcomes per step rather than per scenario.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::core::matching::{ReportFeature, ReportScenario, find_feature, merge};
use crate::core::model::{Feature, Scenario, ScenarioOutline};
use crate::core::verdict::TestResult;
use crate::error::{QueryError, ReportError};
use crate::results::TestResults;

#[derive(Debug, Deserialize)]
struct CucumberFeature {
    name: String,
    #[serde(default)]
    elements: Vec<CucumberElement>,
}

#[derive(Debug, Deserialize)]
struct CucumberElement {
    name: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    steps: Vec<CucumberStep>,
}

#[derive(Debug, Deserialize)]
struct CucumberStep {
    #[serde(default)]
    result: Option<CucumberStepResult>,
}

#[derive(Debug, Deserialize)]
struct CucumberStepResult {
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CucumberJsonResults {
    features: Vec<ReportFeature>,
}

impl CucumberJsonResults {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let content = fs::read_to_string(path).map_err(|source| ReportError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ReportError> {
        let raw: Vec<CucumberFeature> = serde_json::from_str(content)
            .map_err(|err| ReportError::Malformed(format!("invalid cucumber json: {err}")))?;
        let features: Vec<_> = raw.into_iter().map(report_feature).collect();
        debug!(features = features.len(), "cucumber report indexed");
        Ok(Self { features })
    }

    pub fn features(&self) -> &[ReportFeature] {
        &self.features
    }

    fn find(&self, feature_name: &str) -> Option<&ReportFeature> {
        find_feature(&self.features, feature_name)
    }
}

impl TestResults for CucumberJsonResults {
    fn feature_result(&self, feature: &Feature) -> TestResult {
        self.find(&feature.name)
            .map_or(TestResult::Inconclusive, ReportFeature::verdict)
    }

    fn scenario_result(&self, scenario: &Scenario) -> TestResult {
        self.find(&scenario.feature_name)
            .and_then(|feature| feature.scenario(&scenario.name))
            .map_or(TestResult::Inconclusive, ReportScenario::verdict)
    }

    fn scenario_outline_result(&self, outline: &ScenarioOutline) -> TestResult {
        match self.find(&outline.feature_name) {
            Some(feature) => merge(feature.scenarios_titled(&outline.name)),
            None => TestResult::Inconclusive,
        }
    }

    fn example_result(
        &self,
        _outline: &ScenarioOutline,
        _example_values: &[String],
    ) -> Result<TestResult, QueryError> {
        Err(QueryError::UnsupportedQuery("example results"))
    }

    fn supports_example_results(&self) -> bool {
        false
    }
}

fn report_feature(feature: CucumberFeature) -> ReportFeature {
    ReportFeature {
        title: feature.name,
        scenarios: feature
            .elements
            .into_iter()
            .filter(|element| element.kind.as_deref() != Some("background"))
            .map(|element| ReportScenario {
                result: element_status(&element.steps).map(str::to_string),
                title: element.name,
            })
            .collect(),
    }
}

/// Any failed step fails the element; it passes only when every step passed.
fn element_status(steps: &[CucumberStep]) -> Option<&'static str> {
    let verdicts: Vec<_> = steps
        .iter()
        .map(|step| {
            TestResult::from_raw(
                step.result
                    .as_ref()
                    .and_then(|result| result.status.as_deref()),
            )
        })
        .collect();
    if verdicts.contains(&TestResult::Failed) {
        Some("failed")
    } else if !verdicts.is_empty() && verdicts.iter().all(|&v| v == TestResult::Passed) {
        Some("passed")
    } else {
        None
    }
}
