//! Several reports queried as one.

use crate::core::model::{Feature, Scenario, ScenarioOutline};
use crate::core::verdict::TestResult;
use crate::error::QueryError;
use crate::results::TestResults;

/// Merges the verdicts of every inner source through the lattice, so a
/// failure recorded in any report fails the entity.
#[derive(Default)]
pub struct MultipleTestResults {
    sources: Vec<Box<dyn TestResults>>,
}

impl MultipleTestResults {
    pub fn new(sources: Vec<Box<dyn TestResults>>) -> Self {
        Self { sources }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    fn merge_with<F>(&self, query: F) -> TestResult
    where
        F: Fn(&dyn TestResults) -> TestResult,
    {
        self.sources.iter().map(|source| query(source.as_ref())).collect()
    }
}

impl TestResults for MultipleTestResults {
    fn feature_result(&self, feature: &Feature) -> TestResult {
        self.merge_with(|source| source.feature_result(feature))
    }

    fn scenario_result(&self, scenario: &Scenario) -> TestResult {
        self.merge_with(|source| source.scenario_result(scenario))
    }

    fn scenario_outline_result(&self, outline: &ScenarioOutline) -> TestResult {
        self.merge_with(|source| source.scenario_outline_result(outline))
    }

    fn example_result(
        &self,
        outline: &ScenarioOutline,
        example_values: &[String],
    ) -> Result<TestResult, QueryError> {
        if !self.supports_example_results() {
            return Err(QueryError::UnsupportedQuery("example results"));
        }
        self.sources
            .iter()
            .map(|source| source.example_result(outline, example_values))
            .collect::<Result<Vec<_>, _>>()
            .map(TestResult::merge_all)
    }

    /// Only when every inner source can answer.
    fn supports_example_results(&self) -> bool {
        !self.sources.is_empty()
            && self
                .sources
                .iter()
                .all(|source| source.supports_example_results())
    }
}
