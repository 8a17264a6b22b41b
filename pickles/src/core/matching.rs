//! Title-based correlation between the domain model and report entries.
//!
//! Report entries are matched by exact title. Frameworks that expand each
//! example row of an outline into its own run title those runs
//! `"<outline name>, <values...>"`; [`ReportFeature::outline_runs`] follows
//! that convention.

use crate::core::verdict::TestResult;

/// One executed scenario as recorded in a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportScenario {
    pub title: String,
    /// Raw outcome string, normalized only when queried.
    pub result: Option<String>,
}

impl ReportScenario {
    pub fn verdict(&self) -> TestResult {
        TestResult::from_raw(self.result.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFeature {
    pub title: String,
    pub scenarios: Vec<ReportScenario>,
}

impl ReportFeature {
    /// Merge of every scenario recorded under this feature.
    pub fn verdict(&self) -> TestResult {
        merge(self.scenarios.iter())
    }

    /// First scenario whose title equals `name`.
    pub fn scenario(&self, name: &str) -> Option<&ReportScenario> {
        self.scenarios.iter().find(|scenario| scenario.title == name)
    }

    /// Every scenario whose title equals `name`.
    pub fn scenarios_titled<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a ReportScenario> + 'a {
        self.scenarios
            .iter()
            .filter(move |scenario| scenario.title == name)
    }

    /// Every per-example run of the outline named `name`.
    pub fn outline_runs<'a>(
        &'a self,
        name: &str,
    ) -> impl Iterator<Item = &'a ReportScenario> + use<'a> {
        let prefix = outline_run_prefix(name);
        self.scenarios
            .iter()
            .filter(move |scenario| scenario.title.starts_with(&prefix))
    }
}

/// Title prefix shared by the expanded runs of an outline.
pub fn outline_run_prefix(name: &str) -> String {
    format!("{name}, ")
}

/// First report feature whose title equals `name`.
pub fn find_feature<'a>(features: &'a [ReportFeature], name: &str) -> Option<&'a ReportFeature> {
    features.iter().find(|feature| feature.title == name)
}

/// Reduce matched entries through the merge lattice.
///
/// Callers that must distinguish "no match" check emptiness first; an
/// empty input merges to `Inconclusive` either way.
pub fn merge<'a, I>(scenarios: I) -> TestResult
where
    I: IntoIterator<Item = &'a ReportScenario>,
{
    scenarios.into_iter().map(ReportScenario::verdict).collect()
}
