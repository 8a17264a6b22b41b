//! Verdict report for `pickles results`.

use serde::Serialize;

use crate::core::model::{Feature, FeatureElement};
use crate::core::verdict::TestResult;
use crate::results::TestResults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Scenario,
    ScenarioOutline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementVerdict {
    pub kind: ElementKind,
    pub name: String,
    pub tags: Vec<String>,
    pub result: TestResult,
}

/// Feature-level verdict plus one row per feature element, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureVerdicts {
    pub feature: String,
    pub result: TestResult,
    pub elements: Vec<ElementVerdict>,
}

impl FeatureVerdicts {
    pub fn collect(feature: &Feature, results: &dyn TestResults) -> Self {
        let elements = feature
            .feature_elements
            .iter()
            .map(|element| ElementVerdict {
                kind: match element {
                    FeatureElement::Scenario(_) => ElementKind::Scenario,
                    FeatureElement::ScenarioOutline(_) => ElementKind::ScenarioOutline,
                },
                name: element.name().to_string(),
                tags: element.tags().to_vec(),
                result: results.element_result(element),
            })
            .collect();
        Self {
            feature: feature.name.clone(),
            result: results.feature_result(feature),
            elements,
        }
    }

    /// True if the feature or any of its elements failed.
    pub fn has_failures(&self) -> bool {
        self.result == TestResult::Failed
            || self
                .elements
                .iter()
                .any(|element| element.result == TestResult::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ScenarioDefinition;
    use crate::core::mapper::Mapper;
    use crate::results::SpecRunResults;
    use crate::test_support::{examples, feature, outline, row, scenario};

    #[test]
    fn collects_verdicts_in_source_order() {
        let raw = feature(
            "Eating",
            vec![
                ScenarioDefinition::Scenario(scenario("Lunch", Vec::new(), &["@daily"])),
                ScenarioDefinition::ScenarioOutline(outline(
                    "Eating",
                    Vec::new(),
                    vec![examples(row(&["n"]), vec![row(&["5"])])],
                )),
            ],
        );
        let feature = Mapper::default().map_feature(&raw).expect("map");
        let results = SpecRunResults::parse(
            "<!-- Pickles Begin <feature title=\"Eating\">\
             &lt;scenario title=\"Lunch\" result=\"passed\"/&gt;\
             &lt;scenario title=\"Eating, 5\" result=\"failed\"/&gt;\
             </feature> Pickles End -->",
        )
        .expect("parse");

        let verdicts = FeatureVerdicts::collect(&feature, &results);

        assert_eq!(verdicts.result, TestResult::Failed);
        assert_eq!(
            verdicts.elements,
            vec![
                ElementVerdict {
                    kind: ElementKind::Scenario,
                    name: "Lunch".to_string(),
                    tags: vec!["@daily".to_string()],
                    result: TestResult::Passed,
                },
                ElementVerdict {
                    kind: ElementKind::ScenarioOutline,
                    name: "Eating".to_string(),
                    tags: Vec::new(),
                    result: TestResult::Failed,
                },
            ]
        );
        assert!(verdicts.has_failures());

        let json = serde_json::to_value(&verdicts).expect("json");
        assert_eq!(json["elements"][1]["kind"], "scenario_outline");
        assert_eq!(json["result"], "failed");
    }
}
