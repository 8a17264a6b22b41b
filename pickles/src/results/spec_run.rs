//! SpecRun report adapter.
//!
//! SpecRun embeds the machine-readable results inside its HTML report,
//! between `<!-- Pickles Begin` and `Pickles End -->`, with the XML's angle
//! brackets entity-escaped. The payload holds `feature` elements with a
//! `title`, each containing `scenario` elements with `title` and `result`.
//! Outline rows are expanded into scenarios titled `"<outline>, <values>"`,
//! so individual example rows cannot be told apart.

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, instrument};

use crate::core::matching::{ReportFeature, ReportScenario, find_feature, merge};
use crate::core::model::{Feature, Scenario, ScenarioOutline};
use crate::core::verdict::TestResult;
use crate::error::{QueryError, ReportError};
use crate::results::TestResults;

pub const BEGIN_MARKER: &str = "<!-- Pickles Begin";
pub const END_MARKER: &str = "Pickles End -->";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRunResults {
    features: Vec<ReportFeature>,
}

impl SpecRunResults {
    /// Read the report once and index it.
    ///
    /// The host document is decoded leniently, so bytes that are not UTF-8
    /// (a Latin-1 page title, say) do not fail the load.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let bytes = fs::read(path).map_err(|source| ReportError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&String::from_utf8_lossy(&bytes))
    }

    /// Index a host document that embeds the report payload.
    pub fn parse(content: &str) -> Result<Self, ReportError> {
        let payload = extract_payload(content)?;
        let features = parse_features(&payload)?;
        debug!(features = features.len(), "spec run report indexed");
        Ok(Self { features })
    }

    pub fn features(&self) -> &[ReportFeature] {
        &self.features
    }

    fn find(&self, feature_name: &str) -> Option<&ReportFeature> {
        find_feature(&self.features, feature_name)
    }
}

impl TestResults for SpecRunResults {
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
            Some(feature) => merge(feature.outline_runs(&outline.name)),
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

/// Take the text strictly between the sentinel markers and restore the
/// escaped angle brackets.
pub fn extract_payload(content: &str) -> Result<String, ReportError> {
    let begin = content
        .find(BEGIN_MARKER)
        .ok_or_else(|| ReportError::Malformed(format!("missing marker '{BEGIN_MARKER}'")))?;
    let rest = &content[begin + BEGIN_MARKER.len()..];
    let end = rest
        .find(END_MARKER)
        .ok_or_else(|| ReportError::Malformed(format!("missing marker '{END_MARKER}'")))?;
    Ok(rest[..end].replace("&lt;", "<").replace("&gt;", ">"))
}

/// Parse the payload, collecting every `feature` element at any depth.
///
/// The payload must be a well-formed document with exactly one root element.
/// Scenarios attach to the innermost enclosing feature.
pub fn parse_features(xml: &str) -> Result<Vec<ReportFeature>, ReportError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut features: Vec<ReportFeature> = Vec::new();
    // (element depth, index into `features`) for each open feature element.
    let mut open_features: Vec<(usize, usize)> = Vec::new();
    let mut depth = 0usize;
    let mut roots = 0usize;

    loop {
        let event = reader.read_event().map_err(|err| {
            ReportError::Malformed(format!(
                "invalid xml at byte {}: {err}",
                reader.error_position()
            ))
        })?;
        match event {
            Event::Start(element) => {
                roots += usize::from(depth == 0);
                check_attributes(&element)?;
                if element.name().as_ref() == b"feature" {
                    features.push(report_feature(&element)?);
                    open_features.push((depth, features.len() - 1));
                } else {
                    attach_scenario(&element, &open_features, &mut features)?;
                }
                depth += 1;
            }
            Event::Empty(element) => {
                roots += usize::from(depth == 0);
                check_attributes(&element)?;
                if element.name().as_ref() == b"feature" {
                    features.push(report_feature(&element)?);
                } else {
                    attach_scenario(&element, &open_features, &mut features)?;
                }
            }
            Event::End(_) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ReportError::Malformed("unmatched end tag".to_string()))?;
                if open_features.last().is_some_and(|&(open, _)| open == depth) {
                    open_features.pop();
                }
            }
            Event::Text(_) | Event::CData(_) if depth == 0 => {
                return Err(ReportError::Malformed(
                    "text outside the root element".to_string(),
                ));
            }
            Event::Text(text) => {
                text.unescape()
                    .map_err(|err| ReportError::Malformed(format!("invalid text: {err}")))?;
            }
            Event::Eof => break,
            _ => {}
        }
        if roots > 1 {
            return Err(ReportError::Malformed(
                "more than one root element".to_string(),
            ));
        }
    }

    if depth != 0 {
        return Err(ReportError::Malformed("unclosed element".to_string()));
    }
    if roots == 0 {
        return Err(ReportError::Malformed("no root element".to_string()));
    }
    Ok(features)
}

/// Reject duplicate, unquoted or badly escaped attributes on any element.
fn check_attributes(element: &BytesStart<'_>) -> Result<(), ReportError> {
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|err| {
            ReportError::Malformed(format!(
                "<{}> has an invalid attribute: {err}",
                String::from_utf8_lossy(element.name().as_ref())
            ))
        })?;
        attribute.unescape_value().map_err(|err| {
            ReportError::Malformed(format!(
                "<{}> has an invalid attribute value: {err}",
                String::from_utf8_lossy(element.name().as_ref())
            ))
        })?;
    }
    Ok(())
}

fn report_feature(element: &BytesStart<'_>) -> Result<ReportFeature, ReportError> {
    Ok(ReportFeature {
        title: required_attribute(element, "title")?,
        scenarios: Vec::new(),
    })
}

fn attach_scenario(
    element: &BytesStart<'_>,
    open_features: &[(usize, usize)],
    features: &mut [ReportFeature],
) -> Result<(), ReportError> {
    if element.name().as_ref() != b"scenario" {
        return Ok(());
    }
    let Some(&(_, index)) = open_features.last() else {
        return Ok(());
    };
    features[index].scenarios.push(ReportScenario {
        title: required_attribute(element, "title")?,
        result: attribute(element, "result")?,
    });
    Ok(())
}

fn required_attribute(element: &BytesStart<'_>, name: &str) -> Result<String, ReportError> {
    attribute(element, name)?.ok_or_else(|| {
        ReportError::Malformed(format!(
            "<{}> missing attribute '{name}'",
            String::from_utf8_lossy(element.name().as_ref())
        ))
    })
}

fn attribute(element: &BytesStart<'_>, name: &str) -> Result<Option<String>, ReportError> {
    let Some(attribute) = element
        .try_get_attribute(name)
        .map_err(|err| ReportError::Malformed(format!("invalid attribute '{name}': {err}")))?
    else {
        return Ok(None);
    };
    let value = attribute
        .unescape_value()
        .map_err(|err| ReportError::Malformed(format!("invalid attribute '{name}': {err}")))?;
    Ok(Some(value.into_owned()))
}
