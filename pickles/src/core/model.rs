//! Domain model produced by the mapper.
//!
//! Built once per parsed document and read-only afterwards. Scenarios keep
//! the owning feature's name as their back-reference, which is all the
//! results sources need to locate them in a report.

use serde::Serialize;

pub use crate::core::keyword::Keyword;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow(pub Vec<String>);

impl TableRow {
    pub fn cells(&self) -> &[String] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub header_row: TableRow,
    pub data_rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Keyword exactly as written in the document (e.g. `"Given "`).
    pub native_keyword: String,
    pub keyword: Keyword,
    pub name: String,
    pub doc_string_argument: Option<String>,
    pub table_argument: Option<Table>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub name: String,
    /// Empty when the document has no description.
    pub description: String,
    pub steps: Vec<Step>,
    pub tags: Vec<String>,
    pub feature_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub table: Table,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioOutline {
    pub name: String,
    pub description: String,
    pub steps: Vec<Step>,
    pub tags: Vec<String>,
    pub examples: Vec<Example>,
    pub feature_name: String,
}

/// A runnable child of a feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureElement {
    Scenario(Scenario),
    ScenarioOutline(ScenarioOutline),
}

impl FeatureElement {
    pub fn name(&self) -> &str {
        match self {
            Self::Scenario(scenario) => &scenario.name,
            Self::ScenarioOutline(outline) => &outline.name,
        }
    }

    pub fn tags(&self) -> &[String] {
        match self {
            Self::Scenario(scenario) => &scenario.tags,
            Self::ScenarioOutline(outline) => &outline.tags,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub feature_elements: Vec<FeatureElement>,
    pub background: Option<Scenario>,
}
