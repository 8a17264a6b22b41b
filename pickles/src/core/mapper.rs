//! Raw parse tree → domain model.
//!
//! One explicit function per node kind. Every function is pure: equal input
//! always yields equal output, so callers may cache results freely.

use tracing::debug;

use crate::ast;
use crate::core::keyword::{DEFAULT_LANGUAGE, resolve_keyword, supported_language};
use crate::core::model::{
    Example, Feature, FeatureElement, Keyword, Scenario, ScenarioOutline, Step, Table, TableRow,
};
use crate::error::MappingError;

/// Maps raw nodes using the keyword table of one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapper {
    language: &'static str,
}

impl Default for Mapper {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE,
        }
    }
}

impl Mapper {
    /// Fails if no keyword table exists for `language`.
    pub fn new(language: &str) -> Result<Self, MappingError> {
        let language = supported_language(language)
            .ok_or_else(|| MappingError::UnsupportedLanguage(language.to_string()))?;
        debug!(language, "mapper configured");
        Ok(Self { language })
    }

    pub fn language(&self) -> &'static str {
        self.language
    }

    pub fn map_keyword(&self, raw: &str) -> Result<Keyword, MappingError> {
        resolve_keyword(self.language, raw)
    }

    pub fn map_tag(&self, tag: &ast::Tag) -> String {
        tag.name.clone()
    }

    pub fn map_doc_string(&self, doc_string: &ast::DocString) -> String {
        doc_string.content.clone()
    }

    pub fn map_table_row(&self, row: &ast::TableRow) -> TableRow {
        TableRow(row.cells.iter().map(|cell| cell.value.clone()).collect())
    }

    /// First row becomes the header, the rest become data rows.
    pub fn map_table<'a, I>(&self, rows: I) -> Result<Table, MappingError>
    where
        I: IntoIterator<Item = &'a ast::TableRow>,
    {
        let mut rows = rows.into_iter().map(|row| self.map_table_row(row));
        let header_row = rows.next().ok_or(MappingError::MalformedTable)?;
        Ok(Table {
            header_row,
            data_rows: rows.collect(),
        })
    }

    pub fn map_step(&self, step: &ast::Step) -> Result<Step, MappingError> {
        let (doc_string_argument, table_argument) = match &step.argument {
            Some(ast::StepArgument::DocString(doc_string)) => {
                (Some(self.map_doc_string(doc_string)), None)
            }
            Some(ast::StepArgument::DataTable(table)) => (None, Some(self.map_table(&table.rows)?)),
            None => (None, None),
        };
        Ok(Step {
            native_keyword: step.keyword.clone(),
            keyword: self.map_keyword(&step.keyword)?,
            name: step.text.clone(),
            doc_string_argument,
            table_argument,
        })
    }

    /// Only scenarios and outlines are feature elements; a background here
    /// means the caller skipped [`Mapper::map_background`].
    pub fn map_scenario_definition(
        &self,
        definition: &ast::ScenarioDefinition,
        feature_name: &str,
    ) -> Result<FeatureElement, MappingError> {
        match definition {
            ast::ScenarioDefinition::Scenario(scenario) => self
                .map_scenario(scenario, feature_name)
                .map(FeatureElement::Scenario),
            ast::ScenarioDefinition::ScenarioOutline(outline) => self
                .map_scenario_outline(outline, feature_name)
                .map(FeatureElement::ScenarioOutline),
            other => Err(MappingError::UnsupportedNodeKind { kind: other.kind() }),
        }
    }

    pub fn map_scenario(
        &self,
        scenario: &ast::Scenario,
        feature_name: &str,
    ) -> Result<Scenario, MappingError> {
        Ok(Scenario {
            name: scenario.name.clone(),
            description: description(&scenario.description),
            steps: self.map_steps(&scenario.steps)?,
            tags: self.map_tags(&scenario.tags),
            feature_name: feature_name.to_string(),
        })
    }

    pub fn map_background(
        &self,
        background: &ast::Background,
        feature_name: &str,
    ) -> Result<Scenario, MappingError> {
        Ok(Scenario {
            name: background.name.clone(),
            description: description(&background.description),
            steps: self.map_steps(&background.steps)?,
            tags: Vec::new(),
            feature_name: feature_name.to_string(),
        })
    }

    pub fn map_example(&self, examples: &ast::Examples) -> Result<Example, MappingError> {
        Ok(Example {
            name: examples.name.clone(),
            description: description(&examples.description),
            tags: self.map_tags(&examples.tags),
            table: self.map_table(examples.rows())?,
        })
    }

    pub fn map_scenario_outline(
        &self,
        outline: &ast::ScenarioOutline,
        feature_name: &str,
    ) -> Result<ScenarioOutline, MappingError> {
        Ok(ScenarioOutline {
            name: outline.name.clone(),
            description: description(&outline.description),
            steps: self.map_steps(&outline.steps)?,
            tags: self.map_tags(&outline.tags),
            examples: outline
                .examples
                .iter()
                .map(|examples| self.map_example(examples))
                .collect::<Result<_, _>>()?,
            feature_name: feature_name.to_string(),
        })
    }

    /// Maps children in source order; the background is pulled out of the
    /// element list.
    pub fn map_feature(&self, feature: &ast::Feature) -> Result<Feature, MappingError> {
        let mut background = None;
        let mut feature_elements = Vec::with_capacity(feature.children.len());
        for child in &feature.children {
            match child {
                ast::ScenarioDefinition::Background(raw) => {
                    background = Some(self.map_background(raw, &feature.name)?);
                }
                definition => {
                    feature_elements.push(self.map_scenario_definition(definition, &feature.name)?);
                }
            }
        }
        Ok(Feature {
            name: feature.name.clone(),
            description: description(&feature.description),
            tags: self.map_tags(&feature.tags),
            feature_elements,
            background,
        })
    }

    pub fn map_document(&self, document: &ast::GherkinDocument) -> Result<Feature, MappingError> {
        let feature = document
            .feature
            .as_ref()
            .ok_or(MappingError::MissingFeature)?;
        self.map_feature(feature)
    }

    fn map_steps(&self, steps: &[ast::Step]) -> Result<Vec<Step>, MappingError> {
        steps.iter().map(|step| self.map_step(step)).collect()
    }

    fn map_tags(&self, tags: &[ast::Tag]) -> Vec<String> {
        tags.iter().map(|tag| self.map_tag(tag)).collect()
    }
}

fn description(raw: &Option<String>) -> String {
    raw.clone().unwrap_or_default()
}
