//! Test-only helpers for constructing raw parse-tree nodes.

use crate::ast::{
    Background, DataTable, DocString, Examples, Feature, Scenario, ScenarioDefinition,
    ScenarioOutline, Step, StepArgument, TableCell, TableRow, Tag,
};

/// Create a table row from cell values.
pub fn row(cells: &[&str]) -> TableRow {
    TableRow {
        cells: cells
            .iter()
            .map(|value| TableCell {
                value: value.to_string(),
            })
            .collect(),
    }
}

/// Create a step with no argument.
pub fn step(keyword: &str, text: &str) -> Step {
    Step {
        keyword: keyword.to_string(),
        text: text.to_string(),
        argument: None,
    }
}

/// Create a step carrying a doc string.
pub fn doc_string_step(keyword: &str, text: &str, content: &str) -> Step {
    Step {
        argument: Some(StepArgument::DocString(DocString {
            content_type: None,
            content: content.to_string(),
        })),
        ..step(keyword, text)
    }
}

/// Create a step carrying a data table.
pub fn table_step(keyword: &str, text: &str, rows: Vec<TableRow>) -> Step {
    Step {
        argument: Some(StepArgument::DataTable(DataTable { rows })),
        ..step(keyword, text)
    }
}

pub fn tag(name: &str) -> Tag {
    Tag {
        name: name.to_string(),
    }
}

/// Create a scenario with no description.
pub fn scenario(name: &str, steps: Vec<Step>, tags: &[&str]) -> Scenario {
    Scenario {
        keyword: "Scenario".to_string(),
        name: name.to_string(),
        description: None,
        tags: tags.iter().map(|name| tag(name)).collect(),
        steps,
    }
}

/// Create an examples block from header + body rows.
pub fn examples(header: TableRow, body: Vec<TableRow>) -> Examples {
    Examples {
        keyword: "Examples".to_string(),
        name: String::new(),
        description: None,
        tags: Vec::new(),
        table_header: Some(header),
        table_body: body,
    }
}

/// Create a scenario outline with no description or tags.
pub fn outline(name: &str, steps: Vec<Step>, examples: Vec<Examples>) -> ScenarioOutline {
    ScenarioOutline {
        keyword: "Scenario Outline".to_string(),
        name: name.to_string(),
        description: None,
        tags: Vec::new(),
        steps,
        examples,
    }
}

pub fn background(steps: Vec<Step>) -> Background {
    Background {
        keyword: "Background".to_string(),
        name: String::new(),
        description: None,
        steps,
    }
}

/// Create an English feature with the given children.
pub fn feature(name: &str, children: Vec<ScenarioDefinition>) -> Feature {
    Feature {
        language: Some("en".to_string()),
        keyword: "Feature".to_string(),
        name: name.to_string(),
        description: None,
        tags: Vec::new(),
        children,
    }
}
