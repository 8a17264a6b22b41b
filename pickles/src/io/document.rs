//! Loading parser output (Gherkin AST JSON) from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::ast::GherkinDocument;

/// Read and deserialize one Gherkin AST document.
pub fn load_document(path: &Path) -> Result<GherkinDocument> {
    debug!(path = %path.display(), "loading gherkin document");
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let document: GherkinDocument = serde_json::from_str(&contents)
        .with_context(|| format!("parse gherkin document {}", path.display()))?;
    debug!(
        has_feature = document.feature.is_some(),
        "gherkin document loaded"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_document_from_disk() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("eating.feature.json");
        fs::write(
            &path,
            r#"{"type": "GherkinDocument", "feature": {"type": "Feature", "keyword": "Feature", "name": "Eating", "children": []}, "comments": []}"#,
        )
        .expect("write");

        let document = load_document(&path).expect("load");
        assert_eq!(document.feature.expect("feature").name, "Eating");
    }

    #[test]
    fn reports_path_on_parse_failure() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("broken.json");
        fs::write(&path, "{not json").expect("write");

        let err = load_document(&path).expect_err("broken");
        assert!(format!("{err:#}").contains("broken.json"));
    }
}
