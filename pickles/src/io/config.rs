//! Configuration stored in `pickles.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::core::keyword::{DEFAULT_LANGUAGE, supported_language};

/// Report schemas with a results adapter.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResultsFormat {
    SpecRun,
    CucumberJson,
}

/// One test-execution report to correlate against.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ResultsSource {
    pub path: PathBuf,
    pub format: ResultsFormat,
}

/// Pickles configuration (TOML).
///
/// Missing fields default to English keywords and no reports.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PicklesConfig {
    /// Language of the feature files' keywords (e.g. `"en"`, `"fr"`).
    pub language: String,

    pub results: Vec<ResultsSource>,
}

impl Default for PicklesConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            results: Vec::new(),
        }
    }
}

impl PicklesConfig {
    pub fn validate(&self) -> Result<()> {
        if supported_language(&self.language).is_none() {
            return Err(anyhow!("language '{}' is not supported", self.language));
        }
        if self
            .results
            .iter()
            .any(|source| source.path.as_os_str().is_empty())
        {
            return Err(anyhow!("results.path must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `PicklesConfig::default()`.
pub fn load_config(path: &Path) -> Result<PicklesConfig> {
    if !path.exists() {
        let cfg = PicklesConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PicklesConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, PicklesConfig::default());
        assert_eq!(cfg.language, "en");
    }

    #[test]
    fn parses_results_sources() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("pickles.toml");
        fs::write(
            &path,
            "language = \"fr\"\n\n[[results]]\npath = \"out/specrun.html\"\nformat = \"spec_run\"\n\n[[results]]\npath = \"out/cucumber.json\"\nformat = \"cucumber_json\"\n",
        )
        .expect("write");

        let cfg = load_config(&path).expect("load");

        assert_eq!(cfg.language, "fr");
        assert_eq!(
            cfg.results,
            vec![
                ResultsSource {
                    path: PathBuf::from("out/specrun.html"),
                    format: ResultsFormat::SpecRun,
                },
                ResultsSource {
                    path: PathBuf::from("out/cucumber.json"),
                    format: ResultsFormat::CucumberJson,
                },
            ]
        );
    }

    #[test]
    fn rejects_unsupported_language() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("pickles.toml");
        fs::write(&path, "language = \"xx\"\n").expect("write");
        let err = load_config(&path).expect_err("unsupported language");
        assert!(err.to_string().contains("'xx'"));
    }
}
