//! CLI tests for `pickles map` and `pickles results`.
//!
//! Spawns the pickles binary against an AST document and report files and
//! verifies the printed JSON and exit codes.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pickles::ast::{GherkinDocument, ScenarioDefinition};
use pickles::exit_codes;
use pickles::test_support::{examples, feature, outline, row, scenario, step};
use serde_json::Value;

const SPEC_RUN_REPORT: &str = r#"<html><body>
<!-- Pickles Begin
&lt;features&gt;
  &lt;feature title="Eating"&gt;
    &lt;scenario title="Lunch" result="passed" /&gt;
    &lt;scenario title="Eating, 12, 5" result="passed" /&gt;
    &lt;scenario title="Eating, 20, 5" result="failed" /&gt;
  &lt;/feature&gt;
&lt;/features&gt;
Pickles End -->
</body></html>"#;

fn write_document(dir: &Path) -> std::path::PathBuf {
    let document = GherkinDocument {
        feature: Some(feature(
            "Eating",
            vec![
                ScenarioDefinition::Scenario(scenario(
                    "Lunch",
                    vec![step("Given ", "a sandwich"), step("Then ", "I am full")],
                    &["@daily"],
                )),
                ScenarioDefinition::ScenarioOutline(outline(
                    "Eating",
                    vec![step("Given ", "there are <start> cucumbers")],
                    vec![examples(
                        row(&["start", "eat"]),
                        vec![row(&["12", "5"]), row(&["20", "5"])],
                    )],
                )),
                ScenarioDefinition::Scenario(scenario("Dinner", Vec::new(), &[])),
            ],
        )),
    };
    let path = dir.join("eating.json");
    fs::write(&path, serde_json::to_string(&document).expect("json")).expect("write document");
    path
}

fn pickles(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pickles"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run pickles")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout json")
}

#[test]
fn map_prints_domain_model() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_document(temp.path());

    let output = pickles(temp.path(), &["map", "eating.json"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let json = stdout_json(&output);
    assert_eq!(json["name"], "Eating");
    assert_eq!(json["feature_elements"][0]["kind"], "scenario");
    assert_eq!(json["feature_elements"][0]["description"], "");
    assert_eq!(json["feature_elements"][0]["steps"][0]["keyword"], "Given");
    assert_eq!(
        json["feature_elements"][1]["examples"][0]["table"]["data_rows"]
            .as_array()
            .map(Vec::len),
        Some(2)
    );
}

#[test]
fn results_with_failed_outline_exits_with_failed_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_document(temp.path());
    fs::write(temp.path().join("specrun.html"), SPEC_RUN_REPORT).expect("write report");

    let output = pickles(
        temp.path(),
        &["results", "eating.json", "--spec-run", "specrun.html"],
    );

    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    let json = stdout_json(&output);
    assert_eq!(json["feature"], "Eating");
    assert_eq!(json["result"], "failed");
    assert_eq!(json["elements"][0]["result"], "passed");
    assert_eq!(json["elements"][1]["result"], "failed");
    assert_eq!(json["elements"][2]["result"], "inconclusive");
}

#[test]
fn results_from_config_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_document(temp.path());
    fs::write(
        temp.path().join("cucumber.json"),
        r#"[{"name": "Eating", "elements": [
            {"type": "scenario", "name": "Lunch", "steps": [{"result": {"status": "passed"}}]}
        ]}]"#,
    )
    .expect("write report");
    fs::write(
        temp.path().join("pickles.toml"),
        "language = \"en\"\n\n[[results]]\npath = \"cucumber.json\"\nformat = \"cucumber_json\"\n",
    )
    .expect("write config");

    let output = pickles(temp.path(), &["results", "eating.json"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let json = stdout_json(&output);
    assert_eq!(json["result"], "passed");
    assert_eq!(json["elements"][1]["result"], "inconclusive");
}

#[test]
fn malformed_report_is_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_document(temp.path());
    fs::write(
        temp.path().join("specrun.html"),
        SPEC_RUN_REPORT.replace("<!-- Pickles Begin", ""),
    )
    .expect("write report");

    let output = pickles(
        temp.path(),
        &["results", "eating.json", "--spec-run", "specrun.html"],
    );

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed report"), "stderr: {stderr}");
}

#[test]
fn unknown_keyword_for_language_is_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_document(temp.path());

    let output = pickles(temp.path(), &["map", "eating.json", "--language", "fr"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not recognized"), "stderr: {stderr}");
}

#[test]
fn map_uses_document_language_over_config() {
    let temp = tempfile::tempdir().expect("tempdir");
    let mut raw = feature(
        "Manger",
        vec![ScenarioDefinition::Scenario(scenario(
            "Déjeuner",
            vec![step("Soit ", "un sandwich")],
            &[],
        ))],
    );
    raw.language = Some("fr".to_string());
    let document = GherkinDocument { feature: Some(raw) };
    fs::write(
        temp.path().join("manger.json"),
        serde_json::to_string(&document).expect("json"),
    )
    .expect("write document");
    fs::write(temp.path().join("pickles.toml"), "language = \"en\"\n").expect("write config");

    let output = pickles(temp.path(), &["map", "manger.json"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let json = stdout_json(&output);
    assert_eq!(json["feature_elements"][0]["steps"][0]["keyword"], "Given");
    assert_eq!(json["feature_elements"][0]["steps"][0]["native_keyword"], "Soit ");
}
