use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const PROJECT: &str = "5c0a7f3b2d8e550000a1b2c3";

// Nothing listens on the discard port: any request would fail loudly.
const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

/// Scratch directory holding the JSON records fed to `hyperapi create`.
struct CliTestEnv {
    tmp: TempDir,
}

impl CliTestEnv {
    fn new() -> Result<Self> {
        Ok(Self {
            tmp: tempfile::tempdir()?,
        })
    }

    fn write_json(&self, name: &str, value: &Value) -> Result<PathBuf> {
        let path = self.tmp.path().join(name);
        std::fs::write(&path, serde_json::to_string_pretty(value)?)?;
        Ok(path)
    }

    fn hyperapi(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hyperapi"));
        cmd.current_dir(self.tmp.path())
            .env_remove("HYPERAPI_URL")
            .env_remove("HYPERAPI_TOKEN");
        cmd
    }

    fn create_cmd(&self, model_type: &str, variable_name: &str) -> Result<Command> {
        let dataset = self.write_json(
            "dataset.json",
            &json!({
                "_id": "5c0a7f3b2d8e550000b2c3d4",
                "datasetName": "churn",
                "projectId": PROJECT,
                "sourceFileName": "churn.csv",
                "variables": [{
                    "name": "churned",
                    "modalities": ["no", "yes"],
                    "purities": [0.8, 0.2],
                    "frequencies": [9000, 1000]
                }]
            }),
        )?;
        let target = self.write_json(
            "target.json",
            &json!({
                "indicatorType": "Discrete variable with a modality",
                "indicatorFamily": "Discrete",
                "name": "churn_yes",
                "variableName": variable_name,
                "projectId": PROJECT,
                "scoreIds": ["s1", "s2"],
                "scores": ["Purity", "Coverage"],
                "modality": "yes"
            }),
        )?;
        let params = self.write_json(
            "params.json",
            &json!({
                "modelType": model_type,
                "algoType": "Bayesian",
                "modelName": "churn search"
            }),
        )?;

        let mut cmd = self.hyperapi();
        cmd.args(["create", "--project", PROJECT, "--url", UNREACHABLE_URL])
            .arg("--dataset")
            .arg(dataset)
            .arg("--target")
            .arg(target)
            .arg("--params")
            .arg(params);
        Ok(cmd)
    }
}

#[test]
fn test_routes_lists_the_table() -> Result<()> {
    let env = CliTestEnv::new()?;
    env.hyperapi()
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("createAutomatedModel"))
        .stdout(predicate::str::contains("publishAutomatedModel"));
    Ok(())
}

#[test]
fn test_routes_refuses_a_config_for_an_older_server() -> Result<()> {
    let env = CliTestEnv::new()?;
    std::fs::write(
        env.tmp.path().join("hyperapi.yaml"),
        "base_url: http://localhost:8080\napi_version: 1.0.0\n",
    )?;
    env.hyperapi()
        .arg("routes")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Resource 'automatedPrediction' is not available on API version 1.0.0",
        ));
    Ok(())
}

#[test]
fn test_routes_surfaces_an_invalid_config_file() -> Result<()> {
    let env = CliTestEnv::new()?;
    std::fs::write(env.tmp.path().join("hyperapi.yaml"), "base_url: not a url\n")?;
    env.hyperapi()
        .arg("routes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration Error"));
    Ok(())
}

#[test]
fn test_create_with_unknown_model_type_is_rejected_offline() -> Result<()> {
    let env = CliTestEnv::new()?;
    env.create_cmd("NotAType", "churned")?
        .assert()
        .success()
        .stdout(predicate::str::contains("Unexpected modelType : NotAType"));
    Ok(())
}

#[test]
fn test_create_with_unknown_variable_fails() -> Result<()> {
    let env = CliTestEnv::new()?;
    env.create_cmd("HyperCube", "no_such_variable")?
        .assert()
        .failure()
        .stderr(predicate::str::contains("Lookup failed"));
    Ok(())
}

#[test]
fn test_get_with_malformed_project_id_fails_before_any_request() -> Result<()> {
    let env = CliTestEnv::new()?;
    env.hyperapi()
        .args([
            "get",
            "--project",
            "not-an-id",
            "--model",
            PROJECT,
            "--url",
            UNREACHABLE_URL,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value 'not-an-id'"));
    Ok(())
}

#[test]
fn test_missing_connection_settings_fail() -> Result<()> {
    let env = CliTestEnv::new()?;
    env.hyperapi()
        .args(["list", "--project", PROJECT])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hyperapi.yaml"));
    Ok(())
}
