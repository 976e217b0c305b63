// hyperapi-core/src/domain/model/dataset.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::error::DomainError;

/// Statistics of one discrete variable, index-aligned on `modalities`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Variable {
    pub name: String,
    #[serde(default)]
    pub modalities: Vec<String>,
    #[serde(default)]
    pub purities: Vec<f64>,
    #[serde(default)]
    pub frequencies: Vec<u64>,
}

/// Purity and frequency of a single modality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalityStats {
    pub purity: f64,
    pub frequency: u64,
}

impl Variable {
    pub fn modality_stats(&self, modality: &str) -> Result<ModalityStats, DomainError> {
        let index = self
            .modalities
            .iter()
            .position(|m| m == modality)
            .ok_or_else(|| {
                DomainError::Lookup(format!(
                    "Modality '{}' not found in variable '{}'",
                    modality, self.name
                ))
            })?;

        let purity = self.purities.get(index).copied().ok_or_else(|| {
            DomainError::Lookup(format!(
                "Variable '{}' has no purity for modality #{}",
                self.name, index
            ))
        })?;
        let frequency = self.frequencies.get(index).copied().ok_or_else(|| {
            DomainError::Lookup(format!(
                "Variable '{}' has no frequency for modality #{}",
                self.name, index
            ))
        })?;

        Ok(ModalityStats { purity, frequency })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DatasetRecord {
    #[serde(alias = "_id")]
    dataset_id: String,
    #[serde(alias = "datasetName")]
    name: String,
    project_id: String,
    #[serde(default)]
    source_file_name: String,
    #[serde(default)]
    variables: Vec<Variable>,
}

/// A dataset as returned by the platform, with the record it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub dataset_id: String,
    pub name: String,
    pub project_id: String,
    pub source_file_name: String,
    pub variables: Vec<Variable>,
    raw_json: Value,
}

impl Dataset {
    pub fn from_json(raw_json: Value) -> Result<Self, DomainError> {
        let record: DatasetRecord = serde_json::from_value(raw_json.clone())
            .map_err(|e| DomainError::Parse(format!("Invalid dataset record: {}", e)))?;

        Ok(Self {
            dataset_id: record.dataset_id,
            name: record.name,
            project_id: record.project_id,
            source_file_name: record.source_file_name,
            variables: record.variables,
            raw_json,
        })
    }

    pub fn raw_json(&self) -> &Value {
        &self.raw_json
    }

    pub fn variable(&self, name: &str) -> Result<&Variable, DomainError> {
        self.variables
            .iter()
            .find(|v| v.name == name)
            .ok_or_else(|| {
                DomainError::Lookup(format!(
                    "Variable '{}' not found in dataset '{}'",
                    name, self.name
                ))
            })
    }
}
