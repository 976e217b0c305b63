// hyperapi-core/src/domain/model/automated_model.rs

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;
use std::fmt;

use crate::domain::error::DomainError;

pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Read-only view over an automated model record returned by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct AutomatedModel {
    json: Value,
    // Local only, never sent back to the server
    is_deleted: bool,
}

impl AutomatedModel {
    pub fn new(json: Value) -> Self {
        Self {
            json,
            is_deleted: false,
        }
    }

    pub fn json(&self) -> &Value {
        &self.json
    }

    pub fn id(&self) -> Option<&str> {
        self.field("_id")
    }

    /// The model name.
    pub fn name(&self) -> Option<&str> {
        self.field("modelName")
    }

    pub fn dataset_id(&self) -> Option<&str> {
        self.field("datasetId")
    }

    pub fn dataset_name(&self) -> Option<&str> {
        self.field("datasetName")
    }

    pub fn kpi_name(&self) -> Option<&str> {
        self.field("kpiName")
    }

    pub fn project_id(&self) -> Option<&str> {
        self.field("projectId")
    }

    pub fn algo_type(&self) -> Option<&str> {
        self.field("algoType")
    }

    pub fn created(&self) -> Result<DateTime<Utc>, DomainError> {
        let raw = self
            .field("createdAt")
            .ok_or_else(|| DomainError::Parse("Missing 'createdAt' in model record".into()))?;
        NaiveDateTime::parse_from_str(raw, CREATED_AT_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|e| DomainError::Parse(format!("Invalid creation date '{}': {}", raw, e)))
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn field(&self, key: &str) -> Option<&str> {
        self.json.get(key).and_then(Value::as_str)
    }
}

impl fmt::Display for AutomatedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "Model : {} <{}>",
            self.name().unwrap_or("-"),
            self.id().unwrap_or("-")
        )?;
        if self.is_deleted {
            writeln!(f, "\t<! This model has been deleted>")?;
        }
        writeln!(f, "\t- Dataset : {}", self.dataset_name().unwrap_or("-"))?;
        writeln!(f, "\t- Target : {}", self.kpi_name().unwrap_or("-"))?;
        match self.created() {
            Ok(created) => writeln!(f, "\t- Created on : {}", created.format(DISPLAY_FORMAT)),
            Err(_) => writeln!(f, "\t- Created on : unknown"),
        }
    }
}
