// hyperapi-core/src/domain/model/params.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::domain::error::DomainError;

pub const MODEL_TYPES: [&str; 10] = [
    "HyperCube",
    "LogisticRegression",
    "DecisionTree",
    "RandomForest",
    "GradientBoosting",
    "GradientBoostingRegressor",
    "XGBRegressor",
    "Lasso",
    "Perceptron",
    "All",
];

/// `None` (no algoType, or JSON null) is accepted as well.
pub const ALGO_TYPES: [&str; 2] = ["Bayesian", "Random"];

/// Free-form parameters handed to the model search worker.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct ModelParams(Map<String, Value>);

impl ModelParams {
    pub fn new(values: Map<String, Value>) -> Self {
        Self(values)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn model_type(&self) -> Result<&Value, DomainError> {
        self.0
            .get("modelType")
            .ok_or_else(|| DomainError::MissingParameter("modelType".into()))
    }

    pub fn algo_type(&self) -> Option<&Value> {
        self.0.get("algoType").filter(|v| !v.is_null())
    }

    pub fn model_name(&self) -> Result<String, DomainError> {
        match self.0.get("modelName") {
            Some(Value::String(name)) => Ok(name.clone()),
            Some(other) => Ok(other.to_string()),
            None => Err(DomainError::MissingParameter("modelName".into())),
        }
    }

    /// Checks `modelType` and `algoType` against the accepted values.
    /// An unexpected value is not an error: it yields a `Rejection`.
    pub fn check(&self) -> Result<Option<Rejection>, DomainError> {
        let model_type = self.model_type()?;
        if !model_type.as_str().is_some_and(|t| MODEL_TYPES.contains(&t)) {
            return Ok(Some(Rejection {
                field: "modelType",
                value: display_value(model_type),
                accepted: MODEL_TYPES.to_vec(),
            }));
        }

        if let Some(algo_type) = self.algo_type() {
            if !algo_type.as_str().is_some_and(|t| ALGO_TYPES.contains(&t)) {
                return Ok(Some(Rejection {
                    field: "algoType",
                    value: display_value(algo_type),
                    accepted: ALGO_TYPES.to_vec(),
                }));
            }
        }

        Ok(None)
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A parameter value outside of its accepted set.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub field: &'static str,
    pub value: String,
    pub accepted: Vec<&'static str>,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unexpected {} : {}, valid options are : {}",
            self.field,
            self.value,
            self.accepted.join(", ")
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    fn params(value: Value) -> Result<ModelParams> {
        Ok(serde_json::from_value(value)?)
    }

    #[test]
    fn test_known_types_pass() -> Result<()> {
        let p = params(json!({"modelType": "RandomForest", "algoType": "Bayesian", "modelName": "rf"}))?;
        assert_eq!(p.check()?, None);

        let p = params(json!({"modelType": "All", "algoType": null, "modelName": "all"}))?;
        assert_eq!(p.check()?, None);

        let p = params(json!({"modelType": "Lasso", "modelName": "lasso"}))?;
        assert_eq!(p.check()?, None);
        Ok(())
    }

    #[test]
    fn test_unknown_model_type_is_rejected() -> Result<()> {
        let p = params(json!({"modelType": "NotAType", "modelName": "x"}))?;
        let rejection = p.check()?.unwrap();
        assert_eq!(rejection.field, "modelType");
        assert_eq!(rejection.value, "NotAType");
        assert!(rejection.to_string().contains("HyperCube, LogisticRegression"));
        Ok(())
    }

    #[test]
    fn test_unknown_algo_type_is_rejected() -> Result<()> {
        let p = params(json!({"modelType": "HyperCube", "algoType": "Grid", "modelName": "x"}))?;
        let rejection = p.check()?.unwrap();
        assert_eq!(rejection.field, "algoType");
        assert_eq!(rejection.accepted, vec!["Bayesian", "Random"]);
        Ok(())
    }

    #[test]
    fn test_missing_model_type_fails_loudly() -> Result<()> {
        let p = params(json!({"modelName": "x"}))?;
        assert_eq!(
            p.check(),
            Err(DomainError::MissingParameter("modelType".into()))
        );
        Ok(())
    }
}
