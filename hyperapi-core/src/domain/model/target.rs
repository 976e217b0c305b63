// hyperapi-core/src/domain/model/target.rs

use serde::{Deserialize, Serialize};
use std::fmt;

pub const INDICATOR_DISCRETE_WITH_MODALITY: &str = "Discrete variable with a modality";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreType {
    Purity,
    Coverage,
    Lift,
}

impl ScoreType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Purity => "Purity",
            Self::Coverage => "Coverage",
            Self::Lift => "Lift",
        }
    }
}

impl fmt::Display for ScoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The KPI a model is evaluated against, as returned by the targets endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub indicator_type: String,
    pub indicator_family: String,
    pub name: String,
    pub variable_name: String,
    pub project_id: String,
    #[serde(default)]
    pub score_ids: Vec<String>,
    #[serde(default)]
    pub scores: Vec<ScoreType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modality: Option<String>,
}

impl Target {
    pub fn is_discrete_with_modality(&self) -> bool {
        self.indicator_type == INDICATOR_DISCRETE_WITH_MODALITY
    }
}
