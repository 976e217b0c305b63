// hyperapi-core/src/domain/payload.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::error::DomainError;
use crate::domain::model::{Dataset, ModelParams, Rejection, ScoreType, Target};

pub const WORK_TYPE_AUTOMATED_MODELS: &str = "automatedModels";

// Sparse modalities (< 1000 rows) get an absolute coverage floor
const SPARSE_MODALITY_FREQUENCY: u64 = 1000;
const SPARSE_COVERAGE_MIN: f64 = 10.0;
const DENSE_COVERAGE_MIN: f64 = 0.01;
const LIFT_MIN: f64 = 1.0;

// =============================================================================
//  1. REQUEST BODY
// =============================================================================

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub deleted: bool,
    pub kpi_family: String,
    pub kpi_name: String,
    pub kpi_type: String,
    pub output: String,
    pub project_id: String,
    pub score_type: ScoreType,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omodality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KpiSelector {
    pub kpi_family: String,
    pub kpi_name: String,
    pub kpi_type: String,
    pub project_id: String,
    pub selected_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_purity: Option<f64>,
}

/// Caller parameters, plus the two keys the worker expects to find there.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestParams {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    pub source_file_name: String,
    pub target: Vec<ScoreRecord>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAutomatedModelRequest {
    pub dataset_id: String,
    pub dataset_name: String,
    pub kpi: KpiSelector,
    pub model_name: String,
    pub params: RequestParams,
    pub project_id: String,
    pub selected_dataset: Value,
    #[serde(rename = "type")]
    pub kind: String,
    pub valid_target: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    Request(Box<CreateAutomatedModelRequest>),
    Rejected(Rejection),
}

// =============================================================================
//  2. THRESHOLDS
// =============================================================================

/// Minimum scores derived from the target modality statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalityThresholds {
    pub purity_min: f64,
    pub coverage_min: f64,
}

impl ModalityThresholds {
    pub fn for_target(dataset: &Dataset, target: &Target) -> Result<Self, DomainError> {
        let modality = target.modality.as_deref().ok_or_else(|| {
            DomainError::Lookup(format!("Target '{}' declares no modality", target.name))
        })?;
        let stats = dataset
            .variable(&target.variable_name)?
            .modality_stats(modality)?;

        Ok(Self {
            purity_min: round3(stats.purity)?,
            coverage_min: if stats.frequency < SPARSE_MODALITY_FREQUENCY {
                SPARSE_COVERAGE_MIN
            } else {
                DENSE_COVERAGE_MIN
            },
        })
    }

    pub fn min_value(&self, score_type: ScoreType) -> f64 {
        match score_type {
            ScoreType::Purity => self.purity_min,
            ScoreType::Coverage => self.coverage_min,
            ScoreType::Lift => LIFT_MIN,
        }
    }
}

// Decimal rounding of the exact binary value, ties to even (0.0625 -> 0.062)
fn round3(value: f64) -> Result<f64, DomainError> {
    format!("{:.3}", value)
        .parse::<f64>()
        .map_err(|e| DomainError::Parse(format!("Cannot round purity {}: {}", value, e)))
}

// =============================================================================
//  3. BUILDER
// =============================================================================

/// Builds the body of `createAutomatedModel`.
///
/// Unknown `modelType` / `algoType` values yield `BuildOutcome::Rejected`;
/// every other problem (missing variable or modality, misaligned score
/// lists, missing parameters) is an error.
pub fn build_create_request(
    dataset: &Dataset,
    target: &Target,
    params: &ModelParams,
) -> Result<BuildOutcome, DomainError> {
    if let Some(rejection) = params.check()? {
        return Ok(BuildOutcome::Rejected(rejection));
    }
    let model_name = params.model_name()?;

    if target.score_ids.len() != target.scores.len() {
        return Err(DomainError::ScoreListMismatch {
            ids: target.score_ids.len(),
            scores: target.scores.len(),
        });
    }

    let thresholds = if target.is_discrete_with_modality() {
        Some(ModalityThresholds::for_target(dataset, target)?)
    } else {
        None
    };

    let scores = build_scores(target, thresholds.as_ref());

    let kpi = KpiSelector {
        kpi_family: target.indicator_family.clone(),
        kpi_name: target.name.clone(),
        kpi_type: target.indicator_type.clone(),
        project_id: target.project_id.clone(),
        selected_by: "target".into(),
        dataset_purity: thresholds.map(|t| t.purity_min),
    };

    let mut extra = params.as_map().clone();
    extra.remove("sourceFileName");
    extra.remove("target");

    Ok(BuildOutcome::Request(Box::new(CreateAutomatedModelRequest {
        dataset_id: dataset.dataset_id.clone(),
        dataset_name: dataset.name.clone(),
        kpi,
        model_name,
        params: RequestParams {
            extra,
            source_file_name: dataset.source_file_name.clone(),
            target: scores,
        },
        project_id: dataset.project_id.clone(),
        selected_dataset: dataset.raw_json().clone(),
        kind: WORK_TYPE_AUTOMATED_MODELS.into(),
        valid_target: true,
    })))
}

fn build_scores(target: &Target, thresholds: Option<&ModalityThresholds>) -> Vec<ScoreRecord> {
    target
        .score_ids
        .iter()
        .zip(&target.scores)
        .map(|(score_id, score_type)| ScoreRecord {
            deleted: false,
            kpi_family: target.indicator_family.clone(),
            kpi_name: target.name.clone(),
            kpi_type: target.indicator_type.clone(),
            output: target.variable_name.clone(),
            project_id: target.project_id.clone(),
            score_type: *score_type,
            id: score_id.clone(),
            omodality: thresholds.and(target.modality.clone()),
            min_value: thresholds.map(|t| t.min_value(*score_type)),
        })
        // Modality targets are only constrained on purity and coverage
        .filter(|score| {
            thresholds.is_none()
                || matches!(score.score_type, ScoreType::Purity | ScoreType::Coverage)
        })
        .collect()
}
