// hyperapi-core/src/domain/model/mod.rs

pub mod automated_model;
pub mod dataset;
pub mod params;
pub mod target;

pub use automated_model::AutomatedModel;
pub use dataset::{Dataset, ModalityStats, Variable};
pub use params::{ALGO_TYPES, MODEL_TYPES, ModelParams, Rejection};
pub use target::{INDICATOR_DISCRETE_WITH_MODALITY, ScoreType, Target};
