// hyperapi-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, PartialEq)]
pub enum DomainError {
    // --- ROUTE TABLE ---
    #[error("Route '{0}' is not registered")]
    #[diagnostic(code(hyperapi::domain::route_not_found))]
    RouteNotFound(String),

    #[error("Invalid route declaration '{route}': {reason}")]
    #[diagnostic(
        code(hyperapi::domain::route_registration),
        help("Every {{placeholder}} of the path template needs exactly one validator.")
    )]
    RouteRegistration { route: String, reason: String },

    #[error("Resource '{resource}' is not available on API version {version}")]
    #[diagnostic(code(hyperapi::domain::resource_unavailable))]
    ResourceUnavailable { resource: String, version: String },

    // --- PATH PARAMETERS ---
    #[error("Invalid value '{value}' for path parameter '{param}'")]
    #[diagnostic(
        code(hyperapi::domain::validation),
        help("Object identifiers are 24 hexadecimal characters.")
    )]
    Validation { param: String, value: String },

    #[error("Missing path parameter '{param}' for route '{route}'")]
    #[diagnostic(code(hyperapi::domain::missing_path_parameter))]
    MissingPathParameter { route: String, param: String },

    // --- PAYLOAD ---
    #[error("Lookup failed: {0}")]
    #[diagnostic(code(hyperapi::domain::lookup))]
    Lookup(String),

    #[error("Target declares {ids} score ids but {scores} score types")]
    #[diagnostic(code(hyperapi::domain::score_list))]
    ScoreListMismatch { ids: usize, scores: usize },

    #[error("Missing model parameter '{0}'")]
    #[diagnostic(code(hyperapi::domain::missing_parameter))]
    MissingParameter(String),

    // --- RECORDS ---
    #[error("Parse Error: {0}")]
    #[diagnostic(code(hyperapi::domain::parse))]
    Parse(String),
}
