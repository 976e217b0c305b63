// hyperapi-core/src/domain/routes/resource.rs

use std::cmp::Ordering;

use crate::domain::error::DomainError;
use crate::domain::routes::method::HttpMethod;
use crate::domain::routes::route::RouteDescriptor;
use crate::domain::routes::validator::ValidatorKind::ObjectId;

pub const AUTOMATED_PREDICTION: &str = "automatedPrediction";
pub const WORK: &str = "work";

/// A named group of routes and the API versions that expose it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceInfo {
    pub name: &'static str,
    pub available_since: &'static str,
    pub removed_since: Option<&'static str>,
}

impl ResourceInfo {
    pub fn is_available(&self, api_version: &str) -> Result<bool, DomainError> {
        let since = compare_versions(api_version, self.available_since)?;
        let before_removal = match self.removed_since {
            Some(removed) => compare_versions(api_version, removed)? == Ordering::Less,
            None => true,
        };
        Ok(since != Ordering::Less && before_removal)
    }
}

#[derive(Debug, Clone)]
pub struct Resource {
    pub info: ResourceInfo,
    pub routes: Vec<RouteDescriptor>,
}

/// Routes of the automated model search ("automodels").
pub fn automated_prediction() -> Result<Resource, DomainError> {
    Ok(Resource {
        info: ResourceInfo {
            name: AUTOMATED_PREDICTION,
            available_since: "4.2.6",
            removed_since: None,
        },
        routes: vec![
            RouteDescriptor::new(
                "getAutomatedModel",
                HttpMethod::Get,
                "/projects/{project_ID}/automodels/{model_ID}",
                &[("project_ID", ObjectId), ("model_ID", ObjectId)],
            )?,
            RouteDescriptor::new(
                "getAutomatedModels",
                HttpMethod::Get,
                "/projects/{project_ID}/automodels",
                &[("project_ID", ObjectId)],
            )?,
            RouteDescriptor::new(
                "getGeneratedModels",
                HttpMethod::Get,
                "/projects/{project_ID}/automodels/{model_ID}/generatedmodels",
                &[("project_ID", ObjectId), ("model_ID", ObjectId)],
            )?,
            RouteDescriptor::new(
                "createAutomatedModel",
                HttpMethod::Post,
                "/projects/{project_ID}/automodels/create",
                &[("project_ID", ObjectId)],
            )?,
            RouteDescriptor::new(
                "publishAutomatedModel",
                HttpMethod::Post,
                "/projects/{project_ID}/automodels/{model_ID}/generatedmodels/{generatedmodel_ID}/publish",
                &[
                    ("project_ID", ObjectId),
                    ("model_ID", ObjectId),
                    ("generatedmodel_ID", ObjectId),
                ],
            )?,
        ],
    })
}

/// Asynchronous job records, polled after long-running requests.
pub fn work() -> Result<Resource, DomainError> {
    Ok(Resource {
        info: ResourceInfo {
            name: WORK,
            available_since: "1.0.0",
            removed_since: None,
        },
        routes: vec![RouteDescriptor::new(
            "getWork",
            HttpMethod::Get,
            "/projects/{project_ID}/works/{work_ID}",
            &[("project_ID", ObjectId), ("work_ID", ObjectId)],
        )?],
    })
}

fn parse_version(version: &str) -> Result<Vec<u64>, DomainError> {
    version
        .trim()
        .split('.')
        .map(|part| {
            part.parse::<u64>()
                .map_err(|_| DomainError::Parse(format!("Invalid API version '{}'", version)))
        })
        .collect()
}

fn compare_versions(left: &str, right: &str) -> Result<Ordering, DomainError> {
    let mut l = parse_version(left)?;
    let mut r = parse_version(right)?;
    // "4.2" == "4.2.0"
    let width = l.len().max(r.len());
    l.resize(width, 0);
    r.resize(width, 0);
    Ok(l.cmp(&r))
}
