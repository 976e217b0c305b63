// hyperapi-core/src/domain/routes/route.rs

use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::error::DomainError;
use crate::domain::routes::method::HttpMethod;
use crate::domain::routes::validator::ValidatorKind;

/// One remote endpoint: verb, path template and a validator per placeholder.
///
/// Descriptors are immutable once built; `new` is the only constructor and it
/// refuses templates whose placeholders do not match the declared validators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteDescriptor {
    name: String,
    method: HttpMethod,
    path_template: String,
    path_params: BTreeMap<String, ValidatorKind>,
}

impl RouteDescriptor {
    pub fn new(
        name: &str,
        method: HttpMethod,
        path_template: &str,
        path_params: &[(&str, ValidatorKind)],
    ) -> Result<Self, DomainError> {
        let declared: BTreeMap<String, ValidatorKind> = path_params
            .iter()
            .map(|(param, kind)| (param.to_string(), *kind))
            .collect();

        if declared.len() != path_params.len() {
            return Err(registration_error(name, "a path parameter is declared twice"));
        }

        let placeholders = parse_placeholders(name, path_template)?;

        let missing: Vec<&String> = placeholders
            .iter()
            .filter(|p| !declared.contains_key(*p))
            .collect();
        if !missing.is_empty() {
            return Err(registration_error(
                name,
                &format!("no validator declared for {:?}", missing),
            ));
        }

        let unused: Vec<&String> = declared
            .keys()
            .filter(|p| !placeholders.contains(*p))
            .collect();
        if !unused.is_empty() {
            return Err(registration_error(
                name,
                &format!("validators {:?} have no placeholder in '{}'", unused, path_template),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            method,
            path_template: path_template.to_string(),
            path_params: declared,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path_template(&self) -> &str {
        &self.path_template
    }

    pub fn path_params(&self) -> &BTreeMap<String, ValidatorKind> {
        &self.path_params
    }

    /// Validates every placeholder argument and substitutes it in the template.
    /// Arguments that match no placeholder are ignored.
    pub fn render(&self, args: &[(&str, &str)]) -> Result<String, DomainError> {
        let mut path = self.path_template.clone();

        for (param, validator) in &self.path_params {
            let value = args
                .iter()
                .find(|(key, _)| *key == param.as_str())
                .map(|(_, value)| *value)
                .ok_or_else(|| DomainError::MissingPathParameter {
                    route: self.name.clone(),
                    param: param.clone(),
                })?;

            validator.check(param, value)?;
            path = path.replace(&format!("{{{}}}", param), value);
        }

        Ok(path)
    }
}

fn registration_error(route: &str, reason: &str) -> DomainError {
    DomainError::RouteRegistration {
        route: route.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_placeholders(route: &str, template: &str) -> Result<BTreeSet<String>, DomainError> {
    if !template.starts_with('/') {
        return Err(registration_error(route, "path template must start with '/'"));
    }

    let re = Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}")
        .map_err(|e| registration_error(route, &format!("placeholder pattern: {}", e)))?;

    let placeholders: BTreeSet<String> = re
        .captures_iter(template)
        .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
        .collect();

    // Anything brace-like left over is a malformed placeholder
    let stripped = re.replace_all(template, "");
    if stripped.contains('{') || stripped.contains('}') {
        return Err(registration_error(
            route,
            &format!("malformed placeholder in '{}'", template),
        ));
    }

    Ok(placeholders)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;

    const PROJECT: &str = "5b9f6e2a1c9d440000a1b2c3";
    const MODEL: &str = "5c0a7f3b2d8e550000b2c3d4";

    fn model_route() -> Result<RouteDescriptor> {
        Ok(RouteDescriptor::new(
            "getAutomatedModel",
            HttpMethod::Get,
            "/projects/{project_ID}/automodels/{model_ID}",
            &[
                ("project_ID", ValidatorKind::ObjectId),
                ("model_ID", ValidatorKind::ObjectId),
            ],
        )?)
    }

    #[test]
    fn test_render_substitutes_every_placeholder() -> Result<()> {
        let route = model_route()?;
        let path = route.render(&[("project_ID", PROJECT), ("model_ID", MODEL)])?;
        assert_eq!(path, format!("/projects/{}/automodels/{}", PROJECT, MODEL));
        Ok(())
    }

    #[test]
    fn test_render_ignores_extra_arguments() -> Result<()> {
        let route = model_route()?;
        let path = route.render(&[
            ("model_ID", MODEL),
            ("project_ID", PROJECT),
            ("unused", "whatever"),
        ])?;
        assert!(!path.contains('{'));
        Ok(())
    }

    #[test]
    fn test_render_rejects_invalid_argument() -> Result<()> {
        let route = model_route()?;
        let err = route
            .render(&[("project_ID", PROJECT), ("model_ID", "not-an-id")])
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation {
                param: "model_ID".into(),
                value: "not-an-id".into()
            }
        );
        Ok(())
    }

    #[test]
    fn test_render_reports_missing_argument() -> Result<()> {
        let route = model_route()?;
        let err = route.render(&[("project_ID", PROJECT)]).unwrap_err();
        assert!(matches!(err, DomainError::MissingPathParameter { ref param, .. } if param == "model_ID"));
        Ok(())
    }

    #[test]
    fn test_registration_rejects_undeclared_placeholder() {
        let res = RouteDescriptor::new(
            "broken",
            HttpMethod::Get,
            "/projects/{project_ID}/automodels/{model_ID}",
            &[("project_ID", ValidatorKind::ObjectId)],
        );
        assert!(matches!(res, Err(DomainError::RouteRegistration { .. })));
    }

    #[test]
    fn test_registration_rejects_unused_validator() {
        let res = RouteDescriptor::new(
            "broken",
            HttpMethod::Get,
            "/projects/{project_ID}",
            &[
                ("project_ID", ValidatorKind::ObjectId),
                ("model_ID", ValidatorKind::ObjectId),
            ],
        );
        assert!(matches!(res, Err(DomainError::RouteRegistration { .. })));
    }

    #[test]
    fn test_registration_rejects_malformed_template() {
        for template in ["/projects/{project_ID", "projects/{project_ID}", "/a/{}"] {
            let res = RouteDescriptor::new(
                "broken",
                HttpMethod::Get,
                template,
                &[("project_ID", ValidatorKind::ObjectId)],
            );
            assert!(res.is_err(), "{} accepted", template);
        }
    }
}
