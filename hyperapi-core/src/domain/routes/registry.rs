// hyperapi-core/src/domain/routes/registry.rs

use std::collections::HashMap;
use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::routes::resource::{self, Resource, ResourceInfo};
use crate::domain::routes::route::RouteDescriptor;

/// Route table, filled once when a client is built and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    // Keyed by lowercase name: `getautomatedmodels` resolves `getAutomatedModels`
    routes: HashMap<String, RouteDescriptor>,
    resources: Vec<ResourceInfo>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every resource this client knows about, checked against `api_version`
    /// when the server version is known.
    pub fn standard(api_version: Option<&str>) -> Result<Self, DomainError> {
        let mut registry = Self::new();
        for res in [resource::automated_prediction()?, resource::work()?] {
            if let Some(version) = api_version {
                if !res.info.is_available(version)? {
                    return Err(DomainError::ResourceUnavailable {
                        resource: res.info.name.to_string(),
                        version: version.to_string(),
                    });
                }
            }
            registry.register_resource(res)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, descriptor: RouteDescriptor) -> Result<(), DomainError> {
        let key = descriptor.name().to_lowercase();
        if self.routes.contains_key(&key) {
            return Err(DomainError::RouteRegistration {
                route: descriptor.name().to_string(),
                reason: "a route with this name is already registered".into(),
            });
        }
        debug!(route = descriptor.name(), path = descriptor.path_template(), "Registering route");
        self.routes.insert(key, descriptor);
        Ok(())
    }

    pub fn register_resource(&mut self, resource: Resource) -> Result<(), DomainError> {
        for route in resource.routes {
            self.register(route)?;
        }
        self.resources.push(resource.info);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<&RouteDescriptor, DomainError> {
        self.routes
            .get(&name.to_lowercase())
            .ok_or_else(|| DomainError::RouteNotFound(name.to_string()))
    }

    /// Routes sorted by path, for display.
    pub fn routes(&self) -> Vec<&RouteDescriptor> {
        let mut routes: Vec<&RouteDescriptor> = self.routes.values().collect();
        routes.sort_by(|a, b| {
            a.path_template()
                .cmp(b.path_template())
                .then(a.method().as_str().cmp(b.method().as_str()))
        });
        routes
    }

    pub fn resources(&self) -> &[ResourceInfo] {
        &self.resources
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
