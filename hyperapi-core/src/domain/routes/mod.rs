// hyperapi-core/src/domain/routes/mod.rs

pub mod method;
pub mod registry;
pub mod resource;
pub mod route;
pub mod validator;

pub use method::HttpMethod;
pub use registry::RouteRegistry;
pub use resource::{Resource, ResourceInfo};
pub use route::RouteDescriptor;
pub use validator::ValidatorKind;
