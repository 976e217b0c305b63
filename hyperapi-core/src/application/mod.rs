// hyperapi-core/src/application/mod.rs

pub mod client;
pub mod dispatcher;
pub mod factory;
pub mod guard;
pub mod work_status;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Le CLI peut faire : `use hyperapi_core::application::{HyperApiClient, CreateOutcome};`

pub use client::HyperApiClient;
pub use dispatcher::Dispatcher;
pub use factory::{AutomatedModelFactory, CreateOutcome};
pub use guard::guarded;
pub use work_status::PollingWorkStatus;
