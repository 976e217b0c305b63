// hyperapi-core/src/ports/mod.rs

pub mod transport;
pub mod work_status;

pub use transport::{HttpResponse, HttpTransport};
pub use work_status::WorkStatusPoller;
