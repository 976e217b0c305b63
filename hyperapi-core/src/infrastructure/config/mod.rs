pub mod client;

pub use client::{ClientConfig, WorkStatusConfig, load_client_config};
