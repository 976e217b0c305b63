// hyperapi-core/src/infrastructure/adapters/mod.rs

pub mod http;

pub use http::ReqwestTransport;
