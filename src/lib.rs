//! Random integer standard deviation service.

pub mod aggregate;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod stats;
pub mod upstream;

pub use aggregate::RandomBatch;
pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
