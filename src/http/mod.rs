//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → handlers.rs (method check, params.rs validation, aggregation)
//!     → response.rs (error mapping) or JSON body
//!     → Send to client
//! ```

pub mod handlers;
pub mod params;
pub mod request;
pub mod response;
pub mod server;

pub use params::{ParamError, RequestParameters};
pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, HttpServer};
