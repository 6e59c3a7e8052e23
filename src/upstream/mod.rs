//! Upstream random integer API.
//!
//! # Data Flow
//! ```text
//! fetch_integers(length)
//!     → client.rs (build URL with fixed parameters + num, GET)
//!     → status check (200 only)
//!     → parse.rs (one integer per line)
//!     → Vec<i64> in response order
//! ```
//!
//! # Design Decisions
//! - One call, one attempt: no retries, no caching
//! - Failure detail stays in `UpstreamError`; the HTTP layer decides what
//!   callers get to see

pub mod client;
pub mod error;
pub mod parse;

pub use client::{IntegerSource, UpstreamClient};
pub use error::{UpstreamError, UpstreamResult};
pub use parse::parse_integers;
