//! Client for the random-mean service.

pub mod client;

pub use client::{Batch, MeanClient};
