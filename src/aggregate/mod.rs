//! Sequential fan-out and aggregation.
//!
//! # Data Flow
//! ```text
//! aggregate(source, requests, length)
//!     → fetch batch 1 → RandomBatch
//!     → ...
//!     → fetch batch R → RandomBatch
//!     → concatenate all values → aggregate RandomBatch
//! ```
//!
//! # Design Decisions
//! - Calls run one after another; the first failure aborts the rest
//! - All or nothing: no partial result is ever returned

use serde::{Deserialize, Serialize};

use crate::stats::standard_deviation;
use crate::upstream::{IntegerSource, UpstreamError, UpstreamResult};

/// A batch of integers together with its standard deviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomBatch {
    /// Population standard deviation, rounded to two decimals.
    pub stddev: f64,
    /// The integers, in the order they were produced.
    pub data: Vec<i64>,
}

impl RandomBatch {
    /// Build a batch, computing its standard deviation.
    ///
    /// Fails with [`UpstreamError::EmptyBatch`] when `data` is empty.
    pub fn new(data: Vec<i64>) -> UpstreamResult<Self> {
        let stddev = standard_deviation(&data).ok_or(UpstreamError::EmptyBatch)?;
        Ok(Self { stddev, data })
    }
}

/// Fetch `requests` batches of `length` integers and append their aggregate.
///
/// The result has `requests + 1` entries; the last is computed over the
/// concatenation of all the others, in call order.
pub async fn aggregate<S>(source: &S, requests: usize, length: usize) -> UpstreamResult<Vec<RandomBatch>>
where
    S: IntegerSource + Sync,
{
    let mut batches = Vec::with_capacity(requests + 1);

    for i in 0..requests {
        let values = source.fetch_integers(length).await?;
        tracing::trace!(call = i + 1, of = requests, "Batch received");
        batches.push(RandomBatch::new(values)?);
    }

    let combined: Vec<i64> = batches
        .iter()
        .flat_map(|batch| batch.data.iter().copied())
        .collect();
    batches.push(RandomBatch::new(combined)?);

    Ok(batches)
}
