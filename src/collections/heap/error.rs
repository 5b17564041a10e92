use std::collections::TryReserveError;

use derive_more::{Display, Error, From};

/// Returned by [`Heap::try_reserve`](super::Heap::try_reserve) when the backing storage can't be
/// grown.
#[derive(Debug, Display, Error, From)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow {
    source: TryReserveError,
}
