// crates/agriverse-core/src/traits.rs

use crate::error::AgriverseError;

/// A pure projection calculator: an immutable input snapshot in, a result out.
///
/// Implemented by `CarbonEstimator` (agriverse-carbon) and
/// `StakingEstimator` (agriverse-economics). Implementations hold no mutable
/// state, so a single instance can be shared freely across threads.
pub trait Estimator: Send + Sync {
    /// The form snapshot the estimator consumes.
    type Input;
    /// The projection it produces.
    type Output;

    /// Validate `input` and compute the projection.
    ///
    /// Returns `AgriverseError::InvalidInput` naming the first field that
    /// falls outside its domain.
    fn estimate(&self, input: &Self::Input) -> Result<Self::Output, AgriverseError>;
}
