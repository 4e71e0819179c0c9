// crates/agriverse-economics/src/lib.rs
//
// agriverse-economics: AV token amounts and the fixed-rate staking reward
// projection offered by the Agriverse staking form.
//
// Display amounts are tracked in micro-AV (10^-6 AV). Reward projections
// themselves are computed in f64 token units.

pub mod staking;
pub mod token;

// Re-export key types for ergonomic access from downstream crates.
pub use staking::{
    project_all_tiers, StakingEstimator, StakingInput, StakingResult, StakingTier, DAYS_PER_YEAR,
};
pub use token::{Av, MICRO_PER_AV};
