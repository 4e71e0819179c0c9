// crates/agriverse-core/src/lib.rs
//
// agriverse-core: Shared error type, input validation helpers, and the
// estimator trait for the Agriverse projection calculators.
//
// This is the leaf crate that the calculator crates and the CLI depend on.

pub mod error;
pub mod traits;
pub mod validation;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use agriverse_core::AgriverseError;`
pub use error::AgriverseError;
pub use traits::Estimator;
pub use validation::{require_count, require_finite, require_non_negative};
