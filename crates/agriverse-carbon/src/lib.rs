// crates/agriverse-carbon/src/lib.rs
//
// agriverse-carbon: converts lifestyle inputs (travel, home energy, diet,
// renewable share) into an estimated annual CO2 footprint in metric tons,
// and recommends a Tree NFT offset purchase covering it.

pub mod estimator;
pub mod input;
pub mod offset;

pub use estimator::{CarbonEstimator, CarbonResult, EmissionBreakdown, RenewablePolicy};
pub use input::{CarbonInput, EnergyInput, FoodInput, HomeInput, TravelInput};
pub use offset::{offset_cost_usd, trees_for_emissions, TREES_PER_TON, USD_PER_TREE};
