// crates/agriverse-carbon/src/offset.rs
//
// Offset recommendation: how many Tree NFTs cover a yearly footprint, and
// what they cost.

/// Trees required to absorb one metric ton of CO2 per year.
pub const TREES_PER_TON: f64 = 50.0;

/// Price of one Tree NFT in whole US dollars.
pub const USD_PER_TREE: u64 = 25;

/// Number of trees needed to offset `tons` of CO2 per year, rounded up.
///
/// Non-positive footprints need no trees.
pub fn trees_for_emissions(tons: f64) -> u64 {
    if tons <= 0.0 || tons.is_nan() {
        return 0;
    }
    // `as` saturates at u64::MAX for absurdly large footprints.
    (tons * TREES_PER_TON).ceil() as u64
}

/// Cost in whole US dollars of purchasing `trees` Tree NFTs.
pub fn offset_cost_usd(trees: u64) -> u64 {
    trees.saturating_mul(USD_PER_TREE)
}
