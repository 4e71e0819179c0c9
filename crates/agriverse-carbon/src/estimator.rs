// crates/agriverse-carbon/src/estimator.rs
//
// Linear carbon footprint model. All results are metric tons of CO2 per year.
//
//   travel    = flights/yr * 0.5      + driving mi/mo * 0.0002
//   home      = electricity kWh/mo * 0.0005 + heating therms/mo * 0.002
//   food      = meat servings/wk * 0.027    + dairy servings/day * 0.005
//   reduction = renewable % * 0.0004
//   total     = max(0, travel + home + food - reduction)
//
// Coefficients are fixed properties of the model, not configuration.

use serde::{Deserialize, Serialize};

use agriverse_core::error::AgriverseError;
use agriverse_core::traits::Estimator;
use agriverse_core::validation::{require_count, require_non_negative};

use crate::input::CarbonInput;
use crate::offset::{offset_cost_usd, trees_for_emissions};

/// Tons of CO2 per round-trip flight.
pub const TONS_PER_FLIGHT: f64 = 0.5;
/// Tons of CO2 per monthly driving mile.
pub const TONS_PER_DRIVING_MILE: f64 = 0.0002;
/// Tons of CO2 per monthly kWh of electricity.
pub const TONS_PER_KWH: f64 = 0.0005;
/// Tons of CO2 per monthly therm of heating fuel.
pub const TONS_PER_THERM: f64 = 0.002;
/// Tons of CO2 per weekly serving of meat.
pub const TONS_PER_MEAT_SERVING: f64 = 0.027;
/// Tons of CO2 per daily serving of dairy.
pub const TONS_PER_DAIRY_SERVING: f64 = 0.005;
/// Tons of CO2 avoided per percentage point of renewable energy.
pub const TONS_REDUCED_PER_RENEWABLE_PERCENT: f64 = 0.0004;

/// Upper bound of the renewable share.
pub const MAX_RENEWABLE_PERCENT: f64 = 100.0;

/// How a renewable share above 100% is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenewablePolicy {
    /// Clamp to 100%, matching the web form's input handler.
    #[default]
    Clamp,
    /// Reject with `InvalidInput`.
    Strict,
}

/// Per-category emissions, in tons of CO2 per year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionBreakdown {
    pub travel: f64,
    pub home: f64,
    pub food: f64,
    pub energy_reduction: f64,
    /// travel + home + food, before the renewable reduction.
    pub gross: f64,
    /// Renewable share actually used, after any clamping.
    pub renewable_percent: f64,
}

/// Estimated footprint and the recommended offset purchase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonResult {
    /// Net footprint, never below zero.
    pub total_emissions_tons_per_year: f64,
    pub trees_needed: u64,
    #[serde(rename = "estimatedCostUSD")]
    pub estimated_cost_usd: u64,
    pub breakdown: EmissionBreakdown,
}

/// Stateless carbon footprint calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarbonEstimator {
    policy: RenewablePolicy,
}

impl CarbonEstimator {
    /// Create an estimator with the given renewable-share policy.
    pub fn new(policy: RenewablePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> RenewablePolicy {
        self.policy
    }

    /// Validate the renewable share and apply the policy.
    ///
    /// Negative shares are always rejected; only the upper bound is subject
    /// to the policy.
    fn renewable_percent(&self, value: f64) -> Result<f64, AgriverseError> {
        let value = require_non_negative("renewablePercent", value)?;
        if value <= MAX_RENEWABLE_PERCENT {
            return Ok(value);
        }
        match self.policy {
            RenewablePolicy::Clamp => {
                tracing::debug!(value, "clamping renewablePercent to 100");
                Ok(MAX_RENEWABLE_PERCENT)
            }
            RenewablePolicy::Strict => Err(AgriverseError::invalid(
                "renewablePercent",
                format!("{} exceeds the maximum of 100", value),
            )),
        }
    }

    /// Compute the footprint for a single form snapshot.
    ///
    /// # Errors
    /// Returns `AgriverseError::InvalidInput` for negative or non-finite
    /// fields, a flight count outside `u32`, and for a renewable share above 100 under
    /// `RenewablePolicy::Strict`.
    pub fn estimate(&self, input: &CarbonInput) -> Result<CarbonResult, AgriverseError> {
        let flights =
            f64::from(require_count("flightsPerYear", input.travel.flights_per_year)?);
        let driving = require_non_negative("drivingMilesPerMonth", input.travel.driving_miles_per_month)?;
        let electricity =
            require_non_negative("electricityKwhPerMonth", input.home.electricity_kwh_per_month)?;
        let heating =
            require_non_negative("heatingThermsPerMonth", input.home.heating_therms_per_month)?;
        let meat = require_non_negative("meatServingsPerWeek", input.food.meat_servings_per_week)?;
        let dairy = require_non_negative("dairyServingsPerDay", input.food.dairy_servings_per_day)?;
        let renewable = self.renewable_percent(input.energy.renewable_percent)?;

        let travel = flights * TONS_PER_FLIGHT + driving * TONS_PER_DRIVING_MILE;
        let home = electricity * TONS_PER_KWH + heating * TONS_PER_THERM;
        let food = meat * TONS_PER_MEAT_SERVING + dairy * TONS_PER_DAIRY_SERVING;
        let energy_reduction = renewable * TONS_REDUCED_PER_RENEWABLE_PERCENT;

        let gross = travel + home + food;
        let total = (gross - energy_reduction).max(0.0);

        let trees_needed = trees_for_emissions(total);
        let estimated_cost_usd = offset_cost_usd(trees_needed);

        tracing::debug!(
            gross,
            energy_reduction,
            total,
            trees_needed,
            estimated_cost_usd,
            "carbon footprint estimated"
        );

        Ok(CarbonResult {
            total_emissions_tons_per_year: total,
            trees_needed,
            estimated_cost_usd,
            breakdown: EmissionBreakdown {
                travel,
                home,
                food,
                energy_reduction,
                gross,
                renewable_percent: renewable,
            },
        })
    }
}

impl Estimator for CarbonEstimator {
    type Input = CarbonInput;
    type Output = CarbonResult;

    fn estimate(&self, input: &CarbonInput) -> Result<CarbonResult, AgriverseError> {
        CarbonEstimator::estimate(self, input)
    }
}
