// crates/agriverse-economics/src/staking.rs
//
// Fixed-rate staking reward projection.
//
// Tiers (annual simple interest, not compounded):
//   - Flexible:  8%  (no lock; projected over a full year)
//   - 30 days:  12%
//   - 90 days:  18%
//
//   reward = principal * rate% / 100 / 365 * effective_days
//
// The rate table is fixed; the form offers no other periods.

use serde::{Deserialize, Serialize};

use agriverse_core::error::AgriverseError;
use agriverse_core::traits::Estimator;
use agriverse_core::validation::require_non_negative;

/// Days used to convert an annual rate to a daily one.
pub const DAYS_PER_YEAR: u32 = 365;

/// A staking period offered by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StakingTier {
    /// No lock-up (period 0). Rewards are annualized.
    Flexible,
    /// 30-day lock.
    ThirtyDay,
    /// 90-day lock.
    NinetyDay,
}

impl StakingTier {
    /// Every tier, in ascending period order.
    pub const ALL: [StakingTier; 3] = [
        StakingTier::Flexible,
        StakingTier::ThirtyDay,
        StakingTier::NinetyDay,
    ];

    /// Look up the tier for a period length in days.
    ///
    /// # Errors
    /// Returns `AgriverseError::InvalidInput` for any period other than 0, 30, or 90.
    pub fn from_period_days(days: u32) -> Result<Self, AgriverseError> {
        match days {
            0 => Ok(StakingTier::Flexible),
            30 => Ok(StakingTier::ThirtyDay),
            90 => Ok(StakingTier::NinetyDay),
            other => Err(AgriverseError::invalid(
                "periodDays",
                format!("{} is not an offered staking period (expected 0, 30, or 90)", other),
            )),
        }
    }

    /// Lock-up length in days; 0 for flexible.
    pub fn period_days(&self) -> u32 {
        match self {
            StakingTier::Flexible => 0,
            StakingTier::ThirtyDay => 30,
            StakingTier::NinetyDay => 90,
        }
    }

    /// Annual rate in percent.
    pub fn annual_rate_percent(&self) -> u32 {
        match self {
            StakingTier::Flexible => 8,
            StakingTier::ThirtyDay => 12,
            StakingTier::NinetyDay => 18,
        }
    }

    /// Days the reward accrues over. The flexible tier is projected over a year.
    pub fn effective_days(&self) -> u32 {
        match self.period_days() {
            0 => DAYS_PER_YEAR,
            days => days,
        }
    }

    /// Fraction of the principal earned per day.
    pub fn daily_rate(&self) -> f64 {
        f64::from(self.annual_rate_percent()) / f64::from(DAYS_PER_YEAR) / 100.0
    }

    pub fn label(&self) -> &'static str {
        match self {
            StakingTier::Flexible => "Flexible",
            StakingTier::ThirtyDay => "30 days",
            StakingTier::NinetyDay => "90 days",
        }
    }

    /// Projected reward for `principal` tokens staked in this tier.
    ///
    /// Evaluated as `principal * rate * days / (365 * 100)` so that the
    /// flexible tier reduces exactly to `principal * rate / 100`.
    fn reward_for(&self, principal: f64) -> f64 {
        let numerator = principal
            * f64::from(self.annual_rate_percent())
            * f64::from(self.effective_days());
        numerator / (f64::from(DAYS_PER_YEAR) * 100.0)
    }
}

/// Staking form snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingInput {
    /// Tokens to stake.
    pub principal: f64,
    /// 0 (flexible), 30, or 90.
    pub period_days: u32,
}

/// Projected staking outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingResult {
    pub tier: StakingTier,
    pub principal: f64,
    pub annual_rate_percent: u32,
    pub effective_days: u32,
    pub projected_reward_tokens: f64,
}

/// Stateless staking reward calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct StakingEstimator;

impl StakingEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Project the reward for one staking form snapshot.
    ///
    /// # Errors
    /// Returns `AgriverseError::InvalidInput` if the principal is negative or
    /// non-finite, or if the period is not one of the offered tiers.
    pub fn estimate(&self, input: &StakingInput) -> Result<StakingResult, AgriverseError> {
        let principal = require_non_negative("principal", input.principal)?;
        let tier = StakingTier::from_period_days(input.period_days)?;
        let result = project(principal, tier);

        tracing::debug!(
            principal,
            period_days = input.period_days,
            rate = result.annual_rate_percent,
            reward = result.projected_reward_tokens,
            "staking reward projected"
        );

        Ok(result)
    }
}

impl Estimator for StakingEstimator {
    type Input = StakingInput;
    type Output = StakingResult;

    fn estimate(&self, input: &StakingInput) -> Result<StakingResult, AgriverseError> {
        StakingEstimator::estimate(self, input)
    }
}

fn project(principal: f64, tier: StakingTier) -> StakingResult {
    StakingResult {
        tier,
        principal,
        annual_rate_percent: tier.annual_rate_percent(),
        effective_days: tier.effective_days(),
        projected_reward_tokens: tier.reward_for(principal),
    }
}

/// Project `principal` across every tier, in ascending period order.
///
/// # Errors
/// Returns `AgriverseError::InvalidInput` if the principal is negative or non-finite.
pub fn project_all_tiers(principal: f64) -> Result<Vec<StakingResult>, AgriverseError> {
    let principal = require_non_negative("principal", principal)?;
    Ok(StakingTier::ALL
        .iter()
        .map(|tier| project(principal, *tier))
        .collect())
}
