use proptest::prelude::*;

use agriverse_economics::{project_all_tiers, StakingEstimator, StakingInput, StakingTier};

fn arb_tier() -> impl Strategy<Value = StakingTier> {
    prop::sample::select(StakingTier::ALL.to_vec())
}

proptest! {
    /// Rewards are never negative for valid input.
    #[test]
    fn reward_non_negative(principal in 0.0f64..1e12, tier in arb_tier()) {
        let result = StakingEstimator::new()
            .estimate(&StakingInput { principal, period_days: tier.period_days() })
            .unwrap();
        prop_assert!(result.projected_reward_tokens >= 0.0);
    }

    /// Reward matches principal * daily rate * effective days.
    #[test]
    fn reward_matches_formula(principal in 0.0f64..1e9, tier in arb_tier()) {
        let result = StakingEstimator::new()
            .estimate(&StakingInput { principal, period_days: tier.period_days() })
            .unwrap();
        let expected = principal * tier.daily_rate() * f64::from(tier.effective_days());
        let tolerance = 1e-9 * expected.abs().max(1.0);
        prop_assert!((result.projected_reward_tokens - expected).abs() <= tolerance);
    }

    /// Any period outside {0, 30, 90} is rejected.
    #[test]
    fn unoffered_periods_rejected(days in any::<u32>().prop_filter("offered", |d| ![0, 30, 90].contains(d))) {
        let err = StakingEstimator::new()
            .estimate(&StakingInput { principal: 1000.0, period_days: days })
            .unwrap_err();
        prop_assert_eq!(err.field(), Some("periodDays"));
    }

    /// The 90-day lock never pays less than the 30-day lock for the same principal.
    #[test]
    fn tier_rewards_ordered(principal in 0.0f64..1e9) {
        let results = project_all_tiers(principal).unwrap();
        prop_assert_eq!(results.len(), 3);
        prop_assert!(results[1].projected_reward_tokens <= results[2].projected_reward_tokens);
    }
}
