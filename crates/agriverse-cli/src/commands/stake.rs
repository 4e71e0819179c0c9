// crates/agriverse-cli/src/commands/stake.rs
//
// `agriverse stake {estimate, tiers}` — staking reward projections.

use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use agriverse_economics::{
    project_all_tiers, Av, StakingEstimator, StakingInput, StakingResult, StakingTier,
};

use super::Context;
use crate::output::{format_json, format_table, OutputFormat};

/// Staking subcommands.
#[derive(Debug, Subcommand)]
pub enum StakeCmd {
    /// Project the reward for staking AV tokens in one tier.
    Estimate {
        /// Amount of AV to stake.
        #[arg(long, allow_negative_numbers = true)]
        principal: f64,
        /// Lock-up period in days: 0 (flexible), 30, or 90.
        #[arg(long, default_value_t = 0)]
        period_days: u32,
    },
    /// Show the rate table, optionally with projections for a principal.
    Tiers {
        /// Amount of AV to project across every tier.
        #[arg(long, allow_negative_numbers = true)]
        principal: Option<f64>,
    },
}

/// A row in the staking tables.
#[derive(Tabled)]
struct TierRow {
    #[tabled(rename = "Tier")]
    tier: &'static str,
    #[tabled(rename = "APR")]
    apr: String,
    /// Days the reward accrues over; the flexible tier is annualized.
    #[tabled(rename = "Accrual days")]
    days: u32,
    #[tabled(rename = "Principal")]
    principal: String,
    #[tabled(rename = "Projected reward")]
    reward: String,
}

impl TierRow {
    fn from_result(result: &StakingResult) -> Self {
        Self {
            tier: result.tier.label(),
            apr: format!("{}%", result.annual_rate_percent),
            days: result.effective_days,
            principal: Av::from_tokens(result.principal).to_string(),
            reward: Av::from_tokens(result.projected_reward_tokens).to_string(),
        }
    }

    fn rate_only(tier: StakingTier) -> Self {
        Self {
            tier: tier.label(),
            apr: format!("{}%", tier.annual_rate_percent()),
            days: tier.effective_days(),
            principal: "-".to_string(),
            reward: "-".to_string(),
        }
    }
}

/// Run the stake subcommand.
pub fn run(cmd: &StakeCmd, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let out = match cmd {
        StakeCmd::Estimate {
            principal,
            period_days,
        } => {
            let result = StakingEstimator::new().estimate(&StakingInput {
                principal: *principal,
                period_days: *period_days,
            })?;
            render_results(&[result], ctx.output)
        }
        StakeCmd::Tiers { principal: Some(p) } => {
            render_results(&project_all_tiers(*p)?, ctx.output)
        }
        StakeCmd::Tiers { principal: None } => render_rates(ctx.output),
    };
    println!("{}", out);
    Ok(())
}

fn render_results(results: &[StakingResult], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json if results.len() == 1 => format_json(&results[0]),
        OutputFormat::Json => format_json(&results),
        OutputFormat::Table => {
            let rows: Vec<TierRow> = results.iter().map(TierRow::from_result).collect();
            format_table(&rows)
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RateEntry {
    tier: StakingTier,
    period_days: u32,
    annual_rate_percent: u32,
}

fn render_rates(format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let entries: Vec<RateEntry> = StakingTier::ALL
                .iter()
                .map(|t| RateEntry {
                    tier: *t,
                    period_days: t.period_days(),
                    annual_rate_percent: t.annual_rate_percent(),
                })
                .collect();
            format_json(&entries)
        }
        OutputFormat::Table => {
            let rows: Vec<TierRow> = StakingTier::ALL
                .iter()
                .map(|t| TierRow::rate_only(*t))
                .collect();
            format_table(&rows)
        }
    }
}
