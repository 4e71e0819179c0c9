// crates/agriverse-cli/src/commands/carbon.rs
//
// `agriverse carbon` — estimate a yearly CO2 footprint and the Tree NFT
// offset that covers it.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tabled::Tabled;

use agriverse_carbon::{
    CarbonEstimator, CarbonInput, CarbonResult, EnergyInput, FoodInput, HomeInput,
    RenewablePolicy, TravelInput,
};
use agriverse_core::AgriverseError;

use super::Context;
use crate::output::{format_json, format_table, OutputFormat};

/// Carbon calculator arguments.
#[derive(Debug, Args)]
pub struct CarbonCmd {
    /// Read the form snapshot from a JSON file instead of flags.
    #[arg(
        long,
        conflicts_with_all = [
            "flights", "driving_miles", "electricity_kwh", "heating_therms",
            "meat_servings", "dairy_servings", "renewable_percent",
        ]
    )]
    input: Option<PathBuf>,

    /// Flights per year.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    flights: i64,

    /// Miles driven per month.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    driving_miles: f64,

    /// Electricity use per month, in kWh.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    electricity_kwh: f64,

    /// Heating fuel per month, in therms.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    heating_therms: f64,

    /// Meat servings per week.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    meat_servings: f64,

    /// Dairy servings per day.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    dairy_servings: f64,

    /// Share of energy from renewables, in percent (0-100).
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    renewable_percent: f64,

    /// Reject a renewable share above 100 instead of clamping it.
    #[arg(long)]
    strict: bool,
}

impl CarbonCmd {
    fn to_input(&self) -> Result<CarbonInput, Box<dyn std::error::Error>> {
        if let Some(path) = &self.input {
            let contents = fs::read_to_string(path)
                .map_err(|e| format!("Could not read {}: {}", path.display(), e))?;
            let input: CarbonInput =
                serde_json::from_str(&contents).map_err(AgriverseError::from)?;
            tracing::debug!(path = %path.display(), "loaded carbon form snapshot");
            return Ok(input);
        }

        Ok(CarbonInput {
            travel: TravelInput {
                flights_per_year: self.flights,
                driving_miles_per_month: self.driving_miles,
            },
            home: HomeInput {
                electricity_kwh_per_month: self.electricity_kwh,
                heating_therms_per_month: self.heating_therms,
            },
            food: FoodInput {
                meat_servings_per_week: self.meat_servings,
                dairy_servings_per_day: self.dairy_servings,
            },
            energy: EnergyInput {
                renewable_percent: self.renewable_percent,
            },
        })
    }
}

/// A row in the emissions table.
#[derive(Tabled)]
struct EmissionRow {
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "t CO2/yr")]
    tons: String,
}

/// Run the carbon command.
pub fn run(cmd: &CarbonCmd, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let result = estimate(cmd, ctx)?;
    println!("{}", render(&result, ctx.output));
    Ok(())
}

fn estimate(cmd: &CarbonCmd, ctx: &Context) -> Result<CarbonResult, Box<dyn std::error::Error>> {
    let policy = if cmd.strict {
        RenewablePolicy::Strict
    } else {
        ctx.renewable_policy
    };

    let input = cmd.to_input()?;
    Ok(CarbonEstimator::new(policy).estimate(&input)?)
}

fn render(result: &CarbonResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(result),
        OutputFormat::Table => {
            let b = &result.breakdown;
            let rows = [
                EmissionRow {
                    category: "Travel",
                    tons: format!("{:.3}", b.travel),
                },
                EmissionRow {
                    category: "Home",
                    tons: format!("{:.3}", b.home),
                },
                EmissionRow {
                    category: "Food",
                    tons: format!("{:.3}", b.food),
                },
                EmissionRow {
                    category: "Renewable energy",
                    tons: format!("-{:.3}", b.energy_reduction),
                },
                EmissionRow {
                    category: "Net total",
                    tons: format!("{:.3}", result.total_emissions_tons_per_year),
                },
            ];
            format!(
                "{}\n\nTrees needed:          {}\nEstimated offset cost: ${}",
                format_table(&rows),
                result.trees_needed,
                result.estimated_cost_usd
            )
        }
    }
}
