// crates/agriverse-carbon/src/input.rs
//
// Form snapshot consumed by the carbon estimator. Field names serialize in
// camelCase so a JSON snapshot of the web form deserializes directly.

use serde::{Deserialize, Serialize};

/// Travel habits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelInput {
    /// Signed so that a negative count from a form snapshot reaches
    /// validation and is reported against this field.
    pub flights_per_year: i64,
    pub driving_miles_per_month: f64,
}

/// Household energy use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomeInput {
    pub electricity_kwh_per_month: f64,
    pub heating_therms_per_month: f64,
}

/// Diet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodInput {
    pub meat_servings_per_week: f64,
    pub dairy_servings_per_day: f64,
}

/// Share of household energy sourced from renewables, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnergyInput {
    pub renewable_percent: f64,
}

/// Complete carbon calculator input. Missing sections default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonInput {
    pub travel: TravelInput,
    pub home: HomeInput,
    pub food: FoodInput,
    pub energy: EnergyInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_snapshot() {
        let json = r#"{
            "travel": { "flightsPerYear": 2, "drivingMilesPerMonth": 500 },
            "home": { "electricityKwhPerMonth": 300, "heatingThermsPerMonth": 150 },
            "food": { "meatServingsPerWeek": 3, "dairyServingsPerDay": 2 },
            "energy": { "renewablePercent": 50 }
        }"#;
        let input: CarbonInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.travel.flights_per_year, 2);
        assert_eq!(input.home.heating_therms_per_month, 150.0);
        assert_eq!(input.energy.renewable_percent, 50.0);
    }

    #[test]
    fn test_missing_sections_default_to_zero() {
        let input: CarbonInput =
            serde_json::from_str(r#"{ "travel": { "flightsPerYear": 4 } }"#).unwrap();
        assert_eq!(input.travel.flights_per_year, 4);
        assert_eq!(input.travel.driving_miles_per_month, 0.0);
        assert_eq!(input.food, FoodInput::default());
    }

    #[test]
    fn test_negative_flight_count_parses_for_validation() {
        let input: CarbonInput =
            serde_json::from_str(r#"{ "travel": { "flightsPerYear": -1 } }"#).unwrap();
        assert_eq!(input.travel.flights_per_year, -1);
    }
}
