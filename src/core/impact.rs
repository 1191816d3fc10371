use crate::core::series::MonthlySeries;
use crate::core::units::Month;
use indexmap::IndexMap;
use serde::Serialize;
use strum::IntoEnumIterator;

/// This module contains the calculation of modified consumption, spend and emissions.

/// Baseline and modified electricity figures for each month of a year. Once calculated, an
/// impact result is not changed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactResult {
    baseline_consumption: MonthlySeries,
    baseline_spend: MonthlySeries,
    baseline_emissions: MonthlySeries,
    combined_multiplier: MonthlySeries,
    modified_consumption: MonthlySeries,
    modified_spend: MonthlySeries,
    modified_emissions: MonthlySeries,
}

/// The figures in an [`ImpactResult`] for a single month.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MonthlyImpact {
    pub baseline_consumption: f64,
    pub baseline_spend: f64,
    pub baseline_emissions: f64,
    pub modified_consumption: f64,
    pub modified_spend: f64,
    pub modified_emissions: f64,
}

impl ImpactResult {
    /// Apply a combined multiplier to baseline consumption (in kWh), then derive spend (GBP) and
    /// emissions (kg CO2e) for both the baseline and the modified consumption.
    pub fn calculate(
        baseline_consumption: MonthlySeries,
        combined_multiplier: MonthlySeries,
        unit_price: f64,
        unit_emissions_factor: f64,
    ) -> Self {
        let modified_consumption =
            baseline_consumption.zip_with(&combined_multiplier, |baseline, multiplier| {
                baseline * multiplier
            });

        Self {
            baseline_consumption,
            baseline_spend: baseline_consumption.map(|kwh| kwh * unit_price),
            baseline_emissions: baseline_consumption.map(|kwh| kwh * unit_emissions_factor),
            combined_multiplier,
            modified_consumption,
            modified_spend: modified_consumption.map(|kwh| kwh * unit_price),
            modified_emissions: modified_consumption.map(|kwh| kwh * unit_emissions_factor),
        }
    }

    pub fn baseline_consumption(&self) -> &MonthlySeries {
        &self.baseline_consumption
    }

    pub fn baseline_spend(&self) -> &MonthlySeries {
        &self.baseline_spend
    }

    pub fn baseline_emissions(&self) -> &MonthlySeries {
        &self.baseline_emissions
    }

    pub fn combined_multiplier(&self) -> &MonthlySeries {
        &self.combined_multiplier
    }

    pub fn modified_consumption(&self) -> &MonthlySeries {
        &self.modified_consumption
    }

    pub fn modified_spend(&self) -> &MonthlySeries {
        &self.modified_spend
    }

    pub fn modified_emissions(&self) -> &MonthlySeries {
        &self.modified_emissions
    }

    pub fn month(&self, month: Month) -> MonthlyImpact {
        MonthlyImpact {
            baseline_consumption: self.baseline_consumption[month],
            baseline_spend: self.baseline_spend[month],
            baseline_emissions: self.baseline_emissions[month],
            modified_consumption: self.modified_consumption[month],
            modified_spend: self.modified_spend[month],
            modified_emissions: self.modified_emissions[month],
        }
    }

    /// All figures keyed by month, in calendar order.
    pub fn by_month(&self) -> IndexMap<Month, MonthlyImpact> {
        Month::iter().map(|month| (month, self.month(month))).collect()
    }
}
