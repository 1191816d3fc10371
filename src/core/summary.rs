use crate::core::impact::ImpactResult;
use crate::core::modifiers::Modifier;
use crate::input::{ImpactConfig, SavingsBasis};
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// How long it takes for the savings from a set of measures to cover their capital cost.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaybackPeriod {
    Years(f64),
    /// Annual savings were zero so a payback period cannot be calculated.
    NoSavings,
}

impl PaybackPeriod {
    pub fn calculate(capital_cost: f64, annual_savings: f64) -> Self {
        if annual_savings != 0. {
            Self::Years(capital_cost / annual_savings)
        } else {
            Self::NoSavings
        }
    }

    pub fn years(&self) -> Option<f64> {
        match self {
            Self::Years(years) => Some(*years),
            Self::NoSavings => None,
        }
    }
}

impl Display for PaybackPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Years(years) => write!(f, "{years:.1} years"),
            Self::NoSavings => write!(f, "no savings"),
        }
    }
}

// Serialised as a plain number of years, or the string "no savings"
impl Serialize for PaybackPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Years(years) => serializer.serialize_f64(*years),
            Self::NoSavings => serializer.serialize_str("no savings"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SummaryStats {
    pub baseline_total_spend: f64,
    pub baseline_total_emissions: f64,
    pub modified_total_spend: f64,
    pub modified_total_emissions: f64,
    pub capital_cost: f64,
    pub annual_savings: f64,
    pub savings_basis: SavingsBasis,
    pub payback_period_years: PaybackPeriod,
}

impl SummaryStats {
    pub fn calculate(impact: &ImpactResult, modifiers: &[Modifier], config: &ImpactConfig) -> Self {
        let baseline_total_spend = impact.baseline_spend().total();
        let baseline_total_emissions = impact.baseline_emissions().total();
        let modified_total_spend = impact.modified_spend().total();
        let modified_total_emissions = impact.modified_emissions().total();

        let annual_savings = match config.savings_basis {
            SavingsBasis::Emissions => baseline_total_emissions - modified_total_emissions,
            SavingsBasis::Spend => baseline_total_spend - modified_total_spend,
        };
        let capital_cost = modifiers
            .iter()
            .map(|modifier| modifier.capital_cost(config))
            .sum::<f64>();

        Self {
            baseline_total_spend,
            baseline_total_emissions,
            modified_total_spend,
            modified_total_emissions,
            capital_cost,
            annual_savings,
            savings_basis: config.savings_basis,
            payback_period_years: PaybackPeriod::calculate(capital_cost, annual_savings),
        }
    }

    /// Change in total spend from the baseline, or None if there was no change.
    pub fn spend_delta(&self) -> Option<f64> {
        non_zero(self.modified_total_spend - self.baseline_total_spend)
    }

    /// Change in total emissions from the baseline, or None if there was no change.
    pub fn emissions_delta(&self) -> Option<f64> {
        non_zero(self.modified_total_emissions - self.baseline_total_emissions)
    }
}

fn non_zero(value: f64) -> Option<f64> {
    (value != 0.).then_some(value)
}

impl Display for SummaryStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Total Spend: £ {:.2}", self.modified_total_spend)?;
        if let Some(delta) = self.spend_delta() {
            write!(f, " ({delta:+.2})")?;
        }
        writeln!(f)?;
        write!(
            f,
            "Total Emissions: {:.2} kg CO2e",
            self.modified_total_emissions
        )?;
        if let Some(delta) = self.emissions_delta() {
            write!(f, " ({delta:+.2})")?;
        }
        writeln!(f)?;
        // the payback line is left out entirely when there are no savings
        if let PaybackPeriod::Years(_) = self.payback_period_years {
            writeln!(f, "Payback Period: {}", self.payback_period_years)?;
        }

        Ok(())
    }
}
