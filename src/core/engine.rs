use crate::core::impact::ImpactResult;
use crate::core::modifiers::Modifier;
use crate::core::multiplier::combined_multiplier_for_modifiers;
use crate::core::series::MonthlySeries;
use crate::core::summary::SummaryStats;
use crate::errors::ImpactError;
use crate::input::ImpactConfig;
use tracing::{debug, instrument};

/// Evaluates a selection of green measures against a baseline year of electricity consumption.
///
/// Every call recalculates from scratch; nothing is cached between calls.
#[derive(Clone, Debug, Default)]
pub struct ImpactEngine {
    config: ImpactConfig,
}

impl ImpactEngine {
    pub fn new(config: ImpactConfig) -> Result<Self, ImpactError> {
        config.validated()?;

        Ok(Self { config })
    }

    pub fn config(&self) -> &ImpactConfig {
        &self.config
    }

    /// Calculate modified consumption, spend and emissions for each month.
    ///
    /// Arguments:
    /// * `baseline_consumption` - monthly electricity consumption in kWh, January to December.
    ///                            Anything other than exactly 12 finite values is rejected.
    /// * `modifiers` - the selected measures; order does not affect the result
    #[instrument(skip_all)]
    pub fn compute_impact(
        &self,
        baseline_consumption: &[f64],
        modifiers: &[Modifier],
    ) -> Result<ImpactResult, ImpactError> {
        let baseline_consumption = MonthlySeries::from_slice(baseline_consumption)?;
        let combined_multiplier = combined_multiplier_for_modifiers(modifiers, &self.config)?;
        debug!(?modifiers, ?combined_multiplier, "combined modifier multipliers");

        Ok(ImpactResult::calculate(
            baseline_consumption,
            combined_multiplier,
            self.config.unit_price,
            self.config.unit_emissions_factor,
        ))
    }

    /// Total up an impact result and work out the payback period of the measures.
    pub fn compute_summary(&self, impact: &ImpactResult, modifiers: &[Modifier]) -> SummaryStats {
        let summary = SummaryStats::calculate(impact, modifiers, &self.config);
        debug!(
            annual_savings = summary.annual_savings,
            capital_cost = summary.capital_cost,
            "calculated summary statistics"
        );

        summary
    }
}
