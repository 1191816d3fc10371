use crate::core::modifiers::Modifier;
use crate::core::series::MonthlySeries;
use crate::errors::ImpactError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_valid::Validate;
use std::io::Read;

pub fn ingest_config(json: impl Read) -> anyhow::Result<ImpactConfig> {
    let config: ImpactConfig =
        serde_json::from_reader(json).context("Could not parse impact configuration JSON")?;
    config.validated()?;

    Ok(config)
}

/// Read a JSON array of modifier selections, e.g. `[{"name": "solar_panels", "value": 3}]`.
///
/// Selections with names that aren't in the catalog are dropped (see [`Modifier::from_selection`]).
pub fn ingest_modifiers(json: impl Read) -> anyhow::Result<Vec<Modifier>> {
    let selections: Vec<ModifierSelection> =
        serde_json::from_reader(json).context("Could not parse modifier selections JSON")?;

    Ok(Modifier::from_selections(&selections)?)
}

/// A raw modifier selection as handed over by an input-collection layer.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModifierSelection {
    pub name: String,
    pub value: Value,
}

impl ModifierSelection {
    pub fn new(name: &str, value: impl Into<Value>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

/// How a solar panel count is turned into monthly consumption multipliers.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolarStrategy {
    /// A single per-panel saving applied equally to every month.
    Uniform,
    /// A per-panel saving curve that follows solar irradiance through the year.
    #[default]
    Seasonal,
}

/// Which totals the annual saving used for the payback period is taken from.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsBasis {
    /// Reduction in annual emissions (kg CO2e). Note that this is divided into a capital cost in
    /// pounds, so the resulting "years" are not a true financial payback.
    #[default]
    Emissions,
    /// Reduction in annual spend (GBP).
    Spend,
}

pub const DEFAULT_SOLAR_SAVING_CURVE: [f64; 12] = [
    0.009, 0.014, 0.024, 0.033, 0.041, 0.045, 0.046, 0.039, 0.029, 0.019, 0.011, 0.008,
];

/// Tariff, emissions and measure assumptions used for a calculation.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct ImpactConfig {
    /// electricity price in GBP/kWh
    #[validate(minimum = 0.)]
    pub unit_price: f64,
    /// electricity emissions factor in kg CO2e/kWh
    #[validate(minimum = 0.)]
    pub unit_emissions_factor: f64,
    pub solar_strategy: SolarStrategy,
    /// fraction of consumption saved per panel under the uniform strategy
    #[validate(minimum = 0.)]
    #[validate(maximum = 1.)]
    pub saving_per_solar_panel: f64,
    /// per-panel factor for each month under the seasonal strategy, scaled by the panel count
    /// to give the fraction of consumption retained
    pub solar_saving_curve: MonthlySeries,
    #[validate(minimum = 0.)]
    #[validate(maximum = 1.)]
    pub led_saving: f64,
    /// capital cost in GBP per solar panel
    #[validate(minimum = 0.)]
    pub cost_per_solar_panel: f64,
    /// flat capital cost in GBP of switching to LED lighting
    #[validate(minimum = 0.)]
    pub led_lighting_cost: f64,
    pub savings_basis: SavingsBasis,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            unit_price: 0.25,
            unit_emissions_factor: 0.3,
            solar_strategy: Default::default(),
            saving_per_solar_panel: 0.1,
            solar_saving_curve: MonthlySeries::new(DEFAULT_SOLAR_SAVING_CURVE),
            led_saving: 0.05,
            cost_per_solar_panel: 300.,
            led_lighting_cost: 200.,
            savings_basis: Default::default(),
        }
    }
}

impl ImpactConfig {
    /// Check the configured values make sense, i.e. no negative prices or costs and savings
    /// fractions between 0 and 1.
    pub fn validated(&self) -> Result<&Self, ImpactError> {
        self.validate()
            .map_err(|errors| ImpactError::InvalidConfig(errors.to_string()))?;
        if let Some(value) = self
            .solar_saving_curve
            .iter()
            .find(|value| !(0. ..=1.).contains(*value))
        {
            return Err(ImpactError::InvalidConfig(format!(
                "solar saving curve values must be between 0 and 1, found {value}"
            )));
        }

        Ok(self)
    }
}
