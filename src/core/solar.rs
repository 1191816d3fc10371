use crate::core::series::MonthlySeries;
use crate::input::{ImpactConfig, SolarStrategy};

/// This module contains the models that turn a number of solar panels into monthly consumption
/// multipliers.
pub trait SolarPanelModel {
    /// Return the fraction of baseline consumption retained in each month with `n_panels`
    /// panels fitted.
    fn consumption_multiplier(&self, n_panels: u32) -> MonthlySeries;
}

/// Each panel saves the same fraction of consumption in every month.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformSolarModel {
    saving_per_panel: f64,
}

impl UniformSolarModel {
    pub fn new(saving_per_panel: f64) -> Self {
        Self { saving_per_panel }
    }
}

impl SolarPanelModel for UniformSolarModel {
    fn consumption_multiplier(&self, n_panels: u32) -> MonthlySeries {
        let saving_all_panels = self.saving_per_panel * n_panels as f64;
        MonthlySeries::uniform(1. - saving_all_panels)
    }
}

/// A fixed per-panel curve over the year, peaking in summer, scaled linearly by panel count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeasonalSolarModel {
    saving_curve: MonthlySeries,
}

impl SeasonalSolarModel {
    pub fn new(saving_curve: MonthlySeries) -> Self {
        Self { saving_curve }
    }
}

impl SolarPanelModel for SeasonalSolarModel {
    fn consumption_multiplier(&self, n_panels: u32) -> MonthlySeries {
        self.saving_curve.map(|per_panel| per_panel * n_panels as f64)
    }
}

/// The model selected by a configuration's solar strategy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfiguredSolarModel {
    Uniform(UniformSolarModel),
    Seasonal(SeasonalSolarModel),
}

impl From<&ImpactConfig> for ConfiguredSolarModel {
    fn from(config: &ImpactConfig) -> Self {
        match config.solar_strategy {
            SolarStrategy::Uniform => {
                Self::Uniform(UniformSolarModel::new(config.saving_per_solar_panel))
            }
            SolarStrategy::Seasonal => {
                Self::Seasonal(SeasonalSolarModel::new(config.solar_saving_curve))
            }
        }
    }
}

impl SolarPanelModel for ConfiguredSolarModel {
    fn consumption_multiplier(&self, n_panels: u32) -> MonthlySeries {
        match self {
            Self::Uniform(model) => model.consumption_multiplier(n_panels),
            Self::Seasonal(model) => model.consumption_multiplier(n_panels),
        }
    }
}
