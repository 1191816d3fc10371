use crate::core::series::MonthlySeries;
use crate::core::solar::{ConfiguredSolarModel, SolarPanelModel};
use crate::core::units::Month;
use crate::errors::ImpactError;
use crate::input::{ImpactConfig, ModifierSelection};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use strum_macros::{Display as DisplayMacro, EnumString};
use tracing::warn;

/// The catalog of green measures a household can select.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "name", content = "value", rename_all = "snake_case")]
pub enum Modifier {
    /// Number of solar panels fitted.
    SolarPanels(u32),
    /// Whether lighting has been switched to LED.
    LedLighting(bool),
}

#[derive(Clone, Copy, Debug, DisplayMacro, EnumString, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum ModifierKind {
    SolarPanels,
    LedLighting,
}

impl Modifier {
    /// Interpret a raw selection.
    ///
    /// Returns `Ok(None)` for names that aren't in the catalog, which are ignored rather than
    /// treated as errors. Values of the wrong shape for a known name (including negative or fractional panel
    /// counts) are rejected.
    pub fn from_selection(selection: &ModifierSelection) -> Result<Option<Self>, ImpactError> {
        let Ok(kind) = ModifierKind::from_str(&selection.name) else {
            warn!(name = %selection.name, "ignoring unrecognised modifier");
            return Ok(None);
        };

        let modifier = match kind {
            ModifierKind::SolarPanels => Self::SolarPanels(panel_count(&selection.value)?),
            ModifierKind::LedLighting => match selection.value {
                Value::Bool(enabled) => Self::LedLighting(enabled),
                ref other => {
                    return Err(ImpactError::invalid_modifier(
                        &selection.name,
                        format!("expected true or false, found {other}"),
                    ))
                }
            },
        };

        Ok(Some(modifier))
    }

    pub fn from_selections(selections: &[ModifierSelection]) -> Result<Vec<Self>, ImpactError> {
        selections
            .iter()
            .filter_map(|selection| Self::from_selection(selection).transpose())
            .collect()
    }

    /// The selection shown on the page where an action has already been chosen: every measure
    /// present but switched off.
    pub fn all_disabled() -> Vec<Self> {
        vec![Self::SolarPanels(0), Self::LedLighting(false)]
    }

    pub(crate) fn kind(&self) -> ModifierKind {
        match self {
            Self::SolarPanels(_) => ModifierKind::SolarPanels,
            Self::LedLighting(_) => ModifierKind::LedLighting,
        }
    }

    /// Monthly fraction of baseline consumption retained with this measure in place.
    ///
    /// A selection of zero panels retains everything, whichever solar model is in use.
    pub fn consumption_multiplier(
        &self,
        config: &ImpactConfig,
    ) -> Result<Option<MonthlySeries>, ImpactError> {
        let multiplier = match *self {
            Self::SolarPanels(0) => return Ok(None),
            Self::SolarPanels(n_panels) => {
                ConfiguredSolarModel::from(config).consumption_multiplier(n_panels)
            }
            Self::LedLighting(enabled) => calculate_led_lighting(enabled, config.led_saving),
        };

        if let Some((idx, value)) = multiplier
            .iter()
            .enumerate()
            .find(|(_, value)| !(0. ..=1.).contains(*value))
        {
            return Err(ImpactError::ModifierOutOfRange {
                modifier: self.to_string(),
                month: Month::from_index(idx)
                    .map(|month| month.to_string())
                    .unwrap_or_default(),
                multiplier: *value,
            });
        }

        Ok(Some(multiplier))
    }

    /// Up-front cost in GBP of putting this measure in place.
    pub fn capital_cost(&self, config: &ImpactConfig) -> f64 {
        match *self {
            Self::SolarPanels(n_panels) => config.cost_per_solar_panel * n_panels as f64,
            Self::LedLighting(true) => config.led_lighting_cost,
            Self::LedLighting(false) => 0.,
        }
    }
}

impl Display for Modifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SolarPanels(n_panels) => write!(f, "{}={n_panels}", self.kind()),
            Self::LedLighting(enabled) => write!(f, "{}={enabled}", self.kind()),
        }
    }
}

pub fn calculate_led_lighting(led_lighting: bool, led_saving: f64) -> MonthlySeries {
    let saving = if led_lighting { led_saving } else { 0. };
    MonthlySeries::uniform(1. - saving)
}

fn panel_count(value: &Value) -> Result<u32, ImpactError> {
    let name = ModifierKind::SolarPanels.to_string();
    match value {
        Value::Number(number) => {
            if let Some(count) = number.as_u64() {
                return u32::try_from(count)
                    .map_err(|_| ImpactError::invalid_modifier(&name, "panel count is too large"));
            }
            match number.as_f64() {
                Some(count) if count >= 0. && count.fract() == 0. && count <= u32::MAX as f64 => {
                    Ok(count as u32)
                }
                Some(count) if count < 0. => Err(ImpactError::invalid_modifier(
                    &name,
                    format!("panel count cannot be negative, found {number}"),
                )),
                _ => Err(ImpactError::invalid_modifier(
                    &name,
                    format!("panel count must be a whole number, found {number}"),
                )),
            }
        }
        other => Err(ImpactError::invalid_modifier(
            &name,
            format!("expected a panel count, found {other}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::SolarStrategy;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::json;

    #[fixture]
    fn uniform_config() -> ImpactConfig {
        ImpactConfig {
            solar_strategy: SolarStrategy::Uniform,
            ..Default::default()
        }
    }

    #[rstest]
    fn should_return_all_ones_for_led_lighting_off() {
        assert_eq!(calculate_led_lighting(false, 0.05), MonthlySeries::uniform(1.));
    }

    #[rstest]
    fn should_return_uniform_saving_for_led_lighting_on() {
        let multiplier = calculate_led_lighting(true, 0.05);
        for value in multiplier.iter() {
            assert_relative_eq!(*value, 0.95);
        }
    }

    #[rstest]
    #[case(json!({"name": "solar_panels", "value": 4}), Some(Modifier::SolarPanels(4)))]
    #[case(json!({"name": "led_lighting", "value": true}), Some(Modifier::LedLighting(true)))]
    #[case(json!({"name": "heat_pump", "value": 1}), None)]
    #[case(json!({"name": "Solar_Panels", "value": 1}), None)]
    fn should_interpret_selections(#[case] selection: Value, #[case] expected: Option<Modifier>) {
        let selection: ModifierSelection = serde_json::from_value(selection).unwrap();
        assert_eq!(Modifier::from_selection(&selection).unwrap(), expected);
    }

    #[rstest]
    #[case(ModifierSelection::new("solar_panels", -2))]
    #[case(ModifierSelection::new("solar_panels", 2.5))]
    #[case(ModifierSelection::new("solar_panels", true))]
    #[case(ModifierSelection::new("solar_panels", "3"))]
    #[case(ModifierSelection::new("led_lighting", 1))]
    fn should_reject_invalid_values(#[case] selection: ModifierSelection) {
        assert!(matches!(
            Modifier::from_selection(&selection),
            Err(ImpactError::InvalidModifier { .. })
        ));
    }

    #[rstest]
    fn should_name_negative_panel_count_in_error() {
        let error = Modifier::from_selection(&ModifierSelection::new("solar_panels", -2))
            .unwrap_err()
            .to_string();
        assert!(error.contains("cannot be negative"), "{error}");
    }

    #[rstest]
    fn should_contribute_nothing_for_zero_panels(uniform_config: ImpactConfig) {
        assert_eq!(
            Modifier::SolarPanels(0)
                .consumption_multiplier(&uniform_config)
                .unwrap(),
            None
        );
        assert_eq!(
            Modifier::SolarPanels(0)
                .consumption_multiplier(&ImpactConfig::default())
                .unwrap(),
            None
        );
    }

    #[rstest]
    fn should_use_configured_solar_strategy(uniform_config: ImpactConfig) {
        let uniform = Modifier::SolarPanels(3)
            .consumption_multiplier(&uniform_config)
            .unwrap()
            .unwrap();
        assert_relative_eq!(uniform[Month::January], 0.7, max_relative = 1e-12);
        assert_relative_eq!(uniform[Month::July], 0.7, max_relative = 1e-12);

        let seasonal = Modifier::SolarPanels(3)
            .consumption_multiplier(&ImpactConfig::default())
            .unwrap()
            .unwrap();
        assert_relative_eq!(seasonal[Month::January], 0.027, max_relative = 1e-12);
    }

    #[rstest]
    fn should_reject_uniform_saving_above_total_consumption(uniform_config: ImpactConfig) {
        assert!(matches!(
            Modifier::SolarPanels(11).consumption_multiplier(&uniform_config),
            Err(ImpactError::ModifierOutOfRange { .. })
        ));
    }

    #[rstest]
    fn should_reject_seasonal_multiplier_above_one() {
        let error = Modifier::SolarPanels(22)
            .consumption_multiplier(&ImpactConfig::default())
            .unwrap_err();
        assert!(matches!(
            error,
            ImpactError::ModifierOutOfRange { ref month, .. } if month == "July"
        ));
    }

    #[rstest]
    fn should_cost_measures() {
        let config = ImpactConfig::default();
        assert_eq!(Modifier::SolarPanels(4).capital_cost(&config), 1200.);
        assert_eq!(Modifier::LedLighting(true).capital_cost(&config), 200.);
        assert_eq!(Modifier::LedLighting(false).capital_cost(&config), 0.);
    }

    #[rstest]
    fn should_deserialize_typed_modifiers() {
        let modifiers: Vec<Modifier> = serde_json::from_value(json!([
            {"name": "solar_panels", "value": 2},
            {"name": "led_lighting", "value": false},
        ]))
        .unwrap();
        assert_eq!(
            modifiers,
            vec![Modifier::SolarPanels(2), Modifier::LedLighting(false)]
        );
    }

    #[rstest]
    fn should_display_modifier_with_catalog_name() {
        assert_eq!(Modifier::SolarPanels(5).to_string(), "solar_panels=5");
        assert_eq!(Modifier::LedLighting(true).to_string(), "led_lighting=true");
    }
}
