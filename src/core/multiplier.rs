use crate::core::modifiers::Modifier;
use crate::core::series::MonthlySeries;
use crate::errors::ImpactError;
use crate::input::ImpactConfig;

/// Combine monthly multipliers into one by taking their product month by month.
/// No multipliers gives all ones, i.e. consumption is unchanged.
pub fn combine_multipliers<'a>(
    multipliers: impl IntoIterator<Item = &'a MonthlySeries>,
) -> MonthlySeries {
    multipliers
        .into_iter()
        .fold(MonthlySeries::uniform(1.), |total, new| {
            total.zip_with(new, |total, new| total * new)
        })
}

/// Convert each modifier to its multiplier through the catalog and combine them all.
pub fn combined_multiplier_for_modifiers(
    modifiers: &[Modifier],
    config: &ImpactConfig,
) -> Result<MonthlySeries, ImpactError> {
    let multipliers = modifiers
        .iter()
        .filter_map(|modifier| modifier.consumption_multiplier(config).transpose())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(combine_multipliers(&multipliers))
}
