pub mod comparison;
pub mod core;
pub mod errors;
pub mod input;
pub mod output;
pub mod read_consumption_file;

pub use crate::core::engine::ImpactEngine;
pub use crate::core::impact::ImpactResult;
pub use crate::core::modifiers::Modifier;
pub use crate::core::summary::{PaybackPeriod, SummaryStats};
use crate::core::units::{
    Month, KG_CO2E_UNIT, KILOWATT_HOUR_UNIT, POUNDS_STERLING_UNIT, RATIO_UNIT,
};
use crate::input::{ImpactConfig, SavingsBasis};
use crate::output::Output;
use crate::read_consumption_file::consumption_data_to_series;
use anyhow::Context;
use csv::WriterBuilder;
use itertools::izip;
use std::io::Read;
use strum::IntoEnumIterator;
use tracing::info;

#[derive(Clone, Debug)]
pub struct ProjectResults {
    pub impact: ImpactResult,
    pub summary: SummaryStats,
}

/// Read a baseline consumption CSV, evaluate the modifiers against it and write out the monthly
/// results and summary.
pub fn run_project(
    consumption_csv: impl Read,
    modifiers: &[Modifier],
    config: ImpactConfig,
    output: impl Output,
) -> Result<ProjectResults, anyhow::Error> {
    let baseline = consumption_data_to_series(consumption_csv)
        .context("Could not load baseline electricity consumption")?;
    let engine = ImpactEngine::new(config)?;

    let impact = engine.compute_impact(baseline.values(), modifiers)?;
    let summary = engine.compute_summary(&impact, modifiers);

    if !output.is_noop() {
        write_results_file(&output, "results", &impact)?;
        write_summary_file(&output, "results_summary", &summary)?;
    }

    Ok(ProjectResults { impact, summary })
}

fn write_results_file(
    output: &impl Output,
    output_key: &str,
    impact: &ImpactResult,
) -> Result<(), anyhow::Error> {
    info!("writing out to {output_key}");
    let writer = output.writer_for_location_key(output_key, "csv")?;
    let mut writer = WriterBuilder::new().flexible(true).from_writer(writer);

    writer.write_record([
        "Month",
        "Consumption multiplier",
        "Baseline consumption",
        "Baseline spend",
        "Baseline emissions",
        "Modified consumption",
        "Modified spend",
        "Modified emissions",
    ])?;
    writer.write_record([
        "",
        RATIO_UNIT,
        KILOWATT_HOUR_UNIT,
        POUNDS_STERLING_UNIT,
        KG_CO2E_UNIT,
        KILOWATT_HOUR_UNIT,
        POUNDS_STERLING_UNIT,
        KG_CO2E_UNIT,
    ])?;

    for (month, multiplier, base_kwh, base_spend, base_emissions, kwh, spend, emissions) in izip!(
        Month::iter(),
        impact.combined_multiplier().iter(),
        impact.baseline_consumption().iter(),
        impact.baseline_spend().iter(),
        impact.baseline_emissions().iter(),
        impact.modified_consumption().iter(),
        impact.modified_spend().iter(),
        impact.modified_emissions().iter(),
    ) {
        let mut row = vec![month.to_string()];
        row.extend(
            [
                multiplier,
                base_kwh,
                base_spend,
                base_emissions,
                kwh,
                spend,
                emissions,
            ]
            .map(|val| val.to_string()),
        );
        writer.write_record(&row)?;
    }

    writer.flush()?;

    Ok(())
}

fn write_summary_file(
    output: &impl Output,
    output_key: &str,
    summary: &SummaryStats,
) -> Result<(), anyhow::Error> {
    info!("writing out to {output_key}");
    let writer = output.writer_for_location_key(output_key, "csv")?;
    let mut writer = WriterBuilder::new().from_writer(writer);

    let savings_unit = match summary.savings_basis {
        SavingsBasis::Emissions => KG_CO2E_UNIT,
        SavingsBasis::Spend => POUNDS_STERLING_UNIT,
    };
    let rows = [
        (
            "Baseline total spend",
            summary.baseline_total_spend.to_string(),
            POUNDS_STERLING_UNIT,
        ),
        (
            "Baseline total emissions",
            summary.baseline_total_emissions.to_string(),
            KG_CO2E_UNIT,
        ),
        (
            "Modified total spend",
            summary.modified_total_spend.to_string(),
            POUNDS_STERLING_UNIT,
        ),
        (
            "Modified total emissions",
            summary.modified_total_emissions.to_string(),
            KG_CO2E_UNIT,
        ),
        (
            "Capital cost",
            summary.capital_cost.to_string(),
            POUNDS_STERLING_UNIT,
        ),
        (
            "Annual savings",
            summary.annual_savings.to_string(),
            savings_unit,
        ),
        (
            "Payback period",
            match summary.payback_period_years {
                PaybackPeriod::Years(years) => years.to_string(),
                no_savings => no_savings.to_string(),
            },
            "[years]",
        ),
    ];

    writer.write_record(["Statistic", "Value", "Units"])?;
    for (statistic, value, units) in rows {
        writer.write_record([statistic, value.as_str(), units])?;
    }

    writer.flush()?;

    Ok(())
}
