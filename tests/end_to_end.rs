use approx::assert_relative_eq;
use green_measures::core::units::Month;
use green_measures::input::{ingest_modifiers, ImpactConfig, SavingsBasis, SolarStrategy};
use green_measures::output::SinkOutput;
use green_measures::{run_project, ImpactEngine, Modifier, PaybackPeriod};
use pretty_assertions::assert_eq;
use rstest::*;
use strum::IntoEnumIterator;

#[fixture]
fn baseline() -> Vec<f64> {
    vec![
        400., 380., 350., 300., 280., 250., 600., 260., 290., 330., 370., 410.,
    ]
}

#[rstest]
fn should_evaluate_five_panels_with_seasonal_model(baseline: Vec<f64>) {
    let engine = ImpactEngine::default();
    let modifiers = ingest_modifiers(
        r#"[{"name": "solar_panels", "value": 5}, {"name": "led_lighting", "value": false}]"#
            .as_bytes(),
    )
    .unwrap();
    assert_eq!(
        modifiers,
        vec![Modifier::SolarPanels(5), Modifier::LedLighting(false)]
    );

    let impact = engine.compute_impact(&baseline, &modifiers).unwrap();

    let expected_consumption = [
        18., 26.6, 42., 49.5, 57.4, 56.25, 138., 50.7, 42.05, 31.35, 20.35, 16.4,
    ];
    assert_eq!(impact.modified_consumption().values().len(), 12);
    for month in Month::iter() {
        let consumption = impact.modified_consumption()[month];
        assert_relative_eq!(
            consumption,
            expected_consumption[month.index()],
            max_relative = 1e-9
        );
        assert_eq!(impact.modified_spend()[month], consumption * 0.25);
        assert_eq!(impact.modified_emissions()[month], consumption * 0.3);
    }
    assert_relative_eq!(impact.modified_spend()[0], 4.5, max_relative = 1e-12);

    let summary = engine.compute_summary(&impact, &modifiers);
    assert_relative_eq!(summary.baseline_total_spend, 1055., max_relative = 1e-12);
    assert_relative_eq!(summary.baseline_total_emissions, 1266., max_relative = 1e-12);
    assert_relative_eq!(summary.modified_total_spend, 137.15, max_relative = 1e-9);
    assert_relative_eq!(summary.modified_total_emissions, 164.58, max_relative = 1e-9);
    assert_eq!(summary.capital_cost, 1500.);
    assert_relative_eq!(
        summary.payback_period_years.years().unwrap(),
        1500. / (1266. - 164.58),
        max_relative = 1e-9
    );
}

#[rstest]
fn should_give_no_savings_for_zero_panels_and_led_off(
    baseline: Vec<f64>,
    #[values(SolarStrategy::Uniform, SolarStrategy::Seasonal)] solar_strategy: SolarStrategy,
    #[values(SavingsBasis::Emissions, SavingsBasis::Spend)] savings_basis: SavingsBasis,
) {
    let engine = ImpactEngine::new(ImpactConfig {
        solar_strategy,
        savings_basis,
        ..Default::default()
    })
    .unwrap();
    let modifiers = Modifier::all_disabled();
    let impact = engine.compute_impact(&baseline, &modifiers).unwrap();
    let summary = engine.compute_summary(&impact, &modifiers);

    assert_eq!(summary.payback_period_years, PaybackPeriod::NoSavings);
    assert_eq!(summary.payback_period_years.to_string(), "no savings");
}

#[rstest]
fn should_give_same_result_in_any_modifier_order(baseline: Vec<f64>) {
    let engine = ImpactEngine::default();
    let forwards = [Modifier::SolarPanels(3), Modifier::LedLighting(true)];
    let backwards = [Modifier::LedLighting(true), Modifier::SolarPanels(3)];

    assert_eq!(
        engine.compute_impact(&baseline, &forwards).unwrap(),
        engine.compute_impact(&baseline, &backwards).unwrap()
    );
}

#[rstest]
fn should_reject_project_with_negative_panel_count() {
    assert!(ingest_modifiers(r#"[{"name": "solar_panels", "value": -1}]"#.as_bytes()).is_err());
}

#[rstest]
fn should_run_project_from_csv(baseline: Vec<f64>) {
    let mut csv = String::from(",elec_consumption_kwh,elec_spend_gbp,elec_emissions_kg_co2e\n");
    for (month, kwh) in Month::iter().zip(baseline.iter()) {
        csv.push_str(&format!("{month},{kwh},0,0\n"));
    }

    let results = run_project(
        csv.as_bytes(),
        &[Modifier::SolarPanels(5)],
        ImpactConfig::default(),
        SinkOutput,
    )
    .unwrap();

    assert_relative_eq!(
        results.impact.modified_consumption()[Month::January],
        18.,
        max_relative = 1e-12
    );
}
