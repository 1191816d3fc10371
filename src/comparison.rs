use crate::core::impact::ImpactResult;
use crate::core::series::MonthlySeries;
use crate::core::units::{Month, KG_CO2E_UNIT, KILOWATT_HOUR_UNIT, POUNDS_STERLING_UNIT};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// A figure that can be compared between the baseline and the modified year.
#[derive(Clone, Copy, Debug, Deserialize, EnumIter, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Spend,
    Emissions,
    Consumption,
}

impl Metric {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Spend => "Electricity Bills (£)",
            Self::Emissions => "Electricity Emissions (kg CO₂e)",
            Self::Consumption => "Electricity Consumption (kWh)",
        }
    }

    pub fn units(&self) -> &'static str {
        match self {
            Self::Spend => POUNDS_STERLING_UNIT,
            Self::Emissions => KG_CO2E_UNIT,
            Self::Consumption => KILOWATT_HOUR_UNIT,
        }
    }

    pub fn from_display_name(display_name: &str) -> Option<Self> {
        Self::iter().find(|metric| metric.display_name() == display_name)
    }

    /// The (baseline, modified) series for this metric.
    pub fn series_pair<'a>(&self, impact: &'a ImpactResult) -> (&'a MonthlySeries, &'a MonthlySeries) {
        match self {
            Self::Spend => (impact.baseline_spend(), impact.modified_spend()),
            Self::Emissions => (impact.baseline_emissions(), impact.modified_emissions()),
            Self::Consumption => (impact.baseline_consumption(), impact.modified_consumption()),
        }
    }
}

/// Which of the two years to include in a comparison.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonView {
    #[default]
    Both,
    OriginalOnly,
    ModifiedOnly,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Original,
    Modified,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ComparisonPoint {
    pub month: Month,
    pub value: f64,
    pub kind: SeriesKind,
}

/// Flatten one metric of an impact result into points for a chart: original months first, then
/// modified months.
pub fn comparison_points(
    impact: &ImpactResult,
    metric: Metric,
    view: ComparisonView,
) -> Vec<ComparisonPoint> {
    let (original, modified) = metric.series_pair(impact);
    let points_for = |series: &MonthlySeries, kind| {
        Month::iter()
            .map(|month| ComparisonPoint {
                month,
                value: series[month],
                kind,
            })
            .collect::<Vec<_>>()
    };

    match view {
        ComparisonView::Both => {
            let mut points = points_for(original, SeriesKind::Original);
            points.extend(points_for(modified, SeriesKind::Modified));
            points
        }
        ComparisonView::OriginalOnly => points_for(original, SeriesKind::Original),
        ComparisonView::ModifiedOnly => points_for(modified, SeriesKind::Modified),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn impact() -> ImpactResult {
        ImpactResult::calculate(
            MonthlySeries::new([
                400., 380., 350., 300., 280., 250., 600., 260., 290., 330., 370., 410.,
            ]),
            MonthlySeries::uniform(0.5),
            0.25,
            0.3,
        )
    }

    #[rstest]
    fn should_give_both_years_original_first(impact: ImpactResult) {
        let points = comparison_points(&impact, Metric::Consumption, ComparisonView::Both);
        assert_eq!(points.len(), 24);
        assert_eq!(
            points[0],
            ComparisonPoint {
                month: Month::January,
                value: 400.,
                kind: SeriesKind::Original
            }
        );
        assert_eq!(
            points[18],
            ComparisonPoint {
                month: Month::July,
                value: 300.,
                kind: SeriesKind::Modified
            }
        );
    }

    #[rstest]
    #[case(ComparisonView::OriginalOnly, SeriesKind::Original)]
    #[case(ComparisonView::ModifiedOnly, SeriesKind::Modified)]
    fn should_filter_to_a_single_year(
        impact: ImpactResult,
        #[case] view: ComparisonView,
        #[case] kind: SeriesKind,
    ) {
        let points = comparison_points(&impact, Metric::Spend, view);
        assert_eq!(points.len(), 12);
        assert!(points.iter().all(|point| point.kind == kind));
    }

    #[rstest]
    fn should_pick_series_for_metric(impact: ImpactResult) {
        let (original, modified) = Metric::Spend.series_pair(&impact);
        assert_eq!(original[Month::January], 100.);
        assert_eq!(modified[Month::January], 50.);
    }

    #[rstest]
    fn should_look_up_metric_by_display_name() {
        assert_eq!(
            Metric::from_display_name("Electricity Bills (£)"),
            Some(Metric::Spend)
        );
        assert_eq!(Metric::from_display_name("Gas Bills (£)"), None);
    }
}
