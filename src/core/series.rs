use crate::core::units::{Month, MONTHS_PER_YEAR};
use crate::errors::SeriesError;
use fsum::FSum;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A value for each calendar month, January first.
///
/// The length is fixed by the type, so a series can only be built from exactly twelve values.
/// Non-negativity is not enforced here: a consumption series is only physically meaningful when
/// all of its values are >= 0, but that is for callers to care about.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct MonthlySeries([f64; MONTHS_PER_YEAR]);

impl MonthlySeries {
    pub fn new(values: [f64; MONTHS_PER_YEAR]) -> Self {
        Self(values)
    }

    /// Build a series from a slice, failing if it does not hold exactly twelve finite values.
    pub fn from_slice(values: &[f64]) -> Result<Self, SeriesError> {
        let values: [f64; MONTHS_PER_YEAR] = values
            .try_into()
            .map_err(|_| SeriesError::WrongLength(values.len()))?;
        if let Some((index, value)) = values
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(SeriesError::NonFinite {
                index,
                value: *value,
            });
        }

        Ok(Self(values))
    }

    /// A series with the same value in every month.
    pub fn uniform(value: f64) -> Self {
        Self([value; MONTHS_PER_YEAR])
    }

    pub fn values(&self) -> &[f64; MONTHS_PER_YEAR] {
        &self.0
    }

    pub fn get(&self, month: Month) -> f64 {
        self.0[month.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }

    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self(self.0.map(f))
    }

    /// Combine two series month by month.
    pub fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self(std::array::from_fn(|idx| f(self.0[idx], other.0[idx])))
    }

    /// Sum over the year.
    pub fn total(&self) -> f64 {
        FSum::with_all(self.0.iter()).value()
    }
}

impl Index<usize> for MonthlySeries {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Index<Month> for MonthlySeries {
    type Output = f64;

    fn index(&self, month: Month) -> &Self::Output {
        &self.0[month.index()]
    }
}

impl TryFrom<Vec<f64>> for MonthlySeries {
    type Error = SeriesError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

impl From<MonthlySeries> for Vec<f64> {
    fn from(series: MonthlySeries) -> Self {
        series.0.to_vec()
    }
}

impl From<[f64; MONTHS_PER_YEAR]> for MonthlySeries {
    fn from(values: [f64; MONTHS_PER_YEAR]) -> Self {
        Self(values)
    }
}
