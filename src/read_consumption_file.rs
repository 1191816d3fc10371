use crate::core::series::MonthlySeries;
use crate::core::units::Month;
use crate::errors::ConsumptionFileError;
use serde::Deserialize;
use std::io::Read;
use std::str::FromStr;

/// A row of a baseline electricity consumption file. Other columns (e.g. spend or emissions
/// already worked out at some other tariff) are ignored, as these are derived here from
/// consumption.
#[derive(Debug, Deserialize)]
struct ConsumptionRow {
    #[serde(default, rename = "Month", alias = "month", alias = "")]
    month: Option<String>,
    elec_consumption_kwh: f64,
}

/// Read a year of monthly consumption from CSV with a header row, one row per month from
/// January to December.
///
/// The file has to contain exactly twelve rows. Where a month column is present its values have
/// to name the months in calendar order.
pub fn consumption_data_to_series(file: impl Read) -> Result<MonthlySeries, ConsumptionFileError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let mut consumption = vec![];
    for (row_idx, result) in reader.deserialize::<ConsumptionRow>().enumerate() {
        let row = result?;
        if let Some(month_name) = row.month.as_deref().filter(|name| !name.is_empty()) {
            let expected = Month::from_index(row_idx);
            if Month::from_str(month_name).ok() != expected || expected.is_none() {
                return Err(ConsumptionFileError::MonthOutOfOrder {
                    row: row_idx + 1,
                    found: month_name.to_string(),
                    expected: expected
                        .map(|month| month.to_string())
                        .unwrap_or_else(|| "no further months".to_string()),
                });
            }
        }
        consumption.push(row.elec_consumption_kwh);
    }

    Ok(MonthlySeries::from_slice(&consumption)?)
}
