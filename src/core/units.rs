use serde::{Deserialize, Serialize};
use strum::EnumCount;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

pub const MONTHS_PER_YEAR: usize = Month::COUNT;

pub const KILOWATT_HOUR_UNIT: &str = "[kWh]";
pub const POUNDS_STERLING_UNIT: &str = "[GBP]";
pub const KG_CO2E_UNIT: &str = "[kg CO2e]";
pub const RATIO_UNIT: &str = "[ratio]";

/// Calendar months in series order, January first.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    EnumCountMacro,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Serialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        use strum::IntoEnumIterator;
        Self::iter().nth(index)
    }
}
