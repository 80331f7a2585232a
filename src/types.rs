use crate::error::PeriodError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tabled::Tabled;

/// Bucket name used for records without a fuel type.
pub const FUEL_UNKNOWN: &str = "Unknown";

/// One object of the external JSON array. Field names are fixed by the
/// upstream data source.
#[derive(Debug, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "jahr_monat")]
    pub period: String,
    #[serde(rename = "gemeinde")]
    pub municipality: String,
    #[serde(rename = "fahrzeugart")]
    pub vehicle_type: String,
    #[serde(rename = "treibstoff")]
    pub fuel_type: Option<String>,
    #[serde(rename = "anzahl")]
    pub quantity: u64,
}

/// A calendar year-month.
///
/// Field order makes the derived `Ord` chronological, which matches the
/// lexical order of the zero-padded `YYYY-MM` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Stands in for "no data"; sorts before every real period.
    pub const SENTINEL: Period = Period { year: 0, month: 0 };

    pub fn new(year: i32, month: u32) -> Option<Period> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Period { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    #[cfg(test)]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The calendar month immediately before this one.
    pub fn previous(&self) -> Period {
        if self.month <= 1 {
            Period {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Period {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(PeriodError::Format(s.to_string()));
        }
        let year: i32 = s[..4]
            .parse()
            .map_err(|_| PeriodError::Format(s.to_string()))?;
        let month: u32 = s[5..]
            .parse()
            .map_err(|_| PeriodError::Format(s.to_string()))?;
        Period::new(year, month).ok_or_else(|| PeriodError::Month(s.to_string()))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccidentRecord {
    pub period: Period,
    pub municipality: String,
    pub vehicle_type: String,
    pub fuel_type: Option<String>,
    pub quantity: u64,
}

impl AccidentRecord {
    pub fn new(
        period: Period,
        municipality: impl Into<String>,
        vehicle_type: impl Into<String>,
        fuel_type: Option<String>,
        quantity: u64,
    ) -> Self {
        AccidentRecord {
            period,
            municipality: municipality.into(),
            vehicle_type: vehicle_type.into(),
            fuel_type,
            quantity,
        }
    }

    /// Fuel type for grouping; null or empty values fall into [`FUEL_UNKNOWN`].
    pub fn fuel_label(&self) -> &str {
        match self.fuel_type.as_deref() {
            Some(f) if !f.is_empty() => f,
            _ => FUEL_UNKNOWN,
        }
    }
}

impl TryFrom<RawRecord> for AccidentRecord {
    type Error = PeriodError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let period = raw.period.parse()?;
        Ok(AccidentRecord::new(
            period,
            raw.municipality,
            raw.vehicle_type,
            raw.fuel_type,
            raw.quantity,
        ))
    }
}

#[derive(Debug, Tabled, Clone)]
pub struct TotalRow {
    #[tabled(rename = "Kategorie")]
    pub label: String,
    #[tabled(rename = "Fahrzeuge")]
    pub total_quantity: String,
}

#[derive(Debug, Tabled, Clone)]
pub struct MunicipalityRankingRow {
    #[tabled(rename = "Rang")]
    pub rank: usize,
    #[tabled(rename = "Gemeinde")]
    pub municipality: String,
    #[tabled(rename = "Fahrzeuge")]
    pub total_quantity: String,
}

#[cfg(test)]
pub(crate) fn record(
    period: &str,
    municipality: &str,
    vehicle_type: &str,
    fuel_type: Option<&str>,
    quantity: u64,
) -> AccidentRecord {
    AccidentRecord::new(
        period.parse().unwrap(),
        municipality,
        vehicle_type,
        fuel_type.map(str::to_string),
        quantity,
    )
}
