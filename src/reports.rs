use crate::aggregate::{filter_by_periods, filter_by_years_and_municipality, group_by, sum_by, Buckets};
use crate::rank::{rank_descending, Ranked};
use crate::types::AccidentRecord;
use crate::window::{last_n_months, last_n_years, latest_period};
use tracing::debug;

/// Months covered by the "latest accidents" report.
pub const LATEST_WINDOW_MONTHS: usize = 2;
/// Years covered by the municipality history offered in the menu.
pub const HISTORY_YEARS: usize = 2;

/// Records from the newest [`LATEST_WINDOW_MONTHS`] months, grouped by municipality.
pub fn latest_accidents_by_municipality(
    data: &[AccidentRecord],
) -> Buckets<&str, Vec<&AccidentRecord>> {
    let latest = latest_period(data);
    let months = last_n_months(latest, LATEST_WINDOW_MONTHS);
    let recent = filter_by_periods(data, &months);
    let grouped = group_by(recent, |r| r.municipality.as_str());
    debug!(%latest, municipalities = grouped.len(), "latest accidents window");
    grouped
}

/// Records of one municipality within the newest `n_years` calendar years.
/// An unknown municipality yields an empty list.
pub fn accidents_in_municipality_over_years<'a>(
    data: &'a [AccidentRecord],
    municipality: &str,
    n_years: usize,
) -> Vec<&'a AccidentRecord> {
    let years = last_n_years(latest_period(data), n_years);
    let found = filter_by_years_and_municipality(data, &years, municipality);
    debug!(municipality, n_years, records = found.len(), "municipality history");
    found
}

pub fn quantity_by_vehicle_type(data: &[AccidentRecord]) -> Buckets<&str, u64> {
    sum_by(data, |r| r.vehicle_type.as_str(), |r| r.quantity)
}

pub fn ranked_quantity_by_municipality(data: &[AccidentRecord]) -> Vec<Ranked<&str>> {
    let totals = sum_by(data, |r| r.municipality.as_str(), |r| r.quantity);
    rank_descending(&totals)
}

/// Totals per fuel type; missing fuel types are pooled under "Unknown".
pub fn quantity_by_fuel_type(data: &[AccidentRecord]) -> Buckets<&str, u64> {
    sum_by(data, |r| r.fuel_label(), |r| r.quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{record, FUEL_UNKNOWN};

    fn sample() -> Vec<AccidentRecord> {
        vec![
            record("2023-03", "Liestal", "Personenwagen", Some("Benzin"), 2),
            record("2023-02", "Grellingen", "Motorrad", None, 1),
            record("2023-01", "Liestal", "Personenwagen", Some("Diesel"), 4),
            record("2023-03", "Grellingen", "Lieferwagen", Some("Unknown"), 3),
            record("2022-06", "Grellingen", "Personenwagen", Some(""), 5),
            record("2021-12", "Grellingen", "Motorrad", Some("Benzin"), 6),
            record("2023-02", "Allschwil", "Personenwagen", Some("Benzin"), 9),
        ]
    }

    #[test]
    fn latest_window_has_no_leakage() {
        let data = sample();
        let grouped = latest_accidents_by_municipality(&data);
        let periods: Vec<String> = grouped
            .iter()
            .flat_map(|(_, recs)| recs.iter().map(|r| r.period.to_string()))
            .collect();
        assert_eq!(periods.len(), 4);
        assert!(periods.iter().all(|p| p == "2023-03" || p == "2023-02"));
        assert_eq!(
            grouped.keys().copied().collect::<Vec<_>>(),
            vec!["Liestal", "Grellingen", "Allschwil"]
        );
        assert_eq!(grouped.get("Grellingen").map(Vec::len), Some(2));
    }

    #[test]
    fn latest_window_of_empty_dataset_is_empty() {
        assert!(latest_accidents_by_municipality(&[]).is_empty());
    }

    #[test]
    fn municipality_history_covers_requested_years() {
        let data = sample();
        let two = accidents_in_municipality_over_years(&data, "Grellingen", 2);
        assert_eq!(two.iter().map(|r| r.quantity).collect::<Vec<_>>(), vec![1, 3, 5]);
        let three = accidents_in_municipality_over_years(&data, "Grellingen", 3);
        assert_eq!(three.len(), 4);
    }

    #[test]
    fn unknown_municipality_is_empty() {
        let data = sample();
        assert!(accidents_in_municipality_over_years(&data, "Atlantis", HISTORY_YEARS).is_empty());
        assert!(accidents_in_municipality_over_years(&data, "grellingen", HISTORY_YEARS).is_empty());
    }

    #[test]
    fn vehicle_totals() {
        let data = sample();
        let totals = quantity_by_vehicle_type(&data);
        assert_eq!(totals.get("Personenwagen"), Some(&20));
        assert_eq!(totals.get("Motorrad"), Some(&7));
        assert_eq!(totals.get("Lieferwagen"), Some(&3));
    }

    #[test]
    fn municipality_ranking() {
        let data = sample();
        let ranked = ranked_quantity_by_municipality(&data);
        let got: Vec<(usize, &str, u64)> = ranked.iter().map(|r| (r.rank, r.key, r.value)).collect();
        assert_eq!(
            got,
            vec![(1, "Grellingen", 15), (2, "Allschwil", 9), (3, "Liestal", 6)]
        );
    }

    #[test]
    fn ranking_ties_follow_first_appearance() {
        let data = vec![
            record("2023-01", "Liestal", "Personenwagen", None, 1),
            record("2023-01", "Allschwil", "Personenwagen", None, 8),
            record("2023-01", "Grellingen", "Motorrad", None, 8),
            record("2023-02", "Laufen", "Motorrad", None, 2),
            record("2023-02", "Liestal", "Lieferwagen", None, 7),
        ];
        let ranked = ranked_quantity_by_municipality(&data);
        let got: Vec<(usize, &str, u64)> = ranked.iter().map(|r| (r.rank, r.key, r.value)).collect();
        assert_eq!(
            got,
            vec![
                (1, "Liestal", 8),
                (2, "Allschwil", 8),
                (3, "Grellingen", 8),
                (4, "Laufen", 2),
            ]
        );
    }

    #[test]
    fn whitespace_fuel_keeps_its_own_bucket() {
        let data = vec![
            record("2023-01", "Liestal", "Personenwagen", Some(" "), 2),
            record("2023-01", "Liestal", "Personenwagen", None, 3),
        ];
        let totals = quantity_by_fuel_type(&data);
        assert_eq!(totals.get(" "), Some(&2));
        assert_eq!(totals.get(FUEL_UNKNOWN), Some(&3));
    }

    #[test]
    fn history_accepts_any_year_count() {
        let data = sample();
        assert_eq!(accidents_in_municipality_over_years(&data, "Grellingen", usize::MAX).len(), 4);
        assert!(accidents_in_municipality_over_years(&data, "Grellingen", 0).is_empty());
    }

    #[test]
    fn null_and_blank_fuel_merge_with_literal_unknown() {
        let data = sample();
        let totals = quantity_by_fuel_type(&data);
        assert_eq!(totals.get(FUEL_UNKNOWN), Some(&9));
        assert_eq!(totals.get("Benzin"), Some(&17));
        assert_eq!(totals.get("Diesel"), Some(&4));
        assert_eq!(totals.len(), 3);
    }

    #[test]
    fn reports_are_idempotent() {
        let data = sample();
        let before = data.clone();
        assert_eq!(latest_accidents_by_municipality(&data), latest_accidents_by_municipality(&data));
        assert_eq!(
            accidents_in_municipality_over_years(&data, "Liestal", 2),
            accidents_in_municipality_over_years(&data, "Liestal", 2)
        );
        assert_eq!(quantity_by_vehicle_type(&data), quantity_by_vehicle_type(&data));
        assert_eq!(ranked_quantity_by_municipality(&data), ranked_quantity_by_municipality(&data));
        assert_eq!(quantity_by_fuel_type(&data), quantity_by_fuel_type(&data));
        assert_eq!(data, before);
    }
}
