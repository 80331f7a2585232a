// Date windows relative to the newest period present in the dataset.
use crate::types::{AccidentRecord, Period};
use std::iter;
use std::ops::RangeInclusive;

/// Newest period in `records`, or [`Period::SENTINEL`] when there are none.
pub fn latest_period(records: &[AccidentRecord]) -> Period {
    records
        .iter()
        .map(|r| r.period)
        .max()
        .unwrap_or(Period::SENTINEL)
}

/// `n` consecutive months ending at `latest`, newest first.
pub fn last_n_months(latest: Period, n: usize) -> Vec<Period> {
    iter::successors(Some(latest), |p| Some(p.previous()))
        .take(n)
        .collect()
}

/// The `n` calendar years ending at the year of `latest`, as an inclusive
/// range. Empty for `n == 0`; clamps at `i32::MIN` for very large `n`.
pub fn last_n_years(latest: Period, n: usize) -> RangeInclusive<i32> {
    let last = latest.year();
    if n == 0 {
        return 1..=0;
    }
    let span = i64::try_from(n - 1).unwrap_or(i64::MAX);
    let first = i64::from(last)
        .saturating_sub(span)
        .max(i64::from(i32::MIN));
    i32::try_from(first).unwrap_or(i32::MIN)..=last
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record;

    fn p(s: &str) -> Period {
        s.parse().unwrap()
    }

    #[test]
    fn latest_of_empty_is_sentinel() {
        assert_eq!(latest_period(&[]).to_string(), "0000-00");
    }

    #[test]
    fn latest_is_lexical_maximum() {
        let data = vec![
            record("2022-11", "A", "Auto", None, 1),
            record("2023-02", "B", "Auto", None, 1),
            record("2022-12", "C", "Auto", None, 1),
        ];
        let expected = data.iter().map(|r| r.period.to_string()).max().unwrap();
        assert_eq!(latest_period(&data).to_string(), expected);
        assert_eq!(expected, "2023-02");
    }

    #[test]
    fn months_roll_over_year_boundary() {
        let months: Vec<String> = last_n_months(p("2023-01"), 3)
            .iter()
            .map(Period::to_string)
            .collect();
        assert_eq!(months, vec!["2023-01", "2022-12", "2022-11"]);
    }

    #[test]
    fn months_are_consecutive_and_exact_length() {
        for n in [1, 2, 12, 13, 30] {
            let months = last_n_months(p("2020-03"), n);
            assert_eq!(months.len(), n);
            assert_eq!(months[0], p("2020-03"));
            for pair in months.windows(2) {
                assert_eq!(pair[0].previous(), pair[1]);
                let (a, b) = (pair[0], pair[1]);
                let steps = (a.year() * 12 + a.month() as i32) - (b.year() * 12 + b.month() as i32);
                assert_eq!(steps, 1);
            }
        }
    }

    #[test]
    fn zero_months_is_empty() {
        assert!(last_n_months(p("2023-05"), 0).is_empty());
    }

    #[test]
    fn years_include_latest_year() {
        let years = last_n_years(p("2023-01"), 2);
        assert_eq!(years.clone().collect::<Vec<_>>(), vec![2022, 2023]);
        assert!(!years.contains(&2021));
        assert!(last_n_years(p("2023-01"), 0).is_empty());
        assert_eq!(last_n_years(p("2023-01"), 1), 2023..=2023);
    }

    #[test]
    fn huge_year_count_saturates() {
        let years = last_n_years(p("2023-06"), usize::MAX);
        assert_eq!(years, i32::MIN..=2023);
        assert!(years.contains(&0));
        assert!(!years.contains(&2024));
        let years = last_n_years(p("2023-06"), i32::MAX as usize + 10);
        assert_eq!(*years.start(), i32::MIN);
    }
}
