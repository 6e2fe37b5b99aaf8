#[cfg(test)]
mod tests {
    use crate::config::{monthly_overhead_or_default, ConfigSeries, OverheadConfig};
    use crate::errors::{Error, ValidationError};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn overhead(
        id: &str,
        from: NaiveDate,
        to: Option<NaiveDate>,
        amount: Decimal,
    ) -> OverheadConfig {
        OverheadConfig {
            id: id.to_string(),
            effective_from: from,
            effective_to: to,
            monthly_amount: amount,
        }
    }

    #[test]
    fn accepts_disjoint_records_in_any_order() {
        let series = ConfigSeries::new(vec![
            overhead(
                "b",
                date(2026, 1, 1),
                None,
                dec!(4500),
            ),
            overhead(
                "a",
                date(2025, 1, 1),
                Some(date(2025, 12, 31)),
                dec!(4200),
            ),
        ])
        .unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn rejects_overlapping_bounded_records() {
        let result = ConfigSeries::new(vec![
            overhead("a", date(2025, 1, 1), Some(date(2025, 6, 30)), dec!(4200)),
            overhead("b", date(2025, 6, 1), Some(date(2025, 12, 31)), dec!(4500)),
        ]);
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::OverlappingIntervals(_, _)))
        ));
    }

    #[test]
    fn rejects_open_ended_record_followed_by_a_later_one() {
        let result = ConfigSeries::new(vec![
            overhead("a", date(2025, 1, 1), None, dec!(4200)),
            overhead("b", date(2026, 1, 1), None, dec!(4500)),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn lookup_is_inclusive_on_both_bounds() {
        let series = ConfigSeries::new(vec![overhead(
            "a",
            date(2025, 1, 1),
            Some(date(2025, 12, 31)),
            dec!(4200),
        )])
        .unwrap();

        assert!(series.lookup(date(2025, 1, 1)).is_some());
        assert!(series.lookup(date(2025, 12, 31)).is_some());
        assert!(series.lookup(date(2024, 12, 31)).is_none());
        assert!(series.lookup(date(2026, 1, 1)).is_none());
    }

    #[test]
    fn lookup_open_ended_record_covers_any_later_date() {
        let series = ConfigSeries::new(vec![overhead(
            "a",
            date(2025, 1, 1),
            None,
            dec!(4800),
        )])
        .unwrap();

        let hit = series.lookup(date(2040, 6, 15)).unwrap();
        assert_eq!(hit.monthly_amount, dec!(4800));
    }

    #[test]
    fn lookup_misses_in_a_gap_between_records() {
        let series = ConfigSeries::new(vec![
            overhead("a", date(2025, 1, 1), Some(date(2025, 3, 31)), dec!(4000)),
            overhead("b", date(2025, 7, 1), None, dec!(4600)),
        ])
        .unwrap();

        assert!(series.lookup(date(2025, 5, 15)).is_none());
    }

    #[test]
    fn overhead_falls_back_to_default_when_uncovered() {
        let series = ConfigSeries::new(vec![]).unwrap();
        assert_eq!(
            monthly_overhead_or_default(&series, date(2026, 2, 1)),
            dec!(4200)
        );

        let series = ConfigSeries::new(vec![overhead(
            "a",
            date(2026, 1, 1),
            None,
            dec!(5100),
        )])
        .unwrap();
        assert_eq!(
            monthly_overhead_or_default(&series, date(2026, 2, 1)),
            dec!(5100)
        );
    }
}
