#[cfg(test)]
mod tests {
    use crate::errors::{CalculatorError, Error};
    use crate::forecasts::{
        spread_revenue, ForecastService, ForecastServiceTrait, RevenueForecast,
        RevenueForecastRepositoryTrait,
    };
    use crate::utils::period::Period;
    use async_trait::async_trait;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    #[test]
    fn spreads_evenly_divisible_value() {
        let slices = spread_revenue(dec!(1200.00), Period::new(2026, 1), 12).unwrap();

        assert_eq!(slices.len(), 12);
        assert!(slices.iter().all(|s| s.amount == dec!(100.00)));
        assert_eq!(slices[0].period, Period::new(2026, 1));
        assert_eq!(slices[11].period, Period::new(2026, 12));
    }

    #[test]
    fn periods_are_consecutive_across_year_end() {
        let slices = spread_revenue(dec!(900), Period::new(2025, 11), 4).unwrap();
        let periods: Vec<Period> = slices.iter().map(|s| s.period).collect();
        assert_eq!(
            periods,
            vec![
                Period::new(2025, 11),
                Period::new(2025, 12),
                Period::new(2026, 1),
                Period::new(2026, 2),
            ]
        );
    }

    #[test]
    fn does_not_correct_rounding_drift_in_final_month() {
        // 100 / 3 rounds to 33.33 per month; the emitted total is 99.99.
        let slices = spread_revenue(dec!(100.00), Period::new(2026, 1), 3).unwrap();
        assert!(slices.iter().all(|s| s.amount == dec!(33.33)));

        let total: Decimal = slices.iter().map(|s| s.amount).sum();
        assert_eq!(total, dec!(99.99));
    }

    #[test]
    fn rejects_zero_months() {
        let result = spread_revenue(dec!(1000), Period::new(2026, 1), 0);
        assert!(matches!(
            result,
            Err(Error::Calculation(CalculatorError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn single_month_spread_is_the_rounded_value() {
        let slices = spread_revenue(dec!(1234.567), Period::new(2026, 4), 1).unwrap();
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].amount, dec!(1234.57));
    }

    proptest! {
        #[test]
        fn emitted_sum_stays_within_drift_bound(
            cents in 0i64..=100_000_000,
            months in 1u32..=60,
            start_month in 1u32..=12,
        ) {
            let total_value = Decimal::new(cents, 2);
            let slices =
                spread_revenue(total_value, Period::new(2026, start_month), months).unwrap();

            prop_assert_eq!(slices.len(), months as usize);

            let mut expected = Period::new(2026, start_month);
            for slice in &slices {
                prop_assert_eq!(slice.period, expected);
                expected = expected.next();
            }

            let sum: Decimal = slices.iter().map(|s| s.amount).sum();
            let drift = (sum - total_value).abs();
            let bound = dec!(0.005) * Decimal::from(months);
            prop_assert!(drift <= bound, "drift {} exceeds bound {}", drift, bound);
        }
    }

    // --- Mock forecast repository ---
    struct MockForecastRepository {
        forecasts: Vec<RevenueForecast>,
    }

    #[async_trait]
    impl RevenueForecastRepositoryTrait for MockForecastRepository {
        async fn get_revenue_forecasts(&self) -> crate::errors::Result<Vec<RevenueForecast>> {
            Ok(self.forecasts.clone())
        }
    }

    fn forecast(id: &str, value: Decimal, start: Period, months: u32) -> RevenueForecast {
        RevenueForecast {
            id: id.to_string(),
            client_id: format!("client-{}", id),
            total_value: value,
            start,
            months_to_spread: months,
        }
    }

    #[tokio::test]
    async fn schedule_merges_overlapping_forecasts() {
        let repository = Arc::new(MockForecastRepository {
            forecasts: vec![
                forecast("a", dec!(1200), Period::new(2026, 1), 12),
                forecast("b", dec!(600), Period::new(2026, 6), 2),
            ],
        });
        let service = ForecastService::new(repository);

        let schedule = service.monthly_schedule().await.unwrap();

        assert_eq!(schedule.len(), 12);
        assert_eq!(schedule[&Period::new(2026, 5)], dec!(100.00));
        assert_eq!(schedule[&Period::new(2026, 6)], dec!(400.00));
        assert_eq!(schedule[&Period::new(2026, 7)], dec!(400.00));
        assert_eq!(schedule[&Period::new(2026, 8)], dec!(100.00));
    }

    #[tokio::test]
    async fn schedule_is_empty_without_forecasts() {
        let service = Arc::new(ForecastService::new(Arc::new(MockForecastRepository {
            forecasts: vec![],
        })));
        assert!(service.monthly_schedule().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn schedule_is_deterministic_for_identical_snapshots() {
        let repository = Arc::new(MockForecastRepository {
            forecasts: vec![forecast("a", dec!(1000), Period::new(2026, 1), 3)],
        });
        let service = ForecastService::new(repository);

        let first = service.monthly_schedule().await.unwrap();
        let second = service.monthly_schedule().await.unwrap();
        assert_eq!(first, second);
    }
}
