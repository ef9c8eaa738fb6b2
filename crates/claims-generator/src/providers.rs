//! Bounded random money amounts and calendar dates.
//!
//! Every provider takes the RNG and the reference date explicitly so that a
//! seeded `StdRng` and a fixed `today` give reproducible output.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};

/// Days counted per year for age and look-back arithmetic. Leap days are ignored.
pub const DAYS_PER_YEAR: i64 = 365;

/// How far back a policy start date may lie.
pub const POLICY_LOOKBACK_YEARS: i64 = 5;

/// Probability that a generated policy has an end date.
pub const END_DATE_PROBABILITY: f64 = 0.30;

/// Fractional digits used when sampling before truncation to cents.
const SAMPLE_SCALE: u32 = 6;

/// Truncate toward zero to two decimal places.
pub fn truncate_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::ToZero)
}

/// Uniform exact decimal in `[min, max]` at [`SAMPLE_SCALE`] digits.
fn sample_decimal<R: Rng>(rng: &mut R, min: Decimal, max: Decimal) -> Decimal {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };

    let mut low_scaled = low;
    low_scaled.rescale(SAMPLE_SCALE);
    let mut high_scaled = high;
    high_scaled.rescale(SAMPLE_SCALE);

    let raw = rng.gen_range(low_scaled.mantissa()..=high_scaled.mantissa());
    Decimal::from_i128_with_scale(raw, SAMPLE_SCALE)
}

/// Random currency amount in `[min, max]`, truncated (never rounded) to cents.
///
/// Inverted bounds are swapped.
pub fn random_money<R: Rng>(rng: &mut R, min: Decimal, max: Decimal) -> Decimal {
    truncate_cents(sample_decimal(rng, min, max))
}

/// Uniform date in `[start, end]`, both inclusive. Collapses to `start` when `end < start`.
pub fn random_date_between<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days();
    if span <= 0 {
        return start;
    }
    start + Duration::days(rng.gen_range(0..=span))
}

/// Date of birth such that the age on `today` lies in `[min_age, max_age]` years.
pub fn random_date_of_birth<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
    min_age: u32,
    max_age: u32,
) -> NaiveDate {
    let earliest = today - Duration::days(i64::from(max_age) * DAYS_PER_YEAR);
    let latest = today - Duration::days(i64::from(min_age) * DAYS_PER_YEAR);
    random_date_between(rng, earliest, latest)
}

/// Start date within the look-back window and, with [`END_DATE_PROBABILITY`], an end date.
pub fn random_policy_dates<R: Rng>(rng: &mut R, today: NaiveDate) -> (NaiveDate, Option<NaiveDate>) {
    let earliest = today - Duration::days(POLICY_LOOKBACK_YEARS * DAYS_PER_YEAR);
    let start = random_date_between(rng, earliest, today);

    if rng.gen_bool(END_DATE_PROBABILITY) {
        let end = random_date_between(rng, start, today);
        (start, Some(end))
    } else {
        (start, None)
    }
}

/// Service date inside the policy window `[start, end or today]`.
///
/// An upper bound before `start` collapses the window to `start`.
pub fn random_service_date<R: Rng>(
    rng: &mut R,
    start: NaiveDate,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> NaiveDate {
    let upper = end.unwrap_or(today).max(start);
    random_date_between(rng, start, upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_random_money_in_range_with_two_places() {
        let mut rng = StdRng::seed_from_u64(42);
        let min = Decimal::new(1000, 2);
        let max = Decimal::new(500000, 2);

        for _ in 0..10_000 {
            let value = random_money(&mut rng, min, max);
            assert!(value >= min && value <= max, "{value} out of range");
            assert!(value.scale() <= 2, "{value} has more than two places");
        }
    }

    #[test]
    fn test_truncation_never_rounds_up() {
        let mut rng = StdRng::seed_from_u64(7);
        let min = Decimal::new(1, 2);
        let max = Decimal::new(99999, 2);

        for _ in 0..10_000 {
            let raw = sample_decimal(&mut rng, min, max);
            let truncated = truncate_cents(raw);
            assert!(truncated <= raw.round_dp(2));
            assert!(truncated <= raw);
            assert!(raw - truncated < Decimal::new(1, 2));
        }
    }

    #[test]
    fn test_truncate_cents() {
        assert_eq!(truncate_cents(Decimal::new(1999999, 5)).to_string(), "19.99");
        assert_eq!(truncate_cents(Decimal::new(5, 3)).to_string(), "0.00");
        assert_eq!(truncate_cents(Decimal::new(1234, 2)).to_string(), "12.34");
    }

    #[test]
    fn test_random_money_degenerate_and_inverted_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        let point = Decimal::new(4250, 2);
        assert_eq!(random_money(&mut rng, point, point), point);

        let low = Decimal::new(100, 2);
        let high = Decimal::new(200, 2);
        for _ in 0..100 {
            let value = random_money(&mut rng, high, low);
            assert!(value >= low && value <= high);
        }
    }

    #[test]
    fn test_random_money_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let min = Decimal::new(500000, 2);
        let max = Decimal::new(20000000, 2);

        for _ in 0..10 {
            assert_eq!(
                random_money(&mut rng1, min, max),
                random_money(&mut rng2, min, max)
            );
        }
    }

    #[test]
    fn test_random_date_of_birth_age_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let today = today();

        for _ in 0..1_000 {
            let dob = random_date_of_birth(&mut rng, today, 0, 85);
            let age_days = (today - dob).num_days();
            assert!((0..=85 * DAYS_PER_YEAR).contains(&age_days));
        }

        for _ in 0..1_000 {
            let dob = random_date_of_birth(&mut rng, today, 18, 20);
            let age_days = (today - dob).num_days();
            assert!((18 * DAYS_PER_YEAR..=20 * DAYS_PER_YEAR).contains(&age_days));
        }
    }

    #[test]
    fn test_random_policy_dates_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let today = today();
        let earliest = today - Duration::days(POLICY_LOOKBACK_YEARS * DAYS_PER_YEAR);
        let mut with_end = 0;

        for _ in 0..10_000 {
            let (start, end) = random_policy_dates(&mut rng, today);
            assert!(start >= earliest && start <= today);
            if let Some(end) = end {
                with_end += 1;
                assert!(end >= start && end <= today);
            }
        }

        // Expect roughly 30% with an end date
        let fraction = with_end as f64 / 10_000.0;
        assert!((0.27..=0.33).contains(&fraction), "fraction was {fraction}");
    }

    #[test]
    fn test_random_service_date_within_policy() {
        let mut rng = StdRng::seed_from_u64(42);
        let today = today();
        let start = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();

        for _ in 0..1_000 {
            let closed = random_service_date(&mut rng, start, Some(end), today);
            assert!(closed >= start && closed <= end);

            let open = random_service_date(&mut rng, start, None, today);
            assert!(open >= start && open <= today);
        }
    }

    #[test]
    fn test_random_service_date_inverted_window_collapses_to_start() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = NaiveDate::from_ymd_opt(2023, 5, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();

        for _ in 0..100 {
            assert_eq!(random_service_date(&mut rng, start, Some(end), today()), start);
        }

        // A start date after today with no end date collapses the same way
        let future = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert_eq!(random_service_date(&mut rng, future, None, today()), future);
    }
}
