use super::types::{PaymentTiming, RateConvention};

/// Rates closer than this are treated as equal when a formula would divide by
/// their difference.
pub const RATE_EPSILON: f64 = 1e-12;

pub fn pct(value: f64) -> f64 {
    value / 100.0
}

/// Converts an annual rate (fraction, not percent) to a monthly rate.
pub fn monthly_rate(annual_rate: f64, convention: RateConvention) -> f64 {
    match convention {
        RateConvention::Effective => (1.0 + annual_rate).powf(1.0 / 12.0) - 1.0,
        RateConvention::Nominal => annual_rate / 12.0,
    }
}

pub fn effective_monthly_rate(annual_rate: f64) -> f64 {
    monthly_rate(annual_rate, RateConvention::Effective)
}

pub fn compound(amount: f64, rate: f64, periods: f64) -> f64 {
    amount * (1.0 + rate).powf(periods)
}

/// `((1+i)^k - 1) / i`, falling back to `k` when `i` is zero.
pub fn annuity_factor(rate: f64, periods: u32) -> f64 {
    let k = periods as f64;
    if rate.abs() < RATE_EPSILON {
        return k;
    }
    ((1.0 + rate).powf(k) - 1.0) / rate
}

/// Future value of `periods` level payments.
pub fn annuity_future_value(payment: f64, rate: f64, periods: u32, timing: PaymentTiming) -> f64 {
    let base = payment * annuity_factor(rate, periods);
    match timing {
        PaymentTiming::Beginning => base * (1.0 + rate),
        PaymentTiming::End => base,
    }
}

/// Level payment that accumulates to `target` over `periods`.
///
/// A non-positive target needs no payment. With no periods left the whole
/// target is due immediately.
pub fn required_payment(target: f64, rate: f64, periods: u32, timing: PaymentTiming) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    if periods == 0 {
        return target;
    }
    let per_unit = annuity_future_value(1.0, rate, periods, timing);
    if per_unit <= 0.0 {
        return target;
    }
    target / per_unit
}

/// Amortizing payment (ordinary annuity) that exhausts `present_value`
/// over `periods`: `PV·i·(1+i)^k / ((1+i)^k - 1)`.
pub fn amortizing_payment(present_value: f64, rate: f64, periods: u32) -> f64 {
    if periods == 0 {
        return present_value.max(0.0);
    }
    let k = periods as f64;
    if rate.abs() < RATE_EPSILON {
        return present_value / k;
    }
    let growth = (1.0 + rate).powf(k);
    if !growth.is_finite() {
        // Horizon long enough that the payment is pure interest.
        return present_value * rate;
    }
    present_value * rate * growth / (growth - 1.0)
}

/// Present value of `years` annual payments starting at `first_payment`,
/// growing at `growth` and discounted at `discount`.
pub fn growing_annuity_present_value(
    first_payment: f64,
    growth: f64,
    discount: f64,
    years: u32,
) -> f64 {
    let n = years as f64;
    if (discount - growth).abs() < RATE_EPSILON {
        return first_payment * n;
    }
    first_payment * (1.0 - ((1.0 + growth) / (1.0 + discount)).powf(n)) / (discount - growth)
}

/// `((1+r)^n - (1+g)^n) / (r - g)`: year-end future value of a yearly
/// payment of 1 that steps up by `growth` each year.
pub fn growing_annuity_future_factor(rate: f64, growth: f64, years: u32) -> f64 {
    let n = years as f64;
    ((1.0 + rate).powf(n) - (1.0 + growth).powf(n)) / (rate - growth)
}

/// Year-end value of twelve beginning-of-month payments of 1 at the
/// effective monthly equivalent of `annual_rate`: `(r/mr)·(1+mr)`.
pub fn monthly_block_factor(annual_rate: f64) -> f64 {
    let mr = effective_monthly_rate(annual_rate);
    if mr.abs() < RATE_EPSILON {
        return 12.0;
    }
    (annual_rate / mr) * (1.0 + mr)
}

/// First-year monthly contribution that, stepping up by `step_up` every
/// year, accumulates to `target` after `years` at `annual_rate`.
pub fn growing_monthly_contribution(
    target: f64,
    annual_rate: f64,
    step_up: f64,
    years: u32,
) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    if years == 0 {
        return target;
    }
    if (annual_rate - step_up).abs() < RATE_EPSILON {
        return target / years as f64 / 12.0;
    }
    let main_factor = growing_annuity_future_factor(annual_rate, step_up, years);
    target / (main_factor * monthly_block_factor(annual_rate))
}

/// Real rate of return in percent.
pub fn real_return_pct(nominal_rate: f64, inflation: f64) -> f64 {
    ((1.0 + nominal_rate) / (1.0 + inflation) - 1.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    fn assert_approx_tol(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    #[test]
    fn effective_monthly_rate_compounds_back_to_annual() {
        let mr = effective_monthly_rate(0.12);
        assert_approx_tol((1.0 + mr).powi(12) - 1.0, 0.12, 1e-12);
        assert!(mr < 0.01);
    }

    #[test]
    fn nominal_monthly_rate_is_simple_division() {
        assert_approx_tol(monthly_rate(0.09, RateConvention::Nominal), 0.0075, 1e-15);
    }

    #[test]
    fn annuity_factor_is_payment_count_at_zero_rate() {
        assert_eq!(annuity_factor(0.0, 120), 120.0);
        assert_eq!(annuity_future_value(5_000.0, 0.0, 120, PaymentTiming::Beginning), 600_000.0);
    }

    #[test]
    fn beginning_timing_adds_one_period_of_growth() {
        let end = annuity_future_value(100.0, 0.01, 24, PaymentTiming::End);
        let begin = annuity_future_value(100.0, 0.01, 24, PaymentTiming::Beginning);
        assert_approx_tol(begin, end * 1.01, 1e-9);
    }

    #[test]
    fn required_payment_inverts_annuity_future_value() {
        let payment = required_payment(1_000_000.0, 0.008, 180, PaymentTiming::Beginning);
        let fv = annuity_future_value(payment, 0.008, 180, PaymentTiming::Beginning);
        assert_approx_tol(fv, 1_000_000.0, 1e-6);
    }

    #[test]
    fn required_payment_clamps_non_positive_targets() {
        assert_eq!(required_payment(-10.0, 0.01, 12, PaymentTiming::End), 0.0);
        assert_eq!(required_payment(0.0, 0.01, 12, PaymentTiming::End), 0.0);
        assert_eq!(required_payment(500.0, 0.01, 0, PaymentTiming::End), 500.0);
    }

    #[test]
    fn amortizing_payment_matches_reference_emi() {
        let emi = amortizing_payment(3_000_000.0, 0.0075, 240);
        assert_approx_tol(emi, 26_991.78, 0.01);
        assert_approx_tol(amortizing_payment(1_200.0, 0.0, 12), 100.0, 1e-12);
    }

    #[test]
    fn amortizing_payment_over_endless_horizon_is_interest_only() {
        assert_eq!(amortizing_payment(1_000_000.0, 0.01, u32::MAX), 10_000.0);
    }

    #[test]
    fn growing_annuity_present_value_equal_rates_is_linear() {
        assert_eq!(growing_annuity_present_value(12_000.0, 0.06, 0.06, 25), 300_000.0);
    }

    #[test]
    fn growing_annuity_present_value_without_growth_is_level_annuity() {
        let pv = growing_annuity_present_value(1_000.0, 0.0, 0.05, 10);
        let level = 1_000.0 * (1.0 - 1.05_f64.powi(-10)) / 0.05;
        assert_approx_tol(pv, level, 1e-9);
    }

    #[test]
    fn monthly_block_factor_without_return_is_twelve() {
        assert_eq!(monthly_block_factor(0.0), 12.0);
        assert!(monthly_block_factor(0.12) > 12.0);
    }

    #[test]
    fn growing_monthly_contribution_equal_rates_spreads_target_evenly() {
        assert_approx_tol(growing_monthly_contribution(240_000.0, 0.1, 0.1, 20), 1_000.0, 1e-12);
    }

    #[test]
    fn growing_monthly_contribution_reaches_target_when_replayed() {
        let target = 2_000_000.0;
        let (r, g, years) = (0.12, 0.05, 15_u32);
        let first = growing_monthly_contribution(target, r, g, years);
        let mr = effective_monthly_rate(r);

        let mut balance = 0.0;
        let mut monthly = first;
        for _year in 0..years {
            for _month in 0..12 {
                balance = (balance + monthly) * (1.0 + mr);
            }
            monthly *= 1.0 + g;
        }
        assert_approx_tol(balance, target, 1e-3);
    }

    #[test]
    fn real_return_discounts_inflation() {
        assert_approx_tol(real_return_pct(0.12, 0.07), 4.672_897_196, 1e-6);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_annuity_factor_grows_with_rate(
            rate_bp in 1u32..3000,
            bump_bp in 1u32..500,
            periods in 2u32..720
        ) {
            let low = effective_monthly_rate(rate_bp as f64 / 10_000.0);
            let high = effective_monthly_rate((rate_bp + bump_bp) as f64 / 10_000.0);
            prop_assert!(annuity_factor(high, periods) > annuity_factor(low, periods));
        }

        #[test]
        fn prop_required_payment_is_never_negative(
            target in -1.0e9f64..1.0e9,
            rate_bp in 0u32..3000,
            periods in 0u32..720
        ) {
            let mr = effective_monthly_rate(rate_bp as f64 / 10_000.0);
            let payment = required_payment(target, mr, periods, PaymentTiming::Beginning);
            prop_assert!(payment >= 0.0);
            prop_assert!(payment.is_finite());
        }
    }
}
