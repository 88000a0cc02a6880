use super::rates::{
    amortizing_payment, annuity_factor, annuity_future_value, compound,
    effective_monthly_rate, growing_annuity_present_value, growing_monthly_contribution,
    monthly_rate, pct, real_return_pct, required_payment,
};
use super::types::{
    AmortizationYear, FutureWealthParams, FutureWealthResult, GoalParams, GoalResult,
    HomeLoanParams, HomeLoanResult, PaymentTiming, RateConvention, RecoveryMode,
    RetirementParams, RetirementResult, SipParams, SipResult, SipSwpParams, SipSwpResult,
    SipYear, SwpParams, SwpResult, SwpYear,
};

/// Investment return assumed by [`RecoveryMode::PrincipalOnly`], whatever the
/// caller asked for.
pub const PRINCIPAL_ONLY_RETURN_PCT: f64 = 12.0;

const MONTHS_PER_YEAR: u32 = 12;

/// Longest horizon rendered as yearly rows by the SIP breakdown, the
/// amortization schedule and the SWP projection.
pub const MAX_SCHEDULE_YEARS: u32 = 100;

/// A balance within this fraction of the monthly withdrawal is exhausted.
const DEPLETION_TOLERANCE: f64 = 1e-9;

/// Number of monthly periods in `years`, saturating at `u32::MAX`.
fn month_count(years: u32) -> u32 {
    years.saturating_mul(MONTHS_PER_YEAR)
}

fn month_span(years: u32) -> f64 {
    years as f64 * MONTHS_PER_YEAR as f64
}

#[derive(Debug, Clone, Copy)]
struct LoanFigures {
    emi: f64,
    total_payment: f64,
    total_interest: Option<f64>,
}

pub fn future_wealth(params: &FutureWealthParams) -> FutureWealthResult {
    let r = pct(params.annual_return_pct);
    let mr = effective_monthly_rate(r);
    let n = params.years;
    let months = month_count(n);

    let portfolio_value = compound(params.current_portfolio, r, n as f64);
    let lump_sum_value =
        annuity_future_value(params.annual_lump_sum, r, n, PaymentTiming::Beginning);
    let monthly_value =
        annuity_future_value(params.monthly_investment, mr, months, PaymentTiming::Beginning);
    let future_value = portfolio_value + lump_sum_value + monthly_value;

    let total_invested = params.current_portfolio
        + params.annual_lump_sum * n as f64
        + params.monthly_investment * month_span(n);

    FutureWealthResult {
        portfolio_value,
        lump_sum_value,
        monthly_value,
        future_value,
        total_invested,
        wealth_gained: future_value - total_invested,
    }
}

/// Future value of a beginning-of-month SIP. `annual_rate` is a fraction.
pub fn sip_future_value(
    monthly_investment: f64,
    annual_rate: f64,
    years: u32,
    convention: RateConvention,
) -> f64 {
    let mr = monthly_rate(annual_rate, convention);
    annuity_future_value(
        monthly_investment,
        mr,
        month_count(years),
        PaymentTiming::Beginning,
    )
}

pub fn sip(params: &SipParams) -> SipResult {
    let r = pct(params.annual_return_pct);
    let future_value = sip_future_value(
        params.monthly_investment,
        r,
        params.years,
        params.rate_convention,
    );
    let total_invested = params.monthly_investment * month_span(params.years);

    SipResult {
        monthly_rate: monthly_rate(r, params.rate_convention),
        total_invested,
        future_value,
        wealth_gained: future_value - total_invested,
        yearly: sip_yearly_breakdown(params),
    }
}

pub fn sip_yearly_breakdown(params: &SipParams) -> Vec<SipYear> {
    let r = pct(params.annual_return_pct);
    (1..=params.years.min(MAX_SCHEDULE_YEARS))
        .map(|year| {
            let invested = params.monthly_investment * month_span(year);
            let value = sip_future_value(params.monthly_investment, r, year, params.rate_convention);
            SipYear {
                year,
                invested,
                value,
                gained: value - invested,
            }
        })
        .collect()
}

pub fn goal_plan(params: &GoalParams) -> GoalResult {
    let g = pct(params.inflation_pct);
    let r = pct(params.expected_return_pct);
    let n = params.years;
    let months = month_count(n);

    let future_goal_value = compound(params.amount_today, g, n as f64);
    let current_investment_future_value = compound(params.current_investment, r, n as f64);
    let additional_amount_needed = (future_goal_value - current_investment_future_value).max(0.0);

    let required_monthly_sip = required_payment(
        additional_amount_needed,
        effective_monthly_rate(r),
        months,
        params.timing,
    );

    GoalResult {
        future_goal_value,
        current_investment_future_value,
        additional_amount_needed,
        required_monthly_sip,
        total_sip_contribution: required_monthly_sip * month_span(n).max(1.0),
        real_return_pct: real_return_pct(r, g),
        goal_covered: additional_amount_needed <= 0.0,
    }
}

/// Reducing-balance EMI. The monthly rate is `annual / 12 / 100`, unlike the
/// investment calculators which use the effective monthly rate.
pub fn loan_emi(principal: f64, annual_rate_pct: f64, months: u32) -> f64 {
    let i = monthly_rate(pct(annual_rate_pct), RateConvention::Nominal);
    amortizing_payment(principal, i, months)
}

pub fn amortization_schedule(
    principal: f64,
    annual_rate_pct: f64,
    tenure_years: u32,
) -> Vec<AmortizationYear> {
    let months = month_count(tenure_years);
    let i = monthly_rate(pct(annual_rate_pct), RateConvention::Nominal);
    let emi = amortizing_payment(principal, i, months);
    let rows = tenure_years.min(MAX_SCHEDULE_YEARS);

    let mut balance = principal;
    let mut schedule = Vec::with_capacity(rows as usize);
    for year in 1..=rows {
        let opening_balance = balance;
        let mut principal_paid = 0.0;
        let mut interest_paid = 0.0;
        for month in 1..=MONTHS_PER_YEAR {
            let interest = balance * i;
            let is_last = year == tenure_years && month == MONTHS_PER_YEAR;
            let principal_part = if is_last {
                balance
            } else {
                (emi - interest).min(balance)
            };
            balance -= principal_part;
            principal_paid += principal_part;
            interest_paid += interest;
        }
        schedule.push(AmortizationYear {
            year,
            opening_balance,
            principal_paid,
            interest_paid,
            closing_balance: balance.max(0.0),
        });
    }
    schedule
}

fn loan_figures(params: &HomeLoanParams) -> LoanFigures {
    let months = month_count(params.tenure_years);
    let span = month_span(params.tenure_years);
    match params.mode {
        RecoveryMode::EmiFromMonthly => LoanFigures {
            emi: params.monthly_emi,
            total_payment: params.monthly_emi * span,
            total_interest: None,
        },
        RecoveryMode::EmiFromLoan | RecoveryMode::PrincipalOnly | RecoveryMode::InterestOnly => {
            let emi = loan_emi(params.loan_amount, params.loan_rate_pct, months);
            let total_payment = emi * span;
            LoanFigures {
                emi,
                total_payment,
                total_interest: Some(total_payment - params.loan_amount),
            }
        }
    }
}

/// Amount the investment has to rebuild for the selected mode.
pub fn recovery_target(params: &HomeLoanParams) -> f64 {
    let loan = loan_figures(params);
    match params.mode {
        RecoveryMode::EmiFromLoan | RecoveryMode::EmiFromMonthly => loan.total_payment,
        RecoveryMode::PrincipalOnly => params.loan_amount,
        RecoveryMode::InterestOnly => loan.total_interest.unwrap_or(0.0).max(0.0),
    }
}

pub fn effective_investment_return_pct(params: &HomeLoanParams) -> f64 {
    match params.mode {
        RecoveryMode::PrincipalOnly => PRINCIPAL_ONLY_RETURN_PCT,
        _ => params.investment_return_pct,
    }
}

pub fn home_loan_recovery(params: &HomeLoanParams) -> HomeLoanResult {
    let loan = loan_figures(params);
    let target_amount = recovery_target(params);
    let investment_return_pct = effective_investment_return_pct(params);
    let g = pct(params.step_up_pct);

    let required_monthly_investment = growing_monthly_contribution(
        target_amount,
        pct(investment_return_pct),
        g,
        params.tenure_years,
    );
    let total_investment = required_monthly_investment
        * MONTHS_PER_YEAR as f64
        * annuity_factor(g, params.tenure_years);

    let amortization = match params.mode {
        RecoveryMode::EmiFromMonthly => Vec::new(),
        _ => amortization_schedule(params.loan_amount, params.loan_rate_pct, params.tenure_years),
    };

    HomeLoanResult {
        mode: params.mode,
        emi: loan.emi,
        total_loan_payment: loan.total_payment,
        total_interest: loan.total_interest,
        target_amount,
        investment_return_pct,
        required_monthly_investment,
        total_investment,
        amortization,
    }
}

pub fn retirement_plan(params: &RetirementParams) -> RetirementResult {
    let g = pct(params.inflation_pct);
    let re = pct(params.pre_retirement_return_pct);
    let rr = pct(params.post_retirement_return_pct);
    let years_to_retirement = params.retirement_age.saturating_sub(params.current_age);
    let retirement_years = params.life_expectancy.saturating_sub(params.retirement_age);

    let monthly_expense_at_retirement =
        compound(params.monthly_expense, g, years_to_retirement as f64);
    let annual_expense_at_retirement = monthly_expense_at_retirement * MONTHS_PER_YEAR as f64;
    let corpus_needed =
        growing_annuity_present_value(annual_expense_at_retirement, g, rr, retirement_years);

    let current_wealth_future_value =
        compound(params.current_wealth, re, years_to_retirement as f64);
    let is_sufficient = current_wealth_future_value >= corpus_needed;
    let additional_corpus_needed = (corpus_needed - current_wealth_future_value).max(0.0);

    let required_monthly_sip = if is_sufficient {
        0.0
    } else {
        required_payment(
            additional_corpus_needed,
            effective_monthly_rate(re),
            month_count(years_to_retirement),
            PaymentTiming::Beginning,
        )
    };

    RetirementResult {
        years_to_retirement,
        retirement_years,
        monthly_expense_at_retirement,
        annual_expense_at_retirement,
        corpus_needed,
        current_wealth_future_value,
        additional_corpus_needed,
        required_monthly_sip,
        is_sufficient,
        surplus: (current_wealth_future_value - corpus_needed).max(0.0),
    }
}

pub fn sip_to_swp(params: &SipSwpParams) -> SipSwpResult {
    let corpus = sip_future_value(
        params.monthly_investment,
        pct(params.sip_return_pct),
        params.sip_years,
        RateConvention::Effective,
    );
    let total_invested = params.monthly_investment * month_span(params.sip_years);

    let withdrawal_months = month_count(params.withdrawal_years);
    let i = effective_monthly_rate(pct(params.swp_return_pct));
    let monthly_withdrawal = amortizing_payment(corpus, i, withdrawal_months);

    SipSwpResult {
        total_invested,
        corpus,
        wealth_gained: corpus - total_invested,
        monthly_withdrawal,
        total_withdrawn: monthly_withdrawal * month_span(params.withdrawal_years),
    }
}

/// Month-by-month SWP: the balance grows for the month, then the withdrawal
/// is taken. Once the balance is exhausted nothing more is withdrawn; an
/// empty starting corpus reports depletion in month 0. At most
/// [`MAX_SCHEDULE_YEARS`] years are projected.
pub fn swp_projection(params: &SwpParams) -> SwpResult {
    let mr = effective_monthly_rate(pct(params.annual_return_pct));
    let tolerance = DEPLETION_TOLERANCE * params.monthly_withdrawal.max(1.0);
    let horizon = params.years.min(MAX_SCHEDULE_YEARS);
    let mut balance = params.corpus.max(0.0);
    let mut depleted_in_month = None;
    if balance <= tolerance {
        balance = 0.0;
        depleted_in_month = Some(0);
    }
    let mut total_withdrawn = 0.0;
    let mut total_growth = 0.0;
    let mut yearly = Vec::with_capacity(horizon as usize);

    for year in 1..=horizon {
        let opening_balance = balance;
        let mut withdrawn = 0.0;
        let mut growth = 0.0;
        for month in 1..=MONTHS_PER_YEAR {
            if depleted_in_month.is_some() {
                break;
            }
            let month_growth = balance * mr;
            balance += month_growth;
            let taken = params.monthly_withdrawal.min(balance);
            balance -= taken;
            growth += month_growth;
            withdrawn += taken;
            if balance <= tolerance {
                balance = 0.0;
                depleted_in_month = Some((year - 1) * MONTHS_PER_YEAR + month);
            }
        }
        total_withdrawn += withdrawn;
        total_growth += growth;
        yearly.push(SwpYear {
            year,
            opening_balance,
            withdrawn,
            growth,
            closing_balance: balance,
        });
    }

    SwpResult {
        total_withdrawn,
        total_growth,
        final_balance: balance,
        depleted_in_month,
        yearly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ranges;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_approx_tol(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    fn sample_sip() -> SipParams {
        SipParams {
            monthly_investment: 5_000.0,
            annual_return_pct: 12.0,
            years: 10,
            rate_convention: RateConvention::Effective,
        }
    }

    fn sample_goal() -> GoalParams {
        GoalParams {
            amount_today: 5_000_000.0,
            years: 15,
            inflation_pct: 7.0,
            expected_return_pct: 12.0,
            current_investment: 500_000.0,
            timing: PaymentTiming::Beginning,
        }
    }

    fn sample_home_loan() -> HomeLoanParams {
        HomeLoanParams {
            mode: RecoveryMode::EmiFromLoan,
            loan_amount: 3_000_000.0,
            loan_rate_pct: 9.0,
            tenure_years: 20,
            monthly_emi: 26_992.0,
            investment_return_pct: 12.0,
            step_up_pct: 10.0,
        }
    }

    fn sample_retirement() -> RetirementParams {
        RetirementParams {
            monthly_expense: 50_000.0,
            inflation_pct: 6.0,
            current_age: 30,
            retirement_age: 60,
            life_expectancy: 85,
            pre_retirement_return_pct: 12.0,
            post_retirement_return_pct: 8.0,
            current_wealth: 1_000_000.0,
        }
    }

    #[test]
    fn sip_reference_scenario_with_effective_monthly_rate() {
        let result = sip(&sample_sip());
        assert_approx_tol(result.future_value, 1_120_179.45, 0.01);
        assert_approx(result.total_invested, 600_000.0);
        assert_approx(result.wealth_gained, result.future_value - 600_000.0);
    }

    #[test]
    fn sip_reference_scenario_with_nominal_monthly_rate() {
        let params = SipParams {
            rate_convention: RateConvention::Nominal,
            ..sample_sip()
        };
        let result = sip(&params);
        assert_approx(result.monthly_rate, 0.01);
        assert_approx_tol(result.future_value, 1_161_695.38, 0.01);
    }

    #[test]
    fn sip_at_zero_return_is_exactly_linear() {
        let params = SipParams {
            annual_return_pct: 0.0,
            ..sample_sip()
        };
        let result = sip(&params);
        assert_eq!(result.future_value, 5_000.0 * 120.0);
        assert_eq!(result.wealth_gained, 0.0);
    }

    #[test]
    fn sip_yearly_breakdown_ends_at_future_value() {
        let result = sip(&sample_sip());
        assert_eq!(result.yearly.len(), 10);
        let last = result.yearly.last().expect("ten years of rows");
        assert_eq!(last.year, 10);
        assert_approx(last.value, result.future_value);
        assert_approx(last.invested, result.total_invested);
        for pair in result.yearly.windows(2) {
            assert!(pair[1].value > pair[0].value);
        }
    }

    #[test]
    fn future_wealth_sums_three_components() {
        let params = FutureWealthParams {
            current_portfolio: 1_000_000.0,
            annual_lump_sum: 100_000.0,
            monthly_investment: 10_000.0,
            annual_return_pct: 12.0,
            years: 20,
        };
        let result = future_wealth(&params);
        assert_approx_tol(result.future_value, 26_914_740.20, 0.01);
        assert_approx(result.total_invested, 5_400_000.0);
        assert_approx(
            result.future_value,
            result.portfolio_value + result.lump_sum_value + result.monthly_value,
        );
        assert_approx(result.wealth_gained, result.future_value - 5_400_000.0);
    }

    #[test]
    fn future_wealth_at_zero_return_has_no_gain() {
        let params = FutureWealthParams {
            current_portfolio: 10_000.0,
            annual_lump_sum: 1_000.0,
            monthly_investment: 100.0,
            annual_return_pct: 0.0,
            years: 5,
        };
        let result = future_wealth(&params);
        assert_eq!(result.future_value, 10_000.0 + 5_000.0 + 6_000.0);
        assert_eq!(result.wealth_gained, 0.0);
    }

    #[test]
    fn goal_inflates_amount_required_today() {
        let result = goal_plan(&sample_goal());
        assert_approx_tol(result.future_goal_value, 13_795_157.70, 0.01);
        assert_approx_tol(result.additional_amount_needed, 11_058_374.82, 0.01);
        assert_approx_tol(result.required_monthly_sip, 23_235.23, 0.01);
        assert_approx_tol(result.real_return_pct, 4.672_897, 1e-6);
        assert!(!result.goal_covered);
    }

    #[test]
    fn goal_end_of_month_needs_a_larger_sip() {
        let begin = goal_plan(&sample_goal());
        let end = goal_plan(&GoalParams {
            timing: PaymentTiming::End,
            ..sample_goal()
        });
        assert_approx_tol(end.required_monthly_sip, 23_455.70, 0.01);
        let mr = effective_monthly_rate(0.12);
        assert_approx_tol(
            end.required_monthly_sip,
            begin.required_monthly_sip * (1.0 + mr),
            1e-6,
        );
    }

    #[test]
    fn goal_already_covered_needs_no_sip() {
        let params = GoalParams {
            current_investment: 5_000_000.0,
            ..sample_goal()
        };
        let result = goal_plan(&params);
        assert_eq!(result.additional_amount_needed, 0.0);
        assert_eq!(result.required_monthly_sip, 0.0);
        assert!(result.goal_covered);
    }

    #[test]
    fn loan_emi_reference_scenario() {
        assert_approx_tol(loan_emi(3_000_000.0, 9.0, 240), 26_991.78, 0.01);
    }

    #[test]
    fn amortization_schedule_repays_principal_exactly() {
        let schedule = amortization_schedule(3_000_000.0, 9.0, 20);
        assert_eq!(schedule.len(), 20);
        let principal: f64 = schedule.iter().map(|y| y.principal_paid).sum();
        let interest: f64 = schedule.iter().map(|y| y.interest_paid).sum();
        assert_approx_tol(principal, 3_000_000.0, 1e-4);
        assert_approx_tol(interest, 3_478_026.88, 0.05);
        assert_eq!(schedule[19].closing_balance, 0.0);
        assert!(schedule[0].interest_paid > schedule[0].principal_paid);
        assert!(schedule[19].principal_paid > schedule[19].interest_paid);
    }

    #[test]
    fn home_loan_emi_from_loan_targets_all_payments() {
        let result = home_loan_recovery(&sample_home_loan());
        assert_approx_tol(result.emi, 26_991.78, 0.01);
        assert_approx_tol(result.target_amount, 6_478_026.88, 0.01);
        assert_approx_tol(result.required_monthly_investment, 3_476.94, 0.01);
        assert_approx_tol(
            result.total_interest.expect("loan mode reports interest"),
            3_478_026.88,
            0.01,
        );
        assert_eq!(result.amortization.len(), 20);
    }

    #[test]
    fn home_loan_emi_from_monthly_uses_entered_emi() {
        let params = HomeLoanParams {
            mode: RecoveryMode::EmiFromMonthly,
            monthly_emi: 20_000.0,
            tenure_years: 10,
            ..sample_home_loan()
        };
        let result = home_loan_recovery(&params);
        assert_approx(result.target_amount, 2_400_000.0);
        assert!(result.total_interest.is_none());
        assert!(result.amortization.is_empty());
    }

    #[test]
    fn home_loan_principal_only_ignores_requested_return() {
        let low = home_loan_recovery(&HomeLoanParams {
            mode: RecoveryMode::PrincipalOnly,
            investment_return_pct: 5.0,
            ..sample_home_loan()
        });
        let high = home_loan_recovery(&HomeLoanParams {
            mode: RecoveryMode::PrincipalOnly,
            investment_return_pct: 18.0,
            ..sample_home_loan()
        });
        assert_approx(low.target_amount, 3_000_000.0);
        assert_eq!(low.investment_return_pct, PRINCIPAL_ONLY_RETURN_PCT);
        assert_eq!(
            low.required_monthly_investment,
            high.required_monthly_investment
        );
    }

    #[test]
    fn home_loan_interest_only_targets_interest_component() {
        let full = home_loan_recovery(&sample_home_loan());
        let interest = home_loan_recovery(&HomeLoanParams {
            mode: RecoveryMode::InterestOnly,
            ..sample_home_loan()
        });
        assert_approx(interest.target_amount, full.target_amount - 3_000_000.0);
        assert!(interest.required_monthly_investment < full.required_monthly_investment);
    }

    #[test]
    fn home_loan_equal_return_and_step_up_spreads_target() {
        let params = HomeLoanParams {
            mode: RecoveryMode::EmiFromMonthly,
            monthly_emi: 10_000.0,
            tenure_years: 10,
            investment_return_pct: 10.0,
            step_up_pct: 10.0,
            ..sample_home_loan()
        };
        let result = home_loan_recovery(&params);
        assert_approx(result.required_monthly_investment, 1_200_000.0 / 10.0 / 12.0);
    }

    #[test]
    fn home_loan_total_investment_without_step_up_is_level() {
        let params = HomeLoanParams {
            step_up_pct: 0.0,
            ..sample_home_loan()
        };
        let result = home_loan_recovery(&params);
        assert_approx(
            result.total_investment,
            result.required_monthly_investment * 240.0,
        );
    }

    #[test]
    fn retirement_reference_scenario() {
        let result = retirement_plan(&sample_retirement());
        assert_eq!(result.years_to_retirement, 30);
        assert_eq!(result.retirement_years, 25);
        assert_approx_tol(result.monthly_expense_at_retirement, 287_174.56, 0.01);
        assert_approx_tol(result.corpus_needed, 64_323_085.75, 0.05);
        assert_approx_tol(result.current_wealth_future_value, 29_959_922.12, 0.01);
        assert_approx_tol(result.additional_corpus_needed, 34_363_163.63, 0.05);
        assert_approx_tol(result.required_monthly_sip, 11_153.35, 0.01);
        assert!(!result.is_sufficient);
        assert_eq!(result.surplus, 0.0);
    }

    #[test]
    fn retirement_equal_inflation_and_return_is_undiscounted() {
        let params = RetirementParams {
            inflation_pct: 7.0,
            post_retirement_return_pct: 7.0,
            ..sample_retirement()
        };
        let result = retirement_plan(&params);
        assert_eq!(
            result.corpus_needed,
            result.annual_expense_at_retirement * 25.0
        );
    }

    #[test]
    fn retirement_sufficient_wealth_suppresses_sip() {
        let params = RetirementParams {
            current_wealth: 50_000_000.0,
            ..sample_retirement()
        };
        let result = retirement_plan(&params);
        assert!(result.is_sufficient);
        assert_eq!(result.required_monthly_sip, 0.0);
        assert_eq!(result.additional_corpus_needed, 0.0);
        assert!(result.surplus > 0.0);
    }

    #[test]
    fn sip_to_swp_chains_corpus_into_withdrawal() {
        let params = SipSwpParams {
            monthly_investment: 10_000.0,
            sip_years: 15,
            sip_return_pct: 12.0,
            withdrawal_years: 20,
            swp_return_pct: 8.0,
        };
        let result = sip_to_swp(&params);
        assert_approx_tol(result.corpus, 4_759_313.99, 0.01);
        assert_approx_tol(result.monthly_withdrawal, 38_985.93, 0.01);
        assert_approx(result.total_invested, 1_800_000.0);
        assert_approx(result.total_withdrawn, result.monthly_withdrawal * 240.0);
    }

    #[test]
    fn swp_projection_with_sustainable_withdrawal_depletes_in_final_month() {
        for withdrawal_years in [10_u32, 20, 25, 30] {
            let plan = sip_to_swp(&SipSwpParams {
                monthly_investment: 10_000.0,
                sip_years: 15,
                sip_return_pct: 12.0,
                withdrawal_years,
                swp_return_pct: 8.0,
            });
            let projection = swp_projection(&SwpParams {
                corpus: plan.corpus,
                monthly_withdrawal: plan.monthly_withdrawal,
                annual_return_pct: 8.0,
                years: withdrawal_years,
            });
            assert_eq!(projection.yearly.len(), withdrawal_years as usize);
            assert_eq!(
                projection.depleted_in_month,
                Some(withdrawal_years * 12),
                "withdrawal over {withdrawal_years} years"
            );
            assert_eq!(projection.final_balance, 0.0);
            assert_approx_tol(projection.total_withdrawn, plan.total_withdrawn, 0.01);
        }
    }

    #[test]
    fn swp_projection_of_empty_corpus_is_depleted_at_start() {
        let projection = swp_projection(&SwpParams {
            corpus: 0.0,
            monthly_withdrawal: 20_000.0,
            annual_return_pct: 8.0,
            years: 3,
        });
        assert_eq!(projection.depleted_in_month, Some(0));
        assert_eq!(projection.total_withdrawn, 0.0);
        assert_eq!(projection.yearly.len(), 3);
        assert!(projection.yearly.iter().all(|y| y.closing_balance == 0.0));
    }

    #[test]
    fn calculators_stay_total_for_horizons_past_u32_months() {
        let years = u32::MAX / 4;

        let wealth = future_wealth(&FutureWealthParams {
            years,
            ..ranges::default_future_wealth()
        });
        assert!(wealth.total_invested > 0.0);

        let sip_result = sip(&SipParams {
            years,
            ..sample_sip()
        });
        assert_eq!(sip_result.yearly.len(), MAX_SCHEDULE_YEARS as usize);

        let goal = goal_plan(&GoalParams {
            years,
            ..sample_goal()
        });
        assert!(goal.required_monthly_sip >= 0.0);

        let loan = home_loan_recovery(&HomeLoanParams {
            tenure_years: years,
            ..sample_home_loan()
        });
        assert_eq!(loan.amortization.len(), MAX_SCHEDULE_YEARS as usize);

        let retirement = retirement_plan(&RetirementParams {
            retirement_age: years,
            life_expectancy: years + 25,
            ..sample_retirement()
        });
        assert_eq!(retirement.retirement_years, 25);

        let chained = sip_to_swp(&SipSwpParams {
            monthly_investment: 10_000.0,
            sip_years: years,
            sip_return_pct: 12.0,
            withdrawal_years: years,
            swp_return_pct: 8.0,
        });
        assert!(chained.total_invested > 0.0);

        let projection = swp_projection(&SwpParams {
            corpus: 1_000_000.0,
            monthly_withdrawal: 1_000.0,
            annual_return_pct: 8.0,
            years,
        });
        assert_eq!(projection.yearly.len(), MAX_SCHEDULE_YEARS as usize);
    }

    #[test]
    fn swp_projection_reports_depletion_month() {
        let projection = swp_projection(&SwpParams {
            corpus: 100_000.0,
            monthly_withdrawal: 30_000.0,
            annual_return_pct: 8.0,
            years: 2,
        });
        assert_eq!(projection.depleted_in_month, Some(4));
        assert_eq!(projection.final_balance, 0.0);
        assert!(projection.total_withdrawn > 90_000.0);
        assert!(projection.total_withdrawn < 120_000.0);
        assert_eq!(projection.yearly[1].withdrawn, 0.0);
    }

    #[test]
    fn swp_projection_balances_carry_between_years() {
        let projection = swp_projection(&SwpParams {
            corpus: 5_000_000.0,
            monthly_withdrawal: 20_000.0,
            annual_return_pct: 10.0,
            years: 5,
        });
        assert!(projection.depleted_in_month.is_none());
        for pair in projection.yearly.windows(2) {
            assert_eq!(pair[0].closing_balance, pair[1].opening_balance);
        }
        let first = projection.yearly[0];
        assert_approx_tol(
            first.closing_balance,
            first.opening_balance + first.growth - first.withdrawn,
            1e-6,
        );
    }

    #[test]
    fn calculators_are_idempotent_over_default_inputs() {
        let sip_params = ranges::default_sip();
        assert_eq!(sip(&sip_params).future_value, sip(&sip_params).future_value);

        let goal = ranges::default_goal();
        assert_eq!(
            goal_plan(&goal).required_monthly_sip,
            goal_plan(&goal).required_monthly_sip
        );

        let retirement = ranges::default_retirement();
        assert_eq!(
            retirement_plan(&retirement).corpus_needed,
            retirement_plan(&retirement).corpus_needed
        );

        let home_loan = ranges::default_home_loan();
        assert_eq!(
            home_loan_recovery(&home_loan).required_monthly_investment,
            home_loan_recovery(&home_loan).required_monthly_investment
        );
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn prop_sip_is_strictly_increasing_in_rate_and_horizon(
            monthly in 500u32..100_000,
            rate_bp in 400u32..2000,
            bump_bp in 1u32..200,
            years in 1u32..40
        ) {
            let base = SipParams {
                monthly_investment: monthly as f64,
                annual_return_pct: rate_bp as f64 / 100.0,
                years,
                rate_convention: RateConvention::Effective,
            };
            let faster = SipParams {
                annual_return_pct: (rate_bp + bump_bp) as f64 / 100.0,
                ..base
            };
            let longer = SipParams { years: years + 1, ..base };

            let fv = sip(&base).future_value;
            prop_assert!(sip(&faster).future_value > fv);
            prop_assert!(sip(&longer).future_value > fv);
        }

        #[test]
        fn prop_future_wealth_is_increasing_in_rate(
            portfolio in 0u32..5_000_000,
            lump in 0u32..500_000,
            monthly in 1u32..100_000,
            rate_bp in 400u32..2000,
            bump_bp in 1u32..200,
            years in 1u32..60
        ) {
            let base = FutureWealthParams {
                current_portfolio: portfolio as f64,
                annual_lump_sum: lump as f64,
                monthly_investment: monthly as f64,
                annual_return_pct: rate_bp as f64 / 100.0,
                years,
            };
            let faster = FutureWealthParams {
                annual_return_pct: (rate_bp + bump_bp) as f64 / 100.0,
                ..base
            };
            prop_assert!(future_wealth(&faster).future_value > future_wealth(&base).future_value);
        }

        #[test]
        fn prop_goal_outputs_are_never_negative(
            amount in 10_000u32..100_000_000,
            current in 0u32..100_000_000,
            years in 1u32..60,
            inflation_bp in 0u32..1500,
            return_bp in 400u32..2000,
            end_of_month in proptest::bool::ANY
        ) {
            let params = GoalParams {
                amount_today: amount as f64,
                years,
                inflation_pct: inflation_bp as f64 / 100.0,
                expected_return_pct: return_bp as f64 / 100.0,
                current_investment: current as f64,
                timing: if end_of_month { PaymentTiming::End } else { PaymentTiming::Beginning },
            };
            let result = goal_plan(&params);
            prop_assert!(result.additional_amount_needed >= 0.0);
            prop_assert!(result.required_monthly_sip >= 0.0);
            prop_assert_eq!(result.goal_covered, result.required_monthly_sip == 0.0);
        }

        #[test]
        fn prop_retirement_outputs_are_never_negative(
            expense in 1_000u32..500_000,
            wealth in 0u32..200_000_000,
            current_age in 18u32..60,
            working in 1u32..30,
            retired in 1u32..40,
            inflation_bp in 0u32..1500,
            pre_bp in 400u32..2000,
            post_bp in 400u32..2000
        ) {
            let params = RetirementParams {
                monthly_expense: expense as f64,
                inflation_pct: inflation_bp as f64 / 100.0,
                current_age,
                retirement_age: current_age + working,
                life_expectancy: current_age + working + retired,
                pre_retirement_return_pct: pre_bp as f64 / 100.0,
                post_retirement_return_pct: post_bp as f64 / 100.0,
                current_wealth: wealth as f64,
            };
            let result = retirement_plan(&params);
            prop_assert!(result.corpus_needed.is_finite());
            prop_assert!(result.corpus_needed > 0.0);
            prop_assert!(result.additional_corpus_needed >= 0.0);
            prop_assert!(result.required_monthly_sip >= 0.0);
            if result.is_sufficient {
                prop_assert_eq!(result.required_monthly_sip, 0.0);
            }
        }

        #[test]
        fn prop_home_loan_investment_is_finite_and_non_negative(
            loan in 100_000u32..50_000_000,
            rate_bp in 100u32..2000,
            tenure in 1u32..30,
            return_bp in 400u32..2000,
            step_bp in 0u32..2000,
            mode_index in 0usize..4
        ) {
            let modes = [
                RecoveryMode::EmiFromLoan,
                RecoveryMode::EmiFromMonthly,
                RecoveryMode::PrincipalOnly,
                RecoveryMode::InterestOnly,
            ];
            let params = HomeLoanParams {
                mode: modes[mode_index],
                loan_amount: loan as f64,
                loan_rate_pct: rate_bp as f64 / 100.0,
                tenure_years: tenure,
                monthly_emi: 25_000.0,
                investment_return_pct: return_bp as f64 / 100.0,
                step_up_pct: step_bp as f64 / 100.0,
            };
            let result = home_loan_recovery(&params);
            prop_assert!(result.required_monthly_investment.is_finite());
            prop_assert!(result.required_monthly_investment >= 0.0);
            prop_assert!(result.target_amount >= 0.0);
        }
    }
}
