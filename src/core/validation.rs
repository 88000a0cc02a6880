use std::fmt;

use serde::Serialize;

use super::error::{CalcError, CalcResult};
use super::ranges::{self, FieldRange};
use super::types::{
    FutureWealthParams, GoalParams, HomeLoanParams, RecoveryMode, RetirementParams, SipParams,
    SipSwpParams, SwpParams,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

/// Every problem found in one parameter set, not only the first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<FieldIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issue_for(&self, field: &str) -> Option<&FieldIssue> {
        self.issues.iter().find(|i| i.field == field)
    }

    pub fn into_result(self) -> CalcResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CalcError::Invalid(self))
        }
    }

    fn check(&mut self, range: FieldRange, value: f64) {
        if !value.is_finite() {
            self.push(range.field, format!("{} must be a finite number", range.field));
        } else if !range.contains(value) {
            self.push(
                range.field,
                format!(
                    "{} must be between {} and {}, got {}",
                    range.field, range.min, range.max, value
                ),
            );
        }
    }

    fn push(&mut self, field: &'static str, message: String) {
        self.issues.push(FieldIssue { field, message });
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self
            .issues
            .iter()
            .map(|i| i.message.as_str())
            .collect::<Vec<_>>();
        write!(f, "{}", messages.join("; "))
    }
}

pub fn validate_future_wealth(params: &FutureWealthParams) -> ValidationReport {
    use ranges::future_wealth::*;

    let mut report = ValidationReport::default();
    report.check(CURRENT_PORTFOLIO, params.current_portfolio);
    report.check(ANNUAL_LUMP_SUM, params.annual_lump_sum);
    report.check(MONTHLY_INVESTMENT, params.monthly_investment);
    report.check(ANNUAL_RETURN, params.annual_return_pct);
    report.check(YEARS, params.years as f64);
    report
}

pub fn validate_sip(params: &SipParams) -> ValidationReport {
    use ranges::sip::*;

    let mut report = ValidationReport::default();
    report.check(MONTHLY_INVESTMENT, params.monthly_investment);
    report.check(ANNUAL_RETURN, params.annual_return_pct);
    report.check(YEARS, params.years as f64);
    report
}

pub fn validate_goal(params: &GoalParams) -> ValidationReport {
    use ranges::goal::*;

    let mut report = ValidationReport::default();
    report.check(AMOUNT_TODAY, params.amount_today);
    report.check(YEARS, params.years as f64);
    report.check(INFLATION, params.inflation_pct);
    report.check(EXPECTED_RETURN, params.expected_return_pct);
    report.check(CURRENT_INVESTMENT, params.current_investment);
    report
}

/// Only the fields the selected mode reads are checked.
pub fn validate_home_loan(params: &HomeLoanParams) -> ValidationReport {
    use ranges::home_loan::*;

    let mut report = ValidationReport::default();
    report.check(TENURE_YEARS, params.tenure_years as f64);
    report.check(STEP_UP, params.step_up_pct);
    match params.mode {
        RecoveryMode::EmiFromMonthly => report.check(MONTHLY_EMI, params.monthly_emi),
        RecoveryMode::EmiFromLoan | RecoveryMode::PrincipalOnly | RecoveryMode::InterestOnly => {
            report.check(LOAN_AMOUNT, params.loan_amount);
            report.check(LOAN_RATE, params.loan_rate_pct);
        }
    }
    if params.mode != RecoveryMode::PrincipalOnly {
        report.check(INVESTMENT_RETURN, params.investment_return_pct);
    }
    report
}

pub fn validate_retirement(params: &RetirementParams) -> ValidationReport {
    use ranges::retirement::*;

    let mut report = ValidationReport::default();
    report.check(MONTHLY_EXPENSE, params.monthly_expense);
    report.check(INFLATION, params.inflation_pct);
    report.check(CURRENT_AGE, params.current_age as f64);
    report.check(RETIREMENT_AGE, params.retirement_age as f64);
    report.check(LIFE_EXPECTANCY, params.life_expectancy as f64);
    report.check(PRE_RETIREMENT_RETURN, params.pre_retirement_return_pct);
    report.check(POST_RETIREMENT_RETURN, params.post_retirement_return_pct);
    report.check(CURRENT_WEALTH, params.current_wealth);

    if params.retirement_age <= params.current_age {
        report.push(
            RETIREMENT_AGE.field,
            "retirementAge must be greater than currentAge".to_string(),
        );
    }
    if params.life_expectancy <= params.retirement_age {
        report.push(
            LIFE_EXPECTANCY.field,
            "lifeExpectancy must be greater than retirementAge".to_string(),
        );
    }
    report
}

pub fn validate_sip_swp(params: &SipSwpParams) -> ValidationReport {
    use ranges::sip_swp::*;

    let mut report = ValidationReport::default();
    report.check(MONTHLY_INVESTMENT, params.monthly_investment);
    report.check(SIP_YEARS, params.sip_years as f64);
    report.check(SIP_RETURN, params.sip_return_pct);
    report.check(WITHDRAWAL_YEARS, params.withdrawal_years as f64);
    report.check(SWP_RETURN, params.swp_return_pct);
    report
}

pub fn validate_swp(params: &SwpParams) -> ValidationReport {
    use ranges::swp::*;

    let mut report = ValidationReport::default();
    report.check(CORPUS, params.corpus);
    report.check(MONTHLY_WITHDRAWAL, params.monthly_withdrawal);
    report.check(ANNUAL_RETURN, params.annual_return_pct);
    report.check(YEARS, params.years as f64);
    report
}
