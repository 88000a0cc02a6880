use serde::Deserialize;

use crate::core::ranges::{
    default_future_wealth, default_goal, default_home_loan, default_retirement, default_sip,
    default_sip_swp, default_swp,
};
use crate::core::{
    Calculation, FutureWealthParams, GoalParams, HomeLoanParams, PaymentTiming, RateConvention,
    RecoveryMode, RetirementParams, SipParams, SipSwpParams, SwpParams,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ApiRecoveryMode {
    #[serde(alias = "emiFromLoan", alias = "emi_from_loan", alias = "loan")]
    EmiFromLoan,
    #[serde(alias = "emiFromMonthly", alias = "emi_from_monthly", alias = "emi")]
    EmiFromMonthly,
    #[serde(alias = "principalOnly", alias = "principal_only", alias = "principal")]
    PrincipalOnly,
    #[serde(alias = "interestOnly", alias = "interest_only", alias = "interest")]
    InterestOnly,
}

impl From<ApiRecoveryMode> for RecoveryMode {
    fn from(value: ApiRecoveryMode) -> Self {
        match value {
            ApiRecoveryMode::EmiFromLoan => RecoveryMode::EmiFromLoan,
            ApiRecoveryMode::EmiFromMonthly => RecoveryMode::EmiFromMonthly,
            ApiRecoveryMode::PrincipalOnly => RecoveryMode::PrincipalOnly,
            ApiRecoveryMode::InterestOnly => RecoveryMode::InterestOnly,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ApiPaymentTiming {
    #[serde(alias = "begin", alias = "start", alias = "due")]
    Beginning,
    #[serde(alias = "ordinary")]
    End,
}

impl From<ApiPaymentTiming> for PaymentTiming {
    fn from(value: ApiPaymentTiming) -> Self {
        match value {
            ApiPaymentTiming::Beginning => PaymentTiming::Beginning,
            ApiPaymentTiming::End => PaymentTiming::End,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ApiRateConvention {
    #[serde(alias = "compound")]
    Effective,
    #[serde(alias = "simple")]
    Nominal,
}

impl From<ApiRateConvention> for RateConvention {
    fn from(value: ApiRateConvention) -> Self {
        match value {
            ApiRateConvention::Effective => RateConvention::Effective,
            ApiRateConvention::Nominal => RateConvention::Nominal,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct FutureWealthPayload {
    current_portfolio: Option<f64>,
    annual_lump_sum: Option<f64>,
    monthly_investment: Option<f64>,
    annual_return_pct: Option<f64>,
    years: Option<u32>,
}

impl From<FutureWealthPayload> for Calculation {
    fn from(payload: FutureWealthPayload) -> Self {
        let d = default_future_wealth();
        Calculation::FutureWealth(FutureWealthParams {
            current_portfolio: payload.current_portfolio.unwrap_or(d.current_portfolio),
            annual_lump_sum: payload.annual_lump_sum.unwrap_or(d.annual_lump_sum),
            monthly_investment: payload.monthly_investment.unwrap_or(d.monthly_investment),
            annual_return_pct: payload.annual_return_pct.unwrap_or(d.annual_return_pct),
            years: payload.years.unwrap_or(d.years),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct SipPayload {
    monthly_investment: Option<f64>,
    annual_return_pct: Option<f64>,
    years: Option<u32>,
    rate_convention: Option<ApiRateConvention>,
}

impl From<SipPayload> for Calculation {
    fn from(payload: SipPayload) -> Self {
        let d = default_sip();
        Calculation::Sip(SipParams {
            monthly_investment: payload.monthly_investment.unwrap_or(d.monthly_investment),
            annual_return_pct: payload.annual_return_pct.unwrap_or(d.annual_return_pct),
            years: payload.years.unwrap_or(d.years),
            rate_convention: payload
                .rate_convention
                .map(Into::into)
                .unwrap_or(d.rate_convention),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct GoalPayload {
    amount_today: Option<f64>,
    years: Option<u32>,
    inflation_pct: Option<f64>,
    expected_return_pct: Option<f64>,
    current_investment: Option<f64>,
    timing: Option<ApiPaymentTiming>,
}

impl From<GoalPayload> for Calculation {
    fn from(payload: GoalPayload) -> Self {
        let d = default_goal();
        Calculation::Goal(GoalParams {
            amount_today: payload.amount_today.unwrap_or(d.amount_today),
            years: payload.years.unwrap_or(d.years),
            inflation_pct: payload.inflation_pct.unwrap_or(d.inflation_pct),
            expected_return_pct: payload.expected_return_pct.unwrap_or(d.expected_return_pct),
            current_investment: payload.current_investment.unwrap_or(d.current_investment),
            timing: payload.timing.map(Into::into).unwrap_or(d.timing),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct HomeLoanPayload {
    mode: Option<ApiRecoveryMode>,
    loan_amount: Option<f64>,
    loan_rate_pct: Option<f64>,
    tenure_years: Option<u32>,
    monthly_emi: Option<f64>,
    investment_return_pct: Option<f64>,
    step_up_pct: Option<f64>,
}

impl From<HomeLoanPayload> for Calculation {
    fn from(payload: HomeLoanPayload) -> Self {
        let d = default_home_loan();
        Calculation::HomeLoan(HomeLoanParams {
            mode: payload.mode.map(Into::into).unwrap_or(d.mode),
            loan_amount: payload.loan_amount.unwrap_or(d.loan_amount),
            loan_rate_pct: payload.loan_rate_pct.unwrap_or(d.loan_rate_pct),
            tenure_years: payload.tenure_years.unwrap_or(d.tenure_years),
            monthly_emi: payload.monthly_emi.unwrap_or(d.monthly_emi),
            investment_return_pct: payload
                .investment_return_pct
                .unwrap_or(d.investment_return_pct),
            step_up_pct: payload.step_up_pct.unwrap_or(d.step_up_pct),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RetirementPayload {
    monthly_expense: Option<f64>,
    inflation_pct: Option<f64>,
    current_age: Option<u32>,
    retirement_age: Option<u32>,
    life_expectancy: Option<u32>,
    pre_retirement_return_pct: Option<f64>,
    post_retirement_return_pct: Option<f64>,
    current_wealth: Option<f64>,
}

impl From<RetirementPayload> for Calculation {
    fn from(payload: RetirementPayload) -> Self {
        let d = default_retirement();
        Calculation::Retirement(RetirementParams {
            monthly_expense: payload.monthly_expense.unwrap_or(d.monthly_expense),
            inflation_pct: payload.inflation_pct.unwrap_or(d.inflation_pct),
            current_age: payload.current_age.unwrap_or(d.current_age),
            retirement_age: payload.retirement_age.unwrap_or(d.retirement_age),
            life_expectancy: payload.life_expectancy.unwrap_or(d.life_expectancy),
            pre_retirement_return_pct: payload
                .pre_retirement_return_pct
                .unwrap_or(d.pre_retirement_return_pct),
            post_retirement_return_pct: payload
                .post_retirement_return_pct
                .unwrap_or(d.post_retirement_return_pct),
            current_wealth: payload.current_wealth.unwrap_or(d.current_wealth),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct SipSwpPayload {
    monthly_investment: Option<f64>,
    sip_years: Option<u32>,
    sip_return_pct: Option<f64>,
    withdrawal_years: Option<u32>,
    swp_return_pct: Option<f64>,
}

impl From<SipSwpPayload> for Calculation {
    fn from(payload: SipSwpPayload) -> Self {
        let d = default_sip_swp();
        Calculation::SipSwp(SipSwpParams {
            monthly_investment: payload.monthly_investment.unwrap_or(d.monthly_investment),
            sip_years: payload.sip_years.unwrap_or(d.sip_years),
            sip_return_pct: payload.sip_return_pct.unwrap_or(d.sip_return_pct),
            withdrawal_years: payload.withdrawal_years.unwrap_or(d.withdrawal_years),
            swp_return_pct: payload.swp_return_pct.unwrap_or(d.swp_return_pct),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct SwpPayload {
    corpus: Option<f64>,
    monthly_withdrawal: Option<f64>,
    annual_return_pct: Option<f64>,
    years: Option<u32>,
}

impl From<SwpPayload> for Calculation {
    fn from(payload: SwpPayload) -> Self {
        let d = default_swp();
        Calculation::Swp(SwpParams {
            corpus: payload.corpus.unwrap_or(d.corpus),
            monthly_withdrawal: payload.monthly_withdrawal.unwrap_or(d.monthly_withdrawal),
            annual_return_pct: payload.annual_return_pct.unwrap_or(d.annual_return_pct),
            years: payload.years.unwrap_or(d.years),
        })
    }
}
