use serde::Serialize;

/// How an annual rate becomes a monthly one.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RateConvention {
    /// `(1 + annual)^(1/12) - 1`, reproducing the annual rate when compounded.
    #[default]
    Effective,
    /// `annual / 12`. Used for loan EMIs.
    Nominal,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentTiming {
    /// Annuity-due: each payment earns one extra period of growth.
    #[default]
    Beginning,
    End,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecoveryMode {
    /// Recover every EMI paid on an amortizing loan.
    #[default]
    EmiFromLoan,
    /// Recover a known monthly EMI over the tenure.
    EmiFromMonthly,
    /// Recover only the borrowed principal, at a fixed investment return.
    PrincipalOnly,
    /// Recover only the interest part of the EMIs.
    InterestOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureWealthParams {
    pub current_portfolio: f64,
    pub annual_lump_sum: f64,
    pub monthly_investment: f64,
    pub annual_return_pct: f64,
    pub years: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureWealthResult {
    pub portfolio_value: f64,
    pub lump_sum_value: f64,
    pub monthly_value: f64,
    pub future_value: f64,
    pub total_invested: f64,
    pub wealth_gained: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SipParams {
    pub monthly_investment: f64,
    pub annual_return_pct: f64,
    pub years: u32,
    pub rate_convention: RateConvention,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SipResult {
    pub monthly_rate: f64,
    pub total_invested: f64,
    pub future_value: f64,
    pub wealth_gained: f64,
    pub yearly: Vec<SipYear>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SipYear {
    pub year: u32,
    pub invested: f64,
    pub value: f64,
    pub gained: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalParams {
    pub amount_today: f64,
    pub years: u32,
    pub inflation_pct: f64,
    pub expected_return_pct: f64,
    pub current_investment: f64,
    pub timing: PaymentTiming,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalResult {
    pub future_goal_value: f64,
    pub current_investment_future_value: f64,
    pub additional_amount_needed: f64,
    pub required_monthly_sip: f64,
    pub total_sip_contribution: f64,
    pub real_return_pct: f64,
    pub goal_covered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeLoanParams {
    pub mode: RecoveryMode,
    pub loan_amount: f64,
    pub loan_rate_pct: f64,
    pub tenure_years: u32,
    pub monthly_emi: f64,
    pub investment_return_pct: f64,
    pub step_up_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeLoanResult {
    pub mode: RecoveryMode,
    pub emi: f64,
    pub total_loan_payment: f64,
    pub total_interest: Option<f64>,
    pub target_amount: f64,
    pub investment_return_pct: f64,
    pub required_monthly_investment: f64,
    pub total_investment: f64,
    pub amortization: Vec<AmortizationYear>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationYear {
    pub year: u32,
    pub opening_balance: f64,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub closing_balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementParams {
    pub monthly_expense: f64,
    pub inflation_pct: f64,
    pub current_age: u32,
    pub retirement_age: u32,
    pub life_expectancy: u32,
    pub pre_retirement_return_pct: f64,
    pub post_retirement_return_pct: f64,
    pub current_wealth: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementResult {
    pub years_to_retirement: u32,
    pub retirement_years: u32,
    pub monthly_expense_at_retirement: f64,
    pub annual_expense_at_retirement: f64,
    pub corpus_needed: f64,
    pub current_wealth_future_value: f64,
    pub additional_corpus_needed: f64,
    pub required_monthly_sip: f64,
    pub is_sufficient: bool,
    pub surplus: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SipSwpParams {
    pub monthly_investment: f64,
    pub sip_years: u32,
    pub sip_return_pct: f64,
    pub withdrawal_years: u32,
    pub swp_return_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SipSwpResult {
    pub total_invested: f64,
    pub corpus: f64,
    pub wealth_gained: f64,
    pub monthly_withdrawal: f64,
    pub total_withdrawn: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwpParams {
    pub corpus: f64,
    pub monthly_withdrawal: f64,
    pub annual_return_pct: f64,
    pub years: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwpResult {
    pub total_withdrawn: f64,
    pub total_growth: f64,
    pub final_balance: f64,
    pub depleted_in_month: Option<u32>,
    pub yearly: Vec<SwpYear>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwpYear {
    pub year: u32,
    pub opening_balance: f64,
    pub withdrawn: f64,
    pub growth: f64,
    pub closing_balance: f64,
}
