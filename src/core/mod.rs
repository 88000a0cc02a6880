mod calculation;
mod engine;
mod error;
pub mod ranges;
mod rates;
mod types;
mod validation;

pub use calculation::{Calculation, CalculationOutput};
pub use engine::{
    MAX_SCHEDULE_YEARS, PRINCIPAL_ONLY_RETURN_PCT, amortization_schedule, future_wealth, goal_plan,
    home_loan_recovery, loan_emi, recovery_target, retirement_plan, sip, sip_future_value,
    sip_to_swp, sip_yearly_breakdown, swp_projection,
};
pub use error::{CalcError, CalcResult};
pub use rates::{effective_monthly_rate, growing_annuity_present_value, monthly_rate};
pub use types::{
    AmortizationYear, FutureWealthParams, FutureWealthResult, GoalParams, GoalResult,
    HomeLoanParams, HomeLoanResult, PaymentTiming, RateConvention, RecoveryMode,
    RetirementParams, RetirementResult, SipParams, SipResult, SipSwpParams, SipSwpResult,
    SipYear, SwpParams, SwpResult, SwpYear,
};
pub use validation::{
    FieldIssue, ValidationReport, validate_future_wealth, validate_goal, validate_home_loan,
    validate_retirement, validate_sip, validate_sip_swp, validate_swp,
};
