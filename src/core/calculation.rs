use serde::Serialize;

use super::engine::{
    future_wealth, goal_plan, home_loan_recovery, retirement_plan, sip, sip_to_swp,
    swp_projection,
};
use super::error::CalcResult;
use super::types::{
    FutureWealthParams, FutureWealthResult, GoalParams, GoalResult, HomeLoanParams,
    HomeLoanResult, RetirementParams, RetirementResult, SipParams, SipResult, SipSwpParams,
    SipSwpResult, SwpParams, SwpResult,
};
use super::validation::{
    ValidationReport, validate_future_wealth, validate_goal, validate_home_loan,
    validate_retirement, validate_sip, validate_sip_swp, validate_swp,
};

/// One calculator together with its parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Calculation {
    FutureWealth(FutureWealthParams),
    Sip(SipParams),
    Goal(GoalParams),
    HomeLoan(HomeLoanParams),
    Retirement(RetirementParams),
    SipSwp(SipSwpParams),
    Swp(SwpParams),
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CalculationOutput {
    FutureWealth(FutureWealthResult),
    Sip(SipResult),
    Goal(GoalResult),
    HomeLoan(HomeLoanResult),
    Retirement(RetirementResult),
    SipSwp(SipSwpResult),
    Swp(SwpResult),
}

impl Calculation {
    pub fn name(&self) -> &'static str {
        match self {
            Calculation::FutureWealth(_) => "future-wealth",
            Calculation::Sip(_) => "sip",
            Calculation::Goal(_) => "goal",
            Calculation::HomeLoan(_) => "home-loan",
            Calculation::Retirement(_) => "retirement",
            Calculation::SipSwp(_) => "sip-swp",
            Calculation::Swp(_) => "swp",
        }
    }

    pub fn validate(&self) -> ValidationReport {
        match self {
            Calculation::FutureWealth(p) => validate_future_wealth(p),
            Calculation::Sip(p) => validate_sip(p),
            Calculation::Goal(p) => validate_goal(p),
            Calculation::HomeLoan(p) => validate_home_loan(p),
            Calculation::Retirement(p) => validate_retirement(p),
            Calculation::SipSwp(p) => validate_sip_swp(p),
            Calculation::Swp(p) => validate_swp(p),
        }
    }

    /// Evaluates without validating. The math is total, so this never fails,
    /// but results for out-of-range inputs are not meaningful.
    pub fn evaluate(&self) -> CalculationOutput {
        match self {
            Calculation::FutureWealth(p) => CalculationOutput::FutureWealth(future_wealth(p)),
            Calculation::Sip(p) => CalculationOutput::Sip(sip(p)),
            Calculation::Goal(p) => CalculationOutput::Goal(goal_plan(p)),
            Calculation::HomeLoan(p) => CalculationOutput::HomeLoan(home_loan_recovery(p)),
            Calculation::Retirement(p) => CalculationOutput::Retirement(retirement_plan(p)),
            Calculation::SipSwp(p) => CalculationOutput::SipSwp(sip_to_swp(p)),
            Calculation::Swp(p) => CalculationOutput::Swp(swp_projection(p)),
        }
    }

    pub fn run(&self) -> CalcResult<CalculationOutput> {
        self.validate().into_result()?;
        Ok(self.evaluate())
    }
}
