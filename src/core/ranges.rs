//! Accepted range and default for every calculator input.
//!
//! CLI defaults, API defaults and boundary validation all read these tables.

use serde::Serialize;

use super::error::CalcError;
use super::types::{
    FutureWealthParams, GoalParams, HomeLoanParams, PaymentTiming, RateConvention,
    RecoveryMode, RetirementParams, SipParams, SipSwpParams, SwpParams,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldRange {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl FieldRange {
    const fn new(field: &'static str, min: f64, max: f64, default: f64) -> Self {
        Self {
            field,
            min,
            max,
            default,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && (self.min..=self.max).contains(&value)
    }

    pub fn default_years(&self) -> u32 {
        self.default as u32
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RangeTable {
    pub calculator: &'static str,
    pub fields: &'static [FieldRange],
}

pub mod future_wealth {
    use super::FieldRange;

    pub const CURRENT_PORTFOLIO: FieldRange =
        FieldRange::new("currentPortfolio", 0.0, 1_000_000_000.0, 1_000_000.0);
    pub const ANNUAL_LUMP_SUM: FieldRange =
        FieldRange::new("annualLumpSum", 0.0, 100_000_000.0, 100_000.0);
    pub const MONTHLY_INVESTMENT: FieldRange =
        FieldRange::new("monthlyInvestment", 0.0, 10_000_000.0, 10_000.0);
    pub const ANNUAL_RETURN: FieldRange = FieldRange::new("annualReturnPct", 4.0, 20.0, 12.0);
    pub const YEARS: FieldRange = FieldRange::new("years", 1.0, 60.0, 20.0);

    pub const ALL: &[FieldRange] = &[
        CURRENT_PORTFOLIO,
        ANNUAL_LUMP_SUM,
        MONTHLY_INVESTMENT,
        ANNUAL_RETURN,
        YEARS,
    ];
}

pub mod sip {
    use super::FieldRange;

    pub const MONTHLY_INVESTMENT: FieldRange =
        FieldRange::new("monthlyInvestment", 100.0, 10_000_000.0, 5_000.0);
    pub const ANNUAL_RETURN: FieldRange = FieldRange::new("annualReturnPct", 4.0, 20.0, 12.0);
    pub const YEARS: FieldRange = FieldRange::new("years", 1.0, 60.0, 10.0);

    pub const ALL: &[FieldRange] = &[MONTHLY_INVESTMENT, ANNUAL_RETURN, YEARS];
}

pub mod goal {
    use super::FieldRange;

    pub const AMOUNT_TODAY: FieldRange =
        FieldRange::new("amountToday", 10_000.0, 1_000_000_000.0, 5_000_000.0);
    pub const YEARS: FieldRange = FieldRange::new("years", 1.0, 60.0, 15.0);
    pub const INFLATION: FieldRange = FieldRange::new("inflationPct", 0.0, 15.0, 7.0);
    pub const EXPECTED_RETURN: FieldRange =
        FieldRange::new("expectedReturnPct", 4.0, 20.0, 12.0);
    pub const CURRENT_INVESTMENT: FieldRange =
        FieldRange::new("currentInvestment", 0.0, 1_000_000_000.0, 500_000.0);

    pub const ALL: &[FieldRange] = &[
        AMOUNT_TODAY,
        YEARS,
        INFLATION,
        EXPECTED_RETURN,
        CURRENT_INVESTMENT,
    ];
}

pub mod home_loan {
    use super::FieldRange;

    pub const LOAN_AMOUNT: FieldRange =
        FieldRange::new("loanAmount", 100_000.0, 1_000_000_000.0, 3_000_000.0);
    pub const LOAN_RATE: FieldRange = FieldRange::new("loanRatePct", 1.0, 20.0, 9.0);
    pub const TENURE_YEARS: FieldRange = FieldRange::new("tenureYears", 1.0, 30.0, 20.0);
    pub const MONTHLY_EMI: FieldRange =
        FieldRange::new("monthlyEmi", 1_000.0, 10_000_000.0, 27_000.0);
    pub const INVESTMENT_RETURN: FieldRange =
        FieldRange::new("investmentReturnPct", 4.0, 20.0, 12.0);
    pub const STEP_UP: FieldRange = FieldRange::new("stepUpPct", 0.0, 20.0, 10.0);

    pub const ALL: &[FieldRange] = &[
        LOAN_AMOUNT,
        LOAN_RATE,
        TENURE_YEARS,
        MONTHLY_EMI,
        INVESTMENT_RETURN,
        STEP_UP,
    ];
}

pub mod retirement {
    use super::FieldRange;

    pub const MONTHLY_EXPENSE: FieldRange =
        FieldRange::new("monthlyExpense", 1_000.0, 10_000_000.0, 50_000.0);
    pub const INFLATION: FieldRange = FieldRange::new("inflationPct", 0.0, 15.0, 6.0);
    pub const CURRENT_AGE: FieldRange = FieldRange::new("currentAge", 18.0, 70.0, 30.0);
    pub const RETIREMENT_AGE: FieldRange = FieldRange::new("retirementAge", 30.0, 80.0, 60.0);
    pub const LIFE_EXPECTANCY: FieldRange =
        FieldRange::new("lifeExpectancy", 50.0, 100.0, 85.0);
    pub const PRE_RETIREMENT_RETURN: FieldRange =
        FieldRange::new("preRetirementReturnPct", 4.0, 20.0, 12.0);
    pub const POST_RETIREMENT_RETURN: FieldRange =
        FieldRange::new("postRetirementReturnPct", 4.0, 20.0, 8.0);
    pub const CURRENT_WEALTH: FieldRange =
        FieldRange::new("currentWealth", 0.0, 1_000_000_000.0, 1_000_000.0);

    pub const ALL: &[FieldRange] = &[
        MONTHLY_EXPENSE,
        INFLATION,
        CURRENT_AGE,
        RETIREMENT_AGE,
        LIFE_EXPECTANCY,
        PRE_RETIREMENT_RETURN,
        POST_RETIREMENT_RETURN,
        CURRENT_WEALTH,
    ];
}

pub mod sip_swp {
    use super::FieldRange;

    pub const MONTHLY_INVESTMENT: FieldRange =
        FieldRange::new("monthlyInvestment", 100.0, 10_000_000.0, 10_000.0);
    pub const SIP_YEARS: FieldRange = FieldRange::new("sipYears", 1.0, 40.0, 15.0);
    pub const SIP_RETURN: FieldRange = FieldRange::new("sipReturnPct", 4.0, 20.0, 12.0);
    pub const WITHDRAWAL_YEARS: FieldRange = FieldRange::new("withdrawalYears", 1.0, 40.0, 20.0);
    pub const SWP_RETURN: FieldRange = FieldRange::new("swpReturnPct", 4.0, 20.0, 8.0);

    pub const ALL: &[FieldRange] = &[
        MONTHLY_INVESTMENT,
        SIP_YEARS,
        SIP_RETURN,
        WITHDRAWAL_YEARS,
        SWP_RETURN,
    ];
}

pub mod swp {
    use super::FieldRange;

    pub const CORPUS: FieldRange =
        FieldRange::new("corpus", 10_000.0, 10_000_000_000.0, 5_000_000.0);
    pub const MONTHLY_WITHDRAWAL: FieldRange =
        FieldRange::new("monthlyWithdrawal", 100.0, 100_000_000.0, 30_000.0);
    pub const ANNUAL_RETURN: FieldRange = FieldRange::new("annualReturnPct", 4.0, 20.0, 8.0);
    pub const YEARS: FieldRange = FieldRange::new("years", 1.0, 40.0, 15.0);

    pub const ALL: &[FieldRange] = &[CORPUS, MONTHLY_WITHDRAWAL, ANNUAL_RETURN, YEARS];
}

pub const TABLES: &[RangeTable] = &[
    RangeTable {
        calculator: "future-wealth",
        fields: future_wealth::ALL,
    },
    RangeTable {
        calculator: "sip",
        fields: sip::ALL,
    },
    RangeTable {
        calculator: "goal",
        fields: goal::ALL,
    },
    RangeTable {
        calculator: "home-loan",
        fields: home_loan::ALL,
    },
    RangeTable {
        calculator: "retirement",
        fields: retirement::ALL,
    },
    RangeTable {
        calculator: "sip-swp",
        fields: sip_swp::ALL,
    },
    RangeTable {
        calculator: "swp",
        fields: swp::ALL,
    },
];

pub fn table(calculator: &str) -> Result<&'static RangeTable, CalcError> {
    TABLES
        .iter()
        .find(|t| t.calculator == calculator)
        .ok_or_else(|| CalcError::UnknownCalculator(calculator.to_string()))
}

pub fn default_future_wealth() -> FutureWealthParams {
    FutureWealthParams {
        current_portfolio: future_wealth::CURRENT_PORTFOLIO.default,
        annual_lump_sum: future_wealth::ANNUAL_LUMP_SUM.default,
        monthly_investment: future_wealth::MONTHLY_INVESTMENT.default,
        annual_return_pct: future_wealth::ANNUAL_RETURN.default,
        years: future_wealth::YEARS.default_years(),
    }
}

pub fn default_sip() -> SipParams {
    SipParams {
        monthly_investment: sip::MONTHLY_INVESTMENT.default,
        annual_return_pct: sip::ANNUAL_RETURN.default,
        years: sip::YEARS.default_years(),
        rate_convention: RateConvention::Effective,
    }
}

pub fn default_goal() -> GoalParams {
    GoalParams {
        amount_today: goal::AMOUNT_TODAY.default,
        years: goal::YEARS.default_years(),
        inflation_pct: goal::INFLATION.default,
        expected_return_pct: goal::EXPECTED_RETURN.default,
        current_investment: goal::CURRENT_INVESTMENT.default,
        timing: PaymentTiming::Beginning,
    }
}

pub fn default_home_loan() -> HomeLoanParams {
    HomeLoanParams {
        mode: RecoveryMode::EmiFromLoan,
        loan_amount: home_loan::LOAN_AMOUNT.default,
        loan_rate_pct: home_loan::LOAN_RATE.default,
        tenure_years: home_loan::TENURE_YEARS.default_years(),
        monthly_emi: home_loan::MONTHLY_EMI.default,
        investment_return_pct: home_loan::INVESTMENT_RETURN.default,
        step_up_pct: home_loan::STEP_UP.default,
    }
}

pub fn default_retirement() -> RetirementParams {
    RetirementParams {
        monthly_expense: retirement::MONTHLY_EXPENSE.default,
        inflation_pct: retirement::INFLATION.default,
        current_age: retirement::CURRENT_AGE.default_years(),
        retirement_age: retirement::RETIREMENT_AGE.default_years(),
        life_expectancy: retirement::LIFE_EXPECTANCY.default_years(),
        pre_retirement_return_pct: retirement::PRE_RETIREMENT_RETURN.default,
        post_retirement_return_pct: retirement::POST_RETIREMENT_RETURN.default,
        current_wealth: retirement::CURRENT_WEALTH.default,
    }
}

pub fn default_sip_swp() -> SipSwpParams {
    SipSwpParams {
        monthly_investment: sip_swp::MONTHLY_INVESTMENT.default,
        sip_years: sip_swp::SIP_YEARS.default_years(),
        sip_return_pct: sip_swp::SIP_RETURN.default,
        withdrawal_years: sip_swp::WITHDRAWAL_YEARS.default_years(),
        swp_return_pct: sip_swp::SWP_RETURN.default,
    }
}

pub fn default_swp() -> SwpParams {
    SwpParams {
        corpus: swp::CORPUS.default,
        monthly_withdrawal: swp::MONTHLY_WITHDRAWAL.default,
        annual_return_pct: swp::ANNUAL_RETURN.default,
        years: swp::YEARS.default_years(),
    }
}
