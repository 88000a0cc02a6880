use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use crate::core::{
    CalcError, Calculation, FutureWealthParams, GoalParams, HomeLoanParams, PaymentTiming,
    RateConvention, RecoveryMode, RetirementParams, SipParams, SipSwpParams, SwpParams, ranges,
};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "fincalc",
    about = "Financial planning calculators: SIP, SWP, goals, retirement and home-loan recovery"
)]
pub struct Cli {
    #[arg(long, short, global = true, help = "Enable debug logging")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the calculators as a JSON HTTP API
    Serve(ServeArgs),
    /// Print accepted input ranges and defaults
    Ranges(RangesArgs),
    #[command(flatten)]
    Calc(CalcCommand),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[arg(long, env = "FINCALC_PORT", default_value_t = 8080)]
    pub port: u16,
}

#[derive(Args, Debug)]
pub struct RangesArgs {
    #[arg(help = "Calculator name, e.g. sip or home-loan; all when omitted")]
    pub calculator: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum CalcCommand {
    /// Future value of a portfolio plus yearly and monthly contributions
    FutureWealth(FutureWealthArgs),
    /// Future value of a monthly SIP
    Sip(SipArgs),
    /// Monthly SIP needed for an inflation-adjusted goal
    Goal(GoalArgs),
    /// Monthly investment that recovers the cost of a home loan
    HomeLoan(HomeLoanArgs),
    /// Corpus and monthly SIP needed for retirement
    Retirement(RetirementArgs),
    /// SIP accumulation followed by a level monthly withdrawal
    SipSwp(SipSwpArgs),
    /// Month-by-month projection of a fixed withdrawal plan
    Swp(SwpArgs),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliRecoveryMode {
    EmiFromLoan,
    EmiFromMonthly,
    PrincipalOnly,
    InterestOnly,
}

impl From<CliRecoveryMode> for RecoveryMode {
    fn from(value: CliRecoveryMode) -> Self {
        match value {
            CliRecoveryMode::EmiFromLoan => RecoveryMode::EmiFromLoan,
            CliRecoveryMode::EmiFromMonthly => RecoveryMode::EmiFromMonthly,
            CliRecoveryMode::PrincipalOnly => RecoveryMode::PrincipalOnly,
            CliRecoveryMode::InterestOnly => RecoveryMode::InterestOnly,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliPaymentTiming {
    Beginning,
    End,
}

impl From<CliPaymentTiming> for PaymentTiming {
    fn from(value: CliPaymentTiming) -> Self {
        match value {
            CliPaymentTiming::Beginning => PaymentTiming::Beginning,
            CliPaymentTiming::End => PaymentTiming::End,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliRateConvention {
    Effective,
    Nominal,
}

impl From<CliRateConvention> for RateConvention {
    fn from(value: CliRateConvention) -> Self {
        match value {
            CliRateConvention::Effective => RateConvention::Effective,
            CliRateConvention::Nominal => RateConvention::Nominal,
        }
    }
}

#[derive(Args, Debug)]
pub struct FutureWealthArgs {
    #[arg(long, default_value_t = ranges::future_wealth::CURRENT_PORTFOLIO.default)]
    current_portfolio: f64,
    #[arg(
        long,
        default_value_t = ranges::future_wealth::ANNUAL_LUMP_SUM.default,
        help = "Lump sum added at the start of every year"
    )]
    annual_lump_sum: f64,
    #[arg(long, default_value_t = ranges::future_wealth::MONTHLY_INVESTMENT.default)]
    monthly_investment: f64,
    #[arg(
        long,
        default_value_t = ranges::future_wealth::ANNUAL_RETURN.default,
        help = "Expected annual return in percent, e.g. 12"
    )]
    annual_return_pct: f64,
    #[arg(long, default_value_t = ranges::future_wealth::YEARS.default_years())]
    years: u32,
}

impl From<FutureWealthArgs> for FutureWealthParams {
    fn from(args: FutureWealthArgs) -> Self {
        Self {
            current_portfolio: args.current_portfolio,
            annual_lump_sum: args.annual_lump_sum,
            monthly_investment: args.monthly_investment,
            annual_return_pct: args.annual_return_pct,
            years: args.years,
        }
    }
}

#[derive(Args, Debug)]
pub struct SipArgs {
    #[arg(long, default_value_t = ranges::sip::MONTHLY_INVESTMENT.default)]
    monthly_investment: f64,
    #[arg(
        long,
        default_value_t = ranges::sip::ANNUAL_RETURN.default,
        help = "Expected annual return in percent, e.g. 12"
    )]
    annual_return_pct: f64,
    #[arg(long, default_value_t = ranges::sip::YEARS.default_years())]
    years: u32,
    #[arg(
        long,
        value_enum,
        default_value_t = CliRateConvention::Effective,
        help = "Monthly rate: effective (1+r)^(1/12)-1 or nominal r/12"
    )]
    rate_convention: CliRateConvention,
}

impl From<SipArgs> for SipParams {
    fn from(args: SipArgs) -> Self {
        Self {
            monthly_investment: args.monthly_investment,
            annual_return_pct: args.annual_return_pct,
            years: args.years,
            rate_convention: args.rate_convention.into(),
        }
    }
}

#[derive(Args, Debug)]
pub struct GoalArgs {
    #[arg(
        long,
        default_value_t = ranges::goal::AMOUNT_TODAY.default,
        help = "Cost of the goal in today's money"
    )]
    amount_today: f64,
    #[arg(long, default_value_t = ranges::goal::YEARS.default_years())]
    years: u32,
    #[arg(long, default_value_t = ranges::goal::INFLATION.default)]
    inflation_pct: f64,
    #[arg(long, default_value_t = ranges::goal::EXPECTED_RETURN.default)]
    expected_return_pct: f64,
    #[arg(long, default_value_t = ranges::goal::CURRENT_INVESTMENT.default)]
    current_investment: f64,
    #[arg(long, value_enum, default_value_t = CliPaymentTiming::Beginning)]
    timing: CliPaymentTiming,
}

impl From<GoalArgs> for GoalParams {
    fn from(args: GoalArgs) -> Self {
        Self {
            amount_today: args.amount_today,
            years: args.years,
            inflation_pct: args.inflation_pct,
            expected_return_pct: args.expected_return_pct,
            current_investment: args.current_investment,
            timing: args.timing.into(),
        }
    }
}

#[derive(Args, Debug)]
pub struct HomeLoanArgs {
    #[arg(long, value_enum, default_value_t = CliRecoveryMode::EmiFromLoan)]
    mode: CliRecoveryMode,
    #[arg(long, default_value_t = ranges::home_loan::LOAN_AMOUNT.default)]
    loan_amount: f64,
    #[arg(long, default_value_t = ranges::home_loan::LOAN_RATE.default)]
    loan_rate_pct: f64,
    #[arg(long, default_value_t = ranges::home_loan::TENURE_YEARS.default_years())]
    tenure_years: u32,
    #[arg(
        long,
        default_value_t = ranges::home_loan::MONTHLY_EMI.default,
        help = "Monthly EMI, used by --mode emi-from-monthly"
    )]
    monthly_emi: f64,
    #[arg(
        long,
        default_value_t = ranges::home_loan::INVESTMENT_RETURN.default,
        help = "Investment return in percent; ignored by --mode principal-only"
    )]
    investment_return_pct: f64,
    #[arg(
        long,
        default_value_t = ranges::home_loan::STEP_UP.default,
        help = "Yearly increase of the monthly investment in percent"
    )]
    step_up_pct: f64,
}

impl From<HomeLoanArgs> for HomeLoanParams {
    fn from(args: HomeLoanArgs) -> Self {
        Self {
            mode: args.mode.into(),
            loan_amount: args.loan_amount,
            loan_rate_pct: args.loan_rate_pct,
            tenure_years: args.tenure_years,
            monthly_emi: args.monthly_emi,
            investment_return_pct: args.investment_return_pct,
            step_up_pct: args.step_up_pct,
        }
    }
}

#[derive(Args, Debug)]
pub struct RetirementArgs {
    #[arg(
        long,
        default_value_t = ranges::retirement::MONTHLY_EXPENSE.default,
        help = "Current monthly expense in today's money"
    )]
    monthly_expense: f64,
    #[arg(long, default_value_t = ranges::retirement::INFLATION.default)]
    inflation_pct: f64,
    #[arg(long, default_value_t = ranges::retirement::CURRENT_AGE.default_years())]
    current_age: u32,
    #[arg(long, default_value_t = ranges::retirement::RETIREMENT_AGE.default_years())]
    retirement_age: u32,
    #[arg(long, default_value_t = ranges::retirement::LIFE_EXPECTANCY.default_years())]
    life_expectancy: u32,
    #[arg(long, default_value_t = ranges::retirement::PRE_RETIREMENT_RETURN.default)]
    pre_retirement_return_pct: f64,
    #[arg(long, default_value_t = ranges::retirement::POST_RETIREMENT_RETURN.default)]
    post_retirement_return_pct: f64,
    #[arg(long, default_value_t = ranges::retirement::CURRENT_WEALTH.default)]
    current_wealth: f64,
}

impl From<RetirementArgs> for RetirementParams {
    fn from(args: RetirementArgs) -> Self {
        Self {
            monthly_expense: args.monthly_expense,
            inflation_pct: args.inflation_pct,
            current_age: args.current_age,
            retirement_age: args.retirement_age,
            life_expectancy: args.life_expectancy,
            pre_retirement_return_pct: args.pre_retirement_return_pct,
            post_retirement_return_pct: args.post_retirement_return_pct,
            current_wealth: args.current_wealth,
        }
    }
}

#[derive(Args, Debug)]
pub struct SipSwpArgs {
    #[arg(long, default_value_t = ranges::sip_swp::MONTHLY_INVESTMENT.default)]
    monthly_investment: f64,
    #[arg(long, default_value_t = ranges::sip_swp::SIP_YEARS.default_years())]
    sip_years: u32,
    #[arg(long, default_value_t = ranges::sip_swp::SIP_RETURN.default)]
    sip_return_pct: f64,
    #[arg(long, default_value_t = ranges::sip_swp::WITHDRAWAL_YEARS.default_years())]
    withdrawal_years: u32,
    #[arg(long, default_value_t = ranges::sip_swp::SWP_RETURN.default)]
    swp_return_pct: f64,
}

impl From<SipSwpArgs> for SipSwpParams {
    fn from(args: SipSwpArgs) -> Self {
        Self {
            monthly_investment: args.monthly_investment,
            sip_years: args.sip_years,
            sip_return_pct: args.sip_return_pct,
            withdrawal_years: args.withdrawal_years,
            swp_return_pct: args.swp_return_pct,
        }
    }
}

#[derive(Args, Debug)]
pub struct SwpArgs {
    #[arg(long, default_value_t = ranges::swp::CORPUS.default)]
    corpus: f64,
    #[arg(long, default_value_t = ranges::swp::MONTHLY_WITHDRAWAL.default)]
    monthly_withdrawal: f64,
    #[arg(long, default_value_t = ranges::swp::ANNUAL_RETURN.default)]
    annual_return_pct: f64,
    #[arg(long, default_value_t = ranges::swp::YEARS.default_years())]
    years: u32,
}

impl From<SwpArgs> for SwpParams {
    fn from(args: SwpArgs) -> Self {
        Self {
            corpus: args.corpus,
            monthly_withdrawal: args.monthly_withdrawal,
            annual_return_pct: args.annual_return_pct,
            years: args.years,
        }
    }
}

impl From<CalcCommand> for Calculation {
    fn from(command: CalcCommand) -> Self {
        match command {
            CalcCommand::FutureWealth(args) => Calculation::FutureWealth(args.into()),
            CalcCommand::Sip(args) => Calculation::Sip(args.into()),
            CalcCommand::Goal(args) => Calculation::Goal(args.into()),
            CalcCommand::HomeLoan(args) => Calculation::HomeLoan(args.into()),
            CalcCommand::Retirement(args) => Calculation::Retirement(args.into()),
            CalcCommand::SipSwp(args) => Calculation::SipSwp(args.into()),
            CalcCommand::Swp(args) => Calculation::Swp(args.into()),
        }
    }
}

/// Validates and evaluates the calculator, returning pretty JSON.
pub fn render_calculation(command: CalcCommand) -> Result<String, CliError> {
    let calculation = Calculation::from(command);
    tracing::debug!(calculator = calculation.name(), ?calculation, "running calculator");
    let output = calculation.run()?;
    Ok(serde_json::to_string_pretty(&output)?)
}

pub fn render_ranges(args: RangesArgs) -> Result<String, CliError> {
    let json = match args.calculator {
        Some(name) => serde_json::to_string_pretty(ranges::table(&name)?)?,
        None => serde_json::to_string_pretty(ranges::TABLES)?,
    };
    Ok(json)
}
