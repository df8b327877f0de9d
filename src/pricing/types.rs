use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, ParseOptionTypeError, Parameter};

/// European option right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    #[default]
    Call,
    Put,
}

impl OptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = ParseOptionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(ParseOptionTypeError(s.to_string())),
        }
    }
}

/// Full parameter set for pricing a single European option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingInputs {
    /// Current price of the underlying (S)
    #[serde(default = "default_spot")]
    pub spot: f64,
    /// Strike price (K)
    #[serde(default = "default_strike")]
    pub strike: f64,
    /// Time to maturity in years (T)
    #[serde(default = "default_maturity")]
    pub maturity: f64,
    /// Continuously compounded annual risk-free rate (r)
    #[serde(default = "default_rate")]
    pub rate: f64,
    /// Annualised volatility of log-returns (σ)
    #[serde(default = "default_volatility")]
    pub volatility: f64,
    #[serde(default)]
    pub option_type: OptionType,
}

impl Default for PricingInputs {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            strike: default_strike(),
            maturity: default_maturity(),
            rate: default_rate(),
            volatility: default_volatility(),
            option_type: OptionType::default(),
        }
    }
}

impl PricingInputs {
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            option_type,
        }
    }

    /// Rejects any parameter for which the closed form is undefined.
    ///
    /// Parameters are checked in the order spot, strike, maturity, rate,
    /// volatility and the first offender is reported.
    pub fn validate(&self) -> Result<(), DomainError> {
        DomainError::check_positive(Parameter::Spot, self.spot)?;
        self.market().validate()
    }

    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    /// The parameters that stay fixed while the spot is swept.
    pub fn market(&self) -> MarketParams {
        MarketParams {
            strike: self.strike,
            maturity: self.maturity,
            rate: self.rate,
            volatility: self.volatility,
        }
    }
}

/// Contract and market parameters shared by every point of a spot sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketParams {
    pub strike: f64,
    pub maturity: f64,
    pub rate: f64,
    pub volatility: f64,
}

impl MarketParams {
    pub fn new(strike: f64, maturity: f64, rate: f64, volatility: f64) -> Self {
        Self {
            strike,
            maturity,
            rate,
            volatility,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        DomainError::check_positive(Parameter::Strike, self.strike)?;
        DomainError::check_positive(Parameter::Maturity, self.maturity)?;
        DomainError::check_finite(Parameter::Rate, self.rate)?;
        DomainError::check_positive(Parameter::Volatility, self.volatility)?;
        Ok(())
    }

    pub fn at_spot(&self, spot: f64, option_type: OptionType) -> PricingInputs {
        PricingInputs {
            spot,
            strike: self.strike,
            maturity: self.maturity,
            rate: self.rate,
            volatility: self.volatility,
            option_type,
        }
    }

    /// Strike discounted to today: K·e^(-rT)
    pub fn discounted_strike(&self) -> f64 {
        self.strike * (-self.rate * self.maturity).exp()
    }
}

/// Call and put prices for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub call: f64,
    pub put: f64,
}

impl PriceQuote {
    pub fn get(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call,
            OptionType::Put => self.put,
        }
    }

    /// Deviation from put-call parity, `(C - P) - (S - K·e^(-rT))`.
    pub fn parity_gap(&self, spot: f64, market: &MarketParams) -> f64 {
        (self.call - self.put) - (spot - market.discounted_strike())
    }
}

impl fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Call ${:.2} | Put ${:.2}", self.call, self.put)
    }
}

/// One element of a spot sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub spot: f64,
    pub call: f64,
    pub put: f64,
}

impl SweepPoint {
    pub fn quote(&self) -> PriceQuote {
        PriceQuote {
            call: self.call,
            put: self.put,
        }
    }
}

fn default_spot() -> f64 {
    100.0
}

fn default_strike() -> f64 {
    100.0
}

fn default_maturity() -> f64 {
    1.0
}

fn default_rate() -> f64 {
    0.05
}

fn default_volatility() -> f64 {
    0.2
}
