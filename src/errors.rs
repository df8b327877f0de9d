use std::fmt;

/// Pricing parameter named in a [`DomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Spot,
    Strike,
    Maturity,
    Rate,
    Volatility,
    /// Valid inputs whose combination overflows an intermediate term
    Evaluation,
}

impl Parameter {
    fn requirement(&self) -> &'static str {
        match self {
            Parameter::Rate => "must be finite",
            Parameter::Evaluation => "inputs overflow the closed form",
            _ => "must be finite and strictly positive",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Spot => "spot",
            Parameter::Strike => "strike",
            Parameter::Maturity => "maturity",
            Parameter::Rate => "rate",
            Parameter::Volatility => "volatility",
            Parameter::Evaluation => "evaluation",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for which the closed-form price is not defined.
///
/// Raised when spot, strike, maturity or volatility is not strictly positive,
/// or when any parameter (the rate included) is NaN or infinite. Inputs that
/// are individually valid but overflow an intermediate term (for example
/// `K·e^(-rT)` with a large negative `rT`) are reported as
/// [`Parameter::Evaluation`]. A NaN or infinite price is never returned.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("domain error: {parameter} = {value} ({})", .parameter.requirement())]
pub struct DomainError {
    pub parameter: Parameter,
    pub value: f64,
}

impl DomainError {
    pub fn new(parameter: Parameter, value: f64) -> Self {
        Self { parameter, value }
    }

    /// Checks that `value` is finite and strictly positive.
    pub(crate) fn check_positive(parameter: Parameter, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::new(parameter, value))
        }
    }

    pub(crate) fn check_finite(parameter: Parameter, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::new(parameter, value))
        }
    }
}

/// Returned when a string is neither `call` nor `put`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid option type: {0:?} (expected \"call\" or \"put\")")]
pub struct ParseOptionTypeError(pub String);
